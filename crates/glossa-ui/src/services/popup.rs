//! Browser popup collaborator for the sign-in flow.
//!
//! # Design
//! - Open the authorize URL in a named window and poll it on a fixed interval.
//! - Reading `location` throws while the popup shows the provider's origin;
//!   those polls are skipped until the redirect lands back on our origin.
//! - Stop polling and close the popup as soon as nobody awaits the result.

use crate::core::error::SignInError;
use crate::core::oauth::{OpenerGeometry, PopupRequest, PopupResult};
use crate::core::signin::{PopupHandle, PopupOpener, PopupSettler, popup_channel};
use gloo::console;
use gloo::utils::window;
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

const POLL_INTERVAL_MS: u32 = 500;

/// Opens sign-in popups with `window.open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserPopupOpener;

impl PopupOpener for BrowserPopupOpener {
    fn open(&self, request: &PopupRequest) -> Result<PopupHandle, SignInError> {
        let opener = window();
        let features = opener_geometry(&opener)
            .map_or(request.features, |geometry| {
                request.features.centered_on(geometry)
            });
        let popup = opener
            .open_with_url_and_target_and_features(
                &request.url,
                &request.name,
                &features.to_string(),
            )
            .map_err(|err| browser_error("window.open", &err))?
            .ok_or(SignInError::PopupBlocked)?;
        let (settler, handle) = popup_channel();
        yew::platform::spawn_local(watch_popup(popup, request.url.clone(), settler));
        Ok(handle)
    }
}

async fn watch_popup(popup: Window, authorize_url: String, settler: PopupSettler) {
    loop {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        if settler.is_abandoned() {
            close_popup(&popup);
            return;
        }
        if popup.closed().unwrap_or(true) {
            settler.reject(SignInError::PopupClosed);
            return;
        }
        if let Some(search) = redirect_search(&popup, &authorize_url) {
            close_popup(&popup);
            settler.resolve(PopupResult::from_query(&search));
            return;
        }
    }
}

fn redirect_search(popup: &Window, authorize_url: &str) -> Option<String> {
    let location = popup.location();
    let href = location.href().ok()?;
    if href == authorize_url || href == "about:blank" {
        return None;
    }
    location.search().ok()
}

fn close_popup(popup: &Window) {
    if let Err(err) = popup.close() {
        console::error!("sign-in popup close failed", err);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn opener_geometry(opener: &Window) -> Option<OpenerGeometry> {
    let read = |name: &str| -> Option<i32> {
        Reflect::get(opener, &JsValue::from_str(name))
            .ok()?
            .as_f64()
            .filter(|value| value.is_finite())
            .map(|value| value as i32)
    };
    Some(OpenerGeometry {
        screen_x: read("screenX")?,
        screen_y: read("screenY")?,
        outer_width: read("outerWidth")?,
        outer_height: read("outerHeight")?,
    })
}

fn browser_error(operation: &'static str, err: &JsValue) -> SignInError {
    SignInError::Browser {
        operation,
        detail: format!("{err:?}"),
    }
}
