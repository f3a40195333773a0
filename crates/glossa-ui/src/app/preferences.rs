//! Persistence and environment helpers for the app shell.

use crate::core::config::{RawSettings, UiSettings};
use crate::core::error::ConfigError;
use crate::core::store::SignedInUser;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const SESSION_USER_KEY: &str = "glossa.session.user";
pub(crate) const SESSION_ICON_KEY: &str = "glossa.session.icon";

pub(crate) fn load_settings() -> Result<UiSettings, ConfigError> {
    let raw = RawSettings {
        client_id: option_env!("GLOSSA_GITHUB_CLIENT_ID").map(str::to_string),
        redirect_uri: option_env!("GLOSSA_GITHUB_REDIRECT_URI").map(str::to_string),
        scope: option_env!("GLOSSA_GITHUB_SCOPE").map(str::to_string),
        demo: option_env!("GLOSSA_DEMO").map(str::to_string),
        public_url: option_env!("GLOSSA_PUBLIC_URL").map(str::to_string),
    };
    UiSettings::from_raw(raw, &format!("{}/callback", page_origin()))
}

pub(crate) fn api_base_url() -> String {
    option_env!("GLOSSA_API_BASE_URL")
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(page_origin)
}

fn page_origin() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

pub(crate) fn load_session() -> Option<SignedInUser> {
    let user_name = LocalStorage::get::<String>(SESSION_USER_KEY).ok()?;
    if user_name.trim().is_empty() {
        return None;
    }
    let icon_url = LocalStorage::get::<String>(SESSION_ICON_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty());
    Some(SignedInUser {
        user_name,
        icon_url,
    })
}

pub(crate) fn persist_session(user: &SignedInUser) {
    set_storage(SESSION_USER_KEY, &user.user_name);
    match &user.icon_url {
        Some(icon_url) => set_storage(SESSION_ICON_KEY, icon_url),
        None => LocalStorage::delete(SESSION_ICON_KEY),
    }
}

pub(crate) fn clear_session() {
    LocalStorage::delete(SESSION_USER_KEY);
    LocalStorage::delete(SESSION_ICON_KEY);
}

fn set_storage(key: &'static str, value: &str) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", key, err.to_string());
    }
}
