//! "Sign in with GitHub" button.

use crate::core::error::SignInError;
use crate::core::signin::{SignInAttempt, SignInFlow, SignInStrategy, SignInSuccess};
use crate::features::session::attempts::PendingAttempts;
use crate::features::session::handler::{CallbackHandler, SIGN_IN_LABEL};
use crate::services::popup::BrowserPopupOpener;
use futures::future::abortable;
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginButtonProps {
    pub strategy: SignInStrategy,
    #[prop_or_default]
    pub on_request: Callback<()>,
    #[prop_or_default]
    pub on_success: Callback<SignInSuccess>,
    #[prop_or_default]
    pub on_failure: Callback<SignInError>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LoginButton)]
pub(crate) fn login_button(props: &LoginButtonProps) -> Html {
    let flow = use_memo(
        |strategy: &SignInStrategy| SignInFlow::new(strategy.clone()),
        props.strategy.clone(),
    );
    let pending = use_mut_ref(PendingAttempts::default);
    let rerender = use_force_update();

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| move || pending.borrow_mut().abort_all(),
            (),
        );
    }

    let handler = CallbackHandler {
        on_request: props.on_request.clone(),
        on_success: props.on_success.clone(),
        on_failure: props.on_failure.clone(),
    };

    let onclick = {
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            match flow.initiate(&BrowserPopupOpener, &handler) {
                SignInAttempt::Finished(outcome) => {
                    console::log!("sign-in attempt finished", format!("{outcome:?}"));
                }
                SignInAttempt::Pending(attempt) => {
                    let handler = handler.clone();
                    let (task, abort) = abortable(async move { attempt.finish(&handler).await });
                    let id = pending.borrow_mut().register(abort);
                    rerender.force_update();
                    let pending = pending.clone();
                    let rerender = rerender.clone();
                    spawn_local(async move {
                        if let Ok(outcome) = task.await {
                            console::log!("sign-in attempt finished", format!("{outcome:?}"));
                            pending.borrow_mut().finish(id);
                            rerender.force_update();
                        }
                    });
                }
            }
        })
    };

    let requesting = !pending.borrow().is_empty();
    html! {
        <button
            type="button"
            class={classes!("btn", "github-login", props.class.clone())}
            aria-busy={requesting.to_string()}
            {onclick}
        >
            {github_icon()}
            <span>{SIGN_IN_LABEL}</span>
        </button>
    }
}

fn github_icon() -> Html {
    html! {
        <svg class="icon github-svg" viewBox="0 0 16 16" width="24" height="24" aria-hidden="true" fill="currentColor">
            <path d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.77.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z" />
        </svg>
    }
}
