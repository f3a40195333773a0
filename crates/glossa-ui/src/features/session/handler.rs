//! Yew callback adapter for sign-in side effects.

use crate::core::error::SignInError;
use crate::core::signin::{SignInHandler, SignInSuccess};
use yew::Callback;

/// Label rendered on the sign-in button.
pub const SIGN_IN_LABEL: &str = "Sign in with GitHub";

/// Forwards sign-in events to component callbacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackHandler {
    /// Fired once per click after the popup opens.
    pub on_request: Callback<()>,
    /// Fired when an attempt succeeds.
    pub on_success: Callback<SignInSuccess>,
    /// Fired when an attempt fails.
    pub on_failure: Callback<SignInError>,
}

impl SignInHandler for CallbackHandler {
    fn on_request(&self) {
        self.on_request.emit(());
    }

    fn on_success(&self, success: SignInSuccess) {
        self.on_success.emit(success);
    }

    fn on_failure(&self, error: SignInError) {
        self.on_failure.emit(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_receive_events() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let handler = CallbackHandler {
            on_request: {
                let log = log.clone();
                Callback::from(move |()| log.borrow_mut().push("request".into()))
            },
            on_success: {
                let log = log.clone();
                Callback::from(move |success: SignInSuccess| {
                    log.borrow_mut()
                        .push(format!("success:{}", success.user_name.unwrap_or_default()));
                })
            },
            on_failure: {
                let log = log.clone();
                Callback::from(move |error: SignInError| {
                    log.borrow_mut().push(format!("failure:{error}"));
                })
            },
        };

        SignInHandler::on_request(&handler);
        SignInHandler::on_success(&handler, SignInSuccess::default());
        SignInHandler::on_failure(&handler, SignInError::CodeNotFound);

        assert_eq!(
            *log.borrow(),
            vec![
                "request".to_string(),
                "success:".to_string(),
                "failure:'code' not found".to_string(),
            ]
        );
    }

    #[test]
    fn default_handler_is_a_no_op() {
        let handler = CallbackHandler::default();
        SignInHandler::on_request(&handler);
        SignInHandler::on_failure(&handler, SignInError::PopupClosed);
    }
}
