//! Popup-based GitHub sign-in flow.
//!
//! # Design
//! - The strategy (live popup vs. demo stub) is chosen once and injected.
//! - The popup result travels over a one-shot channel settled exactly once;
//!   dropping the settler counts as the popup being closed.
//! - `on_request` fires synchronously on click, before the result can settle.
//! - Attempts are independent: nothing prevents a second click from starting
//!   another attempt while one is pending.

use crate::core::error::{SignInError, SignInResult};
use crate::core::oauth::{OAuthConfig, PopupRequest, PopupResult};
use futures::channel::oneshot;

/// Lifecycle of a single sign-in attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SignInPhase {
    /// No attempt in flight.
    #[default]
    Idle,
    /// Popup open, waiting for the provider redirect.
    Requesting,
    /// Attempt completed successfully.
    Succeeded,
    /// Attempt failed.
    Failed,
}

impl SignInPhase {
    /// Whether the phase ends an attempt.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Payload forwarded to `on_success`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInSuccess {
    /// Display name of the signed-in user, when known.
    pub user_name: Option<String>,
    /// Avatar URL of the signed-in user, when known.
    pub icon_url: Option<String>,
}

/// Canned identity reported by the demo strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoProfile {
    /// Display name reported on success.
    pub user_name: String,
    /// Avatar URL reported on success.
    pub icon_url: String,
}

impl DemoProfile {
    /// Default demo identity with an avatar served from `public_url`.
    #[must_use]
    pub fn for_public_url(public_url: &str) -> Self {
        Self {
            user_name: "Demo User".to_string(),
            icon_url: format!("{public_url}photo.jpg"),
        }
    }
}

/// How a click is handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInStrategy {
    /// Open the provider popup and wait for its redirect.
    Live(OAuthConfig),
    /// Skip the provider and report the canned identity immediately.
    Demo(DemoProfile),
}

/// Receiver of sign-in side effects.
pub trait SignInHandler {
    /// Called once per click, right after the popup is opened.
    fn on_request(&self);
    /// Called once when an attempt succeeds.
    fn on_success(&self, success: SignInSuccess);
    /// Called once when an attempt fails.
    fn on_failure(&self, error: SignInError);
}

/// Opens the provider popup and hands back its pending result.
pub trait PopupOpener {
    /// Open the popup described by `request`.
    ///
    /// # Errors
    /// Returns an error when the browser refuses to open the window.
    fn open(&self, request: &PopupRequest) -> SignInResult<PopupHandle>;
}

/// Create a connected settler/handle pair for one popup.
#[must_use]
pub fn popup_channel() -> (PopupSettler, PopupHandle) {
    let (sender, receiver) = oneshot::channel();
    (PopupSettler { sender }, PopupHandle { receiver })
}

/// Write side of a popup result; consumed when settled.
#[derive(Debug)]
pub struct PopupSettler {
    sender: oneshot::Sender<SignInResult<PopupResult>>,
}

impl PopupSettler {
    /// Fulfil the attempt with the redirect parameters.
    pub fn resolve(self, result: PopupResult) {
        self.settle(Ok(result));
    }

    /// Reject the attempt with a collaborator error.
    pub fn reject(self, error: SignInError) {
        self.settle(Err(error));
    }

    /// Settle with a prepared outcome.
    pub fn settle(self, outcome: SignInResult<PopupResult>) {
        // A dropped receiver means nobody is waiting any more.
        let _ = self.sender.send(outcome);
    }

    /// Whether the waiting side has gone away.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_canceled()
    }
}

/// Read side of a popup result.
#[derive(Debug)]
pub struct PopupHandle {
    receiver: oneshot::Receiver<SignInResult<PopupResult>>,
}

impl PopupHandle {
    /// Wait for the popup to settle.
    ///
    /// # Errors
    /// Returns the collaborator's error, or [`SignInError::PopupClosed`]
    /// when the settler was dropped without settling.
    pub async fn settled(self) -> SignInResult<PopupResult> {
        self.receiver
            .await
            .unwrap_or(Err(SignInError::PopupClosed))
    }
}

/// Map a settled popup outcome to the caller-facing result.
///
/// The authorization code is deliberately not forwarded; success carries an
/// empty payload.
///
/// # Errors
/// Returns [`SignInError::CodeNotFound`] when the redirect had no code, or
/// the popup error unchanged.
pub fn resolve(outcome: SignInResult<PopupResult>) -> SignInResult<SignInSuccess> {
    let result = outcome?;
    if result.code.is_none() {
        return Err(SignInError::CodeNotFound);
    }
    Ok(SignInSuccess::default())
}

/// Outcome of a click.
#[derive(Debug)]
pub enum SignInAttempt {
    /// The attempt already ended and the handler has been notified.
    Finished(SignInPhase),
    /// The popup is open; await [`PendingSignIn::finish`].
    Pending(PendingSignIn),
}

impl SignInAttempt {
    /// Phase right after the click.
    #[must_use]
    pub const fn phase(&self) -> SignInPhase {
        match self {
            Self::Finished(phase) => *phase,
            Self::Pending(_) => SignInPhase::Requesting,
        }
    }
}

/// An attempt waiting for its popup.
#[derive(Debug)]
pub struct PendingSignIn {
    handle: PopupHandle,
}

impl PendingSignIn {
    /// Wait for the popup and notify `handler` exactly once.
    pub async fn finish<H: SignInHandler + ?Sized>(self, handler: &H) -> SignInPhase {
        let outcome = resolve(self.handle.settled().await);
        notify(handler, outcome)
    }
}

fn notify<H: SignInHandler + ?Sized>(
    handler: &H,
    outcome: SignInResult<SignInSuccess>,
) -> SignInPhase {
    match outcome {
        Ok(success) => {
            handler.on_success(success);
            SignInPhase::Succeeded
        }
        Err(error) => {
            handler.on_failure(error);
            SignInPhase::Failed
        }
    }
}

/// Sign-in controller bound to one strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInFlow {
    strategy: SignInStrategy,
}

impl SignInFlow {
    /// Bind the flow to a strategy.
    #[must_use]
    pub const fn new(strategy: SignInStrategy) -> Self {
        Self { strategy }
    }

    /// Strategy backing this flow.
    #[must_use]
    pub const fn strategy(&self) -> &SignInStrategy {
        &self.strategy
    }

    /// Handle a click on the sign-in button.
    ///
    /// The live strategy opens the popup, then calls `on_request`; a popup
    /// that cannot be opened fails the attempt immediately. The demo strategy
    /// reports its canned identity without opening anything.
    pub fn initiate<O, H>(&self, opener: &O, handler: &H) -> SignInAttempt
    where
        O: PopupOpener + ?Sized,
        H: SignInHandler + ?Sized,
    {
        match &self.strategy {
            SignInStrategy::Demo(profile) => {
                handler.on_success(SignInSuccess {
                    user_name: Some(profile.user_name.clone()),
                    icon_url: Some(profile.icon_url.clone()),
                });
                SignInAttempt::Finished(SignInPhase::Succeeded)
            }
            SignInStrategy::Live(config) => {
                let opened = opener.open(&config.popup_request());
                handler.on_request();
                match opened {
                    Ok(handle) => SignInAttempt::Pending(PendingSignIn { handle }),
                    Err(error) => SignInAttempt::Finished(notify(handler, Err(error))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn resolve_requires_code() {
        assert_eq!(
            resolve(Ok(PopupResult::default())),
            Err(SignInError::CodeNotFound)
        );
        assert_eq!(
            resolve(Ok(PopupResult::with_code("xyz"))),
            Ok(SignInSuccess::default())
        );
    }

    #[test]
    fn resolve_passes_errors_through() {
        let error = SignInError::Browser {
            operation: "location",
            detail: "boom".to_string(),
        };
        assert_eq!(resolve(Err(error.clone())), Err(error));
    }

    #[test]
    fn provider_error_without_code_is_code_not_found() {
        let denied = PopupResult::from_query("error=access_denied");
        assert_eq!(resolve(Ok(denied)), Err(SignInError::CodeNotFound));
    }

    #[test]
    fn dropped_settler_reads_as_closed() {
        let (settler, handle) = popup_channel();
        drop(settler);
        assert_eq!(block_on(handle.settled()), Err(SignInError::PopupClosed));
    }

    #[test]
    fn settler_notices_abandoned_handle() {
        let (settler, handle) = popup_channel();
        assert!(!settler.is_abandoned());
        drop(handle);
        assert!(settler.is_abandoned());
        settler.resolve(PopupResult::with_code("late"));
    }

    #[test]
    fn demo_profile_builds_icon_from_public_url() {
        let profile = DemoProfile::for_public_url("/static/");
        assert_eq!(profile.user_name, "Demo User");
        assert_eq!(profile.icon_url, "/static/photo.jpg");
    }

    #[test]
    fn terminal_phases() {
        assert!(SignInPhase::Succeeded.is_terminal());
        assert!(SignInPhase::Failed.is_terminal());
        assert!(!SignInPhase::Requesting.is_terminal());
        assert_eq!(SignInPhase::default(), SignInPhase::Idle);
    }
}
