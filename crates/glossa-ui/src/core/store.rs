//! App-wide store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducers are plain functions over `&mut AppStore` so they test natively.
//! - [`StoreAction`] routes the same reducers through `yew::Reducible`, so
//!   async tasks dispatch against the latest state instead of a stale copy.

use crate::core::error::SignInError;
use crate::core::signin::SignInSuccess;
use crate::models::Resource;
use std::rc::Rc;
use yew::Reducible;

/// Name shown when the provider did not report one.
pub const FALLBACK_USER_NAME: &str = "GitHub user";

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppStore {
    /// Sign-in session state.
    pub session: SessionSlice,
    /// Resource listing state.
    pub resources: ResourcesSlice,
}

/// Signed-in identity as displayed by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedInUser {
    /// Display name.
    pub user_name: String,
    /// Avatar URL, when known.
    pub icon_url: Option<String>,
}

impl From<SignInSuccess> for SignedInUser {
    fn from(success: SignInSuccess) -> Self {
        Self {
            user_name: success
                .user_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_USER_NAME.to_string()),
            icon_url: success.icon_url,
        }
    }
}

/// Sign-in session slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Signed-in user, if any.
    pub user: Option<SignedInUser>,
    /// Attempts whose popup has not settled yet.
    pub in_flight: u32,
    /// Most recent failure, cleared by the next success.
    pub last_error: Option<SignInError>,
}

/// Resource listing slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourcesSlice {
    /// Resources as delivered by the service.
    pub items: Vec<Resource>,
    /// Whether a fetch is running.
    pub loading: bool,
    /// Last fetch failure message.
    pub error: Option<String>,
}

/// Record a click that opened a popup.
pub fn begin_sign_in(store: &mut AppStore) {
    store.session.in_flight = store.session.in_flight.saturating_add(1);
}

/// Record a successful attempt.
pub fn complete_sign_in(store: &mut AppStore, success: SignInSuccess) {
    store.session.in_flight = store.session.in_flight.saturating_sub(1);
    store.session.user = Some(SignedInUser::from(success));
    store.session.last_error = None;
}

/// Record a failed attempt.
///
/// Demo and blocked-popup failures never passed through [`begin_sign_in`], so
/// the in-flight counter saturates at zero.
pub fn fail_sign_in(store: &mut AppStore, error: SignInError) {
    store.session.in_flight = store.session.in_flight.saturating_sub(1);
    store.session.last_error = Some(error);
}

/// Reinstate a user persisted by an earlier visit.
///
/// A user signed in during this visit wins over the persisted one.
pub fn restore_session(store: &mut AppStore, user: SignedInUser) {
    if store.session.user.is_none() {
        store.session.user = Some(user);
    }
}

/// Forget the signed-in user and any loaded resources.
pub fn sign_out(store: &mut AppStore) {
    store.session = SessionSlice::default();
    store.resources = ResourcesSlice::default();
}

/// Mark a resource fetch as started.
pub fn start_loading(store: &mut AppStore) {
    store.resources.loading = true;
    store.resources.error = None;
}

/// Replace the listed resources.
pub fn set_resources(store: &mut AppStore, items: Vec<Resource>) {
    store.resources.items = items;
    store.resources.loading = false;
    store.resources.error = None;
}

/// Record a resource fetch failure, keeping previously loaded items.
pub fn set_resources_error(store: &mut AppStore, message: String) {
    store.resources.loading = false;
    store.resources.error = Some(message);
}

/// Transitions dispatched from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreAction {
    /// See [`begin_sign_in`].
    BeginSignIn,
    /// See [`complete_sign_in`].
    CompleteSignIn(SignInSuccess),
    /// See [`fail_sign_in`].
    FailSignIn(SignInError),
    /// See [`restore_session`].
    RestoreSession(SignedInUser),
    /// See [`sign_out`].
    SignOut,
    /// See [`start_loading`].
    StartLoading,
    /// See [`set_resources`].
    SetResources(Vec<Resource>),
    /// See [`set_resources_error`].
    SetResourcesError(String),
}

/// Apply one action in place.
pub fn apply(store: &mut AppStore, action: StoreAction) {
    match action {
        StoreAction::BeginSignIn => begin_sign_in(store),
        StoreAction::CompleteSignIn(success) => complete_sign_in(store, success),
        StoreAction::FailSignIn(error) => fail_sign_in(store, error),
        StoreAction::RestoreSession(user) => restore_session(store, user),
        StoreAction::SignOut => sign_out(store),
        StoreAction::StartLoading => start_loading(store),
        StoreAction::SetResources(items) => set_resources(store, items),
        StoreAction::SetResourcesError(message) => set_resources_error(store, message),
    }
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        apply(&mut next, action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_attempt_records_user() {
        let mut store = AppStore::default();
        begin_sign_in(&mut store);
        assert_eq!(store.session.in_flight, 1);
        complete_sign_in(&mut store, SignInSuccess::default());
        assert_eq!(store.session.in_flight, 0);
        assert_eq!(
            store.session.user.as_ref().map(|user| user.user_name.as_str()),
            Some(FALLBACK_USER_NAME)
        );
        assert!(store.session.last_error.is_none());
    }

    #[test]
    fn failure_keeps_previous_user_and_saturates() {
        let mut store = AppStore::default();
        complete_sign_in(
            &mut store,
            SignInSuccess {
                user_name: Some("Demo User".into()),
                icon_url: Some("/photo.jpg".into()),
            },
        );
        fail_sign_in(&mut store, SignInError::CodeNotFound);
        assert_eq!(store.session.in_flight, 0);
        assert_eq!(store.session.last_error, Some(SignInError::CodeNotFound));
        let user = store.session.user.clone().expect("user kept");
        assert_eq!(user.user_name, "Demo User");
        assert_eq!(user.icon_url.as_deref(), Some("/photo.jpg"));
    }

    #[test]
    fn restored_session_never_replaces_live_user() {
        let mut store = AppStore::default();
        let persisted = SignedInUser {
            user_name: "Persisted".into(),
            icon_url: None,
        };
        restore_session(&mut store, persisted.clone());
        assert_eq!(store.session.user.as_ref(), Some(&persisted));

        complete_sign_in(
            &mut store,
            SignInSuccess {
                user_name: Some("Live".into()),
                icon_url: None,
            },
        );
        restore_session(&mut store, persisted);
        assert_eq!(
            store.session.user.as_ref().map(|user| user.user_name.as_str()),
            Some("Live")
        );
    }

    #[test]
    fn resource_fetch_lifecycle() {
        let mut store = AppStore::default();
        start_loading(&mut store);
        assert!(store.resources.loading);
        set_resources(&mut store, vec![Resource::new("k", "e", "s")]);
        assert!(!store.resources.loading);
        assert_eq!(store.resources.items.len(), 1);
        set_resources_error(&mut store, "offline".into());
        assert_eq!(store.resources.items.len(), 1);
        assert_eq!(store.resources.error.as_deref(), Some("offline"));
        sign_out(&mut store);
        assert_eq!(store, AppStore::default());
    }

    #[test]
    fn reducible_routes_actions_to_reducers() {
        let store = Rc::new(AppStore::default());
        let store = store.reduce(StoreAction::BeginSignIn);
        assert_eq!(store.session.in_flight, 1);
        let store = store.reduce(StoreAction::FailSignIn(SignInError::PopupClosed));
        assert_eq!(store.session.in_flight, 0);
        assert_eq!(store.session.last_error, Some(SignInError::PopupClosed));
        let store = store.reduce(StoreAction::SetResources(vec![Resource::new("k", "e", "s")]));
        assert_eq!(store.resources.items.len(), 1);
        let store = store.reduce(StoreAction::SignOut);
        assert_eq!(*store, AppStore::default());
    }
}
