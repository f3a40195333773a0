//! Sign-in feature wiring.
//!
//! # Design
//! - Bridge the DOM-free sign-in flow to Yew callbacks in one place.
//! - Keep popup handling in the services layer; the view only starts attempts.

pub mod attempts;
pub mod handler;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
