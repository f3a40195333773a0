//! Resource grid feature wiring.
//!
//! # Design
//! - Keep row shaping and selection pure so they test without a DOM.
//! - The view only renders rows and forwards activations.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
