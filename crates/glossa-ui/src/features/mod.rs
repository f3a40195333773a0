//! Feature slices: pure state/logic plus wasm-only views.
pub mod resources;
pub mod session;
