//! Browser-bound services: resource HTTP client and sign-in popup.

pub(crate) mod api;
pub(crate) mod popup;
