//! Error types surfaced by the sign-in flow and UI configuration.
//!
//! # Design
//! - Constant messages; context lives in fields, not in the formatted text.
//! - Errors are `Clone + PartialEq` so they can travel through Yew callbacks.
//! - Only [`SignInError::CodeNotFound`] is synthesized by the flow itself; every
//!   other variant is produced by the popup collaborator and passed through.

use thiserror::Error;

/// Failures reported to the sign-in caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// The popup redirected back without an authorization code.
    #[error("'code' not found")]
    CodeNotFound,
    /// The browser refused to open the popup window.
    #[error("The popup was blocked")]
    PopupBlocked,
    /// The popup was closed (or abandoned) before the provider redirected back.
    #[error("The popup was closed")]
    PopupClosed,
    /// A browser API call failed while driving the popup.
    #[error("popup browser call failed")]
    Browser {
        /// Browser operation that failed.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
}

impl SignInError {
    /// Whether the failure was caused by the user dismissing the popup.
    #[must_use]
    pub const fn is_dismissal(&self) -> bool {
        matches!(self, Self::PopupClosed)
    }
}

/// Result alias for sign-in outcomes.
pub type SignInResult<T> = Result<T, SignInError>;

/// Invalid or missing UI configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting was empty or absent.
    #[error("missing configuration value")]
    Missing {
        /// Environment key of the missing setting.
        key: &'static str,
    },
    /// A setting was present but malformed.
    #[error("invalid configuration value")]
    Invalid {
        /// Environment key of the invalid setting.
        key: &'static str,
        /// Offending raw value.
        value: String,
    },
}

impl ConfigError {
    /// Environment key associated with the failure.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Missing { key } | Self::Invalid { key, .. } => key,
        }
    }
}
