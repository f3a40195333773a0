//! Shared UI models and the resource service DTOs they build on.

pub use glossa_api_models::{ProblemDetails, Resource};

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier for the toast.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Resources shown when the UI runs without a resource service.
#[must_use]
pub fn demo_resources() -> Vec<Resource> {
    vec![
        Resource::new("app.title", "Ada Lovelace", "Resource editor")
            .with_translation("Éditeur de ressources"),
        Resource::new("menu.open", "Alan Turing", "Open file"),
        Resource::new("menu.save", "Grace Brewster Hopper", "Save changes")
            .with_translation("Enregistrer les modifications"),
        Resource::new("status.synced", "Katherine Johnson", "All changes synced"),
    ]
}
