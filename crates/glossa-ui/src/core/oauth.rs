//! GitHub OAuth authorize-URL construction and redirect parsing.
//!
//! # Design
//! - Keep URL and query handling DOM-free so it can be tested natively.
//! - Percent-encode both keys and values; preserve caller ordering.
//! - Treat empty parameter values as absent, matching how the provider omits them.

use std::fmt;

/// Fixed GitHub authorize endpoint.
pub const AUTHORIZE_ENDPOINT: &str = "https://github.com/login/oauth/authorize";
/// Window name used for the sign-in popup.
pub const POPUP_NAME: &str = "github-oauth-authorize";
/// Scope requested when the caller does not supply one.
pub const DEFAULT_SCOPE: &str = "user:email";
/// Popup width in CSS pixels.
pub const POPUP_WIDTH: u32 = 600;
/// Popup height in CSS pixels.
pub const POPUP_HEIGHT: u32 = 1000;

/// Button configuration for the live OAuth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthConfig {
    /// OAuth application client id.
    pub client_id: String,
    /// Space-separated scope list.
    pub scope: String,
    /// Redirect target registered with the provider.
    pub redirect_uri: String,
}

impl OAuthConfig {
    /// Build a config with the default scope.
    #[must_use]
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            scope: DEFAULT_SCOPE.to_string(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Override the requested scope; blank values keep the default.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !scope.trim().is_empty() {
            self.scope = scope;
        }
        self
    }

    /// Full authorize URL for this configuration.
    #[must_use]
    pub fn authorize_url(&self) -> String {
        let search = to_query(&[
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", self.scope.as_str()),
        ]);
        format!("{AUTHORIZE_ENDPOINT}?{search}")
    }

    /// Popup request that opens the authorize URL.
    #[must_use]
    pub fn popup_request(&self) -> PopupRequest {
        PopupRequest {
            name: POPUP_NAME.to_string(),
            url: self.authorize_url(),
            features: PopupFeatures::default(),
        }
    }
}

/// Encode key/value pairs as a `k=v&k=v` query string.
#[must_use]
pub fn to_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string (with or without a leading `?`) into ordered pairs.
#[must_use]
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn non_empty(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty())
}

/// Parameters delivered by the provider redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupResult {
    /// Authorization code, when consent was granted.
    pub code: Option<String>,
    /// Provider error code (for example `access_denied`).
    pub error: Option<String>,
    /// Human-readable provider error description.
    pub error_description: Option<String>,
    /// Opaque state echoed back by the provider.
    pub state: Option<String>,
}

impl PopupResult {
    /// Result carrying only an authorization code.
    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Parse the redirect `location.search` of the popup.
    #[must_use]
    pub fn from_query(search: &str) -> Self {
        let pairs = parse_query(search);
        Self {
            code: non_empty(&pairs, "code"),
            error: non_empty(&pairs, "error"),
            error_description: non_empty(&pairs, "error_description"),
            state: non_empty(&pairs, "state"),
        }
    }
}

/// Screen geometry of the opening window, used to centre the popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenerGeometry {
    /// Opener left edge in screen coordinates.
    pub screen_x: i32,
    /// Opener top edge in screen coordinates.
    pub screen_y: i32,
    /// Opener outer width.
    pub outer_width: i32,
    /// Opener outer height.
    pub outer_height: i32,
}

/// `window.open` feature set for the popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupFeatures {
    /// Popup width in CSS pixels.
    pub width: u32,
    /// Popup height in CSS pixels.
    pub height: u32,
    /// Optional left offset in screen coordinates.
    pub left: Option<i32>,
    /// Optional top offset in screen coordinates.
    pub top: Option<i32>,
}

impl Default for PopupFeatures {
    fn default() -> Self {
        Self {
            width: POPUP_WIDTH,
            height: POPUP_HEIGHT,
            left: None,
            top: None,
        }
    }
}

impl PopupFeatures {
    /// Position the popup at the centre of the opener.
    #[must_use]
    pub fn centered_on(self, opener: OpenerGeometry) -> Self {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        Self {
            left: Some(opener.screen_x + (opener.outer_width - width) / 2),
            top: Some(opener.screen_y + (opener.outer_height - height) / 2),
            ..self
        }
    }
}

impl fmt::Display for PopupFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "height={},width={}", self.height, self.width)?;
        if let Some(left) = self.left {
            write!(f, ",left={left}")?;
        }
        if let Some(top) = self.top {
            write!(f, ",top={top}")?;
        }
        Ok(())
    }
}

/// Everything needed to open the sign-in popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupRequest {
    /// Window name (target).
    pub name: String,
    /// URL loaded in the popup.
    pub url: String,
    /// Window features.
    pub features: PopupFeatures,
}
