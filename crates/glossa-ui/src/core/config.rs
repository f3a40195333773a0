//! Build-time UI settings and sign-in strategy selection.
//!
//! # Design
//! - Accept raw optional strings so the wasm shell can feed `option_env!`
//!   values and tests can feed literals.
//! - Resolve the sign-in strategy once; components never branch on the
//!   environment themselves.
//! - Fall back to page-derived defaults supplied by the caller.

use crate::core::error::ConfigError;
use crate::core::oauth::{DEFAULT_SCOPE, OAuthConfig};
use crate::core::signin::{DemoProfile, SignInStrategy};

/// Environment key for the OAuth client id.
pub const CLIENT_ID_KEY: &str = "GLOSSA_GITHUB_CLIENT_ID";
/// Environment key for the OAuth redirect URI.
pub const REDIRECT_URI_KEY: &str = "GLOSSA_GITHUB_REDIRECT_URI";
/// Environment key for the OAuth scope.
pub const SCOPE_KEY: &str = "GLOSSA_GITHUB_SCOPE";
/// Environment key enabling the demo sign-in stub.
pub const DEMO_KEY: &str = "GLOSSA_DEMO";
/// Environment key for the public asset prefix.
pub const PUBLIC_URL_KEY: &str = "GLOSSA_PUBLIC_URL";

/// Raw, unvalidated settings as read from the build environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSettings {
    /// Value of [`CLIENT_ID_KEY`].
    pub client_id: Option<String>,
    /// Value of [`REDIRECT_URI_KEY`].
    pub redirect_uri: Option<String>,
    /// Value of [`SCOPE_KEY`].
    pub scope: Option<String>,
    /// Value of [`DEMO_KEY`].
    pub demo: Option<String>,
    /// Value of [`PUBLIC_URL_KEY`].
    pub public_url: Option<String>,
}

/// Validated UI settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiSettings {
    /// OAuth client id; `None` only in demo mode.
    pub client_id: Option<String>,
    /// Redirect URI registered with the provider.
    pub redirect_uri: String,
    /// Requested scope.
    pub scope: String,
    /// Whether the demo stub replaces the live flow.
    pub demo: bool,
    /// Public asset prefix, always ending in `/`.
    pub public_url: String,
}

impl UiSettings {
    /// Validate raw settings.
    ///
    /// `default_redirect_uri` is used when no redirect URI was configured
    /// (the shell passes `<origin>/callback`).
    ///
    /// # Errors
    /// Returns [`ConfigError`] when live mode lacks a client id or the
    /// redirect URI is not an absolute `http(s)` URL.
    pub fn from_raw(raw: RawSettings, default_redirect_uri: &str) -> Result<Self, ConfigError> {
        let demo = match trimmed(raw.demo) {
            Some(value) => parse_flag(DEMO_KEY, &value)?,
            None => false,
        };
        let client_id = trimmed(raw.client_id);
        if client_id.is_none() && !demo {
            return Err(ConfigError::Missing { key: CLIENT_ID_KEY });
        }
        let redirect_uri =
            trimmed(raw.redirect_uri).unwrap_or_else(|| default_redirect_uri.to_string());
        if !demo && !is_http_url(&redirect_uri) {
            return Err(ConfigError::Invalid {
                key: REDIRECT_URI_KEY,
                value: redirect_uri,
            });
        }
        let scope = trimmed(raw.scope).unwrap_or_else(|| DEFAULT_SCOPE.to_string());
        let mut public_url = trimmed(raw.public_url).unwrap_or_else(|| "/".to_string());
        if !public_url.ends_with('/') {
            public_url.push('/');
        }
        Ok(Self {
            client_id,
            redirect_uri,
            scope,
            demo,
            public_url,
        })
    }

    /// Pick the sign-in strategy for these settings.
    #[must_use]
    pub fn strategy(&self) -> SignInStrategy {
        match (&self.client_id, self.demo) {
            (Some(client_id), false) => SignInStrategy::Live(
                OAuthConfig::new(client_id.clone(), self.redirect_uri.clone())
                    .with_scope(self.scope.clone()),
            ),
            _ => SignInStrategy::Demo(DemoProfile::for_public_url(&self.public_url)),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

fn is_http_url(value: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "https://glossa.local/callback";

    fn raw(client_id: Option<&str>, demo: Option<&str>) -> RawSettings {
        RawSettings {
            client_id: client_id.map(str::to_string),
            demo: demo.map(str::to_string),
            ..RawSettings::default()
        }
    }

    #[test]
    fn live_settings_select_live_strategy() {
        let settings = UiSettings::from_raw(raw(Some("abc"), None), FALLBACK).expect("settings");
        assert_eq!(settings.redirect_uri, FALLBACK);
        assert_eq!(settings.scope, DEFAULT_SCOPE);
        match settings.strategy() {
            SignInStrategy::Live(config) => {
                assert_eq!(config.client_id, "abc");
                assert_eq!(config.redirect_uri, FALLBACK);
            }
            SignInStrategy::Demo(_) => panic!("expected live strategy"),
        }
    }

    #[test]
    fn demo_flag_wins_over_client_id() {
        let settings =
            UiSettings::from_raw(raw(Some("abc"), Some("TRUE")), FALLBACK).expect("settings");
        assert!(settings.demo);
        assert_eq!(
            settings.strategy(),
            SignInStrategy::Demo(DemoProfile::for_public_url("/"))
        );
    }

    #[test]
    fn missing_client_id_is_rejected_outside_demo() {
        assert_eq!(
            UiSettings::from_raw(raw(Some("  "), None), FALLBACK),
            Err(ConfigError::Missing { key: CLIENT_ID_KEY })
        );
        assert!(UiSettings::from_raw(raw(None, Some("1")), FALLBACK).is_ok());
    }

    #[test]
    fn invalid_flag_and_redirect_are_reported() {
        assert_eq!(
            UiSettings::from_raw(raw(Some("abc"), Some("maybe")), FALLBACK)
                .map_err(|err| err.key()),
            Err(DEMO_KEY)
        );
        let relative = RawSettings {
            client_id: Some("abc".to_string()),
            redirect_uri: Some("/callback".to_string()),
            ..RawSettings::default()
        };
        assert_eq!(
            UiSettings::from_raw(relative, FALLBACK).map_err(|err| err.key()),
            Err(REDIRECT_URI_KEY)
        );
    }

    #[test]
    fn public_url_gains_trailing_slash() {
        let settings = UiSettings::from_raw(
            RawSettings {
                demo: Some("on".to_string()),
                public_url: Some("/assets".to_string()),
                ..RawSettings::default()
            },
            FALLBACK,
        )
        .expect("settings");
        assert_eq!(settings.public_url, "/assets/");
        assert_eq!(
            settings.strategy(),
            SignInStrategy::Demo(DemoProfile::for_public_url("/assets/"))
        );
    }

    #[test]
    fn custom_scope_is_forwarded() {
        let settings = UiSettings::from_raw(
            RawSettings {
                client_id: Some("abc".to_string()),
                scope: Some("read:user".to_string()),
                ..RawSettings::default()
            },
            FALLBACK,
        )
        .expect("settings");
        match settings.strategy() {
            SignInStrategy::Live(config) => assert_eq!(config.scope, "read:user"),
            SignInStrategy::Demo(_) => panic!("expected live strategy"),
        }
    }
}
