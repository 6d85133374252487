use std::{collections::HashMap, time::Duration};

use crate::error::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://fruits-api-app.azurewebsites.net/api/v1";

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const API_TIMEOUT_SECS_VAR: &str = "API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    /// `None` means requests may hang indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment, after reading an optional
    /// `.env` file from the working directory.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Failed to read .env file");
        }
        let vars: HashMap<String, String> = std::env::vars().collect();
        Settings::try_from(vars)
    }
}

impl TryFrom<HashMap<String, String>> for Settings {
    type Error = Error;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Error> {
        let api_base_url = match map.get(API_BASE_URL_VAR).map(|s| s.trim()) {
            Some(url) if !url.is_empty() => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(Error::SettingsError(format!(
                        "{} must be an http(s) URL, got '{}'",
                        API_BASE_URL_VAR, url
                    )));
                }
                url.to_string()
            }
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        let request_timeout = match map.get(API_TIMEOUT_SECS_VAR).map(|s| s.trim()) {
            Some(secs) if !secs.is_empty() => {
                let secs: u64 = secs.parse().map_err(|_| {
                    Error::SettingsError(format!(
                        "{} must be a positive number of seconds, got '{}'",
                        API_TIMEOUT_SECS_VAR, secs
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::SettingsError(format!(
                        "{} must be greater than zero",
                        API_TIMEOUT_SECS_VAR
                    )));
                }
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::try_from(HashMap::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout, None);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::try_from(map(&[
            (API_BASE_URL_VAR, "http://localhost:8000/api/v1"),
            (API_TIMEOUT_SECS_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:8000/api/v1");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let settings =
            Settings::try_from(map(&[(API_BASE_URL_VAR, "  "), (API_TIMEOUT_SECS_VAR, "")]))
                .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Settings::try_from(map(&[(API_BASE_URL_VAR, "localhost:8000")])),
            Err(Error::SettingsError(_))
        ));
        assert!(matches!(
            Settings::try_from(map(&[(API_TIMEOUT_SECS_VAR, "soon")])),
            Err(Error::SettingsError(_))
        ));
        assert!(matches!(
            Settings::try_from(map(&[(API_TIMEOUT_SECS_VAR, "0")])),
            Err(Error::SettingsError(_))
        ));
    }
}
