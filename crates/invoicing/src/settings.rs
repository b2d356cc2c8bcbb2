//! Connection settings for the TIMS fiscal device the invoices are reported to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

/// Per-company TIMS settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimsSettings {
    #[serde(default)]
    pub company: Option<String>,
    pub server_address: String,
    pub sender_id: String,
}

impl TimsSettings {
    pub const ENV_COMPANY: &'static str = "TIMS_COMPANY";
    pub const ENV_SERVER_ADDRESS: &'static str = "TIMS_SERVER_ADDRESS";
    pub const ENV_SENDER_ID: &'static str = "TIMS_SENDER_ID";

    /// Load from `TIMS_SERVER_ADDRESS`, `TIMS_SENDER_ID` and optional `TIMS_COMPANY`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut settings = Self {
            company: get(Self::ENV_COMPANY),
            server_address: get(Self::ENV_SERVER_ADDRESS)
                .ok_or(SettingsError::Missing(Self::ENV_SERVER_ADDRESS))?,
            sender_id: get(Self::ENV_SENDER_ID).ok_or(SettingsError::Missing(Self::ENV_SENDER_ID))?,
        };
        settings.normalize();
        Ok(settings)
    }

    /// Bring `server_address` into `http(s)://host/api` form. Idempotent.
    ///
    /// Devices are usually configured by bare IP, so a missing scheme becomes
    /// plain `http://`.
    pub fn normalize(&mut self) {
        if self.server_address.is_empty() {
            return;
        }

        if !self.server_address.starts_with("http") {
            tracing::debug!(address = %self.server_address, "assuming http scheme for TIMS server");
            self.server_address = format!("http://{}", self.server_address);
        }

        if !self.server_address.ends_with("/api") {
            self.server_address = format!("{}/api", self.server_address);
        }
    }

    /// End-of-day summary endpoint for this sender.
    pub fn eod_url(&self) -> String {
        format!("{}/eod/{}", self.server_address, self.sender_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(address: &str) -> TimsSettings {
        TimsSettings {
            company: None,
            server_address: address.to_string(),
            sender_id: "SENDER-1".to_string(),
        }
    }

    #[test]
    fn bare_ip_gets_scheme_and_api_suffix() {
        let mut s = settings("10.0.0.5:8086");
        s.normalize();
        assert_eq!(s.server_address, "http://10.0.0.5:8086/api");
    }

    #[test]
    fn https_address_keeps_scheme() {
        let mut s = settings("https://tims.example.com");
        s.normalize();
        assert_eq!(s.server_address, "https://tims.example.com/api");
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut s = settings("10.0.0.5");
        s.normalize();
        let once = s.clone();
        s.normalize();
        assert_eq!(s, once);
    }

    #[test]
    fn empty_address_is_left_alone() {
        let mut s = settings("");
        s.normalize();
        assert_eq!(s.server_address, "");
    }

    #[test]
    fn eod_url_appends_sender() {
        let mut s = settings("10.0.0.5");
        s.normalize();
        assert_eq!(s.eod_url(), "http://10.0.0.5/api/eod/SENDER-1");
    }

    #[test]
    fn loads_and_normalizes_from_lookup() {
        let vars = HashMap::from([
            ("TIMS_COMPANY", "Navari Ltd"),
            ("TIMS_SERVER_ADDRESS", "192.168.1.20"),
            ("TIMS_SENDER_ID", "S-42"),
        ]);
        let s = TimsSettings::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(s.company.as_deref(), Some("Navari Ltd"));
        assert_eq!(s.server_address, "http://192.168.1.20/api");
        assert_eq!(s.sender_id, "S-42");
    }

    #[test]
    fn blank_required_value_is_missing() {
        let vars = HashMap::from([("TIMS_SERVER_ADDRESS", "10.0.0.5"), ("TIMS_SENDER_ID", "  ")]);
        let err = TimsSettings::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert_eq!(err, SettingsError::Missing("TIMS_SENDER_ID"));
        assert_eq!(err.to_string(), "missing required setting: TIMS_SENDER_ID");
    }

    #[test]
    fn deserializes_without_company() {
        let s: TimsSettings =
            serde_json::from_str(r#"{"server_address":"10.0.0.5","sender_id":"S-1"}"#).unwrap();
        assert_eq!(s.company, None);
    }
}
