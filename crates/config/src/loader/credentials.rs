//! Credential resolution with alias fallback.
//!
//! Responsibilities:
//! - Resolve each setting from its primary key, then its alias key, then its default.
//! - Hold the secret key behind [`SecretString`] so it stays out of `Debug` output.
//!
//! Invariants:
//! - Presence decides, not emptiness: `SecretId=` resolves to `""` and does
//!   not fall through to `TENCENT_SECRET_ID`.
//! - Resolution never fails. Callers that need non-empty secrets use
//!   [`Credentials::ensure_present`].

use secrecy::{ExposeSecret, SecretString};

use super::dotenv::EnvMap;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_REGION, KEY_REGION, KEY_REGION_ALIAS, KEY_SECRET_ID, KEY_SECRET_ID_ALIAS,
    KEY_SECRET_KEY, KEY_SECRET_KEY_ALIAS,
};

/// A logical setting looked up under a primary key and an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Human-readable name used in error messages.
    pub name: &'static str,
    pub primary: &'static str,
    pub alias: &'static str,
    pub default: &'static str,
}

impl Setting {
    pub const SECRET_ID: Setting = Setting {
        name: "secret id",
        primary: KEY_SECRET_ID,
        alias: KEY_SECRET_ID_ALIAS,
        default: "",
    };

    pub const SECRET_KEY: Setting = Setting {
        name: "secret key",
        primary: KEY_SECRET_KEY,
        alias: KEY_SECRET_KEY_ALIAS,
        default: "",
    };

    pub const REGION: Setting = Setting {
        name: "region",
        primary: KEY_REGION,
        alias: KEY_REGION_ALIAS,
        default: DEFAULT_REGION,
    };

    /// Find the first key present in `env`, returning the key and its value.
    pub fn lookup<'a>(&self, env: &'a EnvMap) -> Option<(&'static str, &'a str)> {
        [self.primary, self.alias]
            .into_iter()
            .find_map(|key| env.get(key).map(|value| (key, value.as_str())))
    }

    /// Resolve the setting, falling back to its default.
    pub fn resolve(&self, env: &EnvMap) -> String {
        self.lookup(env)
            .map_or(self.default, |(_, value)| value)
            .to_string()
    }

    /// Error reporting this setting as missing.
    pub fn missing(&self) -> ConfigError {
        ConfigError::MissingCredential {
            name: self.name,
            primary: self.primary,
            alias: self.alias,
        }
    }
}

/// Resolved Tencent Cloud credentials and region.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: SecretString,
    pub region: String,
}

/// Which `.env` key each credential was resolved from, `None` meaning the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialSources {
    pub secret_id: Option<&'static str>,
    pub secret_key: Option<&'static str>,
    pub region: Option<&'static str>,
}

impl CredentialSources {
    /// Record the key each setting resolves from in `env`.
    pub fn from_env(env: &EnvMap) -> Self {
        let key = |setting: Setting| setting.lookup(env).map(|(key, _)| key);
        Self {
            secret_id: key(Setting::SECRET_ID),
            secret_key: key(Setting::SECRET_KEY),
            region: key(Setting::REGION),
        }
    }
}

/// Resolve the three credential settings from a parsed `.env` mapping.
pub fn resolve_credentials(env: &EnvMap) -> Credentials {
    Credentials {
        secret_id: Setting::SECRET_ID.resolve(env),
        secret_key: SecretString::new(Setting::SECRET_KEY.resolve(env).into()),
        region: Setting::REGION.resolve(env),
    }
}

impl Credentials {
    /// Build credentials from already-resolved values.
    pub fn new(
        secret_id: impl Into<String>,
        secret_key: SecretString,
        region: impl Into<String>,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key,
            region: region.into(),
        }
    }

    /// Fail if the secret id or secret key is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] naming the first empty setting.
    pub fn ensure_present(&self) -> Result<(), ConfigError> {
        if self.secret_id.is_empty() {
            return Err(Setting::SECRET_ID.missing());
        }
        if self.secret_key.expose_secret().is_empty() {
            return Err(Setting::SECRET_KEY.missing());
        }
        Ok(())
    }

    /// Replace the region with `region` unless it is absent or blank.
    pub fn with_region_override(mut self, region: Option<&str>) -> Self {
        if let Some(region) = region.map(str::trim).filter(|r| !r.is_empty()) {
            self.region = region.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_primary_key_wins() {
        let env = env(&[("SecretId", "abc"), ("TENCENT_SECRET_ID", "xyz")]);
        assert_eq!(resolve_credentials(&env).secret_id, "abc");
    }

    #[test]
    fn test_alias_fallback() {
        let env = env(&[
            ("TENCENT_SECRET_ID", "xyz"),
            ("TENCENT_SECRET_KEY", "key"),
            ("TENCENT_REGION", "ap-shanghai"),
        ]);
        let creds = resolve_credentials(&env);
        assert_eq!(creds.secret_id, "xyz");
        assert_eq!(creds.secret_key.expose_secret(), "key");
        assert_eq!(creds.region, "ap-shanghai");
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let creds = resolve_credentials(&EnvMap::new());
        assert_eq!(creds.secret_id, "");
        assert_eq!(creds.secret_key.expose_secret(), "");
        assert_eq!(creds.region, "ap-guangzhou");
    }

    #[test]
    fn test_present_but_empty_primary_does_not_fall_through() {
        let env = env(&[("SecretId", ""), ("TENCENT_SECRET_ID", "xyz")]);
        assert_eq!(resolve_credentials(&env).secret_id, "");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let env = env(&[("secretid", "abc"), ("REGION", "ap-beijing")]);
        let creds = resolve_credentials(&env);
        assert_eq!(creds.secret_id, "");
        assert_eq!(creds.region, "ap-guangzhou");
    }

    #[test]
    fn test_sources_report_resolved_key() {
        let env = env(&[("SecretId", "a"), ("TENCENT_SECRET_KEY", "b")]);
        let sources = CredentialSources::from_env(&env);
        assert_eq!(sources.secret_id, Some("SecretId"));
        assert_eq!(sources.secret_key, Some("TENCENT_SECRET_KEY"));
        assert_eq!(sources.region, None);
    }

    #[test]
    fn test_ensure_present_reports_first_missing() {
        let creds = resolve_credentials(&env(&[("SecretKey", "k")]));
        match creds.ensure_present() {
            Err(ConfigError::MissingCredential { primary, .. }) => assert_eq!(primary, "SecretId"),
            other => panic!("expected MissingCredential, got {:?}", other),
        }

        let creds = resolve_credentials(&env(&[("SecretId", "i")]));
        match creds.ensure_present() {
            Err(ConfigError::MissingCredential { primary, .. }) => assert_eq!(primary, "SecretKey"),
            other => panic!("expected MissingCredential, got {:?}", other),
        }

        let creds = resolve_credentials(&env(&[("SecretId", "i"), ("SecretKey", "k")]));
        assert!(creds.ensure_present().is_ok());
    }

    #[test]
    fn test_region_override_ignores_blank() {
        let creds = resolve_credentials(&EnvMap::new());
        assert_eq!(creds.clone().with_region_override(None).region, "ap-guangzhou");
        assert_eq!(creds.clone().with_region_override(Some("  ")).region, "ap-guangzhou");
        assert_eq!(
            creds.with_region_override(Some(" ap-beijing ")).region,
            "ap-beijing"
        );
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let creds = resolve_credentials(&env(&[("SecretKey", "supersecret_value")]));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("supersecret_value"));
    }
}
