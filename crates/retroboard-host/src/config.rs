//! Host configuration read from the environment.

use std::path::PathBuf;

use retroboard_store::file_store::DEFAULT_STORE_FILE;

use crate::error::AppError;

/// Environment variable naming the file store path.
pub const STORE_PATH_VAR: &str = "ONBOARDING_STORE_PATH";
/// Environment variable naming the route the host was opened at.
pub const ROUTE_VAR: &str = "ONBOARDING_ROUTE";

/// Prefix of routes that run the guided flow.
const ONBOARDING_ROUTE_PREFIX: &str = "/onboarding";

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Path of the JSON file store.
    pub store_path: PathBuf,
    /// Route the host was opened at.
    pub route: String,
}

impl HostConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let store_path = lookup(STORE_PATH_VAR).unwrap_or_else(|| DEFAULT_STORE_FILE.to_owned());
        if store_path.trim().is_empty() {
            return Err(AppError::Config(format!("{STORE_PATH_VAR} must not be empty")));
        }

        let route = lookup(ROUTE_VAR).unwrap_or_else(|| "/".to_owned());
        if !route.starts_with('/') {
            return Err(AppError::Config(format!(
                "{ROUTE_VAR} must start with '/', got {route:?}"
            )));
        }

        Ok(Self {
            store_path: PathBuf::from(store_path),
            route,
        })
    }

    /// Whether the host was opened inside the guided flow.
    #[must_use]
    pub fn is_onboarding_route(&self) -> bool {
        self.route.starts_with(ONBOARDING_ROUTE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.route, "/");
        assert!(!config.is_onboarding_route());
    }

    #[test]
    fn test_reads_overrides() {
        let config = HostConfig::from_lookup(lookup(&[
            (STORE_PATH_VAR, "/tmp/session.json"),
            (ROUTE_VAR, "/onboarding/new"),
        ]))
        .unwrap();

        assert_eq!(config.store_path, PathBuf::from("/tmp/session.json"));
        assert!(config.is_onboarding_route());
    }

    #[test]
    fn test_rejects_relative_route() {
        let result = HostConfig::from_lookup(lookup(&[(ROUTE_VAR, "onboarding")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_blank_store_path() {
        let result = HostConfig::from_lookup(lookup(&[(STORE_PATH_VAR, "  ")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
