//! Launcher configuration.
//!
//! The launcher has no flags of its own, so its few settings come from the
//! environment. Unset or empty variables fall back to the defaults for the
//! `enhance-this` package.

use std::ffi::OsString;

/// Overrides the target executable (bare name or path).
pub const TARGET_ENV: &str = "ENHANCE_WRAPPER_TARGET";

/// Tracing filter directive for the launcher's own diagnostics.
pub const LOG_ENV: &str = "ENHANCE_WRAPPER_LOG";

/// Executable installed by the `enhance-this` package.
pub const DEFAULT_TARGET: &str = "enhance";

/// Package named in the reinstall hint.
pub const DEFAULT_PACKAGE: &str = "enhance-this";

/// Runtime named in the install hint.
pub const DEFAULT_RUNTIME: &str = "Python";

/// Settings for a single launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Program resolved against `PATH` (or used as-is when it contains a separator).
    pub target: OsString,

    /// Package the user should reinstall when the target is missing.
    pub package: String,

    /// Runtime the user should install when the target is missing.
    pub runtime: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            target: OsString::from(DEFAULT_TARGET),
            package: DEFAULT_PACKAGE.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }
}

impl LauncherConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(target) = lookup(TARGET_ENV).filter(|value| !value.is_empty()) {
            config.target = target;
        }
        config
    }

    /// Target name as shown in diagnostics.
    pub fn target_display(&self) -> String {
        self.target.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LauncherConfig::default();
        assert_eq!(config.target, OsString::from("enhance"));
        assert_eq!(config.package, "enhance-this");
        assert_eq!(config.runtime, "Python");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = LauncherConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_target_override() {
        let config = LauncherConfig::from_lookup(lookup_from(&[(TARGET_ENV, "/opt/bin/enhance")]));
        assert_eq!(config.target, OsString::from("/opt/bin/enhance"));
        assert_eq!(config.target_display(), "/opt/bin/enhance");
        // Hints are not affected by the override.
        assert_eq!(config.package, DEFAULT_PACKAGE);
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = LauncherConfig::from_lookup(lookup_from(&[(TARGET_ENV, "")]));
        assert_eq!(config.target, OsString::from(DEFAULT_TARGET));
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = LauncherConfig::from_lookup(lookup_from(&[("PATH", "/usr/bin")]));
        assert_eq!(config, LauncherConfig::default());
    }
}
