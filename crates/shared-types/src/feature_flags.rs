use serde::{Deserialize, Serialize};

/// Feature flags controlling optional parts of the UI.
///
/// Loaded from `config.toml` at startup. Every field defaults to `false`
/// so that a missing or incomplete config file disables all optional
/// features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the demo account hint under the login form.
    #[serde(default)]
    pub demo_hint: bool,
    /// Show the notifications menu in the dashboard top bar.
    #[serde(default)]
    pub notifications: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.demo_hint);
        assert!(!flags.notifications);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_json() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"notifications":true}"#).unwrap();
        assert!(flags.notifications);
        assert!(!flags.demo_hint);
    }
}
