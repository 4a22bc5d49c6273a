//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_EXPORT_DIR;
use crate::engine::RecommendationEngine;
use crate::keywords::RuleSet;
use crate::{PlanError, PlanResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rules: RuleSet,
    export_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if `export_dir` is empty.
    pub fn new(rules: RuleSet, export_dir: PathBuf) -> PlanResult<Self> {
        if export_dir.as_os_str().is_empty() {
            return Err(PlanError::InvalidInput(
                "export_dir cannot be empty".into(),
            ));
        }

        Ok(Self { rules, export_dir })
    }

    /// Configuration with the default export directory, for processes that never write
    /// exports to disk.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Engine bound to the configured rule set.
    pub fn engine(&self) -> RecommendationEngine {
        RecommendationEngine::new(self.rules.clone())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

/// Load the keyword policy from an optional file path.
///
/// If `value` is `None` or empty/whitespace, returns the default rule set.
///
/// # Errors
///
/// Returns `PlanError` if the file cannot be read or does not match the rules schema.
pub fn rules_from_env_value(value: Option<String>) -> PlanResult<RuleSet> {
    let path = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(PlanError::FileRead)?;
            let rules = RuleSet::from_yaml(&text)?;
            tracing::info!(%path, "loaded rule set");
            Ok(rules)
        }
        None => Ok(RuleSet::default()),
    }
}

/// Resolve the export directory from an optional value, defaulting to `exports`.
pub fn export_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_default_when_unset_or_blank() {
        assert_eq!(rules_from_env_value(None).expect("rules"), RuleSet::default());
        assert_eq!(
            rules_from_env_value(Some("  ".into())).expect("rules"),
            RuleSet::default()
        );
    }

    #[test]
    fn rules_loaded_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rules.yaml");
        std::fs::write(&path, "checkup_age_above: 50\n").expect("write rules");

        let rules =
            rules_from_env_value(Some(path.display().to_string())).expect("rules loaded");
        assert_eq!(rules.checkup_age_above, 50);
    }

    #[test]
    fn missing_rules_file_is_an_error() {
        let err = rules_from_env_value(Some("/definitely/not/here.yaml".into()))
            .expect_err("missing file");
        assert!(matches!(err, PlanError::FileRead(_)));
    }

    #[test]
    fn export_dir_defaults() {
        assert_eq!(export_dir_from_env_value(None), PathBuf::from("exports"));
        assert_eq!(
            export_dir_from_env_value(Some("/tmp/out".into())),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn with_rules_keeps_default_export_dir() {
        let rules = RuleSet::from_yaml("checkup_age_above: 55\n").expect("rules");
        let cfg = CoreConfig::with_rules(rules);
        assert_eq!(cfg.rules().checkup_age_above, 55);
        assert_eq!(cfg.export_dir(), Path::new(DEFAULT_EXPORT_DIR));
    }

    #[test]
    fn config_rejects_empty_export_dir() {
        let err = CoreConfig::new(RuleSet::default(), PathBuf::new()).expect_err("empty dir");
        assert!(matches!(err, PlanError::InvalidInput(msg) if msg.contains("export_dir")));
    }
}
