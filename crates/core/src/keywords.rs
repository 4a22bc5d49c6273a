//! Keyword policy for free-text rules.
//!
//! Free-text answers are matched with a plain case-insensitive "contains" check. There is
//! no word-boundary handling: `"prediabetes"` matches `"diabetes"` and `"heartburn"`
//! matches `"heart"`.

use crate::constants::{
    CARDIAC_KEYWORDS, CHECKUP_AGE_ABOVE, DIABETES_KEYWORDS, HYPERTENSION_KEYWORDS,
};
use crate::{PlanError, PlanResult};
use careplan_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// A set of lower-cased keywords matched as substrings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<NonEmptyText>);

impl KeywordSet {
    /// Build a set from raw keywords.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidKeyword`] if any keyword is blank, or
    /// [`PlanError::InvalidInput`] if the set is empty.
    pub fn new<I, S>(keywords: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(NonEmptyText::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_texts(keywords)
    }

    fn from_texts(keywords: Vec<NonEmptyText>) -> PlanResult<Self> {
        if keywords.is_empty() {
            return Err(PlanError::InvalidInput(
                "keyword set cannot be empty".into(),
            ));
        }
        Ok(Self(keywords.iter().map(NonEmptyText::to_lowercase).collect()))
    }

    fn from_static(keywords: &[&str]) -> Self {
        Self(
            keywords
                .iter()
                .filter_map(|k| NonEmptyText::new(k).ok())
                .map(|k| k.to_lowercase())
                .collect(),
        )
    }

    /// True when `text`, lower-cased, contains any keyword.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let haystack = text.to_lowercase();
        self.0.iter().any(|k| haystack.contains(k.as_str()))
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(NonEmptyText::as_str)
    }
}

impl<'de> Deserialize<'de> for KeywordSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keywords = Vec::<NonEmptyText>::deserialize(deserializer)?;
        KeywordSet::from_texts(keywords).map_err(serde::de::Error::custom)
    }
}

/// Configurable parts of the rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    /// Ages strictly above this get the check-up message.
    pub checkup_age_above: u8,
    /// Matched against medical conditions.
    pub diabetes: KeywordSet,
    /// Matched against medical conditions.
    pub hypertension: KeywordSet,
    /// Matched against family history.
    pub cardiac: KeywordSet,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            checkup_age_above: CHECKUP_AGE_ABOVE,
            diabetes: KeywordSet::from_static(DIABETES_KEYWORDS),
            hypertension: KeywordSet::from_static(HYPERTENSION_KEYWORDS),
            cardiac: KeywordSet::from_static(CARDIAC_KEYWORDS),
        }
    }
}

impl RuleSet {
    /// Parse a rule set from YAML. Missing keys keep their defaults; unknown keys are
    /// rejected with the offending path.
    pub fn from_yaml(yaml_text: &str) -> PlanResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        serde_path_to_error::deserialize::<_, RuleSet>(deserializer).map_err(|err| {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            PlanError::RulesSchema {
                path,
                message: err.into_inner().to_string(),
            }
        })
    }
}
