//! Storage location suggestions for cleaned items.
//!
//! Rules come from configuration as an ordered list. The first rule with a
//! keyword contained in the lower-cased description wins. When nothing
//! matches, the last rule acts as the catch-all, so rule order is
//! significant: put the generic shelf last.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::item_status::ItemStatus;

/// Suggestion returned when no rules are configured at all.
pub const DEFAULT_SUGGESTION: &str = "Stockage par défaut";

/// One keyword rule from the storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRule {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub suggestion: String,
}

/// Keyword matcher built once from configuration and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct StorageSuggester {
    rules: Vec<StorageRule>,
}

impl StorageSuggester {
    /// Build a suggester. Keywords are lower-cased here so matching against
    /// the lower-cased description is case-insensitive.
    pub fn new(rules: Vec<StorageRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| StorageRule {
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                suggestion: rule.suggestion,
            })
            .collect();
        Self { rules }
    }

    /// Suggest a storage location for a description.
    pub fn suggest(&self, description: &str) -> String {
        let desc = description.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| desc.contains(k.as_str())))
            .or_else(|| self.rules.last())
            .map(|rule| rule.suggestion.clone())
            .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string())
    }

    /// Suggest a storage location for an item, which must be cleaned.
    pub fn suggest_for(
        &self,
        status: ItemStatus,
        description: Option<&str>,
    ) -> Result<String, CoreError> {
        if status != ItemStatus::Cleaned {
            return Err(CoreError::InvalidState(format!(
                "Item is '{status}', storage can only be suggested once it is cleaned"
            )));
        }
        let description = description.ok_or_else(|| {
            CoreError::Validation("Item has no description to match against".into())
        })?;
        Ok(self.suggest(description))
    }
}
