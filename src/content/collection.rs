use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::record::{ContentRecord, Difficulty};
use crate::error::{Error, Result};

/// A named, ordered list of problems as stored in one YAML document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub problems: Vec<ContentRecord>,
}

impl Collection {
    /// Parses and validates a collection. `source_name` only appears in errors.
    pub fn from_yaml(source_name: &str, text: &str) -> Result<Collection> {
        let collection: Collection =
            serde_yaml::from_str(text).map_err(|e| Error::Malformed {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        collection.validate(source_name)?;

        debug!(
            "Loaded collection {} ({} problems) from {}",
            collection.name,
            collection.problems.len(),
            source_name
        );
        Ok(collection)
    }

    pub fn load(path: &Path) -> Result<Collection> {
        let text = fs::read_to_string(path)?;
        Collection::from_yaml(&path.display().to_string(), &text)
    }

    fn validate(&self, source_name: &str) -> Result<()> {
        let malformed = |message: String| Error::Malformed {
            source_name: source_name.to_string(),
            message,
        };

        if self.name.trim().is_empty() {
            return Err(malformed("collection name is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for (index, problem) in self.problems.iter().enumerate() {
            if problem.id.trim().is_empty() {
                return Err(malformed(format!("problem #{} has an empty id", index + 1)));
            }
            if !seen.insert(problem.id.as_str()) {
                return Err(Error::DuplicateId {
                    collection: self.name.clone(),
                    id: problem.id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn problems(&self) -> &[ContentRecord] {
        &self.problems
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn get_by_id(&self, id: &str) -> Result<&ContentRecord> {
        self.get(id).ok_or_else(|| Error::RecordNotFound {
            collection: self.name.clone(),
            id: id.to_string(),
        })
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&ContentRecord> {
        self.problems
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn filter_by_difficulty(&self, difficulty: Difficulty) -> Vec<&ContentRecord> {
        self.problems
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.problems
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Problems whose title or description matches `pattern`.
    pub fn search(&self, pattern: &Regex) -> Vec<&ContentRecord> {
        self.problems
            .iter()
            .filter(|p| pattern.is_match(&p.title) || pattern.is_match(&p.description))
            .collect()
    }
}
