//! JSON export of collections for the external renderer

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::content::{Collection, ContentRecord};
use crate::error::Result;

/// A collection snapshot as handed to the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Export<'a> {
    pub collection: &'a str,
    pub title: Option<&'a str>,
    pub generated_at: String,
    pub problems: Vec<&'a ContentRecord>,
}

impl<'a> Export<'a> {
    pub fn new(collection: &'a Collection, problems: Vec<&'a ContentRecord>) -> Self {
        Self::at(collection, problems, Utc::now())
    }

    pub fn at(
        collection: &'a Collection,
        problems: Vec<&'a ContentRecord>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Export {
            collection: &collection.name,
            title: collection.title.as_deref(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            problems,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The collection's problems as a pretty-printed JSON array.
pub fn to_json(collection: &Collection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection.problems())?)
}

pub fn from_json(json: &str) -> Result<Vec<ContentRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::library;
    use chrono::TimeZone;
    use serde_json::Value;

    #[test]
    fn test_json_round_trip_bundled() {
        for collection in library().unwrap().collections() {
            let json = to_json(collection).expect("Failed to export");
            let parsed = from_json(&json).expect("Failed to parse export");
            assert_eq!(parsed, collection.problems());
        }
    }

    #[test]
    fn test_round_trip_keeps_multiline_text() {
        let collection = library().unwrap().collection("nodeGeneralProblems").unwrap();
        let parsed = from_json(&to_json(collection).unwrap()).unwrap();

        let original = collection.get_by_id("nodejs-1").unwrap();
        assert!(original.solution.contains('\n'));
        assert!(original.explanation.contains("\n\n"));
        assert_eq!(parsed[0].solution, original.solution);
        assert_eq!(parsed[0].explanation, original.explanation);
    }

    #[test]
    fn test_export_envelope() {
        let collection = library()
            .unwrap()
            .collection("architectureIntermediateProblems")
            .unwrap();
        let generated_at = Utc.with_ymd_and_hms(2025, 3, 6, 12, 0, 0).unwrap();
        let export = Export::at(collection, collection.problems().iter().collect(), generated_at);

        let value: Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
        assert_eq!(value["collection"], "architectureIntermediateProblems");
        assert_eq!(value["title"], "Frontend Architecture (Intermediate)");
        assert_eq!(value["generatedAt"], "2025-03-06T12:00:00Z");
        assert_eq!(value["problems"][0]["id"], "arch-inter-1");
        assert!(value["problems"][0]["testCases"].is_array());
    }
}
