use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Illustrative input/output pair shown alongside a problem. Never executed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub solution: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty_labels() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);

        let err = "Extreme".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::InvalidDifficulty(label) if label == "Extreme"));
    }

    #[test]
    fn test_record_from_yaml() {
        let yaml = r#"
id: "q-1"
title: "Closures"
description: "What is a closure?"
difficulty: Easy
category: "javascript"
solution: |
  function counter() {
    let n = 0;
    return () => ++n;
  }
testCases:
  - input: "const c = counter(); c(); c();"
    output: "2"
explanation: "A closure captures its lexical environment."
"#;
        let record: ContentRecord = serde_yaml::from_str(yaml).expect("Failed to parse record");

        assert_eq!(record.id, "q-1");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert!(record.solution.contains("return () => ++n;\n"));
        assert_eq!(
            record.test_cases,
            vec![TestCase {
                input: "const c = counter(); c(); c();".to_string(),
                output: "2".to_string(),
            }]
        );
    }

    #[test]
    fn test_record_without_test_cases() {
        let yaml = r#"
id: "q-2"
title: "t"
description: "d"
difficulty: Hard
category: "c"
solution: "s"
explanation: "e"
"#;
        let record: ContentRecord = serde_yaml::from_str(yaml).expect("Failed to parse record");
        assert!(record.test_cases.is_empty());
    }

    #[test]
    fn test_record_missing_field() {
        // No explanation
        let yaml = r#"
id: "q-3"
title: "t"
description: "d"
difficulty: Medium
category: "c"
solution: "s"
"#;
        let result: Result<ContentRecord, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_unknown_difficulty() {
        let yaml = r#"
id: "q-4"
title: "t"
description: "d"
difficulty: Trivial
category: "c"
solution: "s"
explanation: "e"
"#;
        let result: Result<ContentRecord, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let record = ContentRecord {
            id: "q-5".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            difficulty: Difficulty::Medium,
            category: "c".to_string(),
            solution: "s".to_string(),
            test_cases: vec![],
            explanation: "e".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("testCases").is_some());
        assert_eq!(value["difficulty"], "Medium");
    }
}
