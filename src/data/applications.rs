//! Embedded applications dataset.
//!
//! The upstream system exports application metadata as uppercase-keyed JSON
//! records; the dataset is compiled into the binary so the demo runs with
//! no external files.

use serde::Deserialize;

/// Raw record as it appears in `data/applications.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApplicationRecord {
    #[serde(rename = "APP_ID")]
    pub app_id: u32,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
    #[serde(rename = "ISACTIVE")]
    pub is_active: bool,
}

const APPLICATIONS_JSON: &str = include_str!("../../data/applications.json");

/// Parses the embedded dataset.
pub fn load_application_records() -> Result<Vec<ApplicationRecord>, serde_json::Error> {
    serde_json::from_str(APPLICATIONS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let records = load_application_records().expect("embedded dataset must be valid");
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.is_active));
        // IDs are unique
        let mut ids: Vec<u32> = records.iter().map(|r| r.app_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn uppercase_keys_map_to_fields() {
        let json = r#"[{"APP_ID": 7, "NAME": "X", "DESCRIPTION": "d", "ISACTIVE": false}]"#;
        let records: Vec<ApplicationRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].app_id, 7);
        assert!(!records[0].is_active);
    }
}
