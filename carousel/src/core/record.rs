//! Export record shape and import validation.
//!
//! The record is the archival unit for repeat avoidance: written once at export
//! time and only ever read back to seed a later draw.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::DrawError;
use crate::core::exclusions::ExclusionMap;
use crate::core::merge::merge_results;
use crate::core::types::Pairing;

/// Serialized form of a finished draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub draw_name: String,
    pub names: Vec<String>,
    pub exclusions: ExclusionMap,
    pub results: Vec<Pairing>,
    /// `YYYY-MM-DD`.
    pub export_date: String,
}

/// Lenient view of a record for import: only `names` is required.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    names: Vec<String>,
    exclusions: Option<ExclusionMap>,
    results: Option<Vec<Pairing>>,
}

/// Validated import, ready to seed a new draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedDraw {
    /// Participant list, untouched.
    pub names: Vec<String>,
    /// Prior exclusions plus every prior pairing.
    pub exclusions: ExclusionMap,
    /// Number of prior pairings folded into `exclusions`.
    pub prior_results: usize,
}

/// Parse and validate an exported record, merging its results into exclusions.
///
/// Absent or `null` `exclusions`/`results` are treated as empty. A missing or
/// non-array `names` rejects the whole import.
pub fn parse_import(raw: &str) -> Result<ImportedDraw, DrawError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| DrawError::invalid_import(err.to_string()))?;
    if !value.get("names").is_some_and(Value::is_array) {
        return Err(DrawError::invalid_import("missing names array"));
    }
    let record: ImportRecord =
        serde_json::from_value(value).map_err(|err| DrawError::invalid_import(err.to_string()))?;

    let base = record.exclusions.unwrap_or_default();
    let results = record.results.unwrap_or_default();
    Ok(ImportedDraw {
        names: record.names,
        exclusions: merge_results(&base, &results),
        prior_results: results.len(),
    })
}

/// File name for an export: whitespace runs in the draw name become `_`.
pub fn export_file_name(draw_name: &str, date: &str) -> String {
    let safe_name = draw_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{safe_name}_{date}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::exclusions;

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = ExportRecord {
            draw_name: "Winter Gala".to_string(),
            names: vec!["Alice".to_string()],
            exclusions: ExclusionMap::new(),
            results: Vec::new(),
            export_date: "2026-10-16".to_string(),
        };
        let value = serde_json::to_value(&record).expect("serialize");
        for key in ["drawName", "names", "exclusions", "results", "exportDate"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn import_merges_results_without_duplicates() {
        let raw = r#"{
            "drawName": "Prior",
            "names": ["Alice", "Bob", "Charlie"],
            "exclusions": {"Alice": ["Bob"]},
            "results": [{"name": "Alice", "gives_to": "Bob"}],
            "exportDate": "2025-12-01"
        }"#;
        let imported = parse_import(raw).expect("import");
        assert_eq!(imported.names, vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(
            imported.exclusions.excluded_for("Alice").collect::<Vec<_>>(),
            vec!["Bob"]
        );
        assert_eq!(imported.prior_results, 1);
    }

    #[test]
    fn import_tolerates_missing_and_null_optional_fields() {
        let imported = parse_import(r#"{"names": ["A", "B", "C"]}"#).expect("import");
        assert_eq!(imported.exclusions, ExclusionMap::new());

        let imported =
            parse_import(r#"{"names": ["A", "B", "C"], "exclusions": null, "results": null}"#)
                .expect("import");
        assert_eq!(imported.exclusions, ExclusionMap::new());
        assert_eq!(imported.prior_results, 0);
    }

    #[test]
    fn import_ignores_extra_result_fields() {
        let raw = r#"{"names": ["A", "B", "C"], "results": [
            {"name": "A", "drawn": true, "exclusions": [], "gives_to": "B"}
        ]}"#;
        let imported = parse_import(raw).expect("import");
        assert_eq!(imported.exclusions, exclusions(&[("A", &["B"])]));
    }

    #[test]
    fn import_without_names_is_rejected() {
        let err = parse_import(r#"{"drawName": "x", "results": []}"#).unwrap_err();
        assert_eq!(err, DrawError::invalid_import("missing names array"));

        let err = parse_import(r#"{"names": "Alice"}"#).unwrap_err();
        assert_eq!(err, DrawError::invalid_import("missing names array"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_import("{not valid json").unwrap_err();
        assert!(matches!(err, DrawError::InvalidImportFormat { .. }));
        assert!(err.to_string().starts_with("Invalid draw file: "));
    }

    #[test]
    fn export_file_name_collapses_whitespace() {
        assert_eq!(
            export_file_name("Grand  Gala October 2026", "2026-10-16"),
            "Grand_Gala_October_2026_2026-10-16.json"
        );
    }
}
