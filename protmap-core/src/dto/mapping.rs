//! Mapping results response shapes

use serde::{Deserialize, Serialize};

/// One page of mapping results as returned by the results endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPage {
    pub results: Vec<MappingEntry>,
}

/// A single source-to-target mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    /// The queried source accession
    #[serde(default)]
    pub from: Option<String>,
    /// The mapped target record
    pub to: TargetEntry,
}

/// The mapped target record. The service returns the full entry; only the
/// primary accession is modeled, remaining fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEntry {
    #[serde(rename = "primaryAccession")]
    pub primary_accession: String,
}

impl ResultsPage {
    /// Target accessions in the order the service returned them.
    ///
    /// Service ordering is best-effort; it is preserved here, not
    /// re-established.
    pub fn accessions(self) -> Vec<String> {
        self.results
            .into_iter()
            .map(|entry| entry.to.primary_accession)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_accessions_in_service_order() {
        let page: ResultsPage = serde_json::from_value(json!({
            "results": [
                { "to": { "primaryAccession": "P12345" } },
                { "to": { "primaryAccession": "Q67890" } }
            ]
        }))
        .unwrap();

        assert_eq!(page.accessions(), vec!["P12345", "Q67890"]);
    }

    #[test]
    fn test_ignores_extra_entry_fields() {
        let page: ResultsPage = serde_json::from_value(json!({
            "results": [{
                "from": "WP_001338221.1",
                "to": {
                    "entryType": "UniProtKB reviewed (Swiss-Prot)",
                    "primaryAccession": "P12345",
                    "organism": { "taxonId": 83333 }
                }
            }]
        }))
        .unwrap();

        assert_eq!(page.results[0].from.as_deref(), Some("WP_001338221.1"));
        assert_eq!(page.accessions(), vec!["P12345"]);
    }

    #[test]
    fn test_missing_results_collection_is_rejected() {
        let malformed = serde_json::from_value::<ResultsPage>(json!({ "jobStatus": "FINISHED" }));
        assert!(malformed.is_err());
    }

    #[test]
    fn test_empty_results_are_valid() {
        let page: ResultsPage = serde_json::from_value(json!({ "results": [] })).unwrap();
        assert!(page.accessions().is_empty());
    }
}
