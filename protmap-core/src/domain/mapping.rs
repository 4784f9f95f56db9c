//! Mapping request domain types

use serde::{Deserialize, Serialize};

/// Default source namespace (RefSeq protein accessions).
pub const DEFAULT_FROM_DB: &str = "RefSeq_Protein";

/// Default target namespace (UniProtKB entries).
pub const DEFAULT_TO_DB: &str = "UniProtKB";

/// A single identifier-mapping request.
///
/// Field names match the form parameters of the job-submission endpoint
/// (`from`, `to`, `ids`), so the struct serializes directly into the
/// request body. Constructed once per workflow and not mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingRequest {
    /// Source namespace the input accession belongs to
    pub from: String,
    /// Target namespace to map into
    pub to: String,
    /// The accession to map
    pub ids: String,
}

impl MappingRequest {
    /// Creates a request with the default RefSeq -> UniProtKB namespaces.
    pub fn new(ids: impl Into<String>) -> Self {
        Self::with_namespaces(DEFAULT_FROM_DB, DEFAULT_TO_DB, ids)
    }

    /// Creates a request with explicit source and target namespaces.
    pub fn with_namespaces(
        from: impl Into<String>,
        to: impl Into<String>,
        ids: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ids: ids.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespaces() {
        let request = MappingRequest::new("WP_001338221.1");
        assert_eq!(request.from, "RefSeq_Protein");
        assert_eq!(request.to, "UniProtKB");
        assert_eq!(request.ids, "WP_001338221.1");
    }

    #[test]
    fn test_serializes_to_wire_parameter_names() {
        let request = MappingRequest::with_namespaces("RefSeq_Protein", "UniProtKB", "WP_1");
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["from"], "RefSeq_Protein");
        assert_eq!(encoded["to"], "UniProtKB");
        assert_eq!(encoded["ids"], "WP_1");
    }
}
