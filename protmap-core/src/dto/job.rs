//! Job submission and status response shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of the job-submission endpoint.
///
/// `jobId` is mandatory; a body without it fails deserialization and is
/// surfaced as a protocol error by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

/// Response body of the job-status endpoint.
///
/// The service answers with either a bare `jobStatus` string (`NEW`,
/// `RUNNING`, `FINISHED`, ...) or, once the job is done, the results
/// inline. Both fields are optional on the wire; their combination is
/// interpreted by `JobState::classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    #[serde(rename = "jobStatus")]
    pub job_status: Option<String>,
    /// Inline results; presence alone signals completion
    pub results: Option<Value>,
}

impl JobStatusResponse {
    /// Returns the reported state string when it contradicts inline
    /// results: results are present but the state is neither in-progress
    /// nor `FINISHED`. Callers log this before treating the job as done.
    pub fn conflicting_state(&self) -> Option<&str> {
        if self.results.is_none() {
            return None;
        }

        match self.job_status.as_deref() {
            Some("NEW") | Some("RUNNING") | Some("FINISHED") | None => None,
            Some(other) => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_response_requires_job_id() {
        let ok: SubmitResponse = serde_json::from_value(json!({ "jobId": "a1b2c3" })).unwrap();
        assert_eq!(ok.job_id, "a1b2c3");

        let missing = serde_json::from_value::<SubmitResponse>(json!({ "status": "ok" }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_status_response_accepts_both_shapes() {
        let running: JobStatusResponse =
            serde_json::from_value(json!({ "jobStatus": "RUNNING" })).unwrap();
        assert_eq!(running.job_status.as_deref(), Some("RUNNING"));
        assert!(running.results.is_none());

        let done: JobStatusResponse =
            serde_json::from_value(json!({ "results": [{ "from": "WP_1" }] })).unwrap();
        assert!(done.job_status.is_none());
        assert!(done.results.is_some());
    }

    #[test]
    fn test_conflicting_state_only_with_results() {
        let conflict: JobStatusResponse =
            serde_json::from_value(json!({ "jobStatus": "ERROR", "results": [] })).unwrap();
        assert_eq!(conflict.conflicting_state(), Some("ERROR"));

        let plain_error: JobStatusResponse =
            serde_json::from_value(json!({ "jobStatus": "ERROR" })).unwrap();
        assert_eq!(plain_error.conflicting_state(), None);

        let finished: JobStatusResponse =
            serde_json::from_value(json!({ "jobStatus": "FINISHED", "results": [] })).unwrap();
        assert_eq!(finished.conflicting_state(), None);
    }
}
