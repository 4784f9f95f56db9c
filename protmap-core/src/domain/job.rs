//! Mapping job domain types

use serde::{Deserialize, Serialize};

use crate::dto::job::JobStatusResponse;

/// Handle addressing one in-flight mapping job.
///
/// Valid only between a successful submit and the terminal fetch of the
/// same workflow instance; never reused across independent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    /// Opaque identifier issued by the submission endpoint
    pub job_id: String,
}

impl JobHandle {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.job_id)
    }
}

/// Job status as derived from a single status response.
///
/// Derived fresh on every poll; never cached across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Job is queued or still running; poll again
    Pending,
    /// Results are available; proceed to fetch
    Ready,
    /// Terminal non-success state
    Failed,
}

impl JobState {
    /// Classifies a status response body.
    ///
    /// An inline `results` field is the authoritative completion signal:
    /// the job is `Ready` even when `jobStatus` simultaneously carries a
    /// conflicting value (see [`JobStatusResponse::conflicting_state`]).
    /// Without inline results, `NEW` and `RUNNING` are in-progress,
    /// `FINISHED` is terminal success, and every other shape is a failure.
    pub fn classify(status: &JobStatusResponse) -> JobState {
        if status.results.is_some() {
            return JobState::Ready;
        }

        match status.job_status.as_deref() {
            Some("NEW") | Some("RUNNING") => JobState::Pending,
            Some("FINISHED") => JobState::Ready,
            _ => JobState::Failed,
        }
    }

    /// Whether this state ends the polling loop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(body: serde_json::Value) -> JobStatusResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_in_progress_states_are_pending() {
        for state in ["NEW", "RUNNING"] {
            let parsed = status(json!({ "jobStatus": state }));
            assert_eq!(JobState::classify(&parsed), JobState::Pending);
        }
    }

    #[test]
    fn test_finished_state_is_ready() {
        let parsed = status(json!({ "jobStatus": "FINISHED" }));
        assert_eq!(JobState::classify(&parsed), JobState::Ready);
    }

    #[test]
    fn test_inline_results_are_ready_without_state() {
        let parsed = status(json!({ "results": [{ "from": "WP_1" }] }));
        assert_eq!(JobState::classify(&parsed), JobState::Ready);
    }

    #[test]
    fn test_inline_results_override_error_state() {
        let parsed = status(json!({ "jobStatus": "ERROR", "results": [] }));
        assert_eq!(JobState::classify(&parsed), JobState::Ready);
        assert_eq!(parsed.conflicting_state(), Some("ERROR"));
    }

    #[test]
    fn test_unknown_state_is_failed() {
        let parsed = status(json!({ "jobStatus": "ERROR" }));
        assert_eq!(JobState::classify(&parsed), JobState::Failed);

        let empty = status(json!({}));
        assert_eq!(JobState::classify(&empty), JobState::Failed);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!JobState::Pending.is_terminal());
        assert!(JobState::Ready.is_terminal());
        assert!(JobState::Failed.is_terminal());
    }
}
