//! ID-mapping endpoints and the resolve orchestration

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::IdMappingClient;
use crate::error::{ClientError, Result};
use crate::poll::PollPolicy;
use protmap_core::domain::job::{JobHandle, JobState};
use protmap_core::domain::mapping::MappingRequest;
use protmap_core::dto::job::{JobStatusResponse, SubmitResponse};
use protmap_core::dto::mapping::ResultsPage;

/// The three remote calls of the mapping job workflow.
///
/// [`IdMappingClient`] is the HTTP implementation. The trait exists so the
/// orchestration in [`resolve_with`] and [`await_completion_with`] can be
/// exercised against in-memory backends in tests.
#[async_trait]
pub trait IdMappingService {
    /// Creates a mapping job on the service; returns the handle addressing it.
    async fn submit_job(&self, request: &MappingRequest) -> Result<JobHandle>;

    /// Issues one status query; returns the classified state together with
    /// the raw payload it was derived from.
    async fn job_status(&self, handle: &JobHandle) -> Result<(JobState, Value)>;

    /// Retrieves the mapped target accessions of a finished job, in the
    /// order the service provides them.
    async fn fetch_results(&self, handle: &JobHandle) -> Result<Vec<String>>;
}

#[async_trait]
impl IdMappingService for IdMappingClient {
    async fn submit_job(&self, request: &MappingRequest) -> Result<JobHandle> {
        if request.ids.is_empty() {
            return Err(ClientError::InvalidRequest(
                "source identifier must not be empty".to_string(),
            ));
        }

        let url = format!("{}/idmapping/run", self.base_url());
        debug!(ids = %request.ids, from = %request.from, to = %request.to, "Submitting mapping job");

        let response = self.http.post(&url).form(request).send().await?;
        let body: SubmitResponse = self.handle_response(response).await?;

        Ok(JobHandle::new(body.job_id))
    }

    async fn job_status(&self, handle: &JobHandle) -> Result<(JobState, Value)> {
        let url = format!("{}/idmapping/status/{}", self.base_url(), handle.job_id);

        let response = self.http.get(&url).send().await?;
        let payload = self.handle_raw_response(response).await?;

        let status: JobStatusResponse = serde_json::from_value(payload.clone())
            .map_err(|e| ClientError::Protocol(format!("Malformed status body: {}", e)))?;

        if let Some(state) = status.conflicting_state() {
            warn!(
                job_id = %handle.job_id,
                state,
                "Status reports a non-success state alongside inline results; treating results as authoritative"
            );
        }

        Ok((JobState::classify(&status), payload))
    }

    async fn fetch_results(&self, handle: &JobHandle) -> Result<Vec<String>> {
        let url = format!(
            "{}/idmapping/uniprotkb/results/{}",
            self.base_url(),
            handle.job_id
        );

        let response = self.http.get(&url).send().await?;
        let page: ResultsPage = self.handle_response(response).await?;

        Ok(page.accessions())
    }
}

impl IdMappingClient {
    /// Polls until the job reaches a terminal state, honoring the
    /// configured [`PollPolicy`].
    pub async fn await_completion(&self, handle: &JobHandle) -> Result<()> {
        await_completion_with(self, &self.poll, handle).await
    }

    /// Runs the full submit -> poll -> fetch workflow for one request.
    pub async fn resolve(&self, request: &MappingRequest) -> Result<Vec<String>> {
        resolve_with(self, &self.poll, request).await
    }
}

/// Polls `service` until `handle` is terminal.
///
/// `Pending` is the only retried condition; each retry sleeps the policy's
/// delay for that attempt. A terminal failure state fails with
/// [`ClientError::JobFailed`] carrying the raw status payload; exhausting
/// the poll budget fails with [`ClientError::PollLimitExceeded`].
pub async fn await_completion_with<S>(
    service: &S,
    policy: &PollPolicy,
    handle: &JobHandle,
) -> Result<()>
where
    S: IdMappingService + ?Sized,
{
    let mut attempt: u32 = 0;

    loop {
        let (state, payload) = service.job_status(handle).await?;

        match state {
            JobState::Ready => {
                debug!(job_id = %handle.job_id, attempt, "Mapping job finished");
                return Ok(());
            }
            JobState::Failed => {
                return Err(ClientError::JobFailed {
                    job_id: handle.job_id.clone(),
                    payload,
                });
            }
            JobState::Pending => {
                attempt += 1;
                if attempt >= policy.max_attempts {
                    return Err(ClientError::PollLimitExceeded {
                        job_id: handle.job_id.clone(),
                        attempts: attempt,
                    });
                }

                let delay = policy.delay(attempt);
                debug!(job_id = %handle.job_id, attempt, ?delay, "Mapping job still running");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Runs submit, await, fetch strictly in order against `service`.
///
/// Errors from any stage propagate unchanged; there is no partial-result
/// recovery. The job handle lives exactly for the span of this call and is
/// never shared with another workflow.
pub async fn resolve_with<S>(
    service: &S,
    policy: &PollPolicy,
    request: &MappingRequest,
) -> Result<Vec<String>>
where
    S: IdMappingService + ?Sized,
{
    let handle = service.submit_job(request).await?;
    info!(job_id = %handle.job_id, ids = %request.ids, "Mapping job submitted");

    await_completion_with(service, policy, &handle).await?;

    let accessions = service.fetch_results(&handle).await?;
    info!(job_id = %handle.job_id, count = accessions.len(), "Mapping job resolved");

    Ok(accessions)
}
