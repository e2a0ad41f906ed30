use super::envelope::{AgentReply, decode_flat, decode_payload, decode_reply};
use super::http_client::{build_gateway_client, build_gateway_client_with_timeout};
use super::options::RequestOptions;
use super::scrub::error_detail;
use crate::config::BackendConfig;
use crate::core::models::{
    Assignment, AssignmentAnalysis, BreakRequest, BreakSuggestion, FullAnalysis, HealthStatus,
    MultiAgentRequest, Preferences, ScheduleRequest, SchedulePlan, WellnessInput, WellnessReport,
    WorkloadSummary,
};
use crate::error::GatewayError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const HEALTH_PATH: &str = "/";
pub const ANALYZE_ASSIGNMENT_PATH: &str = "/api/analyze-assignment";
pub const ANALYZE_WORKLOAD_PATH: &str = "/api/analyze-workload";
pub const CREATE_SCHEDULE_PATH: &str = "/api/create-schedule";
pub const WELLNESS_CHECK_PATH: &str = "/api/wellness-check";
pub const FULL_ANALYSIS_PATH: &str = "/api/full-analysis";
pub const SUGGEST_BREAK_PATH: &str = "/api/suggest-break";

/// Typed client for the multi-agent coaching backend.
///
/// Every call is an independent JSON exchange against `{base_url}{endpoint}`.
/// The gateway holds no per-call state, so clones can be shared freely across
/// tasks; it never retries, caches or coalesces requests.
#[derive(Debug, Clone)]
pub struct BackendGateway {
    base_url: String,
    client: Client,
}

impl BackendGateway {
    /// Gateway with no request timeout.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_client(base_url, build_gateway_client())
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        Self::with_client(base_url, build_gateway_client_with_timeout(timeout))
    }

    /// Gateway over a caller-supplied `reqwest` client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            client,
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, GatewayError> {
        Self::with_timeout(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Issue one JSON request and return the parsed body as-is.
    ///
    /// Non-2xx statuses, transport failures and non-JSON bodies are logged and
    /// returned unchanged to the caller.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, GatewayError> {
        let result = self.send(endpoint, options).await;
        if let Err(e) = &result {
            error!(endpoint, kind = %e.kind(), "API request failed: {e}");
        }
        result
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, GatewayError> {
        let url = self.url(endpoint);
        debug!(method = %options.method, %url, "sending backend request");

        let mut request = self
            .client
            .request(options.method.clone(), url.as_str())
            .headers(options.merged_headers());
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| GatewayError::invalid_request(endpoint, e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status,
                status_text,
                detail: error_detail(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport { url, source })?;
        serde_json::from_slice(&bytes).map_err(|source| GatewayError::MalformedResponse {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, GatewayError> {
        let body = serde_json::to_value(body)
            .map_err(|e| GatewayError::invalid_request(endpoint, e.to_string()))?;
        self.request(endpoint, RequestOptions::post(body)).await
    }

    /// Decode failures are logged here since `request` only sees raw JSON.
    fn logged<T>(endpoint: &str, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        if let Err(e) = &result {
            error!(endpoint, kind = %e.kind(), "API response rejected: {e}");
        }
        result
    }

    pub async fn health_check(&self) -> Result<HealthStatus, GatewayError> {
        let body = self.request(HEALTH_PATH, RequestOptions::get()).await?;
        Self::logged(HEALTH_PATH, decode_payload(HEALTH_PATH, body))
    }

    pub async fn analyze_assignment(
        &self,
        assignment: &Assignment,
    ) -> Result<AgentReply<AssignmentAnalysis>, GatewayError> {
        validate_assignments(ANALYZE_ASSIGNMENT_PATH, std::slice::from_ref(assignment))?;
        let body = self.post(ANALYZE_ASSIGNMENT_PATH, assignment).await?;
        Self::logged(
            ANALYZE_ASSIGNMENT_PATH,
            decode_reply(ANALYZE_ASSIGNMENT_PATH, body),
        )
    }

    /// The body is the plain assignment array, in caller order.
    pub async fn analyze_workload(
        &self,
        assignments: &[Assignment],
    ) -> Result<AgentReply<WorkloadSummary>, GatewayError> {
        validate_assignments(ANALYZE_WORKLOAD_PATH, assignments)?;
        let body = self.post(ANALYZE_WORKLOAD_PATH, &assignments).await?;
        Self::logged(
            ANALYZE_WORKLOAD_PATH,
            decode_reply(ANALYZE_WORKLOAD_PATH, body),
        )
    }

    pub async fn create_schedule(
        &self,
        assignments: &[Assignment],
        preferences: Option<&Preferences>,
    ) -> Result<AgentReply<SchedulePlan>, GatewayError> {
        validate_assignments(CREATE_SCHEDULE_PATH, assignments)?;
        validate_preferences(CREATE_SCHEDULE_PATH, preferences)?;
        let request = ScheduleRequest {
            assignments,
            preferences,
        };
        let body = self.post(CREATE_SCHEDULE_PATH, &request).await?;
        Self::logged(CREATE_SCHEDULE_PATH, decode_reply(CREATE_SCHEDULE_PATH, body))
    }

    pub async fn wellness_check(
        &self,
        assignments: &[Assignment],
        preferences: Option<&Preferences>,
        wellness_input: Option<&WellnessInput>,
    ) -> Result<AgentReply<WellnessReport>, GatewayError> {
        let request = multi_agent_request(
            WELLNESS_CHECK_PATH,
            assignments,
            preferences,
            wellness_input,
        )?;
        let body = self.post(WELLNESS_CHECK_PATH, &request).await?;
        Self::logged(WELLNESS_CHECK_PATH, decode_reply(WELLNESS_CHECK_PATH, body))
    }

    pub async fn full_analysis(
        &self,
        assignments: &[Assignment],
        preferences: Option<&Preferences>,
        wellness_input: Option<&WellnessInput>,
    ) -> Result<FullAnalysis, GatewayError> {
        let request = multi_agent_request(
            FULL_ANALYSIS_PATH,
            assignments,
            preferences,
            wellness_input,
        )?;
        let body = self.post(FULL_ANALYSIS_PATH, &request).await?;
        Self::logged(FULL_ANALYSIS_PATH, decode_flat(FULL_ANALYSIS_PATH, body))
    }

    pub async fn suggest_break(
        &self,
        current_activity: &str,
        time_worked: u32,
    ) -> Result<AgentReply<BreakSuggestion>, GatewayError> {
        let request = BreakRequest {
            current_activity,
            time_worked,
        };
        let body = self.post(SUGGEST_BREAK_PATH, &request).await?;
        Self::logged(SUGGEST_BREAK_PATH, decode_reply(SUGGEST_BREAK_PATH, body))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| GatewayError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".into()));
    }

    Ok(trimmed.to_string())
}

fn validate_assignments(endpoint: &str, assignments: &[Assignment]) -> Result<(), GatewayError> {
    assignments
        .iter()
        .try_for_each(Assignment::validate)
        .map_err(|reason| GatewayError::invalid_request(endpoint, reason))
}

fn validate_preferences(
    endpoint: &str,
    preferences: Option<&Preferences>,
) -> Result<(), GatewayError> {
    preferences
        .map_or(Ok(()), Preferences::validate)
        .map_err(|reason| GatewayError::invalid_request(endpoint, reason))
}

fn multi_agent_request<'a>(
    endpoint: &str,
    assignments: &'a [Assignment],
    preferences: Option<&'a Preferences>,
    wellness_input: Option<&'a WellnessInput>,
) -> Result<MultiAgentRequest<'a>, GatewayError> {
    validate_assignments(endpoint, assignments)?;
    validate_preferences(endpoint, preferences)?;
    wellness_input
        .map_or(Ok(()), WellnessInput::validate)
        .map_err(|reason| GatewayError::invalid_request(endpoint, reason))?;

    Ok(MultiAgentRequest {
        assignments,
        preferences,
        wellness_input,
    })
}
