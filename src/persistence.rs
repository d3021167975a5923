use crate::error::{AppError, Result};
use crate::types::{PortfolioData, ResumeData, ResumeEnvelope, StatusResponse};
use gloo::net::http::Request;

pub const SAVE_RESUME_PATH: &str = "/api/save-resume";
pub const GET_RESUME_PATH: &str = "/api/get-resume";
pub const SAVE_PORTFOLIO_PATH: &str = "/api/save-portfolio";

pub const MISSING_SECTIONS_MESSAGE: &str = "Some resume sections are not available. Please check the form.";

/// JSON client for the builder's backend
///
/// One request per call; nothing is retried or de-duplicated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST the resume; the server's `{status, message}` reply is returned whatever the HTTP status
    pub async fn save_resume(&self, data: &ResumeData) -> Result<StatusResponse> {
        let url = self.endpoint(SAVE_RESUME_PATH);
        log::debug!("POST {}", url);
        let response = Request::post(&url).json(data)?.send().await?;
        let reply: StatusResponse = response.json().await?;
        log::debug!("Save resume replied '{}' (HTTP {})", reply.status, response.status());
        Ok(reply)
    }

    /// Fetch the saved resume; `None` when the server reports anything but success
    pub async fn load_resume(&self) -> Result<Option<ResumeData>> {
        let url = self.endpoint(GET_RESUME_PATH);
        log::debug!("GET {}", url);
        let envelope: ResumeEnvelope = Request::get(&url).send().await?.json().await?;
        Ok(resume_from_envelope(envelope))
    }

    /// POST the portfolio; any non-2xx status is an error
    pub async fn save_portfolio(&self, data: &PortfolioData) -> Result<StatusResponse> {
        let url = self.endpoint(SAVE_PORTFOLIO_PATH);
        log::debug!("POST {}", url);
        let response = Request::post(&url).json(data)?.send().await?;
        if !response.ok() {
            return Err(AppError::HttpStatus {
                status: response.status(),
            });
        }
        let reply: StatusResponse = response.json().await?;
        Ok(reply)
    }
}

pub fn resume_from_envelope(envelope: ResumeEnvelope) -> Option<ResumeData> {
    if envelope.status != "success" {
        log::warn!(
            "Resume not loaded: {}",
            envelope.message.as_deref().unwrap_or(&envelope.status)
        );
        return None;
    }
    if envelope.data.is_none() {
        log::warn!("Resume reply had no data");
    }
    envelope.data
}

/// What the user is told after a resume save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    Rejected(Option<String>),
    Failed,
}

impl SaveOutcome {
    pub fn from_result(result: &Result<StatusResponse>) -> Self {
        match result {
            Ok(reply) if reply.is_success() => SaveOutcome::Saved,
            Ok(reply) => SaveOutcome::Rejected(reply.message.clone()),
            Err(e) => {
                log::error!("Error saving resume: {}", e);
                SaveOutcome::Failed
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved => "Resume saved successfully!".to_string(),
            SaveOutcome::Rejected(message) => format!(
                "Error saving resume: {}",
                message.as_deref().filter(|m| !m.is_empty()).unwrap_or("Unknown error")
            ),
            SaveOutcome::Failed => "Error saving resume. Please try again.".to_string(),
        }
    }
}
