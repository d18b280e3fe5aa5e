//! HTTP client for the migration-audit backend.
//!
//! One method per backend operation, every failure mapped into [`ApiError`].
//! Retry policy is deliberately absent: the status poll loop owns cadence.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use crate::core::config;

use super::error::ApiError;
use super::model::{AuditResults, CreatedProject, StatusSnapshot};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            base_url: raw.trim_end_matches('/').to_string(),
            http: build_http(),
        }
    }

    /// Client pointed at the configured backend (`core::config`).
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a project from the submitted form. Validation happens before
    /// any bytes leave the machine.
    pub async fn create_project(&self, form: &NewProjectForm) -> Result<CreatedProject, ApiError> {
        form.validate()?;
        let multipart = form.multipart()?;
        let value = self
            .execute(
                self.http
                    .post(self.endpoint("migration-projects"))
                    .multipart(multipart),
            )
            .await?;
        let project = value
            .get("project")
            .cloned()
            .ok_or_else(|| ApiError::Decode("missing `project` in create response".into()))?;
        serde_json::from_value(project).map_err(ApiError::decode)
    }

    /// Kick off the backend's async audit pipeline for a created project.
    pub async fn start_processing(&self, project_id: &str) -> Result<(), ApiError> {
        self.execute(
            self.http
                .post(self.endpoint(&format!("migration-projects/{project_id}/process"))),
        )
        .await
        .map(|_| ())
    }

    /// Create, then start processing. Processing is requested only once
    /// creation has succeeded; a creation failure sends nothing else.
    pub async fn create_and_start(&self, form: &NewProjectForm) -> Result<CreatedProject, ApiError> {
        let created = self.create_project(form).await?;
        self.start_processing(&created.id).await?;
        Ok(created)
    }

    pub async fn fetch_status(&self, project_id: &str) -> Result<StatusSnapshot, ApiError> {
        let value = self
            .execute(
                self.http
                    .get(self.endpoint(&format!("migration-projects/{project_id}/status"))),
            )
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    pub async fn fetch_results(&self, project_id: &str) -> Result<AuditResults, ApiError> {
        let value = self
            .execute(
                self.http
                    .get(self.endpoint(&format!("migration-projects/{project_id}/results"))),
            )
            .await?;
        let envelope: ResultsEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.results)
    }

    /// Download link for a report. Rendered as a plain link; the file itself
    /// is never parsed by this client.
    pub fn export_url(
        &self,
        project_id: &str,
        format: ExportFormat,
        section: ExportSection,
    ) -> String {
        format!(
            "{}/migration-projects/{}/export?format={}&section={}",
            self.base_url,
            project_id,
            format.as_str(),
            section.as_str()
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::transport)?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(ApiError::decode)
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            })
        }
    }
}

fn build_http() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

/// Message for a non-2xx response: the body's `error` field when the backend
/// sent one, a generic fallback otherwise.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|err| err.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Unknown error (HTTP {status})"))
}

#[derive(Debug, Default, Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: AuditResults,
}

// ---------------------------------------------------------------------------
// Project creation form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the New Project view collects. The two sitemaps are required;
/// the GSC export and redirect mapping are optional extras the backend uses
/// to prioritize and pre-seed URL matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProjectForm {
    pub project_name: String,
    pub description: String,
    pub old_base_url: String,
    pub new_base_url: String,
    pub old_sitemap: Option<FilePayload>,
    pub new_sitemap: Option<FilePayload>,
    pub gsc_export: Option<FilePayload>,
    pub redirect_mapping: Option<FilePayload>,
}

impl NewProjectForm {
    /// Labels of the required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.project_name.trim().is_empty() {
            missing.push("project name");
        }
        if self.old_base_url.trim().is_empty() {
            missing.push("old base URL");
        }
        if self.new_base_url.trim().is_empty() {
            missing.push("new base URL");
        }
        if self.old_sitemap.is_none() {
            missing.push("old sitemap (XML)");
        }
        if self.new_sitemap.is_none() {
            missing.push("new sitemap (XML)");
        }
        missing
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "Please fill all required fields: {}",
                missing.join(", ")
            )))
        }
    }

    fn multipart(&self) -> Result<Form, ApiError> {
        let old_sitemap = required_file(&self.old_sitemap, "old sitemap")?;
        let new_sitemap = required_file(&self.new_sitemap, "new sitemap")?;

        let mut form = Form::new()
            .text("projectName", self.project_name.clone())
            .text("description", self.description.clone())
            .text("oldBaseUrl", self.old_base_url.clone())
            .text("newBaseUrl", self.new_base_url.clone())
            .part("oldSitemap", file_part(old_sitemap, "application/xml")?)
            .part("newSitemap", file_part(new_sitemap, "application/xml")?);

        if let Some(gsc) = &self.gsc_export {
            form = form.part("gscExport", file_part(gsc, "text/csv")?);
        }
        if let Some(redirects) = &self.redirect_mapping {
            form = form.part("redirectMapping", file_part(redirects, "text/csv")?);
        }

        Ok(form)
    }

}

fn required_file<'a>(
    slot: &'a Option<FilePayload>,
    label: &str,
) -> Result<&'a FilePayload, ApiError> {
    slot.as_ref()
        .ok_or_else(|| ApiError::Validation(format!("Missing required upload: {label}")))
}

fn file_part(payload: &FilePayload, mime: &str) -> Result<Part, ApiError> {
    Part::bytes(payload.bytes.clone())
        .file_name(payload.file_name.clone())
        .mime_str(mime)
        .map_err(ApiError::transport)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSection {
    All,
    Seo,
}

impl ExportSection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Seo => "seo",
        }
    }
}
