//! Content workspace client.
//!
//! This crate provides:
//! - [`ContentSource`] — the fetch seam the pipeline runs against
//! - [`HttpContentSource`] — the reqwest-backed implementation
//! - [`records`] — wire DTOs validated into domain records at the boundary

pub mod records;

use tracing::{debug, instrument};
use url::Url;

use partialgen_shared::{AppConfig, Definition, FaqEntry, PartialgenError, Project, Result};

use records::{DefinitionRecord, Envelope, FaqRecord, ProjectRecord};

/// Read access to a project's content.
///
/// The pipeline is generic over this trait; tests substitute an in-memory
/// implementation for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Look up a project by its human-readable name.
    async fn find_project(&self, name: &str) -> Result<Project>;

    /// List all FAQ records belonging to a project.
    async fn list_faqs(&self, project_id: &str) -> Result<Vec<FaqEntry>>;

    /// List all definition records belonging to a project.
    async fn list_definitions(&self, project_id: &str) -> Result<Vec<Definition>>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// HTTP client for the content workspace API.
#[derive(Debug)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: Url,
    token: String,
    glossary_path_fallback: String,
}

impl HttpContentSource {
    /// Build a client from the application config and the API token.
    pub fn new(config: &AppConfig, token: String) -> Result<Self> {
        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment.
        let mut base = config.source.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| {
            PartialgenError::config(format!(
                "invalid source base_url \"{}\": {e}",
                config.source.base_url
            ))
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("partialgen/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.source.timeout_secs))
            .build()
            .map_err(|e| PartialgenError::Network(format!("client build: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token,
            glossary_path_fallback: config.project.glossary_path.clone(),
        })
    }

    /// Issue a GET against an API path and deserialize the list envelope.
    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Envelope<T>> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PartialgenError::Network(format!("{path}: {e}")))?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        debug!(%url, "fetching");

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| PartialgenError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PartialgenError::Network(format!("{url}: HTTP {status}")));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| PartialgenError::Network(format!("{url}: {e}")))
    }
}

impl ContentSource for HttpContentSource {
    #[instrument(skip(self))]
    async fn find_project(&self, name: &str) -> Result<Project> {
        let envelope: Envelope<ProjectRecord> =
            self.get_envelope("v1/projects", Some(("name", name))).await?;

        let record = envelope
            .results
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                PartialgenError::Network(format!("no project named \"{name}\" in the workspace"))
            })?;

        record.into_domain(&self.glossary_path_fallback)
    }

    #[instrument(skip(self))]
    async fn list_faqs(&self, project_id: &str) -> Result<Vec<FaqEntry>> {
        let envelope: Envelope<FaqRecord> = self
            .get_envelope(&format!("v1/projects/{project_id}/faqs"), None)
            .await?;

        envelope
            .results
            .into_iter()
            .map(FaqRecord::into_domain)
            .collect()
    }

    #[instrument(skip(self))]
    async fn list_definitions(&self, project_id: &str) -> Result<Vec<Definition>> {
        let envelope: Envelope<DefinitionRecord> = self
            .get_envelope(&format!("v1/projects/{project_id}/definitions"), None)
            .await?;

        envelope
            .results
            .into_iter()
            .map(DefinitionRecord::into_domain)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
