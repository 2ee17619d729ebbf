//! Cloud API client
//!
//! [`CloudApi`] is the fetch boundary the command bindings call: one method per
//! resource operation, each yielding a record or a [`Page`] of records.
//! [`VultrClient`] implements it over the Vultr v2 REST API with `reqwest`.

use crate::error::ApiError;
use crate::pagination::{Page, PageRequest};
use crate::render::PageMeta;
use crate::resources::{Account, Instance, OperatingSystem, Plan, Region};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com/v2";

/// Fetch operations available to command bindings.
#[async_trait]
pub trait CloudApi: Send + Sync {
    async fn get_account(&self) -> Result<Account, ApiError>;

    async fn list_os(&self, request: &PageRequest) -> Result<Page<OperatingSystem>, ApiError>;

    async fn list_regions(&self, request: &PageRequest) -> Result<Page<Region>, ApiError>;

    /// List plans, optionally restricted to one plan type (e.g. `vc2`, `vhf`).
    async fn list_plans(
        &self,
        request: &PageRequest,
        plan_type: Option<&str>,
    ) -> Result<Page<Plan>, ApiError>;

    async fn list_instances(&self, request: &PageRequest) -> Result<Page<Instance>, ApiError>;

    async fn get_instance(&self, id: &str) -> Result<Instance, ApiError>;
}

// Wire shapes of the v2 API
#[derive(Deserialize, Default)]
struct WireMeta {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    links: WireLinks,
}

#[derive(Deserialize, Default)]
struct WireLinks {
    #[serde(default)]
    next: String,
    #[serde(default)]
    prev: String,
}

impl From<WireMeta> for PageMeta {
    fn from(meta: WireMeta) -> Self {
        PageMeta {
            total_count: meta.total,
            next_cursor: meta.links.next,
            prev_cursor: meta.links.prev,
        }
    }
}

#[derive(Deserialize)]
struct AccountResponse {
    account: Account,
}

#[derive(Deserialize)]
struct InstanceResponse {
    instance: Instance,
}

#[derive(Deserialize)]
struct OsListResponse {
    #[serde(default)]
    os: Vec<OperatingSystem>,
    #[serde(default)]
    meta: WireMeta,
}

#[derive(Deserialize)]
struct RegionListResponse {
    #[serde(default)]
    regions: Vec<Region>,
    #[serde(default)]
    meta: WireMeta,
}

#[derive(Deserialize)]
struct PlanListResponse {
    #[serde(default)]
    plans: Vec<Plan>,
    #[serde(default)]
    meta: WireMeta,
}

#[derive(Deserialize)]
struct InstanceListResponse {
    #[serde(default)]
    instances: Vec<Instance>,
    #[serde(default)]
    meta: WireMeta,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-success HTTP status and response body to an [`ApiError`].
fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited(message),
        code => ApiError::RequestFailed {
            status: code,
            message,
        },
    }
}

/// HTTP client for the Vultr v2 API.
pub struct VultrClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl VultrClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("vultr-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into();
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ApiError::ConfigError(format!("Invalid base URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::ConfigError(format!(
                "Invalid base URL {}: not a hierarchical URL",
                base_url
            )));
        }
        Ok(Self {
            http,
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL for the API path made of `segments`.
    ///
    /// Each segment is percent-encoded, so a `/` or `?` inside a
    /// user-supplied id stays part of that segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::ConfigError(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET the path made of `segments` and decode the JSON body.
    ///
    /// Authenticated calls fail with [`ApiError::MissingApiKey`] before any
    /// request is sent when no key is configured.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let mut request = self.http.get(url.clone()).query(query);
        match (&self.api_key, authenticated) {
            (Some(key), _) => request = request.bearer_auth(key),
            (None, true) => return Err(ApiError::MissingApiKey),
            (None, false) => {}
        }

        debug!(url = %url, ?query, "GET");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "API request failed");
            return Err(map_status_error(status, &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", url.path(), e)))
    }
}

#[async_trait]
impl CloudApi for VultrClient {
    async fn get_account(&self) -> Result<Account, ApiError> {
        let response: AccountResponse = self.get(&["account"], &[], true).await?;
        Ok(response.account)
    }

    async fn list_os(&self, request: &PageRequest) -> Result<Page<OperatingSystem>, ApiError> {
        let response: OsListResponse = self.get(&["os"], &request.query(), false).await?;
        Ok(Page::new(response.os, response.meta.into()))
    }

    async fn list_regions(&self, request: &PageRequest) -> Result<Page<Region>, ApiError> {
        let response: RegionListResponse = self.get(&["regions"], &request.query(), false).await?;
        Ok(Page::new(response.regions, response.meta.into()))
    }

    async fn list_plans(
        &self,
        request: &PageRequest,
        plan_type: Option<&str>,
    ) -> Result<Page<Plan>, ApiError> {
        let mut query = request.query();
        if let Some(t) = plan_type {
            query.push(("type", t.to_string()));
        }
        let response: PlanListResponse = self.get(&["plans"], &query, false).await?;
        Ok(Page::new(response.plans, response.meta.into()))
    }

    async fn list_instances(&self, request: &PageRequest) -> Result<Page<Instance>, ApiError> {
        let response: InstanceListResponse =
            self.get(&["instances"], &request.query(), true).await?;
        Ok(Page::new(response.instances, response.meta.into()))
    }

    async fn get_instance(&self, id: &str) -> Result<Instance, ApiError> {
        if matches!(id.trim(), "" | "." | "..") {
            return Err(ApiError::NotFound(format!("Invalid instance id: {:?}", id)));
        }
        let response: InstanceResponse = self.get(&["instances", id], &[], true).await?;
        Ok(response.instance)
    }
}
