//! `SlaReportSource` backed by the dashboard REST API.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use sladash_core::SlaReportSource;
use sladash_domain::{ApiConfig, DateRange, Result, SlaBelowTargetPayload, SlaDashError};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

const BELOW_TARGET_PATH: &str = "sla/below-target";

/// Fetches the below-target report over HTTP.
pub struct HttpSlaReportSource {
    http: HttpClient,
    endpoint: Url,
}

impl HttpSlaReportSource {
    /// # Errors
    /// Returns `SlaDashError::Config` when `base_url` is not an absolute URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| SlaDashError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(BELOW_TARGET_PATH)
            .map_err(|e| SlaDashError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;

        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(HttpClient::from_config(config)?, &config.base_url)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SlaReportSource for HttpSlaReportSource {
    #[instrument(skip(self), fields(range = %range))]
    async fn fetch_below_target(&self, range: &DateRange) -> Result<SlaBelowTargetPayload> {
        let request = self
            .http
            .request(Method::GET, self.endpoint.clone())
            .query(&[("startDate", range.start_iso()), ("endDate", range.end_iso())])
            .header(reqwest::header::ACCEPT, "application/json");

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %truncate(&body, 200), "below-target request rejected");
            return Err(status_error(status));
        }

        let body = response.bytes().await.map_err(InfraError::from)?;
        debug!(bytes = body.len(), "below-target response received");

        let payload = parse_below_target_body(&body)?;
        info!(total_sites = payload.total_sites, "below-target report fetched");
        Ok(payload)
    }
}

/// Decode a report body, bare or wrapped in `{ "data": ... }`.
///
/// Payload fields all have defaults, so a bare body must at least carry
/// `batteryCategories`; anything else (an error object, say) is rejected
/// instead of decoding to an empty report.
pub fn parse_below_target_body(body: &[u8]) -> Result<SlaBelowTargetPayload> {
    let value: Value = serde_json::from_slice(body).map_err(InfraError::from)?;
    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(SlaDashError::Serialization(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let payload = if let Some(data) = object.remove("data") {
        data
    } else if object.contains_key("batteryCategories") {
        Value::Object(object)
    } else {
        return Err(unrecognised_body(&object));
    };

    Ok(serde_json::from_value(payload).map_err(InfraError::from)?)
}

fn unrecognised_body(object: &Map<String, Value>) -> SlaDashError {
    let detail = ["error", "message"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map_or_else(String::new, |text| format!(": {}", truncate(text, 200)));
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    SlaDashError::Serialization(format!(
        "response is not a below-target report (keys: [{}]){detail}",
        keys.join(", ")
    ))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    text.char_indices().nth(max_chars).map_or(text, |(idx, _)| &text[..idx])
}
