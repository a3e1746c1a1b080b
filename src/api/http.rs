//! reqwest-backed implementation of [`FormApi`].

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ConfigError, Result, TransportError};
use crate::form::model::StepSubmission;

use super::{ApiReply, DeleteUserRequest, FormApi};

/// Talks to the form server over HTTP.
///
/// The server keeps the lead being filled in (and the admin login) in a
/// session cookie, so the client carries a cookie store across requests.
pub struct HttpFormApi {
    client: reqwest::Client,
    submit_step_url: Url,
    delete_user_url: Url,
}

impl HttpFormApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::InvalidValue {
            key: "http_client".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            submit_step_url: config.submit_step_url()?,
            delete_user_url: config.delete_user_url()?,
        })
    }

    /// POST `body` as JSON and decode the reply. The HTTP status is not
    /// consulted; only the body's `success` flag decides the outcome.
    async fn post_json<T: Serialize + Sync>(
        &self,
        url: &Url,
        body: &T,
    ) -> std::result::Result<ApiReply, TransportError> {
        tracing::debug!(%url, "POST");
        let resp = self.client.post(url.clone()).json(body).send().await?;
        let status = resp.status();
        let value: Value = resp.json().await.map_err(|e| {
            tracing::warn!(%url, %status, "Response body is not JSON: {}", e);
            TransportError::Decode(e.to_string())
        })?;
        ApiReply::from_value(&value)
    }
}

#[async_trait]
impl FormApi for HttpFormApi {
    async fn submit_step(
        &self,
        submission: &StepSubmission,
    ) -> std::result::Result<ApiReply, TransportError> {
        self.post_json(&self.submit_step_url, submission).await
    }

    async fn delete_user(
        &self,
        request: &DeleteUserRequest,
    ) -> std::result::Result<ApiReply, TransportError> {
        self.post_json(&self.delete_user_url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builds_endpoint_urls_from_config() {
        let api = HttpFormApi::new(&ClientConfig::with_base_url("http://localhost:8000")).unwrap();
        assert_eq!(api.submit_step_url.as_str(), "http://localhost:8000/submit_step");
        assert_eq!(api.delete_user_url.as_str(), "http://localhost:8000/admin/delete_user");
    }

    #[test]
    fn rejects_unparseable_base() {
        let err = HttpFormApi::new(&ClientConfig::with_base_url("::")).err().unwrap();
        assert!(matches!(err, Error::Config(ConfigError::InvalidValue { .. })));
    }
}
