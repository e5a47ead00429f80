use crate::config::ApiConfig;
use crate::{Error, Result};
use hypodesk_types::wire::{
    ApiErrorBody, GetHypothesisResponse, HypothesisRecord, MessageResponse, SaveTopicRequest,
    SignInRequest, SignInResponse, TopicListResponse, UpsertRequest, UpsertResponse,
    UserLookupResponse,
};
use hypodesk_types::{RecordId, Role};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{AuthApi, HypothesisApi};

const API_NAME_HEADER: &str = "X-API-Name";
const FILE_NAME_HEADER: &str = "X-File-Name";

/// Blocking HTTP implementation of both service traits.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    api: ApiConfig,
}

impl HttpClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .connect_timeout(Duration::from_secs(api.timeout_secs.min(10)))
            .build()?;

        Ok(Self {
            client,
            api: api.clone(),
        })
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    /// `{base}/users/{user_id}` with the id percent-encoded as one path segment.
    fn user_url(base: &str, user_id: &str) -> Result<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| Error::Config(format!("invalid auth url {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("auth url {} cannot take a path", base)))?
            .pop_if_empty()
            .push("users")
            .push(user_id);
        Ok(url)
    }

    fn execute<T: DeserializeOwned>(
        &self,
        api_name: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        tracing::debug!(api = api_name, "sending request");

        let response = request
            .header(ACCEPT, "application/json")
            .header(API_NAME_HEADER, api_name)
            .send()
            .map_err(|e| {
                tracing::warn!(api = api_name, error = %e, "request did not complete");
                Error::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::warn!(api = api_name, status = status.as_u16(), %message, "request rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            api = api_name,
            status = status.as_u16(),
            bytes = body.len(),
            "response received"
        );

        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| Error::Decode(format!("{}: {}", api_name, e)))
    }
}

/// Human-readable reason for a failed response: the JSON `detail` or
/// `message` field, else the raw body, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body)
        && let Some(summary) = parsed.summary()
    {
        return summary;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

impl HypothesisApi for HttpClient {
    fn list_topics(&self) -> Result<Vec<HypothesisRecord>> {
        let url = Self::url(&self.api.base_url, "/get_topic");
        let response: TopicListResponse = self.execute("get-topic", self.client.get(url))?;
        Ok(response.data)
    }

    fn upsert_hypothesis(&self, request: &UpsertRequest) -> Result<UpsertResponse> {
        let url = Self::url(&self.api.alt_base_url, "/add-hypothesis");
        self.execute("add-hypothesis", self.client.post(url).json(request))
    }

    fn get_hypothesis(&self, id: &RecordId) -> Result<GetHypothesisResponse> {
        let url = Self::url(&self.api.alt_base_url, "/get-hypothesis");
        let request = self
            .client
            .get(url)
            .query(&[("hypothesis_id", id.as_str())]);
        self.execute("get-hypothesis", request)
    }

    fn delete_hypothesis(&self, id: &RecordId) -> Result<MessageResponse> {
        let url = Self::url(&self.api.alt_base_url, "/delete-hypothesis");
        let request = self
            .client
            .post(url)
            .query(&[("hypothesis_id", id.as_str())]);
        self.execute("delete-hypothesis", request)
    }

    fn save_topic(&self, request: &SaveTopicRequest) -> Result<MessageResponse> {
        let url = Self::url(&self.api.base_url, "/update_topic");
        self.execute("update-topic", self.client.post(url).json(request))
    }

    fn upload_file(
        &self,
        id: &RecordId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MessageResponse> {
        let url = Self::url(&self.api.alt_base_url, "/upload-hypothesis-file");
        let request = self
            .client
            .post(url)
            .query(&[("hypothesis_id", id.as_str())])
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(FILE_NAME_HEADER, file_name)
            .body(bytes);
        self.execute("upload-hypothesis-file", request)
    }
}

impl AuthApi for HttpClient {
    fn lookup_user(
        &self,
        user_id: &str,
        application_code: &str,
        role: Role,
    ) -> Result<UserLookupResponse> {
        let url = Self::user_url(&self.api.auth_base_url, user_id)?;
        let request = self
            .client
            .get(url)
            .query(&[("aplctn_cd", application_code), ("role", role.as_str())]);
        self.execute("validate-user", request)
    }

    fn sign_in(&self, request: &SignInRequest, password: &str) -> Result<SignInResponse> {
        let url = Self::url(&self.api.auth_base_url, "/users/sign-in");
        let request = self
            .client
            .post(url)
            .header("password", password)
            .json(request);
        self.execute("sign-in", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_detail() {
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"detail":"Hypothesis not found"}"#);
        assert_eq!(msg, "Hypothesis not found");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_user_url_encodes_id_as_one_segment() {
        let url = HttpClient::user_url("http://host:8000/auth/", "a/b?x#y").unwrap();
        assert_eq!(url.as_str(), "http://host:8000/auth/users/a%2Fb%3Fx%23y");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        assert_eq!(
            HttpClient::url("http://host:8000/", "/get_topic"),
            "http://host:8000/get_topic"
        );
    }
}
