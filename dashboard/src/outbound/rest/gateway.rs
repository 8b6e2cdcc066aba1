//! Reqwest-backed user gateway adapter.
//!
//! Owns transport details only: request construction, HTTP error
//! mapping, and JSON decoding into local records. Mutation responses
//! are checked for status and otherwise discarded; the store applies
//! its own local mutation on success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::RemoteUserDto;
use crate::domain::ports::{UserGateway, UserGatewayError};
use crate::domain::{User, UserDraft, UserId};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_USER_AGENT: &str = "user-dashboard/0.1";

/// Endpoint and outbound identity settings for the REST gateway.
pub struct RestGatewayConfig {
    /// Base URL the `users` collection lives under.
    pub base_url: Url,
    /// HTTP user-agent sent with every request.
    pub user_agent: String,
    /// Optional per-request timeout. `None` (the default) lets a stuck
    /// call stay pending, which is what the dashboard expects.
    pub request_timeout: Option<Duration>,
}

impl Default for RestGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL)
                .unwrap_or_else(|error| panic!("default base URL failed to parse: {error}")),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_timeout: None,
        }
    }
}

/// User gateway adapter performing plain REST calls against one host.
pub struct RestUserGateway {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl RestUserGateway {
    /// Build an adapter against the default public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(RestGatewayConfig::default())
    }

    /// Build an adapter with explicit endpoint and identity settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_config(config: RestGatewayConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url,
            user_agent: config.user_agent,
        })
    }

    fn users_endpoint(&self) -> String {
        users_endpoint(&self.base_url)
    }

    fn user_endpoint(&self, id: UserId) -> String {
        user_endpoint(&self.base_url, id)
    }

    async fn read_success_body(
        response: reqwest::Response,
    ) -> Result<Vec<u8>, UserGatewayError> {
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        check_status(status)?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl UserGateway for RestUserGateway {
    async fn list_users(&self) -> Result<Vec<User>, UserGatewayError> {
        let response = self
            .client
            .get(self.users_endpoint())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_success_body(response).await?;

        let decoded: Vec<RemoteUserDto> = serde_json::from_slice(&body)
            .map_err(|error| UserGatewayError::decode(format!("invalid user list: {error}")))?;
        let users: Vec<User> = decoded.into_iter().map(RemoteUserDto::into_user).collect();
        debug!(count = users.len(), "fetched user list");
        Ok(users)
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, UserGatewayError> {
        let response = self
            .client
            .get(self.user_endpoint(id))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_success_body(response).await?;

        let decoded: RemoteUserDto = serde_json::from_slice(&body)
            .map_err(|error| UserGatewayError::decode(format!("invalid user record: {error}")))?;
        Ok(decoded.into_user())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserGatewayError> {
        let response = self
            .client
            .post(self.users_endpoint())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        // Status-only contract: the created resource body is ignored.
        check_status(response.status())
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<(), UserGatewayError> {
        let response = self
            .client
            .put(self.user_endpoint(id))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response.status())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserGatewayError> {
        let response = self
            .client
            .delete(self.user_endpoint(id))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response.status())
    }
}

fn users_endpoint(base: &Url) -> String {
    format!("{}/users", base.as_str().trim_end_matches('/'))
}

fn user_endpoint(base: &Url, id: UserId) -> String {
    format!("{}/users/{id}", base.as_str().trim_end_matches('/'))
}

fn map_transport_error(error: reqwest::Error) -> UserGatewayError {
    UserGatewayError::transport(error.to_string())
}

fn check_status(status: StatusCode) -> Result<(), UserGatewayError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(UserGatewayError::status(status.as_u16()))
    }
}
