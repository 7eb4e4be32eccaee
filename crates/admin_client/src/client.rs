use crate::error::Error;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::fmt;
use std::time::Duration;
use tracing::{Instrument, debug, info_span};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client behavior flags exposed for inspection.
///
/// Both flags are always off: an admin client is constructed fresh per
/// server-side operation and must not carry session state or refresh tokens
/// across calls. There is deliberately no way to enable them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminClientConfig {
    persist_session: bool,
    auto_refresh_token: bool,
}

impl AdminClientConfig {
    fn new() -> Self {
        Self {
            persist_session: false,
            auto_refresh_token: false,
        }
    }

    #[must_use]
    pub fn persist_session(&self) -> bool {
        self.persist_session
    }

    #[must_use]
    pub fn auto_refresh_token(&self) -> bool {
        self.auto_refresh_token
    }
}

/// Account record returned by the identity backend admin API.
#[derive(Clone, Debug)]
pub struct Account {
    pub id: String,
    pub login: String,
}

/// Privileged handle for administrative account operations.
///
/// Holds the service key for the lifetime of one server-side operation.
/// Never persist, serialize, or hand this to request-facing code.
pub struct AdminClient {
    http: Client,
    base_url: String,
    service_key: SecretString,
    config: AdminClientConfig,
}

fn backend_error_message(json_response: &Value) -> &str {
    json_response
        .get("msg")
        .or_else(|| json_response.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn parse_account(json_response: &Value) -> Result<Account, Error> {
    let id = json_response
        .get("id")
        .and_then(Value::as_str)
        .ok_or(Error::Response("no id found"))?;

    let login = json_response
        .get("email")
        .and_then(Value::as_str)
        .ok_or(Error::Response("no email found"))?;

    Ok(Account {
        id: id.to_string(),
        login: login.to_string(),
    })
}

impl AdminClient {
    /// Build a privileged client from server-only configuration.
    ///
    /// Construction performs no network I/O. It fails fast instead of
    /// returning a partially-initialized client: a missing service key must
    /// never silently degrade to an unauthenticated one.
    ///
    /// # Errors
    /// Returns a configuration error if `backend_url` or `service_key` is
    /// empty, or if the URL cannot be parsed or is not http(s).
    pub fn new(
        user_agent: &str,
        backend_url: &str,
        service_key: &SecretString,
    ) -> Result<Self, Error> {
        let base_url = backend_url.trim();
        if base_url.is_empty() {
            return Err(Error::MissingBackendUrl);
        }

        if service_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingServiceKey);
        }

        let url = Url::parse(base_url)?;
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::UnsupportedScheme(scheme.to_string()));
        }

        let http = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.clone(),
            config: AdminClientConfig::new(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn config(&self) -> AdminClientConfig {
        self.config
    }

    fn endpoint(&self, path: &str) -> String {
        let endpoint_url = format!("{}{path}", self.base_url);

        debug!("endpoint URL: {}", endpoint_url);

        endpoint_url
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(self.service_key.expose_secret())
    }

    /// Provision a backend account keyed by a canonical login address.
    ///
    /// The address is synthetic, so the backend's email confirmation flow is
    /// skipped by marking the login confirmed at creation.
    ///
    /// # Errors
    /// Returns an error if the request fails, the backend returns a
    /// non-success status, or the response is missing expected fields.
    pub async fn create_account(
        &self,
        login: &str,
        metadata: Option<Value>,
    ) -> Result<Account, Error> {
        let create_url = self.endpoint("/v1/admin/accounts");

        let mut payload = json!({
            "email": login,
            "email_confirm": true
        });
        if let Some(metadata) = metadata {
            payload["metadata"] = metadata;
        }

        let span = info_span!(
            "backend.create_account",
            http.method = "POST",
            url = %create_url
        );
        let response = self
            .authorized(self.http.post(&create_url))
            .json(&payload)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await?;

            return Err(Error::Backend {
                url: create_url,
                status,
                message: backend_error_message(&json_response).to_string(),
            });
        }

        let json_response: Value = response.json().await?;

        parse_account(&json_response)
    }

    /// Look up the backend account for a canonical login address.
    ///
    /// # Errors
    /// Returns an error if the request fails, the backend returns a
    /// non-success status, or the response is missing expected fields.
    /// A missing account is `Ok(None)`, not an error.
    pub async fn account_by_login(&self, login: &str) -> Result<Option<Account>, Error> {
        let lookup_url = self.endpoint("/v1/admin/accounts");

        let span = info_span!(
            "backend.account_by_login",
            http.method = "GET",
            url = %lookup_url
        );
        let response = self
            .authorized(self.http.get(&lookup_url).query(&[("email", login)]))
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await?;

            return Err(Error::Backend {
                url: lookup_url,
                status,
                message: backend_error_message(&json_response).to_string(),
            });
        }

        let json_response: Value = response.json().await?;
        let accounts = json_response
            .get("accounts")
            .and_then(Value::as_array)
            .ok_or(Error::Response("no accounts found"))?;

        accounts.first().map(parse_account).transpose()
    }

    /// Replace the metadata of an existing backend account.
    ///
    /// # Errors
    /// Returns an error if the request fails, the backend returns a
    /// non-success status, or the response is missing expected fields.
    pub async fn update_account(&self, id: &str, metadata: Value) -> Result<Account, Error> {
        let update_url = self.endpoint(&format!("/v1/admin/accounts/{id}"));

        let payload = json!({
            "metadata": metadata
        });

        let span = info_span!(
            "backend.update_account",
            http.method = "PUT",
            url = %update_url
        );
        let response = self
            .authorized(self.http.put(&update_url))
            .json(&payload)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await?;

            return Err(Error::Backend {
                url: update_url,
                status,
                message: backend_error_message(&json_response).to_string(),
            });
        }

        let json_response: Value = response.json().await?;

        parse_account(&json_response)
    }

    /// Delete a backend account by id.
    ///
    /// # Errors
    /// Returns an error if the request fails or the backend returns a
    /// non-success status.
    pub async fn delete_account(&self, id: &str) -> Result<(), Error> {
        let delete_url = self.endpoint(&format!("/v1/admin/accounts/{id}"));

        let span = info_span!(
            "backend.delete_account",
            http.method = "DELETE",
            url = %delete_url
        );
        let response = self
            .authorized(self.http.delete(&delete_url))
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await?;

            return Err(Error::Backend {
                url: delete_url,
                status,
                message: backend_error_message(&json_response).to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("service_key", &"***")
            .finish_non_exhaustive()
    }
}
