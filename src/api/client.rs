use std::io::Write;
use std::time::{Duration, Instant};

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{BankAccounts, ClientContacts, Countries, Invoices};
use crate::core::{Config, Result, SuperFakturaError};

/// Per-request timeout unless overridden with [`SuperFakturaClient::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Authenticated client for one SuperFaktura company.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SuperFakturaClient {
    http: reqwest::Client,
    config: Config,
    timeout: Duration,
}

impl SuperFakturaClient {
    /// Create a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SuperFakturaError::Network`] if the TLS backend cannot be initialised.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("superfaktura-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a client from `SUPERFAKTURA_*` environment variables (and `.env`).
    ///
    /// # Errors
    ///
    /// Returns [`SuperFakturaError::MissingCredentials`] if any variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn bank_accounts(&self) -> BankAccounts<'_> {
        BankAccounts::new(self)
    }

    pub fn client_contacts(&self) -> ClientContacts<'_> {
        ClientContacts::new(self)
    }

    pub fn countries(&self) -> Countries<'_> {
        Countries::new(self)
    }

    /// `GET` an endpoint and decode its JSON body.
    ///
    /// # Errors
    ///
    /// [`SuperFakturaError::Http`] on any status but 200,
    /// [`SuperFakturaError::Decode`] if the body is not JSON,
    /// [`SuperFakturaError::Network`] on transport failures.
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.get_json(endpoint).await
    }

    /// `GET` an endpoint and decode its JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let resp = self.send(Method::GET, endpoint, None).await?;
        decode(resp).await
    }

    /// `GET` an endpoint and write the raw body to `writer`.
    ///
    /// Returns the number of bytes written. Nothing is written unless the API
    /// answers 200.
    ///
    /// # Errors
    ///
    /// [`SuperFakturaError::Http`] on any status but 200,
    /// [`SuperFakturaError::Io`] if writing fails.
    pub async fn download<W: Write + ?Sized>(&self, endpoint: &str, writer: &mut W) -> Result<u64> {
        let resp = self.send(Method::GET, endpoint, None).await?;
        let bytes = resp.bytes().await?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!(endpoint, bytes = bytes.len(), "download complete");
        Ok(bytes.len() as u64)
    }

    /// `POST` a JSON document as the form field `data` and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// Same as [`SuperFakturaClient::get`].
    pub async fn post(&self, endpoint: &str, data: &str) -> Result<Value> {
        let resp = self.send(Method::POST, endpoint, Some(data)).await?;
        decode(resp).await
    }

    /// Serialize `payload` and [`post`](Self::post) it, decoding the answer into `R`.
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let data = serde_json::to_string(payload)?;
        let resp = self.send(Method::POST, endpoint, Some(&data)).await?;
        decode(resp).await
    }

    async fn send(&self, method: Method, endpoint: &str, data: Option<&str>) -> Result<Response> {
        let url = self.config.endpoint_url(endpoint);
        let mut req = self
            .http
            .request(method.clone(), url.as_str())
            .header(AUTHORIZATION, self.config.authorization_header())
            .timeout(self.timeout);
        if let Some(data) = data {
            req = req.form(&[("data", data)]);
        }

        debug!(%method, %url, "sending request");
        let started = Instant::now();
        let resp = req.send().await?;
        let status = resp.status();
        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(SuperFakturaError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| SuperFakturaError::Decode { body, source })
}
