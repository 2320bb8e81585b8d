//! The client implementing the [Vimeo REST API](https://developer.vimeo.com/api/reference)

use std::borrow::Cow;
use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::Error;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// The root url of the Vimeo API
pub const DEFAULT_BASE_URL: &str = "https://api.vimeo.com";
/// The versioned media type the Vimeo API expects in the `Accept` header
pub const MEDIA_TYPE: &str = "application/vnd.vimeo.*+json;version=3.4";

/// The errors when generating a [`HttpClient`](HttpClient) from a [`HttpClientBuilder`](HttpClientBuilder)
#[derive(Debug, thiserror::Error)]
pub enum HttpClientBuilderError {
    #[error("no credentials provided")]
    CredentialsMissing,
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// A builder for the [`HttpClient`](HttpClient) structure
///
/// ```
/// use vimeo::client::HttpClientBuilder;
/// use vimeo::credentials::Credentials;
///
/// let _client = HttpClientBuilder::default()
///    .with_credentials(Credentials::access_token("my-token"))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    pub client_builder: reqwest::ClientBuilder,
    pub credentials: Option<Credentials>,
    pub base_url: Option<Cow<'static, str>>,
    pub timeout: Option<Duration>,
}

fn duration_from_env() -> Option<Duration> {
    std::env::var("VIMEO_TIMEOUT")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

impl HttpClientBuilder {
    /// Builds a http client builder from the environment variables. See [`Credentials`](crate::credentials::Credentials).
    ///
    /// The base url will be the value from the `VIMEO_BASE_URL` environment variable when set.
    /// The timeout value will be the value from the `VIMEO_TIMEOUT` environment variable, in milliseconds.
    pub fn from_env() -> Self {
        Self {
            client_builder: reqwest::ClientBuilder::default(),
            credentials: Credentials::from_env(),
            base_url: std::env::var("VIMEO_BASE_URL").ok().map(Cow::Owned),
            timeout: duration_from_env(),
        }
    }

    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = value;
    }

    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(value);
        self
    }

    pub fn set_credentials(&mut self, value: Credentials) {
        self.credentials = Some(value);
    }

    pub fn with_credentials(mut self, value: Credentials) -> Self {
        self.set_credentials(value);
        self
    }

    pub fn set_base_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.base_url = Some(value.into());
    }

    pub fn with_base_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(value);
        self
    }

    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Builds a client for the http protocol
    ///
    /// # Errors
    ///
    /// Returns `Err(HttpClientBuilderError::CredentialsMissing)` when the credentials are not provided.
    /// Returns `Err(HttpClientBuilderError::Reqwest)` when the reqwest client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vimeo::client::HttpClientBuilder;
    /// use vimeo::client::HttpClientBuilderError;
    ///
    /// match HttpClientBuilder::default().build() {
    ///     Ok(_client) => println!("success!"),
    ///     Err(HttpClientBuilderError::CredentialsMissing) => eprintln!("no credentials provided"),
    ///     Err(HttpClientBuilderError::Reqwest(err)) => eprintln!("unable to build reqwest client: {:?}", err),
    /// }
    /// ```
    pub fn build(self) -> Result<HttpClient, HttpClientBuilderError> {
        let client_builder = if let Some(timeout) = self.timeout {
            self.client_builder.timeout(timeout)
        } else {
            self.client_builder
        };
        Ok(HttpClient {
            client: client_builder.user_agent(USER_AGENT).build()?,
            credentials: self
                .credentials
                .ok_or(HttpClientBuilderError::CredentialsMissing)?,
            base_url: self.base_url.unwrap_or(Cow::Borrowed(DEFAULT_BASE_URL)),
        })
    }
}

/// Client for the Vimeo REST API
///
/// ```rust
/// use vimeo::client::HttpClientBuilder;
/// use vimeo::credentials::Credentials;
/// use vimeo::folder::list::FolderListCommand;
/// use vimeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::default()
///    .with_credentials(Credentials::access_token("my-token"))
///    .build()
///    .expect("unable to build http client");
/// match FolderListCommand::new().execute(&client).await {
///    Ok(res) => println!("{} folders in total", res.total),
///    Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) client: reqwest::Client,
    credentials: Credentials,
    base_url: Cow<'static, str>,
}

#[cfg(test)]
impl HttpClient {
    pub fn new<U: Into<Cow<'static, str>>>(credentials: Credentials, base_url: U) -> Self {
        Self {
            client: reqwest::ClientBuilder::default()
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
            credentials,
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: String,
}

async fn read_response<T: serde::de::DeserializeOwned>(
    path: &str,
    res: reqwest::Response,
) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if !status.is_success() {
        let message = res
            .json::<ErrorPayload>()
            .await
            .map(|body| body.error)
            .unwrap_or_default();
        return Err(Error::Protocol(status.as_u16(), message));
    }
    if cfg!(test) {
        let body = res.text().await?;
        println!("GET {}: {}", path, body);
        serde_json::from_str(&body).map_err(Error::from)
    } else {
        res.json::<T>().await.map_err(Error::from)
    }
}

impl HttpClient {
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let req = self
            .client
            .get(uri)
            .header(reqwest::header::ACCEPT, MEDIA_TYPE)
            .query(params);
        let res = self.credentials.authorize(req).send().await?;
        read_response(path, res).await
    }
}
