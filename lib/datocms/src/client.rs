use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::IntegrationsPageQuery;
use crate::query::{integrations_page_query, QueryDocument};

pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";
/// Returns draft content instead of the published version.
pub const PREVIEW_ENDPOINT: &str = "https://graphql.datocms.com/preview";
const DEFAULT_CLIENT_AGENT: &str = "integrations-marketplace";

/// Errors returned by the client
#[remain::sorted]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint answered but reported query errors
    #[error("GraphQL error: {}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    GraphQLError(Vec<GraphQLErrorMessage>),

    /// Generic HTTP Error
    #[error("HTTP Error. Code: {status}, message: {error}")]
    HttpError { status: StatusCode, error: String },

    #[error("GraphQL response did not contain any data")]
    MissingData,

    /// Errors returned by reqwest
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// Serde JSON parsing error
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    /// URL Parsing Error
    #[error(transparent)]
    UrlParserError(#[from] url::ParseError),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// API token used as a bearer token.
#[derive(PartialEq, Eq, Clone)]
pub enum Credentials {
    ApiToken(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiToken(value) => f
                .debug_tuple("Credentials::ApiToken")
                .field(&"*".repeat(value.len()))
                .finish(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphQLErrorMessage {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLErrorMessage>>,
}

impl<T> GraphQLResponse<T> {
    /// Any reported error fails the whole response even when partial data came back.
    pub fn into_result(self) -> ClientResult<T> {
        match (self.data, self.errors) {
            (_, Some(errors)) if !errors.is_empty() => Err(ClientError::GraphQLError(errors)),
            (Some(data), _) => Ok(data),
            (None, _) => Err(ClientError::MissingData),
        }
    }
}

/// Entrypoint for interacting with the Content Delivery API.
#[derive(Clone)]
pub struct Client {
    endpoint: Url,
    agent: String,
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("agent", &self.agent)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Client {
    pub fn new(credentials: Option<Credentials>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Self::custom(DEFAULT_CLIENT_AGENT, credentials, http)
    }

    pub fn custom<A>(
        agent: A,
        credentials: Option<Credentials>,
        http: reqwest::Client,
    ) -> ClientResult<Self>
    where
        A: Into<String>,
    {
        Ok(Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
            agent: agent.into(),
            client: http,
            credentials,
        })
    }

    /// Points the client at a different GraphQL endpoint, e.g. the preview one
    /// or a local mock.
    pub fn with_endpoint(mut self, endpoint: &str) -> ClientResult<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes `document` and deserializes its `data` into `T`.
    pub async fn query<T>(
        &self,
        document: &QueryDocument,
        variables: &Map<String, Value>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let query = document.to_string();
        let body = serde_json::to_vec(&GraphQLRequest {
            query: &query,
            variables,
        })?;

        let mut req = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &*self.agent);

        if let Some(Credentials::ApiToken(token)) = &self.credentials {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        debug!(endpoint = %self.endpoint, "sending GraphQL query");
        let response = req.body(body).send().await?;

        let status = response.status();
        let response_body = response.bytes().await?;

        if !status.is_success() {
            let error = if response_body.is_empty() {
                "empty response".to_string()
            } else {
                String::from_utf8_lossy(&response_body).to_string()
            };

            return Err(ClientError::HttpError { status, error });
        }

        debug!("Received successful response. Read payload.");
        serde_json::from_slice::<GraphQLResponse<T>>(&response_body)?.into_result()
    }

    /// Raw `data` object of the integrations page query, kept untyped so it can
    /// be persisted and rendered again later.
    pub async fn fetch_integrations_payload(&self) -> ClientResult<Value> {
        let payload = self
            .query::<Value>(&integrations_page_query(), &Map::new())
            .await?;
        info!(endpoint = %self.endpoint, "fetched integrations page");
        Ok(payload)
    }

    pub async fn fetch_integrations_page(&self) -> ClientResult<IntegrationsPageQuery> {
        let payload = self.fetch_integrations_payload().await?;
        Ok(IntegrationsPageQuery::from_value(payload)?)
    }
}
