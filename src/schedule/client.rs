use crate::schedule::types::{GraphqlError, TargetInput, UserOverride};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_OVERRIDE_QUERY: &str = r#"
query ($id: ID!) {
  userOverride(id: $id) {
    id
    start
    end
    addUser {
      id
      name
    }
    removeUser {
      id
      name
    }
  }
}
"#;

const DELETE_ALL_MUTATION: &str = r#"
mutation delete($input: [TargetInput!]!) {
  deleteAll(input: $input)
}
"#;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("{}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response contained no data")]
    MissingData,
    #[error("Override not found: {0}")]
    NotFound(String),
    #[error("Override {0} was not deleted")]
    NotDeleted(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// Messages not tied to an input field. Anything that is not a GraphQL
    /// error list counts as a single non-field message.
    pub fn non_field_errors(&self) -> Vec<String> {
        match self {
            ApiError::Graphql(errors) => errors
                .iter()
                .filter(|e| !e.is_field_error())
                .map(|e| e.message.clone())
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

#[derive(Serialize, Debug)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize, Debug)]
struct GraphqlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UserOverrideData {
    user_override: Option<UserOverride>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DeleteAllData {
    delete_all: bool,
}

#[derive(Serialize, Debug)]
struct IdVariables<'a> {
    id: &'a str,
}

#[derive(Serialize, Debug)]
struct TargetVariables<'a> {
    input: &'a [TargetInput],
}

fn decode_response<D: DeserializeOwned>(body: &str) -> Result<D> {
    let response: GraphqlResponse<D> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        return Err(ApiError::Graphql(response.errors));
    }
    response.data.ok_or(ApiError::MissingData)
}

/// Client for the scheduling backend's GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct ScheduleClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl ScheduleClient {
    pub fn new(endpoint: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("override-delete/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V: Serialize, D: DeserializeOwned>(&self, query: &str, variables: V) -> Result<D> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The backend may still answer with a GraphQL error envelope.
            let envelope: std::result::Result<GraphqlResponse<serde_json::Value>, _> =
                serde_json::from_str(&body);
            if let Ok(envelope) = envelope
                && !envelope.errors.is_empty()
            {
                return Err(ApiError::Graphql(envelope.errors));
            }
            tracing::debug!(event = "api.request.failed", status = %status, body = %body.trim());
            return Err(ApiError::Status(status));
        }

        decode_response(&body)
    }

    pub async fn user_override(&self, id: &str) -> Result<UserOverride> {
        tracing::debug!(event = "api.user_override.request", override_id = id);
        let data: UserOverrideData = self.execute(USER_OVERRIDE_QUERY, IdVariables { id }).await?;
        data.user_override
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    pub async fn delete_all(&self, targets: &[TargetInput]) -> Result<()> {
        tracing::debug!(event = "api.delete_all.request", targets = targets.len());
        let data: DeleteAllData = self
            .execute(DELETE_ALL_MUTATION, TargetVariables { input: targets })
            .await?;
        if !data.delete_all {
            let ids = targets
                .iter()
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ApiError::NotDeleted(ids));
        }
        Ok(())
    }
}
