//! GraphQL client and factory

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TransportError;
use crate::Result;

/// Produces clients bound to the GraphQL endpoint. One factory per app;
/// the underlying HTTP connection pool is shared across the clients it
/// creates.
pub struct ClientFactory {
    endpoint: Url,
    http: reqwest::Client,
}

impl ClientFactory {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client carrying the given bearer token. Callers pass the
    /// session's current token (or `None` before login) at each call site,
    /// so a login or logout between two requests is always reflected.
    pub fn client(&self, token: Option<&str>) -> GraphqlClient {
        GraphqlClient {
            endpoint: self.endpoint.clone(),
            http: self.http.clone(),
            token: token.map(str::to_owned),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Clone for ClientFactory {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            http: self.http.clone(),
        }
    }
}

pub struct GraphqlClient {
    endpoint: Url,
    http: reqwest::Client,
    token: Option<String>,
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

impl GraphqlClient {
    /// Send a document with its variables and decode the envelope's `data`
    /// member into `T`. A non-empty `errors` array wins over any partial
    /// `data` the server may have included.
    pub async fn request<V, T>(&self, document: &str, variables: &V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        let mut request = self.http.post(self.endpoint.clone()).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let envelope: GraphqlResponse<T> = response.json().await?;

        decode_envelope(envelope)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

fn decode_envelope<T>(envelope: GraphqlResponse<T>) -> Result<T> {
    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::debug!(error = %message, "GraphQL request rejected");
            return Err(TransportError::Graphql(message));
        }
    }

    envelope.data.ok_or(TransportError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Greeting {
        hello: String,
    }

    fn parse(json: &str) -> Result<Greeting> {
        let envelope: GraphqlResponse<Greeting> = serde_json::from_str(json).unwrap();
        decode_envelope(envelope)
    }

    #[test]
    fn test_envelope_with_data() {
        let greeting = parse(r#"{"data":{"hello":"world"}}"#).unwrap();
        assert_eq!(greeting.hello, "world");
    }

    #[test]
    fn test_envelope_with_errors() {
        let err = parse(r#"{"data":null,"errors":[{"message":"invalid credentials"}]}"#)
            .unwrap_err();
        match err {
            TransportError::Graphql(message) => assert_eq!(message, "invalid credentials"),
            other => panic!("expected Graphql error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_win_over_partial_data() {
        let err = parse(
            r#"{"data":{"hello":"world"},"errors":[{"message":"a"},{"message":"b"}]}"#,
        )
        .unwrap_err();
        match err {
            TransportError::Graphql(message) => assert_eq!(message, "a; b"),
            other => panic!("expected Graphql error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_envelope_is_missing_data() {
        let err = parse(r#"{}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingData));
    }

    #[test]
    fn test_factory_clients_carry_token_state() {
        let factory = ClientFactory::new(Url::parse("http://localhost:4000/graphql").unwrap());

        assert!(!factory.client(None).has_token());
        assert!(factory.client(Some("abc.def.ghi")).has_token());
    }
}
