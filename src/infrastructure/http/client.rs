use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::domain::DomainError;

/// Longest slice of a non-JSON error body kept in error messages
const ERROR_BODY_LIMIT: usize = 200;

/// Trait for HTTP client operations (for mocking)
///
/// Every call resolves to the JSON body of the response. The backend reports
/// rejections as 4xx responses with a JSON body, so a JSON body is returned
/// whatever the status; only unreachable servers and non-JSON bodies are errors.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<serde_json::Value, DomainError>;

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;

    /// Posts fields as `multipart/form-data`
    async fn post_form(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        fields: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::http_status(status.as_u16(), format!("Failed to read response: {}", e))
        })?;

        parse_body(status, &body)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_body(status: StatusCode, body: &str) -> Result<serde_json::Value, DomainError> {
    match serde_json::from_str(body) {
        Ok(value) => {
            if !status.is_success() {
                debug!(status = status.as_u16(), "Backend answered with a JSON error body");
            }
            Ok(value)
        }
        Err(e) if status.is_success() => Err(DomainError::malformed(format!(
            "Failed to parse response: {}",
            e
        ))),
        Err(_) => {
            let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            Err(DomainError::http_status(
                status.as_u16(),
                format!("HTTP {}: {}", status, snippet),
            ))
        }
    }
}

fn apply_headers(
    mut request: reqwest::RequestBuilder,
    headers: Vec<(&str, &str)>,
) -> reqwest::RequestBuilder {
    for (key, value) in headers {
        request = request.header(key, value);
    }
    request
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<serde_json::Value, DomainError> {
        let request = apply_headers(self.client.get(url), headers);
        self.send(request).await
    }

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let request = apply_headers(self.client.post(url), headers).json(body);
        self.send(request).await
    }

    async fn post_form(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        fields: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let form = fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let request = apply_headers(self.client.post(url), headers).multipart(form);
        self.send(request).await
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// A request captured by [`MockHttpClient`]
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
        pub fields: Vec<(String, String)>,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Debug)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
        requests: RwLock<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self {
                responses: RwLock::new(HashMap::new()),
                errors: RwLock::new(HashMap::new()),
                requests: RwLock::new(Vec::new()),
            }
        }

        pub fn with_response(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(url.into(), error.into());
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().unwrap().clone()
        }

        fn record(
            &self,
            method: &'static str,
            url: &str,
            headers: Vec<(&str, &str)>,
            body: Option<serde_json::Value>,
            fields: &[(String, String)],
        ) {
            self.requests.write().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                headers: headers
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body,
                fields: fields.to_vec(),
            });
        }

        fn respond(&self, url: &str) -> Result<serde_json::Value, DomainError> {
            if let Some(error) = self.errors.read().unwrap().get(url) {
                return Err(DomainError::transport(error.clone()));
            }

            self.responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| DomainError::transport(format!("No mock response for {}", url)))
        }
    }

    impl Default for MockHttpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_json(
            &self,
            url: &str,
            headers: Vec<(&str, &str)>,
        ) -> Result<serde_json::Value, DomainError> {
            self.record("GET", url, headers, None, &[]);
            self.respond(url)
        }

        async fn post_json(
            &self,
            url: &str,
            headers: Vec<(&str, &str)>,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.record("POST", url, headers, Some(body.clone()), &[]);
            self.respond(url)
        }

        async fn post_form(
            &self,
            url: &str,
            headers: Vec<(&str, &str)>,
            fields: &[(String, String)],
        ) -> Result<serde_json::Value, DomainError> {
            self.record("POST", url, headers, None, fields);
            self.respond(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_on_success() {
        let value = parse_body(StatusCode::OK, r#"{"success": true}"#).unwrap();
        assert_eq!(value["success"], true);
    }

    #[test]
    fn test_json_body_on_client_error_is_returned() {
        let value = parse_body(
            StatusCode::BAD_REQUEST,
            r#"{"success": false, "message": "Out of stock"}"#,
        )
        .unwrap();
        assert_eq!(value["message"], "Out of stock");
    }

    #[test]
    fn test_html_body_on_success_is_malformed() {
        let error = parse_body(StatusCode::OK, "<html>login</html>").unwrap_err();
        assert!(matches!(error, DomainError::MalformedResponse { .. }));
    }

    #[test]
    fn test_html_body_on_server_error_is_transport() {
        let error = parse_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(error.status(), Some(502));
        assert!(error.to_string().contains("bad gateway"));
    }
}
