use std::time::Duration;

use async_trait::async_trait;
use dixi_config::network::NetworkConfig;
use dixi_types::{
    ApiResponse, DictionaryEntry, DictionaryStats, LetterCount, LetterPage, SearchOptions,
    SearchResult, Suggestion,
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{ApiError, DictionaryApi};

#[derive(Clone)]
pub struct HttpDictionaryClient {
    base_url: String,
    suggestion_limit: u32,
    client: reqwest::Client,
}

impl HttpDictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            suggestion_limit: 10,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &NetworkConfig, suggestion_limit: u32) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            suggestion_limit,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, path: &str, params: &[(&str, String)]) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.get(url);
        if params.is_empty() {
            builder
        } else {
            builder.query(params)
        }
    }

    /// GET an endpoint and unwrap the `{ data, total? }` envelope
    async fn fetch<T>(&self, path: &str, params: &[(&str, String)]) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}{}", self.base_url, path);

        let response = self.request(path, params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{path}: {e}")))
    }
}

fn search_params(query: &str, options: &SearchOptions) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.to_string())];
    if let Some(lang) = &options.lang {
        params.push(("lang", lang.clone()));
    }
    if let Some(pos) = &options.pos {
        params.push(("pos", pos.clone()));
    }
    if let Some(limit) = options.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Letters like `ă` or `ș` need escaping inside the path
fn letter_path(letter: &str) -> String {
    format!("/letters/{}", utf8_percent_encode(letter, NON_ALPHANUMERIC))
}

fn letter_params(limit: Option<u32>, offset: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(limit) = limit.filter(|l| *l > 0) {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset.filter(|o| *o > 0) {
        params.push(("offset", offset.to_string()));
    }
    params
}

#[async_trait]
impl DictionaryApi for HttpDictionaryClient {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, ApiError> {
        let response = self.fetch("/search", &search_params(query, options)).await?;
        Ok(response.data)
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let params = [
            ("q", query.to_string()),
            ("limit", self.suggestion_limit.to_string()),
        ];
        let response = self.fetch("/suggestions", &params).await?;
        Ok(response.data)
    }

    async fn entry(&self, id: Uuid) -> Result<DictionaryEntry, ApiError> {
        let response = self.fetch(&format!("/words/{id}"), &[]).await?;
        Ok(response.data)
    }

    async fn random_entry(&self) -> Result<DictionaryEntry, ApiError> {
        let response = self.fetch("/words/random", &[]).await?;
        Ok(response.data)
    }

    async fn letters(&self) -> Result<Vec<LetterCount>, ApiError> {
        let response = self.fetch("/letters", &[]).await?;
        Ok(response.data)
    }

    async fn entries_by_letter(
        &self,
        letter: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<LetterPage, ApiError> {
        let response: ApiResponse<Vec<DictionaryEntry>> = self
            .fetch(&letter_path(letter), &letter_params(limit, offset))
            .await?;

        Ok(LetterPage {
            entries: response.data,
            total: response.total.unwrap_or(0),
        })
    }

    async fn stats(&self) -> Result<DictionaryStats, ApiError> {
        let response = self.fetch("/stats", &[]).await?;
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn client() -> HttpDictionaryClient {
        HttpDictionaryClient::new("http://localhost:8080/api/".to_string())
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        assert_eq!(client().base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn suggestion_request_carries_query_and_limit() {
        let request = client()
            .request(
                "/suggestions",
                &[("q", "casă".to_string()), ("limit", "10".to_string())],
            )
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/api/suggestions");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "casă".to_string()),
                ("limit".to_string(), "10".to_string())
            ]
        );
    }

    #[test]
    fn search_params_skip_unset_filters() {
        let options = SearchOptions {
            lang: Some("en".to_string()),
            pos: None,
            limit: Some(5),
        };
        let params = search_params("luna", &options);
        assert_eq!(
            params,
            vec![
                ("q", "luna".to_string()),
                ("lang", "en".to_string()),
                ("limit", "5".to_string())
            ]
        );
    }

    #[test]
    fn letter_params_omit_zero_values() {
        assert!(letter_params(None, Some(0)).is_empty());
        assert_eq!(
            letter_params(Some(50), Some(100)),
            vec![("limit", "50".to_string()), ("offset", "100".to_string())]
        );
    }

    #[test]
    fn letter_request_escapes_the_letter() {
        let plain = client().request(&letter_path("a"), &[]).build().unwrap();
        assert_eq!(plain.url().path(), "/api/letters/a");

        let breve = client().request(&letter_path("ă"), &[]).build().unwrap();
        assert_eq!(breve.url().path(), "/api/letters/%C4%83");
    }

    /// Serve one canned HTTP response on a local port
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn envelope_is_decoded_from_json_body() {
        let base = serve_once("200 OK", r#"{"data":[{"letter":"a","count":12}],"total":1}"#).await;
        let letters = HttpDictionaryClient::new(base).letters().await.unwrap();

        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].letter, "a");
        assert_eq!(letters[0].count, 12);
    }

    #[tokio::test]
    async fn malformed_body_names_the_endpoint() {
        let base = serve_once("200 OK", r#"{"nope":true}"#).await;
        let err = HttpDictionaryClient::new(base).stats().await.unwrap_err();

        match err {
            ApiError::InvalidResponse(message) => assert!(message.starts_with("/stats: ")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_endpoint() {
        let base = serve_once("404 Not Found", r#"{"error":"missing"}"#).await;
        let err = HttpDictionaryClient::new(base).random_entry().await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, ApiError::Status { endpoint, .. } if endpoint == "/words/random"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client = HttpDictionaryClient::new("http://127.0.0.1:9/api".to_string());
        let err = client.suggestions("ca").await.unwrap_err();
        assert!(matches!(err, ApiError::NetworkError(_)));
    }
}
