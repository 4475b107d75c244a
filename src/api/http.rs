//! HTTP implementation of `AmiiboApi` (fetch-backed on wasm32).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::error::{DELETE_FAILED, GET_FAILED, LIST_FAILED, NOT_FOUND_MESSAGE};
use super::{AmiiboApi, FetchError};
use crate::config::ApiConfig;
use crate::models::Amiibo;

#[derive(Clone)]
pub struct HttpAmiiboApi {
    client: Client,
    config: ApiConfig,
}

impl HttpAmiiboApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn collection_url(&self) -> String {
        self.config.url("/amiibo/")
    }

    pub fn record_url(&self, id: i64) -> String {
        self.config.url(&format!("/amiibo/{}", id))
    }

    /// Send and reject any non-2xx status with `failure`
    async fn send(&self, request: RequestBuilder, failure: &str) -> Result<Response, FetchError> {
        let response = request.send().await.map_err(|e| {
            log::warn!("[API] transport error: {}", e);
            FetchError::new(failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[API] {} returned {}", response.url(), status);
            return Err(FetchError::new(failure));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl AmiiboApi for HttpAmiiboApi {
    async fn list_all(&self) -> Result<Vec<Amiibo>, FetchError> {
        let response = self.send(self.client.get(self.collection_url()), LIST_FAILED).await?;
        response.json::<Vec<Amiibo>>().await.map_err(|e| {
            log::warn!("[API] bad list body: {}", e);
            FetchError::new(LIST_FAILED)
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Amiibo, FetchError> {
        let response = self.send(self.client.get(self.record_url(id)), GET_FAILED).await?;
        let amiibo = response.json::<Option<Amiibo>>().await.map_err(|e| {
            log::warn!("[API] bad body for amiibo {}: {}", id, e);
            FetchError::new(GET_FAILED)
        })?;
        amiibo.ok_or_else(|| FetchError::new(NOT_FOUND_MESSAGE))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), FetchError> {
        self.send(self.client.delete(self.record_url(id)), DELETE_FAILED).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one canned response on a local port; the handle yields the request line
    fn serve_once(status: &str, body: &str) -> (HttpAmiiboApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
        });

        (HttpAmiiboApi::new(ApiConfig::new(format!("http://{}", addr))), handle)
    }

    #[test]
    fn test_urls() {
        let api = HttpAmiiboApi::new(ApiConfig::new("http://localhost:8000/"));
        assert_eq!(api.collection_url(), "http://localhost:8000/amiibo/");
        assert_eq!(api.record_url(42), "http://localhost:8000/amiibo/42");
    }

    #[tokio::test]
    async fn test_list_returns_records_in_order() {
        let body = r#"[{"id":2,"name":"Luigi","image":null,"series_id":1},{"id":1,"name":"Mario","image":"m.png","series_id":1}]"#;
        let (api, server) = serve_once("200 OK", body);

        let records = api.list_all().await.unwrap();
        assert_eq!(records.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(server.join().unwrap(), "GET /amiibo/ HTTP/1.1");
    }

    #[tokio::test]
    async fn test_list_server_error() {
        let (api, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);

        let err = api.list_all().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch amiibos");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_list_malformed_body() {
        let (api, server) = serve_once("200 OK", "not json");

        let err = api.list_all().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch amiibos");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_get_not_found_status() {
        let (api, server) = serve_once("404 Not Found", r#"{"detail":"Not found"}"#);

        let err = api.get_by_id(7).await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch amiibo");
        assert_eq!(server.join().unwrap(), "GET /amiibo/7 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_get_null_body_is_not_found() {
        let (api, server) = serve_once("200 OK", "null");

        let err = api.get_by_id(7).await.unwrap_err();
        assert_eq!(err.message(), NOT_FOUND_MESSAGE);
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_get_record() {
        let body = r#"{"id":5000000000,"name":"Big","image":"b.png","series_id":-1,"series":null}"#;
        let (api, server) = serve_once("200 OK", body);

        let amiibo = api.get_by_id(5_000_000_000).await.unwrap();
        assert_eq!(amiibo.name, "Big");
        assert_eq!(amiibo.series_id, -1);
        assert_eq!(server.join().unwrap(), "GET /amiibo/5000000000 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_delete_no_content() {
        let (api, server) = serve_once("204 No Content", "");

        assert_eq!(api.delete_by_id(3).await, Ok(()));
        assert_eq!(server.join().unwrap(), "DELETE /amiibo/3 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let (api, server) = serve_once("200 OK", "not json");

        assert_eq!(api.delete_by_id(3).await, Ok(()));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_delete_failure_status() {
        let (api, server) = serve_once("409 Conflict", "");

        let err = api.delete_by_id(3).await.unwrap_err();
        assert_eq!(err.message(), "Failed to delete amiibo");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let api = HttpAmiiboApi::new(ApiConfig::new(format!("http://{}", addr)));

        let err = api.list_all().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch amiibos");
    }
}
