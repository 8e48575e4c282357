// fare-client/src/http.rs
// HTTP 客户端 - 与计费服务通信

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ErrorBody, FareQuote, FareRequest, SaveBillRequest, SavedBill};

use crate::{ClientConfig, ClientError, ClientResult};

/// 计费服务接口
///
/// 控制台只依赖此 trait，便于测试时替换为本地实现
#[async_trait]
pub trait FareApi: Send + Sync {
    /// POST /calculate
    async fn calculate(&self, request: &FareRequest) -> ClientResult<FareQuote>;

    /// POST /save
    async fn save_bill(&self, request: &SaveBillRequest) -> ClientResult<SavedBill>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct FareClient {
    client: Client,
    base_url: String,
    calculate_timeout: Duration,
    save_timeout: Duration,
}

impl FareClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            calculate_timeout: config.calculate_timeout,
            save_timeout: config.save_timeout,
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        // 服务端错误格式: {"error": ..., "code": ...}
        return match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Err(ClientError::Api {
                status,
                code: body.code,
                message: body.error,
            }),
            Err(_) => Err(ClientError::InvalidResponse(format!("HTTP {}: {}", status, text))),
        };
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl FareApi for FareClient {
    async fn calculate(&self, request: &FareRequest) -> ClientResult<FareQuote> {
        self.post("/calculate", request, self.calculate_timeout).await
    }

    async fn save_bill(&self, request: &SaveBillRequest) -> ClientResult<SavedBill> {
        self.post("/save", request, self.save_timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = FareClient::new(&ClientConfig::new("http://127.0.0.1:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn test_closed_port_is_connection_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = FareClient::new(
            &ClientConfig::new(format!("http://127.0.0.1:{port}"))
                .with_calculate_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let err = client.calculate(&FareRequest::default()).await.unwrap_err();
        assert!(err.is_connection(), "unexpected error: {err:?}");
    }
}
