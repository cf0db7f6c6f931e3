//! HTTP 传输实现
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心库的 [`HttpClient`] 接口。

use async_trait::async_trait;
use campusdesk::request::HttpMethod;
use campusdesk::{HttpClient, HttpRequest, HttpResponse, TransportError};
use gloo_net::http::{Method, RequestBuilder};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("网络错误: {}", e)))?;

        let status = response.status();
        // 204 等无响应体的情况读到空字符串
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
