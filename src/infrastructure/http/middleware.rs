//! HTTP Middleware
//!
//! HTTP 状态码错误日志 + 慢请求日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};

/// 超过该耗时的请求记录 info 日志（合成请求通常较慢）
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(5);

/// 请求日志中间件
///
/// 状态码为 4xx / 5xx 时记录日志；业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    } else if started.elapsed() >= SLOW_REQUEST_THRESHOLD {
        tracing::info!(method = %method, uri = %uri, latency_ms, "Slow request");
    }

    response
}
