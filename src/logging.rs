//! Request/response logging middleware.
//!
//! Every request and its response are logged as a pair sharing a generated
//! request id. Bodies are buffered so they can be logged, then handed back
//! downstream byte for byte.

use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use tracing::{error, info, warn};

use crate::utils::errors::AppError;

pub async fn log_request_response(req: Request, next: Next) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = req.into_parts();
    let request_body = buffer_body(body).await.map_err(|e| {
        AppError::bad_request(anyhow::anyhow!("Failed to read request body: {}", e))
    })?;

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        body = %String::from_utf8_lossy(&request_body),
        "Incoming request"
    );

    let req = Request::from_parts(parts, Body::from(request_body));
    let response = next.run(req).await;
    let latency = start.elapsed();

    let (parts, body) = response.into_parts();
    let response_body = buffer_body(body).await.map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to buffer response body: {}", e))
    })?;
    let status = parts.status;

    match status.as_u16() {
        200..=299 => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                body = %String::from_utf8_lossy(&response_body),
                "Request completed"
            );
        }
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                body = %String::from_utf8_lossy(&response_body),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                body = %String::from_utf8_lossy(&response_body),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                body = %String::from_utf8_lossy(&response_body),
                "Request completed"
            );
        }
    }

    Ok(Response::from_parts(parts, Body::from(response_body)))
}

async fn buffer_body(body: Body) -> Result<Bytes, axum::Error> {
    Ok(body.collect().await?.to_bytes())
}
