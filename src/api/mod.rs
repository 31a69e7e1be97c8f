// API module entry
// Storefront and admin panel JSON endpoints

mod error;
mod handlers;
mod routes;
mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

use error::ApiError;
use routes::Endpoint;

/// Main entry point for HTTP request handling
///
/// Writes one access log line per request when access logging is enabled.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let started = Instant::now();
    let entry = state
        .config
        .logging
        .access_log
        .then(|| AccessLogEntry::from_request(&req, remote_addr));

    let response = respond(req, &state).await;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_default();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request and stamp the `Server` header on whatever comes back
pub async fn respond<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let mut response = route_request(req, state).await;
    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }
    response
}

async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    // 1. CORS preflight, any path
    if *req.method() == Method::OPTIONS {
        return http::build_options_response();
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    // 3. Route lookup on the request target as sent, query string included
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str());
    let Some(endpoint) = routes::lookup(req.method(), target) else {
        logger::log_warning(&format!("No route for {} {target}", req.method()));
        return http::build_404_response();
    };

    // 4. Buffer the whole body, then dispatch
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            let err = ApiError::Body(e.to_string());
            logger::log_error(&format!("{endpoint:?}: {err}"));
            return http::build_500_response(&err.to_string());
        }
    };

    match dispatch(endpoint, &body, state).await {
        Ok(resp) => resp,
        Err(err) => {
            logger::log_error(&format!("{endpoint:?} failed: {err}"));
            http::build_500_response(&err.to_string())
        }
    }
}

async fn dispatch(
    endpoint: Endpoint,
    body: &Bytes,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, ApiError> {
    match endpoint {
        Endpoint::ListProducts => handlers::list_products(state).await,
        Endpoint::CreateProduct => handlers::create_product(state, body).await,
        Endpoint::UpdateProduct => handlers::update_product(state, body).await,
        Endpoint::DeleteProduct => handlers::delete_product(state, body).await,
        Endpoint::AdminLogin => handlers::admin_login(state, body).await,
        Endpoint::EmployeeLogin => handlers::employee_login(state, body).await,
        Endpoint::PlaceOrder => handlers::place_order(state, body).await,
        Endpoint::ListOrders => handlers::list_orders(state).await,
        Endpoint::UpdateOrder => handlers::update_order(state, body).await,
        Endpoint::Team => handlers::team(state).await,
        Endpoint::Testimonials => handlers::testimonials(state).await,
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
