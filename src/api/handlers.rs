// Endpoint handlers
// Each takes the buffered request body and the shared state

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use super::types::{LoginRequest, OrderUpdate, StatusMessage};
use crate::auth::Realm;
use crate::config::AppState;
use crate::http::build_json_response;
use crate::logger;
use crate::store::{coerce, OrderDraft, ProductDraft};

type HandlerResult = Result<Response<Full<Bytes>>, ApiError>;

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[allow(clippy::unnecessary_wraps)]
fn ok(message: &'static str) -> HandlerResult {
    Ok(build_json_response(
        StatusCode::OK,
        &StatusMessage::ok(message),
    ))
}

// ============== Products ==============

pub async fn list_products(state: &AppState) -> HandlerResult {
    let store = state.store.read().await;
    Ok(build_json_response(StatusCode::OK, store.products()))
}

pub async fn create_product(state: &AppState, body: &Bytes) -> HandlerResult {
    let draft: ProductDraft = parse_body(body)?;
    let id = state.store.write().await.add_product(draft);
    logger::log_info(&format!("[Store] Product {id} added"));
    ok("Product added")
}

/// Replace a product; an unknown id still answers with success
pub async fn update_product(state: &AppState, body: &Bytes) -> HandlerResult {
    let value: Value = parse_body(body)?;
    let draft = ProductDraft::deserialize(&value)?;
    let matched = state
        .store
        .write()
        .await
        .update_product(coerce::id_of(&value), draft);
    if !matched {
        logger::log_warning(&format!(
            "Product update for unknown id {}",
            coerce::id_of(&value)
        ));
    }
    ok("Product updated")
}

pub async fn delete_product(state: &AppState, body: &Bytes) -> HandlerResult {
    let value: Value = parse_body(body)?;
    let removed = state
        .store
        .write()
        .await
        .delete_products(coerce::id_of(&value));
    logger::log_info(&format!("[Store] {removed} product(s) deleted"));
    ok("Product deleted")
}

// ============== Auth ==============

fn login_outcome(state: &AppState, realm: Realm, login: &LoginRequest) -> StatusMessage {
    let accepted = match (login.username(), login.password()) {
        (Some(user), Some(pass)) => state.credentials.verify(realm, user, pass),
        _ => false,
    };
    if accepted {
        StatusMessage::ok("Login successful")
    } else {
        StatusMessage::error("Invalid credentials")
    }
}

/// Admin login; a malformed body is a plain handler error
pub async fn admin_login(state: &AppState, body: &Bytes) -> HandlerResult {
    let login: LoginRequest = parse_body(body)?;
    let outcome = login_outcome(state, Realm::Admin, &login);
    Ok(build_json_response(StatusCode::OK, &outcome))
}

/// Employee login; a malformed body gets its own error message
pub async fn employee_login(state: &AppState, body: &Bytes) -> HandlerResult {
    let login: LoginRequest = match parse_body(body) {
        Ok(login) => login,
        Err(e) => {
            logger::log_error(&format!("Error parsing employee login body: {e}"));
            return Ok(build_json_response(
                StatusCode::OK,
                &StatusMessage::error("Invalid request format"),
            ));
        }
    };

    logger::log_info(&format!(
        "[Auth] Employee login attempt: {}",
        login.username().unwrap_or("-")
    ));
    let outcome = login_outcome(state, Realm::Employee, &login);
    if outcome.status == "ok" {
        logger::log_info("[Auth] Employee login successful");
    } else {
        logger::log_info("[Auth] Employee login failed: Invalid credentials");
    }
    Ok(build_json_response(StatusCode::OK, &outcome))
}

// ============== Orders ==============

pub async fn place_order(state: &AppState, body: &Bytes) -> HandlerResult {
    let draft: OrderDraft = parse_body(body)?;
    let id = state.store.write().await.place_order(draft)?;
    logger::log_info(&format!("[Store] Order {id} placed"));
    ok("Order placed successfully")
}

pub async fn list_orders(state: &AppState) -> HandlerResult {
    let store = state.store.read().await;
    Ok(build_json_response(StatusCode::OK, store.orders()))
}

pub async fn update_order(state: &AppState, body: &Bytes) -> HandlerResult {
    let update: OrderUpdate = parse_body(body)?;
    let matched = state
        .store
        .write()
        .await
        .update_order(&update.id, update.status, update.message);
    if !matched {
        logger::log_warning(&format!("Order update for unknown id {}", update.id));
    }
    ok("Order updated")
}

// ============== Storefront pages ==============

pub async fn team(state: &AppState) -> HandlerResult {
    let store = state.store.read().await;
    Ok(build_json_response(StatusCode::OK, store.team()))
}

pub async fn testimonials(state: &AppState) -> HandlerResult {
    let store = state.store.read().await;
    Ok(build_json_response(StatusCode::OK, store.testimonials()))
}
