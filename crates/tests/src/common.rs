//! In-process stand-in for the marketplace API.
//!
//! Each test gets its own server on an ephemeral port and talks to it
//! through the real [`ApiClient`], so request shapes, status handling and
//! error bodies are exercised end to end.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use client::ApiClient;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{ClaimRequest, ListingDraft, LoginRequest, NgoProfile, RegisterRequest};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeState {
    /// username → (password, role)
    pub users: HashMap<String, (String, String)>,
    pub listings: Vec<Value>,
    pub next_id: i64,
    pub profiles: HashMap<String, NgoProfile>,
    /// While set, `GET /listings` answers 500.
    pub listings_down: bool,
}

pub type Shared = Arc<Mutex<FakeState>>;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn register(State(state): State<Shared>, Json(req): Json<RegisterRequest>) -> Response {
    if req.username.is_empty() || req.password.is_empty() || req.role.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Missing fields");
    }
    let mut s = state.lock().unwrap();
    if s.users.contains_key(&req.username) {
        return error(StatusCode::BAD_REQUEST, "Username already exists");
    }
    s.users.insert(req.username, (req.password, req.role));
    (StatusCode::CREATED, Json(json!({ "message": "Registration successful" }))).into_response()
}

async fn login(State(state): State<Shared>, Json(req): Json<LoginRequest>) -> Response {
    let s = state.lock().unwrap();
    match s.users.get(&req.username) {
        Some((password, role)) if *password == req.password => Json(json!({
            "username": req.username,
            "role": role,
            "message": "Login successful",
        }))
        .into_response(),
        _ => error(StatusCode::UNAUTHORIZED, "Invalid username or password"),
    }
}

async fn list_listings(State(state): State<Shared>) -> Response {
    let s = state.lock().unwrap();
    if s.listings_down {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "DB connection failed");
    }
    Json(Value::Array(s.listings.clone())).into_response()
}

fn listing_json(id: i64, draft: &ListingDraft) -> Value {
    json!({
        "id": id,
        "title": draft.title,
        "quantity": draft.quantity,
        "type": draft.listing_type,
        "farmer_id": draft.farmer_id,
        "farmer_name": draft.farmer_name,
        "available_date": draft.available_date,
        "price": draft.price,
        "status": "available",
        "claimed_by": null,
    })
}

async fn create_listing(State(state): State<Shared>, Json(draft): Json<ListingDraft>) -> Response {
    if draft.title.is_empty() || draft.quantity.is_empty() || draft.farmer_id.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Missing required fields");
    }
    let mut s = state.lock().unwrap();
    s.next_id += 1;
    let id = s.next_id;
    s.listings.push(listing_json(id, &draft));
    (StatusCode::CREATED, Json(json!({ "id": id, "message": "Listing added" }))).into_response()
}

async fn update_listing(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(draft): Json<ListingDraft>,
) -> Response {
    let mut s = state.lock().unwrap();
    match s.listings.iter_mut().find(|l| l["id"] == id) {
        Some(listing) => {
            let status = listing["status"].clone();
            let claimed_by = listing["claimed_by"].clone();
            *listing = listing_json(id, &draft);
            listing["status"] = status;
            listing["claimed_by"] = claimed_by;
            Json(listing.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Listing not found"),
    }
}

async fn delete_listing(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut s = state.lock().unwrap();
    let before = s.listings.len();
    s.listings.retain(|l| l["id"] != id);
    if s.listings.len() == before {
        return error(StatusCode::NOT_FOUND, "Listing not found");
    }
    Json(json!({ "message": "Listing deleted" })).into_response()
}

async fn claim_listing(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(req): Json<ClaimRequest>,
) -> Response {
    let mut s = state.lock().unwrap();
    let Some(listing) = s.listings.iter_mut().find(|l| l["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Listing not found");
    };
    if listing["type"] != "donate" {
        return error(StatusCode::BAD_REQUEST, "Only donations can be claimed");
    }
    if listing["status"] == "claimed" {
        return error(StatusCode::CONFLICT, "Listing already claimed");
    }
    listing["status"] = json!("claimed");
    listing["claimed_by"] = json!(req.claimed_by);
    Json(json!({ "message": "Donation claimed" })).into_response()
}

fn quantity(listing: &Value) -> f64 {
    listing["quantity"]
        .as_str()
        .and_then(|q| q.trim().parse().ok())
        .unwrap_or(0.0)
}

fn month(listing: &Value) -> String {
    listing["available_date"]
        .as_str()
        .and_then(|d| d.get(..7))
        .unwrap_or("unknown")
        .to_string()
}

async fn analytics(
    State(state): State<Shared>,
    Path((role, username)): Path<(String, String)>,
) -> Response {
    let s = state.lock().unwrap();
    match role.as_str() {
        "farmer" => {
            let own: Vec<&Value> = s.listings.iter().filter(|l| l["farmer_id"] == username.as_str()).collect();
            let count = |t: &str| own.iter().filter(|l| l["type"] == t).count();
            let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
            let mut total_quantity = 0.0;
            let mut total_earnings = 0.0;
            for l in own.iter().filter(|l| l["type"] == "sell") {
                let earned = quantity(l) * l["price"].as_f64().unwrap_or(0.0);
                total_quantity += quantity(l);
                total_earnings += earned;
                *monthly.entry(month(l)).or_default() += earned;
            }
            let monthly_data: BTreeMap<String, Value> = monthly
                .into_iter()
                .map(|(m, e)| (m, json!({ "earnings": e })))
                .collect();
            Json(json!({
                "total_quantity": total_quantity,
                "total_earnings": total_earnings,
                "sell_count": count("sell"),
                "barter_count": count("barter"),
                "donate_count": count("donate"),
                "monthly_data": monthly_data,
            }))
            .into_response()
        }
        "buyer" => {
            let mut crop_types: BTreeMap<String, u64> = BTreeMap::new();
            let mut total = 0u64;
            for l in s
                .listings
                .iter()
                .filter(|l| l["status"] == "available" && l["type"] != "donate")
            {
                total += 1;
                *crop_types.entry(l["title"].as_str().unwrap_or_default().to_string()).or_default() += 1;
            }
            Json(json!({
                "total_listings": total,
                "avg_savings_per_item": 12.5,
                "crop_types": crop_types,
            }))
            .into_response()
        }
        "ngo" => {
            let claimed: Vec<&Value> = s
                .listings
                .iter()
                .filter(|l| l["claimed_by"] == username.as_str())
                .collect();
            let mut monthly_claims: BTreeMap<String, f64> = BTreeMap::new();
            for l in &claimed {
                *monthly_claims.entry(month(l)).or_default() += quantity(l);
            }
            let available = s
                .listings
                .iter()
                .filter(|l| l["type"] == "donate" && l["status"] == "available")
                .count();
            Json(json!({
                "total_claimed_quantity": claimed.iter().map(|l| quantity(l)).sum::<f64>(),
                "claimed_count": claimed.len(),
                "available_count": available,
                "monthly_claims": monthly_claims,
            }))
            .into_response()
        }
        _ => error(StatusCode::BAD_REQUEST, "Unknown role"),
    }
}

#[derive(Deserialize)]
struct ProfileQuery {
    ngo_id: String,
}

async fn get_profile(State(state): State<Shared>, Query(q): Query<ProfileQuery>) -> Response {
    let s = state.lock().unwrap();
    match s.profiles.get(&q.ngo_id) {
        Some(profile) => Json(profile.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Profile not found"),
    }
}

async fn save_profile(State(state): State<Shared>, Json(profile): Json<NgoProfile>) -> Response {
    if profile.ngo_id.is_empty() {
        return error(StatusCode::BAD_REQUEST, "ngo_id is required");
    }
    let mut s = state.lock().unwrap();
    s.profiles.insert(profile.ngo_id.clone(), profile.clone());
    Json(profile).into_response()
}

/// Seeded 500 on every route, for checking server messages pass through.
async fn broken() -> Response {
    error(StatusCode::INTERNAL_SERVER_ERROR, "DB connection failed")
}

pub fn fake_router(state: Shared) -> Router {
    let api = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/listings", get(list_listings).post(create_listing))
        .route("/listings/{id}", delete(delete_listing).put(update_listing))
        .route("/claim/{id}", post(claim_listing))
        .route("/analytics/{role}/{username}", get(analytics))
        .route("/ngo/profile", get(get_profile).post(save_profile))
        .with_state(state);
    Router::new().nest("/api", api)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake API stopped");
    });
    format!("http://{addr}/api")
}

/// Start a fresh fake API and return a client pointed at it plus its state.
pub async fn spawn_api() -> (ApiClient, Shared) {
    let state: Shared = Arc::new(Mutex::new(FakeState::default()));
    let base = serve(fake_router(state.clone())).await;
    (ApiClient::new(base), state)
}

/// A server that answers every request with a 500 and an `{error}` body.
pub async fn spawn_broken_api() -> ApiClient {
    let router = Router::new().nest("/api", Router::new().fallback(broken));
    ApiClient::new(serve(router).await)
}

/// A base URL nothing is listening on.
pub async fn unreachable_api() -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a free port");
    let addr = listener.local_addr().expect("Port has no address");
    drop(listener);
    ApiClient::new(format!("http://{addr}/api"))
}

/// Register and log in, returning the session the app would persist.
pub async fn signed_in(api: &ApiClient, username: &str, role: &str) -> shared_types::Session {
    client::auth::register(api, username, "pw", role)
        .await
        .expect("register");
    client::auth::login(api, username, "pw").await.expect("login")
}
