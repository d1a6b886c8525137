use axum::{
	Json, Router,
	extract::{Extension, Query, State, rejection::JsonRejection},
	http::StatusCode,
	middleware,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use uuid::Uuid;

use crate::{
	auth::{self, UserId},
	state::AppState,
};
use webclip_service::{
	CaptureRequest, CreateItemRequest, CreateScrapedDataRequest, ItemFilter, ListRequest,
	ScrapedDataFilter, SearchRequest, UpdateItemRequest, UpdateRequest, UpdateScrapedDataRequest,
};

pub fn router(state: AppState) -> Router {
	let scraped = Router::new()
		.route(
			"/api/scraped",
			get(get_scraped).post(create_scraped).put(update_scraped).delete(delete_scraped),
		)
		.route_layer(middleware::from_fn_with_state(state.clone(), auth::require_user));

	Router::new()
		.route("/health", get(health))
		.route("/api", get(api_info))
		.route(
			"/api/memories",
			get(get_memories).post(create_memory).put(update_memory).delete(delete_memory),
		)
		.route("/api/memories/search", post(search_memories))
		.route("/api/memories/stats", get(memory_stats))
		// Legacy alias; the extension still posts captures here.
		.route("/api/scrape", post(create_memory))
		.route("/api/items", get(get_items).post(create_item).put(update_item).delete(delete_item))
		.merge(scraped)
		.fallback(not_found)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn api_info() -> Response {
	success(
		StatusCode::OK,
		"API is running",
		Some(serde_json::json!({
			"version": "1.0.0",
			"endpoints": {
				"POST /api/memories": "Create a memory",
				"GET /api/memories": "List memories, or fetch one with ?id=",
				"PUT /api/memories?id=": "Update a memory",
				"DELETE /api/memories?id=": "Delete a memory",
				"POST /api/memories/search": "Full-text search",
				"GET /api/memories/stats": "Usage statistics",
				"POST /api/scrape": "Create a memory (legacy alias)",
				"GET /api/items": "List items",
				"POST /api/items": "Create an item",
				"GET /api/scraped": "List scraped data (JWT required)",
				"POST /api/scraped": "Create scraped data (JWT required)",
			},
		})),
	)
}

async fn not_found() -> ApiError {
	ApiError::new(StatusCode::NOT_FOUND, "Endpoint not found".to_string())
}

#[derive(Debug, Deserialize)]
struct MemoryParams {
	id: Option<String>,
	content_type: Option<String>,
	platform: Option<String>,
	tags: Option<String>,
	search: Option<String>,
	limit: Option<String>,
	offset: Option<String>,
}

async fn create_memory(
	State(state): State<AppState>,
	payload: Result<Json<CaptureRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let req = require_json(payload)?;
	let memory = state.service.capture(req).await?;

	Ok(success(StatusCode::CREATED, "Memory saved successfully", Some(memory)))
}

async fn get_memories(
	State(state): State<AppState>,
	Query(params): Query<MemoryParams>,
) -> Result<Response, ApiError> {
	if let Some(id) = params.id.as_deref().filter(|id| !id.is_empty()) {
		let id = parse_memory_id(id)?;
		let memory = state.service.get_memory(id).await?;

		return Ok(success(StatusCode::OK, "Memory retrieved successfully", Some(memory)));
	}

	let req = ListRequest {
		content_type: params.content_type,
		platform: params.platform,
		tags: params.tags,
		search: params.search,
		limit: parse_number(params.limit),
		offset: parse_number(params.offset),
	};
	let response = state.service.list(req).await?;

	Ok(success(StatusCode::OK, "Memories retrieved successfully", Some(response)))
}

async fn update_memory(
	State(state): State<AppState>,
	Query(params): Query<MemoryParams>,
	payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let id = parse_memory_id(require_id(params.id.as_deref(), "Memory ID is required")?)?;
	let req = require_json(payload)?;
	let memory = state.service.update_memory(id, req).await?;

	Ok(success(StatusCode::OK, "Memory updated successfully", Some(memory)))
}

async fn delete_memory(
	State(state): State<AppState>,
	Query(params): Query<MemoryParams>,
) -> Result<Response, ApiError> {
	let id = parse_memory_id(require_id(params.id.as_deref(), "Memory ID is required")?)?;

	state.service.delete_memory(id).await?;

	Ok(success::<()>(StatusCode::OK, "Memory deleted successfully", None))
}

async fn search_memories(
	State(state): State<AppState>,
	payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let req = require_json(payload)?;
	let response = state.service.search(req).await?;

	Ok(success(StatusCode::OK, "Search completed", Some(response)))
}

async fn memory_stats(State(state): State<AppState>) -> Result<Response, ApiError> {
	let stats = state.service.stats().await?;

	Ok(success(StatusCode::OK, "Stats retrieved", Some(stats)))
}

#[derive(Debug, Deserialize)]
struct ItemParams {
	id: Option<String>,
	status: Option<String>,
	priority: Option<String>,
}

async fn create_item(
	State(state): State<AppState>,
	payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let req = require_json(payload)?;
	let item = state.service.create_item(req).await?;

	Ok(success(StatusCode::CREATED, "Item created successfully", Some(item)))
}

async fn get_items(
	State(state): State<AppState>,
	Query(params): Query<ItemParams>,
) -> Result<Response, ApiError> {
	if let Some(id) = params.id.as_deref().filter(|id| !id.is_empty()) {
		let item = state.service.get_item(parse_item_id(id)?).await?;

		return Ok(success(StatusCode::OK, "Item retrieved successfully", Some(item)));
	}

	let items = state
		.service
		.list_items(ItemFilter { status: params.status, priority: params.priority })
		.await?;

	Ok(success(StatusCode::OK, "Items retrieved successfully", Some(items)))
}

async fn update_item(
	State(state): State<AppState>,
	Query(params): Query<ItemParams>,
	payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let id = parse_item_id(require_id(params.id.as_deref(), "Item ID is required")?)?;
	let req = require_json(payload)?;
	let item = state.service.update_item(id, req).await?;

	Ok(success(StatusCode::OK, "Item updated successfully", Some(item)))
}

async fn delete_item(
	State(state): State<AppState>,
	Query(params): Query<ItemParams>,
) -> Result<Response, ApiError> {
	let id = parse_item_id(require_id(params.id.as_deref(), "Item ID is required")?)?;

	state.service.delete_item(id).await?;

	Ok(success::<()>(StatusCode::OK, "Item deleted successfully", None))
}

#[derive(Debug, Deserialize)]
struct ScrapedParams {
	id: Option<String>,
	url: Option<String>,
	tag: Option<String>,
	limit: Option<String>,
	page: Option<String>,
}

async fn create_scraped(
	State(state): State<AppState>,
	Extension(UserId(user_id)): Extension<UserId>,
	payload: Result<Json<CreateScrapedDataRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let req = require_json(payload)?;
	let data = state.service.create_scraped(&user_id, req).await?;

	Ok(success(StatusCode::CREATED, "Scraped data created successfully", Some(data)))
}

async fn get_scraped(
	State(state): State<AppState>,
	Extension(UserId(user_id)): Extension<UserId>,
	Query(params): Query<ScrapedParams>,
) -> Result<Response, ApiError> {
	if let Some(id) = params.id.as_deref().filter(|id| !id.is_empty()) {
		let data = state.service.get_scraped(&user_id, parse_scraped_id(id)?).await?;

		return Ok(success(StatusCode::OK, "Scraped data retrieved successfully", Some(data)));
	}

	let filter = ScrapedDataFilter {
		url: params.url,
		tag: params.tag,
		limit: parse_number(params.limit),
		page: parse_number(params.page),
	};
	let response = state.service.list_scraped(&user_id, filter).await?;

	Ok(success(StatusCode::OK, "Scraped data retrieved successfully", Some(response)))
}

async fn update_scraped(
	State(state): State<AppState>,
	Extension(UserId(user_id)): Extension<UserId>,
	Query(params): Query<ScrapedParams>,
	payload: Result<Json<UpdateScrapedDataRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let id = parse_scraped_id(require_id(params.id.as_deref(), "Scraped data ID is required")?)?;
	let req = require_json(payload)?;

	state.service.update_scraped(&user_id, id, req).await?;

	Ok(success::<()>(StatusCode::OK, "Scraped data updated successfully", None))
}

async fn delete_scraped(
	State(state): State<AppState>,
	Extension(UserId(user_id)): Extension<UserId>,
	Query(params): Query<ScrapedParams>,
) -> Result<Response, ApiError> {
	let id = parse_scraped_id(require_id(params.id.as_deref(), "Scraped data ID is required")?)?;

	state.service.delete_scraped(&user_id, id).await?;

	Ok(success::<()>(StatusCode::OK, "Scraped data deleted successfully", None))
}

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
	success: bool,
	message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	data: Option<T>,
}

fn success<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> Response {
	(status, Json(SuccessBody { success: true, message: message.to_string(), data }))
		.into_response()
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	success: bool,
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error: String,
}
impl ApiError {
	pub fn new(status: StatusCode, error: String) -> Self {
		Self { status, error }
	}
}
impl From<webclip_service::Error> for ApiError {
	fn from(err: webclip_service::Error) -> Self {
		match err {
			webclip_service::Error::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, message),
			webclip_service::Error::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, message),
			webclip_service::Error::Storage { message } => {
				tracing::error!(error = %message, "Storage failure.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { success: false, error: self.error })).into_response()
	}
}

fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
	match payload {
		Ok(Json(value)) => Ok(value),
		Err(rejection) => Err(ApiError::new(
			StatusCode::BAD_REQUEST,
			format!("Invalid request body: {rejection}"),
		)),
	}
}

fn require_id<'a>(id: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
	id.filter(|id| !id.is_empty())
		.ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, message.to_string()))
}

// Malformed identifiers are rejected before the store is touched.
fn parse_memory_id(raw: &str) -> Result<Uuid, ApiError> {
	Uuid::parse_str(raw).map_err(|_| {
		ApiError::new(StatusCode::BAD_REQUEST, "Invalid memory ID format".to_string())
	})
}

fn parse_item_id(raw: &str) -> Result<i64, ApiError> {
	raw.parse().map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid item ID".to_string()))
}

fn parse_scraped_id(raw: &str) -> Result<i64, ApiError> {
	raw.parse().map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid ID".to_string()))
}

// Filter values arrive as raw strings; anything that does not parse falls
// back to the defaults instead of failing the request.
fn parse_number(raw: Option<String>) -> Option<i64> {
	raw.and_then(|value| value.parse().ok())
}
