use axum::{
	body::Body,
	extract::{Request, State},
	http::{StatusCode, header::AUTHORIZATION},
	middleware::Next,
	response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::Value;

use crate::{routes::ApiError, state::AppState};

/// Authenticated caller identity, injected into request extensions by
/// [`require_user`].
#[derive(Clone, Debug)]
pub struct UserId(pub String);

/// Bearer-JWT middleware for the per-user scraped-data surface. The token is
/// HS256-signed with `JWT_SECRET`; the user id comes from the first of the
/// `sub`, `userId`, or `user_id` claims.
pub async fn require_user(
	State(state): State<AppState>,
	mut req: Request<Body>,
	next: Next,
) -> Result<Response, ApiError> {
	let Some(header) = req.headers().get(AUTHORIZATION).and_then(|value| value.to_str().ok())
	else {
		return Err(ApiError::new(
			StatusCode::UNAUTHORIZED,
			"Authorization header required".to_string(),
		));
	};
	let Some(token) = header.strip_prefix("Bearer ") else {
		return Err(ApiError::new(
			StatusCode::UNAUTHORIZED,
			"Invalid authorization format. Use: Bearer <token>".to_string(),
		));
	};
	let Some(secret) = state.jwt_secret.as_deref() else {
		tracing::error!("JWT_SECRET is not configured; rejecting scraped-data request.");

		return Err(ApiError::new(
			StatusCode::INTERNAL_SERVER_ERROR,
			"Server configuration error".to_string(),
		));
	};

	// `exp` stays optional but is checked when present, matching HMAC
	// tokens minted by the companion frontend.
	let mut validation = Validation::new(Algorithm::HS256);

	validation.set_required_spec_claims::<&str>(&[]);

	let claims = jsonwebtoken::decode::<Value>(
		token,
		&DecodingKey::from_secret(secret.as_bytes()),
		&validation,
	)
	.map_err(|err| ApiError::new(StatusCode::UNAUTHORIZED, format!("Invalid token: {err}")))?
	.claims;
	let Some(user_id) = extract_user_id(&claims) else {
		return Err(ApiError::new(
			StatusCode::UNAUTHORIZED,
			"User ID not found in token".to_string(),
		));
	};

	req.extensions_mut().insert(UserId(user_id));

	Ok(next.run(req).await)
}

fn extract_user_id(claims: &Value) -> Option<String> {
	["sub", "userId", "user_id"]
		.iter()
		.find_map(|key| claims.get(key).and_then(Value::as_str))
		.map(ToString::to_string)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_id_claim_precedence() {
		let claims = serde_json::json!({ "userId": "u2", "user_id": "u3" });

		assert_eq!(extract_user_id(&claims), Some("u2".to_string()));

		let claims = serde_json::json!({ "sub": "u1", "user_id": "u3" });

		assert_eq!(extract_user_id(&claims), Some("u1".to_string()));

		let claims = serde_json::json!({ "aud": "nobody" });

		assert_eq!(extract_user_id(&claims), None);
	}
}
