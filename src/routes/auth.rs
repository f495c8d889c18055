use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{TokenRequest, TokenResponse};
use crate::routes::AppState;
use crate::services::AuthError;

/// The authenticated caller, resolved from an `Authorization: Bearer` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Extract the token from an Authorization header value
///
/// Accepts both `Bearer <token>` and `Token <token>`.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if (scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token")) && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = (|| -> Result<AuthUser, ApiError> {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or(ApiError::Auth(AuthError::MissingToken))?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(bearer_token)
                .ok_or(ApiError::Auth(AuthError::MissingToken))?;

            let user_id = state.tokens.verify(token)?;
            Ok(AuthUser { user_id })
        })();

        if let Err(e) = &result {
            tracing::debug!("Rejected request to {}: {}", req.path(), e);
        }

        ready(result)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/token", web::post().to(obtain_token));
}

/// Exchange credentials for a bearer token
///
/// POST /api/v1/auth/token
async fn obtain_token(
    state: web::Data<AppState>,
    req: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let credentials = state.postgres.get_credentials(req.username.trim()).await?;
    let (user_id, stored_hash) = credentials.unzip();

    let passwords = state.passwords.clone();
    let password = req.password.clone();
    let verified = web::block(move || passwords.check(&password, stored_hash.as_deref())).await??;

    let Some(user_id) = user_id.filter(|_| verified) else {
        tracing::info!("Failed login for {}", req.username);
        return Err(AuthError::InvalidCredentials.into());
    };

    let token = state.tokens.issue(user_id)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
