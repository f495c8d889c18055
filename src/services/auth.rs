use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm as Argon2Algorithm, Argon2, Params, Version};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Argon2id passes over memory for newly stored passwords
pub const DEFAULT_HASH_TIME_COST: u32 = Params::DEFAULT_T_COST;

/// Argon2id memory size in KiB for newly stored passwords
pub const DEFAULT_HASH_MEMORY_KIB: u32 = Params::DEFAULT_M_COST;

/// Errors that can occur while issuing or checking credentials
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication credentials were not provided.")]
    MissingToken,

    #[error("Invalid or expired token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Unable to log in with provided credentials.")]
    InvalidCredentials,

    #[error("Malformed password hash")]
    MalformedHash,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// JWT claims carried by bearer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
    pub jti: String,
}

/// Issues and verifies HS256 bearer tokens
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Issue a token for a user
    pub fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidCredentials)
    }
}

/// Argon2id password hashing with PHC-format output
///
/// Hashing is CPU and memory bound; callers on an async runtime should run
/// these methods through a blocking pool.
#[derive(Clone)]
pub struct Passwords {
    params: Params,
    /// Checked when a login names no account
    dummy_hash: String,
}

impl Passwords {
    pub fn new(time_cost: u32, memory_kib: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, time_cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let mut passwords = Self { params, dummy_hash: String::new() };
        passwords.dummy_hash = passwords.hash("unused-account-password")?;
        Ok(passwords)
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Argon2Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password into a PHC string, e.g. `$argon2id$v=19$m=...`
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Check a login attempt against the stored hash, if the account exists
    ///
    /// A missing account is checked against a dummy hash and always fails,
    /// so both outcomes take the same time.
    pub fn check(&self, password: &str, stored: Option<&str>) -> Result<bool, AuthError> {
        match stored {
            Some(stored) => verify_password(password, stored),
            None => verify_password(password, &self.dummy_hash).map(|_| false),
        }
    }
}

/// Check a password against a stored PHC hash, using the parameters it was created with
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|_| AuthError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(_) => Err(AuthError::MalformedHash),
    }
}
