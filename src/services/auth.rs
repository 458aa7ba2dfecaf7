//! Authentication service: registration, login, password hashing, token
//! issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use subtle::ConstantTimeEq;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{AuthResponse, Login, Register, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user and return a token with the public user view
    pub async fn register(&self, request: &Register) -> AppResult<AuthResponse> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Fast path for a clean error message; the unique constraint below is
        // the authoritative guard.
        if self
            .repository
            .users
            .username_exists(&request.username, None)
            .await?
        {
            return Err(AppError::UserAlreadyExists("User already exists".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self.hash_password(&request.password, &salt)?;

        let user = self
            .repository
            .users
            .create(&request.username, &hash, salt.as_str())
            .await?
            .ok_or_else(|| AppError::UserAlreadyExists("User already exists".to_string()))?;

        tracing::info!("Registered user id={}", user.id);

        let token = self.create_token(&user)?;
        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Authenticate by username and password and return a token with the
    /// public user view.
    ///
    /// Unknown username and wrong password fail identically so the response
    /// does not reveal which part was wrong.
    pub async fn login(&self, request: &Login) -> AppResult<AuthResponse> {
        let user = self
            .repository
            .users
            .get_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !self.verify_password(&user, &request.password)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        let token = self.create_token(&user)?;
        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Derive the Argon2 hash of a password keyed by the given salt
    pub fn hash_password(&self, password: &str, salt: &SaltString) -> AppResult<String> {
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Recompute the hash with the stored salt and compare the full byte
    /// sequences in constant time.
    pub fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let salt = SaltString::from_b64(&user.password_salt)
            .map_err(|_| AppError::Internal("Invalid stored password salt".to_string()))?;
        let computed = self.hash_password(password, &salt)?;
        Ok(computed
            .as_bytes()
            .ct_eq(user.password_hash.as_bytes())
            .into())
    }
}
