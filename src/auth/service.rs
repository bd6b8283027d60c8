use std::sync::Arc;
use tracing::warn;

use crate::db::models::User;
use crate::db::operations::DbOperations;
use crate::error::{AppError, AuthError};
use crate::session::SessionRegistry;

pub struct AuthService {
    db: DbOperations,
    sessions: Arc<SessionRegistry>,
}

impl AuthService {
    pub fn new(db: DbOperations, sessions: Arc<SessionRegistry>) -> Self {
        Self { db, sessions }
    }

    /// Registers a new user and returns the store-assigned id. No session
    /// is created; the caller logs in separately.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, AppError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError(
                "All fields are required".to_string(),
            ));
        }

        if self.db.find_by_email(email).await?.is_some() {
            return Err(AppError::EmailTaken);
        }

        // The pre-check above gives the friendly answer on the common path,
        // but the UNIQUE constraint is what actually holds under concurrent
        // registrations with the same email.
        match self.db.insert_user(username, email, password).await {
            Ok(id) => Ok(id),
            Err(AppError::DatabaseError(crate::error::DatabaseError::Duplicate)) => {
                Err(AppError::EmailTaken)
            }
            Err(e) => Err(e),
        }
    }

    /// Authenticates and opens a session. A store failure here is
    /// deliberately indistinguishable from bad credentials: an
    /// unauthenticated caller learns nothing about storage state.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, i64), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let user = match self.db.find_by_email_and_password(email, password).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => {
                warn!("Store error during login, reporting invalid credentials: {}", e);
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let token = self.sessions.create(user.id).await;
        Ok((token, user.id))
    }

    /// Resolves a session token to its user. Unknown tokens, dangling
    /// sessions whose user record is gone, and store errors all come back
    /// as `None`; the routes answer every one of them with a redirect.
    pub async fn current_user(&self, token: &str) -> Option<User> {
        let user_id = self.sessions.resolve(token).await?;

        match self.db.find_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Store error resolving session user {}: {}", user_id, e);
                None
            }
        }
    }

    pub async fn logout(&self, token: &str) {
        self.sessions.revoke(token).await;
    }
}
