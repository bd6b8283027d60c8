pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod session;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpResponse};

pub use config::Settings;
pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;

pub use auth::AuthService;
pub use db::{DbOperations, User};
pub use session::SessionRegistry;

/// Health check endpoint handler
/// Returns a JSON response with server status, timestamp and pool usage
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let pool = state.db.get_pool_status().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "db_pool": {
            "total_connections": pool.total_connections,
            "active_connections": pool.active_connections,
            "idle_connections": pool.idle_connections,
        },
    }))
}

/// Application state shared across all requests. The session registry is
/// built exactly once here and handed to the auth service; nothing else
/// touches it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub db: DbOperations,
    pub sessions: Arc<SessionRegistry>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub async fn new(config: Settings) -> Result<Self> {
        let db = DbOperations::new_with_options(
            &config.database.url,
            config.database.max_connections,
            Duration::from_secs(5),
        )
        .await?;

        sqlx::migrate!("./migrations")
            .run(db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(error::DatabaseError::ConnectionError(e.to_string())))?;

        let sessions = Arc::new(SessionRegistry::new());
        let auth = Arc::new(AuthService::new(db.clone(), sessions.clone()));

        Ok(Self {
            config: Arc::new(config),
            db,
            sessions,
            auth,
        })
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.db.pool().close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn cleanup_env() {
        env::remove_var("APP_DATABASE__URL");
        env::remove_var("APP_DATABASE__MAX_CONNECTIONS");
    }

    #[tokio::test]
    async fn test_app_state_creation() {
        cleanup_env();
        let config = Settings::new_for_test().expect("Failed to load test config");
        let state = AppState::new(config).await.expect("Failed to build state");

        // Migrations ran, so the users table is queryable.
        assert!(state.db.find_by_email("nobody@x.com").await.unwrap().is_none());

        state.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_app_state_clone_shares_registry() {
        cleanup_env();
        let config = Settings::new_for_test().expect("Failed to load test config");
        let state = AppState::new(config).await.expect("Failed to build state");

        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(Arc::ptr_eq(&state.sessions, &cloned.sessions));
        assert!(Arc::ptr_eq(&state.auth, &cloned.auth));

        state.shutdown().await.unwrap();
    }
}
