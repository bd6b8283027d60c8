use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::cookie::Cookie;
use actix_web::http::header;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::views;
use crate::AppState;

pub const SESSION_COOKIE: &str = "sessionId";

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::index())
}

pub async fn register_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::register_form())
}

pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::login_form(None))
}

// Fields default to empty so a missing key and an empty value both reach
// the controller's presence check instead of failing form extraction.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register(
    form: web::Form<RegisterForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received registration request for email: {}", form.email);

    match state
        .auth
        .register(&form.username, &form.email, &form.password)
        .await
    {
        Ok(user_id) => {
            info!("Registration successful for email: {} (id {})", form.email, user_id);
            Ok(redirect("/login"))
        }
        Err(e @ (AppError::ValidationError(_) | AppError::EmailTaken)) => {
            warn!("Registration rejected for email: {}: {}", form.email, e);
            Err(e)
        }
        Err(e) => {
            error!("Registration failed for email: {}: {}", form.email, e);
            Err(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    form: web::Form<LoginForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received login request for email: {}", form.email);

    match state.auth.login(&form.email, &form.password).await {
        Ok((token, user_id)) => {
            info!("Login successful for email: {} (id {})", form.email, user_id);
            let cookie = Cookie::build(SESSION_COOKIE, token)
                .path("/")
                .http_only(true)
                .finish();
            Ok(HttpResponse::Found()
                .cookie(cookie)
                .insert_header((header::LOCATION, "/dashboard"))
                .finish())
        }
        Err(AppError::AuthError(_)) => {
            info!("Login failed for email: {}", form.email);
            Ok(HttpResponse::Unauthorized()
                .content_type("text/html; charset=utf-8")
                .body(views::login_form(Some("Invalid credentials"))))
        }
        Err(e) => Err(e),
    }
}

pub async fn dashboard(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return redirect("/login");
    };

    match state.auth.current_user(cookie.value()).await {
        Some(user) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::dashboard(&user.username)),
        None => redirect("/login"),
    }
}

pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        state.auth.logout(cookie.value()).await;
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Found()
        .cookie(removal)
        .insert_header((header::LOCATION, "/login"))
        .finish()
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
