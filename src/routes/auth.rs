use actix_session::Session;
use actix_web::{get, http::header, http::StatusCode, post, route, web, HttpResponse};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::templates::{page, render, DashboardTemplate, LoginTemplate, RegisterTemplate};
use crate::types::error::AppError;
use crate::types::user::CredentialsForm;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::session::{current_user_id, USER_ID_KEY};

const MIN_PASSWORD_LEN: usize = 8;

fn to_login() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login"))
        .finish()
}

#[get("/register")]
async fn register_form() -> Result<HttpResponse, AppError> {
    page(&RegisterTemplate { error: None })
}

#[post("/register")]
async fn register(
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let rejection = if form.username.trim().is_empty() {
        Some("username must not be empty".to_string())
    } else if form.password.len() < MIN_PASSWORD_LEN {
        Some(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
    } else if db.username_taken(&form.username).await? {
        Some("that username is already taken".to_string())
    } else {
        None
    };
    if let Some(msg) = rejection {
        return render(&RegisterTemplate { error: Some(msg) }, StatusCode::BAD_REQUEST);
    }

    let hash = hash_password(&form.password)?;
    match db.create_user(form.username, hash).await {
        // registration does not log the user in
        Ok(_) => Ok(to_login()),
        Err(AppError::AlreadyExists) => render(
            &RegisterTemplate {
                error: Some("that username is already taken".to_string()),
            },
            StatusCode::BAD_REQUEST,
        ),
        Err(e) => Err(e),
    }
}

#[get("/login")]
async fn login_form() -> Result<HttpResponse, AppError> {
    page(&LoginTemplate { error: None })
}

#[post("/login")]
async fn login(
    db: web::Data<Arc<SqliteService>>,
    session: Session,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let user = match db.get_user_by_username(&form.username).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            return render(
                &LoginTemplate {
                    error: Some("no account with that username".to_string()),
                },
                StatusCode::BAD_REQUEST,
            );
        }
        Err(e) => return Err(e),
    };

    if !verify_password(&form.password, &user.password_hash)? {
        return render(
            &LoginTemplate {
                error: Some("wrong password".to_string()),
            },
            StatusCode::UNAUTHORIZED,
        );
    }

    session.insert(USER_ID_KEY, user.id)?;
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/dashboard"))
        .finish())
}

#[route("/logout", method = "GET", method = "POST")]
async fn logout(session: Session) -> HttpResponse {
    session.purge();
    to_login()
}

#[route("/dashboard", method = "GET", method = "POST")]
async fn dashboard(
    db: web::Data<Arc<SqliteService>>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let Some(user_id) = current_user_id(&session) else {
        return Ok(to_login());
    };
    let user = db.get_user_by_id(user_id).await?;
    page(&DashboardTemplate {
        username: user.username,
    })
}
