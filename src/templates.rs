//! Server-side pages, one struct per template.

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use askama::Template;

use crate::types::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub students: Vec<entity::student::Model>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "update.html")]
pub struct UpdateTemplate {
    pub student: entity::student::Model,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
}

pub fn page<T: Template>(tpl: &T) -> Result<HttpResponse, AppError> {
    render(tpl, StatusCode::OK)
}

pub fn render<T: Template>(tpl: &T, status: StatusCode) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(tpl.render()?))
}
