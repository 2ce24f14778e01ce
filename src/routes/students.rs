use actix_web::{get, http::header, http::StatusCode, post, web, HttpResponse};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::templates::{page, render, IndexTemplate, UpdateTemplate};
use crate::types::error::AppError;
use crate::types::student::StudentForm;

fn back_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/")]
async fn index(db: web::Data<Arc<SqliteService>>) -> Result<HttpResponse, AppError> {
    let students = db.list_students().await?;
    page(&IndexTemplate {
        students,
        error: None,
    })
}

#[post("/")]
async fn create(
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    match form.into_inner().into_fields() {
        Ok(fields) => {
            db.create_student(fields).await?;
            Ok(back_home())
        }
        Err(AppError::Validation(msg)) => {
            let students = db.list_students().await?;
            render(
                &IndexTemplate {
                    students,
                    error: Some(msg),
                },
                StatusCode::BAD_REQUEST,
            )
        }
        Err(e) => Err(e),
    }
}

#[get("/delete/{id}")]
async fn delete(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    db.delete_student(path.into_inner()).await?;
    Ok(back_home())
}

#[get("/update/{id}")]
async fn update_form(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let student = db.get_student(path.into_inner()).await?;
    page(&UpdateTemplate {
        student,
        error: None,
    })
}

#[post("/update/{id}")]
async fn update_apply(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match form.into_inner().into_fields() {
        Ok(fields) => {
            db.update_student(id, fields).await?;
            Ok(back_home())
        }
        Err(AppError::Validation(msg)) => {
            let student = db.get_student(id).await?;
            render(
                &UpdateTemplate {
                    student,
                    error: Some(msg),
                },
                StatusCode::BAD_REQUEST,
            )
        }
        Err(e) => Err(e),
    }
}
