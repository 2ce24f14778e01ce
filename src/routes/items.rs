use actix_web::{delete as delete_route, get, post, put, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::student::StudentJson;
use entity::student::Model as StudentModel;

#[get("")]
async fn list(db: web::Data<Arc<SqliteService>>) -> ApiResult<Vec<StudentModel>> {
    Ok(ApiResponse::Ok(db.list_students().await?))
}

/// Returns the full list, matching what the HTML page shows after a create.
#[post("")]
async fn create(
    db: web::Data<Arc<SqliteService>>,
    body: web::Json<StudentJson>,
) -> ApiResult<Vec<StudentModel>> {
    let fields = body.into_inner().into_fields()?;
    db.create_student(fields).await?;
    Ok(ApiResponse::Created(db.list_students().await?))
}

#[get("/{pk}")]
async fn get_one(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<StudentModel> {
    Ok(ApiResponse::Ok(db.get_student(path.into_inner()).await?))
}

#[put("/{pk}")]
async fn update(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    body: web::Json<StudentJson>,
) -> ApiResult<StudentModel> {
    let fields = body.into_inner().into_fields()?;
    Ok(ApiResponse::Ok(
        db.update_student(path.into_inner(), fields).await?,
    ))
}

/// Returns the rows that remain.
#[delete_route("/{pk}")]
async fn delete(
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<StudentModel>> {
    db.delete_student(path.into_inner()).await?;
    Ok(ApiResponse::Ok(db.list_students().await?))
}
