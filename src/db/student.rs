use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, student::StudentFields};
use entity::student::{
    ActiveModel as StudentActive, Column, Entity as Student, Model as StudentModel,
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SqliteService {
    pub async fn list_students(&self) -> Result<Vec<StudentModel>, AppError> {
        Ok(Student::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get_student(&self, id: i32) -> Result<StudentModel, AppError> {
        Ok(Student::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student does not exist".into()))?)
    }

    pub async fn create_student(&self, fields: StudentFields) -> Result<StudentModel, AppError> {
        let created = StudentActive {
            name: Set(fields.name),
            age: Set(fields.age),
            group: Set(fields.group),
            college_name: Set(fields.college_name),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(created)
    }

    /// Overwrites every mutable field of the target row.
    pub async fn update_student(
        &self,
        id: i32,
        fields: StudentFields,
    ) -> Result<StudentModel, AppError> {
        let mut am: StudentActive = self.get_student(id).await?.into();
        am.name = Set(fields.name);
        am.age = Set(fields.age);
        am.group = Set(fields.group);
        am.college_name = Set(fields.college_name);
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_student(&self, id: i32) -> Result<(), AppError> {
        let res = Student::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
