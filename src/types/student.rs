use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Field set the store writes on create and update. Ids never travel in
/// here; the store assigns them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub group: String,
    pub college_name: String,
}

impl StudentFields {
    fn validate(self) -> Result<Self, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if self.group.trim().is_empty() {
            return Err(AppError::Validation("group must not be empty".to_string()));
        }
        if self.college_name.trim().is_empty() {
            return Err(AppError::Validation("college must not be empty".to_string()));
        }
        Ok(self)
    }
}

/// What the browser posts at `/` and `/update/{id}`. Everything arrives as
/// text; a stray `id` input is dropped by deserialization.
#[derive(Deserialize, Debug)]
pub struct StudentForm {
    pub name: String,
    #[serde(default)]
    pub age: String,
    pub group: String,
    pub college: String,
}

impl StudentForm {
    pub fn into_fields(self) -> Result<StudentFields, AppError> {
        let age = match self.age.trim() {
            "" => 0,
            raw => raw
                .parse()
                .map_err(|_| AppError::Validation("age must be a number".to_string()))?,
        };
        StudentFields {
            name: self.name,
            age,
            group: self.group,
            college_name: self.college,
        }
        .validate()
    }
}

/// JSON body for the `/items` surface. Accepts `college` as an alias so
/// form-shaped payloads keep working; an `id` member is ignored.
#[derive(Serialize, Deserialize, Debug)]
pub struct StudentJson {
    pub name: String,
    #[serde(default)]
    pub age: i32,
    pub group: String,
    #[serde(alias = "college")]
    pub college_name: String,
}

impl StudentJson {
    pub fn into_fields(self) -> Result<StudentFields, AppError> {
        StudentFields {
            name: self.name,
            age: self.age,
            group: self.group,
            college_name: self.college_name,
        }
        .validate()
    }
}
