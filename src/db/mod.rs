pub mod sqlite_service;
pub mod student;
pub mod user;
