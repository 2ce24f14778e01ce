use std::sync::Arc;

use rollbook::db::sqlite_service::SqliteService;

pub mod client;

pub struct TestContext {
    pub db: Arc<SqliteService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // in-memory store, migrated on open; one per test
        let db = Arc::new(
            SqliteService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize SqliteService"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use rollbook::types::student::StudentFields;

    pub fn sample_student() -> StudentFields {
        StudentFields {
            name: "Ann".to_string(),
            age: 20,
            group: "A1".to_string(),
            college_name: "X".to_string(),
        }
    }

    pub fn sample_student_named(name: &str) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            ..sample_student()
        }
    }
}
