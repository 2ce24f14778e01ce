use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::{Cookie, Key},
    dev::ServiceResponse,
    http::header,
    web, App,
};
use std::sync::Arc;

use rollbook::db::sqlite_service::SqliteService;
use rollbook::routes::configure_routes;
use rollbook::utils::password::hash_password;

pub struct TestClient {
    pub db: Arc<SqliteService>,
}

impl TestClient {
    pub fn new(db: Arc<SqliteService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let session_key = Key::from(&[0u8; 64]);

        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key)
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> i32 {
        let hash = hash_password(password).expect("Failed to hash password");
        self.db
            .create_user(username.to_string(), hash)
            .await
            .expect("Failed to create user")
    }
}

/// The session cookie the middleware set on this response, if any.
#[allow(dead_code)]
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .filter_map(|v| v.to_str().ok())
        .filter_map(|s| Cookie::parse_encoded(s.to_owned()).ok())
        .find(|c| c.name() == "id")
}
