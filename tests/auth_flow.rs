mod common;

use actix_web::{http::header, http::StatusCode, test};
use common::{client::session_cookie, client::TestClient, TestContext};

#[tokio::test]
async fn test_register_then_login_grants_dashboard() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[("username", "ann"), ("password", "sup3rsecret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/login"
    );
    // registering must not log the user in
    assert!(session_cookie(&resp).is_none());

    let stored = ctx.db.get_user_by_username("ann").await.unwrap();
    assert_ne!(stored.password_hash, "sup3rsecret");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "ann"), ("password", "sup3rsecret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&resp).expect("login should set a session cookie");

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("ann"));
}

#[tokio::test]
async fn test_register_duplicate_username_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("ann", "sup3rsecret").await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[("username", "ann"), ("password", "an0therpass")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // the original row survives untouched
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "ann"), ("password", "sup3rsecret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "ann"), ("password", "an0therpass")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[("username", "ann"), ("password", "short")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(!ctx.db.username_taken("ann").await.unwrap());
}

#[tokio::test]
async fn test_login_unknown_username_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "nobody"), ("password", "sup3rsecret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&resp).is_none());
}

#[tokio::test]
async fn test_login_wrong_password_establishes_no_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("ann", "sup3rsecret").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "ann"), ("password", "wr0ngpassword")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // whatever came back must not open the dashboard
    let mut req = test::TestRequest::get().uri("/dashboard");
    if let Some(cookie) = session_cookie(&resp) {
        req = req.cookie(cookie);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/login"
    );
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/login"
    );
}

#[tokio::test]
async fn test_logout_clears_the_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("ann", "sup3rsecret").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("username", "ann"), ("password", "sup3rsecret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).expect("login should set a session cookie");

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let cleared = session_cookie(&resp).expect("logout should rewrite the session cookie");
    assert!(cleared.value().is_empty());

    // the browser now holds the cleared cookie
    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(cleared)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_logout_works_over_get_too() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/login"
    );
}
