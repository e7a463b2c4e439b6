use reqwest::StatusCode;

use sqlx::PgPool;

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{json_body, ContactBody, TestApp};

#[sqlx::test(migrations = "./migrations")]
async fn admin_submissions_requires_a_bearer_token(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .admin_submissions(None)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::UNAUTHORIZED, res.status());

    let res = app
        .admin_submissions(Some("wrong-token"))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::UNAUTHORIZED, res.status());

    let body = json_body(res).await;
    assert_eq!(false, body["success"]);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn admin_submissions_lists_newest_first(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let first = ContactBody {
        name: Some("First Client".into()),
        ..ContactBody::valid()
    };
    let second = ContactBody {
        name: Some("Second Client".into()),
        ..ContactBody::valid()
    };

    app.contact_create(&first)
        .await
        .expect("Failed to execute request");
    app.contact_create(&second)
        .await
        .expect("Failed to execute request");

    let token = app.admin_token.clone();
    let res = app
        .admin_submissions(Some(&token))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body = json_body(res).await;
    assert_eq!(true, body["success"]);
    assert_eq!(2, body["count"]);

    let data = body["data"].as_array().unwrap();
    assert_eq!(2, data.len());
    assert_eq!("Second Client", data[0]["name"]);
    assert_eq!("First Client", data[1]["name"]);
    assert_eq!("new", data[0]["status"]);

    Ok(())
}
