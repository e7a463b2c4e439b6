use reqwest::StatusCode;

use sqlx::{PgPool, Row};

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{json_body, BookingBody, TestApp};

#[sqlx::test(migrations = "./migrations")]
async fn booking_returns_success_for_valid_request(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let res = app
        .booking_create(&BookingBody::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body = json_body(res).await;
    assert_eq!(true, body["success"]);
    assert!(!body["bookingId"].as_str().unwrap().is_empty());

    let row = sqlx::query(
        "select name, tattoo_type, preferred_date, preferred_time, message, \
         status::text as status from bookings",
    )
    .fetch_one(&pool)
    .await
    .expect("Failed to fetch inserted row");

    assert_eq!("Asha Rao", row.get::<String, _>("name"));
    assert_eq!("blackwork", row.get::<String, _>("tattoo_type"));
    assert_eq!("2026-09-14", row.get::<String, _>("preferred_date"));
    assert_eq!("15:30", row.get::<String, _>("preferred_time"));
    assert_eq!(None, row.get::<Option<String>, _>("message"));
    assert_eq!("new", row.get::<String, _>("status"));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn booking_returns_bad_request_for_missing_fields(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let test_cases: Vec<(&str, BookingBody)> = vec![
        (
            "missing tattoo type",
            BookingBody {
                tattoo_type: None,
                ..BookingBody::valid()
            },
        ),
        (
            "missing date",
            BookingBody {
                date: None,
                ..BookingBody::valid()
            },
        ),
        (
            "missing time",
            BookingBody {
                time: None,
                ..BookingBody::valid()
            },
        ),
        (
            "missing name and email",
            BookingBody {
                name: None,
                email: None,
                ..BookingBody::valid()
            },
        ),
    ];

    for (desc, body) in test_cases {
        let res = app
            .booking_create(&body)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when payload was {}",
            desc
        );
    }

    let row = sqlx::query("select id from bookings")
        .fetch_optional(&pool)
        .await
        .expect("Failed to query bookings");
    assert!(row.is_none(), "Invalid payloads must not be persisted");

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn booking_accepts_an_optional_message(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let body = BookingBody {
        message: Some("Sleeve consultation first".into()),
        ..BookingBody::valid()
    };

    let res = app
        .booking_create(&body)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let row = sqlx::query("select message from bookings")
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch inserted row");

    assert_eq!(
        Some("Sleeve consultation first".to_string()),
        row.get::<Option<String>, _>("message")
    );

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn booking_rejects_filled_honeypot(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let body = BookingBody {
        website: Some("https://spam.example".into()),
        ..BookingBody::valid()
    };

    let res = app
        .booking_create(&body)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn booking_sends_a_notification_email(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let res = app
        .booking_create(&BookingBody::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert!(
        app.wait_for_emails(1).await,
        "Expected a notification email to be dispatched"
    );

    Ok(())
}
