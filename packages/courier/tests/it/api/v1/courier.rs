//! Courier account endpoint tests.

use clients::courier::v1::{CourierId, message};
use color_eyre::Result;
use pretty_assertions::assert_eq as pretty_assert_eq;
use reqwest::StatusCode;
use serde_json::{Value, json};
use simple_test_case::test_case;

use crate::helpers::{TestFixture, courier};

#[test_log::test(tokio::test)]
async fn create_returns_ok() -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let response = fixture.client.register(&courier("ivan")).await?;
    pretty_assert_eq!(response.status, StatusCode::CREATED);
    pretty_assert_eq!(response.json()?.ok, Some(true));
    pretty_assert_eq!(fixture.accounts.len(), 1);

    Ok(())
}

#[test_case(json!({ "password": "hunter2", "firstName": "Ivan" }); "missing login")]
#[test_case(json!({ "login": "", "password": "hunter2", "firstName": "Ivan" }); "empty login")]
#[test_case(json!({ "login": "ivan", "firstName": "Ivan" }); "missing password")]
#[test_case(json!({ "login": "ivan", "password": "", "firstName": "Ivan" }); "empty password")]
#[test_log::test(tokio::test)]
async fn create_requires_login_and_password(body: Value) -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let url = fixture.base_url.join("api/v1/courier")?;

    let response = reqwest::Client::new().post(url).json(&body).send().await?;
    pretty_assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.json::<Value>().await?;
    pretty_assert_eq!(body["message"], message::CREATE_MISSING_DATA);
    assert!(fixture.accounts.is_empty(), "no account is created");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn create_without_first_name() -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let url = fixture.base_url.join("api/v1/courier")?;

    let response = reqwest::Client::new()
        .post(url)
        .json(&json!({ "login": "ivan", "password": "hunter2" }))
        .send()
        .await?;
    pretty_assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn create_rejects_duplicate_login() -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let ivan = courier("ivan");

    fixture.client.register(&ivan).await?;
    let response = fixture.client.register(&ivan).await?;

    pretty_assert_eq!(response.status, StatusCode::CONFLICT);
    pretty_assert_eq!(response.json()?.message.as_deref(), Some(message::LOGIN_TAKEN));
    pretty_assert_eq!(fixture.accounts.len(), 1);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn login_returns_id() -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let ivan = courier("ivan");

    fixture.client.register(&ivan).await?;
    let response = fixture.client.authenticate(&ivan).await?;

    pretty_assert_eq!(response.status, StatusCode::OK);
    pretty_assert_eq!(response.json()?.id, Some(CourierId::from("1")));

    Ok(())
}

#[test_case(json!({ "password": "hunter2" }); "missing login")]
#[test_case(json!({ "login": "", "password": "hunter2" }); "empty login")]
#[test_case(json!({ "login": "ivan" }); "missing password")]
#[test_case(json!({ "login": "ivan", "password": "" }); "empty password")]
#[test_log::test(tokio::test)]
async fn login_requires_login_and_password(body: Value) -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let url = fixture.base_url.join("api/v1/courier/login")?;

    let response = reqwest::Client::new().post(url).json(&body).send().await?;
    pretty_assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.json::<Value>().await?;
    pretty_assert_eq!(body["message"], message::LOGIN_MISSING_DATA);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn login_unknown_account() -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let response = fixture.client.authenticate(&courier("ivan")).await?;
    pretty_assert_eq!(response.status, StatusCode::NOT_FOUND);
    pretty_assert_eq!(
        response.json()?.message.as_deref(),
        Some(message::ACCOUNT_NOT_FOUND)
    );

    Ok(())
}

#[test_log::test(tokio::test)]
async fn login_wrong_password() -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let ivan = courier("ivan");
    fixture.client.register(&ivan).await?;

    let mut imposter = ivan.clone();
    imposter.password = String::from("not-the-password");

    let response = fixture.client.authenticate(&imposter).await?;
    pretty_assert_eq!(response.status, StatusCode::NOT_FOUND);
    pretty_assert_eq!(
        response.json()?.message.as_deref(),
        Some(message::ACCOUNT_NOT_FOUND)
    );

    Ok(())
}

#[test_log::test(tokio::test)]
async fn remove_by_id() -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    let ivan = courier("ivan");
    fixture.client.register(&ivan).await?;
    let id = fixture
        .client
        .authenticate(&ivan)
        .await?
        .json()?
        .id
        .expect("login returns an id");

    let response = fixture.client.remove(&id).await?;
    pretty_assert_eq!(response.status, StatusCode::OK);
    pretty_assert_eq!(response.json()?.ok, Some(true));
    assert!(fixture.accounts.is_empty());

    let response = fixture.client.authenticate(&ivan).await?;
    pretty_assert_eq!(response.status, StatusCode::NOT_FOUND);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn remove_unknown_id() -> Result<()> {
    let fixture = TestFixture::spawn().await?;

    let response = fixture.client.remove(&CourierId::from("42")).await?;
    pretty_assert_eq!(response.status, StatusCode::NOT_FOUND);
    pretty_assert_eq!(
        response.json()?.message.as_deref(),
        Some(message::COURIER_ID_NOT_FOUND)
    );

    Ok(())
}

#[test_case("ab/cd?x=1", "ab%2Fcd%3Fx=1"; "slash and query")]
#[test_case("1/..", "1%2F.."; "traversal")]
#[test_case("1#2", "1%232"; "fragment")]
#[test_log::test(tokio::test)]
async fn remove_escapes_string_id(id: &str, escaped: &str) -> Result<()> {
    let fixture = TestFixture::spawn().await?;
    fixture.client.register(&courier("ivan")).await?;

    let response = fixture.client.remove(&CourierId::from(id)).await?;
    let expected = fixture.base_url.join(&format!("api/v1/courier/{escaped}"))?;
    pretty_assert_eq!(response.url, expected.to_string());
    pretty_assert_eq!(response.status, StatusCode::NOT_FOUND);
    pretty_assert_eq!(
        response.json()?.message.as_deref(),
        Some(message::COURIER_ID_NOT_FOUND)
    );
    pretty_assert_eq!(fixture.accounts.len(), 1, "no other account is touched");

    Ok(())
}
