//! Tests for the sign-up handler's validation order and failure mapping.

use std::sync::Arc;

use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    AddAccountError, EmailValidatorError, MockAddAccount, MockEmailValidator,
};
use crate::domain::{Error, ErrorCode, SERVER_FAILURE_MESSAGE, SignUpResponseBody};

const ACCOUNT_ID: &str = "5f0c4d1e-2b8a-4c3e-9d7f-1a2b3c4d5e6f";

#[fixture]
fn valid_body() -> SignUpBody {
    SignUpBody {
        name: Some("valid_name".to_owned()),
        email: Some("valid_email@mail.com".to_owned()),
        password: Some("valid_password".to_owned()),
        password_confirmation: Some("valid_password".to_owned()),
    }
}

fn accepting_validator() -> MockEmailValidator {
    let mut validator = MockEmailValidator::new();
    validator.expect_is_valid().returning(|_| Ok(true));
    validator
}

fn untouched_validator() -> MockEmailValidator {
    let mut validator = MockEmailValidator::new();
    validator.expect_is_valid().never();
    validator
}

fn untouched_add_account() -> MockAddAccount {
    let mut add_account = MockAddAccount::new();
    add_account.expect_add().never();
    add_account
}

fn stored_account() -> Account {
    let id = Uuid::parse_str(ACCOUNT_ID).expect("fixture account id");
    Account::new(id, "valid_name", "valid_email@mail.com", "valid_password")
}

fn make_handler<V, A>(validator: V, add_account: A) -> SignUpHandler
where
    V: EmailValidator + 'static,
    A: AddAccount + 'static,
{
    SignUpHandler::new(Arc::new(validator), Arc::new(add_account))
}

async fn run(handler: &SignUpHandler, body: SignUpBody) -> SignUpResponse {
    handler.handle(SignUpRequest::new(body)).await
}

fn expect_error(response: &SignUpResponse) -> &Error {
    match response.body() {
        SignUpResponseBody::Error(error) => error,
        SignUpResponseBody::Account(account) => panic!("expected error body, got {account:?}"),
    }
}

fn assert_client_error(response: &SignUpResponse, field: &str, code: &str) {
    assert_eq!(response.status_code(), 400);
    let error = expect_error(response);
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&json!({ "field": field, "code": code }))
    );
}

fn assert_server_failure(response: &SignUpResponse) {
    assert_eq!(response.status_code(), 500);
    let error = expect_error(response);
    assert_eq!(error, &Error::internal(SERVER_FAILURE_MESSAGE));
    assert!(error.details().is_none(), "server failures carry no details");
}

fn clear(body: &mut SignUpBody, field: SignUpField, replacement: Option<String>) {
    let slot = match field {
        SignUpField::Name => &mut body.name,
        SignUpField::Email => &mut body.email,
        SignUpField::Password => &mut body.password,
        SignUpField::PasswordConfirmation => &mut body.password_confirmation,
    };
    *slot = replacement;
}

#[rstest]
#[case::name(SignUpField::Name, "name")]
#[case::email(SignUpField::Email, "email")]
#[case::password(SignUpField::Password, "password")]
#[case::confirmation(SignUpField::PasswordConfirmation, "passwordConfirmation")]
#[tokio::test]
async fn absent_field_is_reported_missing(
    mut valid_body: SignUpBody,
    #[case] field: SignUpField,
    #[case] wire_name: &str,
) {
    clear(&mut valid_body, field, None);
    let handler = make_handler(untouched_validator(), untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_client_error(&response, wire_name, "missing_param");
    assert_eq!(expect_error(&response).message(), format!("Missing param: {wire_name}"));
}

#[rstest]
#[case::name(SignUpField::Name, "name")]
#[case::email(SignUpField::Email, "email")]
#[case::password(SignUpField::Password, "password")]
#[case::confirmation(SignUpField::PasswordConfirmation, "passwordConfirmation")]
#[tokio::test]
async fn empty_field_is_reported_missing(
    mut valid_body: SignUpBody,
    #[case] field: SignUpField,
    #[case] wire_name: &str,
) {
    clear(&mut valid_body, field, Some(String::new()));
    let handler = make_handler(untouched_validator(), untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_client_error(&response, wire_name, "missing_param");
}

#[rstest]
#[tokio::test]
async fn first_missing_field_wins() {
    let body = SignUpBody {
        name: None,
        email: None,
        password: Some("a".to_owned()),
        password_confirmation: Some("b".to_owned()),
    };
    let handler = make_handler(untouched_validator(), untouched_add_account());

    let response = run(&handler, body).await;

    assert_client_error(&response, "name", "missing_param");
}

#[rstest]
#[tokio::test]
async fn mismatched_confirmation_is_invalid(mut valid_body: SignUpBody) {
    valid_body.password = Some("any_password".to_owned());
    valid_body.password_confirmation = Some("invalidPass".to_owned());
    let handler = make_handler(untouched_validator(), untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_client_error(&response, "passwordConfirmation", "invalid_param");
}

#[rstest]
#[tokio::test]
async fn confirmation_mismatch_beats_invalid_email(mut valid_body: SignUpBody) {
    valid_body.email = Some("invalid_email".to_owned());
    valid_body.password_confirmation = Some("other".to_owned());
    let handler = make_handler(untouched_validator(), untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_client_error(&response, "passwordConfirmation", "invalid_param");
}

#[rstest]
#[tokio::test]
async fn rejected_email_is_invalid(valid_body: SignUpBody) {
    let mut validator = MockEmailValidator::new();
    validator
        .expect_is_valid()
        .times(1)
        .returning(|_| Ok(false));
    let handler = make_handler(validator, untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_client_error(&response, "email", "invalid_param");
    assert_eq!(expect_error(&response).message(), "Invalid param: email");
}

#[rstest]
#[tokio::test]
async fn validator_receives_submitted_email_once(valid_body: SignUpBody) {
    let mut validator = MockEmailValidator::new();
    validator
        .expect_is_valid()
        .withf(|email: &str| email == "valid_email@mail.com")
        .times(1)
        .returning(|_| Ok(true));
    let mut add_account = MockAddAccount::new();
    add_account
        .expect_add()
        .times(1)
        .returning(|_| Ok(stored_account()));
    let handler = make_handler(validator, add_account);

    let response = run(&handler, valid_body).await;

    assert_eq!(response.status_code(), 200);
}

#[rstest]
#[case::unavailable(EmailValidatorError::unavailable("resolver down"))]
#[case::internal(EmailValidatorError::internal("boom"))]
#[tokio::test]
async fn validator_error_becomes_server_failure(
    valid_body: SignUpBody,
    #[case] failure: EmailValidatorError,
) {
    let mut validator = MockEmailValidator::new();
    validator
        .expect_is_valid()
        .times(1)
        .return_once(move |_| Err(failure));
    let handler = make_handler(validator, untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_server_failure(&response);
}

#[rstest]
#[tokio::test]
async fn add_account_receives_registration_data_without_confirmation(valid_body: SignUpBody) {
    let expected = AddAccountModel::new("valid_name", "valid_email@mail.com", "valid_password");
    let mut add_account = MockAddAccount::new();
    add_account
        .expect_add()
        .withf(move |model: &AddAccountModel| *model == expected)
        .times(1)
        .returning(|_| Ok(stored_account()));
    let handler = make_handler(accepting_validator(), add_account);

    let response = run(&handler, valid_body).await;

    assert_eq!(response.status_code(), 200);
}

#[rstest]
#[case::connection(AddAccountError::connection("refused"))]
#[case::duplicate(AddAccountError::duplicate("valid_email@mail.com"))]
#[tokio::test]
async fn add_account_error_becomes_server_failure(
    valid_body: SignUpBody,
    #[case] failure: AddAccountError,
) {
    let mut add_account = MockAddAccount::new();
    add_account
        .expect_add()
        .times(1)
        .return_once(move |_| Err(failure));
    let handler = make_handler(accepting_validator(), add_account);

    let response = run(&handler, valid_body).await;

    assert_server_failure(&response);
}

#[rstest]
#[tokio::test]
async fn success_returns_account_verbatim(valid_body: SignUpBody) {
    let mut add_account = MockAddAccount::new();
    add_account
        .expect_add()
        .times(1)
        .returning(|_| Ok(stored_account()));
    let handler = make_handler(accepting_validator(), add_account);

    let response = run(&handler, valid_body).await;

    assert_eq!(response, SignUpResponse::ok(stored_account()));
}

/// Collaborator double that panics instead of answering.
struct PanickingCollaborator;

#[async_trait]
impl EmailValidator for PanickingCollaborator {
    async fn is_valid(&self, _email: &str) -> Result<bool, EmailValidatorError> {
        panic!("validator exploded");
    }
}

#[async_trait]
impl AddAccount for PanickingCollaborator {
    async fn add(&self, _account: AddAccountModel) -> Result<Account, AddAccountError> {
        panic!("store exploded");
    }
}

#[rstest]
#[tokio::test]
async fn panicking_validator_becomes_server_failure(valid_body: SignUpBody) {
    let handler = make_handler(PanickingCollaborator, untouched_add_account());

    let response = run(&handler, valid_body).await;

    assert_server_failure(&response);
}

#[rstest]
#[tokio::test]
async fn panicking_add_account_becomes_server_failure(valid_body: SignUpBody) {
    let handler = make_handler(accepting_validator(), PanickingCollaborator);

    let response = run(&handler, valid_body).await;

    assert_server_failure(&response);
}

#[rstest]
#[tokio::test]
async fn handler_serves_concurrent_requests_independently(valid_body: SignUpBody) {
    let mut validator = MockEmailValidator::new();
    validator
        .expect_is_valid()
        .times(2)
        .returning(|email| Ok(email == "valid_email@mail.com"));
    let mut add_account = MockAddAccount::new();
    add_account
        .expect_add()
        .times(1)
        .returning(|_| Ok(stored_account()));
    let handler = make_handler(validator, add_account);

    let mut rejected = valid_body.clone();
    rejected.email = Some("nope".to_owned());
    let (accepted, refused) = tokio::join!(run(&handler, valid_body), run(&handler, rejected));

    assert_eq!(accepted.status_code(), 200);
    assert_client_error(&refused, "email", "invalid_param");
}

#[rstest]
fn panic_message_reads_string_payloads() {
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
    let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
    let other: Box<dyn Any + Send> = Box::new(7_u8);
    assert_eq!(panic_message(owned.as_ref()), "owned");
    assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
    assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
}
