use futures::executor::block_on;

use super::*;
use crate::net::api::{Method, TransportError};
use crate::net::fake::FakeTransport;

fn creds() -> Credentials {
    Credentials::parse("alice", "pw").unwrap()
}

// =============================================================
// LoginResult
// =============================================================

#[test]
fn from_reply_json_with_token_is_authenticated() {
    let reply = ApiReply::json(200, r#"{"message":"ok","token":"abc123"}"#);
    assert_eq!(LoginResult::from_reply(&reply), LoginResult::Authenticated { token: "abc123".to_owned() });
}

#[test]
fn from_reply_plain_text_success_is_legacy() {
    let reply = ApiReply::text(200, "Login berhasil!");
    assert_eq!(LoginResult::from_reply(&reply), LoginResult::Legacy);
}

#[test]
fn from_reply_json_without_token_is_legacy() {
    let reply = ApiReply::json(200, r#"{"message":"ok"}"#);
    assert_eq!(LoginResult::from_reply(&reply), LoginResult::Legacy);
}

#[test]
fn from_reply_json_with_empty_token_is_legacy() {
    let reply = ApiReply::json(200, r#"{"message":"ok","token":""}"#);
    assert_eq!(LoginResult::from_reply(&reply), LoginResult::Legacy);
}

#[test]
fn from_reply_non_2xx_is_rejected_with_message() {
    let reply = ApiReply::json(401, r#"{"message":"bad credentials"}"#);
    assert_eq!(LoginResult::from_reply(&reply), LoginResult::Rejected { message: "bad credentials".to_owned() });
}

// =============================================================
// submit_login
// =============================================================

#[test]
fn login_success_stores_token_and_navigates_to_dashboard() {
    let transport = FakeTransport::new().reply(ApiReply::json(200, r#"{"message":"ok","token":"abc123"}"#));
    let session = Session::in_memory();

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get().as_deref(), Some("abc123"));
    assert_eq!(outcome.navigate_to, Some(Route::Dashboard));
    assert_eq!(outcome.message, messages::LOGIN_SUCCESS);
}

#[test]
fn login_sends_single_post_with_credentials() {
    let transport = FakeTransport::new().reply(ApiReply::json(200, r#"{"token":"t"}"#));
    let session = Session::in_memory();

    block_on(submit_login(&transport, &session, &creds()));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/login");
    assert_eq!(sent[0].body, Some(creds()));
}

#[test]
fn login_overwrites_existing_token() {
    let transport = FakeTransport::new().reply(ApiReply::json(200, r#"{"message":"ok","token":"new"}"#));
    let session = Session::in_memory();
    session.set("old");

    block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get().as_deref(), Some("new"));
}

#[test]
fn login_plain_text_success_drops_previous_token() {
    let transport = FakeTransport::new().reply(ApiReply::text(200, "Login berhasil!"));
    let session = Session::in_memory();
    session.set("token-of-previous-user");

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get(), None);
    assert_eq!(outcome.navigate_to, Some(Route::Dashboard));
    assert_eq!(outcome.message, messages::LOGIN_SUCCESS);
}

#[test]
fn login_json_without_token_drops_previous_token() {
    let transport = FakeTransport::new().reply(ApiReply::json(200, r#"{"message":"ok"}"#));
    let session = Session::in_memory();
    session.set("old");

    block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get(), None);
}

#[test]
fn login_rejected_shows_server_message_and_stays() {
    let transport = FakeTransport::new().reply(ApiReply::json(401, r#"{"message":"bad credentials"}"#));
    let session = Session::in_memory();

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get(), None);
    assert_eq!(outcome.message, "Gagal: bad credentials");
    assert_eq!(outcome.navigate_to, None);
}

#[test]
fn login_rejected_plain_text_is_surfaced_verbatim() {
    let transport = FakeTransport::new().reply(ApiReply::text(401, "Username atau password salah."));
    let session = Session::in_memory();

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(outcome.message, "Gagal: Username atau password salah.");
    assert_eq!(outcome.navigate_to, None);
}

#[test]
fn login_legacy_success_navigates_without_token() {
    let transport = FakeTransport::new().reply(ApiReply::text(200, "Login berhasil!"));
    let session = Session::in_memory();

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(session.get(), None);
    assert_eq!(outcome.navigate_to, Some(Route::Dashboard));
}

#[test]
fn login_transport_failure_shows_generic_message() {
    let transport = FakeTransport::new().fail(TransportError::Network("dns".to_owned()));
    let session = Session::in_memory();

    let outcome = block_on(submit_login(&transport, &session, &creds()));

    assert_eq!(outcome.message, messages::CONNECTION_FAILED);
    assert_eq!(outcome.navigate_to, None);
    assert_eq!(session.get(), None);
    assert_eq!(transport.sent().len(), 1, "no retry after transport failure");
}

// =============================================================
// submit_register
// =============================================================

#[test]
fn register_success_shows_server_text_and_navigates_to_login() {
    let transport = FakeTransport::new().reply(ApiReply::text(201, "Registrasi berhasil!"));

    let outcome = block_on(submit_register(&transport, &creds()));

    assert_eq!(outcome.message, "Registrasi berhasil!");
    assert_eq!(outcome.navigate_to, Some(Route::Login));
}

#[test]
fn register_success_reads_json_message() {
    let transport = FakeTransport::new().reply(ApiReply::json(201, r#"{"message":"created"}"#));

    let outcome = block_on(submit_register(&transport, &creds()));

    assert_eq!(outcome.message, "created");
}

#[test]
fn register_success_with_empty_body_uses_default_message() {
    let transport = FakeTransport::new().reply(ApiReply::text(201, ""));

    let outcome = block_on(submit_register(&transport, &creds()));

    assert_eq!(outcome.message, messages::REGISTER_SUCCESS);
}

#[test]
fn register_conflict_stays_with_failure_message() {
    let transport = FakeTransport::new().reply(ApiReply::text(409, "Username sudah ada."));

    let outcome = block_on(submit_register(&transport, &creds()));

    assert_eq!(outcome.message, "Gagal: Username sudah ada.");
    assert_eq!(outcome.navigate_to, None);
}

#[test]
fn register_transport_failure_stays_with_generic_message() {
    let transport = FakeTransport::new().fail(TransportError::Network("offline".to_owned()));

    let outcome = block_on(submit_register(&transport, &creds()));

    assert_eq!(outcome.message, messages::CONNECTION_FAILED);
    assert_eq!(outcome.navigate_to, None);
}

#[test]
fn register_posts_to_register_endpoint() {
    let transport = FakeTransport::new().reply(ApiReply::text(201, "ok"));

    block_on(submit_register(&transport, &creds()));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].path, "/register");
    assert_eq!(sent[0].bearer, None);
}
