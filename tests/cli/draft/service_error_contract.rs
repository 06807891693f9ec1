use crate::harness::TestContext;
use crate::harness::gemini::GENERATE_PATH;
use predicates::prelude::*;

#[test]
fn server_error_is_reported_without_a_reply() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body(r#"{"error":{"message":"backend exploded"}}"#)
        .expect(1)
        .create();
    ctx.use_api_base(&server.url());

    ctx.cli_with_key()
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error communicating with the AI"))
        .stdout(predicate::str::contains("Subject").not());

    mock.assert();
}

#[test]
fn rejected_key_is_reported() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", GENERATE_PATH).with_status(403).create();
    ctx.use_api_base(&server.url());

    ctx.cli_with_key()
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error communicating with the AI"));
}
