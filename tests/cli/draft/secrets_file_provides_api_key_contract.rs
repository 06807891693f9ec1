use crate::harness::TestContext;
use crate::harness::gemini::{FULL_REPLY, GENERATE_PATH, response_body};
use predicates::prelude::*;

#[test]
fn secrets_file_key_is_sent_to_the_model() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "file-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response_body(FULL_REPLY))
        .create();
    ctx.use_api_base(&server.url());
    ctx.write_secrets("file-key");

    ctx.cli()
        .env("GOOGLE_API_KEY", "env-key")
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extension request for Assignment 3"));

    mock.assert();
}
