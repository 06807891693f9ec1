use crate::harness::TestContext;
use crate::harness::gemini::mock_unreachable;
use predicates::prelude::*;

#[test]
fn draft_without_api_key_fails_before_calling_the_model() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = mock_unreachable(&mut server);
    ctx.use_api_base(&server.url());

    ctx.cli()
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_API_KEY not found"));

    mock.assert();
}

#[test]
fn blank_api_key_counts_as_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("GOOGLE_API_KEY", "   ")
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_API_KEY not found"));
}
