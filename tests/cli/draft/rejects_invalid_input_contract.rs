use crate::harness::TestContext;
use crate::harness::gemini::mock_unreachable;
use predicates::prelude::*;

#[test]
fn missing_goal_is_rejected_without_a_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = mock_unreachable(&mut server);
    ctx.use_api_base(&server.url());

    ctx.cli_with_key()
        .args(["draft", "--to", "Professor Smith", "--points", "I was sick"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please fill out 'To', 'My Goal', and 'Key Points to Include'.",
        ));

    mock.assert();
}

#[test]
fn whitespace_only_points_are_rejected() {
    let ctx = TestContext::new();

    ctx.cli_with_key()
        .args(["draft", "--prompt-preview", "--to", "A", "--goal", "B", "--points", "  \n "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please fill out"));
}

#[test]
fn unknown_tone_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["draft", "--prompt-preview", "--to", "A", "--goal", "B", "--points", "C"])
        .args(["--tone", "sarcastic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid tone 'sarcastic'"));
}
