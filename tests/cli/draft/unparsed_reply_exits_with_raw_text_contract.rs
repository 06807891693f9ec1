use crate::harness::TestContext;
use crate::harness::gemini::mock_reply;
use predicates::prelude::*;

#[test]
fn unparsed_reply_prints_raw_text_and_exits_with_two() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = mock_reply(&mut server, "Sorry, I cannot help with that.");
    ctx.use_api_base(&server.url());

    ctx.cli_with_key()
        .args(["draft", "--to", "A", "--goal", "B", "--points", "C"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse agent response"))
        .stdout(predicate::str::contains("Sorry, I cannot help with that."));
}
