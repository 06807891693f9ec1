use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn session_refuses_non_interactive_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("session")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}
