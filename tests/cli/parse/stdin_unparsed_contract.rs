use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn parse_reads_stdin_and_keeps_unparsed_text_verbatim() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("parse")
        .write_stdin("one---two")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("one---two"))
        .stderr(predicate::str::contains("Displaying raw output."));
}
