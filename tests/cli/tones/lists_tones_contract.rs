use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn tones_lists_every_tone_and_marks_the_default() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("tones")
        .assert()
        .success()
        .stdout(predicate::str::contains("formal"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("polite"))
        .stdout(predicate::str::contains("direct"))
        .stdout(predicate::str::contains("concise"))
        .stdout(predicate::str::contains("empathetic"));
}
