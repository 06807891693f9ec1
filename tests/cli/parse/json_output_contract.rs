use crate::harness::TestContext;
use crate::harness::gemini::DEGRADED_REPLY;
use serde_json::Value;

#[test]
fn parse_json_reports_degraded_reply() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["parse", "--json"])
        .write_stdin(DEGRADED_REPLY)
        .output()
        .expect("failed to run maildraft");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["reply"]["kind"], "degraded");
    assert_eq!(value["reply"]["reasoning"], "Short on context.");
    assert_eq!(value["notice"], "degraded");
    assert_eq!(
        value["export_text"],
        "Subject: Check Body for Subject\n\nHello Professor, could I meet you on Friday?"
    );
}

#[test]
fn parse_json_keeps_raw_text_for_unparsed_reply() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["parse", "--json"])
        .write_stdin("plain prose")
        .output()
        .expect("failed to run maildraft");
    assert_eq!(output.status.code(), Some(2));

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["reply"]["kind"], "unparsed");
    assert_eq!(value["reply"]["raw"], "plain prose");
}
