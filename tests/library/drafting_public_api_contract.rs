use std::cell::RefCell;
use std::fs;

use tempfile::TempDir;

use maildraft::{
    AgentReply, AppContext, AppError, ClipboardWriter, CopyOutcome, EmailRequest, ParseNotice,
    SenderIdentity, TextGenerator, Tone, copy_to_clipboard, draft_at, draft_with,
};

const REPLY: &str = "---\n**🧠 Reasoning:**\nr\n---\n**📝 Plan:**\np\n---\n**📬 Subject:**\n\
Meeting request\n---\n**📧 Body:**\nDear TA Jane,\n---\n**💡 Guide:**\nReady to send.\n---\n";

struct ScriptedGenerator {
    reply: &'static str,
    seen: RefCell<Vec<String>>,
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        self.seen.borrow_mut().push(instruction.to_string());
        Ok(self.reply.to_string())
    }
}

#[derive(Default)]
struct RecordingClipboard {
    text: Option<String>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

fn request() -> EmailRequest {
    EmailRequest::new(
        "TA Jane",
        "Schedule a meeting",
        "Friday afternoon",
        Tone::Direct,
        SenderIdentity::new(Some("Alex".into()), None, None),
    )
    .expect("request is complete")
}

#[test]
fn public_api_drafts_and_copies_with_custom_collaborators() {
    let generator = ScriptedGenerator { reply: REPLY, seen: RefCell::new(Vec::new()) };
    let mut ctx = AppContext::new(generator, RecordingClipboard::default());

    let outcome = draft_with(&ctx, &request()).expect("draft succeeds");
    assert_eq!(outcome.notice, None);
    assert_eq!(outcome.reply.subject(), Some("Meeting request"));

    let instructions = ctx.generator().seen.borrow().clone();
    assert_eq!(instructions.len(), 1);
    assert!(instructions[0].contains("* Desired Tone: Direct"));
    assert!(instructions[0].contains("Sender Name: Alex"));

    assert_eq!(copy_to_clipboard(&mut ctx, &outcome.reply), CopyOutcome::Copied);
    assert_eq!(
        ctx.clipboard_mut().text.as_deref(),
        Some("Subject: Meeting request\n\nDear TA Jane,")
    );
}

#[test]
fn public_api_parse_is_usable_without_a_model() {
    let reply = maildraft::parse("---a---b---c");
    assert!(matches!(reply, AgentReply::Degraded { .. }));
    assert_eq!(reply.notice(), Some(ParseNotice::Degraded));
    assert_eq!(reply.subject(), Some("Check Body for Subject"));
}

#[test]
fn public_api_drafts_from_a_configured_root() {
    let mut server = mockito::Server::new();
    let body = serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": REPLY }] } }]
    });
    let mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_header("x-goog-api-key", "root-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let temp = TempDir::new().unwrap();
    let control = temp.path().join(".maildraft");
    fs::create_dir_all(&control).unwrap();
    fs::write(control.join("config.toml"), format!("[gemini]\napi_base = \"{}\"\n", server.url()))
        .unwrap();
    fs::write(control.join("secrets.toml"), "GOOGLE_API_KEY = \"root-key\"\n").unwrap();

    let outcome = draft_at(temp.path(), &request()).expect("draft succeeds");
    assert_eq!(
        outcome.export_text.as_deref(),
        Some("Subject: Meeting request\n\nDear TA Jane,")
    );
    mock.assert();
}

#[test]
fn public_api_reports_invalid_configuration() {
    let temp = TempDir::new().unwrap();
    let control = temp.path().join(".maildraft");
    fs::create_dir_all(&control).unwrap();
    fs::write(control.join("config.toml"), "[gemini]\nmodel = \"\"\n").unwrap();
    fs::write(control.join("secrets.toml"), "GOOGLE_API_KEY = \"root-key\"\n").unwrap();

    let err = draft_at(temp.path(), &request()).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}
