//! Builds the instruction text sent to the language model.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{EmailRequest, SectionKind};

const EMAIL_DRAFT_TEMPLATE: &str = include_str!("../assets/prompts/email_draft.j2");

/// Compose the drafting instruction for `request`.
///
/// Input values are restated verbatim; blank sender fields are replaced by
/// their defaults.
pub fn compose(request: &EmailRequest) -> String {
    render_instruction(request)
        .expect("embedded instruction template renders with a complete context")
}

fn render_instruction(request: &EmailRequest) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let sender = request.sender();
    env.render_str(
        EMAIL_DRAFT_TEMPLATE,
        context! {
            recipient => request.recipient(),
            goal => request.goal(),
            key_points => request.key_points(),
            tone => request.tone().as_str(),
            sender_name => sender.name(),
            sender_id => sender.id(),
            sender_course => sender.course(),
            reasoning_header => SectionKind::Reasoning.header(),
            plan_header => SectionKind::Plan.header(),
            subject_header => SectionKind::Subject.header(),
            body_header => SectionKind::Body.header(),
            guide_header => SectionKind::Guide.header(),
        },
    )
}
