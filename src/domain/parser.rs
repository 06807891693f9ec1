//! Splits the model's free-text reply into labeled sections.

use crate::domain::{AgentReply, SectionKind};

/// Marker separating reply sections.
pub const SECTION_DELIMITER: &str = "---";

/// Parse a raw reply.
///
/// The five-section layout is tried first, then the older three-section
/// layout, each as an independent pass over `raw`. Anything else is returned
/// verbatim as [`AgentReply::Unparsed`].
pub fn parse(raw: &str) -> AgentReply {
    parse_full(raw)
        .or_else(|| parse_legacy(raw))
        .unwrap_or_else(|| AgentReply::Unparsed { raw: raw.to_string() })
}

fn parse_full(raw: &str) -> Option<AgentReply> {
    let fragments: Vec<&str> = raw.split(SECTION_DELIMITER).collect();
    if fragments.len() < 6 {
        return None;
    }

    // fragments[0] is whatever preceded the first delimiter
    Some(AgentReply::Full {
        reasoning: strip_header(fragments[1], SectionKind::Reasoning),
        plan: strip_header(fragments[2], SectionKind::Plan),
        subject: strip_header(fragments[3], SectionKind::Subject),
        body: strip_header(fragments[4], SectionKind::Body),
        guide: strip_header(fragments[5], SectionKind::Guide),
    })
}

fn parse_legacy(raw: &str) -> Option<AgentReply> {
    let fragments: Vec<&str> = raw.split(SECTION_DELIMITER).collect();
    if fragments.len() < 4 {
        return None;
    }

    Some(AgentReply::Degraded {
        reasoning: strip_header(fragments[1], SectionKind::Reasoning),
        plan: strip_header(fragments[2], SectionKind::Plan),
        draft_body: strip_header(fragments[3], SectionKind::LegacyDraft),
    })
}

/// Remove a recognized header label from the start of `fragment` and trim.
///
/// Leading markdown emphasis, emoji, punctuation and a numbered-list marker
/// are skipped before matching. A label counts as a header when it is
/// followed by a colon, a line break, or closing emphasis. A bare label at the
/// end of the fragment is only a header when it was decorated.
pub fn strip_header(fragment: &str, kind: SectionKind) -> String {
    let trimmed = fragment.trim();
    let unadorned = skip_decoration(trimmed);
    let decorated = unadorned.len() < trimmed.len();

    kind.labels()
        .iter()
        .find_map(|label| strip_label(unadorned, label, decorated))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn skip_decoration(text: &str) -> &str {
    let text = text.trim_start_matches(|c: char| !c.is_alphanumeric());
    let after_digits = text.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == text.len() {
        return text;
    }
    match after_digits.strip_prefix(['.', ')']) {
        Some(rest) => rest.trim_start_matches(|c: char| !c.is_alphanumeric()),
        None => text,
    }
}

fn strip_label<'a>(text: &'a str, label: &str, decorated: bool) -> Option<&'a str> {
    let head = text.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }

    let after_label = &text[label.len()..];
    let closing = after_label.starts_with(['*', '_']);
    let rest = after_label.trim_start_matches(is_emphasis_or_space);
    if let Some(after_colon) = rest.strip_prefix(':') {
        return Some(after_colon.trim_start_matches(is_emphasis_or_space));
    }
    if rest.starts_with(['\n', '\r']) {
        return Some(rest);
    }
    if rest.is_empty() {
        return (decorated || closing).then_some(rest);
    }
    closing.then_some(rest)
}

fn is_emphasis_or_space(c: char) -> bool {
    matches!(c, '*' | '_' | ' ' | '\t')
}
