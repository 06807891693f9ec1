/// A labeled section of the model's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Reasoning,
    Plan,
    Subject,
    Body,
    Guide,
    /// Combined subject-and-body section of the older four-part format.
    LegacyDraft,
}

impl SectionKind {
    /// Header line the instruction asks the model to emit.
    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::Reasoning => "**🧠 Reasoning:**",
            SectionKind::Plan => "**📝 Plan:**",
            SectionKind::Subject => "**📬 Subject:**",
            SectionKind::Body => "**📧 Body:**",
            SectionKind::Guide => "**💡 Guide:**",
            SectionKind::LegacyDraft => "**📧 Executed Draft:**",
        }
    }

    /// Lowercase labels recognized at the start of a section.
    ///
    /// Longer labels come first so that "Subject Line:" is not cut at "Subject".
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Reasoning => &["reasoning"],
            SectionKind::Plan => &["plan"],
            SectionKind::Subject => &["subject line", "subject"],
            SectionKind::Body => &["email body", "body"],
            SectionKind::Guide => {
                &["analysis & guide", "analysis and guide", "guide & analysis", "guide"]
            }
            SectionKind::LegacyDraft => &["executed draft", "execute draft", "draft", "body"],
        }
    }
}
