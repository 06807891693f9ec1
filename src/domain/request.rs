//! The user's drafting intent, validated once at the form boundary.

use serde::Serialize;

use crate::domain::{AppError, Tone};

pub const DEFAULT_SENDER_NAME: &str = "Student";
pub const DEFAULT_SENDER_ID: &str = "N/A";
pub const DEFAULT_SENDER_COURSE: &str = "N/A";

const MISSING_REQUIRED_FIELDS: &str =
    "Please fill out 'To', 'My Goal', and 'Key Points to Include'.";

/// Optional identity of the person sending the email.
///
/// Blank values are treated as absent and resolve to defaults when read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SenderIdentity {
    name: Option<String>,
    id: Option<String>,
    course: Option<String>,
}

impl SenderIdentity {
    pub fn new(name: Option<String>, id: Option<String>, course: Option<String>) -> Self {
        Self { name: non_blank(name), id: non_blank(id), course: non_blank(course) }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SENDER_NAME)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_SENDER_ID)
    }

    pub fn course(&self) -> &str {
        self.course.as_deref().unwrap_or(DEFAULT_SENDER_COURSE)
    }
}

/// A single email-drafting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    recipient: String,
    goal: String,
    key_points: String,
    tone: Tone,
    sender: SenderIdentity,
}

impl EmailRequest {
    /// Build a request, rejecting blank recipient, goal, or key points.
    pub fn new(
        recipient: impl Into<String>,
        goal: impl Into<String>,
        key_points: impl Into<String>,
        tone: Tone,
        sender: SenderIdentity,
    ) -> Result<Self, AppError> {
        let recipient = recipient.into();
        let goal = goal.into();
        let key_points = key_points.into();

        if [&recipient, &goal, &key_points].iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
        }

        Ok(Self { recipient, goal, key_points, tone, sender })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn key_points(&self) -> &str {
        &self.key_points
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn sender(&self) -> &SenderIdentity {
        &self.sender
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
