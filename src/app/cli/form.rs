//! Email request form: command-line flags with interactive fallback.

use std::io::{self, ErrorKind};

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, EmailRequest, SenderIdentity, Tone};

#[derive(Debug, Default, Args)]
pub struct FormArgs {
    /// Recipient (e.g., Professor Smith, TA Jane)
    #[arg(long)]
    pub to: Option<String>,
    /// Goal of the email (e.g., Ask for an extension)
    #[arg(long)]
    pub goal: Option<String>,
    /// Key points to include
    #[arg(long)]
    pub points: Option<String>,
    /// Desired tone: formal, polite, direct, concise, or empathetic
    #[arg(long)]
    pub tone: Option<String>,
    /// Your full name
    #[arg(long)]
    pub name: Option<String>,
    /// Your student ID
    #[arg(long)]
    pub id: Option<String>,
    /// Your course code (e.g., CS101)
    #[arg(long)]
    pub course: Option<String>,
}

impl FormArgs {
    fn has_required_fields(&self) -> bool {
        self.to.is_some() && self.goal.is_some() && self.points.is_some()
    }
}

/// Build a request from flags, prompting for anything missing when
/// `interactive` and a required field was not given.
///
/// Returns `Ok(None)` when the user interrupts a prompt.
pub fn collect_request(args: FormArgs, interactive: bool) -> Result<Option<EmailRequest>, AppError> {
    let prompt = interactive && !args.has_required_fields();

    let Some(to) = field(args.to, prompt, "To (e.g., Professor Smith, TA Jane)", false)? else {
        return Ok(None);
    };
    let Some(goal) = field(args.goal, prompt, "My Goal (e.g., Ask for an extension)", false)?
    else {
        return Ok(None);
    };
    let tone = match args.tone {
        Some(name) => name.parse::<Tone>()?,
        None if prompt => match prompt_tone()? {
            Some(tone) => tone,
            None => return Ok(None),
        },
        None => Tone::default(),
    };
    let Some(points) = field(args.points, prompt, "Key Points to Include", false)? else {
        return Ok(None);
    };
    let Some(name) = field(args.name, prompt, "Your Full Name (optional)", true)? else {
        return Ok(None);
    };
    let Some(id) = field(args.id, prompt, "Your Student ID (optional)", true)? else {
        return Ok(None);
    };
    let Some(course) = field(args.course, prompt, "Your Course Code (optional)", true)? else {
        return Ok(None);
    };

    let sender = SenderIdentity::new(Some(name), Some(id), Some(course));
    EmailRequest::new(to, goal, points, tone, sender).map(Some)
}

fn field(
    value: Option<String>,
    prompt: bool,
    label: &str,
    optional: bool,
) -> Result<Option<String>, AppError> {
    match value {
        Some(value) => Ok(Some(value)),
        None if prompt => prompt_text(label, optional),
        None => Ok(Some(String::new())),
    }
}

fn prompt_text(label: &str, optional: bool) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(label).allow_empty(optional).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Io(io::Error::other(err))),
    }
}

fn prompt_tone() -> Result<Option<Tone>, AppError> {
    let items: Vec<String> =
        Tone::ALL.iter().map(|tone| format!("{}: {}", tone, tone.description())).collect();

    match Select::new().with_prompt("Desired Tone").items(&items).default(0).interact_opt() {
        Ok(selection) => Ok(selection.map(|index| Tone::ALL[index])),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Io(io::Error::other(err))),
    }
}
