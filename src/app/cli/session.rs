use std::io::{self, ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError};

use super::form::{self, FormArgs};
use super::render;
use crate::app::api::{self, LiveContext};
use crate::app::commands::{draft, export};
use crate::domain::{AppError, EmailRequest};

/// Interactive loop: one submission per iteration until the user stops.
///
/// Configuration errors abort before the first form. Per-submission errors
/// are printed and the loop continues.
pub fn run_session() -> Result<i32, AppError> {
    if !io::stdin().is_terminal() {
        return Err(AppError::Validation(
            "session needs an interactive terminal; use `maildraft draft` with flags instead"
                .to_string(),
        ));
    }

    let mut ctx = api::connect_current()?;

    println!("🎓 AI University Email Agent");
    println!("Tell the agent your goal, key points, desired tone, and your details.\n");

    loop {
        match form::collect_request(FormArgs::default(), true) {
            Ok(Some(request)) => submit(&mut ctx, &request)?,
            Ok(None) => break,
            Err(AppError::Io(err)) => return Err(AppError::Io(err)),
            Err(err) => eprintln!("Error: {}", err),
        }

        if !confirm("Draft another email?", true)? {
            break;
        }
    }

    Ok(0)
}

fn submit(ctx: &mut LiveContext, request: &EmailRequest) -> Result<(), AppError> {
    println!("🧠 Agent is reasoning, planning, and executing the draft...");

    let outcome = match draft::execute(ctx, request) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(());
        }
    };

    render::print_outcome(&outcome);

    if outcome.export_text.is_some() && confirm("📋 Copy Full Email (Subject + Body)?", false)? {
        render::print_copy_outcome(&export::execute(ctx, &outcome.reply));
    }
    Ok(())
}

fn confirm(prompt: &str, default: bool) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(default).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Io(io::Error::other(err))),
    }
}
