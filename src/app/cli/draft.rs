use std::io::{self, IsTerminal};

use serde::Serialize;

use super::form::{self, FormArgs};
use super::render;
use crate::app::api;
use crate::app::commands::draft::{self, DraftOutcome};
use crate::app::commands::export::{self, CopyOutcome};
use crate::domain::{AppError, compose};

#[derive(Debug, Serialize)]
struct DraftReport<'a> {
    #[serde(flatten)]
    outcome: &'a DraftOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    clipboard: Option<&'a CopyOutcome>,
}

pub fn run_draft(
    form_args: FormArgs,
    copy: bool,
    json: bool,
    prompt_preview: bool,
) -> Result<i32, AppError> {
    let interactive = io::stdin().is_terminal();

    if prompt_preview {
        let Some(request) = form::collect_request(form_args, interactive)? else {
            return Ok(0);
        };
        print!("{}", compose(&request));
        return Ok(0);
    }

    // Credential and config problems stop here, before the form is filled in.
    let mut ctx = api::connect_current()?;

    let Some(request) = form::collect_request(form_args, interactive)? else {
        return Ok(0);
    };

    eprintln!("🧠 Agent is reasoning, planning, and executing the draft...");
    let outcome = draft::execute(&ctx, &request)?;
    let clipboard = copy.then(|| export::execute(&mut ctx, &outcome.reply));

    if json {
        let report = DraftReport { outcome: &outcome, clipboard: clipboard.as_ref() };
        println!("{}", serde_json::to_string_pretty(&report).map_err(io::Error::from)?);
    } else {
        render::print_outcome(&outcome);
        if let Some(clipboard) = &clipboard {
            render::print_copy_outcome(clipboard);
        }
    }

    Ok(render::exit_code(&outcome))
}
