//! CLI Adapter.

mod draft;
mod form;
mod parse;
mod render;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, Tone};

#[derive(Parser)]
#[command(name = "maildraft")]
#[command(version)]
#[command(
    about = "Draft professional university emails with an AI agent",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft one email and show the agent's reasoning, plan, and draft
    #[clap(visible_alias = "d")]
    Draft {
        #[command(flatten)]
        form: form::FormArgs,
        /// Copy "Subject + Body" to the clipboard
        #[arg(short, long, conflicts_with = "prompt_preview")]
        copy: bool,
        /// Print the outcome as JSON
        #[arg(long, conflicts_with = "prompt_preview")]
        json: bool,
        /// Print the instruction that would be sent, without calling the model
        #[arg(long)]
        prompt_preview: bool,
    },
    /// Draft emails interactively, one after another
    #[clap(visible_alias = "s")]
    Session,
    /// Split a saved model reply into its sections
    #[clap(visible_alias = "p")]
    Parse {
        /// Reply file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List accepted tones
    Tones,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Draft { form, copy, json, prompt_preview } => {
            draft::run_draft(form, copy, json, prompt_preview)
        }
        Commands::Session => session::run_session(),
        Commands::Parse { file, json } => parse::run_parse(file, json),
        Commands::Tones => {
            run_tones();
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_tones() {
    for tone in Tone::ALL {
        let marker = if tone == Tone::default() { " (default)" } else { "" };
        println!("{:<12}{}{}", tone.as_str().to_lowercase(), tone.description(), marker);
    }
}
