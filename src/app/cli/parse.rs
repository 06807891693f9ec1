use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use super::render;
use crate::app::commands::draft::DraftOutcome;
use crate::domain::AppError;

/// Split a saved reply into sections without calling the model.
pub fn run_parse(file: Option<PathBuf>, json: bool) -> Result<i32, AppError> {
    let raw = match file {
        Some(path) => fs::read_to_string(&path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let outcome = DraftOutcome::from_raw(&raw);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).map_err(io::Error::from)?);
    } else {
        render::print_outcome(&outcome);
    }

    Ok(render::exit_code(&outcome))
}
