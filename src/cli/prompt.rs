//! Destructive-overwrite confirmation
//!
//! Export commands check their declared output paths before anything else —
//! before authentication, so a declined prompt makes no network request.
//! The decision is behind a trait so the pipeline stays testable without a
//! terminal attached.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Decides whether an existing output file may be destroyed
pub trait OverwritePrompt {
    /// Confirm deletion of one path
    fn confirm(&self, path: &Path) -> Result<bool>;
}

/// Interactive prompt reading the operator's answer from stdin.
///
/// Accepts `yes` or `y`, case-insensitively; anything else declines.
pub struct ConsolePrompt;

impl OverwritePrompt for ConsolePrompt {
    fn confirm(&self, path: &Path) -> Result<bool> {
        print!("{} already exists. Delete it and re-export? [yes/no] ", path.display());
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;

        Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
    }
}

/// Always-affirmative prompt backing `--yes`
pub struct AssumeYes;

impl OverwritePrompt for AssumeYes {
    fn confirm(&self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Prompt implementation for the given `--yes` flag
pub fn for_args(assume_yes: bool) -> Box<dyn OverwritePrompt> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ConsolePrompt)
    }
}

/// Clear the declared output paths of a run.
///
/// Every existing path is confirmed first; only once all are confirmed is
/// anything deleted. Returns `false` — with nothing touched — when the
/// operator declines, which callers treat as a clean early exit.
pub fn clear_outputs(paths: &[PathBuf], prompt: &dyn OverwritePrompt) -> Result<bool> {
    let existing: Vec<&PathBuf> = paths.iter().filter(|path| path.exists()).collect();

    for path in &existing {
        if !prompt.confirm(path)? {
            return Ok(false);
        }
    }

    for path in existing {
        std::fs::remove_file(path)?;
    }

    Ok(true)
}
