use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// `true` for a "y"/"yes" answer, in any case.
fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Make sure the export target can be written.
///
/// A missing file, or `force`, is accepted straight away. Otherwise the
/// user is asked on stdin and anything but yes cancels the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if !confirmed(&answer) {
        return Err(AppError::Export(format!(
            "cancelled, {} left untouched",
            path.display()
        )));
    }
    info("Existing file will be overwritten.");
    Ok(())
}
