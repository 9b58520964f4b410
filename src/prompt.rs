use inquire::Confirm;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unable to read confirmation from the terminal")]
    #[diagnostic(
        code(bouplan::prompt::confirm),
        help("Re-run with --yes to skip the interactive confirmation.")
    )]
    Confirm {
        #[source]
        source: inquire::InquireError,
    },
}

/// Asks whether the previewed structure should be written to disk.
pub fn apply_changes() -> Result<bool, PromptError> {
    Confirm::new("Create this structure?")
        .with_default(false)
        .with_help_message("Review the preview above before confirming")
        .prompt()
        .map_err(|source| PromptError::Confirm { source })
}
