use crate::{
    materialize, parse, preview, prompt,
    tree::{Entry, Structure},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BouplanError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] parse::FormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error("the input parsed to an empty structure")]
    #[diagnostic(
        code(bouplan::api::empty),
        help("Nothing in the input looked like a folder or file entry.")
    )]
    EmptyStructure,
}

/// Parses `input` and returns the indented preview listing without touching
/// the filesystem.
///
/// # Errors
///
/// Returns a [`BouplanError`] if the input fails to parse or parses to an
/// empty structure.
pub fn preview_structure(input: &str) -> Result<String, BouplanError> {
    let structure = parse::parse(input)?;

    if structure.is_empty() {
        return Err(BouplanError::EmptyStructure);
    }

    Ok(preview::render(&structure))
}

/// Parses `input`, previews the result, asks for confirmation, and writes the
/// structure to disk.
///
/// When `destination` is `None` and the structure opens with a single
/// top-level folder, that folder's name becomes the destination root and its
/// contents are materialized into it; otherwise `generated_project` is used.
/// An empty `default_content` means every file gets its extension-keyed
/// placeholder.
///
/// Returns the destination root on success, or `None` when the user declined
/// the confirmation.
///
/// # Errors
///
/// Returns a [`BouplanError`] if:
///
/// - The input fails to parse or parses to an empty structure.
/// - The confirmation prompt fails.
/// - A directory or file cannot be created or written to.
pub fn generate(
    input: &str,
    destination: Option<&str>,
    default_content: &str,
    assume_yes: bool,
) -> Result<Option<PathBuf>, BouplanError> {
    let structure = parse::parse(input)?;

    if structure.is_empty() {
        return Err(BouplanError::EmptyStructure);
    }

    let (structure, destination) = match destination {
        Some(destination) => (structure, PathBuf::from(destination)),
        None => infer_destination(structure),
    };

    log::debug!("materializing into: {}", destination.display());

    preview::print_preview(&structure);

    if !assume_yes && !prompt::apply_changes()? {
        return Ok(None);
    }

    materialize::apply(&structure, &destination, default_content)?;

    Ok(Some(destination))
}

/// Picks a destination when the caller gave none: a structure whose first
/// top-level entry is a folder unwraps into that folder's name, everything
/// else lands in `generated_project`.
fn infer_destination(mut structure: Structure) -> (Structure, PathBuf) {
    if structure.0.len() == 1 && matches!(structure.0.get_index(0), Some((_, Entry::Folder { .. })))
    {
        if let Some((name, Entry::Folder { contents })) = structure.0.shift_remove_index(0) {
            return (contents, PathBuf::from(name));
        }
    }

    (structure, PathBuf::from("generated_project"))
}
