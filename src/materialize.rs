use crate::content::placeholder_for;
use crate::errors::{FileOperation, IoError};
use crate::transactions::{Active, RollbackOperation, Transaction};
use crate::tree::{Entry, Structure};
use colored::Colorize;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error while creating the structure")]
    #[diagnostic(code(bouplan::materialize::io))]
    Io(#[from] IoError),
}

/// Writes a structure to disk under `destination`, creating folders
/// parents-as-needed and files with either `default_content` (when non-empty)
/// or the extension-keyed placeholder. Existing folders are left alone;
/// existing files are overwritten.
///
/// Runs inside a rollback transaction: if any write fails, everything created
/// by this call is removed again before the error propagates.
pub fn apply(
    structure: &Structure,
    destination: &Path,
    default_content: &str,
) -> Result<(), MaterializeError> {
    let mut trx = Transaction::<Active>::new();

    create_directory(&mut trx, destination)?;
    apply_into(structure, destination, default_content, &mut trx)?;

    trx.commit();

    Ok(())
}

fn apply_into(
    structure: &Structure,
    current_path: &Path,
    default_content: &str,
    trx: &mut Transaction<Active>,
) -> Result<(), MaterializeError> {
    for (name, entry) in &structure.0 {
        let entry_path = current_path.join(name);

        match entry {
            Entry::Folder { contents } => {
                create_directory(trx, &entry_path)?;
                apply_into(contents, &entry_path, default_content, trx)?;
            }
            Entry::File => {
                let contents = if default_content.is_empty() {
                    placeholder_for(name)
                } else {
                    default_content.to_string()
                };

                write_file(trx, &entry_path, contents)?;
            }
        }
    }

    Ok(())
}

/// Creates all directories in the specified path if they do not exist, and
/// registers the rollback.
fn create_directory(trx: &mut Transaction<Active>, path: &Path) -> Result<(), MaterializeError> {
    let existed = path.is_dir();

    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    // A folder that was already there is not ours to remove on rollback.
    if !existed {
        trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

        let msg = format!("{} {}", "create".green(), path.display());

        println!("{}", &msg);
    }

    Ok(())
}

/// Writes a file with the provided contents, registers the rollback, and
/// reports the creation on the console.
fn write_file(
    trx: &mut Transaction<Active>,
    path: &Path,
    contents: String,
) -> Result<(), MaterializeError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_simple_list;

    #[test]
    fn creates_folders_and_files_with_placeholders() {
        let dir = tempfile::tempdir().expect("temp dir");
        let structure = parse_simple_list("src/main.py\nsrc/assets\nREADME.md");

        apply(&structure, dir.path(), "").expect("materialize");

        assert!(dir.path().join("src").is_dir());
        assert!(dir.path().join("src/assets").is_dir());

        let main = std::fs::read_to_string(dir.path().join("src/main.py")).expect("read");
        assert!(main.contains("main.py - Auto-generated Python module"));

        let readme = std::fs::read_to_string(dir.path().join("README.md")).expect("read");
        assert!(readme.starts_with("# README"));
    }

    #[test]
    fn default_content_overrides_placeholders() {
        let dir = tempfile::tempdir().expect("temp dir");
        let structure = parse_simple_list("notes.txt");

        apply(&structure, dir.path(), "hello").expect("materialize");

        let notes = std::fs::read_to_string(dir.path().join("notes.txt")).expect("read");
        assert_eq!(notes, "hello");
    }

    #[test]
    fn existing_folders_are_reused_and_existing_files_overwritten() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("src")).expect("mkdir");
        std::fs::write(dir.path().join("src/main.py"), "old").expect("seed");

        let structure = parse_simple_list("src/main.py");
        apply(&structure, dir.path(), "new").expect("materialize");

        let main = std::fs::read_to_string(dir.path().join("src/main.py")).expect("read");
        assert_eq!(main, "new");
    }
}
