use crate::detect::{detect_input_format, InputFormat};
use crate::tree::{EntryKind, Structure};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FormatError {
    #[error("invalid JSON structure: {source}")]
    #[diagnostic(
        code(bouplan::parse::json),
        help("The input looked like JSON but could not be decoded. Each entry needs a \"type\" of \"folder\" or \"file\", and folders hold their children under \"contents\".")
    )]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

lazy_static::lazy_static! {
    // Trailing summary emitted by the `tree` command, e.g. "3 directories, 2 files".
    static ref TREE_FOOTER_REGEX: regex::Regex =
        regex::Regex::new(r"^\d+\s+(directories|files)").expect("a valid regex pattern");
    // The leading run of box-drawing glyphs, connector dashes, and whitespace.
    static ref TREE_PREFIX_REGEX: regex::Regex =
        regex::Regex::new(r"^[│├└─\s]*").expect("a valid regex pattern");
}

/// Removes everything from the first `#` onward and trims trailing whitespace.
///
/// There is no quote-awareness: a literal `#` anywhere in the line, including
/// inside a filename, truncates it. That is a behavioral contract of the input
/// notation, not something to fix here.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(position) => line[..position].trim_end(),
        None => line.trim_end(),
    }
}

/// Detects the format of `input` and runs the matching parser.
///
/// Line endings are normalized to `\n` first. Only the JSON path can fail;
/// every line-oriented parser is permissive and folds malformed lines into
/// its heuristics instead of rejecting them.
pub fn parse(input: &str) -> Result<Structure, FormatError> {
    let input = input.replace("\r\n", "\n").replace('\r', "\n");
    let format = detect_input_format(&input);

    log::debug!("detected input format: {}", format);

    parse_as(&input, format)
}

/// Runs the parser for an already-detected format.
pub fn parse_as(input: &str, format: InputFormat) -> Result<Structure, FormatError> {
    match format {
        InputFormat::Json => parse_json(input),
        InputFormat::UnixTree => Ok(parse_unix_tree(input)),
        InputFormat::WindowsTree => Ok(parse_windows_tree(input)),
        InputFormat::YamlLike => Ok(parse_yaml_like(input)),
        InputFormat::SimpleList => Ok(parse_simple_list(input)),
    }
}

/// Decodes a JSON object already shaped like the canonical tree.
///
/// Fails with [`FormatError::Json`] carrying the decoder's message when the
/// text is not valid JSON or does not match the entry shape.
pub fn parse_json(input: &str) -> Result<Structure, FormatError> {
    serde_json::from_str(input).map_err(|source| FormatError::Json { source })
}

/// Parses conventional `tree` output, where nesting depth is signaled by
/// box-drawing glyphs.
///
/// The depth of a line is the count of `│`, `├`, and `└` glyphs in it, not
/// the indentation width. The path stack is truncated to that depth before
/// each insert, which is what makes this a single pass with no backtracking.
pub fn parse_unix_tree(input: &str) -> Structure {
    let mut structure = Structure::new();
    let mut path_stack: Vec<String> = Vec::new();

    for raw_line in input.trim().split('\n') {
        let line = strip_comment(raw_line);
        if line.trim().is_empty() {
            continue;
        }
        if TREE_FOOTER_REGEX.is_match(line) {
            continue;
        }

        let bare_token = TREE_PREFIX_REGEX.replace(line, "").trim().to_string();
        if bare_token.is_empty() {
            continue;
        }

        let level = line
            .chars()
            .filter(|glyph| matches!(glyph, '│' | '├' | '└'))
            .count();
        path_stack.truncate(level);

        if let Some(folder) = bare_token.strip_suffix('/') {
            let folder = folder.trim_end_matches('/').to_string();
            structure.insert(&path_stack, EntryKind::Folder, &folder);
            path_stack.push(folder);
        } else if bare_token.contains('.') {
            structure.insert(&path_stack, EntryKind::File, &bare_token);
        } else {
            // No trailing slash and no dot: extension-less names read as
            // folders. An extension-less file is indistinguishable here.
            structure.insert(&path_stack, EntryKind::Folder, &bare_token);
            path_stack.push(bare_token);
        }
    }

    structure
}

/// Parses Windows `tree` output by dropping its header lines and handing the
/// rest to the Unix-tree core.
pub fn parse_windows_tree(input: &str) -> Structure {
    let body: Vec<&str> = input
        .trim()
        .split('\n')
        .filter(|line| {
            !line.contains("PATH listing")
                && !line.contains("Volume serial")
                && !line.contains("Folder PATH")
                && !line.trim().is_empty()
        })
        .collect();

    parse_unix_tree(&body.join("\n"))
}

/// Parses indentation-based notation: two spaces per nesting level, folder
/// lines ending in `/` or `:`.
///
/// Indentation that is not a multiple of two rounds down; irregular input is
/// coerced to the nearest lower level rather than rejected.
pub fn parse_yaml_like(input: &str) -> Structure {
    let mut structure = Structure::new();
    let mut path_stack: Vec<String> = Vec::new();

    for raw_line in input.trim().split('\n') {
        let line = strip_comment(raw_line);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        let level = indent / 2;

        let item = trimmed.trim_end_matches(':').trim_end_matches('/');
        if item.is_empty() {
            continue;
        }

        path_stack.truncate(level);

        if trimmed.ends_with('/') || trimmed.ends_with(':') {
            structure.insert(&path_stack, EntryKind::Folder, item);
            path_stack.push(item.to_string());
        } else if item.contains('.') {
            structure.insert(&path_stack, EntryKind::File, item);
        } else {
            structure.insert(&path_stack, EntryKind::Folder, item);
            path_stack.push(item.to_string());
        }
    }

    structure
}

/// Parses a flat list of paths, one per line, split on `/` and `\`.
///
/// Every segment but the last is a folder; the last is a file when it
/// contains a `.`, otherwise a folder.
pub fn parse_simple_list(input: &str) -> Structure {
    let mut structure = Structure::new();

    for raw_line in input.trim().split('\n') {
        let cleaned = strip_comment(raw_line).trim().replace('\\', "/");

        let segments: Vec<String> = cleaned
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
            .collect();

        let Some((name, parents)) = segments.split_last() else {
            continue;
        };

        let kind = if name.contains('.') {
            EntryKind::File
        } else {
            EntryKind::Folder
        };
        structure.insert(parents, kind, name);
    }

    structure
}
