use std::fmt;

/// The notations a pasted structure description can arrive in.
///
/// The set is closed by design: dispatch happens over this enum, not an
/// open-ended registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    UnixTree,
    WindowsTree,
    YamlLike,
    SimpleList,
}
impl InputFormat {
    fn as_str(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::UnixTree => "unix_tree",
            Self::WindowsTree => "windows_tree",
            Self::YamlLike => "yaml_like",
            Self::SimpleList => "simple_list",
        }
    }
}
impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies raw input text into one of the five supported formats.
///
/// The checks run in a fixed precedence order and short-circuit at the first
/// match; swapping the order changes behavior on ambiguous inputs, so it is a
/// contract, not an implementation detail:
///
/// 1. starts with `{` and ends with `}` -> json
/// 2. contains a box-drawing character (`│`, `├`, `└`) -> unix_tree
/// 3. contains `PATH listing` or `Volume serial` -> windows_tree
/// 4. contains both a `:` and a newline -> yaml_like
/// 5. anything else -> simple_list
pub fn detect_input_format(input: &str) -> InputFormat {
    let input = input.trim();

    if input.starts_with('{') && input.ends_with('}') {
        InputFormat::Json
    } else if input.contains('│') || input.contains('├') || input.contains('└') {
        InputFormat::UnixTree
    } else if input.contains("PATH listing") || input.contains("Volume serial") {
        InputFormat::WindowsTree
    } else if input.contains(':') && input.contains('\n') {
        InputFormat::YamlLike
    } else {
        InputFormat::SimpleList
    }
}
