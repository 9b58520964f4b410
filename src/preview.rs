use crate::tree::{Entry, Structure};
use colored::Colorize;

/// Renders a structure as an indented listing: two spaces per depth, folders
/// marked with a trailing `/`, in insertion order.
pub fn render(structure: &Structure) -> String {
    let mut rendered = String::new();
    render_into(structure, "", &mut rendered);
    rendered
}

fn render_into(structure: &Structure, indent: &str, rendered: &mut String) {
    for (name, entry) in &structure.0 {
        match entry {
            Entry::Folder { contents } => {
                rendered.push_str(&format!("{indent}📁 {name}/\n"));
                render_into(contents, &format!("{indent}  "), rendered);
            }
            Entry::File => {
                rendered.push_str(&format!("{indent}📄 {name}\n"));
            }
        }
    }
}

/// Prints the rendered structure framed for user confirmation.
pub fn print_preview(structure: &Structure) {
    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render(structure));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryKind;

    #[test]
    fn renders_two_space_indent_and_folder_markers() {
        let mut structure = Structure::new();
        structure.insert(&["src".to_string()], EntryKind::File, "main.py");
        structure.insert(&[], EntryKind::File, "README.md");

        assert_eq!(render(&structure), "📁 src/\n  📄 main.py\n📄 README.md\n");
    }

    #[test]
    fn empty_folders_render_with_no_children() {
        let mut structure = Structure::new();
        structure.insert(&[], EntryKind::Folder, "assets");

        assert_eq!(render(&structure), "📁 assets/\n");
    }
}
