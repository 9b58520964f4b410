//! Static placeholder content written into newly created files.
//!
//! The lookup is keyed on the name's final `.`-suffix, lowercased. It is a
//! fixed table, not an extension point.

/// Returns boilerplate content for `name`, picked by its extension.
///
/// Names without a known extension get a generic one-line placeholder that
/// names the file.
pub fn placeholder_for(name: &str) -> String {
    let (stem, suffix) = split_name(name);

    match suffix.as_str() {
        ".py" => format!(
            "#!/usr/bin/env python3\n\"\"\"\n{stem}.py - Auto-generated Python module\n\"\"\"\n\ndef main():\n    \"\"\"Main function\"\"\"\n    pass\n\nif __name__ == \"__main__\":\n    main()\n"
        ),
        ".php" => format!(
            "<?php\n/**\n * {stem}.php - Auto-generated PHP file\n */\n\n// Add your PHP code here\n\n?>\n"
        ),
        ".js" => format!(
            "/**\n * {stem}.js - Auto-generated JavaScript file\n */\n\nconsole.log(\"Hello from {stem}.js\");\n"
        ),
        ".css" => format!(
            "/* {stem}.css - Auto-generated CSS file */\n\nbody {{\n    font-family: Arial, sans-serif;\n    margin: 0;\n    padding: 20px;\n}}\n"
        ),
        ".html" => format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>{stem}</title>\n</head>\n<body>\n    <h1>{stem}</h1>\n    <p>Auto-generated HTML file</p>\n</body>\n</html>\n"
        ),
        ".md" => format!(
            "# {stem}\n\nAuto-generated Markdown file.\n\n## Description\n\nThis file was automatically created by bouplan.\n"
        ),
        ".txt" => format!(
            "This is {stem}.txt - Auto-generated text file.\n\nYou can add your content here.\n"
        ),
        ".json" => format!(
            "{{\"name\": \"{stem}\", \"description\": \"Auto-generated JSON file\"}}"
        ),
        ".htaccess" => String::from(
            "# Auto-generated .htaccess file\nRewriteEngine On\nRewriteCond %{REQUEST_FILENAME} !-f\nRewriteCond %{REQUEST_FILENAME} !-d\nRewriteRule ^(.*)$ index.php [QSA,L]\n",
        ),
        _ => format!("# {stem}\n\nAuto-generated file: {name}\n"),
    }
}

/// Splits a file name into (stem, lowercased suffix from the last dot).
///
/// A leading-dot name like `.htaccess` is all suffix; its stem falls back to
/// the full name so the generic template still has something to say.
fn split_name(name: &str) -> (&str, String) {
    match name.rfind('.') {
        Some(0) => (name, name.to_lowercase()),
        Some(position) => (&name[..position], name[position..].to_lowercase()),
        None => (name, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_files_get_a_module_skeleton() {
        let content = placeholder_for("main.py");
        assert!(content.contains("main.py - Auto-generated Python module"));
        assert!(content.starts_with("#!/usr/bin/env python3"));
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert!(placeholder_for("INDEX.HTML").contains("<title>INDEX</title>"));
    }

    #[test]
    fn htaccess_maps_to_its_own_template() {
        assert!(placeholder_for(".htaccess").contains("RewriteEngine On"));
    }

    #[test]
    fn unknown_extensions_get_the_generic_placeholder() {
        let content = placeholder_for("module.xyz");
        assert_eq!(content, "# module\n\nAuto-generated file: module.xyz\n");
    }

    #[test]
    fn dotfiles_fall_back_to_the_generic_placeholder() {
        let content = placeholder_for(".gitignore");
        assert!(content.contains("Auto-generated file: .gitignore"));
    }
}
