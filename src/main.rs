use clap::{
    crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command,
};
use colored::Colorize;
use miette::{IntoDiagnostic, WrapErr};
use std::io::Read;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Parses a structure description and creates it on disk")
                .arg(
                    Arg::new("file")
                        .help("File holding the structure description; reads stdin when omitted"),
                )
                .arg(
                    Arg::new("destination")
                        .help("Directory to create the structure in; inferred from the input when omitted"),
                )
                .arg(
                    Arg::new("content")
                        .long("content")
                        .help("Content written into every created file instead of the per-extension placeholder"),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Parses a structure description and prints the resulting tree")
                .arg(
                    Arg::new("file")
                        .help("File holding the structure description; reads stdin when omitted"),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Reports which input format a structure description would parse as")
                .arg(
                    Arg::new("file")
                        .help("File holding the structure description; reads stdin when omitted"),
                ),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if is_verbose { "debug" } else { "warn" }),
    )
    .init();

    match matches.subcommand() {
        Some(("generate", args)) => handle_generate(args),
        Some(("preview", args)) => handle_preview(args),
        Some(("detect", args)) => handle_detect(args),
        _ => unreachable!(),
    }
}

fn read_input(args: &ArgMatches) -> miette::Result<String> {
    match args.get_one::<String>("file") {
        Some(file) => std::fs::read_to_string(file)
            .into_diagnostic()
            .wrap_err_with(|| format!("unable to read structure description from '{}'", file)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()
                .wrap_err("unable to read structure description from stdin")?;
            Ok(input)
        }
    }
}

fn handle_generate(args: &ArgMatches) -> miette::Result<()> {
    let input = read_input(args)?;
    let destination = args.get_one::<String>("destination").map(String::as_str);
    let default_content = args
        .get_one::<String>("content")
        .map(String::as_str)
        .unwrap_or("");
    let assume_yes = args.get_flag("yes");

    match bouplan::generate(&input, destination, default_content, assume_yes)? {
        Some(path) => {
            println!(
                "{} structure generated at: {}",
                "done".green(),
                path.display()
            );
        }
        None => {
            println!("{} nothing was written", "canceled".yellow());
        }
    }

    Ok(())
}

fn handle_preview(args: &ArgMatches) -> miette::Result<()> {
    let input = read_input(args)?;

    print!("{}", bouplan::preview_structure(&input)?);

    Ok(())
}

fn handle_detect(args: &ArgMatches) -> miette::Result<()> {
    let input = read_input(args)?;

    println!("{}", bouplan::detect_input_format(&input));

    Ok(())
}
