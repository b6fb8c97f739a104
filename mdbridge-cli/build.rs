use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the modes from mdbridge-convert's Mode enum
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_MODES: &[&str] = &["markdown-to-html", "html-to-markdown"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn mode_arg() -> Arg {
    Arg::new("mode")
        .long("mode")
        .help("Conversion direction")
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_MODES))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML and HTML back to Markdown")
        .arg(
            Arg::new("list-modes")
                .long("list-modes")
                .help("List available conversion modes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a mdbridge.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter when RUST_LOG is unset")
                .value_parser(["error", "warn", "info", "debug", "trace"]),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document")
                .arg(input_arg())
                .arg(mode_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .help("Print statistics as JSON on stderr")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the full conversion report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Print conversion statistics as JSON")
                .arg(input_arg())
                .arg(mode_arg()),
        )
        .subcommand(Command::new("generate-css").about("Output the default CSS"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdbridge", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdbridge", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdbridge", &outdir)?;

    Ok(())
}
