// Command-line interface for mdbridge
//
// This binary converts Markdown to HTML and HTML back to Markdown using the mdbridge-convert
// library, with settings layered from mdbridge-config.
//
// Converting:
//
// The direction is auto-detected from the input file extension (.md/.markdown, .html/.htm),
// while being overwrittable by an explicit --mode flag. Use "-" to read from stdin.
// Usage:
//  mdbridge <input> [--mode <mode>] [--output <file>]          - Convert (default)
//  mdbridge convert <input> [--mode <mode>] [--output <file>]  - Same as above (explicit)
//  mdbridge stats <input> [--mode <mode>]                      - Print statistics as JSON
//  mdbridge generate-css                                       - Print the built-in stylesheet
//  mdbridge --list-modes                                       - List available conversions
//
// Extra Parameters:
//
// Conversion options can be overridden using --extra-<option> <value>.
// The CLI layer strips the "extra-" prefix and applies the value on top of the loaded config.
// Example:
//  mdbridge notes.md --extra-toc --extra-full-html --extra-title "My Notes"

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdbridge_config::{Loader, MdbridgeConfig};
use mdbridge_convert::{
    convert, default_css, ConversionConfig, ConversionReport, ConverterRegistry, Mode,
    OutputFormat,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "stats", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value, negative numbers included)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-') || next.parse::<i64>().is_ok());

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

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
        .help("Conversion direction (auto-detected from the file extension if not specified)")
        .value_parser(clap::builder::PossibleValuesParser::new([
            "markdown-to-html",
            "html-to-markdown",
        ]))
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("mdbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML and HTML back to Markdown")
        .long_about(
            "mdbridge converts Markdown to HTML (fragment or complete styled document)\n\
            and HTML back to approximate Markdown.\n\n\
            Commands:\n  \
            - convert:      Convert a file (default command)\n  \
            - stats:        Print conversion statistics as JSON\n  \
            - generate-css: Print the stylesheet embedded in full-html output\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override conversion options:\n  \
            tables, strikethrough, task-lists, autolinks, toc, sanitize,\n  \
            full-html, heading-offset, css, title.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdbridge notes.md                         # HTML fragment to stdout\n  \
            mdbridge notes.md --extra-full-html -o notes.html\n  \
            mdbridge page.html                        # Markdown to stdout\n  \
            cat notes.md | mdbridge - --mode markdown-to-html",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-modes")
                .long("list-modes")
                .help("List available conversion modes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdbridge.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter when RUST_LOG is unset (error, warn, info, debug, trace)")
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert a document between Markdown and HTML.\n\n\
                    The direction is auto-detected from the file extension:\n  \
                    - .md, .markdown: markdown-to-html\n  \
                    - .html, .htm:    html-to-markdown\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdbridge convert doc.md -o doc.html\n  \
                    mdbridge convert page.html --stats\n  \
                    mdbridge doc.md --json                   # 'convert' is optional",
                )
                .arg(input_arg())
                .arg(mode_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
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
                .about("Convert a document and print only its statistics as JSON")
                .arg(input_arg())
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for full-html output")
                .long_about(
                    "Outputs the baseline CSS embedded in full-html documents.\n\n\
                    Use this as a starting point for custom styling. Save it, edit it,\n\
                    then pass it via --extra-css or convert.html.custom_css; it is\n\
                    appended after the built-in styles.\n\n\
                    Examples:\n  \
                    mdbridge generate-css > custom.css",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path (or "-") means the convert subcommand was omitted
            if cleaned_args.len() > 1
                && (cleaned_args[1] == "-" || !cleaned_args[1].starts_with('-'))
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level);

    if matches.get_flag("list-modes") {
        handle_list_modes_command();
        return;
    }

    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        tracing::warn!(option = %key, "ignoring unknown --extra option");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_input(sub_matches);
            let conversion = conversion_config(&config, input, sub_matches);
            let options = ConvertOptions {
                output: sub_matches.get_one::<String>("output").map(|s| s.as_str()),
                print_stats: sub_matches.get_flag("stats"),
                json: sub_matches.get_flag("json"),
            };
            handle_convert_command(input, &conversion, &options);
        }
        Some(("stats", sub_matches)) => {
            let input = required_input(sub_matches);
            let conversion = conversion_config(&config, input, sub_matches);
            handle_stats_command(input, &conversion);
        }
        Some(("generate-css", _)) => {
            print!("{}", default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn required_input(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: an input path is required");
            std::process::exit(1);
        })
}

struct ConvertOptions<'a> {
    output: Option<&'a str>,
    print_stats: bool,
    json: bool,
}

/// Handle the convert command
fn handle_convert_command(input: &str, conversion: &ConversionConfig, options: &ConvertOptions) {
    let source = read_input(input);
    let result = convert(&source, conversion);

    if options.json {
        let failed = result.is_err();
        let report = ConversionReport::from(result);
        let json = to_json(&report);
        write_output(options.output, &json);
        if failed {
            std::process::exit(1);
        }
        return;
    }

    let converted = result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    write_output(options.output, &converted.output);

    if options.print_stats {
        eprintln!("{}", to_json(&converted.stats));
    }
}

/// Handle the stats command
fn handle_stats_command(input: &str, conversion: &ConversionConfig) {
    let source = read_input(input);
    let converted = convert(&source, conversion).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{}", to_json(&converted.stats));
}

/// Handle the list-modes command
fn handle_list_modes_command() {
    println!("Available modes:\n");
    let registry = ConverterRegistry::default();
    for mode in registry.list_modes() {
        if let Ok(converter) = registry.get(mode) {
            println!(
                "  {:<18} {} (.{})",
                mode,
                converter.description(),
                converter.source_extensions().join(", .")
            );
        }
    }
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn write_output(path: Option<&str>, content: &str) {
    match path {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None if content.ends_with('\n') => print!("{content}"),
        None => println!("{content}"),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing JSON: {e}");
        std::process::exit(1);
    })
}

/// Pick the direction: explicit --mode, then the input extension, then the config
fn resolve_mode(explicit: Option<&str>, input: &str, configured: Mode) -> Mode {
    if let Some(raw) = explicit {
        return raw.parse().unwrap_or_else(|e: String| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    }
    if input == "-" {
        return configured;
    }
    ConverterRegistry::default()
        .detect_mode_from_filename(input)
        .unwrap_or(configured)
}

fn conversion_config(
    config: &MdbridgeConfig,
    input: &str,
    matches: &ArgMatches,
) -> ConversionConfig {
    let mut conversion = ConversionConfig::from(&config.convert);
    conversion.mode = resolve_mode(
        matches.get_one::<String>("mode").map(|s| s.as_str()),
        input,
        config.convert.mode,
    );

    if let Some(path) = &config.convert.html.custom_css {
        let css = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{path}': {e}");
            std::process::exit(1);
        });
        conversion.custom_css = Some(css);
    }

    tracing::debug!(mode = %conversion.mode, input, "resolved conversion settings");
    conversion
}

fn load_cli_config(explicit_path: Option<&str>) -> MdbridgeConfig {
    let loader = Loader::new().with_optional_file("mdbridge.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut MdbridgeConfig,
    extra_params: &mut HashMap<String, String>,
) {
    let settings = &mut config.convert;

    if let Some(raw) = extra_params.remove("tables") {
        settings.enable_tables = parse_bool_arg("tables", &raw);
    }
    if let Some(raw) = extra_params.remove("strikethrough") {
        settings.enable_strikethrough = parse_bool_arg("strikethrough", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["task-lists", "tasks"]) {
        settings.enable_task_lists = parse_bool_arg("task-lists", &raw);
    }
    if let Some(raw) = extra_params.remove("autolinks") {
        settings.enable_autolinks = parse_bool_arg("autolinks", &raw);
    }
    if let Some(raw) = extra_params.remove("toc") {
        settings.generate_toc = parse_bool_arg("toc", &raw);
    }
    if let Some(raw) = extra_params.remove("sanitize") {
        settings.sanitize_html = parse_bool_arg("sanitize", &raw);
    }
    if let Some(raw) = extra_params.remove("full-html") {
        settings.output_format = if parse_bool_arg("full-html", &raw) {
            OutputFormat::FullHtml
        } else {
            OutputFormat::HtmlFragment
        };
    }
    if let Some(raw) = extra_params.remove("heading-offset") {
        settings.heading_offset = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid integer value '{raw}' for --extra-heading-offset");
            std::process::exit(1);
        });
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        settings.html.custom_css = Some(path);
    }
    if let Some(title) = extra_params.remove("title") {
        settings.html.title = title;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
