// Command-line interface for mdport
//
// Exports a Markdown file (or stdin) to plain text, PDF or DOCX using the mdport-babel crate.
//
// Converting:
//
// The target format comes from --to, else from the extension of the -o path, else from the
// configured default. Unknown format names fall back to plain text with a warning.
// Usage:
//  mdport <input> [--to <format>] [-o <file>]          - Export (default command)
//  mdport convert <input> [--to <format>] [-o <file>]  - Same as above (explicit)
//  mdport list-formats [--json]                        - List available formats
//
// Text output without -o goes to stdout. Binary output without -o is written to
// <output_stem>.<ext> in the working directory.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  mdport notes.md --to pdf -o notes.pdf --extra-page-size letter

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use mdport_babel::formats::pdf::PageSize;
use mdport_babel::{
    publish, Artifact, ExportRequest, FormatRegistry, PublishArtifact, SerializedDocument,
};
use mdport_config::{Loader, MdportConfig};
use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "list-formats", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            // A following arg is a value unless it looks like a flag
            let value = args.get(i + 1).filter(|next| !next.starts_with('-'));
            match value {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// True when the args name an input but no subcommand, so `convert` should be implied.
fn should_inject_convert(args: &[String]) -> bool {
    let rest = args.iter().skip(1);
    let has_operand = rest.clone().any(|arg| arg == "-" || !arg.starts_with('-'));
    let has_subcommand = rest.clone().any(|arg| SUBCOMMANDS.contains(&arg.as_str()));
    has_operand && !has_subcommand
}

fn build_cli() -> Command {
    Command::new("mdport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export Markdown documents to plain text, PDF or DOCX")
        .long_about(
            "mdport converts a small Markdown subset (# and ## headings, paragraphs,\n\
            **bold** and *italic*) into plain text, PDF or Word documents.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdport notes.md                          # Plain text to stdout\n  \
            mdport notes.md --to pdf                 # Writes document.pdf\n  \
            mdport notes.md -o notes.docx            # Format from the extension\n  \
            cat notes.md | mdport - --to txt         # Read from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdport.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Export a Markdown document (default command)")
                .long_about(
                    "Export a Markdown document to another format.\n\n\
                    Supported formats:\n  \
                    - txt:  Plain text with emphasis markers removed\n  \
                    - pdf:  Paged PDF (--extra-page-size a4|letter)\n  \
                    - docx: Word document with heading styles\n\n\
                    Unknown format names fall back to txt.\n\n\
                    Examples:\n  \
                    mdport convert notes.md --to pdf -o notes.pdf\n  \
                    mdport notes.md --to docx                  # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (txt, pdf, docx)")
                        .long_help(
                            "Target format to export to.\n\n\
                            If not specified, the format is detected from the -o extension,\n\
                            then taken from convert.default_format in the configuration.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .long_help(
                            "Path to write the exported document.\n\n\
                            Without it, text goes to stdout and binary formats are written\n\
                            to <output_stem>.<ext> in the working directory.",
                        )
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("list-formats")
                .about("List available export formats")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the list as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            let is_display = matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
            if is_display || !should_inject_convert(&cleaned_args) {
                e.exit();
            }

            // Inject "convert" as the subcommand
            let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
            new_args.extend_from_slice(&cleaned_args[1..]);
            match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config.logging.level, matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input path (or -) is required");
                std::process::exit(1);
            };
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("list-formats", sub_matches)) => {
            handle_list_formats_command(sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`, which wins over the config.
fn init_logging(configured_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(fallback).unwrap_or_else(|err| {
            eprintln!("Invalid logging.level '{fallback}': {err}; using 'warn'");
            EnvFilter::new("warn")
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MdportConfig,
) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading input '{input}': {e}");
        std::process::exit(1);
    });
    if source.trim().is_empty() {
        eprintln!("Error: input '{input}' is empty, nothing to export");
        std::process::exit(1);
    }

    let registry = FormatRegistry::default();
    let requested = resolve_format_name(&registry, to, output, config);
    let format = registry.select(&requested).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let options = format_options(format.name(), config, extra_params);
    let mut request = ExportRequest::new(&source, format.name())
        .with_stem(config.convert.output_stem.clone())
        .with_options(options);
    if let Some(path) = output {
        request = request.with_output_path(path);
    }

    let result = publish(request).unwrap_or_else(|e| {
        eprintln!("Export error: {e}");
        std::process::exit(1);
    });

    match result.artifact {
        PublishArtifact::File(path) => debug!(path = %path.display(), "wrote output file"),
        PublishArtifact::InMemory(artifact) => deliver(artifact),
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Text goes to stdout; binary documents are saved under their suggested name.
fn deliver(artifact: Artifact) {
    match artifact.document {
        SerializedDocument::Text(text) => println!("{text}"),
        SerializedDocument::Binary(bytes) => {
            fs::write(&artifact.filename, bytes).unwrap_or_else(|e| {
                eprintln!("Error writing file '{}': {e}", artifact.filename);
                std::process::exit(1);
            });
            eprintln!("Wrote {}", artifact.filename);
        }
    }
}

fn resolve_format_name(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &MdportConfig,
) -> String {
    to.map(str::to_string)
        .or_else(|| output.and_then(|path| registry.detect_format_from_filename(path)))
        .unwrap_or_else(|| config.convert.default_format.clone())
}

/// Configured options for the resolved format, with `--extra-*` parameters layered on top.
fn format_options(
    format: &str,
    config: &MdportConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = if format == "pdf" {
        config.convert.pdf.to_options()
    } else {
        HashMap::new()
    };
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}

/// Handle the list-formats command
fn handle_list_formats_command(json: bool) {
    let registry = FormatRegistry::default();
    let formats = registry.formats();

    if json {
        let listing: Vec<serde_json::Value> = formats
            .iter()
            .map(|format| {
                serde_json::json!({
                    "name": format.name(),
                    "description": format.description(),
                    "extensions": format.file_extensions(),
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&listing).unwrap_or_else(|e| {
            eprintln!("Error rendering format list: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!("Available formats:\n");
    for format in formats {
        println!(
            "  {:<6}{} (.{})",
            format.name(),
            format.description(),
            format.file_extensions().join(", .")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdportConfig {
    let loader = Loader::new().with_optional_file("mdport.toml");
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

fn apply_config_overrides(config: &mut MdportConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("page-size") {
        config.convert.pdf.page_size = PageSize::from_name(&raw).unwrap_or_else(|| {
            eprintln!("Invalid page size '{raw}' for --extra-page-size (expected a4 or letter)");
            std::process::exit(1);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["mdport", "convert", "notes.md"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let input = args(&[
            "mdport",
            "notes.md",
            "--to",
            "pdf",
            "--extra-page-size",
            "letter",
            "-o",
            "notes.pdf",
        ]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(
            cleaned,
            args(&["mdport", "notes.md", "--to", "pdf", "-o", "notes.pdf"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("page-size"), Some(&"letter".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let input = args(&["mdport", "notes.md", "--extra-compact"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["mdport", "notes.md"]));
        assert_eq!(extra.get("compact"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let input = args(&["mdport", "notes.md", "--extras-page-size", "a4"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["mdport", "notes.md"]));
        assert_eq!(extra.get("page-size"), Some(&"a4".to_string()));
    }

    #[test]
    fn test_parse_extra_args_mixed_boolean_and_value() {
        let input = args(&[
            "mdport",
            "notes.md",
            "--extra-draft",
            "--extra-page-size",
            "letter",
        ]);
        let (_, extra) = parse_extra_args(&input);

        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("draft"), Some(&"true".to_string()));
        assert_eq!(extra.get("page-size"), Some(&"letter".to_string()));
    }

    #[test]
    fn inject_convert_for_bare_input() {
        assert!(should_inject_convert(&args(&["mdport", "notes.md"])));
        assert!(should_inject_convert(&args(&["mdport", "-", "--to", "pdf"])));
        assert!(should_inject_convert(&args(&["mdport", "-v", "notes.md"])));
        assert!(!should_inject_convert(&args(&["mdport", "list-formats"])));
        assert!(!should_inject_convert(&args(&["mdport", "convert", "notes.md"])));
        assert!(!should_inject_convert(&args(&["mdport", "--verbose"])));
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn format_name_resolution_order() {
        let registry = FormatRegistry::default();
        let config = load_cli_config(None);

        assert_eq!(
            resolve_format_name(&registry, Some("docx"), Some("out.pdf"), &config),
            "docx"
        );
        assert_eq!(
            resolve_format_name(&registry, None, Some("out.pdf"), &config),
            "pdf"
        );
        assert_eq!(
            resolve_format_name(&registry, None, Some("out.unknown"), &config),
            "txt"
        );
        assert_eq!(resolve_format_name(&registry, None, None, &config), "txt");
    }

    #[test]
    fn apply_config_overrides_updates_page_size() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("page-size".to_string(), "Letter".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.convert.pdf.page_size, PageSize::Letter);
        assert!(extras.is_empty());
    }

    #[test]
    fn pdf_options_follow_config() {
        let mut config = load_cli_config(None);
        config.convert.pdf.page_size = PageSize::Letter;

        let options = format_options("pdf", &config, &HashMap::new());
        assert_eq!(options.get("page-size"), Some(&"letter".to_string()));

        let options = format_options("docx", &config, &HashMap::new());
        assert!(options.is_empty());
    }
}
