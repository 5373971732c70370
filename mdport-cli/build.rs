use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by mdport-babel
// Build scripts can't depend on the library they build alongside
const AVAILABLE_FORMATS: &[&str] = &["txt", "pdf", "docx"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export Markdown documents to plain text, PDF or DOCX")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("list-formats").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdport", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdport", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdport", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
