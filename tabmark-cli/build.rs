use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("tabmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert browser tab snapshots to Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tabmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .value_name("STYLE")
                .help("Unordered list marker: dash, asterisk or plus")
                .value_parser(clap::builder::PossibleValuesParser::new([
                    "dash", "asterisk", "plus",
                ]))
                .global(true),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("STYLE")
                .help("Sublist indentation: spaces or tab")
                .value_parser(clap::builder::PossibleValuesParser::new(["spaces", "tab"]))
                .global(true),
        )
        .arg(
            Arg::new("escape-brackets")
                .long("escape-brackets")
                .help("Escape [ and ] in link text even when balanced")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("decode-urls")
                .long("decode-urls")
                .help("Percent-decode URLs (space and parentheses stay encoded)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("tabs")
                .about("Render a tab snapshot as a Markdown list")
                .arg(
                    Arg::new("snapshot")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "link", "title", "url",
                        ])),
                )
                .arg(
                    Arg::new("list-type")
                        .long("list-type")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "list",
                            "task-list",
                        ])),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a tab snapshot through a custom template")
                .arg(
                    Arg::new("snapshot")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Format a single inline link")
                .arg(Arg::new("title").long("title"))
                .arg(Arg::new("url").long("url").required(true).value_hint(ValueHint::Url)),
        )
        .subcommand(
            Command::new("image")
                .about("Format an inline image, optionally wrapped in a link")
                .arg(Arg::new("alt").long("alt"))
                .arg(Arg::new("src").long("src").required(true).value_hint(ValueHint::Url))
                .arg(Arg::new("link").long("link").value_hint(ValueHint::Url)),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tabmark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tabmark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tabmark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
