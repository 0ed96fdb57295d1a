// Command-line interface for tabmark
//
// This binary turns tab/group snapshots into Markdown on stdout. It plays
// the host role around the pure tabmark-core engine: it reads the snapshot
// JSON a browser-side exporter dumped, loads layered configuration, and
// prints the rendered text for the caller to pipe into a clipboard tool.
//
// Usage:
//  tabmark tabs <snapshot.json> [--format link|title|url] [--list-type list|task-list]
//  tabmark render <snapshot.json> --template <file>   - Custom-format rendering
//  tabmark link --title <text> --url <url>            - Single inline link
//  tabmark image --alt <text> --src <url> [--link <url>]
//
// Style flags (--marker, --indent, --escape-brackets, --decode-urls) are
// applied as overrides on top of the configuration file.

mod snapshot;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use snapshot::TabSnapshot;
use std::fs;
use tabmark_config::{ConfigError, Loader, TabmarkConfig};
use tabmark_core::{
    make_render_input, render_built_in, Context, CustomFormat, ListType, Markdown,
    TabExportFormat, TabListGrouper,
};

fn build_cli() -> Command {
    Command::new("tabmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert browser tab snapshots to Markdown")
        .long_about(
            "tabmark renders tab/group snapshots as Markdown.\n\n\
            Commands:\n  \
            - tabs:   Render all tabs as a (possibly grouped) list\n  \
            - render: Render tabs through a custom template\n  \
            - link:   Format a single inline link\n  \
            - image:  Format an inline image, optionally linked\n\n\
            Examples:\n  \
            tabmark tabs window.json                          # Dash link list\n  \
            tabmark tabs window.json --format url             # URLs only\n  \
            tabmark tabs window.json --list-type task-list    # GFM task list\n  \
            tabmark render window.json --template slack.tmpl  # Custom format",
        )
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
                        .help("Path to the snapshot JSON")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("What each tab contributes: link, title or url")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "link", "title", "url",
                        ]))
                        .default_value("link"),
                )
                .arg(
                    Arg::new("list-type")
                        .long("list-type")
                        .help("Bullet list or GFM task list")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "list",
                            "task-list",
                        ]))
                        .default_value("list"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a tab snapshot through a custom template")
                .long_about(
                    "Render tabs through a user-authored template.\n\n\
                    The template sees two sequences:\n  \
                    - links:   all tabs flattened, numbered 1..N\n  \
                    - grouped: one entry per slot (a page, or a whole group);\n             \
                    group entries expose their members as `links`,\n             \
                    numbered from 1 within the group\n\n\
                    Output is Markdown; no HTML escaping is applied.",
                )
                .arg(
                    Arg::new("snapshot")
                        .help("Path to the snapshot JSON")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Path to the template file")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Format a single inline link")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Link text (escaped; blank becomes \"(No Title)\")")
                        .default_value(""),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Link target")
                        .required(true)
                        .value_hint(ValueHint::Url),
                ),
        )
        .subcommand(
            Command::new("image")
                .about("Format an inline image, optionally wrapped in a link")
                .arg(
                    Arg::new("alt")
                        .long("alt")
                        .help("Alt text (may be empty)")
                        .default_value(""),
                )
                .arg(
                    Arg::new("src")
                        .long("src")
                        .help("Image URL")
                        .required(true)
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("link")
                        .long("link")
                        .help("Wrap the image in a link to this URL")
                        .value_hint(ValueHint::Url),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(&matches);
    let markdown = config.markdown_formatter();

    match matches.subcommand() {
        Some(("tabs", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("snapshot")
                .expect("snapshot is required");
            let format = sub_matches
                .get_one::<String>("format")
                .expect("format has a default");
            let list_type = sub_matches
                .get_one::<String>("list-type")
                .expect("list-type has a default");
            handle_tabs_command(path, format, list_type, &markdown);
        }
        Some(("render", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("snapshot")
                .expect("snapshot is required");
            let template = sub_matches
                .get_one::<String>("template")
                .expect("template is required");
            handle_render_command(path, template, &markdown);
        }
        Some(("link", sub_matches)) => {
            let title = sub_matches
                .get_one::<String>("title")
                .expect("title has a default");
            let url = sub_matches
                .get_one::<String>("url")
                .expect("url is required");
            println!("{}", markdown.link_to(title, url));
        }
        Some(("image", sub_matches)) => {
            let alt = sub_matches
                .get_one::<String>("alt")
                .expect("alt has a default");
            let src = sub_matches
                .get_one::<String>("src")
                .expect("src is required");
            match sub_matches.get_one::<String>("link") {
                Some(link) => println!("{}", markdown.linked_image(alt, src, link)),
                None => println!("{}", markdown.image_for(alt, src)),
            }
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load layered configuration: embedded defaults, then an optional user
/// file, then per-flag overrides.
fn load_cli_config(matches: &ArgMatches) -> TabmarkConfig {
    let mut loader = Loader::new();

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    loader = apply_style_overrides(loader, matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

fn apply_style_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, ConfigError> {
    if let Some(marker) = matches.get_one::<String>("marker") {
        loader = loader.set_override("markdown.unordered_list_style", marker.as_str())?;
    }
    if let Some(indent) = matches.get_one::<String>("indent") {
        loader = loader.set_override("markdown.tab_group_indentation", indent.as_str())?;
    }
    if matches.get_flag("escape-brackets") {
        loader = loader.set_override("markdown.always_escape_link_brackets", true)?;
    }
    if matches.get_flag("decode-urls") {
        loader = loader.set_override("links.decode_urls", true)?;
    }
    Ok(loader)
}

/// Handle the tabs command: snapshot → grouped lists → built-in format.
fn handle_tabs_command(path: &str, format_name: &str, list_type_name: &str, markdown: &Markdown) {
    let format: TabExportFormat = format_name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let list_type: ListType = list_type_name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let tab_lists = load_tab_lists(path, markdown);
    print!("{}", render_built_in(&tab_lists, format, list_type, markdown));
}

/// Handle the render command: snapshot → render input → user template.
fn handle_render_command(path: &str, template_path: &str, markdown: &Markdown) {
    let template = fs::read_to_string(template_path).unwrap_or_else(|e| {
        eprintln!("Error reading template '{template_path}': {e}");
        std::process::exit(1);
    });

    let custom_format = CustomFormat {
        context: Context::MultipleLinks,
        slot: "cli".to_string(),
        name: String::new(),
        template,
        show_in_menus: false,
    };

    let tab_lists = load_tab_lists(path, markdown);
    let input = make_render_input(&tab_lists);

    match custom_format.render(&input) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        }
    }
}

/// Read the snapshot file and group its tabs into contiguous runs.
fn load_tab_lists(path: &str, markdown: &Markdown) -> Vec<tabmark_core::TabList> {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let snapshot: TabSnapshot = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing snapshot '{path}': {e}");
        std::process::exit(1);
    });

    let (tabs, groups) = snapshot.into_domain(markdown);
    TabListGrouper::new(groups).collect_tabs_by_group(tabs)
}
