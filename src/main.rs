//! Wrapview - Render styled image/text sections as an embeddable HTML document.
//!
//! # Usage
//!
//! ```bash
//! wrapview sections.json > sections.html
//! wrapview --rtl --theme dark -o out.html sections.json
//! wrapview --watch -o out.html sections.json
//! wrapview --messages surface.jsonl sections.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use wrapview::app::{App, Message, Surface};
use wrapview::config::{
    BridgeMode, ConfigFlags, ThemeMode, clear_config_flags, global_config_path,
    load_config_flags, local_override_path, parse_flag_tokens, save_config_flags,
};
use wrapview::output::{OutputSurface, check_target};
use wrapview::section::{Section, load_sections};

/// How long a one-shot run waits for the remote section list.
const FETCH_WAIT: Duration = Duration::from_secs(30);

/// Render styled image/text sections as an embeddable HTML document
#[derive(Parser, Debug)]
#[command(name = "wrapview", version, about, long_about = None)]
struct Cli {
    /// JSON file holding a section array or {"sections": [...]}
    #[arg(value_name = "SECTIONS_JSON")]
    sections: PathBuf,

    /// Lay the document out right-to-left
    #[arg(long)]
    rtl: bool,

    /// Disable theme-aware text colors
    #[arg(long)]
    no_dark_mode: bool,

    /// Platform color scheme (auto reads WRAPVIEW_THEME, then COLORFGBG)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Fetch sections from this URL at startup, replacing the file content
    /// (with --watch, later edits to the file replace them again)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Message bridge used by the generated document
    #[arg(long, value_enum, default_value = "native")]
    bridge: BridgeMode,

    /// Write the document here instead of stdout (required with --watch)
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Regenerate the document whenever the sections file changes
    #[arg(short, long)]
    watch: bool,

    /// Replay surface messages (one JSON object per line) and print clicked sections
    #[arg(long, value_name = "PATH")]
    messages: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Clicked sections go to stdout only when the document does not.
fn click_printer(document_on_stdout: bool) -> impl FnMut(&Section) {
    move |section| match serde_json::to_string(section) {
        Ok(json) if document_on_stdout => eprintln!("{json}"),
        Ok(json) => println!("{json}"),
        Err(err) => tracing::warn!(%err, "could not encode clicked section"),
    }
}

fn replay_messages(app: &mut App, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read messages {}", path.display()))?;
    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        app.dispatch(Message::SurfaceMessage(line.to_string()));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let sections = load_sections(&cli.sections)?;
    let scheme = effective.theme.unwrap_or(cli.theme).color_scheme();
    let bridge = effective.bridge.unwrap_or(cli.bridge);
    let api_url = effective.api_url.clone().or(cli.api_url);
    let waits_for_fetch = api_url.is_some();

    check_target(cli.out.as_deref(), effective.watch)?;
    let document_on_stdout = cli.out.is_none();
    let surface = OutputSurface::new(cli.out);
    let pending = surface.pending();

    let mut app = App::new(surface)
        .with_sections(sections)
        .with_api_url(api_url)
        .with_rtl(effective.rtl)
        .with_dark_mode(!effective.no_dark_mode)
        .with_color_scheme(scheme)
        .with_bridge(bridge.into())
        .with_watch(effective.watch.then(|| cli.sections.clone()))
        .on_item_click(click_printer(document_on_stdout));

    app.mount();
    if waits_for_fetch && !app.process_next(FETCH_WAIT) {
        tracing::warn!("no response from remote section source");
    }
    if let Some(path) = &cli.messages {
        replay_messages(&mut app, path)?;
    }

    if effective.watch {
        app.run().context("Application error")?;
    }

    pending
        .write_to(std::io::stdout().lock())
        .context("Failed to write document to stdout")?;
    Ok(())
}
