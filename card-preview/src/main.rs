//! card-preview - Static card preview
//!
//! Renders a `Card` with the given options into a standalone HTML page, for
//! eyeballing styles or feeding a screenshot tool.

mod output;
mod render;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, info};

use render::PreviewConfig;

#[derive(Parser)]
#[command(name = "card-preview")]
struct Args {
    /// Where to write the page. `-` writes to stdout.
    #[arg(long, default_value = "card-preview.html", env = "CARD_PREVIEW_OUT")]
    out: PathBuf,

    /// Text placed inside the card.
    #[arg(long, default_value = "hello", env = "CARD_PREVIEW_TEXT")]
    text: String,

    /// Extra classes appended to the card's own.
    #[arg(long, default_value = "", env = "CARD_PREVIEW_CLASS")]
    class: String,

    /// Render without the drop shadow.
    #[arg(long)]
    no_shadow: bool,

    /// Stylesheet to link from the page, e.g. the Tailwind build.
    #[arg(long, env = "CARD_PREVIEW_STYLESHEET")]
    stylesheet: Option<String>,
}

impl From<Args> for PreviewConfig {
    fn from(args: Args) -> Self {
        Self {
            text: args.text,
            class: args.class,
            shadow: !args.no_shadow,
            stylesheet: args.stylesheet,
        }
    }
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stderr so `--out -` output stays clean
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();
    let args = Args::parse();
    let out = args.out.clone();
    let config = PreviewConfig::from(args);

    debug!("rendering preview with {config:?}");
    let document = render::render_document(&config);

    if let Err(e) = output::write_document(&out, &document) {
        error!("{e}");
        std::process::exit(1);
    }

    info!("wrote {} bytes to {}", document.len(), out.display());
}
