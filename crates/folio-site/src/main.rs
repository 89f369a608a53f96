//! Entry point for the portfolio desktop app.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_core::{Content, SiteConfig};
use folio_logging::{FolioLogBuilder, LogConfig};

use folio_site::components::App;
use folio_site::Site;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal portfolio with switchable color themes")]
struct Args {
    /// Directory for saved preferences and the resume file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level filter, e.g. "info" or "folio_core=debug"
    #[arg(short, long)]
    log_level: Option<String>,

    /// Also write rotating JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Skip the loading screen
    #[arg(long)]
    skip_intro: bool,

    /// Multiplier for every animation timer (2.0 is half speed)
    #[arg(long, default_value = "1.0")]
    timing_scale: f32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = match &args.log_dir {
        Some(dir) => LogConfig::production(dir.clone()),
        None => LogConfig::development(),
    };
    let mut logging = FolioLogBuilder::new().with_config(log_config);
    if let Some(level) = &args.log_level {
        logging = logging.with_level(level.clone());
    }
    // Keeps the file writer flushing until exit
    let _guard = logging.init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("folio: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let content = Content::embedded().context("Failed to load portfolio content")?;

    let mut config = SiteConfig::builder()
        .skip_intro(args.skip_intro)
        .timing_scale(args.timing_scale);
    if let Some(dir) = args.data_dir {
        config = config.data_dir(dir);
    }
    let config = config.build();

    tracing::info!(
        data_dir = %config.data_dir.display(),
        skip_intro = config.skip_intro,
        timing_scale = config.timing_scale,
        "Starting portfolio"
    );

    let title = format!("{} | {}", content.profile.full_name, content.profile.title);
    let description = content.profile.meta_description.clone();

    if !folio_site::install(Site { content, config }) {
        anyhow::bail!("Site was already installed");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1400, 900)),
                )
                .with_custom_head(format!(
                    r#"<meta name="description" content="{}"><style>{}</style>"#,
                    html_attr(&description),
                    STYLES_CSS
                )),
        )
        .launch(App);

    tracing::info!("Window closed");
    Ok(())
}

/// Escape a value for a double-quoted HTML attribute.
fn html_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["folio"]);
        assert!(args.data_dir.is_none());
        assert!(!args.skip_intro);
        assert_eq!(args.timing_scale, 1.0);
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "folio",
            "--data-dir",
            "/tmp/folio",
            "--skip-intro",
            "--timing-scale",
            "0.5",
            "-l",
            "warn",
        ]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert!(args.skip_intro);
        assert_eq!(args.timing_scale, 0.5);
        assert_eq!(args.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_html_attr_escapes_quotes() {
        assert_eq!(html_attr(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c>");
    }
}
