use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rotator::carousel::{RotationController, ScriptedIntent};
use rotator::config::CarouselConfig;
use rotator::constants::*;
use rotator::headless::{self, LogPresenter};
use rotator::portfolio::{Category, CategoryFilter, ProjectModal, categories, default_projects};
use rotator::testimonial::Testimonial;
use rotator::timer::FrameClock;

#[derive(Parser)]
#[command(name = "rotator")]
#[command(about = "Testimonials carousel for the Building Construction Concepts Ltd site", long_about = None)]
struct Cli {
    /// TOML file with `autoplay_speed_ms` and `[[testimonials]]`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the autoplay interval, in milliseconds
    #[arg(long, global = true)]
    autoplay_speed_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate the frame loop without a window and log every change
    Headless {
        /// Number of frames to simulate
        #[arg(long, default_value_t = DEFAULT_HEADLESS_FRAMES)]
        frames: u64,

        /// Intent to dispatch on a frame, e.g. `120:next`, `300:prev`, `400:jump:2`
        #[arg(long = "intent")]
        intents: Vec<ScriptedIntent>,
    },

    /// Show the carousel in a window (left/right arrows, 1-9, click a dot)
    #[cfg(feature = "window")]
    Window,

    /// List portfolio projects, optionally for one category
    Portfolio {
        /// Category tab to show; `all` shows every project
        #[arg(long, default_value = "all")]
        category: Category,

        /// Print the detail view for this project id
        #[arg(long)]
        open: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = cli.command.unwrap_or(Command::Headless {
        frames: DEFAULT_HEADLESS_FRAMES,
        intents: Vec::new(),
    });

    match command {
        Command::Headless { frames, intents } => {
            let mut controller = load_carousel(cli.config.as_ref(), cli.autoplay_speed_ms)?;
            controller.set_presenter(LogPresenter::new());

            let summary = headless::run(&mut controller, frames, &intents);
            info!(
                frames = summary.frames,
                advances = summary.autoplay_advances,
                final_index = summary.final_index,
                autoplay = summary.autoplay_enabled,
                "headless run finished"
            );
        }
        #[cfg(feature = "window")]
        Command::Window => {
            let controller = load_carousel(cli.config.as_ref(), cli.autoplay_speed_ms)?;
            rotator::window::run(controller);
        }
        Command::Portfolio { category, open } => show_portfolio(category, open.as_deref()),
    }

    Ok(())
}

fn load_carousel(
    config_path: Option<&PathBuf>,
    autoplay_speed_ms: Option<u64>,
) -> Result<RotationController<Testimonial>> {
    let config = match config_path {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("Error loading carousel config from '{}'", path.display()))?,
        None => CarouselConfig::default(),
    };

    let mut options = config.options();
    if let Some(ms) = autoplay_speed_ms {
        options.autoplay_speed = Some(Duration::from_millis(ms));
    }

    let items = config.items().context("No testimonials to rotate")?;
    Ok(RotationController::mount(items, options, FrameClock::new()))
}

fn show_portfolio(category: Category, open: Option<&str>) {
    let projects = default_projects();

    let tabs: Vec<String> = categories(&projects).iter().map(ToString::to_string).collect();
    info!("tabs: {}", tabs.join(" | "));

    let mut filter = CategoryFilter::new();
    filter.select(category);
    let shown = filter.apply(&projects);
    if shown.is_empty() {
        warn!(category = %filter.active(), "no projects in this category");
    }
    for project in shown {
        info!(
            id = %project.id,
            category = %project.category,
            client = %project.client,
            completed = %project.completion_date,
            "{}",
            project.title
        );
    }

    if let Some(id) = open {
        let mut modal = ProjectModal::new();
        modal.open(id);
        match modal.detail_text(&projects) {
            Some(text) => info!("{text}"),
            None => warn!(id, "no project with this id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn about_names_the_company() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Testimonials carousel for the Building Construction Concepts Ltd site")
        );
    }

    #[test]
    fn portfolio_open_parses() {
        let cli = Cli::try_parse_from(["rotator", "portfolio", "--open", "1"]).expect("parses");
        match cli.command {
            Some(Command::Portfolio { category, open }) => {
                assert_eq!(category, Category::All);
                assert_eq!(open.as_deref(), Some("1"));
            }
            _ => panic!("expected the portfolio subcommand"),
        }
    }
}
