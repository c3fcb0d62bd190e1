mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::actions::{load_projects, spawn_stats_fetch};
use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use portfolio_tui::config::init_app_config;
use std::fs::File;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let interactive = !args.headless && is_terminal();
    init_logging(&args, interactive)?;

    let config = init_app_config()?;
    let projects = load_projects(&config.site.projects_url)
        .await
        .unwrap_or_default();

    if !interactive {
        return event::run_headless(
            projects,
            &config.site.page_heading,
            args.query.as_deref(),
            args.year.as_deref(),
            args.json,
        );
    }

    let stats_rx = spawn_stats_fetch(config.site.github_user.clone());
    let mut app = App::new(config);
    app.load(projects);
    app.apply_startup_filter(args.query.as_deref(), args.year.as_deref());
    app.stats_pending = true;

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, stats_rx).await;
    terminal::cleanup(true, true);

    result
}

/// Headless runs log to stderr. The UI owns the terminal, so interactive
/// runs only log when `--log-file` names a destination.
fn init_logging(args: &CliArgs, interactive: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()));

    match (&args.log_file, interactive) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        (None, true) => {
            builder.target(env_logger::Target::Pipe(Box::new(std::io::sink())));
        }
        (None, false) => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
