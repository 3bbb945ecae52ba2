use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use stylus_playground::{cli, handlers, logging, tui, Config, Runner, RunnerSettings};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load config
    let cfg = Config::load();
    if let Err(e) = logging::init(&cfg) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    log::debug!("config file {}", cfg.config_path.display());

    // CLI overrides config
    let mut settings = RunnerSettings::from_config(&cfg);
    if let Some(compiler) = args.compiler.clone() {
        settings.compiler = compiler;
    }
    if let Some(secs) = args.timeout {
        settings.timeout = Duration::from_secs(secs);
    }
    let runner = Runner::new(settings);

    // Catalog shortcuts
    if args.list {
        return handlers::list::list(args.json);
    }
    if let Some(name) = &args.show {
        handlers::list::show(name);
        return Ok(());
    }
    if let Some(name) = &args.explain {
        return handlers::list::explain(name);
    }

    // Headless runs
    if let Some(name) = &args.run {
        let example = handlers::list::find(name)?;
        return handlers::run::run(&runner, example.file, example.source()).await;
    }
    if let Some(path) = &args.file {
        let code = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        return handlers::run::run(&runner, &path.display().to_string(), &code).await;
    }

    let initial = args.example.unwrap_or_else(|| cfg.default_example());
    tui::run_tui(runner, &initial).await
}
