use clap::Parser;
use prizeboard::core::stats;
use prizeboard::utils::{logger, validation::Validate};
use prizeboard::{
    CliConfig, ConfigProvider, DashboardEngine, DateRangeController, FetchPhase,
    HttpEffectuationProvider, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting prizeboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A TOML file, when given, replaces the CLI's endpoint/filter/goal
    // settings; explicit --start/--end still apply on top.
    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            Box::new(toml_config)
        }
        None => {
            cli.validate()?;
            Box::new(cli.clone())
        }
    };

    // The clock is read once here, at the edge; core logic only ever sees
    // the injected date.
    let today = chrono::Local::now().date_naive();
    let mut range = DateRangeController::trailing_window_of(today, config.window_days());
    if cli.start.is_some() {
        range.set_start(cli.start);
    }
    if cli.end.is_some() {
        range.set_end(cli.end);
    }

    let provider = HttpEffectuationProvider::new(config.api_endpoint());
    let mut engine = DashboardEngine::new(provider, range, config.target());

    engine.refresh().await;

    match engine.phase() {
        FetchPhase::Failure => {
            let message = engine.error().unwrap_or("Unknown error");
            tracing::error!("Fetch failed: {}", message);
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
        phase => {
            tracing::debug!(?phase, "fetch finished");
        }
    }

    let summary = engine.summary();
    println!("Total effectuations: {}", summary.total_accepted_count);
    println!("Total prizes:        {:.2}", summary.total_prize_sum);
    println!("Target:              {:.2}", summary.target);
    println!();
    println!(
        "{:<30} {:>10} {:>14} {:>14}",
        "Consultant", "Count", "Total", "Average"
    );
    for record in engine.records() {
        let derived = stats::derived_stats(record);
        println!(
            "{:<30} {:>10} {:>14.2} {:>14.2}",
            record.name, record.accepted_count, derived.total, derived.average
        );
    }

    Ok(())
}
