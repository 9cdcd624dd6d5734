//! forex-calendar - today's economic releases from the weekly feed
//!
//! Fetches the calendar, decodes it, keeps today's high-impact events for
//! the configured country, and prints them as JSON on stdout.

use tracing::Instrument;

use forex_calendar::{
    fetch_calendar, feed_span, log_error, logging, Config, EventQuery, HttpFetcher, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Validate configuration
    config.validate()?;

    // Initialize logging/tracing
    logging::init_tracing(&config.app.log_level, &config.app.environment)?;

    // Log configuration
    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting forex-calendar");

    if let Err(e) = run(&config).await {
        log_error!(e, "Failed to load calendar", url = config.feed.url);
        return Err(e);
    }

    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let fetcher = HttpFetcher::from_config(&config.feed)?;

    let span = feed_span!(fetcher.url());
    let timer = logging::Timer::start("load_calendar");
    let events = fetch_calendar(&fetcher).instrument(span.clone()).await?;
    let elapsed = timer.stop();
    span.record("events", events.len());
    span.record("duration_ms", elapsed.as_millis() as u64);

    let selected = events
        .for_today()
        .by_country(&config.app.default_country)
        .high_impact();

    tracing::info!(
        total = events.len(),
        selected = selected.len(),
        country = %config.app.default_country,
        "Selected today's high-impact events"
    );

    println!("{}", serde_json::to_string_pretty(&selected)?);
    Ok(())
}
