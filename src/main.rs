use chrono::Utc;
use clap::Parser;
use shift_scout::config::sink::emit_result;
use shift_scout::utils::{logger, validation::Validate};
use shift_scout::{ApiSource, CheckConfig, CheckResult, Checker, FileSink, PageSource, SourceKind};

#[tokio::main]
async fn main() {
    let config = CheckConfig::parse();

    logger::init_cli_logger(config.debug);

    tracing::info!(
        "[{}] shift-scout: restaurant={} pax={} months={} source={:?}",
        Utc::now().to_rfc3339(),
        config.restaurant_id,
        config.pax,
        config.months,
        config.source
    );
    if config.debug {
        tracing::debug!("config: {:?}", config);
    }

    let result = match config.validate() {
        Ok(()) => run_check(&config).await,
        Err(e) => {
            tracing::error!("configuration rejected: {}", e);
            CheckResult::unknown(config.pax, &e)
        }
    };

    report(&result);

    // The verdict travels through the output channel; a non-zero exit here
    // would abort the surrounding automation before it can react.
}

async fn run_check(config: &CheckConfig) -> CheckResult {
    let query = config.query();

    match config.source {
        SourceKind::Page => match PageSource::new(config.page_url.clone(), config.timeout_secs) {
            Ok(source) => {
                Checker::new(source, query)
                    .with_debug(config.debug)
                    .run()
                    .await
            }
            Err(e) => CheckResult::unknown(config.pax, &e),
        },
        SourceKind::Api => match ApiSource::new(config.api_url.clone(), config.timeout_secs) {
            Ok(source) => {
                Checker::new(source, query)
                    .with_debug(config.debug)
                    .run()
                    .await
            }
            Err(e) => CheckResult::unknown(config.pax, &e),
        },
    }
}

fn report(result: &CheckResult) {
    tracing::info!("verdict: {} ({})", result.verdict, result.reason);

    println!(
        "status={} available={} reason={}",
        result.verdict,
        if result.is_available() { "1" } else { "0" },
        result.reason
    );

    match FileSink::from_env() {
        Some(sink) => {
            if let Err(e) = emit_result(&sink, result) {
                tracing::warn!("failed to write automation output: {}", e);
            }
        }
        None => tracing::debug!("GITHUB_OUTPUT not set, skipping automation output"),
    }
}
