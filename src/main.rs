mod analyzer;
mod classifier;
mod config;
mod feeds;
mod model;
mod normalizer;
mod orchestrator;
mod quotes;
mod utils;

use analyzer::SentimentAggregator;
use classifier::{Classifier, FallbackClassifier, HfClient};
use config::{load_config, AppConfig, SymbolConfig};
use futures::future::join_all;
use model::Channel;
use normalizer::normalize_all;
use orchestrator::AnalysisOrchestrator;
use quotes::{SnapshotProvider, StaticQuotes};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // Wire the pipeline: one shared inference client, keyword fallback on
    // top, aggregator and orchestrator over the same classifier.
    let hf = Arc::new(HfClient::new(&config.classifier));
    let classifier: Arc<dyn Classifier> = Arc::new(FallbackClassifier::new(hf.clone()));
    let aggregator = Arc::new(SentimentAggregator::new(classifier.clone()));
    let snapshots: Arc<dyn SnapshotProvider> = Arc::new(StaticQuotes::new());
    let analysis_orchestrator = Arc::new(AnalysisOrchestrator::new(
        classifier,
        snapshots,
        hf,
    ));

    info!("🚀 stock-pulse started!");

    // Main processing loop
    loop {
        info!("Entering main loop...");
        info!("Symbols to process: {}", config.symbols.len());

        // Process all symbols concurrently
        let tasks: Vec<_> = config
            .symbols
            .iter()
            .map(|symbol_cfg| {
                process_symbol(symbol_cfg, aggregator.clone(), analysis_orchestrator.clone())
            })
            .collect();
        join_all(tasks).await;

        info!("Waiting for timer ({}s)...", config.check_interval_seconds);
        sleep(Duration::from_secs(config.check_interval_seconds)).await;
        info!("Restarting main loop...");
    }
}

/// Processes a single symbol: builds the channel feeds, runs batch sentiment
/// aggregation and the orchestrated analysis concurrently, and logs both.
async fn process_symbol(
    symbol_cfg: &SymbolConfig,
    aggregator: Arc<SentimentAggregator>,
    orchestrator: Arc<AnalysisOrchestrator>,
) {
    info!("Processing symbol: {}", symbol_cfg.symbol);

    let mut channel_feeds = feeds::sample_feeds(&symbol_cfg.symbol);
    normalize_all(&mut channel_feeds);

    let (batch, analysis) = tokio::join!(
        aggregator.aggregate(&channel_feeds.reddit, &channel_feeds.tweets, &channel_feeds.news),
        orchestrator.analyze(&symbol_cfg.symbol, &symbol_cfg.query),
    );

    info!(
        "Batch sentiment for {}: overall = {:.2} | confidence = {:.2} | trending = {:?}",
        symbol_cfg.symbol, batch.overall, batch.confidence, batch.trending
    );
    for channel in Channel::ALL {
        info!("  {} avg = {:.2}", channel, batch.sources.get(channel));
    }

    info!(
        "Analysis for {}: sentiment = {:?} | rsi = {:.2} | macd = {} | recommendation = {:?}",
        symbol_cfg.symbol,
        analysis.sentiment,
        analysis.technical_indicators.rsi,
        analysis.technical_indicators.macd,
        analysis.recommendation
    );
    info!("  Prediction: {}", analysis.prediction);
    info!("  Summary: {}", analysis.summary);

    info!("Finished processing symbol: {}", symbol_cfg.symbol);
}
