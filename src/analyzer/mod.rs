// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod decision;
pub mod market_indicators;
pub mod sentiment;

// Re-export the main entry points for ease of use.
pub use decision::DecisionEngine;
pub use market_indicators::IndicatorEngine;
pub use sentiment::SentimentAggregator;
