use crate::model::{MacdSignal, PriceSnapshot, TechnicalIndicators};

// The oscillator is centered at 50 and moves 2 points per percent of change.
const RSI_BASE: f64 = 50.0;
const RSI_SENSITIVITY: f64 = 2.0;

// Fixed 5% band around the current price.
const SUPPORT_RATIO: f64 = 0.95;
const RESISTANCE_RATIO: f64 = 1.05;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Derives indicators from one snapshot. Pure function: same snapshot,
    /// same result.
    pub fn derive(snapshot: &PriceSnapshot) -> TechnicalIndicators {
        let rsi = (RSI_BASE + RSI_SENSITIVITY * snapshot.change_percent).clamp(0.0, 100.0);

        // Strict sign check: zero change counts as bearish.
        let macd = if snapshot.change_percent > 0.0 {
            MacdSignal::BullishCrossover
        } else {
            MacdSignal::BearishCrossover
        };

        TechnicalIndicators {
            rsi,
            macd,
            support: snapshot.price * SUPPORT_RATIO,
            resistance: snapshot.price * RESISTANCE_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_positive_change() {
        let snapshot = PriceSnapshot {
            price: 2456.75,
            change_percent: 1.41,
        };
        let indicators = IndicatorEngine::derive(&snapshot);

        assert!((indicators.rsi - 52.82).abs() < 1e-9);
        assert_eq!(indicators.macd, MacdSignal::BullishCrossover);
        assert!((indicators.support - 2333.9125).abs() < 1e-9);
        assert!((indicators.resistance - 2579.5875).abs() < 1e-9);
    }

    #[test]
    fn rsi_clamps_to_canonical_range() {
        let crash = IndicatorEngine::derive(&PriceSnapshot {
            price: 100.0,
            change_percent: -40.0,
        });
        assert_eq!(crash.rsi, 0.0);

        let melt_up = IndicatorEngine::derive(&PriceSnapshot {
            price: 100.0,
            change_percent: 40.0,
        });
        assert_eq!(melt_up.rsi, 100.0);
    }

    #[test]
    fn zero_change_is_bearish() {
        let flat = IndicatorEngine::derive(&PriceSnapshot {
            price: 1000.0,
            change_percent: 0.0,
        });
        assert_eq!(flat.macd, MacdSignal::BearishCrossover);
        assert_eq!(flat.rsi, 50.0);
    }

    #[test]
    fn band_brackets_the_price() {
        let snapshot = PriceSnapshot {
            price: 1634.50,
            change_percent: 1.44,
        };
        let indicators = IndicatorEngine::derive(&snapshot);
        assert!(indicators.support < snapshot.price);
        assert!(snapshot.price < indicators.resistance);
    }

    #[test]
    fn derivation_is_idempotent() {
        let snapshot = PriceSnapshot {
            price: 3678.90,
            change_percent: -1.22,
        };
        assert_eq!(
            IndicatorEngine::derive(&snapshot),
            IndicatorEngine::derive(&snapshot)
        );
    }
}
