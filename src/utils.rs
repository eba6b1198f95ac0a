// Utility functions

/// Rounds a value to two decimal places (display precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean; an empty slice yields 0 rather than NaN.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(0.555), 0.56);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn mean_guards_empty_input() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[0.4, 0.4, 0.8]), 1.6 / 3.0);
    }
}
