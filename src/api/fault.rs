//! Optional failure injection for exercising client error paths.
//!
//! `TEST_ERROR_PROBABILITY` (a float in 0.0..=1.0) makes affected
//! endpoints fail with a simulated 500 at that rate. Unset or
//! unparsable means disabled.

use rand::Rng;

use super::ApiError;

const ENV_VAR: &str = "TEST_ERROR_PROBABILITY";

pub fn maybe_inject_error() -> Result<(), ApiError> {
    let probability = std::env::var(ENV_VAR)
        .ok()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);

    inject_with_probability(probability)
}

fn inject_with_probability(probability: f64) -> Result<(), ApiError> {
    if probability > 0.0 && rand::rng().random::<f64>() < probability {
        return Err(ApiError::internal(
            "Simulated API error for testing purposes",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_probability_never_fails() {
        for _ in 0..100 {
            assert!(inject_with_probability(0.0).is_ok());
        }
    }

    #[test]
    fn certain_probability_always_fails() {
        for _ in 0..100 {
            assert!(inject_with_probability(1.0).is_err());
        }
    }
}
