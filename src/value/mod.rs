//! Scalar value sources
//!
//! A [`ValueSource`] supplies the value for one scalar field of one new
//! instance. Returning `None` means the field is left unset; unknown or
//! unsupported field shapes must produce `None` rather than an error.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::config::ValueSourceKind;
use crate::schema::{EntityDescriptor, FieldDescriptor, ScalarType};

pub mod random;
pub mod semantic;
pub mod text;

pub use random::RandomValueSource;
pub use semantic::SemanticValueSource;
pub use text::{EnglishText, TextGenerator};

/// Supplies scalar values during instance creation.
pub trait ValueSource {
    /// Provide a value for `field` of a new `entity` instance; `index` is
    /// the creation index within the current top-up. `None` leaves the
    /// field unset.
    fn provide(
        &mut self,
        entity: &EntityDescriptor,
        field: &FieldDescriptor,
        index: usize,
    ) -> Option<Value>;
}

impl ValueSourceKind {
    /// Build the configured variant, optionally with a fixed seed for
    /// reproducible runs.
    pub fn build(self, seed: Option<u64>) -> Box<dyn ValueSource> {
        match (self, seed) {
            (ValueSourceKind::Random, Some(seed)) => Box::new(RandomValueSource::with_seed(seed)),
            (ValueSourceKind::Random, None) => Box::new(RandomValueSource::new()),
            (ValueSourceKind::Semantic, Some(seed)) => {
                Box::new(SemanticValueSource::with_seed(seed))
            }
            (ValueSourceKind::Semantic, None) => Box::new(SemanticValueSource::new()),
        }
    }
}

/// Type-driven fallback generation shared by both variants: numbers get
/// uniform magnitudes, dates a uniform recent past, booleans a coin flip,
/// enumerations a uniform pick. Text is variant-specific and handled by
/// the caller; anything else is unsupported and reads as `None`.
pub(crate) fn typed_value(rng: &mut StdRng, scalar: &ScalarType) -> Option<Value> {
    match scalar {
        ScalarType::Text => None,
        ScalarType::Integer => Some(Value::from(rng.gen_range(0..1000_i64))),
        ScalarType::BigInt => Some(Value::from(rng.gen_range(0..100_000_i64))),
        ScalarType::Float => {
            // Two-decimal magnitudes in [0, 100.00]
            let value = rng.gen_range(0.0..10_000.0_f64).round() / 100.0;
            Some(Value::from(value))
        }
        ScalarType::Boolean => Some(Value::from(rng.gen_bool(0.5))),
        ScalarType::Date => {
            let date = Utc::now().date_naive() - Duration::days(rng.gen_range(0..3650));
            Some(Value::from(date.format("%Y-%m-%d").to_string()))
        }
        ScalarType::DateTime => {
            let stamp = Utc::now()
                - Duration::days(rng.gen_range(0..365))
                - Duration::seconds(rng.gen_range(0..86_400));
            Some(Value::from(stamp.to_rfc3339()))
        }
        ScalarType::Uuid => Some(Value::from(uuid::Uuid::new_v4().to_string())),
        ScalarType::Enum(values) => values
            .choose(rng)
            .map(|value| Value::from(value.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn typed_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let int = typed_value(&mut rng, &ScalarType::Integer).unwrap();
            assert!((0..1000).contains(&int.as_i64().unwrap()));

            let big = typed_value(&mut rng, &ScalarType::BigInt).unwrap();
            assert!((0..100_000).contains(&big.as_i64().unwrap()));

            let float = typed_value(&mut rng, &ScalarType::Float).unwrap();
            let float = float.as_f64().unwrap();
            assert!((0.0..=100.0).contains(&float));
        }
    }

    #[test]
    fn enum_picks_a_declared_value() {
        let mut rng = StdRng::seed_from_u64(6);
        let scalar = ScalarType::Enum(vec!["draft".into(), "published".into()]);
        for _ in 0..20 {
            let value = typed_value(&mut rng, &scalar).unwrap();
            assert!(matches!(value.as_str(), Some("draft" | "published")));
        }
    }

    #[test]
    fn empty_enum_is_absent() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(typed_value(&mut rng, &ScalarType::Enum(vec![])).is_none());
    }

    #[test]
    fn dates_are_in_the_past() {
        let mut rng = StdRng::seed_from_u64(8);
        let stamp = typed_value(&mut rng, &ScalarType::DateTime).unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(stamp.as_str().unwrap()).unwrap();
        assert!(parsed.with_timezone(&Utc) <= Utc::now());
    }
}
