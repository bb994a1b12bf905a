//! Purely random value source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::schema::{EntityDescriptor, FieldDescriptor, FieldKind, ScalarType};

use super::{typed_value, ValueSource};

/// Type-driven random generation with short synthetic tokens for text.
///
/// Name-like fields get a field-name-prefixed token and email-like fields
/// an email-shaped one, so generated rows remain recognizable in a
/// database browser even without the semantic variant.
#[derive(Debug)]
pub struct RandomValueSource {
    rng: StdRng,
}

impl RandomValueSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn text_value(&mut self, field: &FieldDescriptor) -> String {
        let name = field.name().to_lowercase();
        if name.contains("email") {
            format!("user{}@example.com", self.rng.gen_range(0..1_000_000))
        } else if name.contains("name") {
            format!("{}-{}", field.name(), self.rng.gen_range(0..1_000_000))
        } else {
            format!("str{}", self.rng.gen_range(0..10_000))
        }
    }
}

impl Default for RandomValueSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for RandomValueSource {
    fn provide(
        &mut self,
        _entity: &EntityDescriptor,
        field: &FieldDescriptor,
        _index: usize,
    ) -> Option<Value> {
        let FieldKind::Scalar(scalar) = field.kind() else {
            return None;
        };
        match scalar {
            ScalarType::Text => Some(Value::from(self.text_value(field))),
            other => typed_value(&mut self.rng, other),
        }
    }
}
