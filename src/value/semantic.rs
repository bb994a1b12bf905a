//! Semantically-aware value source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::schema::{EntityDescriptor, FieldDescriptor, FieldKind, ScalarType};

use super::text::{EnglishText, TextGenerator};
use super::{typed_value, ValueSource};

/// Infers realistic text from field-name heuristics, falling back to the
/// same type-driven generation as the random variant.
///
/// The name match is case-insensitive on substrings, checked in a fixed
/// order so `firstName` hits the first-name rule before the generic name
/// rule.
pub struct SemanticValueSource {
    rng: StdRng,
    text: Box<dyn TextGenerator>,
}

impl SemanticValueSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            text: Box::new(EnglishText::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            text: Box::new(EnglishText::with_seed(seed.wrapping_add(1))),
        }
    }

    /// Replace the realistic-text generator.
    pub fn with_text_generator(mut self, text: Box<dyn TextGenerator>) -> Self {
        self.text = text;
        self
    }

    fn text_value(&mut self, field: &FieldDescriptor) -> String {
        let name = field.name().to_lowercase();

        if name.contains("email") {
            self.text.email()
        } else if name.contains("first") && name.contains("name") {
            self.text.first_name()
        } else if name.contains("last") && name.contains("name") {
            self.text.last_name()
        } else if name.contains("name") {
            self.text.full_name()
        } else if name.contains("phone") {
            self.text.phone()
        } else if name.contains("address") {
            self.text.address()
        } else if name.contains("company") {
            self.text.company()
        } else if name.contains("title") {
            self.text.title()
        } else if name.contains("description") || name.contains("desc") {
            self.text.sentence()
        } else if name.contains("category") {
            self.text.category()
        } else if name.contains("product") {
            self.text.product()
        } else {
            format!("{}-{}", self.text.word(), self.rng.gen_range(0..10_000))
        }
    }
}

impl Default for SemanticValueSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for SemanticValueSource {
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
