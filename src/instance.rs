//! In-memory instance records
//!
//! An [`Instance`] is one mutable record of an entity type. Its fields are
//! addressed exclusively through [`FieldDescriptor`] accessors; an unset
//! field is simply absent. Reference-valued fields hold [`InstanceId`]s
//! rather than nested records, so instance identity survives pool
//! reordering (the many-to-many phase shuffles pools in place).

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::schema::{EntityId, FieldDescriptor};

/// Run-unique identity of a created instance, assigned on registration in
/// the pool. Stable for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Value held by one field of an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A scalar value produced by a value source
    Scalar(Value),
    /// A singular reference to another instance
    Reference(InstanceId),
    /// A one-to-many or many-to-many set of references
    Collection(Vec<InstanceId>),
}

/// One mutable record of an entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    entity: EntityId,
    values: HashMap<String, FieldValue>,
}

impl Instance {
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            values: HashMap::new(),
        }
    }

    pub fn entity(&self) -> &EntityId {
        &self.entity
    }

    pub fn get(&self, field: &FieldDescriptor) -> Option<&FieldValue> {
        self.values.get(field.name())
    }

    pub fn set(&mut self, field: &FieldDescriptor, value: FieldValue) {
        self.values.insert(field.name().to_string(), value);
    }

    pub fn is_set(&self, field: &FieldDescriptor) -> bool {
        self.values.contains_key(field.name())
    }

    /// The field's scalar value, if set with one.
    pub fn scalar(&self, field: &FieldDescriptor) -> Option<&Value> {
        match self.get(field) {
            Some(FieldValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// The field's singular reference, if set with one.
    pub fn reference(&self, field: &FieldDescriptor) -> Option<InstanceId> {
        match self.get(field) {
            Some(FieldValue::Reference(id)) => Some(*id),
            _ => None,
        }
    }

    /// The field's reference collection, if set with one.
    pub fn collection(&self, field: &FieldDescriptor) -> Option<&[InstanceId]> {
        match self.get(field) {
            Some(FieldValue::Collection(ids)) => Some(ids),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_absent() {
        let field = FieldDescriptor::text("name");
        let instance = Instance::new("user".into());

        assert!(!instance.is_set(&field));
        assert!(instance.get(&field).is_none());
        assert!(instance.scalar(&field).is_none());
    }

    #[test]
    fn set_and_read_back_by_descriptor() {
        let name = FieldDescriptor::text("name");
        let author = FieldDescriptor::singular_reference("author", "author");
        let mut instance = Instance::new("book".into());

        instance.set(&name, FieldValue::Scalar(json!("Dune")));
        instance.set(&author, FieldValue::Reference(InstanceId(7)));

        assert_eq!(instance.scalar(&name), Some(&json!("Dune")));
        assert_eq!(instance.reference(&author), Some(InstanceId(7)));
        // Accessor shape mismatch reads as unset, never panics.
        assert!(instance.collection(&author).is_none());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let author = FieldDescriptor::singular_reference("author", "author");
        let mut instance = Instance::new("book".into());

        instance.set(&author, FieldValue::Reference(InstanceId(1)));
        instance.set(&author, FieldValue::Reference(InstanceId(2)));

        assert_eq!(instance.reference(&author), Some(InstanceId(2)));
    }
}
