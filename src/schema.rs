//! Entity and field metadata
//!
//! The seeder never inspects runtime types. Everything it knows about the
//! data model comes from [`EntityDescriptor`]s supplied once by the
//! integration layer: each field carries an explicit relationship-kind tag
//! and, for reference kinds, the target entity type. A [`Schema`] is the
//! validated, immutable catalog for one seeding run.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SeedError, SeedResult};

/// Identity of an entity type within a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Declared type of a scalar field, driving value generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    Text,
    Integer,
    BigInt,
    Float,
    Boolean,
    Date,
    DateTime,
    Uuid,
    /// Enumeration over a fixed set of declared values
    Enum(Vec<String>),
}

/// Relationship-kind tag for a field.
///
/// `Identity` fields are auto-generated by the persistence layer and never
/// set by the seeder. `SingularReference` covers both one-to-one and
/// many-to-one cardinalities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarType),
    Identity,
    SingularReference { target: EntityId },
    CollectionReference { element: EntityId },
    ManyToManyReference { target: EntityId },
}

/// Metadata for one field of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Text))
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Integer))
    }

    pub fn big_integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::BigInt))
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Float))
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Boolean))
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Date))
    }

    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::DateTime))
    }

    pub fn uuid(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarType::Uuid))
    }

    pub fn enumeration(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(name, FieldKind::Scalar(ScalarType::Enum(values)))
    }

    pub fn identity(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Identity)
    }

    pub fn singular_reference(name: impl Into<String>, target: impl Into<EntityId>) -> Self {
        Self::new(
            name,
            FieldKind::SingularReference {
                target: target.into(),
            },
        )
    }

    pub fn collection(name: impl Into<String>, element: impl Into<EntityId>) -> Self {
        Self::new(
            name,
            FieldKind::CollectionReference {
                element: element.into(),
            },
        )
    }

    pub fn many_to_many(name: impl Into<String>, target: impl Into<EntityId>) -> Self {
        Self::new(
            name,
            FieldKind::ManyToManyReference {
                target: target.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Target entity type for singular-reference fields.
    pub fn reference_target(&self) -> Option<&EntityId> {
        match &self.kind {
            FieldKind::SingularReference { target } => Some(target),
            _ => None,
        }
    }
}

/// Metadata for one entity type: its identity plus fields in declaration
/// order. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    id: EntityId,
    fields: Vec<FieldDescriptor>,
}

impl EntityDescriptor {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; declaration order is preserved.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Singular-reference fields only, in declaration order.
    pub fn singular_references(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::SingularReference { .. }))
    }
}

/// Source of entity type descriptors for a run.
pub trait SchemaCatalog {
    fn entity_types(&self) -> Vec<EntityDescriptor>;
}

impl SchemaCatalog for Vec<EntityDescriptor> {
    fn entity_types(&self) -> Vec<EntityDescriptor> {
        self.clone()
    }
}

impl SchemaCatalog for [EntityDescriptor] {
    fn entity_types(&self) -> Vec<EntityDescriptor> {
        self.to_vec()
    }
}

/// Validated catalog of entity descriptors, in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    entities: Vec<EntityDescriptor>,
    index: HashMap<EntityId, usize>,
}

impl Schema {
    pub fn new(entities: Vec<EntityDescriptor>) -> SeedResult<Self> {
        let mut index = HashMap::with_capacity(entities.len());
        for (pos, entity) in entities.iter().enumerate() {
            if index.insert(entity.id().clone(), pos).is_some() {
                return Err(SeedError::Schema(format!(
                    "duplicate entity type '{}'",
                    entity.id()
                )));
            }
        }
        Ok(Self { entities, index })
    }

    pub fn from_catalog(catalog: &dyn SchemaCatalog) -> SeedResult<Self> {
        Self::new(catalog.entity_types())
    }

    pub fn get(&self, id: &EntityId) -> Option<&EntityDescriptor> {
        self.index.get(id).map(|&pos| &self.entities[pos])
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.index.contains_key(id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_preserved() {
        let entity = EntityDescriptor::new("user")
            .field(FieldDescriptor::identity("id"))
            .field(FieldDescriptor::text("email"))
            .field(FieldDescriptor::integer("age"));

        let names: Vec<&str> = entity.fields().map(FieldDescriptor::name).collect();
        assert_eq!(names, vec!["id", "email", "age"]);
    }

    #[test]
    fn singular_references_filters_other_kinds() {
        let entity = EntityDescriptor::new("book")
            .field(FieldDescriptor::text("title"))
            .field(FieldDescriptor::singular_reference("author", "author"))
            .field(FieldDescriptor::many_to_many("tags", "tag"));

        let refs: Vec<&str> = entity
            .singular_references()
            .map(FieldDescriptor::name)
            .collect();
        assert_eq!(refs, vec!["author"]);
    }

    #[test]
    fn field_named_finds_declared_fields_only() {
        let entity = EntityDescriptor::new("book")
            .field(FieldDescriptor::text("title"))
            .field(FieldDescriptor::singular_reference("author", "author"));

        let author = entity.field_named("author").unwrap();
        assert_eq!(author.reference_target(), Some(&"author".into()));
        assert!(entity.field_named("isbn").is_none());
    }

    #[test]
    fn schema_rejects_duplicate_entity_types() {
        let result = Schema::new(vec![
            EntityDescriptor::new("user"),
            EntityDescriptor::new("user"),
        ]);
        assert!(matches!(result, Err(SeedError::Schema(_))));
    }

    #[test]
    fn schema_lookup_by_id() {
        let schema = Schema::new(vec![
            EntityDescriptor::new("user").field(FieldDescriptor::text("name")),
            EntityDescriptor::new("post"),
        ])
        .unwrap();

        assert!(schema.contains(&"user".into()));
        assert!(schema.get(&"post".into()).is_some());
        assert!(schema.get(&"comment".into()).is_none());
    }
}
