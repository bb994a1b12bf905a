//! Cycle-tolerant creation ordering
//!
//! Entity types are peeled off in rounds of "currently dependency-free"
//! types (Kahn-style), where a dependency is another type reachable
//! through a singular-reference field. Self-references never count. When a
//! round removes nothing, the remaining types form one or more cycles and
//! are appended wholesale; cycles are tolerated, not rejected, because the
//! second reference-resolution pass repairs what creation order cannot.

use std::collections::{HashMap, HashSet};

use crate::schema::{EntityId, Schema};

/// Linear creation order over the catalog's entity types.
///
/// Every type appears exactly once; for any acyclic dependency a type
/// appears after all its dependencies. Ties and the cycle remainder keep
/// catalog declaration order, so the result is deterministic.
pub fn creation_order(schema: &Schema) -> Vec<EntityId> {
    let mut deps: HashMap<&EntityId, HashSet<&EntityId>> = HashMap::new();
    for entity in schema.entities() {
        let mut set = HashSet::new();
        for field in entity.singular_references() {
            if let Some(target) = field.reference_target() {
                if target != entity.id() && schema.contains(target) {
                    set.insert(target);
                }
            }
        }
        deps.insert(entity.id(), set);
    }

    let mut result = Vec::with_capacity(schema.len());
    let mut remaining: Vec<&EntityId> = schema.entities().map(|e| e.id()).collect();
    let mut remaining_set: HashSet<&EntityId> = remaining.iter().copied().collect();

    while !remaining.is_empty() {
        let free: Vec<&EntityId> = remaining
            .iter()
            .copied()
            .filter(|id| {
                deps.get(id)
                    .map_or(true, |set| set.iter().all(|dep| !remaining_set.contains(dep)))
            })
            .collect();

        if free.is_empty() {
            // Only cycles remain; append them in declaration order.
            result.extend(remaining.iter().map(|id| (*id).clone()));
            break;
        }

        for id in &free {
            result.push((*id).clone());
            remaining_set.remove(id);
        }
        remaining.retain(|id| remaining_set.contains(id));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EntityDescriptor, FieldDescriptor};

    fn schema_of(entities: Vec<EntityDescriptor>) -> Schema {
        Schema::new(entities).unwrap()
    }

    fn position(order: &[EntityId], name: &str) -> usize {
        order.iter().position(|id| id.as_str() == name).unwrap()
    }

    #[test]
    fn dependencies_come_before_dependents() {
        let schema = schema_of(vec![
            EntityDescriptor::new("book")
                .field(FieldDescriptor::singular_reference("author", "author")),
            EntityDescriptor::new("author").field(FieldDescriptor::text("name")),
            EntityDescriptor::new("review")
                .field(FieldDescriptor::singular_reference("book", "book")),
        ]);

        let order = creation_order(&schema);
        assert_eq!(order.len(), 3);
        assert!(position(&order, "author") < position(&order, "book"));
        assert!(position(&order, "book") < position(&order, "review"));
    }

    #[test]
    fn cycle_terminates_with_every_type_once() {
        let schema = schema_of(vec![
            EntityDescriptor::new("a").field(FieldDescriptor::singular_reference("b", "b")),
            EntityDescriptor::new("b").field(FieldDescriptor::singular_reference("c", "c")),
            EntityDescriptor::new("c").field(FieldDescriptor::singular_reference("a", "a")),
        ]);

        let order = creation_order(&schema);
        assert_eq!(order.len(), 3);
        let unique: std::collections::HashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn self_reference_is_not_a_dependency() {
        let schema = schema_of(vec![EntityDescriptor::new("employee")
            .field(FieldDescriptor::singular_reference("manager", "employee"))]);

        let order = creation_order(&schema);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn acyclic_part_is_ordered_even_next_to_a_cycle() {
        let schema = schema_of(vec![
            EntityDescriptor::new("x").field(FieldDescriptor::singular_reference("y", "y")),
            EntityDescriptor::new("y").field(FieldDescriptor::singular_reference("x", "x")),
            EntityDescriptor::new("leaf"),
            EntityDescriptor::new("user")
                .field(FieldDescriptor::singular_reference("leaf", "leaf")),
        ]);

        let order = creation_order(&schema);
        assert_eq!(order.len(), 4);
        assert!(position(&order, "leaf") < position(&order, "user"));
    }

    #[test]
    fn collection_and_many_to_many_fields_impose_no_order() {
        let schema = schema_of(vec![
            EntityDescriptor::new("author")
                .field(FieldDescriptor::collection("books", "book"))
                .field(FieldDescriptor::many_to_many("friends", "author")),
            EntityDescriptor::new("book"),
        ]);

        let order = creation_order(&schema);
        // Declaration order survives since neither field kind is a dependency.
        assert_eq!(position(&order, "author"), 0);
        assert_eq!(position(&order, "book"), 1);
    }

    #[test]
    fn dependency_on_a_type_outside_the_catalog_is_ignored() {
        let schema = schema_of(vec![EntityDescriptor::new("order")
            .field(FieldDescriptor::singular_reference("customer", "customer"))]);

        let order = creation_order(&schema);
        assert_eq!(order.len(), 1);
    }
}
