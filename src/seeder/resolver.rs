//! Reference resolution phase
//!
//! Second pass over the pool that repairs singular references left unset
//! during creation because the target pool did not exist yet (cycles, or
//! types ordered later). If a target pool is still empty, a small fallback
//! batch is created first. This is a single pass, not a fixpoint: a
//! fallback instance's own unset references are picked up only by a later
//! call, which is safe because already-set references are never touched.

use rand::seq::SliceRandom;

use crate::error::SeedResult;
use crate::instance::FieldValue;
use crate::schema::{FieldDescriptor, FieldKind};
use crate::sink::PersistenceSink;

use super::Seeder;

impl<S: PersistenceSink> Seeder<S> {
    /// Fill every singular reference still unset, creating a fallback
    /// batch of `max(1, target / 10)` instances when the target pool is
    /// empty. Re-running the pass is idempotent. Flushes the sink at the
    /// end.
    pub fn fix_missing_references(&mut self) -> SeedResult<()> {
        let fallback = (self.target_count() / 10).max(1);
        let entities = self.pool.entity_types().to_vec();
        let mut repaired = 0usize;

        for entity in &entities {
            let reference_fields: Vec<FieldDescriptor> = match self.schema.get(entity) {
                Some(descriptor) => descriptor.singular_references().cloned().collect(),
                None => continue,
            };
            if reference_fields.is_empty() {
                continue;
            }

            let ids = self.pool.ids(entity).to_vec();
            for id in ids {
                for field in &reference_fields {
                    let FieldKind::SingularReference { target } = field.kind() else {
                        continue;
                    };
                    let target = target.clone();

                    let already_set = self
                        .pool
                        .instance(id)
                        .map_or(true, |instance| instance.is_set(field));
                    if already_set {
                        continue;
                    }

                    if self.pool.len(&target) == 0 {
                        if !self.schema.contains(&target) {
                            tracing::debug!(
                                entity = %entity,
                                field = field.name(),
                                target = %target,
                                "reference target not in catalog; leaving unset"
                            );
                            self.report.skipped_fields += 1;
                            continue;
                        }
                        tracing::info!(
                            target = %target,
                            count = fallback,
                            "creating fallback batch for empty pool"
                        );
                        self.ensure(&target, fallback);
                    }

                    match self.pool.ids(&target).choose(&mut self.rng).copied() {
                        Some(pick) => {
                            if let Some(instance) = self.pool.instance_mut(id) {
                                instance.set(field, FieldValue::Reference(pick));
                                repaired += 1;
                            }
                        }
                        None => {
                            // Fallback batch failed entirely; leave unset.
                            self.report.unresolved_references += 1;
                        }
                    }
                }
            }
        }

        tracing::info!(repaired, "reference resolution complete");
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::schema::{EntityDescriptor, EntityId, FieldDescriptor};
    use crate::sink::MemorySink;

    fn cyclic_catalog() -> Vec<EntityDescriptor> {
        vec![
            EntityDescriptor::new("a")
                .field(FieldDescriptor::text("name"))
                .field(FieldDescriptor::singular_reference("b", "b")),
            EntityDescriptor::new("b")
                .field(FieldDescriptor::text("name"))
                .field(FieldDescriptor::singular_reference("a", "a")),
        ]
    }

    fn seeder(catalog: Vec<EntityDescriptor>) -> Seeder<MemorySink> {
        Seeder::new(&catalog, SeedConfig::default(), MemorySink::new())
            .unwrap()
            .with_seed(23)
    }

    #[test]
    fn cyclic_references_are_repaired() {
        let mut seeder = seeder(cyclic_catalog()).with_target_count(5);
        seeder.create_all().unwrap();
        seeder.fix_missing_references().unwrap();

        let b_field = FieldDescriptor::singular_reference("b", "b");
        let a_field = FieldDescriptor::singular_reference("a", "a");
        for instance in seeder.pool().instances(&"a".into()) {
            assert!(instance.reference(&b_field).is_some());
        }
        for instance in seeder.pool().instances(&"b".into()) {
            assert!(instance.reference(&a_field).is_some());
        }
    }

    #[test]
    fn empty_target_pool_gets_a_fallback_batch() {
        let mut seeder = seeder(vec![
            EntityDescriptor::new("profile")
                .field(FieldDescriptor::singular_reference("user", "user")),
            EntityDescriptor::new("user").field(FieldDescriptor::text("name")),
        ])
        .with_target_count(40);

        // Only profiles exist; the user pool starts empty.
        seeder.ensure(&"profile".into(), 40);
        assert_eq!(seeder.pool().len(&"user".into()), 0);

        seeder.fix_missing_references().unwrap();

        // max(1, 40 / 10) fallback users, and every profile repaired.
        let user: EntityId = "user".into();
        assert_eq!(seeder.pool().len(&user), 4);
        let users = seeder.pool().ids(&user).to_vec();
        let field = FieldDescriptor::singular_reference("user", "user");
        for profile in seeder.pool().instances(&"profile".into()) {
            assert!(users.contains(&profile.reference(&field).unwrap()));
        }
    }

    #[test]
    fn fallback_batch_is_at_least_one() {
        let mut seeder = seeder(vec![
            EntityDescriptor::new("profile")
                .field(FieldDescriptor::singular_reference("user", "user")),
            EntityDescriptor::new("user"),
        ])
        .with_target_count(3);

        seeder.ensure(&"profile".into(), 3);
        seeder.fix_missing_references().unwrap();

        assert_eq!(seeder.pool().len(&"user".into()), 1);
    }

    #[test]
    fn rerunning_the_pass_changes_no_set_reference() {
        let mut seeder = seeder(cyclic_catalog()).with_target_count(6);
        seeder.create_all().unwrap();
        seeder.fix_missing_references().unwrap();

        let b_field = FieldDescriptor::singular_reference("b", "b");
        let before: Vec<_> = seeder
            .pool()
            .instances(&"a".into())
            .map(|i| i.reference(&b_field))
            .collect();

        seeder.fix_missing_references().unwrap();

        let after: Vec<_> = seeder
            .pool()
            .instances(&"a".into())
            .map(|i| i.reference(&b_field))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_target_type_is_skipped_and_counted() {
        let mut seeder = seeder(vec![EntityDescriptor::new("order")
            .field(FieldDescriptor::singular_reference("customer", "customer"))])
        .with_target_count(3);

        seeder.ensure(&"order".into(), 3);
        seeder.fix_missing_references().unwrap();

        assert_eq!(seeder.report().skipped_fields, 3);
        let field = FieldDescriptor::singular_reference("customer", "customer");
        for order in seeder.pool().instances(&"order".into()) {
            assert!(order.reference(&field).is_none());
        }
    }

    #[test]
    fn exhausted_fallback_counts_unresolved_references() {
        let catalog = vec![
            EntityDescriptor::new("profile")
                .field(FieldDescriptor::singular_reference("user", "user")),
            EntityDescriptor::new("user"),
        ];
        let mut sink = MemorySink::new();
        sink.reject("user");
        let mut seeder = Seeder::new(&catalog, SeedConfig::default(), sink)
            .unwrap()
            .with_seed(29)
            .with_target_count(5);

        seeder.ensure(&"profile".into(), 5);
        seeder.fix_missing_references().unwrap();

        assert_eq!(seeder.pool().len(&"user".into()), 0);
        assert_eq!(seeder.report().unresolved_references, 5);
    }
}
