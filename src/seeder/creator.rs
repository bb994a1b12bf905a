//! Instance creation phase
//!
//! Creates every type's instances in dependency order, assigning scalar
//! values from the value source and best-effort singular references from
//! whatever target pools already exist. Reference repair for the leftovers
//! happens in the resolution phase.

use rand::seq::SliceRandom;

use crate::error::SeedResult;
use crate::instance::{FieldValue, Instance};
use crate::schema::{EntityDescriptor, EntityId, FieldKind};
use crate::sink::PersistenceSink;

use super::order::creation_order;
use super::Seeder;

impl<S: PersistenceSink> Seeder<S> {
    /// Create instances for every catalog type in dependency order, then
    /// flush the sink.
    pub fn create_all(&mut self) -> SeedResult<()> {
        let order = creation_order(self.schema());
        let target = self.target_count();

        for entity in order {
            self.ensure(&entity, target);
        }

        tracing::info!(total = self.pool().total(), "creation phase complete");
        self.sink_mut().flush()
    }

    /// Idempotent top-up: create instances of `entity` until its pool
    /// holds `target` of them. Does nothing when the pool is already big
    /// enough. Per-instance persist failures are counted and skipped.
    pub fn ensure(&mut self, entity: &EntityId, target: usize) {
        let descriptor = match self.schema().get(entity) {
            Some(descriptor) => descriptor.clone(),
            None => {
                tracing::warn!(entity = %entity, "entity type not in catalog; skipping");
                return;
            }
        };

        self.report.touch(entity);
        let missing = target.saturating_sub(self.pool.len(entity));

        for index in 0..missing {
            let instance = self.build_instance(&descriptor, index);
            match self.sink.persist(&instance) {
                Ok(()) => {
                    self.pool.insert(instance);
                    self.report.record_created(entity);
                }
                Err(err) => {
                    tracing::debug!(entity = %entity, %err, "failed to create instance");
                    self.report.record_failure(entity);
                }
            }
        }
    }

    /// Populate a fresh instance field by field in declaration order.
    /// Identity fields are left to the sink; collection-valued fields are
    /// filled by later phases; singular references pick randomly from the
    /// target pool when one exists.
    fn build_instance(&mut self, descriptor: &EntityDescriptor, index: usize) -> Instance {
        let mut instance = Instance::new(descriptor.id().clone());

        for field in descriptor.fields() {
            match field.kind() {
                FieldKind::Identity
                | FieldKind::CollectionReference { .. }
                | FieldKind::ManyToManyReference { .. } => {}
                FieldKind::SingularReference { target } => {
                    if let Some(pick) = self.pool.ids(target).choose(&mut self.rng) {
                        instance.set(field, FieldValue::Reference(*pick));
                    }
                }
                FieldKind::Scalar(_) => {
                    if let Some(value) = self.source.provide(descriptor, field, index) {
                        instance.set(field, FieldValue::Scalar(value));
                    }
                }
            }
        }

        instance
    }
}
