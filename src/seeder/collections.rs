//! Collection and many-to-many linking phases
//!
//! One-to-many collections are never generated directly: each parent's
//! collection is derived by inverting the singular back-references on the
//! child side, recomputed from the references' current state so both
//! directions agree for all parents simultaneously. Many-to-many fields
//! get an independently chosen bounded random subset of the target pool.

use rand::Rng;

use crate::error::SeedResult;
use crate::instance::FieldValue;
use crate::schema::{EntityId, FieldDescriptor, FieldKind};
use crate::sink::PersistenceSink;

use super::Seeder;

impl<S: PersistenceSink> Seeder<S> {
    /// Derive every one-to-many collection by scanning the child pool for
    /// instances whose singular back-reference equals the parent. Flushes
    /// the sink at the end.
    pub fn populate_collections(&mut self) -> SeedResult<()> {
        let entities = self.pool.entity_types().to_vec();

        for parent_entity in &entities {
            let Some(descriptor) = self.schema.get(parent_entity).cloned() else {
                continue;
            };

            for field in descriptor.fields() {
                let FieldKind::CollectionReference { element } = field.kind() else {
                    continue;
                };

                let Some(back_references) = self.back_references(element, parent_entity) else {
                    tracing::debug!(
                        entity = %parent_entity,
                        field = field.name(),
                        element = %element,
                        "collection element type not in catalog; skipping"
                    );
                    self.report.skipped_fields += 1;
                    continue;
                };

                let child_ids = self.pool.ids(element).to_vec();
                for parent_id in self.pool.ids(parent_entity).to_vec() {
                    let children: Vec<_> = child_ids
                        .iter()
                        .copied()
                        .filter(|child_id| {
                            self.pool.instance(*child_id).is_some_and(|child| {
                                back_references
                                    .iter()
                                    .any(|back| child.reference(back) == Some(parent_id))
                            })
                        })
                        .collect();

                    if let Some(parent) = self.pool.instance_mut(parent_id) {
                        parent.set(field, FieldValue::Collection(children));
                    }
                }
            }
        }

        tracing::info!("collection linking complete");
        self.sink.flush()
    }

    /// Singular-reference fields on `child` that point back at `parent`.
    /// `None` when the child type is not in the catalog.
    fn back_references(
        &self,
        child: &EntityId,
        parent: &EntityId,
    ) -> Option<Vec<FieldDescriptor>> {
        let descriptor = self.schema.get(child)?;
        Some(
            descriptor
                .singular_references()
                .filter(|field| field.reference_target() == Some(parent))
                .cloned()
                .collect(),
        )
    }

    /// Assign every many-to-many field a random subset of the target
    /// pool: a link count uniform in `[1, min(5, pool size)]`, selected by
    /// shuffling the target pool in place and taking a prefix. The shuffle
    /// persists, so it reshuffles the selection basis for each source
    /// instance and changes that pool's iteration order for the rest of
    /// the run. Empty target pools leave the field unset. Flushes the sink
    /// at the end.
    pub fn populate_many_to_many_relations(&mut self) -> SeedResult<()> {
        let entities = self.pool.entity_types().to_vec();

        for entity in &entities {
            let Some(descriptor) = self.schema.get(entity).cloned() else {
                continue;
            };

            for field in descriptor.fields() {
                let FieldKind::ManyToManyReference { target } = field.kind() else {
                    continue;
                };
                let target = target.clone();

                let pool_size = self.pool.len(&target);
                if pool_size == 0 {
                    continue;
                }

                for source_id in self.pool.ids(entity).to_vec() {
                    let link_count = self.rng.gen_range(1..=pool_size.min(5));
                    self.pool.shuffle(&target, &mut self.rng);
                    let selected = self.pool.ids(&target)[..link_count].to_vec();
                    if let Some(source) = self.pool.instance_mut(source_id) {
                        source.set(field, FieldValue::Collection(selected));
                    }
                }
            }
        }

        tracing::info!("many-to-many linking complete");
        self.sink.flush()
    }
}
