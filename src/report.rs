//! Seeding run report
//!
//! Counts created instances and non-fatal failures per entity type, plus
//! run-wide skip counters, so callers can assert on outcomes instead of
//! scraping logs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::EntityId;

/// Per-entity-type outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityReport {
    /// Instances created, persisted, and registered in the pool
    pub created: usize,
    /// Per-instance creation failures (construction or persist rejection)
    pub creation_failures: usize,
}

/// Final outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Outcome per entity type, keyed by type identity
    pub entities: BTreeMap<EntityId, EntityReport>,
    /// Singular references still unset after resolution because their
    /// target pool stayed empty even after the fallback batch
    pub unresolved_references: usize,
    /// Reference fields skipped because their target type is not in the
    /// catalog (metadata absence)
    pub skipped_fields: usize,
}

impl SeedReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(&self, entity: &EntityId) -> usize {
        self.entities.get(entity).map_or(0, |e| e.created)
    }

    pub fn creation_failures(&self, entity: &EntityId) -> usize {
        self.entities.get(entity).map_or(0, |e| e.creation_failures)
    }

    pub fn total_created(&self) -> usize {
        self.entities.values().map(|e| e.created).sum()
    }

    pub(crate) fn record_created(&mut self, entity: &EntityId) {
        self.entities.entry(entity.clone()).or_default().created += 1;
    }

    pub(crate) fn record_failure(&mut self, entity: &EntityId) {
        self.entities
            .entry(entity.clone())
            .or_default()
            .creation_failures += 1;
    }

    /// Ensure an entity type appears in the report even with zero counts.
    pub(crate) fn touch(&mut self, entity: &EntityId) {
        self.entities.entry(entity.clone()).or_default();
    }

    /// Log the per-type counts at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total_created(),
            unresolved_references = self.unresolved_references,
            skipped_fields = self.skipped_fields,
            "seeding completed; persisted counts:"
        );
        for (entity, outcome) in &self.entities {
            tracing::info!(
                entity = %entity,
                created = outcome.created,
                failures = outcome.creation_failures,
                "  pool"
            );
        }
    }
}
