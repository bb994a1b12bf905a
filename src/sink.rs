//! Persistence boundary
//!
//! The seeder hands every successfully populated instance to a
//! [`PersistenceSink`] and requests a flush after each mutation phase so
//! that phase's state is durable before the next phase runs. The sink is
//! expected to provide one enclosing transactional scope for the whole
//! run; the seeder manages no transactions of its own.

use std::collections::HashSet;

use crate::error::{SeedError, SeedResult};
use crate::instance::Instance;
use crate::schema::EntityId;

/// Durable storage boundary for a seeding run.
pub trait PersistenceSink {
    /// Persist one newly created instance. A failure here is non-fatal to
    /// the run: the instance is excluded from its pool and counted.
    fn persist(&mut self, instance: &Instance) -> SeedResult<()>;

    /// Make all state mutated since the last flush durable. Called after
    /// each phase; a failure propagates to the caller unchanged.
    fn flush(&mut self) -> SeedResult<()>;
}

/// In-process sink that records persist and flush calls.
///
/// Used by this crate's tests and handy for downstream test suites. It can
/// be told to reject persists for specific entity types to exercise the
/// non-fatal failure paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    persisted: Vec<EntityId>,
    flushes: usize,
    rejected: HashSet<EntityId>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every persist of the given entity type from now on.
    pub fn reject(&mut self, entity: impl Into<EntityId>) {
        self.rejected.insert(entity.into());
    }

    /// Accept the given entity type again.
    pub fn accept(&mut self, entity: impl Into<EntityId>) {
        self.rejected.remove(&entity.into());
    }

    /// Entity types of all persisted instances, in persist order.
    pub fn persisted(&self) -> &[EntityId] {
        &self.persisted
    }

    pub fn persisted_count(&self, entity: &EntityId) -> usize {
        self.persisted.iter().filter(|e| *e == entity).count()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl PersistenceSink for MemorySink {
    fn persist(&mut self, instance: &Instance) -> SeedResult<()> {
        if self.rejected.contains(instance.entity()) {
            return Err(SeedError::Persistence(format!(
                "rejected persist of '{}'",
                instance.entity()
            )));
        }
        self.persisted.push(instance.entity().clone());
        Ok(())
    }

    fn flush(&mut self) -> SeedResult<()> {
        self.flushes += 1;
        Ok(())
    }
}
