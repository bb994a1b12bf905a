//! The shared instance registry for one seeding run
//!
//! Maps each entity type to the ordered sequence of instances created so
//! far. Pools are append-only for instances (an instance is never removed
//! once registered), but a pool's iteration order may be permuted by the
//! many-to-many phase, which shuffles in place to select random subsets.
//! That reordering is visible to later phases of the same run.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::instance::{Instance, InstanceId};
use crate::schema::EntityId;

/// Registry mapping entity type to the instances created in this run.
///
/// One pool is exclusively owned by one seeding run; it only grows.
#[derive(Debug, Default)]
pub struct InstancePool {
    arena: HashMap<InstanceId, Instance>,
    pools: HashMap<EntityId, Vec<InstanceId>>,
    type_order: Vec<EntityId>,
    next_id: u64,
}

impl InstancePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance, assigning its run-unique id and appending it
    /// to its entity type's pool.
    pub fn insert(&mut self, instance: Instance) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let entity = instance.entity().clone();
        if !self.pools.contains_key(&entity) {
            self.type_order.push(entity.clone());
        }
        self.pools.entry(entity).or_default().push(id);
        self.arena.insert(id, instance);
        id
    }

    /// Instance ids for one entity type, in current pool order. Empty if
    /// no instance of that type exists yet.
    pub fn ids(&self, entity: &EntityId) -> &[InstanceId] {
        self.pools.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, entity: &EntityId) -> usize {
        self.ids(entity).len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn total(&self) -> usize {
        self.arena.len()
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.arena.get(&id)
    }

    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.arena.get_mut(&id)
    }

    /// Entity types with a pool, in order of first instance creation.
    pub fn entity_types(&self) -> &[EntityId] {
        &self.type_order
    }

    /// Instances of one entity type, in current pool order.
    pub fn instances<'a>(&'a self, entity: &EntityId) -> impl Iterator<Item = &'a Instance> {
        self.ids(entity).iter().filter_map(|id| self.arena.get(id))
    }

    /// Shuffle one entity type's pool order in place.
    ///
    /// Used by many-to-many selection; the permutation persists, so later
    /// iteration over this pool sees the new order.
    pub fn shuffle(&mut self, entity: &EntityId, rng: &mut StdRng) {
        if let Some(ids) = self.pools.get_mut(entity) {
            ids.shuffle(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn pool_with(entity: &str, count: usize) -> InstancePool {
        let mut pool = InstancePool::new();
        for _ in 0..count {
            pool.insert(Instance::new(entity.into()));
        }
        pool
    }

    #[test]
    fn insert_assigns_unique_ids_in_order() {
        let mut pool = InstancePool::new();
        let a = pool.insert(Instance::new("user".into()));
        let b = pool.insert(Instance::new("user".into()));
        let c = pool.insert(Instance::new("post".into()));

        assert_ne!(a, b);
        assert_eq!(pool.ids(&"user".into()), &[a, b]);
        assert_eq!(pool.ids(&"post".into()), &[c]);
        assert_eq!(pool.total(), 3);
    }

    #[test]
    fn type_order_follows_first_insertion() {
        let mut pool = InstancePool::new();
        pool.insert(Instance::new("b".into()));
        pool.insert(Instance::new("a".into()));
        pool.insert(Instance::new("b".into()));

        let order: Vec<&str> = pool.entity_types().iter().map(EntityId::as_str).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn unknown_type_has_empty_pool() {
        let pool = InstancePool::new();
        assert_eq!(pool.len(&"ghost".into()), 0);
        assert!(pool.ids(&"ghost".into()).is_empty());
    }

    #[test]
    fn shuffle_permutes_without_changing_membership() {
        let mut pool = pool_with("tag", 20);
        let entity: EntityId = "tag".into();
        let mut before = pool.ids(&entity).to_vec();

        let mut rng = StdRng::seed_from_u64(3);
        pool.shuffle(&entity, &mut rng);

        let mut after = pool.ids(&entity).to_vec();
        assert_eq!(pool.len(&entity), 20);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}
