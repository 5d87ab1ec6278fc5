use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use orderdesk_core::Entity;

/// Key/value store for domain entities, keyed by `Entity::id`.
pub trait EntityStore<V: Entity>: Send + Sync {
    fn get(&self, key: &V::Id) -> Option<V>;
    /// Insert or replace; returns the replaced value, if any.
    fn upsert(&self, value: V) -> Option<V>;
    /// Mutate the stored value in place. Returns `false` if `key` is absent.
    fn modify(&self, key: &V::Id, f: &mut dyn FnMut(&mut V)) -> bool;
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V, S> EntityStore<V> for Arc<S>
where
    V: Entity,
    S: EntityStore<V> + ?Sized,
{
    fn get(&self, key: &V::Id) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, value: V) -> Option<V> {
        (**self).upsert(value)
    }

    fn modify(&self, key: &V::Id, f: &mut dyn FnMut(&mut V)) -> bool {
        (**self).modify(key, f)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory entity store.
///
/// A writer panicking mid-operation cannot leave a half-written entry (every
/// write is a single map operation), so poisoned locks are recovered.
#[derive(Debug)]
pub struct InMemoryEntityStore<V: Entity> {
    inner: RwLock<HashMap<V::Id, V>>,
}

impl<V: Entity> InMemoryEntityStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Entity> Default for InMemoryEntityStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Entity> FromIterator<V> for InMemoryEntityStore<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let map = iter.into_iter().map(|v| (v.id().clone(), v)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl<V> EntityStore<V> for InMemoryEntityStore<V>
where
    V: Entity + Clone + Send + Sync + 'static,
    V::Id: Send + Sync,
{
    fn get(&self, key: &V::Id) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn upsert(&self, value: V) -> Option<V> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(value.id().clone(), value)
    }

    fn modify(&self, key: &V::Id, f: &mut dyn FnMut(&mut V)) -> bool {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match map.get_mut(key) {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }

    fn list(&self) -> Vec<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
