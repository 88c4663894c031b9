use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::CacheConfig,
    derived_view::{
        entities::{CacheStats, CachedView, DerivedViewKey},
        ports::DerivedViewCache,
    },
};

#[derive(Debug, Clone)]
struct CacheEntry {
    view: CachedView,
    cached_at: Instant,
}

/// Process-wide derived-view cache. Every entry is replaced or removed as a
/// whole under its shard lock, so readers never observe a partial view.
#[derive(Debug)]
pub struct InMemoryDerivedViewCache {
    entries: DashMap<DerivedViewKey, CacheEntry>,
    generations: DashMap<Uuid, u64>,
    epoch: AtomicU64,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl InMemoryDerivedViewCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            generations: DashMap::new(),
            epoch: AtomicU64::new(0),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.config
            .ttl
            .is_some_and(|ttl| entry.cached_at.elapsed() >= ttl)
    }

    fn store(&self, key: DerivedViewKey, view: CachedView) -> bool {
        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            debug!(key = %key, max_entries = self.config.max_entries, "derived view cache full, skipping");
            return false;
        }

        self.entries.insert(
            key,
            CacheEntry {
                view,
                cached_at: Instant::now(),
            },
        );
        true
    }

    fn miss(&self, key: &DerivedViewKey) -> Option<CachedView> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(key = %key, "derived view cache miss");
        None
    }
}

impl Default for InMemoryDerivedViewCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl DerivedViewCache for InMemoryDerivedViewCache {
    fn get(&self, key: &DerivedViewKey) -> Option<CachedView> {
        let view = match self.entries.get(key) {
            Some(entry) if !self.is_expired(&entry) => entry.view.clone(),
            Some(entry) => {
                drop(entry);
                if self
                    .entries
                    .remove_if(key, |_, entry| self.is_expired(entry))
                    .is_some()
                {
                    self.evictions.fetch_add(1, Ordering::Relaxed);
                }
                return self.miss(key);
            }
            None => return self.miss(key),
        };

        self.hits.fetch_add(1, Ordering::Relaxed);
        debug!(key = %key, "derived view cache hit");
        Some(view)
    }

    fn put(&self, key: DerivedViewKey, view: CachedView) {
        self.store(key, view);
    }

    fn generation(&self, restaurant_id: Uuid) -> u64 {
        // Both counters only grow, so their sum moves whenever either does.
        let restaurant = self
            .generations
            .get(&restaurant_id)
            .map(|generation| *generation)
            .unwrap_or(0);
        self.epoch.load(Ordering::SeqCst) + restaurant
    }

    fn put_if_current(&self, key: DerivedViewKey, view: CachedView, generation: u64) -> bool {
        let restaurant_id = key.restaurant_id;
        if self.generation(restaurant_id) != generation {
            debug!(key = %key, "derived view outdated before store, dropping");
            return false;
        }

        if !self.store(key.clone(), view) {
            return false;
        }

        // An invalidation may have swept the map between the check and the
        // insert; re-check so the entry cannot outlive it.
        if self.generation(restaurant_id) != generation {
            self.entries.remove(&key);
            debug!(key = %key, "derived view invalidated during store, dropping");
            return false;
        }
        true
    }

    fn invalidate_restaurant(&self, restaurant_id: Uuid) {
        *self.generations.entry(restaurant_id).or_insert(0) += 1;

        let mut removed = 0u64;
        self.entries.retain(|key, _| {
            let keep = key.restaurant_id != restaurant_id;
            if !keep {
                removed += 1;
            }
            keep
        });

        self.evictions.fetch_add(removed, Ordering::Relaxed);
        debug!(%restaurant_id, removed, "derived views evicted");
    }

    fn invalidate_all(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let removed = self.entries.len() as u64;
        self.entries.clear();

        self.evictions.fetch_add(removed, Ordering::Relaxed);
        debug!(removed, "derived view cache cleared");
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len() as u64,
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, sync::Arc, thread, time::Duration};

    use super::*;
    use crate::domain::{
        allergen::entities::Allergen,
        common::{
            fixtures,
            value_objects::{PageRequest, Paginated},
        },
        dish::entities::DishView,
    };

    fn safe_view(name: &str) -> CachedView {
        let dish = fixtures::dish(name, vec![]);
        CachedView::SafeDishes(vec![DishView::from(&dish)])
    }

    fn empty_page() -> CachedView {
        CachedView::MenuPage(Paginated::new(vec![], PageRequest::default(), 0))
    }

    #[test]
    fn miss_then_hit() {
        let cache = InMemoryDerivedViewCache::default();
        let key = DerivedViewKey::menu_page(Uuid::new_v4(), 0);

        assert!(cache.get(&key).is_none());
        cache.put(key.clone(), empty_page());
        assert_eq!(cache.get(&key), Some(empty_page()));

        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
    }

    #[test]
    fn put_replaces_whole_entry() {
        let cache = InMemoryDerivedViewCache::default();
        let key = DerivedViewKey::safe_dishes(Uuid::new_v4(), &BTreeSet::from([Allergen::Fish]));

        cache.put(key.clone(), safe_view("Old"));
        cache.put(key.clone(), safe_view("New"));

        match cache.get(&key) {
            Some(CachedView::SafeDishes(views)) => {
                assert_eq!(views.len(), 1);
                assert_eq!(views[0].name, "New");
            }
            other => panic!("unexpected cached view: {other:?}"),
        }
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn invalidating_a_restaurant_drops_both_families_only_for_it() {
        let cache = InMemoryDerivedViewCache::default();
        let (target, other) = (Uuid::new_v4(), Uuid::new_v4());
        let excluded = BTreeSet::from([Allergen::Milk]);

        for id in [target, other] {
            cache.put(DerivedViewKey::menu_page(id, 0), empty_page());
            cache.put(DerivedViewKey::menu_page(id, 1), empty_page());
            cache.put(DerivedViewKey::safe_dishes(id, &excluded), safe_view("Salad"));
        }

        cache.invalidate_restaurant(target);

        assert!(cache.get(&DerivedViewKey::menu_page(target, 0)).is_none());
        assert!(cache.get(&DerivedViewKey::menu_page(target, 1)).is_none());
        assert!(cache.get(&DerivedViewKey::safe_dishes(target, &excluded)).is_none());
        assert!(cache.get(&DerivedViewKey::menu_page(other, 0)).is_some());
        assert!(cache.get(&DerivedViewKey::safe_dishes(other, &excluded)).is_some());

        let stats = cache.stats();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.evictions, 3);
    }

    #[test]
    fn invalidate_all_empties_the_cache() {
        let cache = InMemoryDerivedViewCache::default();
        cache.put(DerivedViewKey::menu_page(Uuid::new_v4(), 0), empty_page());
        cache.put(DerivedViewKey::menu_page(Uuid::new_v4(), 0), empty_page());

        cache.invalidate_all();

        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn full_cache_skips_new_keys_but_refreshes_existing() {
        let cache = InMemoryDerivedViewCache::new(CacheConfig {
            max_entries: 1,
            ttl: None,
        });
        let restaurant_id = Uuid::new_v4();
        let first = DerivedViewKey::menu_page(restaurant_id, 0);
        let second = DerivedViewKey::menu_page(restaurant_id, 1);

        cache.put(first.clone(), empty_page());
        cache.put(second.clone(), empty_page());
        cache.put(first.clone(), safe_view("Refreshed"));

        assert!(cache.get(&second).is_none());
        assert!(matches!(cache.get(&first), Some(CachedView::SafeDishes(_))));
    }

    #[test]
    fn expired_entries_read_as_misses() {
        let cache = InMemoryDerivedViewCache::new(CacheConfig {
            max_entries: 10,
            ttl: Some(Duration::ZERO),
        });
        let key = DerivedViewKey::menu_page(Uuid::new_v4(), 0);

        cache.put(key.clone(), empty_page());

        assert!(cache.get(&key).is_none());
        let stats = cache.stats();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.evictions, 1);
    }

    #[test]
    fn store_after_invalidation_is_dropped() {
        let cache = InMemoryDerivedViewCache::default();
        let (restaurant_id, other) = (Uuid::new_v4(), Uuid::new_v4());
        let key = DerivedViewKey::safe_dishes(restaurant_id, &BTreeSet::from([Allergen::Milk]));

        let generation = cache.generation(restaurant_id);
        let other_generation = cache.generation(other);
        cache.invalidate_restaurant(restaurant_id);

        assert!(!cache.put_if_current(key.clone(), safe_view("Chicken Supreme"), generation));
        assert!(cache.get(&key).is_none());

        let other_key = DerivedViewKey::menu_page(other, 0);
        assert!(cache.put_if_current(other_key.clone(), empty_page(), other_generation));
        assert!(cache.get(&other_key).is_some());
    }

    #[test]
    fn invalidate_all_outdates_every_restaurant() {
        let cache = InMemoryDerivedViewCache::default();
        let restaurant_id = Uuid::new_v4();
        let key = DerivedViewKey::menu_page(restaurant_id, 0);

        let generation = cache.generation(restaurant_id);
        cache.invalidate_all();

        assert!(!cache.put_if_current(key.clone(), empty_page(), generation));
        assert!(cache.put_if_current(key.clone(), empty_page(), cache.generation(restaurant_id)));
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn concurrent_readers_see_whole_entries() {
        let cache = Arc::new(InMemoryDerivedViewCache::default());
        let restaurant_id = Uuid::new_v4();
        let key = DerivedViewKey::safe_dishes(restaurant_id, &BTreeSet::new());

        let writer = {
            let cache = Arc::clone(&cache);
            let key = key.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    cache.put(key.clone(), safe_view(&format!("Dish {i}")));
                    cache.invalidate_restaurant(restaurant_id);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let key = key.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        if let Some(CachedView::SafeDishes(views)) = cache.get(&key) {
                            assert_eq!(views.len(), 1);
                            assert!(views[0].name.starts_with("Dish "));
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
