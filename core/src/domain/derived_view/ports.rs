use uuid::Uuid;

use crate::domain::derived_view::entities::{CacheStats, CachedView, DerivedViewKey};

/// Shared memo of derived views. Implementations must replace and remove
/// entries atomically per key: a reader sees a whole entry or none.
/// Failures are never surfaced; a broken cache behaves as a permanent miss.
#[cfg_attr(test, mockall::automock)]
pub trait DerivedViewCache: Send + Sync {
    fn get(&self, key: &DerivedViewKey) -> Option<CachedView>;

    fn put(&self, key: DerivedViewKey, view: CachedView);

    /// Counter that moves forward on every invalidation covering the
    /// restaurant. Read it before loading the data a view is built from.
    fn generation(&self, restaurant_id: Uuid) -> u64;

    /// Stores `view` unless an invalidation covering the key's restaurant
    /// happened after `generation` was read. Returns whether it was kept.
    fn put_if_current(&self, key: DerivedViewKey, view: CachedView, generation: u64) -> bool;

    /// Evicts every view family cached for the restaurant.
    fn invalidate_restaurant(&self, restaurant_id: Uuid);

    fn invalidate_all(&self);

    fn stats(&self) -> CacheStats;
}
