//! String interner backed by `DashMap`, for lock-free concurrent interning.
//!
//! # Performance characteristics
//!
//! - Interning a known string: O(1) hash lookup.
//! - Interning a new string: O(1) hash insert + one allocation.
//! - `get`: O(n) linear scan — rare relative to `intern`, so a reverse
//!   index is not worth the extra bookkeeping.
//!
//! # Thread safety
//!
//! Fully `Send + Sync`. Concurrent parses (once callers serialize per the
//! spec's concurrency model, §5) share one table without contention beyond
//! `DashMap`'s internal sharding.

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol};

pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

pub struct StringTable {
    /// Maps string hash to (string, symbol index).
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicU32,
    collisions: AtomicUsize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl StringTable {
    #[inline]
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(64),
            next_index: AtomicU32::new(0),
            collisions: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn intern(&self, string: &str) -> Symbol {
        let hash = Self::hash_string(string);

        if let Some(entry) = self.map.get(&hash) {
            if entry.value().0 == string {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Symbol { index: entry.value().1 };
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        match self.map.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                if entry.get().0 == string {
                    Symbol { index: entry.get().1 }
                } else {
                    self.handle_collision(string, hash)
                }
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                entry.insert((interned, idx));
                Symbol { index: idx }
            }
        }
    }

    /// Linear probing with a golden-ratio offset when two distinct strings
    /// hash to the same bucket.
    fn handle_collision(&self, string: &str, original_hash: u64) -> Symbol {
        const MAX_PROBES: u64 = 32;
        const PROBE_PRIME: u64 = 0x9e3779b97f4a7c15;

        for i in 1u64..=MAX_PROBES {
            let probe_hash = original_hash.wrapping_add(i.wrapping_mul(PROBE_PRIME));
            match self.map.entry(probe_hash) {
                dashmap::mapref::entry::Entry::Occupied(entry) => {
                    if entry.get().0 == string {
                        return Symbol { index: entry.get().1 };
                    }
                }
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    self.collisions.fetch_add(1, Ordering::Relaxed);
                    let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
                    let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                    entry.insert((interned, idx));
                    return Symbol { index: idx };
                }
            }
        }

        // All probes occupied by other strings; fall back to a fresh slot
        // keyed by the original hash, accepting that a future `get` for a
        // colliding string already at that hash now must probe too.
        self.collisions.fetch_add(1, Ordering::Relaxed);
        let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
        let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
        self.map.insert(original_hash, (interned, idx));
        Symbol { index: idx }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.map
            .iter()
            .find(|entry| entry.value().1 == symbol.index)
            .map(|entry| entry.value().0)
    }

    #[inline]
    fn hash_string(string: &str) -> u64 {
        let mut hasher = AHasher::default();
        string.hash(&mut hasher);
        hasher.finish()
    }

    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            collisions: self.collisions.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    #[cfg(test)]
    pub(crate) fn reset_stats(&self) {
        self.collisions.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
