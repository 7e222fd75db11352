//! Owner-keyed cache of query results.
//!
//! Reads may be served from here; every successful write for an owner drops
//! that owner's slot so the next read goes back to the store
//! (read-your-writes). The lock is never held across an await point.

use std::collections::HashMap;

use parking_lot::RwLock;
use solana_program::pubkey::Pubkey;

use crate::state::JournalEntry;

#[derive(Default)]
pub(crate) struct OwnerCache {
    inner: RwLock<HashMap<Pubkey, Vec<JournalEntry>>>,
}

impl OwnerCache {
    pub fn get(&self, owner: &Pubkey) -> Option<Vec<JournalEntry>> {
        self.inner.read().get(owner).cloned()
    }

    pub fn store(&self, owner: &Pubkey, entries: Vec<JournalEntry>) {
        self.inner.write().insert(*owner, entries);
    }

    pub fn invalidate(&self, owner: &Pubkey) {
        self.inner.write().remove(owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(owner: Pubkey) -> JournalEntry {
        JournalEntry {
            owner,
            title: "t".to_string(),
            message: "m".to_string(),
        }
    }

    #[test]
    fn store_get_invalidate() {
        let cache = OwnerCache::default();
        let owner = Pubkey::new_unique();

        assert!(cache.get(&owner).is_none());
        cache.store(&owner, vec![entry(owner)]);
        assert_eq!(cache.get(&owner).unwrap().len(), 1);

        cache.invalidate(&owner);
        assert!(cache.get(&owner).is_none());
    }

    #[test]
    fn invalidation_is_per_owner() {
        let cache = OwnerCache::default();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        cache.store(&a, vec![entry(a)]);
        cache.store(&b, vec![entry(b)]);
        cache.invalidate(&a);

        assert!(cache.get(&a).is_none());
        assert_eq!(cache.get(&b).unwrap().len(), 1);
    }
}
