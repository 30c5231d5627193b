use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::match_types::{PendingReceipt, PendingTransaction};

/// Anything that can wait in a [`PendingQueue`].
pub trait PendingItem {
    fn pending_id(&self) -> &str;
    fn received_at(&self) -> DateTime<Utc>;
}

impl PendingItem for PendingTransaction {
    fn pending_id(&self) -> &str {
        &self.id
    }

    fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl PendingItem for PendingReceipt {
    fn pending_id(&self) -> &str {
        &self.message_id
    }

    fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// An insertion-ordered collection keyed by item id.
///
/// Items are kept in a `BTreeMap` keyed by a monotonically increasing sequence number, so iteration is always oldest
/// first. A side index maps each id to its sequence number. Re-inserting an id drops the old entry and puts the new one
/// at the back.
#[derive(Debug, Clone)]
pub struct PendingQueue<T> {
    next_seq: u64,
    items: BTreeMap<u64, T>,
    index: HashMap<String, u64>,
}

impl<T> Default for PendingQueue<T> {
    fn default() -> Self {
        Self { next_seq: 0, items: BTreeMap::new(), index: HashMap::new() }
    }
}

impl<T: PendingItem> PendingQueue<T> {
    /// Adds `item` at the back of the queue. Returns the entry it replaced, if its id was already queued.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let replaced = self.remove(item.pending_id());
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(item.pending_id().to_string(), seq);
        self.items.insert(seq, item);
        replaced
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let seq = self.index.remove(id)?;
        self.items.remove(&seq)
    }

    /// Removes and returns the oldest item satisfying `predicate`.
    pub fn take_first<P>(&mut self, mut predicate: P) -> Option<T>
    where P: FnMut(&T) -> bool {
        let seq = self.items.iter().find(|(_, item)| predicate(item)).map(|(seq, _)| *seq)?;
        let item = self.items.remove(&seq)?;
        self.index.remove(item.pending_id());
        Some(item)
    }

    /// Removes and returns, oldest first, every item received strictly before `cutoff`.
    pub fn drain_received_before(&mut self, cutoff: DateTime<Utc>) -> Vec<T> {
        let stale = self
            .items
            .iter()
            .filter(|(_, item)| item.received_at() < cutoff)
            .map(|(seq, _)| *seq)
            .collect::<Vec<u64>>();
        let mut drained = Vec::with_capacity(stale.len());
        for seq in stale {
            if let Some(item) = self.items.remove(&seq) {
                self.index.remove(item.pending_id());
                drained.push(item);
            }
        }
        drained
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|seq| self.items.get(seq))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}
