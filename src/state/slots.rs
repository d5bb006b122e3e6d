//! Authoritative store of the slots currently visible in the feed.
//!
//! DESIGN
//! ======
//! Slots live in a `uid → Slot` map; display order is tracked separately as
//! insertion order. The rendered table is a projection of this store, never
//! the other way round, so copy/info/delete actions look slots up here.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use std::collections::HashMap;

use protocol::NewSlot;
use time::OffsetDateTime;

/// One entry in the shared clipboard feed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Server-assigned identifier, unique in the store.
    pub uid: String,
    /// Display text of the message.
    pub text: String,
    /// Richer clipboard content; copied instead of `text` when present.
    pub clipboard: Option<String>,
    /// Display name of the sender.
    pub nickname: String,
    /// Creation time, truncated to whole seconds.
    pub timestamp: OffsetDateTime,
}

impl Slot {
    /// Build a slot from a `new_slot` payload, dropping sub-second precision.
    ///
    /// # Errors
    ///
    /// Returns an error when the timestamp is outside the representable range.
    pub fn from_wire(payload: NewSlot) -> Result<Self, time::error::ComponentRange> {
        let timestamp = OffsetDateTime::from_unix_timestamp(payload.timestamp.div_euclid(1000))?;
        Ok(Self {
            uid: payload.uid,
            text: payload.text,
            clipboard: payload.clipboard,
            nickname: payload.nickname,
            timestamp,
        })
    }

    /// The string the copy action places on the clipboard.
    pub fn clipboard_text(&self) -> &str {
        self.clipboard.as_deref().unwrap_or(&self.text)
    }
}

/// Outcome of [`SlotStore::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// The uid was new and the slot now heads the feed.
    Inserted,
    /// A slot with the same uid existed and was updated where it stood.
    Replaced,
}

/// Ordered, de-duplicated set of visible slots.
#[derive(Clone, Debug, Default)]
pub struct SlotStore {
    slots: HashMap<String, Slot>,
    /// Uids oldest first; the feed shows them reversed.
    order: Vec<String>,
}

impl SlotStore {
    /// Insert a slot at the head of the feed, or replace an existing slot with
    /// the same uid without moving it.
    pub fn upsert(&mut self, slot: Slot) -> Upsert {
        if let Some(existing) = self.slots.get_mut(&slot.uid) {
            *existing = slot;
            return Upsert::Replaced;
        }
        self.order.push(slot.uid.clone());
        self.slots.insert(slot.uid.clone(), slot);
        Upsert::Inserted
    }

    /// Remove the slot with `uid`. Returns the removed slot, or `None` when it
    /// was already absent.
    pub fn remove(&mut self, uid: &str) -> Option<Slot> {
        let removed = self.slots.remove(uid)?;
        self.order.retain(|id| id != uid);
        Some(removed)
    }

    /// Drop every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    pub fn get(&self, uid: &str) -> Option<&Slot> {
        self.slots.get(uid)
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.slots.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in display order, newest insertion first.
    pub fn ordered(&self) -> impl Iterator<Item = &Slot> {
        self.order.iter().rev().filter_map(|uid| self.slots.get(uid))
    }

    /// Uids in display order, newest insertion first.
    pub fn uids(&self) -> Vec<String> {
        self.order.iter().rev().cloned().collect()
    }
}
