//! Authoritative CRUD over a domain's group collection.
//!
//! The store owns the in-memory groups and writes the whole collection
//! back through the storage port after every mutation. Stale references
//! (unknown ids, out-of-range indices) are silent no-ops: drag targets
//! can go stale between gesture start and drop, and a missed cosmetic
//! mutation should not surface as an error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Group, GroupRecord};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::{StorageError, StoragePort};

pub struct GroupStore<R, S> {
    groups: Vec<Group<R>>,
    storage: S,
    key: String,
}

impl<R, S> GroupStore<R, S>
where
    R: GroupRecord + Serialize + DeserializeOwned,
    S: StoragePort,
{
    /// Load the collection persisted under `key`, treating a missing key
    /// or malformed blob as an empty collection.
    pub fn load(storage: S, key: &str) -> Self {
        let groups = match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Group<R>>>(&raw) {
                Ok(groups) => groups,
                Err(e) => {
                    warn!("Discarding malformed group data under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read group data under '{}': {}", key, e);
                Vec::new()
            }
        };

        let mut store = Self {
            groups,
            storage,
            key: key.to_string(),
        };
        // Persisted ranks may have gaps or duplicates; normalize in memory
        // without writing back.
        store.groups.sort_by_key(|g| g.order);
        store.renumber();
        store
    }

    /// Groups in rank order. `order` always equals the slice index.
    pub fn groups(&self) -> &[Group<R>] {
        &self.groups
    }

    pub fn group(&self, id: Uuid) -> Option<&Group<R>> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn create_group(&mut self, name: &str) -> Uuid {
        let group = Group::new(name.to_string(), self.groups.len() as u32);
        let id = group.id;
        debug!("Group created: {} ({})", id, name);
        self.groups.push(group);
        self.persist();
        id
    }

    pub fn delete_group(&mut self, id: Uuid) {
        let Some(pos) = self.position(id) else {
            return;
        };
        debug!("Group deleted: {}", id);
        self.groups.remove(pos);
        self.renumber();
        self.persist();
    }

    /// Move `dragged` immediately before `target`, then reassign ranks.
    pub fn update_group_order(&mut self, dragged: Uuid, target: Uuid) {
        if dragged == target {
            return;
        }
        let Some(from) = self.position(dragged) else {
            return;
        };
        if self.position(target).is_none() {
            return;
        }

        let group = self.groups.remove(from);
        // Target's index in the reduced vec is where "before target" lands.
        let to = self.position(target).unwrap_or(self.groups.len());
        self.groups.insert(to, group);
        self.renumber();
        self.persist();
    }

    pub fn toggle_group_visibility(&mut self, id: Uuid) {
        let Some(pos) = self.position(id) else {
            return;
        };
        self.groups[pos].visible = !self.groups[pos].visible;
        self.persist();
    }

    pub fn update_group_name(&mut self, id: Uuid, name: &str) {
        let Some(pos) = self.position(id) else {
            return;
        };
        self.groups[pos].name = name.to_string();
        self.persist();
    }

    pub fn update_group_color(&mut self, id: Uuid, color: Option<String>) {
        let Some(pos) = self.position(id) else {
            return;
        };
        self.groups[pos].color = color;
        self.persist();
    }

    /// Append `record` to the target group's members.
    ///
    /// Membership is exclusive: any record with the same natural key is
    /// first removed from every group, so re-adding replaces and adding
    /// to a second group moves.
    pub fn add_record(&mut self, group_id: Uuid, record: R) {
        let Some(pos) = self.position(group_id) else {
            return;
        };
        let key = record.natural_key();
        for group in &mut self.groups {
            group.members.retain(|m| m.natural_key() != key);
        }
        self.groups[pos].members.push(record);
        self.persist();
    }

    pub fn remove_record(&mut self, group_id: Uuid, index: usize) {
        let Some(pos) = self.position(group_id) else {
            return;
        };
        if index >= self.groups[pos].members.len() {
            return;
        }
        self.groups[pos].members.remove(index);
        self.persist();
    }

    /// Remove the member at `from_index` of `from` and append it to `to`.
    pub fn move_record(&mut self, from: Uuid, to: Uuid, from_index: usize) {
        let Some(from_pos) = self.position(from) else {
            return;
        };
        let Some(to_pos) = self.position(to) else {
            return;
        };
        if from_index >= self.groups[from_pos].members.len() {
            return;
        }

        let record = self.groups[from_pos].members.remove(from_index);
        self.groups[to_pos].members.push(record);
        self.persist();
    }

    /// Move the member at `source` to position `target` within one group.
    pub fn reorder_record(&mut self, group_id: Uuid, source: usize, target: usize) {
        let Some(pos) = self.position(group_id) else {
            return;
        };
        let members = &mut self.groups[pos].members;
        if source == target || source >= members.len() || target >= members.len() {
            return;
        }

        let record = members.remove(source);
        members.insert(target, record);
        self.persist();
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    fn renumber(&mut self) {
        for (i, group) in self.groups.iter_mut().enumerate() {
            group.order = i as u32;
        }
    }

    /// Write-through after a mutation. In-memory state stays authoritative
    /// for the session when the write fails, so the error is only logged.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!("Failed to persist groups under '{}': {}", self.key, e);
        }
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.groups)?;
        self.storage.set(&self.key, &raw)
    }
}
