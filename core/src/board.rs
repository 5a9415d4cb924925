//! UI-facing facade over one domain's grouping state.
//!
//! The table view drives a `GroupBoard` with gesture callbacks and menu
//! actions, and renders whatever `rows()` returns. The board owns the
//! store, the drag coordinator, the record array supplied by the table
//! data collaborator, and the transient collapsed set.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Group, GroupRecord};
use uuid::Uuid;

use crate::drag::{DragCoordinator, DragState, DropAction, DropTarget};
use crate::projection::{self, Row};
use crate::storage::StoragePort;
use crate::store::GroupStore;

pub struct GroupBoard<R, S> {
    store: GroupStore<R, S>,
    drag: DragCoordinator,
    records: Vec<R>,
    collapsed: HashSet<Uuid>,
}

impl<R, S> GroupBoard<R, S>
where
    R: GroupRecord + Serialize + DeserializeOwned,
    S: StoragePort,
{
    pub fn new(storage: S, key: &str, records: Vec<R>) -> Self {
        Self {
            store: GroupStore::load(storage, key),
            drag: DragCoordinator::new(),
            records,
            collapsed: HashSet::new(),
        }
    }

    /// Replace the backing record array after the table data changes.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn groups(&self) -> &[Group<R>] {
        self.store.groups()
    }

    pub fn store(&self) -> &GroupStore<R, S> {
        &self.store
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn hover(&self) -> Option<DropTarget> {
        self.drag.hover()
    }

    // --- group operations ---

    pub fn create_group(&mut self, name: &str) -> Uuid {
        self.store.create_group(name)
    }

    pub fn delete_group(&mut self, id: Uuid) {
        self.collapsed.remove(&id);
        self.store.delete_group(id);
    }

    pub fn rename_group(&mut self, id: Uuid, name: &str) {
        self.store.update_group_name(id, name);
    }

    pub fn recolor_group(&mut self, id: Uuid, color: Option<String>) {
        self.store.update_group_color(id, color);
    }

    pub fn toggle_group_visibility(&mut self, id: Uuid) {
        self.store.toggle_group_visibility(id);
    }

    // --- member operations ---

    pub fn add_record(&mut self, group_id: Uuid, record: R) {
        self.store.add_record(group_id, record);
    }

    pub fn remove_record(&mut self, group_id: Uuid, index: usize) {
        self.store.remove_record(group_id, index);
    }

    // --- collapse state (transient, defaults to expanded) ---

    pub fn toggle_collapsed(&mut self, id: Uuid) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    pub fn is_collapsed(&self, id: Uuid) -> bool {
        self.collapsed.contains(&id)
    }

    // --- drag gestures ---

    pub fn drag_start_row(&mut self, group: Uuid, index: usize) {
        self.drag.start_member_drag(group, index);
    }

    pub fn drag_start_header(&mut self, id: Uuid) {
        self.drag.start_group_drag(id);
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        self.drag.drag_over(target);
    }

    pub fn drop_on(&mut self, target: DropTarget) {
        if let Some(action) = self.drag.drop_on(target) {
            self.apply(action);
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.drag_end();
    }

    fn apply(&mut self, action: DropAction) {
        match action {
            DropAction::ReorderWithin { group, from, to } => {
                self.store.reorder_record(group, from, to);
            }
            DropAction::MoveBetween {
                from_group,
                to_group,
                index,
            } => {
                self.store.move_record(from_group, to_group, index);
            }
            DropAction::AddFromUngrouped { to_group, index } => {
                // Resolve the ungrouped row against the current derived
                // set; a stale index just misses and nothing changes.
                let record = projection::ungrouped(&self.records, self.store.groups())
                    .get(index)
                    .map(|r| (*r).clone());
                if let Some(record) = record {
                    self.store.add_record(to_group, record);
                }
            }
            DropAction::ReorderGroups { dragged, target } => {
                self.store.update_group_order(dragged, target);
            }
        }
    }

    /// The current render rows: visible groups by rank with their member
    /// rows when expanded, then the Ungrouped section when non-empty.
    pub fn rows(&self) -> Vec<Row<'_, R>> {
        projection::project(self.store.groups(), &self.records, &self.collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::UNGROUPED_ID;
    use crate::storage::{MemoryStore, LEAD_GROUPS_KEY};
    use shared::Lead;

    fn lead(n: u32) -> Lead {
        Lead::new(
            format!("Lead {}", n),
            format!("555-{:04}", n),
            format!("lead{}@example.com", n),
        )
    }

    fn board_with_groups() -> (GroupBoard<Lead, MemoryStore>, Uuid, Uuid) {
        let mut board = GroupBoard::new(
            MemoryStore::new(),
            LEAD_GROUPS_KEY,
            vec![lead(1), lead(2), lead(3)],
        );
        let a = board.create_group("A");
        let b = board.create_group("B");
        (board, a, b)
    }

    #[test]
    fn test_drop_moves_row_between_groups() {
        let (mut board, a, b) = board_with_groups();
        board.add_record(a, lead(1));
        board.add_record(a, lead(2));

        board.drag_start_row(a, 0);
        board.drag_over(DropTarget::Group { id: b });
        board.drop_on(DropTarget::Group { id: b });

        assert_eq!(board.groups()[0].members.len(), 1);
        assert_eq!(board.groups()[1].members[0].name, "Lead 1");
        assert_eq!(board.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drop_reorders_within_group() {
        let (mut board, a, _) = board_with_groups();
        board.add_record(a, lead(1));
        board.add_record(a, lead(2));

        board.drag_start_row(a, 1);
        board.drop_on(DropTarget::Member { group: a, index: 0 });

        let names: Vec<&str> = board.groups()[0]
            .members
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lead 2", "Lead 1"]);
    }

    #[test]
    fn test_drop_from_ungrouped_adds_to_group() {
        let (mut board, a, _) = board_with_groups();
        board.add_record(a, lead(1));

        // Ungrouped list is now [Lead 2, Lead 3]; drag its second row.
        board.drag_start_row(UNGROUPED_ID, 1);
        board.drop_on(DropTarget::Group { id: a });

        let names: Vec<&str> = board.groups()[0]
            .members
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lead 1", "Lead 3"]);
    }

    #[test]
    fn test_header_drop_reorders_groups() {
        let (mut board, a, b) = board_with_groups();

        board.drag_start_header(b);
        board.drop_on(DropTarget::Group { id: a });

        assert_eq!(board.groups()[0].id, b);
        assert_eq!(board.groups()[0].order, 0);
        assert_eq!(board.groups()[1].id, a);
        assert_eq!(board.groups()[1].order, 1);
    }

    #[test]
    fn test_abandoned_drag_leaves_store_untouched() {
        let (mut board, a, _) = board_with_groups();
        board.add_record(a, lead(1));
        let before = board.store().storage().clone();

        board.drag_start_row(a, 0);
        board.drag_over(DropTarget::Group { id: a });
        board.drag_end();

        assert_eq!(board.drag_state(), DragState::Idle);
        assert!(board.hover().is_none());
        let after = board.store().storage().clone();
        assert_eq!(
            before.get(LEAD_GROUPS_KEY).unwrap(),
            after.get(LEAD_GROUPS_KEY).unwrap()
        );
        assert_eq!(board.groups()[0].members.len(), 1);
    }

    #[test]
    fn test_rows_reflect_collapse_toggle() {
        let (mut board, a, b) = board_with_groups();
        board.add_record(a, lead(1));
        board.delete_group(b);

        // Expanded: header A + member + Ungrouped header + 2 members.
        assert_eq!(board.rows().len(), 5);

        board.toggle_collapsed(a);
        assert!(board.is_collapsed(a));
        assert_eq!(board.rows().len(), 4);

        board.toggle_collapsed(UNGROUPED_ID);
        assert_eq!(board.rows().len(), 2);

        board.toggle_collapsed(a);
        assert_eq!(board.rows().len(), 3);
    }

    #[test]
    fn test_stale_ungrouped_index_is_noop() {
        let (mut board, a, _) = board_with_groups();

        board.drag_start_row(UNGROUPED_ID, 99);
        board.drop_on(DropTarget::Group { id: a });

        assert!(board.groups()[0].members.is_empty());
    }
}
