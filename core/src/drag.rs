//! Drag-reorder coordinator.
//!
//! Owns the single in-flight drag as an explicit tagged value instead of
//! riding on toolkit drag-event payloads. `drag_over` only moves the hover
//! indicator; the store is touched only by whoever applies the
//! `DropAction` computed at drop time. Drag end always lands back in
//! `Idle`, drop or no drop.

use tracing::debug;
use uuid::Uuid;

/// Fixed id of the synthetic "Ungrouped" section.
pub const UNGROUPED_ID: Uuid = Uuid::nil();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A member row is being dragged out of `group` (row `index`).
    /// Rows in the Ungrouped section drag with `group == UNGROUPED_ID`.
    Member { group: Uuid, index: usize },
    /// A whole group header is being dragged.
    Group { id: Uuid },
}

/// Where the pointer currently is, for hover feedback and drop resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Member { group: Uuid, index: usize },
    Group { id: Uuid },
}

impl DropTarget {
    fn group_id(&self) -> Uuid {
        match *self {
            DropTarget::Member { group, .. } => group,
            DropTarget::Group { id } => id,
        }
    }
}

/// Store operation a completed drop resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    ReorderWithin { group: Uuid, from: usize, to: usize },
    MoveBetween { from_group: Uuid, to_group: Uuid, index: usize },
    /// An Ungrouped row (at `index` of the ungrouped list) dropped onto a
    /// real group.
    AddFromUngrouped { to_group: Uuid, index: usize },
    ReorderGroups { dragged: Uuid, target: Uuid },
}

#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: DragState,
    hover: Option<DropTarget>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn hover(&self) -> Option<DropTarget> {
        self.hover
    }

    pub fn start_member_drag(&mut self, group: Uuid, index: usize) {
        debug!("Drag start: member {} of group {}", index, group);
        self.state = DragState::Member { group, index };
        self.hover = None;
    }

    pub fn start_group_drag(&mut self, id: Uuid) {
        debug!("Drag start: group {}", id);
        self.state = DragState::Group { id };
        self.hover = None;
    }

    /// Track the hovered drop target. Visual feedback only; ignored when
    /// no drag is in flight.
    pub fn drag_over(&mut self, target: DropTarget) {
        if self.state != DragState::Idle {
            self.hover = Some(target);
        }
    }

    /// Resolve a drop against the current drag and reset to `Idle`.
    /// Returns `None` for self-drops and for drops with no drag in flight.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<DropAction> {
        let action = self.resolve(target);
        if let Some(action) = &action {
            debug!("Drop resolved: {:?}", action);
        }
        self.drag_end();
        action
    }

    /// Reset to `Idle` and clear the hover indicator. Called on drop and
    /// on abandoned drags alike; the coordinator must never stay stuck in
    /// a dragging state.
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
        self.hover = None;
    }

    fn resolve(&self, target: DropTarget) -> Option<DropAction> {
        match self.state {
            DragState::Idle => None,

            DragState::Member { group, index } => {
                let to_group = target.group_id();
                if group == to_group {
                    // Within one section: only a member-to-member drop at a
                    // different row moves anything, and the derived
                    // Ungrouped section has no stored order to change.
                    match target {
                        DropTarget::Member { index: to, .. }
                            if to != index && group != UNGROUPED_ID =>
                        {
                            Some(DropAction::ReorderWithin {
                                group,
                                from: index,
                                to,
                            })
                        }
                        _ => None,
                    }
                } else if to_group == UNGROUPED_ID {
                    // Dropping back into the derived section is handled by
                    // an explicit remove, not a drag.
                    None
                } else if group == UNGROUPED_ID {
                    Some(DropAction::AddFromUngrouped { to_group, index })
                } else {
                    Some(DropAction::MoveBetween {
                        from_group: group,
                        to_group,
                        index,
                    })
                }
            }

            DragState::Group { id } => {
                let target_id = target.group_id();
                if target_id == id || target_id == UNGROUPED_ID {
                    None
                } else {
                    Some(DropAction::ReorderGroups {
                        dragged: id,
                        target: target_id,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ignores_everything() {
        let mut drag = DragCoordinator::new();
        let g = Uuid::new_v4();

        drag.drag_over(DropTarget::Group { id: g });
        assert!(drag.hover().is_none());
        assert_eq!(drag.drop_on(DropTarget::Group { id: g }), None);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_reorder_within_group() {
        let mut drag = DragCoordinator::new();
        let g = Uuid::new_v4();

        drag.start_member_drag(g, 0);
        drag.drag_over(DropTarget::Member { group: g, index: 2 });
        assert_eq!(drag.hover(), Some(DropTarget::Member { group: g, index: 2 }));

        let action = drag.drop_on(DropTarget::Member { group: g, index: 2 });
        assert_eq!(
            action,
            Some(DropAction::ReorderWithin { group: g, from: 0, to: 2 })
        );
        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.hover().is_none());
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut drag = DragCoordinator::new();
        let g = Uuid::new_v4();

        drag.start_member_drag(g, 1);
        assert_eq!(drag.drop_on(DropTarget::Member { group: g, index: 1 }), None);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_move_between_groups() {
        let mut drag = DragCoordinator::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        drag.start_member_drag(a, 3);
        let action = drag.drop_on(DropTarget::Group { id: b });
        assert_eq!(
            action,
            Some(DropAction::MoveBetween { from_group: a, to_group: b, index: 3 })
        );
    }

    #[test]
    fn test_ungrouped_row_dropped_on_group() {
        let mut drag = DragCoordinator::new();
        let b = Uuid::new_v4();

        drag.start_member_drag(UNGROUPED_ID, 2);
        let action = drag.drop_on(DropTarget::Member { group: b, index: 0 });
        assert_eq!(action, Some(DropAction::AddFromUngrouped { to_group: b, index: 2 }));

        // The derived section itself cannot be reordered or dropped into.
        drag.start_member_drag(UNGROUPED_ID, 0);
        assert_eq!(
            drag.drop_on(DropTarget::Member { group: UNGROUPED_ID, index: 1 }),
            None
        );
        drag.start_member_drag(b, 0);
        assert_eq!(drag.drop_on(DropTarget::Group { id: UNGROUPED_ID }), None);
    }

    #[test]
    fn test_group_header_drag() {
        let mut drag = DragCoordinator::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        drag.start_group_drag(a);
        assert_eq!(drag.state(), DragState::Group { id: a });
        let action = drag.drop_on(DropTarget::Group { id: b });
        assert_eq!(action, Some(DropAction::ReorderGroups { dragged: a, target: b }));

        // Dropping a group onto itself does nothing.
        drag.start_group_drag(a);
        assert_eq!(drag.drop_on(DropTarget::Group { id: a }), None);
    }

    #[test]
    fn test_abandoned_drag_resets() {
        let mut drag = DragCoordinator::new();
        let g = Uuid::new_v4();

        drag.start_member_drag(g, 0);
        drag.drag_over(DropTarget::Group { id: g });
        drag.drag_end();

        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.hover().is_none());
    }
}
