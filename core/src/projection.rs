//! Collapsible view projection: the flat row list the table renders.
//!
//! Pure over its inputs; the single place the derived "ungrouped" set is
//! computed.

use std::collections::HashSet;

use shared::{Group, GroupRecord};
use uuid::Uuid;

use crate::drag::UNGROUPED_ID;

pub const UNGROUPED_NAME: &str = "Ungrouped";

#[derive(Debug, PartialEq)]
pub enum Row<'a, R> {
    Header {
        id: Uuid,
        name: &'a str,
        color: Option<&'a str>,
        count: usize,
        collapsed: bool,
    },
    Member {
        group: Uuid,
        index: usize,
        record: &'a R,
    },
}

/// Records belonging to no group, in their source order.
pub fn ungrouped<'a, R: GroupRecord>(records: &'a [R], groups: &[Group<R>]) -> Vec<&'a R> {
    let grouped: HashSet<R::Key> = groups
        .iter()
        .flat_map(|g| g.members.iter().map(|m| m.natural_key()))
        .collect();
    records
        .iter()
        .filter(|r| !grouped.contains(&r.natural_key()))
        .collect()
}

/// Flatten visible groups (ascending by rank) plus the synthetic
/// Ungrouped section into header and member rows. Groups absent from
/// `collapsed` render expanded.
pub fn project<'a, R: GroupRecord>(
    groups: &'a [Group<R>],
    records: &'a [R],
    collapsed: &HashSet<Uuid>,
) -> Vec<Row<'a, R>> {
    let mut rows = Vec::new();

    let mut visible: Vec<&Group<R>> = groups.iter().filter(|g| g.visible).collect();
    visible.sort_by_key(|g| g.order);

    for group in visible {
        let is_collapsed = collapsed.contains(&group.id);
        rows.push(Row::Header {
            id: group.id,
            name: &group.name,
            color: group.color.as_deref(),
            count: group.members.len(),
            collapsed: is_collapsed,
        });
        if !is_collapsed {
            for (index, record) in group.members.iter().enumerate() {
                rows.push(Row::Member {
                    group: group.id,
                    index,
                    record,
                });
            }
        }
    }

    // Hidden groups still claim their members, so the set difference runs
    // over all groups, not just the visible ones.
    let loose = ungrouped(records, groups);
    if !loose.is_empty() {
        let is_collapsed = collapsed.contains(&UNGROUPED_ID);
        rows.push(Row::Header {
            id: UNGROUPED_ID,
            name: UNGROUPED_NAME,
            color: None,
            count: loose.len(),
            collapsed: is_collapsed,
        });
        if !is_collapsed {
            for (index, record) in loose.into_iter().enumerate() {
                rows.push(Row::Member {
                    group: UNGROUPED_ID,
                    index,
                    record,
                });
            }
        }
    }

    rows
}
