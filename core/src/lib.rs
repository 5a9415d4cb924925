//! Group management & ordering engine for the estate-deck dashboard.
//!
//! Backs the leads and listings tables: named/colored/hideable groups
//! with contiguous ranks, exclusive record membership, drag-and-drop
//! reordering, and the collapsible row projection the tables render.
//! State is written through a storage port as one JSON array per domain
//! key.

pub mod board;
pub mod config;
pub mod drag;
pub mod projection;
pub mod storage;
pub mod store;

pub use board::GroupBoard;
pub use config::{load_config, Config};
pub use drag::{DragCoordinator, DragState, DropAction, DropTarget, UNGROUPED_ID};
pub use projection::{project, ungrouped, Row, UNGROUPED_NAME};
pub use storage::{
    FileStore, MemoryStore, StorageError, StoragePort, LEAD_GROUPS_KEY, OWNER_GROUPS_KEY,
};
pub use store::GroupStore;
