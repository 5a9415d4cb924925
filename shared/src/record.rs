use std::hash::Hash;

/// A domain record that can be grouped: leads and listings.
///
/// The natural key is what de-duplication and the "ungrouped" set
/// difference operate on; `MEMBERS_FIELD` is the JSON field name the
/// persisted group arrays use for this record type.
pub trait GroupRecord: Clone {
    type Key: Eq + Hash;

    const MEMBERS_FIELD: &'static str;

    fn natural_key(&self) -> Self::Key;
}
