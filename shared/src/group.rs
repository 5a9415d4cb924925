use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::GroupRecord;

/// A named, ordered, colorable bucket of domain records.
///
/// Generic over the record type so lead groups and listing groups share
/// one implementation instead of casting member arrays at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<R> {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    pub order: u32,
    pub color: Option<String>,
    pub members: Vec<R>,
}

impl<R> Group<R> {
    pub fn new(name: String, order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            visible: true,
            order,
            color: None,
            members: Vec::new(),
        }
    }
}

// The persisted layout keys the member array by domain ("leads" vs
// "listings"), so serialization is written out by hand against
// `R::MEMBERS_FIELD` rather than derived.
impl<R: GroupRecord + Serialize> Serialize for Group<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.color.is_some() { 6 } else { 5 };
        let mut s = serializer.serialize_struct("Group", fields)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("visible", &self.visible)?;
        s.serialize_field("order", &self.order)?;
        if self.color.is_some() {
            s.serialize_field("color", &self.color)?;
        }
        s.serialize_field(R::MEMBERS_FIELD, &self.members)?;
        s.end()
    }
}

impl<'de, R> Deserialize<'de> for Group<R>
where
    R: GroupRecord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupVisitor<R>(PhantomData<R>);

        impl<'de, R> Visitor<'de> for GroupVisitor<R>
        where
            R: GroupRecord + Deserialize<'de>,
        {
            type Value = Group<R>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a group object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Group<R>, A::Error> {
                let mut id = None;
                let mut name = None;
                let mut visible = None;
                let mut order = None;
                let mut color = None;
                let mut members = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "id" => id = Some(map.next_value()?),
                        "name" => name = Some(map.next_value()?),
                        "visible" => visible = Some(map.next_value()?),
                        "order" => order = Some(map.next_value()?),
                        "color" => color = map.next_value()?,
                        k if k == R::MEMBERS_FIELD => members = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(Group {
                    id: id.ok_or_else(|| de::Error::missing_field("id"))?,
                    name: name.ok_or_else(|| de::Error::missing_field("name"))?,
                    visible: visible.unwrap_or(true),
                    order: order.unwrap_or(0),
                    color,
                    members: members.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(GroupVisitor(PhantomData))
    }
}
