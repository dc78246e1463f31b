//! Serializable, anemic data structures for accessing the school
//! activities API in a type-safe manner.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Activity {
    pub description      : String,
    pub schedule         : String,
    pub max_participants : usize,
    pub participants     : Vec<String>,
}

/// The full catalog keyed by activity name.
///
/// Serialized as a single JSON object. A plain map type would reorder
/// the keys, so the wrapped pairs keep the catalog insertion order on
/// the wire.
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Activities(pub Vec<(String, Activity)>);

impl Serialize for Activities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity names to activities")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Success response body of the mutating endpoints.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Confirmation {
    pub message: String,
}

/// Error response body of the JSON API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    pub detail: String,
}
