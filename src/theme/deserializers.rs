//! Serde plumbing for the wire shape of class tables.
//!
//! A serialized table is a single flat JSON object: the `all` key carries
//! the cross-cutting defaults and every other key is an input type name
//! mapping to a region/class object. Enum keys travel as their wire names
//! so authored files read like plain config.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use super::kinds::{InputType, Region};
use super::schema::{ClassGroup, ClassList, ClassTable};

impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InputType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputTypeVisitor;

        impl Visitor<'_> for InputTypeVisitor {
            type Value = InputType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an input type name such as `text` or `datetime-local`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                InputType::from_str(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(InputTypeVisitor)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegionVisitor;

        impl Visitor<'_> for RegionVisitor {
            type Value = Region;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a region name such as `label` or `input`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Region::from_str(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(RegionVisitor)
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClassList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClassListVisitor;

        impl Visitor<'_> for ClassListVisitor {
            type Value = ClassList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-empty space-separated class string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.trim().is_empty() {
                    return Err(de::Error::custom("class string must not be empty"));
                }
                Ok(ClassList::from(v.to_owned()))
            }
        }

        deserializer.deserialize_str(ClassListVisitor)
    }
}

/// Key carrying the defaults group in a serialized table.
const ALL_KEY: &str = "all";

impl Serialize for ClassTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len() + 1))?;
        map.serialize_entry(ALL_KEY, self.defaults())?;
        for (ty, group) in self.iter() {
            map.serialize_entry(ty.as_str(), group)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClassTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClassTableVisitor;

        impl<'de> Visitor<'de> for ClassTableVisitor {
            type Value = ClassTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a class table object keyed by `all` and input type names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = ClassTable::default();
                while let Some(key) = access.next_key::<String>()? {
                    let group: ClassGroup = access.next_value()?;
                    if key == ALL_KEY {
                        table.set_defaults(group);
                    } else {
                        let ty = InputType::from_str(&key).map_err(de::Error::custom)?;
                        table.insert(ty, group);
                    }
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(ClassTableVisitor)
    }
}
