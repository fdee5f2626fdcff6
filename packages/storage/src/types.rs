// ABOUTME: Person record type definitions
// ABOUTME: Wire names follow the public JSON contract (ID, Name, Sex)

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the person table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Person {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
}

/// Client-supplied fields for create and update.
///
/// Keys match case-insensitively (`Name`, `name`, `NAME`). Missing or `null`
/// fields decode as empty strings, a `null` body decodes as all-empty, and any
/// other key (including `ID`) is ignored since ids are only ever assigned by
/// the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonInput {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, sex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex: sex.into(),
        }
    }
}

impl<'de> Deserialize<'de> for PersonInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PersonInputVisitor)
    }
}

struct PersonInputVisitor;

impl<'de> Visitor<'de> for PersonInputVisitor {
    type Value = PersonInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with Name and Sex fields")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PersonInput::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PersonInput::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = PersonInput::default();

        // Later duplicates overwrite earlier ones.
        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "name" => input.name = next_text(&mut map, "Name")?,
                "sex" => input.sex = next_text(&mut map, "Sex")?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(input)
    }
}

/// Read a string value, treating `null` as empty and naming the field on error
fn next_text<'de, A>(map: &mut A, field: &str) -> Result<String, A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<Option<String>>()
        .map(Option::unwrap_or_default)
        .map_err(|e| de::Error::custom(format!("{}: {}", field, e)))
}
