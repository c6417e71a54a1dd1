use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Group key used for records that carry no usable date.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Opaque record identifier. The listings service hands these out as
/// strings (document ids) but numeric ids are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Number(n) => RecordId(n.to_string()),
        })
    }
}

// _id
//  ├── date      (ISO-8601, optional)
//  ├── city
//  ├── phone     (optional)
//  ├── email     (optional)
//  ├── location  (optional)
//  └── details   (optional)

/// One landlord listing as returned by `GET /landlords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub date: Option<String>,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

/// Wire shape. Every field except the id is read leniently: `null` or a
/// missing key becomes empty, and a scalar of the wrong type is kept as text.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "_id", default)]
    primary_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_text")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    details: Option<String>,
}

impl TryFrom<RawRecord> for Record {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        // `_id` wins when a payload carries both keys.
        let id = raw
            .primary_id
            .or(raw.id)
            .ok_or_else(|| "listing has no _id".to_string())?;

        Ok(Record {
            id,
            date: raw.date,
            city: raw.city.unwrap_or_default(),
            phone: raw.phone,
            email: raw.email,
            location: raw.location,
            details: raw.details,
        })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    })
}

impl Record {
    /// Calendar-day key: everything before the first `T` of the timestamp,
    /// or [`UNKNOWN_DATE`] when the date is missing or empty.
    pub fn date_key(&self) -> &str {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => date.split_once('T').map_or(date, |(day, _)| day),
            _ => UNKNOWN_DATE,
        }
    }
}
