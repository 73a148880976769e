use super::model::{Event, EventKey, Schedule, SourceId, DEFAULT_CATEGORY};
use serde::{Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

// Note: every field is lenient, a value of the wrong type is read as missing
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<SourceId>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_paragraphs")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub image: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordRejected {
    #[error("not an event object: {0}")]
    Malformed(String),
    #[error("event has no title")]
    MissingTitle,
}

impl RawEvent {
    pub fn to_model(&self, key: EventKey) -> Result<Event, RecordRejected> {
        if self.title.trim().is_empty() {
            return Err(RecordRejected::MissingTitle);
        }

        let category = if self.category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category.to_string()
        };
        let time = Some(self.time.to_string()).filter(|time| !time.is_empty());

        let mut event = Event::new(
            key,
            self.title.to_string(),
            self.description.to_string(),
            Schedule::new(self.date.to_string(), time),
            self.location.to_string(),
            category,
        )
        .with_image(self.image.to_string());

        if let Some(id) = &self.id {
            event = event.with_source_id(id.clone());
        }

        Ok(event)
    }
}

/// Validates one decoded record, giving it `key` as its identity
pub fn validate(raw: Value, key: EventKey) -> Result<Event, RecordRejected> {
    serde_json::from_value::<RawEvent>(raw)
        .map_err(|err| RecordRejected::Malformed(err.to_string()))?
        .to_model(key)
}

/// Keeps the valid records of a payload, in source order.
///
/// Rejected records are only logged, the catalog simply ends up smaller
/// than the payload.
pub fn validate_all(payload: Vec<Value>) -> Vec<Event> {
    let mut events = Vec::with_capacity(payload.len());

    for (position, raw) in payload.into_iter().enumerate() {
        match validate(raw, EventKey::new(events.len())) {
            Ok(event) => events.push(event),
            Err(rejection) => {
                warn!("Dropping record at position {}: {}", position, rejection);
            }
        }
    }

    events
}

fn deserialize_id<'de, D>(d: D) -> Result<Option<SourceId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(id) if !id.is_empty() => Some(SourceId::Text(id)),
        Value::Number(id) => Some(match id.as_i64() {
            Some(id) => SourceId::Number(id),
            None => SourceId::Text(id.to_string()),
        }),
        _ => None,
    })
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn deserialize_paragraphs<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;

    Ok(match SingleOrVec::<String>::deserialize(value) {
        Ok(SingleOrVec::Single(description)) => description,
        Ok(SingleOrVec::Vec(paragraphs)) => paragraphs.join("\n"),
        Err(_) => String::new(),
    })
}
