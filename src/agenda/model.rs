use std::fmt::{Display, Formatter};

/// Category given to events that don't declare one
pub const DEFAULT_CATEGORY: &str = "Event";

/// Identity assigned to an event when the payload is validated.
///
/// Keys follow catalog order and are unique within a session, even when
/// several events share the same title or the source omits its `id`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct EventKey(usize);

impl EventKey {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
}

impl Display for EventKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `id` as it was found in the source payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceId {
    Text(String),
    Number(i64),
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceId::Text(id) => write!(f, "{}", id),
            SourceId::Number(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub key: EventKey,
    pub source_id: Option<SourceId>,
    pub title: String,
    pub description: String,
    pub occurring_at: Schedule,
    pub location: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl Event {
    pub fn new(
        key: EventKey,
        title: String,
        description: String,
        occurring_at: Schedule,
        location: String,
        category: String,
    ) -> Self {
        Self {
            key,
            source_id: None,
            title,
            description,
            occurring_at,
            location,
            category,
            image_url: None,
        }
    }

    pub fn with_source_id(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    pub fn with_image(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url).filter(|url| !url.is_empty());
        self
    }
}

/// Display-formatted schedule, not necessarily a valid calendar date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub date: String,
    pub time: Option<String>,
}

impl Schedule {
    pub fn new(date: String, time: Option<String>) -> Self {
        Self { date, time }
    }
}

/// Category filter shown above the agenda
#[derive(
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumIter,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Facet {
    #[default]
    #[strum(to_string = "Tous", serialize = "All")]
    All,
    #[strum(serialize = "Conférence")]
    Conference,
    Festival,
    Concert,
    Exposition,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn includes(&self, category: &str) -> bool {
        match self {
            Facet::All => true,
            facet => facet.label() == category,
        }
    }
}
