use super::model::{Event, EventKey};

const EXCERPT_LENGTH: usize = 100;
const ELLIPSIS: &str = "...";

const EXPANDED_INDICATOR: char = '▼';
const COLLAPSED_INDICATOR: char = '▶';

pub const IMAGE_UNAVAILABLE: &str = "Image non disponible";
pub const EXPAND_HINT: &str = "Cliquez pour afficher les détails ↓";

/// What an agenda entry shows, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub key: EventKey,
    pub title: String,
    pub badge: String,
    pub date: String,
    pub excerpt: String,
    pub primary_location: String,
    pub image_url: Option<String>,
    pub show_image_placeholder: bool,
    pub expanded: bool,
    /// Only filled in while the entry is expanded
    pub details: Option<EventDetails>,
}

/// Lines of the detail panel, empty ones are left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetails {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EventView {
    pub fn indicator(&self) -> char {
        if self.expanded {
            EXPANDED_INDICATOR
        } else {
            COLLAPSED_INDICATOR
        }
    }
}

pub fn present(event: &Event, expanded: bool) -> EventView {
    let image_url = event.image_url.clone().filter(|url| !url.is_empty());

    EventView {
        key: event.key,
        title: event.title.to_string(),
        badge: event.category.to_string(),
        date: event.occurring_at.date.to_string(),
        excerpt: excerpt(&event.description),
        primary_location: primary_location(&event.location),
        show_image_placeholder: image_url.is_none(),
        image_url,
        expanded,
        details: expanded.then(|| details(event)),
    }
}

/// First characters of `text`, with an ellipsis only when something was cut
pub fn excerpt(text: &str) -> String {
    let chars = voca_rs::split::chars(text);

    if chars.len() > EXCERPT_LENGTH {
        format!("{}{}", chars[..EXCERPT_LENGTH].concat(), ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Venue part of a "venue, city" location
pub fn primary_location(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn details(event: &Event) -> EventDetails {
    let non_empty = |value: &str| Some(value.to_string()).filter(|value| !value.is_empty());

    EventDetails {
        date: non_empty(&event.occurring_at.date),
        time: event.occurring_at.time.as_deref().and_then(non_empty),
        location: non_empty(&event.location),
        description: non_empty(&event.description),
    }
}
