use crate::agenda::api::EventSource;
use crate::agenda::model::{EventKey, Facet};
use crate::app::Theme;

#[derive(Debug)]
pub struct Config {
    pub source: EventSource,
    pub theme: Theme,
    pub search: SearchConfig,
}

/// Search applied to the agenda once it's loaded
#[derive(Debug, Default)]
pub struct SearchConfig {
    pub query: String,
    pub facet: Facet,
    pub expanded: Vec<EventKey>,
}
