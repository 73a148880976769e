use super::api::LoadError;
use super::filter::Filter;
use super::model::{Event, EventKey, Facet};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};

/// How many events the "à la une" section shows
pub const FEATURED_COUNT: usize = 3;

pub const LOAD_ERROR_MESSAGE: &str =
    "Impossible de charger les événements. Veuillez réessayer plus tard.";

#[derive(Debug, Default, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Phase {
    #[default]
    Loading,
    Failed { message: String },
    Ready,
}

/// Events of the session along with the search inputs applied to them
#[derive(Debug, Default)]
pub struct Catalog {
    phase: Phase,
    events: Vec<Event>,
    query: String,
    facet: Facet,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose events are already available
    pub fn with_events(events: Vec<Event>) -> Self {
        let mut catalog = Self::new();
        catalog.complete(Ok(events));
        catalog
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /**
    Applies the outcome of the events load.
    Only the first outcome is applied, anything after it is ignored and `false` is returned.
    */
    #[tracing::instrument(skip_all)]
    pub fn complete(&mut self, outcome: Result<Vec<Event>, LoadError>) -> bool {
        if self.phase != Phase::Loading {
            let phase: &'static str = (&self.phase).into();
            warn!("Catalog is already {}, ignoring load outcome", phase);
            return false;
        }

        match outcome {
            Ok(events) => {
                info!("Catalog ready with {} events", events.len());
                self.events = events;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                error!("Failed loading events: {}", err);
                self.phase = Phase::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                };
            }
        }

        true
    }

    pub fn set_query(&mut self, query: &str) {
        debug!("Search set to '{}'", query);
        self.query = query.to_string();
    }

    pub fn set_facet(&mut self, facet: Facet) {
        debug!("Category set to '{}'", facet);
        self.facet = facet;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_facet(&self) -> Facet {
        self.facet
    }

    /// Facets offered to the user, "Tous" first
    pub fn categories(&self) -> impl Iterator<Item = Facet> {
        Facet::iter()
    }

    /// Events matching the current search, in catalog order
    pub fn filtered_view(&self) -> Vec<&Event> {
        let filter = Filter::new(&self.query, self.facet);

        self.events
            .iter()
            .filter(|event| filter.matches(event))
            .collect()
    }

    /// First events of the whole catalog, regardless of the current search
    pub fn featured(&self) -> &[Event] {
        &self.events[..self.events.len().min(FEATURED_COUNT)]
    }

    pub fn get(&self, key: EventKey) -> Option<&Event> {
        self.events.iter().find(|event| event.key == key)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
