use super::api::EventSource;
use super::catalog::{Catalog, Phase};
use super::disclosure::DisclosureState;
use super::loader::{spawn_load, PendingLoad};
use super::model::{EventKey, Facet};
use super::view::{present, EventView};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

pub const NO_RESULTS_MESSAGE: &str = "Aucun événement ne correspond à votre recherche.";

/// Everything the agenda page needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaScreen {
    pub query: String,
    pub filters: Vec<FilterButton>,
    pub content: AgendaContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub facet: Facet,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaContent {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        featured: Vec<EventView>,
        listing: Listing,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Events(Vec<EventView>),
    NoResults { message: &'static str },
}

/// State of a mounted agenda page: the catalog, the unfolded entries and the load in flight
#[derive(Debug, Default)]
pub struct AgendaSession {
    catalog: Catalog,
    disclosure: DisclosureState,
    pending: Option<PendingLoad>,
}

impl AgendaSession {
    /// Mounts the page and starts loading its events. Must be called within a tokio runtime.
    #[instrument(skip(source), fields(source = %source))]
    pub fn mount(source: EventSource) -> Self {
        debug!("Mounting agenda");

        Self {
            pending: Some(spawn_load(source)),
            ..Self::default()
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Waits for the events load, if one is still in flight
    pub async fn loaded(&mut self) -> &Phase {
        if let Some(pending) = self.pending.as_mut() {
            pending.deliver(&mut self.catalog).await;
            self.pending = None;
        }

        self.catalog.phase()
    }

    /// Picks up the events load outcome if it already arrived
    pub fn poll_load(&mut self) -> &Phase {
        if let Some(pending) = self.pending.as_mut() {
            pending.try_deliver(&mut self.catalog);

            if pending.is_delivered() {
                self.pending = None;
            }
        }

        self.catalog.phase()
    }

    pub fn search(&mut self, query: &str) {
        self.catalog.set_query(query);
    }

    pub fn select_facet(&mut self, facet: Facet) {
        self.catalog.set_facet(facet);
    }

    /// Selects the filter button with the given label
    pub fn select_category(&mut self, label: &str) -> Result<(), strum::ParseError> {
        let facet = Facet::from_str(label)?;
        self.catalog.set_facet(facet);
        Ok(())
    }

    /// Unfolds or folds an entry, keys that aren't in the catalog are ignored
    pub fn toggle(&mut self, key: EventKey) {
        if self.catalog.get(key).is_none() {
            warn!("No event {} to toggle", key);
            return;
        }

        self.disclosure.toggle(key);
    }

    pub fn is_expanded(&self, key: EventKey) -> bool {
        self.disclosure.is_expanded(key)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render(&self) -> AgendaScreen {
        let active = self.catalog.active_facet();
        let filters = self
            .catalog
            .categories()
            .map(|facet| FilterButton {
                facet,
                label: facet.label(),
                active: facet == active,
            })
            .collect();

        AgendaScreen {
            query: self.catalog.query().to_string(),
            filters,
            content: self.render_content(),
        }
    }

    fn render_content(&self) -> AgendaContent {
        match self.catalog.phase() {
            Phase::Loading => AgendaContent::Loading,
            Phase::Failed { message } => AgendaContent::Failed {
                message: message.to_string(),
            },
            Phase::Ready => {
                let featured = self
                    .catalog
                    .featured()
                    .iter()
                    .map(|event| present(event, false))
                    .collect();
                let events: Vec<EventView> = self
                    .catalog
                    .filtered_view()
                    .into_iter()
                    .map(|event| present(event, self.disclosure.is_expanded(event.key)))
                    .collect();

                let listing = if events.is_empty() {
                    Listing::NoResults {
                        message: NO_RESULTS_MESSAGE,
                    }
                } else {
                    Listing::Events(events)
                };

                AgendaContent::Ready { featured, listing }
            }
        }
    }
}
