use crate::agenda::api::EventSource;
use crate::agenda::screen::AgendaSession;
use tracing::info;

#[derive(
    strum::EnumString, strum::IntoStaticStr, strum::Display, Debug, Default, Copy, Clone, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Accueil,
    Agenda,
    Contact,
    #[strum(serialize = "envoicontact")]
    ContactSent,
    #[strum(serialize = "espace")]
    EspaceClient,
}

#[derive(
    strum::EnumString, strum::IntoStaticStr, strum::Display, Debug, Default, Copy, Clone, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/**
Root state of the application, passed explicitly to whoever renders it.
The agenda page is only mounted while it is the current page, leaving it tears
the page down along with any load still in flight.
*/
#[derive(Debug)]
pub struct AppState {
    page: Page,
    theme: Theme,
    source: EventSource,
    agenda: Option<AgendaSession>,
}

impl AppState {
    pub fn new(source: EventSource, theme: Theme) -> Self {
        Self {
            page: Page::default(),
            theme,
            source,
            agenda: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches the current page. Opening the agenda must happen within a tokio runtime.
    pub fn set_page(&mut self, page: Page) {
        if page == self.page && (page != Page::Agenda || self.agenda.is_some()) {
            return;
        }

        info!("Navigating from {} to {}", self.page, page);

        self.page = page;
        self.agenda = match page {
            Page::Agenda => Some(AgendaSession::mount(self.source.clone())),
            _ => None,
        };
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn agenda(&self) -> Option<&AgendaSession> {
        self.agenda.as_ref()
    }

    pub fn agenda_mut(&mut self) -> Option<&mut AgendaSession> {
        self.agenda.as_mut()
    }
}
