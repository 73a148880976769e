use goevents::agenda::screen::{AgendaContent, AgendaScreen, Listing};
use goevents::agenda::view::{EventView, EXPAND_HINT, IMAGE_UNAVAILABLE};
use goevents::app::{AppState, Page};
use goevents::config::env_loader::load_config;
use goevents::tracing::setup_loki;
use itertools::Itertools;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;
    let config = load_config();

    let mut app = AppState::new(config.source, config.theme);
    app.set_page(Page::Agenda);

    if let Some(agenda) = app.agenda_mut() {
        agenda.loaded().await;

        agenda.search(&config.search.query);
        agenda.select_facet(config.search.facet);
        for key in config.search.expanded {
            agenda.toggle(key);
        }
    }

    match app.agenda() {
        Some(agenda) => log_screen(&agenda.render()),
        None => warn!("Agenda page is not mounted"),
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        if let Err(err) = handle.await {
            error!("Loki background task failed: {}", err);
        }
    }
}

fn log_screen(screen: &AgendaScreen) {
    let filters = screen
        .filters
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.label)
            } else {
                button.label.to_string()
            }
        })
        .join(" ");

    info!("Recherche '{}' | {}", screen.query, filters);

    match &screen.content {
        AgendaContent::Loading => info!("Chargement..."),
        AgendaContent::Failed { message } => error!("{}", message),
        AgendaContent::Ready { featured, listing } => {
            info!(
                "Événements à la une: {}",
                featured.iter().map(|event| event.title.as_str()).join(", ")
            );

            match listing {
                Listing::Events(events) => events.iter().for_each(log_event),
                Listing::NoResults { message } => info!("{}", message),
            }
        }
    }
}

fn log_event(event: &EventView) {
    info!("{} {} [{}]", event.indicator(), event.title, event.badge);

    match &event.details {
        Some(details) => {
            let lines = [&details.date, &details.time, &details.location, &details.description]
                .into_iter()
                .flatten()
                .join(" | ");
            let image = event.image_url.as_deref().unwrap_or(IMAGE_UNAVAILABLE);

            info!("    {} ({})", lines, image);
        }
        None => info!(
            "    {} 📍 {} ({})",
            event.excerpt, event.primary_location, EXPAND_HINT
        ),
    }
}
