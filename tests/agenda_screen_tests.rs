use goevents::agenda::api::EventSource;
use goevents::agenda::catalog::{Phase, FEATURED_COUNT, LOAD_ERROR_MESSAGE};
use goevents::agenda::model::{EventKey, Facet};
use goevents::agenda::screen::{AgendaContent, AgendaSession, Listing};
use goevents::app::{AppState, Page, Theme};
use common::serve_once_after;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

mod common;

fn sample_source() -> EventSource {
    EventSource::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/agenda.json"))
}

fn listed_titles(session: &AgendaSession) -> Vec<String> {
    match session.render().content {
        AgendaContent::Ready {
            listing: Listing::Events(events),
            ..
        } => events.into_iter().map(|event| event.title).collect(),
        _ => vec![],
    }
}

#[test_log::test(tokio::test)]
async fn should_render_loading_then_the_agenda() {
    let mut session = AgendaSession::mount(sample_source());

    assert_eq!(session.render().content, AgendaContent::Loading);
    assert_eq!(session.loaded().await, &Phase::Ready);

    match session.render().content {
        AgendaContent::Ready { featured, listing } => {
            assert_eq!(featured.len(), FEATURED_COUNT);
            assert!(matches!(listing, Listing::Events(events) if events.len() == 5));
        }
        content => panic!("Unexpected content {:?}", content),
    }
}

#[test_log::test(tokio::test)]
async fn filtering_by_concert_should_list_both_concerts_in_order() {
    let mut session = AgendaSession::mount(sample_source());
    session.loaded().await;

    session.select_category("Concert").unwrap();

    assert_eq!(
        listed_titles(&session),
        vec!["Concert Symphonique", "Concert Électro"]
    );
}

#[test_log::test(tokio::test)]
async fn searching_should_look_at_descriptions_ignoring_case() {
    let mut session = AgendaSession::mount(sample_source());
    session.loaded().await;

    session.search("BEETHOVEN");

    assert_eq!(listed_titles(&session), vec!["Concert Symphonique"]);
}

#[test_log::test(tokio::test)]
async fn featured_events_should_stay_while_filtering() {
    let mut session = AgendaSession::mount(sample_source());
    session.loaded().await;

    session.search("zzzqqq-no-match");
    session.select_facet(Facet::Exposition);

    match session.render().content {
        AgendaContent::Ready { featured, listing } => {
            let featured: Vec<String> = featured.into_iter().map(|event| event.title).collect();
            assert_eq!(
                featured,
                vec![
                    "Conférence Tech Innovation",
                    "Festival Jazz sous les Étoiles",
                    "Concert Symphonique"
                ]
            );
            assert!(matches!(listing, Listing::NoResults { .. }));
        }
        content => panic!("Unexpected content {:?}", content),
    }
}

#[test_log::test(tokio::test)]
async fn expanding_an_entry_should_show_its_details_only() {
    let mut session = AgendaSession::mount(sample_source());
    session.loaded().await;

    session.toggle(EventKey::new(3));

    match session.render().content {
        AgendaContent::Ready {
            listing: Listing::Events(events),
            ..
        } => {
            let expanded: Vec<&str> = events
                .iter()
                .filter(|event| event.details.is_some())
                .map(|event| event.title.as_str())
                .collect();
            assert_eq!(expanded, vec!["Exposition Impressionniste"]);
            assert!(events[3].show_image_placeholder);
            assert_eq!(events[3].primary_location, "Musée des Beaux-Arts");
        }
        content => panic!("Unexpected content {:?}", content),
    }
}

#[test_log::test(tokio::test)]
async fn when_source_fails_should_render_the_error_instead_of_a_list() {
    let mut session = AgendaSession::mount(EventSource::from("missing/agenda.json"));

    session.loaded().await;

    assert_eq!(
        session.render().content,
        AgendaContent::Failed {
            message: LOAD_ERROR_MESSAGE.to_string()
        }
    );
}

#[test_log::test(tokio::test)]
async fn polling_should_eventually_pick_up_the_events() {
    let mut session = AgendaSession::mount(sample_source());

    while session.poll_load() == &Phase::Loading {
        tokio::task::yield_now().await;
    }

    assert_eq!(session.catalog().len(), 5);
}

#[test_log::test(tokio::test)]
async fn navigating_back_to_the_agenda_should_load_it_again() {
    let mut app = AppState::new(sample_source(), Theme::Dark);

    app.set_page(Page::Agenda);
    app.set_page(Page::Accueil);
    assert!(app.agenda().is_none());

    app.set_page(Page::Agenda);
    let agenda = app.agenda_mut().unwrap();

    assert_eq!(agenda.loaded().await, &Phase::Ready);
    assert_eq!(app.theme(), Theme::Dark);
}

#[test_log::test(tokio::test)]
async fn when_a_wait_for_the_events_is_cancelled_should_still_become_ready() {
    let url = serve_once_after(
        Duration::from_millis(300),
        "HTTP/1.1 200 OK",
        r#"[{ "id": 1, "title": "Braderie de Lille" }]"#,
    )
    .await;
    let mut session = AgendaSession::mount(EventSource::from(url.as_str()));

    assert!(timeout(Duration::from_millis(50), session.loaded()).await.is_err());
    assert_eq!(session.render().content, AgendaContent::Loading);

    assert_eq!(session.loaded().await, &Phase::Ready);
    assert_eq!(session.catalog().len(), 1);
}

#[test_log::test(tokio::test)]
async fn polling_after_a_cancelled_wait_should_pick_up_the_events() {
    let url = serve_once_after(
        Duration::from_millis(100),
        "HTTP/1.1 200 OK",
        r#"[{ "id": 1, "title": "Braderie de Lille" }]"#,
    )
    .await;
    let mut session = AgendaSession::mount(EventSource::from(url.as_str()));

    assert!(timeout(Duration::from_millis(20), session.loaded()).await.is_err());
    tokio::time::sleep(Duration::from_millis(400)).await;

    let phase = timeout(Duration::from_secs(5), async {
        while session.poll_load() == &Phase::Loading {
            tokio::task::yield_now().await;
        }
    })
    .await;

    assert!(phase.is_ok());
    assert_eq!(session.catalog().phase(), &Phase::Ready);
}
