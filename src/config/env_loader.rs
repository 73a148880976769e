use crate::agenda::api::EventSource;
use crate::agenda::model::{EventKey, Facet};
use crate::app::Theme;
use crate::config::model::{Config, SearchConfig};
use std::env;
use std::str::FromStr;

const DEFAULT_SOURCE: &str = "data/agenda.json";

pub fn load_config() -> Config {
    let source = EventSource::from(
        env::var("AGENDA_SOURCE")
            .unwrap_or_else(|_| DEFAULT_SOURCE.to_string())
            .as_str(),
    );

    Config {
        source,
        theme: load_parsed_config("AGENDA_THEME", Theme::default(), "either 'light' or 'dark'"),
        search: SearchConfig {
            query: env::var("AGENDA_QUERY").unwrap_or_default(),
            facet: load_parsed_config(
                "AGENDA_CATEGORY",
                Facet::default(),
                "one of 'Tous', 'Conférence', 'Festival', 'Concert' or 'Exposition'",
            ),
            expanded: load_keys_config("AGENDA_EXPAND"),
        },
    }
}

fn load_parsed_config<T: FromStr>(name: &str, default: T, expected: &str) -> T {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected {}.", name, expected)
        }),
        Err(_) => default,
    }
}

fn load_keys_config(name: &str) -> Vec<EventKey> {
    match env::var(name) {
        Ok(value) => parse_keys(&value).unwrap_or_else(|| {
            panic!(
                "Invalid config '{}'. Expected comma-separated event positions.",
                name
            )
        }),
        Err(_) => Vec::new(),
    }
}

fn parse_keys(value: &str) -> Option<Vec<EventKey>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|position| !position.is_empty())
        .map(|position| position.parse().ok().map(EventKey::new))
        .collect()
}
