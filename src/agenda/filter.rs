use super::model::{Event, Facet};

/// Search text and category facet, prepared once per pass over the catalog
#[derive(Debug, Clone)]
pub struct Filter {
    query: String,
    facet: Facet,
}

impl Filter {
    pub fn new(query: &str, facet: Facet) -> Self {
        Self {
            query: query.to_lowercase(),
            facet,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_text(event) && self.facet.includes(&event.category)
    }

    fn matches_text(&self, event: &Event) -> bool {
        self.query.is_empty()
            || event.title.to_lowercase().contains(&self.query)
            || event.description.to_lowercase().contains(&self.query)
    }
}

/// Case-insensitive match on title or description, AND'ed with the facet
pub fn matches(event: &Event, query: &str, facet: Facet) -> bool {
    Filter::new(query, facet).matches(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::model::{EventKey, Schedule};

    fn event(title: &str, description: &str, category: &str) -> Event {
        Event::new(
            EventKey::new(0),
            title.to_string(),
            description.to_string(),
            Schedule::default(),
            "Lyon".to_string(),
            category.to_string(),
        )
    }

    #[test_log::test]
    fn when_query_is_empty_and_facet_is_all_should_match_everything() {
        let events = [
            event("Fête des Lumières", "Illuminations", "Festival"),
            event("Forum", "", "Conférence"),
            event("Soirée", "", "Event"),
        ];

        assert!(events.iter().all(|e| matches(e, "", Facet::All)));
    }

    #[test_log::test]
    fn should_match_title_ignoring_case() {
        let concert = event("Orchestre National", "", "Concert");

        assert!(matches(&concert, "orchestre", Facet::All));
        assert!(matches(&concert, "NATIONAL", Facet::All));
    }

    #[test_log::test]
    fn should_match_description_when_title_does_not() {
        let concert = event("Orchestre National", "Symphonie n°9 de Beethoven", "Concert");

        assert!(matches(&concert, "beethoven", Facet::All));
    }

    #[test_log::test]
    fn when_query_occurs_nowhere_should_never_match() {
        let concert = event("Orchestre National", "Symphonie", "Concert");

        for facet in [Facet::All, Facet::Concert, Facet::Festival] {
            assert!(!matches(&concert, "zzzqqq-no-match", facet));
        }
    }

    #[test_log::test]
    fn should_require_both_text_and_facet() {
        let concert = event("Orchestre National", "Symphonie", "Concert");

        assert!(matches(&concert, "symphonie", Facet::Concert));
        assert!(!matches(&concert, "symphonie", Facet::Exposition));
    }

    #[test_log::test]
    fn should_not_match_location() {
        let concert = event("Orchestre National", "Symphonie", "Concert");

        assert!(!matches(&concert, "lyon", Facet::All));
    }
}
