//! Build-time marketing copy for the landing page.
//!
//! These tables are defined once and iterated at render time; they are not
//! runtime state. Feature titles and benefit ids double as iteration keys
//! and must be unique within their table.

use std::collections::HashSet;

use crate::components::Icon;

pub const PRODUCT_NAME: &str = "MovieNight";
pub const PAGE_TITLE: &str = "MovieNight - Collaborative Movie Discovery";
pub const HERO_BADGE: &str = "Collaborative Movie Discovery";
pub const TAGLINE: &str = "Discover movies together. Create shared spaces, \
     build watchlists, and track your favorite films with the people you \
     care about.";
pub const FEATURES_HEADING: &str = "Everything you need for movie nights";
pub const FEATURES_SUBHEADING: &str = "MovieNight brings your \
     movie-watching experience together in one collaborative platform";

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

pub struct Benefit {
    pub id: &'static str,
    pub icon: Icon,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Users,
        title: "Shared Spaces",
        description: "Create collaborative movie collections with friends \
             and family",
        badge: Some("Collaborative"),
    },
    Feature {
        icon: Icon::Film,
        title: "Smart Watchlists",
        description: "Build and manage watchlists together in real-time",
        badge: Some("Real-time"),
    },
    Feature {
        icon: Icon::Heart,
        title: "Track Favorites",
        description: "Keep track of movies you've loved and share \
             recommendations",
        badge: Some("Personal"),
    },
];

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        id: "discover",
        icon: Icon::Sparkles,
        text: "Discover new movies based on group preferences",
    },
    Benefit {
        id: "save-time",
        icon: Icon::Clock,
        text: "Save time deciding what to watch",
    },
    Benefit {
        id: "family-friendly",
        icon: Icon::Shield,
        text: "Family-friendly content filtering",
    },
];

/// Check the content tables before rendering them. A duplicate key is a
/// configuration defect; the caller shows the fallback view instead of a
/// partially keyed page.
pub fn validate() -> Result<(), String> {
    if let Some(title) = first_duplicate(FEATURES.iter().map(|f| f.title)) {
        return Err(format!("duplicate feature title: {title}"));
    }
    if let Some(id) = first_duplicate(BENEFITS.iter().map(|b| b.id)) {
        return Err(format!("duplicate benefit id: {id}"));
    }
    Ok(())
}

fn first_duplicate<'a>(
    keys: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut seen = HashSet::new();
    keys.into_iter().find(|key| !seen.insert(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_pass_validation() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn feature_cards_are_fixed_in_count_and_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            ["Shared Spaces", "Smart Watchlists", "Track Favorites"]
        );
    }

    #[test]
    fn benefit_rows_are_fixed_in_count_and_order() {
        let ids: Vec<_> = BENEFITS.iter().map(|b| b.id).collect();
        assert_eq!(ids, ["discover", "save-time", "family-friendly"]);
    }

    #[test]
    fn every_feature_carries_a_badge() {
        assert!(FEATURES.iter().all(|f| f.badge.is_some()));
    }

    #[test]
    fn duplicate_keys_are_detected() {
        assert_eq!(
            first_duplicate(["discover", "save-time", "discover"]),
            Some("discover")
        );
        assert_eq!(first_duplicate(["a", "b", "c"]), None);
    }
}
