//! Presentational state and the directory filter

use crate::types::{Category, Provider};

/// Category filter for the directory listing.
///
/// `All` is the identity filter: it never removes a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "\u{1F4CB}", // 📋
            CategoryFilter::Only(category) => category.icon(),
        }
    }

    /// `All` followed by every category, in display order.
    pub fn variants() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::variants().iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => provider.category == *category,
        }
    }
}

/// Layout toggle for the directory listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Linear scan over the in-memory provider list.
///
/// A provider is kept when the category filter matches and every searchable
/// field check passes: the free-text query matches case-insensitively
/// against name, location, category label, specialization, or description.
/// An empty query matches everything.
pub fn filter_providers(
    providers: &[Provider],
    query: &str,
    filter: CategoryFilter,
) -> Vec<Provider> {
    let query = query.trim().to_lowercase();

    providers
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| query.is_empty() || matches_query(p, &query))
        .cloned()
        .collect()
}

fn matches_query(provider: &Provider, query: &str) -> bool {
    provider.name.to_lowercase().contains(query)
        || provider.location.to_lowercase().contains(query)
        || provider.category.label().to_lowercase().contains(query)
        || provider.specialization.to_lowercase().contains(query)
        || provider.description.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str, name: &str, category: Category, location: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            category,
            specialization: "General support".to_string(),
            location: location.to_string(),
            description: "Helps children build confidence.".to_string(),
            short_description: String::new(),
            long_description: String::new(),
            rating: 4.5,
            services: vec![],
            contact_email: None,
            phone_number: None,
            experience: None,
            age_groups: None,
            availability: None,
            languages: None,
            image: None,
        }
    }

    fn sample() -> Vec<Provider> {
        vec![
            provider("a", "Brighter Minds", Category::DyslexiaSupport, "Gurugram"),
            provider("b", "FocusForward", Category::AdhdCoaching, "Mumbai"),
            provider("c", "Spectrum Steps", Category::AutismTherapy, "Bengaluru"),
            provider("d", "ReadWell", Category::DyslexiaSupport, "Hyderabad"),
        ]
    }

    #[test]
    fn empty_query_and_all_filter_is_identity() {
        let providers = sample();
        let filtered = filter_providers(&providers, "", CategoryFilter::All);
        assert_eq!(filtered, providers);
    }

    #[test]
    fn results_are_a_subset_of_the_input() {
        let providers = sample();
        for query in ["", "minds", "zzz", "GURUGRAM", "e"] {
            let filtered = filter_providers(&providers, query, CategoryFilter::All);
            assert!(filtered.iter().all(|p| providers.contains(p)), "query {query:?}");
            assert!(filtered.len() <= providers.len());
        }
    }

    #[test]
    fn query_is_case_insensitive_over_searchable_fields() {
        let providers = sample();

        // Name
        let by_name = filter_providers(&providers, "bRiGhTeR", CategoryFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "a");

        // Location
        let by_location = filter_providers(&providers, "mumbai", CategoryFilter::All);
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "b");

        // Category label
        let by_category = filter_providers(&providers, "dyslexia", CategoryFilter::All);
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn category_filter_restricts_to_exact_matches() {
        let providers = sample();
        let filtered =
            filter_providers(&providers, "", CategoryFilter::Only(Category::DyslexiaSupport));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == Category::DyslexiaSupport));
    }

    #[test]
    fn query_and_category_combine() {
        let providers = sample();
        let filtered = filter_providers(
            &providers,
            "hyderabad",
            CategoryFilter::Only(Category::DyslexiaSupport),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d");

        // Same query, wrong category: nothing survives.
        let none = filter_providers(
            &providers,
            "hyderabad",
            CategoryFilter::Only(Category::AdhdCoaching),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let providers = sample();
        let filtered = filter_providers(&providers, "quantum physics", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn clearing_filters_restores_the_full_list() {
        let providers = sample();
        let narrowed =
            filter_providers(&providers, "spectrum", CategoryFilter::Only(Category::AutismTherapy));
        assert_eq!(narrowed.len(), 1);

        let restored = filter_providers(&providers, "", CategoryFilter::All);
        assert_eq!(restored, providers);
    }

    #[test]
    fn query_whitespace_is_ignored() {
        let providers = sample();
        let filtered = filter_providers(&providers, "  focusforward  ", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b");
    }

    #[test]
    fn filter_variants_start_with_all() {
        let variants = CategoryFilter::variants();
        assert_eq!(variants[0], CategoryFilter::All);
        assert_eq!(variants.len(), Category::variants().len() + 1);
    }

    #[test]
    fn view_mode_toggles_back_and_forth() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }
}
