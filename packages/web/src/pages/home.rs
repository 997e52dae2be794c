//! Home page - the provider directory listing

use dioxus::prelude::*;

use crate::components::{ProviderCard, ProviderCardSkeleton, ProviderRow};
use crate::data;
use crate::state::{filter_providers, CategoryFilter, ViewMode};

/// Home page - searchable, filterable directory of providers
#[component]
pub fn Home() -> Element {
    // One fetch on mount; Retry restarts it.
    let mut providers = use_resource(data::fetch_all_providers);

    let mut search_query = use_signal(String::new);
    let mut active_filter = use_signal(|| CategoryFilter::All);
    let mut view_mode = use_signal(|| ViewMode::Grid);

    // Derive the filtered list, recomputed on every keystroke
    let filtered_providers = use_memo(move || {
        let all = match providers() {
            Some(Ok(p)) => p,
            _ => vec![],
        };
        filter_providers(&all, &search_query(), active_filter())
    });

    // Count providers per category tab
    let filter_counts = use_memo(move || {
        let all = match providers() {
            Some(Ok(p)) => p,
            _ => vec![],
        };

        let mut counts = std::collections::HashMap::new();
        for filter in CategoryFilter::variants() {
            counts.insert(filter, all.iter().filter(|p| filter.matches(p)).count());
        }
        counts
    });

    let is_loading = providers().is_none();
    let error = match providers() {
        Some(Err(e)) => Some(e),
        _ => None,
    };

    rsx! {
        div {
            class: "bg-gradient-to-b from-blue-50 to-white",

            // Hero Section
            div {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-6xl mx-auto px-4 py-8 sm:py-12",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-3xl sm:text-4xl font-bold text-blue-700 mb-4",
                            "Learning Support Provider Directory"
                        }
                        p {
                            class: "text-lg text-gray-600 mb-8",
                            "Find qualified learning support specialists for your child's unique needs."
                        }

                        // Search Bar
                        div {
                            class: "relative max-w-xl mx-auto",
                            input {
                                r#type: "text",
                                placeholder: "Search by name or location...",
                                value: "{search_query}",
                                oninput: move |e| search_query.set(e.value()),
                                class: "w-full px-4 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
                            }
                            if !search_query().is_empty() {
                                button {
                                    class: "absolute inset-y-0 right-0 pr-4 flex items-center text-gray-400 hover:text-gray-600",
                                    onclick: move |_| search_query.set(String::new()),
                                    "\u{2715}"
                                }
                            }
                        }
                    }
                }
            }

            // Filter Tabs + View Toggle
            div {
                class: "bg-white border-b border-gray-100 sticky top-0 z-10",
                div {
                    class: "max-w-6xl mx-auto px-4",
                    div {
                        class: "flex items-center justify-between gap-4 py-3",
                        div {
                            class: "flex items-center gap-1 overflow-x-auto",
                            for filter in CategoryFilter::variants() {
                                {
                                    let is_active = active_filter() == filter;
                                    let count = filter_counts().get(&filter).copied().unwrap_or(0);
                                    rsx! {
                                        button {
                                            key: "{filter:?}",
                                            class: if is_active {
                                                "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-blue-100 text-blue-700"
                                            } else {
                                                "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-gray-50 text-gray-600 hover:bg-gray-100"
                                            },
                                            onclick: move |_| active_filter.set(filter),
                                            span { "{filter.icon()}" }
                                            "{filter.label()}"
                                            if count > 0 {
                                                span {
                                                    class: if is_active {
                                                        "ml-1 px-2 py-0.5 rounded-full text-xs bg-blue-200 text-blue-800"
                                                    } else {
                                                        "ml-1 px-2 py-0.5 rounded-full text-xs bg-gray-200 text-gray-600"
                                                    },
                                                    "{count}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        // Grid / List toggle
                        button {
                            class: "flex items-center gap-2 px-3 py-2 rounded-lg text-sm font-medium bg-gray-50 text-gray-600 hover:bg-gray-100 transition-all whitespace-nowrap",
                            onclick: move |_| {
                                let next = view_mode().toggled();
                                view_mode.set(next);
                            },
                            if view_mode() == ViewMode::Grid {
                                "\u{2630} List view"
                            } else {
                                "\u{25A6} Grid view"
                            }
                        }
                    }
                }
            }

            // Main Content
            div {
                class: "max-w-6xl mx-auto px-4 py-8",

                // Loading State
                if is_loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..6 {
                            ProviderCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error State
                else if let Some(err) = error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load providers" }
                        p { class: "text-gray-500 mb-4", "{err}" }
                        button {
                            class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                            onclick: move |_| providers.restart(),
                            "Retry"
                        }
                    }
                }

                // Empty State
                else if filtered_providers().is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No providers found" }
                        if !search_query().is_empty() || active_filter() != CategoryFilter::All {
                            p {
                                class: "text-gray-500 mb-6 max-w-md mx-auto",
                                "We couldn't find any providers matching your search. Try adjusting your search or filters."
                            }
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                                onclick: move |_| {
                                    search_query.set(String::new());
                                    active_filter.set(CategoryFilter::All);
                                },
                                "Clear Filters"
                            }
                        } else {
                            p {
                                class: "text-gray-500 max-w-md mx-auto",
                                "The directory is empty right now. Please check back soon."
                            }
                        }
                    }
                }

                // Provider Grid / List
                else {
                    // Results count
                    div {
                        class: "mb-6",
                        p {
                            class: "text-sm text-gray-500",
                            "Showing "
                            span { class: "font-medium text-gray-900", "{filtered_providers().len()}" }
                            " provider"
                            if filtered_providers().len() != 1 { "s" }
                            if !search_query().is_empty() {
                                " for \""
                                span { class: "font-medium", "{search_query}" }
                                "\""
                            }
                        }
                    }

                    if view_mode() == ViewMode::Grid {
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for provider in filtered_providers() {
                                ProviderCard { key: "{provider.id}", provider: provider.clone() }
                            }
                        }
                    } else {
                        div {
                            class: "space-y-3",
                            for provider in filtered_providers() {
                                ProviderRow { key: "{provider.id}", provider: provider.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
