//! Provider card components (grid and list variants)

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Provider;

/// Props for ProviderCard and ProviderRow
#[derive(Props, Clone, PartialEq)]
pub struct ProviderCardProps {
    pub provider: Provider,
}

/// Grid card for a single provider, linking to its detail page
#[component]
pub fn ProviderCard(props: ProviderCardProps) -> Element {
    let provider = &props.provider;

    rsx! {
        Link {
            to: Route::ProviderDetail { id: provider.id.clone() },
            div {
                class: "bg-white shadow-md rounded-xl overflow-hidden hover:shadow-lg transition cursor-pointer flex flex-col h-full",

                ProviderImage { provider: provider.clone(), class: "h-48 w-full" }

                div {
                    class: "p-4 flex flex-col flex-grow",
                    h2 {
                        class: "text-xl font-semibold text-gray-800",
                        "{provider.name}"
                    }
                    p {
                        class: "text-sm text-gray-500",
                        "{provider.category} \u{2022} {provider.location}"
                    }
                    p {
                        class: "mt-2 text-gray-600 text-sm line-clamp-3 flex-grow",
                        "{provider.short_description}"
                    }
                    div {
                        class: "mt-2 text-sm text-yellow-500",
                        "\u{2B50} {provider.rating}"
                    }
                }
            }
        }
    }
}

/// Compact horizontal row for the list view mode
#[component]
pub fn ProviderRow(props: ProviderCardProps) -> Element {
    let provider = &props.provider;

    rsx! {
        Link {
            to: Route::ProviderDetail { id: provider.id.clone() },
            div {
                class: "bg-white shadow-sm rounded-lg border border-gray-100 px-5 py-4 hover:shadow-md transition cursor-pointer flex items-center justify-between gap-4",

                div {
                    class: "min-w-0",
                    h2 {
                        class: "text-lg font-semibold text-gray-800 truncate",
                        "{provider.name}"
                    }
                    p {
                        class: "text-sm text-gray-500",
                        "{provider.category} \u{2022} {provider.location}"
                    }
                    p {
                        class: "mt-1 text-gray-600 text-sm line-clamp-1",
                        "{provider.short_description}"
                    }
                }
                div {
                    class: "text-sm text-yellow-500 whitespace-nowrap",
                    "\u{2B50} {provider.rating}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProviderImageProps {
    pub provider: Provider,
    pub class: &'static str,
}

/// Provider image with an initial-letter fallback when no image URL is set
#[component]
pub fn ProviderImage(props: ProviderImageProps) -> Element {
    let provider = &props.provider;
    let initial = provider.name.chars().next().unwrap_or('?');

    rsx! {
        if let Some(image) = &provider.image {
            img {
                src: "{image}",
                alt: "{provider.name}",
                class: "{props.class} object-cover"
            }
        } else {
            div {
                class: "{props.class} bg-gradient-to-br from-blue-100 to-purple-100 flex items-center justify-center",
                span {
                    class: "text-4xl font-bold text-blue-600",
                    "{initial}"
                }
            }
        }
    }
}

/// Skeleton loader shown while the provider list is fetching
#[component]
pub fn ProviderCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white shadow-md rounded-xl overflow-hidden animate-pulse",
            div { class: "h-48 w-full bg-gray-200" }
            div {
                class: "p-4",
                div { class: "h-6 w-3/4 bg-gray-200 rounded mb-2" }
                div { class: "h-4 w-1/2 bg-gray-200 rounded mb-3" }
                div {
                    class: "space-y-2 mb-3",
                    div { class: "h-4 w-full bg-gray-200 rounded" }
                    div { class: "h-4 w-5/6 bg-gray-200 rounded" }
                }
                div { class: "h-4 w-16 bg-gray-200 rounded" }
            }
        }
    }
}
