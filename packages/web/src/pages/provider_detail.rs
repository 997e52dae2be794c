//! Provider detail page

use dioxus::prelude::*;

use crate::components::{LoadingSpinner, ProviderImage};
use crate::data::{self, FetchError};
use crate::routes::Route;
use crate::types::Provider;

/// Provider detail page, keyed by provider id from the route
#[component]
pub fn ProviderDetail(id: String) -> Element {
    let mut provider = use_resource(use_reactive!(|(id,)| async move {
        data::fetch_provider_by_id(&id).await
    }));

    let content = match provider() {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(FetchError::NotFound(_))) => rsx! {
            div {
                class: "text-center py-16",
                h2 { class: "text-2xl font-semibold text-gray-800 mb-2", "Provider not found" }
                p {
                    class: "text-gray-500",
                    "The provider you're looking for doesn't exist or may have been removed."
                }
            }
        },
        Some(Err(err)) => rsx! {
            div {
                class: "text-center py-16",
                h2 { class: "text-2xl font-semibold text-gray-800 mb-2", "Unable to load provider" }
                p { class: "text-gray-500 mb-4", "{err}" }
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                    onclick: move |_| provider.restart(),
                    "Retry"
                }
            }
        },
        Some(Ok(found)) => rsx! {
            ProviderProfile { provider: found }
        },
    };

    rsx! {
        div {
            class: "bg-white",
            div {
                class: "max-w-3xl mx-auto px-6 py-10",

                Link {
                    to: Route::Home {},
                    class: "text-blue-600 hover:underline mb-6 inline-block",
                    "\u{2190} Back to Directory"
                }

                {content}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProviderProfileProps {
    provider: Provider,
}

/// Full provider profile: image, summary, services, contact, metadata
#[component]
fn ProviderProfile(props: ProviderProfileProps) -> Element {
    let provider = &props.provider;

    rsx! {
        div {
            ProviderImage { provider: provider.clone(), class: "w-full h-64 rounded-lg mb-6 shadow" }

            h1 {
                class: "text-3xl font-bold text-gray-800 mb-2",
                "{provider.name}"
            }
            p {
                class: "text-gray-600 mb-1",
                "{provider.category} \u{2022} {provider.location}"
            }
            p {
                class: "text-sm text-gray-500 mb-1",
                "{provider.specialization}"
            }
            p {
                class: "text-sm text-gray-500 mb-4",
                "Rating: \u{2B50} {provider.rating}"
            }

            p {
                class: "text-gray-700 mb-6",
                "{provider.long_description}"
            }

            if !provider.services.is_empty() {
                h3 { class: "font-semibold text-gray-800 mb-2", "Services" }
                ul {
                    class: "list-disc list-inside text-gray-600 space-y-1 mb-6",
                    for service in provider.services.iter() {
                        li { key: "{service}", "{service}" }
                    }
                }
            }

            // Optional metadata rows
            div {
                class: "grid sm:grid-cols-2 gap-4 mb-6",
                if let Some(experience) = &provider.experience {
                    MetadataRow { label: "Experience", value: experience.clone() }
                }
                if let Some(availability) = &provider.availability {
                    MetadataRow { label: "Availability", value: availability.clone() }
                }
                if let Some(age_groups) = &provider.age_groups {
                    MetadataRow { label: "Age Groups", value: age_groups.join(", ") }
                }
                if let Some(languages) = &provider.languages {
                    MetadataRow { label: "Languages", value: languages.join(", ") }
                }
            }

            // Contact
            if provider.contact_email.is_some() || provider.phone_number.is_some() {
                div {
                    class: "border-t border-gray-100 pt-6",
                    h3 { class: "font-semibold text-gray-800 mb-3", "Get in Touch" }
                    div {
                        class: "flex flex-wrap gap-4 text-sm",
                        if let Some(email) = &provider.contact_email {
                            a {
                                href: "mailto:{email}",
                                class: "inline-flex items-center gap-1 text-blue-600 hover:text-blue-700",
                                "\u{2709} {email}"
                            }
                        }
                        if let Some(phone) = &provider.phone_number {
                            a {
                                href: "tel:{phone}",
                                class: "inline-flex items-center gap-1 text-blue-600 hover:text-blue-700",
                                "\u{1F4DE} {phone}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetadataRowProps {
    label: &'static str,
    value: String,
}

#[component]
fn MetadataRow(props: MetadataRowProps) -> Element {
    rsx! {
        div {
            class: "bg-gray-50 rounded-lg px-4 py-3",
            p { class: "text-xs font-medium text-gray-500 uppercase mb-1", "{props.label}" }
            p { class: "text-sm text-gray-800", "{props.value}" }
        }
    }
}
