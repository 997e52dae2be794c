//! Site layout wrapper with header and footer

use dioxus::prelude::*;

use crate::routes::Route;

/// Layout component shared by every page: sticky header, routed content,
/// footer.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-gray-50",

            SiteHeader {}

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

/// Sticky site header with brand and navigation links
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm sticky top-0 z-50",
            div {
                class: "max-w-6xl mx-auto px-4 py-3 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-2xl font-bold text-blue-600",
                    "Habot Directory"
                }
                nav {
                    class: "flex items-center gap-6 text-sm text-gray-600",
                    Link {
                        to: Route::Home {},
                        class: "hover:text-blue-500 transition",
                        "Home"
                    }
                    Link {
                        to: Route::About {},
                        class: "hover:text-blue-500 transition",
                        "About"
                    }
                    Link {
                        to: Route::Contact {},
                        class: "hover:text-blue-500 transition",
                        "Contact"
                    }
                }
            }
        }
    }
}

/// Site footer with brand, quick links, and copyright
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "bg-gradient-to-r from-blue-50 via-purple-50 to-pink-50 border-t mt-12",
            div {
                class: "max-w-6xl mx-auto px-4 py-8",
                div {
                    class: "flex flex-col md:flex-row justify-between items-center gap-4",
                    div {
                        class: "text-center md:text-left",
                        h3 {
                            class: "text-xl font-bold text-blue-700 mb-2",
                            "Habot Connect"
                        }
                        p {
                            class: "text-sm text-gray-700",
                            "Connecting families with the right learning support"
                        }
                    }
                    div {
                        class: "flex items-center gap-6",
                        Link {
                            to: Route::About {},
                            class: "text-sm font-medium text-blue-600 hover:text-purple-600 transition",
                            "About Us"
                        }
                        Link {
                            to: Route::Contact {},
                            class: "text-sm font-medium text-blue-600 hover:text-purple-600 transition",
                            "Contact"
                        }
                    }
                }
                div {
                    class: "mt-6 pt-4 border-t border-gray-200 text-center",
                    p {
                        class: "text-sm text-gray-600",
                        "\u{00A9} 2025 Habot Connect DMCC. All rights reserved."
                    }
                    p {
                        class: "text-xs text-gray-400 mt-1",
                        "Learning Support Provider Directory"
                    }
                }
            }
        }
    }
}
