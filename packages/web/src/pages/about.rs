//! About page - static content

use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "\u{1F465}", // 👥
        title: "Expert Network",
        description: "Access to qualified learning support specialists with proven track records in helping children succeed.",
        color: "from-blue-50 to-blue-100",
    },
    Feature {
        icon: "\u{2764}", // ❤
        title: "Personalized Care",
        description: "Every child is unique. We help you find providers who understand your child's specific learning needs.",
        color: "from-red-50 to-red-100",
    },
    Feature {
        icon: "\u{1F3AF}", // 🎯
        title: "Targeted Solutions",
        description: "From ADHD coaching to dyslexia support, find specialists who focus on your child's specific challenges.",
        color: "from-green-50 to-green-100",
    },
    Feature {
        icon: "\u{1F3C6}", // 🏆
        title: "Quality Assured",
        description: "All providers are vetted and rated by real families to ensure you get the best support available.",
        color: "from-purple-50 to-purple-100",
    },
];

struct Stat {
    number: &'static str,
    label: &'static str,
    color: &'static str,
}

const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Learning Support Providers", color: "text-blue-600" },
    Stat { number: "1,000+", label: "Families Helped", color: "text-purple-600" },
    Stat { number: "15+", label: "Specializations Covered", color: "text-green-600" },
    Stat { number: "4.8/5", label: "Average Rating", color: "text-amber-600" },
];

/// About page - mission, stats, features, and story
#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "bg-gradient-to-br from-gray-50 to-gray-100",

            // Hero Section
            div {
                class: "bg-gradient-to-br from-blue-600 to-purple-700 text-white",
                div {
                    class: "max-w-6xl mx-auto px-4 py-16 text-center",
                    h1 {
                        class: "text-4xl md:text-5xl font-bold mb-6",
                        "About Habot Connect"
                    }
                    p {
                        class: "text-xl md:text-2xl text-blue-100 max-w-3xl mx-auto leading-relaxed",
                        "Empowering Indian families to find the perfect learning support for every child's unique journey"
                    }
                }
            }

            div {
                class: "max-w-6xl mx-auto px-4 py-16",

                // Mission Section
                div {
                    class: "text-center mb-16",
                    h2 { class: "text-3xl font-bold text-gray-800 mb-6", "Our Mission" }
                    p {
                        class: "text-lg text-gray-600 max-w-4xl mx-auto leading-relaxed",
                        "At Habot Connect, we believe every Indian child deserves the opportunity to learn and thrive. We bridge the gap between families and qualified learning support providers across India, making it easier than ever to find the right help for children with learning difficulties. Our platform simplifies the search process, connecting you with specialists who understand your child's unique needs in the Indian context."
                    }
                }

                // Stats Section
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-6 mb-16",
                    for stat in STATS {
                        div {
                            key: "{stat.label}",
                            class: "text-center bg-white p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow",
                            div {
                                class: "text-3xl md:text-4xl font-bold {stat.color} mb-2",
                                "{stat.number}"
                            }
                            div {
                                class: "text-gray-600 text-sm md:text-base",
                                "{stat.label}"
                            }
                        }
                    }
                }

                // Features Section
                div {
                    class: "mb-16",
                    h2 {
                        class: "text-3xl font-bold text-gray-800 text-center mb-12",
                        "Why Choose Habot Connect?"
                    }
                    div {
                        class: "grid md:grid-cols-2 lg:grid-cols-4 gap-6",
                        for feature in FEATURES {
                            div {
                                key: "{feature.title}",
                                class: "bg-gradient-to-br {feature.color} p-6 rounded-xl shadow-sm hover:shadow-md transition-all",
                                div { class: "text-3xl mb-4", "{feature.icon}" }
                                h3 {
                                    class: "text-xl font-semibold text-gray-800 mb-3",
                                    "{feature.title}"
                                }
                                p {
                                    class: "text-gray-700 leading-relaxed",
                                    "{feature.description}"
                                }
                            }
                        }
                    }
                }

                // Story Section
                div {
                    class: "bg-white rounded-xl shadow-sm p-8 md:p-12",
                    h2 {
                        class: "text-3xl font-bold text-gray-800 mb-6 text-center",
                        "Our Story"
                    }
                    div {
                        class: "space-y-6 text-gray-600 leading-relaxed",
                        p {
                            "Born from the vibrant diversity of India, Habot Connect emerged from a simple yet powerful idea: every Indian parent should have easy access to quality learning support for their child. We recognized that finding the right specialist for children with learning difficulties was often overwhelming and time-consuming for families across our nation."
                        }
                        p {
                            "Our team of educators, technologists, and parents came together to create a platform that understands the unique challenges faced by Indian families. We carefully vet each provider, gather authentic reviews, and present information in a clear, accessible way that helps parents make informed decisions within the Indian educational landscape."
                        }
                        p {
                            "Today, we're proud to serve families across India, connecting them with specialists in areas ranging from ADHD coaching and dyslexia support to autism therapy and general learning disabilities. Our commitment remains unchanged: making quality learning support accessible to every Indian child who needs it."
                        }
                    }
                }
            }
        }
    }
}
