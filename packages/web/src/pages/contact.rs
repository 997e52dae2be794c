//! Contact page - contact info and a simulated-submission form

use dioxus::prelude::*;

use crate::data;

/// Simulated form submission delay, in milliseconds.
const SUBMIT_DELAY_MS: u32 = 1500;

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    details: &'static str,
    description: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "\u{2709}", // ✉
        title: "Email Us",
        details: "support@habotconnect.in",
        description: "Get in touch for general inquiries",
    },
    ContactInfo {
        icon: "\u{1F4DE}", // 📞
        title: "Call Us",
        details: "+91 124 456 7890",
        description: "Available Monday to Friday, 9 AM - 6 PM",
    },
    ContactInfo {
        icon: "\u{1F4CD}", // 📍
        title: "Visit Us",
        details: "Cyber House, B-35, Sector 32, Gurugram, Haryana 122001, India",
        description: "Schedule an appointment to visit our office",
    },
    ContactInfo {
        icon: "\u{1F552}", // 🕒
        title: "Business Hours",
        details: "Mon - Fri: 9:00 AM - 6:00 PM",
        description: "Weekend support via email only",
    },
];

struct SupportOption {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SUPPORT_OPTIONS: &[SupportOption] = &[
    SupportOption {
        icon: "\u{1F46A}", // 👪
        title: "For Parents",
        description: "Need help finding the right learning support provider for your child?",
    },
    SupportOption {
        icon: "\u{1F3A7}", // 🎧
        title: "For Providers",
        description: "Interested in joining our network of learning support specialists?",
    },
    SupportOption {
        icon: "\u{1F4AC}", // 💬
        title: "Technical Support",
        description: "Experiencing issues with the platform? We're here to help!",
    },
];

/// Contact page - support options, contact form, and contact information
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut user_type = use_signal(|| "parent".to_string());
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let is_valid = use_memo(move || {
        !name().trim().is_empty()
            && email().contains('@')
            && !subject().trim().is_empty()
            && !message().trim().is_empty()
    });

    let handle_submit = move |_| {
        if !is_valid() || is_submitting() {
            return;
        }

        spawn(async move {
            is_submitting.set(true);

            // Simulated submission; there is no backend to send to.
            data::sleep_ms(SUBMIT_DELAY_MS).await;

            is_submitting.set(false);
            submitted.set(true);

            name.set(String::new());
            email.set(String::new());
            user_type.set("parent".to_string());
            subject.set(String::new());
            message.set(String::new());
        });
    };

    rsx! {
        div {
            class: "bg-gray-50",

            // Hero Section
            div {
                class: "bg-gradient-to-br from-blue-600 to-purple-700 text-white",
                div {
                    class: "max-w-6xl mx-auto px-4 py-16 text-center",
                    h1 {
                        class: "text-4xl md:text-5xl font-bold mb-6",
                        "Get in Touch"
                    }
                    p {
                        class: "text-xl text-blue-100 max-w-2xl mx-auto",
                        "We're here to help you find the perfect learning support for your child. Reach out to us anytime!"
                    }
                }
            }

            div {
                class: "max-w-6xl mx-auto px-4 py-16",

                // Support Options
                div {
                    class: "grid md:grid-cols-3 gap-8 mb-16",
                    for option in SUPPORT_OPTIONS {
                        div {
                            key: "{option.title}",
                            class: "bg-white p-6 rounded-lg shadow-md text-center hover:shadow-lg transition-shadow",
                            div { class: "text-4xl mb-4", "{option.icon}" }
                            h3 {
                                class: "text-xl font-semibold text-gray-800 mb-3",
                                "{option.title}"
                            }
                            p { class: "text-gray-600", "{option.description}" }
                        }
                    }
                }

                div {
                    class: "grid lg:grid-cols-2 gap-12",

                    // Contact Form
                    div {
                        class: "bg-white rounded-lg shadow-md p-8",
                        h2 {
                            class: "text-2xl font-bold text-gray-800 mb-6",
                            "Send us a Message"
                        }

                        if submitted() {
                            div {
                                class: "text-center py-8",
                                div { class: "text-6xl mb-4", "\u{2705}" }
                                h3 {
                                    class: "text-2xl font-bold text-green-600 mb-2",
                                    "Thank You!"
                                }
                                p {
                                    class: "text-gray-600 mb-6",
                                    "Your message has been sent successfully. We'll get back to you within 24 hours."
                                }
                                button {
                                    class: "px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors",
                                    onclick: move |_| submitted.set(false),
                                    "Send Another Message"
                                }
                            }
                        } else {
                            form {
                                class: "space-y-6",
                                onsubmit: handle_submit,

                                div {
                                    class: "grid md:grid-cols-2 gap-4",
                                    div {
                                        label {
                                            class: "block text-sm font-medium text-gray-700 mb-2",
                                            "Full Name "
                                            span { class: "text-red-500", "*" }
                                        }
                                        input {
                                            r#type: "text",
                                            value: "{name}",
                                            oninput: move |e| name.set(e.value()),
                                            required: true,
                                            placeholder: "Enter your full name",
                                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        }
                                    }
                                    div {
                                        label {
                                            class: "block text-sm font-medium text-gray-700 mb-2",
                                            "Email Address "
                                            span { class: "text-red-500", "*" }
                                        }
                                        input {
                                            r#type: "email",
                                            value: "{email}",
                                            oninput: move |e| email.set(e.value()),
                                            required: true,
                                            placeholder: "Enter your email",
                                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        }
                                    }
                                }

                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "I am a "
                                        span { class: "text-red-500", "*" }
                                    }
                                    select {
                                        value: "{user_type}",
                                        oninput: move |e| user_type.set(e.value()),
                                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                        option { value: "parent", "Parent looking for support" }
                                        option { value: "provider", "Learning support provider" }
                                        option { value: "educator", "Educator/School representative" }
                                        option { value: "other", "Other" }
                                    }
                                }

                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "Subject "
                                        span { class: "text-red-500", "*" }
                                    }
                                    input {
                                        r#type: "text",
                                        value: "{subject}",
                                        oninput: move |e| subject.set(e.value()),
                                        required: true,
                                        placeholder: "What's this about?",
                                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    }
                                }

                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "Message "
                                        span { class: "text-red-500", "*" }
                                    }
                                    textarea {
                                        value: "{message}",
                                        oninput: move |e| message.set(e.value()),
                                        required: true,
                                        rows: "5",
                                        placeholder: "Tell us how we can help you...",
                                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none"
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    disabled: !is_valid() || is_submitting(),
                                    class: "w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 px-6 rounded-lg font-medium hover:from-blue-700 hover:to-purple-700 transition-all disabled:opacity-50 disabled:cursor-not-allowed",
                                    if is_submitting() {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }
                            }
                        }
                    }

                    // Contact Information
                    div {
                        class: "space-y-8",
                        div {
                            h2 {
                                class: "text-2xl font-bold text-gray-800 mb-6",
                                "Contact Information"
                            }
                            div {
                                class: "space-y-6",
                                for info in CONTACT_INFO {
                                    div {
                                        key: "{info.title}",
                                        class: "flex items-start gap-4",
                                        div { class: "text-2xl", "{info.icon}" }
                                        div {
                                            h3 { class: "font-semibold text-gray-800", "{info.title}" }
                                            p { class: "text-gray-900 font-medium", "{info.details}" }
                                            p { class: "text-sm text-gray-600", "{info.description}" }
                                        }
                                    }
                                }
                            }
                        }

                        // Quick Help
                        div {
                            class: "bg-blue-50 rounded-lg p-6",
                            h3 { class: "text-xl font-bold text-gray-800 mb-4", "Quick Help" }
                            div {
                                class: "space-y-4",
                                div {
                                    h4 { class: "font-medium text-gray-800", "How do I find a provider?" }
                                    p {
                                        class: "text-sm text-gray-600",
                                        "Browse our directory, use filters to narrow down options, and view detailed profiles."
                                    }
                                }
                                div {
                                    h4 { class: "font-medium text-gray-800", "Is the service free?" }
                                    p {
                                        class: "text-sm text-gray-600",
                                        "Yes! Our directory is completely free for parents to use."
                                    }
                                }
                                div {
                                    h4 { class: "font-medium text-gray-800", "How are providers vetted?" }
                                    p {
                                        class: "text-sm text-gray-600",
                                        "All providers go through our verification process and are rated by real families."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
