//! Habot Connect - Learning Support Provider Directory
//!
//! A Dioxus web application: a searchable directory of learning-support
//! providers backed by a bundled static dataset. There is no backend; the
//! data layer resolves the bundled document after a simulated delay.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
