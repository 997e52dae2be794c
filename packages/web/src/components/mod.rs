//! Reusable UI components

mod layout;
mod loading;
mod provider_card;

pub use layout::*;
pub use loading::*;
pub use provider_card::*;
