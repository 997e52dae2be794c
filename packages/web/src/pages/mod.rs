//! Page components

mod about;
mod contact;
mod home;
mod provider_detail;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use provider_detail::ProviderDetail;
