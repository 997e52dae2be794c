//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{About, Contact, Home, ProviderDetail};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/providers/:id")]
        ProviderDetail { id: String },

        #[route("/about")]
        About {},

        #[route("/contact")]
        Contact {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_the_router() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Contact {}.to_string(), "/contact");
        assert_eq!(
            Route::ProviderDetail { id: "prov-001".into() }.to_string(),
            "/providers/prov-001"
        );
    }

    #[test]
    fn provider_detail_parses_its_id_segment() {
        let route: Route = "/providers/prov-007".parse().expect("route should parse");
        assert_eq!(route, Route::ProviderDetail { id: "prov-007".into() });
    }

    #[test]
    fn known_paths_parse() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/about".parse::<Route>().unwrap(), Route::About {});
        assert_eq!("/contact".parse::<Route>().unwrap(), Route::Contact {});
    }
}
