//! Root component: wires the session and the guard into the router.

use crate::backend::guard::RouteGuard;
use crate::backend::session::SessionStore;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::{AuthState, open_storage};
use crate::frontend::services::navigation::NavigationState;

use dioxus::prelude::*;
use dioxus_router::{Router, RouterConfig};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    use_context_provider(|| {
        let store = SessionStore::new(open_storage(&config), &config.storage);
        AuthState::new(store)
    });
    use_context_provider(|| {
        NavigationState::new(RouteGuard::new(&config.ui), &config.ui.default_title)
    });

    rsx! { Shell {} }
}

/// Router with the guard installed. Expects `AuthState` and
/// `NavigationState` in context.
#[component]
pub fn Shell() -> Element {
    let auth = use_context::<AuthState>();
    let navigation = use_context::<NavigationState>();

    rsx! {
        Router::<Route> {
            config: move || {
                let auth = auth.clone();
                let navigation = navigation.clone();
                RouterConfig::default()
                    .on_update(move |state| navigation.before_each(&auth, &state.current()))
            }
        }
    }
}
