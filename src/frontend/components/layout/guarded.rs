use crate::backend::utils::route::Route;
use crate::frontend::components::layout::Navigation;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::NavigationState;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;
use dioxus_router::hooks::use_route;
use dioxus_router::navigator;

/// Layout every route renders through.
///
/// Pushes and replaces are guarded in the router's update hook, but the
/// initial location and back/forward moves never reach it, so the current
/// route is checked here too. Nothing behind the outlet renders until the
/// guard lets it through.
#[component]
pub fn Guarded() -> Element {
    let auth = use_context::<AuthState>();
    let navigation = use_context::<NavigationState>();
    let route = use_route::<Route>();
    let nav = navigator();
    let title = navigation.title;

    if let Some(target) = navigation.check_current(&auth, &route) {
        nav.replace(target);
        return rsx! {
            document::Title { "{title}" }
        };
    }

    rsx! {
        document::Title { "{title}" }

        if *auth.is_authenticated.read() {
            div {
                class: "admin-container",
                Navigation {}
                main {
                    class: "admin-content",
                    Outlet::<Route> {}
                }
            }
        } else {
            div {
                class: "auth-container",
                Outlet::<Route> {}
            }
        }
    }
}
