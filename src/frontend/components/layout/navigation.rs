use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let mut auth = use_context::<AuthState>();

    let active_tab = route.name().unwrap_or_default();
    let username = auth.get_username();

    let tabs = [
        (Route::UserList {}, "Users"),
        (Route::CommentList {}, "Comments"),
        (Route::CommentLikes {}, "Likes"),
        (Route::UserLikedComments {}, "Liked by users"),
    ]
    .map(|(target, label)| {
        let active = target.name() == Some(active_tab);
        (target, label, active)
    });

    rsx! {
        nav { class: "navigation",
            ul { class: "nav-items",
                for (target, label, active) in tabs {
                    li {
                        class: if active { "nav-item active" } else { "nav-item" },
                        onclick: move |_| { nav.push(target.clone()); },
                        span { class: "nav-text", "{label}" }
                    }
                }
            }
            div { class: "nav-user",
                span { class: "nav-username", "{username}" }
                button {
                    class: "logout-button",
                    onclick: move |_| {
                        auth.logout();
                        nav.push(Route::Login {});
                    },
                    "Sign out"
                }
            }
        }
    }
}
