use dioxus::prelude::*;

/// User management. Content comes from the API client.
#[component]
pub fn UserList() -> Element {
    rsx! { div { class: "page user-list" } }
}
