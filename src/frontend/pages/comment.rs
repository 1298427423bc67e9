//! Comment management pages.

use dioxus::prelude::*;

#[component]
pub fn CommentList() -> Element {
    rsx! { div { class: "page comment-list" } }
}

#[component]
pub fn CommentLikes() -> Element {
    rsx! { div { class: "page comment-likes" } }
}

#[component]
pub fn UserLikedComments() -> Element {
    rsx! { div { class: "page user-liked-comments" } }
}
