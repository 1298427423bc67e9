//! Application routing table.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::frontend::components::layout::Guarded;
use crate::frontend::pages::comment::{CommentLikes, CommentList, UserLikedComments};
use crate::frontend::pages::login::Login;
use crate::frontend::pages::not_found::NotFound;
use crate::frontend::pages::user::UserList;

use dioxus::prelude::*;
use dioxus_router::Routable;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Who may enter a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    None,
    RequiresAuth,
    RequiresGuest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View,
    Redirect(&'static str),
}

/// Static description of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub target: Target,
    pub access: Access,
    pub title: Option<&'static str>,
}

impl RouteEntry {
    const fn view(path: &'static str, name: &'static str, access: Access) -> Self {
        Self {
            path,
            name,
            target: Target::View,
            access,
            title: None,
        }
    }

    /// Looks up the entry declared for `path` in the application table.
    pub fn find(path: &str) -> Option<&'static RouteEntry> {
        matched(ROUTES, path).into_iter().next()
    }
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: ROOT_PATH,
        name: "Home",
        target: Target::Redirect("/user/list"),
        access: Access::None,
        title: None,
    },
    RouteEntry::view(LOGIN_PATH, "Login", Access::RequiresGuest),
    RouteEntry::view("/user/list", "UserList", Access::RequiresAuth),
    RouteEntry::view("/comment/list", "CommentList", Access::RequiresAuth),
    RouteEntry::view("/comment/likes", "CommentLikes", Access::RequiresAuth),
    RouteEntry::view("/comment/user-liked", "UserLikedComments", Access::RequiresAuth),
];

/// Strips query, fragment and trailing slash so `/user/list/?page=2`
/// matches `/user/list`.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => ROOT_PATH,
        trimmed => trimmed,
    }
}

/// Entries of `table` matching `path`. The table is flat, so this is at
/// most one entry; an unknown path matches nothing.
pub fn matched<'a>(table: &'a [RouteEntry], path: &str) -> Vec<&'a RouteEntry> {
    let path = normalize(path);
    table.iter().filter(|entry| entry.path == path).collect()
}

/// Applies a declared redirect, if any. Paths without one come back normalized.
pub fn follow_redirect<'a>(table: &'a [RouteEntry], path: &'a str) -> &'a str {
    match matched(table, path).first().map(|entry| entry.target) {
        Some(Target::Redirect(to)) => to,
        _ => normalize(path),
    }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    // Every page goes through the guarded layout.
    /// Sign-in page, guests only.
    #[layout(Guarded)]
        #[redirect("/", || Route::UserList {})]
        #[route("/login")]
        Login {},
        /// User management.
        #[route("/user/list")]
        UserList {},
        /// Comment management.
        #[route("/comment/list")]
        CommentList {},
        #[route("/comment/likes")]
        CommentLikes {},
        #[route("/comment/user-liked")]
        UserLikedComments {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Table entries for this route.
    pub fn matched(&self) -> Vec<&'static RouteEntry> {
        matched(ROUTES, &self.to_string())
    }

    pub fn name(&self) -> Option<&'static str> {
        RouteEntry::find(&self.to_string()).map(|entry| entry.name)
    }
}
