//! Navigation guard.
//!
//! Runs before every navigation: rehydrates the session from storage,
//! picks the document title and decides whether the destination may be
//! entered. Knows nothing about Dioxus; the router hook in
//! `frontend::services::navigation` feeds it paths.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::backend::session::SessionStore;
use crate::backend::utils::config::UiConfig;
use crate::backend::utils::route::{
    Access, LOGIN_PATH, ROOT_PATH, ROUTES, RouteEntry, follow_redirect, matched, normalize,
};
use crate::utils::error::{Error, Result};

/// Upper bound on guard and table redirects followed for one navigation.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Redirect(&'static str),
}

/// Result of running the guard for one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub title: String,
    pub verdict: Verdict,
}

/// Where a navigation ends up once every redirect is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub title: String,
    pub redirected: bool,
}

/// First matching rule wins: auth before guest.
pub fn decide(matched: &[&RouteEntry], authenticated: bool) -> Verdict {
    let requires = |access| matched.iter().any(|entry| entry.access == access);

    if requires(Access::RequiresAuth) && !authenticated {
        Verdict::Redirect(LOGIN_PATH)
    } else if requires(Access::RequiresGuest) && authenticated {
        Verdict::Redirect(ROOT_PATH)
    } else {
        Verdict::Allow
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    table: &'static [RouteEntry],
    default_title: String,
}

impl RouteGuard {
    pub fn new(ui: &UiConfig) -> Self {
        Self::with_table(ROUTES, ui)
    }

    pub fn with_table(table: &'static [RouteEntry], ui: &UiConfig) -> Self {
        Self {
            table,
            default_title: ui.default_title.clone(),
        }
    }

    /// Guards a single hop from `from` to `to`.
    pub fn before_each(&self, store: &mut SessionStore, to: &str, from: Option<&str>) -> Decision {
        rehydrate(store);

        let matched = matched(self.table, to);
        let title = matched
            .last()
            .and_then(|entry| entry.title)
            .map_or_else(|| self.default_title.clone(), str::to_string);
        let verdict = decide(&matched, store.is_authenticated());

        log::debug!(
            "{} -> {}: {verdict:?}",
            from.unwrap_or("<start>"),
            normalize(to)
        );
        Decision { title, verdict }
    }

    /// Follows declared and guard redirects until the guard allows a path.
    pub fn navigate(&self, store: &mut SessionStore, to: &str, from: Option<&str>) -> Result<Navigation> {
        let mut current = follow_redirect(self.table, to).to_string();
        let mut previous = from.map(str::to_string);
        let mut redirected = current != normalize(to);

        for _ in 0..MAX_REDIRECTS {
            let decision = self.before_each(store, &current, previous.as_deref());
            match decision.verdict {
                Verdict::Allow => {
                    return Ok(Navigation {
                        path: current,
                        title: decision.title,
                        redirected,
                    });
                }
                Verdict::Redirect(target) => {
                    previous = Some(std::mem::replace(
                        &mut current,
                        follow_redirect(self.table, target).to_string(),
                    ));
                    redirected = true;
                }
            }
        }

        Err(Error::RedirectLoop(normalize(to).to_string()))
    }
}

/// A persisted user record that no longer parses is dropped and the
/// navigation continues as a guest.
fn rehydrate(store: &mut SessionStore) {
    match store.init_auth() {
        Ok(()) => {}
        Err(e @ Error::MalformedRecord { .. }) => {
            log::warn!("Discarding persisted session: {e}");
            if let Err(e) = store.logout() {
                log::warn!("Failed to clear persisted session: {e}");
            }
        }
        Err(e) => log::warn!("Failed to read persisted session: {e}"),
    }
}
