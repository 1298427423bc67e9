//! Runs the guard on every route change, whether it came through the
//! router's update hook or straight from the history (deep links, back/forward).

use crate::backend::guard::RouteGuard;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use crate::utils::error::Error;
use dioxus::prelude::*;
use dioxus_router::NavigationTarget;
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Clone)]
pub struct NavigationState {
    guard: Rc<RouteGuard>,
    last_path: Rc<RefCell<Option<String>>>,
    /// Title resolved by the guard for the current page.
    pub title: Signal<String>,
}

impl NavigationState {
    pub fn new(guard: RouteGuard, default_title: &str) -> Self {
        Self {
            guard: Rc::new(guard),
            last_path: Rc::new(RefCell::new(None)),
            title: Signal::new(default_title.to_string()),
        }
    }

    /// Guards the move to `to`. Returns where the router should go
    /// instead, or `None` to let the navigation through.
    pub fn before_each(&self, auth: &AuthState, to: &Route) -> Option<NavigationTarget<Route>> {
        let requested = to.to_string();
        let from = self.last_path.borrow().clone();

        let navigation = match auth.with_store(|store| {
            self.guard.navigate(store, &requested, from.as_deref())
        }) {
            Ok(navigation) => navigation,
            Err(e) => {
                log::error!("Navigation to {requested} aborted: {e}");
                return None;
            }
        };

        if *self.title.peek() != navigation.title {
            let mut title = self.title;
            title.set(navigation.title.clone());
        }
        *self.last_path.borrow_mut() = Some(navigation.path.clone());

        if !navigation.redirected {
            return None;
        }

        match Route::from_str(&navigation.path) {
            Ok(route) if route != *to => {
                log::debug!("Redirecting {requested} -> {route}");
                Some(NavigationTarget::Internal(route))
            }
            Ok(_) => None,
            Err(e) => {
                log::error!("{}: {e}", Error::UnknownRoute(navigation.path));
                None
            }
        }
    }

    /// Guards the route the router is showing right now.
    ///
    /// Routes already vetted by the update hook are skipped; anything else
    /// (first load, back/forward) goes through `before_each`.
    pub fn check_current(&self, auth: &AuthState, current: &Route) -> Option<Route> {
        let path = current.to_string();
        if self.last_path.borrow().as_deref() == Some(path.as_str()) {
            return None;
        }
        match self.before_each(auth, current)? {
            NavigationTarget::Internal(route) => Some(route),
            NavigationTarget::External(url) => {
                log::error!("{}", Error::UnknownRoute(url));
                None
            }
        }
    }
}
