use super::*;
use crate::backend::session::{KeyValueStorage, MemoryStorage, UserInfo};
use crate::backend::utils::config::StorageConfig;
use crate::backend::utils::route::Target;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct SharedStorage(Rc<RefCell<MemoryStorage>>);

impl KeyValueStorage for SharedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.0.borrow().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.0.borrow_mut().remove_item(key)
    }
}

fn setup() -> (RouteGuard, SessionStore, SharedStorage) {
    let storage = SharedStorage::default();
    let store = SessionStore::new(Box::new(storage.clone()), &StorageConfig::default());
    (RouteGuard::new(&UiConfig::default()), store, storage)
}

fn user(name: &str) -> UserInfo {
    let mut user = UserInfo::new();
    user.insert("name".to_string(), json!(name));
    user
}

fn verdict(guard: &RouteGuard, store: &mut SessionStore, to: &str) -> Verdict {
    guard.before_each(store, to, None).verdict
}

const DEFAULT_TITLE: &str = "评论管理系统@goatyang.com";

// =============================================================
// decide
// =============================================================

const OPEN: RouteEntry = RouteEntry {
    path: "/open",
    name: "Open",
    target: Target::View,
    access: Access::None,
    title: Some("Open page"),
};
const PRIVATE: RouteEntry = RouteEntry {
    access: Access::RequiresAuth,
    ..OPEN
};
const GUEST: RouteEntry = RouteEntry {
    access: Access::RequiresGuest,
    ..OPEN
};

#[test]
fn decide_untagged_allows_everyone() {
    assert_eq!(decide(&[&OPEN], false), Verdict::Allow);
    assert_eq!(decide(&[&OPEN], true), Verdict::Allow);
    assert_eq!(decide(&[], false), Verdict::Allow);
}

#[test]
fn decide_auth_route_for_guest_goes_to_login() {
    assert_eq!(decide(&[&PRIVATE], false), Verdict::Redirect("/login"));
    assert_eq!(decide(&[&PRIVATE], true), Verdict::Allow);
}

#[test]
fn decide_guest_route_for_user_goes_home() {
    assert_eq!(decide(&[&GUEST], true), Verdict::Redirect("/"));
    assert_eq!(decide(&[&GUEST], false), Verdict::Allow);
}

#[test]
fn decide_any_matched_segment_counts() {
    assert_eq!(decide(&[&OPEN, &PRIVATE], false), Verdict::Redirect("/login"));
}

#[test]
fn decide_both_tags_auth_rule_first() {
    assert_eq!(decide(&[&GUEST, &PRIVATE], false), Verdict::Redirect("/login"));
    assert_eq!(decide(&[&GUEST, &PRIVATE], true), Verdict::Redirect("/"));
}

// =============================================================
// before_each
// =============================================================

#[test]
fn auth_routes_redirect_anonymous_to_login() {
    let (guard, mut store, _) = setup();
    for path in ["/user/list", "/comment/list", "/comment/likes", "/comment/user-liked"] {
        assert_eq!(verdict(&guard, &mut store, path), Verdict::Redirect("/login"), "{path}");
    }
}

#[test]
fn login_redirects_authenticated_to_root() {
    let (guard, mut store, _) = setup();
    store.login(user("a"), "tok123").unwrap();
    assert_eq!(verdict(&guard, &mut store, "/login"), Verdict::Redirect("/"));
}

#[test]
fn untagged_routes_are_always_allowed() {
    let (guard, mut store, _) = setup();
    assert_eq!(verdict(&guard, &mut store, "/"), Verdict::Allow);
    assert_eq!(verdict(&guard, &mut store, "/unknown"), Verdict::Allow);

    store.login(user("a"), "tok").unwrap();
    assert_eq!(verdict(&guard, &mut store, "/"), Verdict::Allow);
    assert_eq!(verdict(&guard, &mut store, "/unknown"), Verdict::Allow);
}

#[test]
fn before_each_rehydrates_every_time() {
    let (guard, mut store, storage) = setup();
    assert_eq!(verdict(&guard, &mut store, "/user/list"), Verdict::Redirect("/login"));

    // Another window logs in behind our back.
    let mut other = SessionStore::new(Box::new(storage), &StorageConfig::default());
    other.login(user("b"), "other-tok").unwrap();

    assert_eq!(verdict(&guard, &mut store, "/user/list"), Verdict::Allow);
    assert_eq!(store.token(), Some("other-tok"));
}

#[test]
fn title_falls_back_to_default_label() {
    let (guard, mut store, _) = setup();
    let decision = guard.before_each(&mut store, "/login", None);
    assert_eq!(decision.title, DEFAULT_TITLE);
}

#[test]
fn declared_title_wins() {
    static TABLE: &[RouteEntry] = &[OPEN];
    let guard = RouteGuard::with_table(TABLE, &UiConfig::default());
    let (_, mut store, _) = setup();

    let decision = guard.before_each(&mut store, "/open", Some("/"));
    assert_eq!(decision.title, "Open page");
    assert_eq!(decision.verdict, Verdict::Allow);
}

#[test]
fn configured_default_title_is_used() {
    let ui = UiConfig {
        default_title: "Admin".to_string(),
    };
    let guard = RouteGuard::new(&ui);
    let (_, mut store, _) = setup();
    assert_eq!(guard.before_each(&mut store, "/login", None).title, "Admin");
}

#[test]
fn malformed_record_is_treated_as_guest_and_cleared() {
    let (guard, mut store, storage) = setup();
    storage.0.borrow_mut().set_item("user_token", "tok").unwrap();
    storage.0.borrow_mut().set_item("user_info", "{broken").unwrap();

    assert_eq!(verdict(&guard, &mut store, "/user/list"), Verdict::Redirect("/login"));
    assert!(!store.is_authenticated());
    assert!(storage.0.borrow().is_empty());
}

// =============================================================
// navigate
// =============================================================

#[test]
fn fresh_process_comment_list_lands_on_login() {
    let (guard, mut store, _) = setup();
    let nav = guard.navigate(&mut store, "/comment/list", None).unwrap();
    assert_eq!(nav.path, "/login");
    assert!(nav.redirected);
}

#[test]
fn logged_in_login_lands_on_user_list() {
    let (guard, mut store, _) = setup();
    store.login(user("a"), "tok123").unwrap();

    let nav = guard.navigate(&mut store, "/login", None).unwrap();
    assert_eq!(nav.path, "/user/list");
    assert_eq!(nav.title, DEFAULT_TITLE);
}

#[test]
fn login_then_logout_user_list_lands_on_login() {
    let (guard, mut store, storage) = setup();
    store.login(user("a"), "tok").unwrap();
    store.logout().unwrap();

    let nav = guard.navigate(&mut store, "/user/list", None).unwrap();
    assert_eq!(nav.path, "/login");
    assert!(storage.0.borrow().is_empty());
}

#[test]
fn seeded_storage_allows_user_list() {
    let (guard, mut store, storage) = setup();
    storage.0.borrow_mut().set_item("user_token", "seeded").unwrap();
    storage
        .0
        .borrow_mut()
        .set_item("user_info", r#"{"name":"seed"}"#)
        .unwrap();

    let nav = guard.navigate(&mut store, "/user/list", None).unwrap();
    assert_eq!(nav.path, "/user/list");
    assert!(!nav.redirected);
    assert_eq!(store.token(), Some("seeded"));
    assert_eq!(store.user(), Some(&user("seed")));
}

#[test]
fn root_follows_declared_redirect() {
    let (guard, mut store, _) = setup();
    store.login(user("a"), "tok").unwrap();

    let nav = guard.navigate(&mut store, "/", None).unwrap();
    assert_eq!(nav.path, "/user/list");
    assert!(nav.redirected);
}

#[test]
fn anonymous_root_ends_on_login() {
    let (guard, mut store, _) = setup();
    let nav = guard.navigate(&mut store, "/", None).unwrap();
    assert_eq!(nav.path, "/login");
}

#[test]
fn guard_redirect_cycle_is_reported() {
    // Guests bounce off /login back to /login.
    static TABLE: &[RouteEntry] = &[
        RouteEntry {
            path: "/",
            name: "Home",
            target: Target::View,
            access: Access::RequiresGuest,
            title: None,
        },
        RouteEntry {
            path: "/login",
            name: "Login",
            target: Target::View,
            access: Access::RequiresAuth,
            title: None,
        },
    ];
    let guard = RouteGuard::with_table(TABLE, &UiConfig::default());
    let (_, mut store, _) = setup();

    let err = guard.navigate(&mut store, "/login", None).unwrap_err();
    assert!(matches!(err, Error::RedirectLoop(ref path) if path == "/login"));
}
