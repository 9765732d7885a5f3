//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route rules
//! - Look up the first rule matching method and target
//! - Render the matched fixture
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order (first match wins)
//! - Every GET and POST target matches something; the last rule per method
//!   is a catch-all that still answers 200
//! - Other methods have no rules and yield `None`

use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::fixtures::{read, write, Fixture};
use crate::routing::matcher::PathPattern;

/// A single (method, predicate, fixture) triple.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// Route identifier for logging.
    pub name: &'static str,
    pub method: Method,
    pub pattern: PathPattern,
    pub fixture: Fixture,
}

impl RouteRule {
    pub fn new(name: &'static str, method: Method, pattern: PathPattern, fixture: Fixture) -> Self {
        Self {
            name,
            method,
            pattern,
            fixture,
        }
    }

    fn matches(&self, method: &Method, target: &str) -> bool {
        self.method == *method && self.pattern.matches(target)
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct Dispatch {
    /// Name of the rule that matched.
    pub route: &'static str,
    pub status: StatusCode,
    pub body: Value,
}

/// Ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// Create a table from rules in evaluation order.
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The fixture API served by the mock server.
    pub fn builtin() -> Self {
        use PathPattern::{Any, Exact, Prefix, Suffix};

        let get = |name, pattern, fixture| RouteRule::new(name, Method::GET, pattern, fixture);
        let post = |name, pattern, fixture| RouteRule::new(name, Method::POST, pattern, fixture);

        Self::new(vec![
            get("health", Exact("/health"), Fixture::Generate(read::health)),
            get("instance", Exact("/api/v1/instance"), Fixture::Generate(read::instance)),
            get(
                "public_timeline",
                Exact("/api/v1/timelines/public"),
                Fixture::Generate(read::public_timeline),
            ),
            get("account", Prefix("/api/v1/accounts/"), Fixture::Generate(read::account)),
            get("search", Prefix("/api/v1/search"), Fixture::Generate(read::search)),
            get("welcome", Any, Fixture::Generate(read::welcome)),
            post("register", Exact("/api/v1/auth/register"), Fixture::Generate(write::register)),
            post("login", Exact("/api/v1/auth/login"), Fixture::Generate(write::login)),
            post("create_status", Exact("/api/v1/statuses"), Fixture::Generate(write::create_status)),
            post("upload_media", Exact("/api/v1/media"), Fixture::Generate(write::upload_media)),
            post("notifications", Exact("/api/v1/notifications"), Fixture::EmptyList("notifications")),
            post("lists", Exact("/api/v1/lists"), Fixture::EmptyList("lists")),
            post("conversations", Exact("/api/v1/conversations"), Fixture::EmptyList("conversations")),
            post("bookmarks", Exact("/api/v1/bookmarks"), Fixture::EmptyList("bookmarks")),
            post("mutes", Exact("/api/v1/mutes"), Fixture::EmptyList("mutes")),
            post("blocks", Exact("/api/v1/blocks"), Fixture::EmptyList("blocks")),
            post("reports", Exact("/api/v1/reports"), Fixture::EmptyList("reports")),
            post("filters", Exact("/api/v1/filters"), Fixture::EmptyList("filters")),
            post("follow", Suffix("/follow"), Fixture::Message("Follow")),
            post("unfollow", Suffix("/unfollow"), Fixture::Message("Unfollow")),
            post("favourite", Suffix("/favourite"), Fixture::Message("Favourite")),
            post("unfavourite", Suffix("/unfavourite"), Fixture::Message("Unfavourite")),
            post("reblog", Suffix("/reblog"), Fixture::Message("Reblog")),
            post("unreblog", Suffix("/unreblog"), Fixture::Message("Unreblog")),
            post("not_implemented", Any, Fixture::Generate(write::not_implemented)),
        ])
    }

    /// Find the first rule matching the request and render its body.
    ///
    /// `target` is the raw request target, query string included.
    pub fn dispatch(&self, method: &Method, target: &str) -> Option<Dispatch> {
        let rule = self.rules.iter().find(|r| r.matches(method, target))?;

        Some(Dispatch {
            route: rule.name,
            status: StatusCode::OK,
            body: rule.fixture.render(target),
        })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(target: &str) -> Dispatch {
        RouteTable::builtin().dispatch(&Method::GET, target).unwrap()
    }

    fn post(target: &str) -> Dispatch {
        RouteTable::builtin().dispatch(&Method::POST, target).unwrap()
    }

    #[test]
    fn test_get_exact_routes() {
        assert_eq!(get("/health").route, "health");
        assert_eq!(get("/api/v1/instance").route, "instance");
        assert_eq!(get("/api/v1/timelines/public").route, "public_timeline");
    }

    #[test]
    fn test_exact_route_rejects_query() {
        // Query strings are part of the target, so exact rules miss.
        assert_eq!(get("/health?full=1").route, "welcome");
    }

    #[test]
    fn test_account_prefix_ignores_suffix() {
        let a = get("/api/v1/accounts/123");
        let b = get("/api/v1/accounts/anything");
        assert_eq!(a.route, "account");
        assert_eq!(a.body, b.body);
        // Prefix requires the trailing slash.
        assert_eq!(get("/api/v1/accounts").route, "welcome");
    }

    #[test]
    fn test_search_matches_with_query() {
        let hit = get("/api/v1/search?q=test");
        assert_eq!(hit.route, "search");
        assert_eq!(hit.body, json!({ "accounts": [], "statuses": [], "hashtags": [] }));
    }

    #[test]
    fn test_get_fallback_is_ok() {
        let hit = get("/unknown/path");
        assert_eq!(hit.status, StatusCode::OK);
        assert_eq!(hit.body["message"], "Welcome to Rustodon Test Server");
        assert!(hit.body["endpoints"].is_array());
    }

    #[test]
    fn test_post_exact_routes() {
        assert_eq!(post("/api/v1/auth/register").body["message"], "Registration successful");
        assert_eq!(post("/api/v1/auth/login").body["message"], "Login successful");
        assert_eq!(post("/api/v1/media").body["type"], "image");
        assert_eq!(post("/api/v1/notifications").body, json!({ "notifications": [] }));
        for resource in ["lists", "conversations", "bookmarks", "mutes", "blocks", "reports", "filters"] {
            let hit = post(&format!("/api/v1/{}", resource));
            assert_eq!(hit.route, resource);
            assert_eq!(hit.body, json!({ resource: [] }));
        }
    }

    #[test]
    fn test_post_suffix_routes() {
        assert_eq!(post("/api/v1/accounts/1/follow").body, json!({ "message": "Follow successful" }));
        assert_eq!(post("/x/follow").body, json!({ "message": "Follow successful" }));
        assert_eq!(post("/api/v1/accounts/1/unfollow").body["message"], "Unfollow successful");
        assert_eq!(post("/api/v1/statuses/5/favourite").body["message"], "Favourite successful");
        assert_eq!(post("/api/v1/statuses/5/unfavourite").body["message"], "Unfavourite successful");
        assert_eq!(post("/api/v1/statuses/5/reblog").body["message"], "Reblog successful");
        assert_eq!(post("/api/v1/statuses/5/unreblog").body["message"], "Unreblog successful");
    }

    #[test]
    fn test_post_fallback_echoes_path() {
        let hit = post("/unknown/path");
        assert_eq!(hit.status, StatusCode::OK);
        assert_eq!(hit.body, json!({ "error": "Endpoint not implemented", "path": "/unknown/path" }));
    }

    #[test]
    fn test_methods_do_not_cross() {
        // GET on a POST-only path falls through to the welcome payload.
        assert_eq!(get("/api/v1/auth/login").route, "welcome");
        // POST on a GET-only path is not implemented.
        assert_eq!(post("/health").route, "not_implemented");
    }

    #[test]
    fn test_unsupported_method_has_no_rule() {
        let table = RouteTable::builtin();
        assert!(table.dispatch(&Method::PUT, "/health").is_none());
        assert!(table.dispatch(&Method::DELETE, "/api/v1/statuses").is_none());
    }

    #[test]
    fn test_fallbacks_are_last_per_method() {
        let table = RouteTable::builtin();
        for method in [Method::GET, Method::POST] {
            let rules: Vec<_> = table.rules().iter().filter(|r| r.method == method).collect();
            let last = rules.last().unwrap();
            assert_eq!(last.pattern, PathPattern::Any);
            assert_eq!(rules.iter().filter(|r| r.pattern == PathPattern::Any).count(), 1);
        }
    }
}
