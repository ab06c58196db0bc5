//! Routing table and navigation history
//!
//! Every path the application understands is listed once in [`ROUTE_TABLE`].
//! Patterns are `/`-separated segments; a segment starting with `:` captures
//! whatever is in that position.

use tracing::debug;

/// A resolved page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Analysis,
    History,
    /// Detailed report for the id captured from `/analysis/:id`
    Report { id: String },
    NotFound { path: String },
}

struct RouteEntry {
    pattern: &'static str,
    build: fn(Option<&str>) -> Route,
}

fn home(_: Option<&str>) -> Route {
    Route::Home
}

fn dashboard(_: Option<&str>) -> Route {
    Route::Dashboard
}

fn analysis(_: Option<&str>) -> Route {
    Route::Analysis
}

fn history(_: Option<&str>) -> Route {
    Route::History
}

fn report(id: Option<&str>) -> Route {
    Route::Report {
        id: id.unwrap_or_default().to_string(),
    }
}

const ROUTE_TABLE: [RouteEntry; 5] = [
    RouteEntry {
        pattern: "/",
        build: home,
    },
    RouteEntry {
        pattern: "/dashboard",
        build: dashboard,
    },
    RouteEntry {
        pattern: "/analysis",
        build: analysis,
    },
    RouteEntry {
        pattern: "/history",
        build: history,
    },
    RouteEntry {
        pattern: "/analysis/:id",
        build: report,
    },
];

/// Links shown in the navigation bar and sidebar, in order
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "Dashboard",
        path: "/dashboard",
    },
    NavLink {
        label: "Analysis",
        path: "/analysis",
    },
    NavLink {
        label: "History",
        path: "/history",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Strip a trailing slash, query string and fragment (`/history/?q=1` → `/history`)
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Match `path` against one pattern, returning the captured parameter
fn match_pattern<'a>(pattern: &str, path: &'a str) -> Option<Option<&'a str>> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut captured = None;
    for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
        if pat.starts_with(':') {
            if seg.is_empty() {
                return None;
            }
            captured = Some(*seg);
        } else if pat != seg {
            return None;
        }
    }

    Some(captured)
}

impl Route {
    /// Resolve a path through the routing table
    pub fn parse(path: &str) -> Route {
        let path = normalize(path);
        ROUTE_TABLE
            .iter()
            .find_map(|entry| match_pattern(entry.pattern, &path).map(|id| (entry.build)(id)))
            .unwrap_or(Route::NotFound { path })
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Analysis => "/analysis".to_string(),
            Route::History => "/history".to_string(),
            Route::Report { id } => format!("/analysis/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Analysis => "Analysis",
            Route::History => "History",
            Route::Report { .. } => "Report",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Current location plus a back stack
#[derive(Debug, Clone)]
pub struct Router {
    route: Route,
    back_stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    pub fn new(initial_path: &str) -> Self {
        Self {
            route: Route::parse(initial_path),
            back_stack: Vec::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> String {
        self.route.path()
    }

    /// Go to `path`. Returns false when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        let next = Route::parse(path);
        if next == self.route {
            return false;
        }
        debug!("Navigate {} -> {}", self.route.path(), next.path());
        let previous = std::mem::replace(&mut self.route, next);
        self.back_stack.push(previous);
        true
    }

    /// Pop the back stack. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                debug!("Back {} -> {}", self.route.path(), previous.path());
                self.route = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Index into [`NAV_LINKS`] of the link whose path equals the current path
    pub fn active_nav_index(&self) -> Option<usize> {
        let path = self.path();
        NAV_LINKS.iter().position(|link| link.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/analysis"), Route::Analysis);
        assert_eq!(Route::parse("/history"), Route::History);
    }

    #[test]
    fn test_parse_report_route_captures_id() {
        assert_eq!(
            Route::parse("/analysis/7"),
            Route::Report {
                id: "7".to_string()
            }
        );
        assert_eq!(
            Route::parse("/analysis/abc"),
            Route::Report {
                id: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_normalizes_path() {
        assert_eq!(Route::parse("/history/"), Route::History);
        assert_eq!(Route::parse("history"), Route::History);
        assert_eq!(Route::parse("/history?status=legal"), Route::History);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_parse_unknown_path() {
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound {
                path: "/settings".to_string()
            }
        );
        assert!(matches!(
            Route::parse("/analysis/1/extra"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::default();
        assert!(router.navigate("/dashboard"));
        assert!(router.navigate("/analysis/3"));
        assert_eq!(router.path(), "/analysis/3");

        assert!(router.back());
        assert_eq!(router.route(), &Route::Dashboard);
        assert!(router.back());
        assert_eq!(router.route(), &Route::Home);
        assert!(!router.back());
    }

    #[test]
    fn test_navigate_to_current_path_is_noop() {
        let mut router = Router::new("/history");
        assert!(!router.navigate("/history/"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_active_nav_index_exact_match() {
        let mut router = Router::default();
        assert_eq!(router.active_nav_index(), Some(0));
        router.navigate("/analysis");
        assert_eq!(router.active_nav_index(), Some(2));
        // Report pages highlight nothing, not even Analysis
        router.navigate("/analysis/1");
        assert_eq!(router.active_nav_index(), None);
    }
}
