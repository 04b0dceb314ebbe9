use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use yew_router::Routable;

/// The destinations this app can render.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Route {
	Home,
	Admin,
	NotFound,
}

/// One row of the route table: a literal path, a symbolic name, and the
/// destination they select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
	pub path: &'static str,
	pub name: &'static str,
	pub route: Route,
}

/// Rejected at table construction; both paths and names must be unique.
#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
	DuplicatePath(&'static str),
	DuplicateName(&'static str),
}

impl fmt::Display for TableError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicatePath(path) => write!(f, "two routes registered for path {path}"),
			Self::DuplicateName(name) => write!(f, "two routes registered with name {name}"),
		}
	}
}

/// A lookup that matched nothing; holds the path that was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedRoute(pub String);

impl fmt::Display for UnmatchedRoute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "no route registered for path {}", self.0)
	}
}

/// The path → destination mapping, bound to a navigation strategy. Built
/// once at startup, never mutated.
pub struct RouteTable {
	entries: Vec<RouteEntry>,
	history: HistoryMode,
}

impl RouteTable {
	pub fn new(entries: Vec<RouteEntry>, history: HistoryMode) -> Result<Self, TableError> {
		for (idx, entry) in entries.iter().enumerate() {
			for other in &entries[..idx] {
				if other.path == entry.path {
					return Err(TableError::DuplicatePath(entry.path));
				}
				if other.name == entry.name {
					return Err(TableError::DuplicateName(entry.name));
				}
			}
		}

		Ok(Self { entries, history })
	}

	pub fn history(&self) -> HistoryMode {
		self.history
	}

	/// Exact-literal lookup. Address bars hand us "/admin/" often enough
	/// that trailing slashes are shaved off before comparing.
	pub fn resolve(&self, path: &str) -> Result<&RouteEntry, UnmatchedRoute> {
		let trimmed = match path.trim_end_matches('/') {
			"" => "/",
			rest => rest,
		};

		self.entries.iter()
			.find(|entry| entry.path == trimmed)
			.ok_or_else(|| UnmatchedRoute(path.to_string()))
	}

	pub fn entry_for(&self, route: Route) -> Option<&RouteEntry> {
		self.entries.iter().find(|entry| entry.route == route)
	}

	pub fn paths(&self) -> Vec<&'static str> {
		self.entries.iter().map(|entry| entry.path).collect()
	}
}

/// How navigation binds to the browser: clean URLs through the history API,
/// or fragment addressing for hosts that can't rewrite unknown paths to the
/// app shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HistoryMode {
	WebHistory,
	HashHistory,
}

// The only table this app ever builds. A duplicate in the entries below is a
// configuration error, so it fails before any navigation happens.
pub static ROUTES: LazyLock<RouteTable> = LazyLock::new(|| {
	RouteTable::new(vec![
		RouteEntry { path: "/", name: "Home", route: Route::Home },
		RouteEntry { path: "/admin", name: "Admin", route: Route::Admin },
	], HistoryMode::WebHistory)
		.expect("route table holds a duplicate path or name")
});

impl Routable for Route {
	fn from_path(path: &str, _params: &HashMap<&str, &str>) -> Option<Self> {
		ROUTES.resolve(path).map(|entry| entry.route).ok()
	}

	fn to_path(&self) -> String {
		ROUTES.entry_for(*self)
			.map_or_else(|| "/404".to_string(), |entry| entry.path.to_string())
	}

	fn routes() -> Vec<&'static str> {
		ROUTES.paths()
	}

	fn not_found_route() -> Option<Self> {
		Some(Self::NotFound)
	}

	fn recognize(pathname: &str) -> Option<Self> {
		Some(ROUTES.resolve(pathname).map_or(Route::NotFound, |entry| entry.route))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(path: &'static str, name: &'static str, route: Route) -> RouteEntry {
		RouteEntry { path, name, route }
	}

	#[test]
	fn registered_paths_resolve_to_their_routes() {
		assert_eq!(ROUTES.resolve("/").unwrap().route, Route::Home);
		assert_eq!(ROUTES.resolve("/admin").unwrap().route, Route::Admin);
		assert_eq!(ROUTES.resolve("/").unwrap().name, "Home");
		assert_eq!(ROUTES.resolve("/admin").unwrap().name, "Admin");
	}

	#[test]
	fn unknown_path_is_unmatched() {
		assert_eq!(
			ROUTES.resolve("/unknown"),
			Err(UnmatchedRoute("/unknown".to_string()))
		);
	}

	#[test]
	fn resolution_is_idempotent() {
		let first = ROUTES.resolve("/admin").unwrap().clone();
		for _ in 0..3 {
			assert_eq!(*ROUTES.resolve("/admin").unwrap(), first);
		}
	}

	#[test]
	fn trailing_slash_is_tolerated() {
		assert_eq!(ROUTES.resolve("/admin/").unwrap().route, Route::Admin);
		assert_eq!(ROUTES.resolve("/").unwrap().route, Route::Home);
	}

	#[test]
	fn duplicate_path_is_a_config_error() {
		let err = RouteTable::new(vec![
			entry("/", "Home", Route::Home),
			entry("/", "AlsoHome", Route::Admin),
		], HistoryMode::WebHistory).err();
		assert_eq!(err, Some(TableError::DuplicatePath("/")));
	}

	#[test]
	fn duplicate_name_is_a_config_error() {
		let err = RouteTable::new(vec![
			entry("/", "Home", Route::Home),
			entry("/admin", "Home", Route::Admin),
		], HistoryMode::HashHistory).err();
		assert_eq!(err, Some(TableError::DuplicateName("Home")));
	}

	#[test]
	fn recognize_falls_back_to_not_found() {
		assert_eq!(Route::recognize("/"), Some(Route::Home));
		assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
		assert_eq!(Route::recognize("/unknown"), Some(Route::NotFound));
	}

	#[test]
	fn to_path_round_trips_through_the_table() {
		assert_eq!(Route::Home.to_path(), "/");
		assert_eq!(Route::Admin.to_path(), "/admin");
		assert_eq!(Route::NotFound.to_path(), "/404");
	}
}
