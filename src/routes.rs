//! Client Routes
//!
//! Paths of the admin UI, parsed from and formatted to the browser location.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a path segment or query value
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Menu { username: String },
    NewItem { username: String, category: Option<String> },
    EditItem { username: String, item_id: String },
    Settings { username: String },
    Rewards { username: String },
    NotFound,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

fn decode(value: &str) -> String {
    percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned()
}

fn query_value(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(v))
        .filter(|v| !v.is_empty())
}

impl Route {
    /// Parse `path?query` as found in `location.pathname + location.search`
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let segments: Vec<String> = path.split('/').filter(|s| !s.is_empty()).map(decode).collect();
        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

        match parts.as_slice() {
            [] => Route::Home,
            ["dashboard", username] | ["dashboard", username, "menu"] => Route::Menu { username: username.to_string() },
            ["dashboard", username, "menu", "new"] => Route::NewItem {
                username: username.to_string(),
                category: query_value(query, "category"),
            },
            ["dashboard", username, "menu", item_id, "edit"] => Route::EditItem {
                username: username.to_string(),
                item_id: item_id.to_string(),
            },
            ["dashboard", username, "settings"] => Route::Settings { username: username.to_string() },
            ["dashboard", username, "rewards"] => Route::Rewards { username: username.to_string() },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Menu { username } => format!("/dashboard/{}/menu", encode(username)),
            Route::NewItem { username, category } => match category {
                Some(category) => format!("/dashboard/{}/menu/new?category={}", encode(username), encode(category)),
                None => format!("/dashboard/{}/menu/new", encode(username)),
            },
            Route::EditItem { username, item_id } => {
                format!("/dashboard/{}/menu/{}/edit", encode(username), encode(item_id))
            }
            Route::Settings { username } => format!("/dashboard/{}/settings", encode(username)),
            Route::Rewards { username } => format!("/dashboard/{}/rewards", encode(username)),
        }
    }

    /// Route of the current browser location
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Route::Home;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Route::parse(&format!("{}{}", path, search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/dashboard/luigis/menu"), Route::Menu { username: "luigis".into() });
        assert_eq!(
            Route::parse("/dashboard/luigis/menu/abc123/edit"),
            Route::EditItem { username: "luigis".into(), item_id: "abc123".into() }
        );
        assert_eq!(Route::parse("/dashboard/luigis/rewards/"), Route::Rewards { username: "luigis".into() });
        assert_eq!(Route::parse("/elsewhere/entirely"), Route::NotFound);
    }

    #[test]
    fn test_new_item_category_roundtrip() {
        let route = Route::NewItem {
            username: "luigis".into(),
            category: Some("Drinks & Juices".into()),
        };
        let path = route.to_path();
        assert_eq!(path, "/dashboard/luigis/menu/new?category=Drinks%20%26%20Juices");
        assert_eq!(Route::parse(&path), route);
    }

    #[test]
    fn test_plus_in_query_is_space() {
        assert_eq!(
            Route::parse("/dashboard/luigis/menu/new?category=Hot+Dishes"),
            Route::NewItem { username: "luigis".into(), category: Some("Hot Dishes".into()) }
        );
        assert_eq!(
            Route::parse("/dashboard/luigis/menu/new?category="),
            Route::NewItem { username: "luigis".into(), category: None }
        );
    }
}
