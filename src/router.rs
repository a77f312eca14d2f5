//! Path → page mapping.
//!
//! Query strings, fragments, repeated or trailing slashes and letter case
//! are ignored, so `/Predictions/?tab=table#top` resolves like `/predictions`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// Analytics dashboard, served at `/analytics` and `/dashboard`.
    Dashboard,
    Predictions,
    About,
    NotFound(String),
}

/// Strip query and fragment.
fn strip_query_frag(s: &str) -> &str {
    match s.find(['?', '#']) {
        Some(i) => &s[..i],
        None => s,
    }
}

impl Route {
    pub fn parse(raw: &str) -> Self {
        let path = strip_query_frag(raw.trim());
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            [one] => match one.to_ascii_lowercase().as_str() {
                "login" => Route::Login,
                "analytics" | "dashboard" => Route::Dashboard,
                "predictions" => Route::Predictions,
                "about" => Route::About,
                _ => Route::NotFound(raw.to_string()),
            },
            _ => Route::NotFound(raw.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard => "/analytics",
            Route::Predictions => "/predictions",
            Route::About => "/about",
            Route::NotFound(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/analytics"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/predictions"), Route::Predictions);
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn tolerates_noise() {
        assert_eq!(Route::parse("  /Predictions/?tab=table#top "), Route::Predictions);
        assert_eq!(Route::parse("//about//"), Route::About);
        assert_eq!(Route::parse("/?ref=nav"), Route::Home);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/privacy-policy"),
            Route::NotFound("/privacy-policy".into())
        );
        assert!(matches!(Route::parse("/data/predict"), Route::NotFound(_)));
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [Route::Home, Route::Login, Route::Dashboard, Route::Predictions, Route::About] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
