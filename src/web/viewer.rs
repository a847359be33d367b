use crate::{i18n::Catalog, state::AppState};
use axum::http::{
    HeaderMap,
    header::{ACCEPT_LANGUAGE, COOKIE},
};
use tower_sessions::cookie::Cookie;

/// Per-request inputs for rendering a page.
#[derive(Clone, Debug)]
pub struct Viewer {
    pub is_logged_in: bool,
    pub language: String,
    pub catalog: Catalog,
}

impl Viewer {
    /// Without request headers the viewer is anonymous and gets the default
    /// language.
    pub fn resolve(state: &AppState, headers: Option<&HeaderMap>) -> Self {
        let is_logged_in =
            headers.is_some_and(|headers| is_logged_in(headers, &state.config.logged_in_cookie));
        let (language, catalog) = state
            .catalogs
            .negotiate(headers.and_then(accept_language));

        Self {
            is_logged_in,
            language,
            catalog,
        }
    }
}

/// Whether the request carries the LMS "logged in" marker cookie.
pub fn is_logged_in(headers: &HeaderMap, cookie_name: &str) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value).filter_map(Result::ok))
        .any(|cookie| cookie.name() == cookie_name && cookie.value() == "true")
}

pub fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get(ACCEPT_LANGUAGE)?.to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, i18n::Catalogs};
    use axum::http::HeaderValue;

    fn headers(cookies: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_static(cookie));
        }
        headers
    }

    #[test]
    fn logged_in_cookie_marks_viewer_as_signed_in() {
        let headers = headers(&["csrftoken=abc; edxloggedin=true"]);
        assert!(is_logged_in(&headers, "edxloggedin"));
    }

    #[test]
    fn other_values_are_anonymous() {
        assert!(!is_logged_in(&headers(&["edxloggedin=false"]), "edxloggedin"));
        assert!(!is_logged_in(&headers(&["edxloggedin="]), "edxloggedin"));
        assert!(!is_logged_in(&headers(&["sessionid=true"]), "edxloggedin"));
        assert!(!is_logged_in(&HeaderMap::new(), "edxloggedin"));
    }

    #[test]
    fn checks_every_cookie_header() {
        let headers = headers(&["csrftoken=abc", "junk; edxloggedin=true"]);
        assert!(is_logged_in(&headers, "edxloggedin"));
    }

    #[test]
    fn honours_configured_cookie_name() {
        let headers = headers(&["loggedin=true"]);
        assert!(is_logged_in(&headers, "loggedin"));
        assert!(!is_logged_in(&headers, "edxloggedin"));
    }

    #[test]
    fn reads_accept_language() {
        let mut headers = HeaderMap::new();
        assert_eq!(accept_language(&headers), None);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("es-MX,es;q=0.9"));
        assert_eq!(accept_language(&headers), Some("es-MX,es;q=0.9"));
    }

    fn state() -> AppState {
        let config = Config::from_lookup(|key| match key {
            "HOMEPAGE_URL" => Some("https://example.com".into()),
            "DASHBOARD_URL" => Some("https://example.com/dashboard".into()),
            _ => None,
        })
        .unwrap();

        let mut catalogs = Catalogs::new("en");
        catalogs.insert(
            "es",
            Catalog::from_json(r#"{"Contact Us": "Contáctenos"}"#).unwrap(),
        );

        AppState { config, catalogs }
    }

    #[test]
    fn resolves_signed_in_spanish_viewer() {
        let mut headers = headers(&["edxloggedin=true"]);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("es-MX"));

        let viewer = Viewer::resolve(&state(), Some(&headers));
        assert!(viewer.is_logged_in);
        assert_eq!(viewer.language, "es");
        assert_eq!(viewer.catalog.gettext("Contact Us"), "Contáctenos");
    }

    #[test]
    fn resolves_anonymous_default_viewer_without_headers() {
        let viewer = Viewer::resolve(&state(), None);
        assert!(!viewer.is_logged_in);
        assert_eq!(viewer.language, "en");
        assert_eq!(viewer.catalog.gettext("Contact Us"), "Contact Us");
    }
}
