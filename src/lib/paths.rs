//! Client-side paths linked from pages, redirects and emails. Each is a
//! single absolute segment so the router can match it directly.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const VERIFY_EMAIL: &str = "/verify-email";

/// The router segment for one of the paths above: no leading `/`, and empty
/// for `HOME`.
pub fn route_segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::{FORGOT_PASSWORD, HOME, LOGIN, RESET_PASSWORD, VERIFY_EMAIL, route_segment};

    #[test]
    fn home_is_the_empty_segment() {
        assert_eq!(route_segment(HOME), "");
    }

    #[test]
    fn every_path_is_one_distinct_segment() {
        let segments: Vec<&str> = [LOGIN, FORGOT_PASSWORD, RESET_PASSWORD, VERIFY_EMAIL]
            .into_iter()
            .map(route_segment)
            .collect();

        assert_eq!(
            segments,
            vec!["login", "forgot-password", "reset-password", "verify-email"]
        );
        assert!(segments.iter().all(|segment| !segment.contains('/')));
    }
}
