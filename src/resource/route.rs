use itertools::Itertools;

use crate::error::{GeoFeatureError, Result};

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('%')
}

/// Number of `%` placeholder segments in `route`.
pub(crate) fn num_placeholders(route: &str) -> usize {
    route.split('/').filter(|segment| is_placeholder(segment)).count()
}

/// Replace each placeholder segment of `route` with the next argument, in order.
///
/// Extra arguments are ignored.
pub(crate) fn expand_route<S: AsRef<str>>(route: &str, args: &[S]) -> Result<String> {
    let expected = num_placeholders(route);
    if args.len() < expected {
        return Err(GeoFeatureError::RouteArgument {
            expected,
            given: args.len(),
        });
    }

    let mut args = args.iter().map(AsRef::as_ref);
    let expanded = route
        .split('/')
        .map(|segment| {
            if is_placeholder(segment) {
                args.next().unwrap_or(segment)
            } else {
                segment
            }
        })
        .join("/");
    Ok(expanded)
}

/// `endpoint` and `route` joined by exactly one slash.
pub(crate) fn join_uri(endpoint: &str, route: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn expand() {
        let route = "/items/%/detail/%";
        assert_eq!(num_placeholders(route), 2);
        assert_eq!(
            expand_route(route, &["42", "geo"]).unwrap(),
            "/items/42/detail/geo"
        );
    }

    #[test]
    fn named_placeholders() {
        let route = "regions/%region/%id";
        let args = vec!["north".to_string(), "7".to_string(), "ignored".to_string()];
        assert_eq!(expand_route(route, &args).unwrap(), "regions/north/7");
    }

    #[test]
    fn too_few_arguments() {
        let err = expand_route("/items/%/detail/%", &["42"]).unwrap_err();
        assert!(matches!(
            err,
            GeoFeatureError::RouteArgument {
                expected: 2,
                given: 1
            }
        ));
    }

    #[test]
    fn no_placeholders() {
        let args: [&str; 0] = [];
        assert_eq!(expand_route("/", &args).unwrap(), "/");
        assert_eq!(expand_route("/all", &args).unwrap(), "/all");
    }

    #[test]
    fn join() {
        assert_eq!(join_uri("https://x/geo", "/items/1"), "https://x/geo/items/1");
        assert_eq!(join_uri("https://x/geo/", "items/1"), "https://x/geo/items/1");
        assert_eq!(join_uri("https://x/geo", "/"), "https://x/geo/");
    }
}
