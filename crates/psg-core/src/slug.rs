//! Derives a plain-text search query from a product URL.

use url::Url;

/// Extracts a search phrase from a product URL.
///
/// Splits the URL path into segments, drops empty segments and the literal
/// `products` segment, takes the last remaining segment as the product slug,
/// and replaces hyphens and underscores with spaces. No case folding is
/// applied.
///
/// If the URL does not parse or no slug segment remains, the original input
/// is returned unchanged so downstream search never sees an empty query.
#[must_use]
pub fn query_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let slug = parsed.path_segments().and_then(|segments| {
        segments
            .filter(|segment| !segment.is_empty() && *segment != "products")
            .next_back()
    });

    match slug {
        Some(slug) => slug.replace(['-', '_'], " "),
        None => url.to_string(),
    }
}
