//! "View directions" link building.

#[cfg(test)]
#[path = "directions_test.rs"]
mod directions_test;

use url::Url;

const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Google Maps directions URL to `address`, or `None` for a blank address.
#[must_use]
pub fn directions_url(address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    Url::parse_with_params(MAPS_DIRECTIONS_URL, &[("api", "1"), ("destination", address)])
        .map(String::from)
        .ok()
}
