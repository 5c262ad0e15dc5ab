/// Default base URL for people-listing requests.
pub const DEFAULT_PEOPLE_BASE_URL: &str = "https://wizard-world-api.herokuapp.com";

/// Path segment of the listing resource.
pub const PEOPLE_RESOURCE: &str = "/Wizards";

/// Normalize a base URL to the people listing endpoint.
///
/// Normalization rules:
/// 1) blank input falls back to [`DEFAULT_PEOPLE_BASE_URL`]
/// 2) keep a URL that already ends in `/Wizards`
/// 3) append `/Wizards` otherwise
pub fn normalize_people_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_PEOPLE_BASE_URL
    } else {
        input.trim()
    };

    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with(PEOPLE_RESOURCE) {
        return trimmed.to_string();
    }
    format!("{trimmed}{PEOPLE_RESOURCE}")
}
