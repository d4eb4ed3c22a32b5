use chrono::NaiveDateTime;
use url::Url;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `{mode}_{YYYY-MM-DD_HH-MM-SS}.csv`
pub fn results_filename(mode: &str, at: NaiveDateTime) -> String {
    format!("{mode}_{}.csv", at.format(DATETIME_FORMAT))
}

/// Final non-empty path segment of `url`.
pub fn archive_filename(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(ToOwned::to_owned)
}
