use std::path::PathBuf;

use docs_core::{ExpectedStatusMap, Mode, OutputLayout, OutputMode, SiteConfig};
use pretty_assertions::assert_eq;

#[test]
fn expected_status_map_covers_index_codes() {
    let map = ExpectedStatusMap::peps();
    assert_eq!(
        map.expected("").unwrap(),
        &["Draft".to_string(), "Active".to_string()]
    );
    assert_eq!(
        map.expected("A").unwrap(),
        &["Active".to_string(), "Accepted".to_string()]
    );
    assert_eq!(map.expected("W").unwrap(), &["Withdrawn".to_string()]);
    assert!(map.expected("X").is_none());
    assert_eq!(map.codes().count(), 8);
}

#[test]
fn modes_round_trip_through_names() {
    for (mode, name) in Mode::ALL.iter().zip(Mode::NAMES) {
        assert_eq!(mode.as_str(), name);
        assert_eq!(name.parse::<Mode>().unwrap(), *mode);
    }
    let err = "news".parse::<Mode>().unwrap_err();
    assert!(err.to_string().contains("whats-new, latest-versions, download, pep"));
}

#[test]
fn output_modes_parse() {
    assert_eq!("pretty".parse::<OutputMode>().unwrap(), OutputMode::Pretty);
    assert_eq!("file".parse::<OutputMode>().unwrap(), OutputMode::File);
    assert!("json".parse::<OutputMode>().is_err());
}

#[test]
fn python_org_urls_are_absolute() {
    let site = SiteConfig::python_org().unwrap();
    assert_eq!(site.docs_url.as_str(), "https://docs.python.org/3/");
    assert_eq!(
        site.docs_url.join("whatsnew/").unwrap().as_str(),
        "https://docs.python.org/3/whatsnew/"
    );
    assert_eq!(site.peps_url.as_str(), "https://peps.python.org/");
}

#[test]
fn layout_places_fixed_directories_under_root() {
    let layout = OutputLayout::new("/tmp/run");
    assert_eq!(layout.downloads_dir(), PathBuf::from("/tmp/run/downloads"));
    assert_eq!(layout.results_dir(), PathBuf::from("/tmp/run/results"));
    assert_eq!(layout.logs_dir(), PathBuf::from("/tmp/run/logs"));
    assert_eq!(layout.cache_dir(), PathBuf::from("/tmp/run/http_cache"));
}
