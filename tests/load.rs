use std::io::Write;

use tempfile::NamedTempFile;
use zonetab::{LanguageTag, LocalTableSource, TableSource, ZoneTab, io::source_for};

const ZONE_TAB: &str = "\
# TZ zone descriptions
US\t+404251-0740023\tAmerica/New_York\tEastern (most areas)
US\t+421953-0830245\tAmerica/Detroit\tEastern - MI (most areas)
CA\t+4906-11631\tAmerica/Vancouver\tPacific - BC (most areas)
";

const BACKWARD: &str = "\
# Link\tTARGET\t\t\tLINK-NAME
Link\tAmerica/New_York\tUS/Eastern
Link\tAmerica/Vancouver\tCanada/Pacific
";

fn table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_from_local_files() {
    let zone_tab = table(ZONE_TAB);
    let links = table(BACKWARD);

    let tab = ZoneTab::load(
        &LocalTableSource::new(zone_tab.path()),
        &LocalTableSource::new(links.path()),
    )
    .await
    .unwrap();

    assert_eq!(tab.len_countries(), 2);
    assert_eq!(tab.len_timezones(), 3);
    assert_eq!(tab.primary_timezone_for_country("US"), Some("America/New_York"));
    assert_eq!(tab.countries_for_timezone("US/Eastern"), tab.countries_for_timezone("America/New_York"));
    assert_eq!(tab.primary_country_for_timezone("Canada/Pacific"), Some("CA"));
    assert_eq!(tab.primary_timezone_for_locale("en_CA.UTF-8", &LanguageTag), Some("America/Vancouver"));
}

#[tokio::test]
async fn test_load_through_boxed_sources() {
    let zone_tab = table(ZONE_TAB);
    let links = table(BACKWARD);

    let zone_src = source_for(zone_tab.path().to_str().unwrap(), 1).unwrap();
    let links_src = source_for(links.path().to_str().unwrap(), 1).unwrap();
    assert_eq!(zone_src.describe(), zone_tab.path().display().to_string());

    let tab = ZoneTab::load(zone_src.as_ref(), links_src.as_ref()).await.unwrap();
    assert_eq!(tab.timezones_for_country("US").map(<[_]>::len), Some(2));
}

#[tokio::test]
async fn test_missing_table_fails_the_load() {
    let zone_tab = table(ZONE_TAB);
    let dir = tempfile::tempdir().unwrap();

    let result = ZoneTab::load(
        &LocalTableSource::new(zone_tab.path()),
        &LocalTableSource::new(dir.path().join("backward")),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_non_utf8_table_fails_the_load() {
    let mut zone_tab = NamedTempFile::new().unwrap();
    zone_tab.write_all(b"US\t+0+0\t\xfe\xff\n").unwrap();
    let links = table(BACKWARD);

    let err = ZoneTab::load(
        &LocalTableSource::new(zone_tab.path()),
        &LocalTableSource::new(links.path()),
    )
    .await
    .unwrap_err();

    let parse = err.downcast_ref::<zonetab::ParseError>().unwrap();
    assert_eq!(parse.table(), zonetab::Table::ZoneTab);
}
