//! Integration tests for loading the speed table from disk.

use std::io::Write;

use speed_ingest::{IngestError, load_dataset, load_dataset_or_empty};
use speed_model::{RegionFilter, Year};
use tempfile::NamedTempFile;

const TABLE: &str = "\
country,region,major_area,year 2017,year 2018,year 2019,year 2020,year 2021,year 2022,year 2023,year 2024
Norway,Europe,Northern Europe,40.1,45.2,52.0,60.3,75.5,80.0,90.2,101.4
Chile,Americas,South America,10,12,15,20,,40,55,70.5
,Europe,Unknown,1,2,3,4,5,6,7,8
Kenya,Africa,Eastern Africa,n/a,,,,,,-1,9.5
Albania,Europe,Southern Europe,,,,,,,,
";

fn write_table(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write table");
    file
}

fn year(value: u16) -> Year {
    Year::new(value).expect("measurement year")
}

#[test]
fn loads_and_normalizes_table() {
    let file = write_table(TABLE);
    let dataset = load_dataset(file.path()).expect("load dataset");

    assert_eq!(dataset.len(), 4);
    assert_eq!(
        dataset.all_countries(),
        vec!["Albania", "Chile", "Kenya", "Norway"]
    );
    assert_eq!(dataset.all_regions(), vec!["Africa", "Americas", "Europe"]);

    let chile = dataset.by_country("Chile").expect("Chile present");
    assert_eq!(chile.value(year(2021)), None);
    assert_eq!(chile.value(year(2024)), Some(70.5));

    let kenya = dataset.by_country("Kenya").expect("Kenya present");
    assert_eq!(kenya.value(year(2017)), None);
    assert_eq!(kenya.value(year(2023)), None);
    assert_eq!(kenya.value(year(2024)), Some(9.5));

    let albania = dataset.by_country("Albania").expect("Albania present");
    assert!(!albania.values.has_any());
}

#[test]
fn region_query_over_loaded_table() {
    let file = write_table(TABLE);
    let dataset = load_dataset(file.path()).expect("load dataset");

    let europe = dataset.by_region(&RegionFilter::parse("Europe"));
    let names: Vec<_> = europe.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, vec!["Norway", "Albania"]);
    assert_eq!(dataset.by_region(&RegionFilter::parse("All")).len(), 4);
}

#[test]
fn table_without_country_column_fails_to_load() {
    let file = write_table("nation,region\nChile,Americas\n");
    let result = load_dataset(file.path());
    assert!(matches!(result, Err(IngestError::MissingColumn { .. })));

    assert!(load_dataset_or_empty(file.path()).is_empty());
}

#[test]
fn header_only_table_is_empty_dataset() {
    let file = write_table("country,region,major_area,year 2024\n");
    let dataset = load_dataset(file.path()).expect("load dataset");
    assert!(dataset.is_empty());
    assert_eq!(dataset.latest_year_with_data(), None);
}

#[test]
fn undecodable_cell_only_loses_that_cell() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"country,region,major_area,year 2023,year 2024\n")
        .expect("write header");
    file.write_all(b"Norway,Europe,Northern Europe,90,100\n")
        .expect("write row");
    file.write_all(b"Chile,Americas,South America,55,\xff\xfe9\n")
        .expect("write row");

    let dataset = load_dataset(file.path()).expect("load dataset");

    assert_eq!(dataset.len(), 2);
    let norway = dataset.by_country("Norway").expect("Norway present");
    assert_eq!(norway.value(year(2024)), Some(100.0));
    let chile = dataset.by_country("Chile").expect("Chile present");
    assert_eq!(chile.value(year(2023)), Some(55.0));
    assert_eq!(chile.value(year(2024)), None);
}

#[test]
fn stray_separator_cell_is_missing() {
    let file = write_table(
        "country,region,year 2023,year 2024\nChile,Americas,\"1,5\",\"1,234.5\"\n",
    );
    let dataset = load_dataset(file.path()).expect("load dataset");

    let chile = dataset.by_country("Chile").expect("Chile present");
    assert_eq!(chile.value(year(2023)), None);
    assert_eq!(chile.value(year(2024)), Some(1234.5));
}
