//! End-to-end tests: annotated source → artifact → index → resolution.

use route_list::parser::{parse_files, parse_str};
use route_list::store::artifact::{load_records, records_to_string, save_records};
use route_list::store::RouteTable;
use route_list::{ResolveError, RouteArgs, RouteIndex, RouteListConfig};

mod common;

#[test]
fn test_parse_app_source() {
    assert_eq!(parse_str(common::APP_SOURCE), common::app_routes());
}

#[test]
fn test_artifact_matches_expected_json() {
    let routes = parse_str(common::APP_SOURCE);
    assert_eq!(records_to_string(&routes, false).unwrap(), common::APP_ROUTES_JSON);
}

#[test]
fn test_round_trip_through_artifact() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let source = common::write(dir, "app.rb", common::APP_SOURCE);
    let artifact = dir.join("routes.json");

    let parsed = parse_files(&[source]).unwrap();
    save_records(&artifact, &parsed, true).unwrap();
    let loaded = load_records(&artifact).unwrap();

    let direct = RouteIndex::build(parsed);
    let reloaded = RouteIndex::build(loaded);
    assert_eq!(direct, reloaded);
    assert_eq!(reloaded.all(), common::app_routes().as_slice());
}

#[test]
fn test_multiple_inputs_are_concatenated_in_order() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let first = common::write(dir, "a.rb", "# route[a]: /a\n");
    let second = common::write(dir, "b.rb", "puts 1\n# route: POST /b\n");

    let routes = parse_files(&[first, second]).unwrap();
    let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/a", "/b"]);
}

#[test]
fn test_resolution_against_loaded_table() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    common::write(dir, "routes.json", common::APP_ROUTES_JSON);
    let config = RouteListConfig {
        root: Some(dir.to_path_buf()),
        ..Default::default()
    };
    let table = RouteTable::open(&config).unwrap();

    assert_eq!(table.all_routes(), common::app_routes());
    assert_eq!(table.resolve("bar", None).unwrap(), "/foo/bar");
    assert_eq!(table.resolve("quux", None).unwrap(), "/foo/baz/quux/:quux_id");

    let keyed = RouteArgs::keyed([("quux_id", 3)]);
    let positional = RouteArgs::positional([3]);
    assert_eq!(table.resolve("quux", Some(&keyed)).unwrap(), "/foo/baz/quux/3");
    assert_eq!(
        table.resolve("quux", Some(&keyed)),
        table.resolve("quux", Some(&positional))
    );

    assert!(matches!(table.resolve("missing", None), Err(ResolveError::UnknownRoute(_))));
    assert!(matches!(
        table.resolve("quux", Some(&RouteArgs::keyed(Vec::<(String, u32)>::new()))),
        Err(ResolveError::MissingPlaceholderValue { .. })
    ));
    assert!(matches!(
        table.resolve("quux", Some(&RouteArgs::positional(Vec::<u32>::new()))),
        Err(ResolveError::TooFewPlaceholderValues { .. })
    ));
    assert!(matches!(
        table.resolve("quux", Some(&RouteArgs::positional([3, 1]))),
        Err(ResolveError::TooManyPlaceholderValues { .. })
    ));
}

#[test]
fn test_root_option_selects_artifact() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    common::write(dir, "routes2.json", r#"[{"path":"/foo"}]"#);
    let config = RouteListConfig {
        file: "routes2.json".into(),
        root: Some(dir.to_path_buf()),
        ..Default::default()
    };

    let table = RouteTable::open(&config).unwrap();
    assert_eq!(table.all_routes(), vec![route_list::RouteRecord::new("/foo")]);
}
