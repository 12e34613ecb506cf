//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use route_list::RouteRecord;
use tempfile::TempDir;

/// Annotated application source mixing routes with unrelated code and comments.
pub const APP_SOURCE: &str = r#"class App < Roda
  plugin :route_list

  route do |r|
    # route: /foo
    r.is 'foo' do
      # route[bar]: /foo/bar
      r.get 'bar' do
        'bar'
      end

      # route: GET /foo/baz
      r.get 'baz' do
        # not a route: /nope
      end

      # route[quux]: GET|POST /foo/baz/quux/:quux_id
      r.is 'baz/quux', Integer do |quux_id|
      end
    end
  end
end
"#;

/// Compact artifact expected for [`APP_SOURCE`].
pub const APP_ROUTES_JSON: &str = r#"[{"path":"/foo"},{"path":"/foo/bar","name":"bar"},{"path":"/foo/baz","methods":["GET"]},{"path":"/foo/baz/quux/:quux_id","methods":["GET","POST"],"name":"quux"}]"#;

#[allow(dead_code)]
pub fn app_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("/foo"),
        RouteRecord::new("/foo/bar").with_name("bar"),
        RouteRecord::new("/foo/baz").with_methods(["GET"]),
        RouteRecord::new("/foo/baz/quux/:quux_id")
            .with_methods(["GET", "POST"])
            .with_name("quux"),
    ]
}

/// Fresh scratch directory, removed when the returned guard drops.
pub fn scratch_dir() -> TempDir {
    tempfile::Builder::new().prefix("route-list-it-").tempdir().unwrap()
}

#[allow(dead_code)]
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
