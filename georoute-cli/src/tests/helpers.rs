//! Scratch workspaces and request fixtures for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory addressed by UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Write `value` as JSON to `name` inside the workspace.
    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, value.to_string().as_bytes());
        path
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    Workspace::new()
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Start at the origin, `b` far east, `a` close by, listed as `[b, a]`.
pub(super) fn one_way_request() -> Value {
    json!({
        "points": [
            { "id": "b", "name": "Far", "lat": 0.0, "lng": 10.0 },
            { "id": "a", "name": "Near", "lat": 0.0, "lng": 1.0 },
        ],
        "startLocation": { "id": "start", "name": "Start", "lat": 0.0, "lng": 0.0 },
        "routeMode": "OneWay",
    })
}

/// An export request for a two-stop loop in central Paris.
pub(super) fn export_request() -> Value {
    json!({
        "route": { "sequence": ["louvre", "orsay"], "routeMode": "Loop" },
        "points": [
            { "id": "louvre", "name": "Louvre", "lat": 48.8606, "lng": 2.3376 },
            { "id": "orsay", "name": "Orsay", "lat": 48.86, "lng": 2.3266 },
        ],
        "startLocation": { "id": "hotel", "name": "Hotel", "lat": 48.8566, "lng": 2.3522 },
        "metrics": { "totalDistanceKm": 4.2, "totalDurationMin": 55.0 },
    })
}
