//! Test helpers for laying out order and catalog files in a temporary
//! workspace.

use camino::{Utf8Path, Utf8PathBuf};
use hubfreight_core::{Catalog, CatalogSpec};
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Write `catalog` to `path` in its JSON file format.
pub(super) fn write_catalog(path: &Utf8Path, catalog: &Catalog) {
    let payload =
        serde_json::to_string_pretty(&CatalogSpec::from(catalog)).expect("serialize catalog");
    write_utf8(path, payload.as_bytes());
}
