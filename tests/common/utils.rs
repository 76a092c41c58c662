use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    base.join("tests").join("fixtures").join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Wrap a fragment in a minimal document.
pub fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head></head><body>{}</body></html>", body)
}
