#![allow(dead_code)]

use linkfetch::{Downloader, DownloaderBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Host name routed to the mock server by [`create_test_downloader`].
///
/// Loopback names are rejected by URL validation, so tests address the mock
/// server through this name instead.
pub const TEST_HOST: &str = "host.test";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a file with the given content, creating parent directories.
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that no file exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Asserts that a file has the expected contents
pub fn assert_file_contents(path: &Path, expected: &[u8]) {
    let contents = fs::read(path).expect("Failed to read file");
    assert_eq!(contents, expected, "File content mismatch at path: {:?}", path);
}

/// URL on [`TEST_HOST`] pointing at `route` on the mock server.
pub fn test_url(server: &MockServer, route: &str) -> String {
    format!("http://{}:{}{}", TEST_HOST, server.address().port(), route)
}

/// Downloader that resolves [`TEST_HOST`] to the mock server.
pub fn create_test_downloader(server: &MockServer) -> Downloader {
    create_test_downloader_builder(server)
        .build()
        .expect("Failed to build downloader")
}

pub fn create_test_downloader_builder(server: &MockServer) -> DownloaderBuilder {
    DownloaderBuilder::new().resolve(TEST_HOST, *server.address())
}

/// Serves `body` at `route`, expecting exactly `times` requests.
pub async fn mount_file(server: &MockServer, route: &str, body: &[u8], times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(times)
        .mount(server)
        .await;
}

/// Answers `route` with `status` and an empty body.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
