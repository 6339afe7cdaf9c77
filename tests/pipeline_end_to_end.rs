//! End-to-end generate runs against a loopback release server.
//!
//! These go through the real HTTP adapters (`ureq`), the zip extractor and
//! the filesystem writers; only the network endpoint is local.

mod common;

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;
use faltex::config::SourceConfig;
use faltex::domain::ports::RecordingEventSink;
use faltex::presentation::create_generate_use_case;
use faltex::{ErrorKind, GenerateEvent, GenerateOptions, GenerationStamp};
use tempfile::TempDir;

use common::*;

fn stamp() -> GenerationStamp {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .and_then(|d| d.and_hms_opt(7, 8, 9))
        .map(GenerationStamp::at)
        .unwrap()
}

fn source_for(server: &ReleaseServer) -> SourceConfig {
    SourceConfig {
        api_url: server.url("/releases/latest"),
        ..SourceConfig::default()
    }
}

fn options(out: &Path, work: &Path) -> GenerateOptions {
    GenerateOptions::new(out)
        .with_stamp(stamp())
        .with_work_parent(work)
}

fn serve_release(server: &ReleaseServer, archive: Vec<u8>) {
    let archive_url = server.url("/download/fontawesome-free-6.5.0-desktop.zip");
    server.route(
        "/releases/latest",
        Route::json(release_payload(
            "6.5.0",
            &[
                ("fontawesome-free-6.5.0-web.zip", "http://unused.invalid/web.zip"),
                ("fontawesome-free-6.5.0-desktop.zip", archive_url.as_str()),
            ],
        )),
    );
    server.route(
        "/download/fontawesome-free-6.5.0-desktop.zip",
        Route::zip(archive),
    );
}

fn dir_is_empty(path: &Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn github_brand_icon_release_produces_package() {
    let server = ReleaseServer::start();
    let archive = github_release_zip();
    let archive_len = archive.len() as u64;
    serve_release(&server, archive);

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let sink = Arc::new(RecordingEventSink::new());
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let result = use_case
        .execute_with_events(&options(out.path(), work.path()), sink.clone())
        .unwrap();

    assert_eq!(result.release.version(), "6.5.0");
    assert_eq!(result.package_name, "fontawesome6");
    assert_eq!(result.icon_count, 1);
    assert_eq!(result.archive_bytes, archive_len);

    let font = out.path().join("fonts/FontAwesome6Brands-Regular.otf");
    assert_eq!(std::fs::read(font).unwrap(), b"brands-font");

    let sty = std::fs::read_to_string(out.path().join("fontawesome6.sty")).unwrap();
    assert!(sty.contains(r#"\csname fabicon@github\endcsname {\symbol{"F09B}}"#));
    assert!(sty.contains(r"\PackageInfo{fontawesome6}{Loaded 1 FontAwesome 6.5.0 icons}"));

    let makefile = std::fs::read_to_string(out.path().join("Makefile")).unwrap();
    assert!(makefile.contains("xelatex"));
    assert!(out.path().join("example.tex").is_file());
    assert!(out.path().join("README.md").is_file());

    assert_eq!(
        server.hits(),
        vec![
            "/releases/latest".to_string(),
            "/download/fontawesome-free-6.5.0-desktop.zip".to_string(),
        ]
    );

    let last_progress = sink
        .events()
        .into_iter()
        .filter_map(|e| match e {
            GenerateEvent::DownloadProgress(p) => Some(p),
            _ => None,
        })
        .last()
        .unwrap();
    assert_eq!(last_progress.downloaded, archive_len);
    assert_eq!(last_progress.total, Some(archive_len));

    assert!(dir_is_empty(work.path()));
}

#[test]
fn release_without_desktop_asset_never_downloads() {
    let server = ReleaseServer::start();
    server.route(
        "/releases/latest",
        Route::json(release_payload(
            "6.5.0",
            &[("fontawesome-free-6.5.0-web.zip", "http://unused.invalid/web.zip")],
        )),
    );

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let err = use_case
        .execute(&options(out.path(), work.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert_eq!(server.hits(), vec!["/releases/latest".to_string()]);
    assert!(dir_is_empty(out.path()));
    assert!(dir_is_empty(work.path()));
}

#[test]
fn archive_without_root_directory_is_rejected() {
    let server = ReleaseServer::start();
    serve_release(&server, build_zip(&[("README.txt", b"flat archive")]));

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let err = use_case
        .execute(&options(out.path(), work.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Archive);
    assert!(!out.path().join("fonts").exists());
    assert!(!out.path().join("fontawesome6.sty").exists());
    assert!(dir_is_empty(work.path()));
}

#[test]
fn http_error_status_is_a_network_error() {
    let server = ReleaseServer::start();
    server.route("/releases/latest", Route::status(403));

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let err = use_case
        .execute(&options(out.path(), work.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains("403"));
}

#[test]
fn archive_download_error_status_is_a_network_error() {
    let server = ReleaseServer::start();
    serve_release(&server, Vec::new());
    server.route(
        "/download/fontawesome-free-6.5.0-desktop.zip",
        Route::status(404),
    );

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let err = use_case
        .execute(&options(out.path(), work.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains("404"));
    assert!(server
        .hits()
        .iter()
        .any(|h| h == "/download/fontawesome-free-6.5.0-desktop.zip"));
    assert!(!out.path().join("fontawesome6.sty").exists());
    assert!(dir_is_empty(work.path()));
}

#[test]
fn missing_manifest_is_a_layout_error() {
    let server = ReleaseServer::start();
    let font = format!("{}/otfs/Font Awesome 6 Free-Solid-900.otf", RELEASE_ROOT);
    serve_release(&server, build_zip(&[(font.as_str(), b"solid")]));

    let out = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let use_case = create_generate_use_case(&source_for(&server), Arc::new(AtomicBool::new(true)));

    let err = use_case
        .execute(&options(out.path(), work.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    assert!(dir_is_empty(work.path()));
}
