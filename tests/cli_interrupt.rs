//! Ctrl+C while the network is stalled must end the run and remove the
//! working directory.

#![cfg(unix)]

mod common;

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use common::*;
use tempfile::TempDir;

fn write_config(dir: &Path, api_url: &str, work: &Path) -> std::path::PathBuf {
    let path = dir.join("faltex.toml");
    let content = format!(
        "[source]\napi_url = \"{}\"\n\n[output]\ndir = \"{}\"\nwork_parent = \"{}\"\n",
        api_url,
        dir.join("out").display(),
        work.display()
    );
    std::fs::write(&path, content).unwrap();
    path
}

fn spawn_faltex(config: &Path) -> Child {
    Command::new(env!("CARGO_BIN_EXE_faltex"))
        .arg("--config")
        .arg(config)
        .args(["--color", "never"])
        .env_remove("GITHUB_ACTIONS")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
}

fn wait_until(timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if done() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    done()
}

fn send_sigint(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());
}

fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    let _ = child.kill();
    let _ = child.wait();
    None
}

fn dir_is_empty(path: &Path) -> bool {
    std::fs::read_dir(path).map_or(true, |mut d| d.next().is_none())
}

#[test]
fn interrupt_while_release_request_hangs_exits_cleanly() {
    let server = ReleaseServer::start();
    server.route("/releases/latest", Route::hang());

    let dir = TempDir::new().unwrap();
    let work = dir.path().join("work");
    let config = write_config(dir.path(), &server.url("/releases/latest"), &work);
    let mut child = spawn_faltex(&config);

    assert!(wait_until(Duration::from_secs(10), || !server.hits().is_empty()));
    std::thread::sleep(Duration::from_millis(200));
    send_sigint(&child);

    let status = wait_for_exit(&mut child, Duration::from_secs(5))
        .expect("faltex kept running after Ctrl+C");
    assert_eq!(status.code(), Some(0));
    assert!(dir_is_empty(&work));
}

#[test]
fn interrupt_during_stalled_download_removes_workspace() {
    let server = ReleaseServer::start();
    let archive_path = "/download/fontawesome-free-6.5.0-desktop.zip";
    server.route(
        "/releases/latest",
        Route::json(release_payload(
            "6.5.0",
            &[(
                "fontawesome-free-6.5.0-desktop.zip",
                server.url(archive_path).as_str(),
            )],
        )),
    );
    server.route(archive_path, Route::stalled_zip(vec![0u8; 1024], 10_000_000));

    let dir = TempDir::new().unwrap();
    let work = dir.path().join("work");
    let config = write_config(dir.path(), &server.url("/releases/latest"), &work);
    let mut child = spawn_faltex(&config);

    assert!(wait_until(Duration::from_secs(10), || {
        server.hits().iter().any(|h| h == archive_path)
    }));
    assert!(wait_until(Duration::from_secs(5), || !dir_is_empty(&work)));
    std::thread::sleep(Duration::from_millis(200));
    send_sigint(&child);

    let status = wait_for_exit(&mut child, Duration::from_secs(5))
        .expect("faltex kept running after Ctrl+C");
    assert_eq!(status.code(), Some(0));
    assert!(dir_is_empty(&work), "working directory left behind");

    let mut stderr = String::new();
    std::io::Read::read_to_string(child.stderr.as_mut().unwrap(), &mut stderr).unwrap();
    assert!(stderr.contains("Interrupted"), "stderr was:\n{}", stderr);
}
