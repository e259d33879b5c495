//! Process-level behaviour of the `coi-serve` binary: startup line and exit
//! codes.

use std::io::{BufRead, BufReader};
use std::net::TcpListener;
use std::process::{Command, Stdio};

fn coi_serve() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coi-serve"));
    cmd.env_remove("RUST_LOG")
        .env_remove("COI_SERVE_PORT")
        .env_remove("COI_SERVE_BIND")
        .env_remove("COI_SERVE_DIR")
        .env_remove("COI_SERVE_NO_LISTING")
        .env_remove("COI_SERVE_GRACE");
    cmd
}

#[test]
fn occupied_port_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let output = coi_serve()
        .args(["-b", "127.0.0.1", &port.to_string(), "-d"])
        .arg(root.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_document_root_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();

    let output = coi_serve()
        .args(["-b", "127.0.0.1", "0", "-d"])
        .arg(root.path().join("missing"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("document root"), "{stderr}");
}

#[test]
fn announces_listening_url() {
    let root = tempfile::tempdir().unwrap();

    let mut child = coi_serve()
        .args(["-b", "127.0.0.1", "0", "-d"])
        .arg(root.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut line = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut line)
        .unwrap();

    child.kill().unwrap();
    child.wait().unwrap();

    assert!(line.starts_with("Serving "), "{line}");
    assert!(line.contains("with COOP/COEP headers at http://127.0.0.1:"), "{line}");
    assert!(!line.contains(":0/"), "{line}");
}

/// Start the binary on an ephemeral port, wait for the startup line, send
/// `signal` straight away and return the exit status.
#[cfg(unix)]
fn exit_status_after(signal: &str) -> std::process::ExitStatus {
    let root = tempfile::tempdir().unwrap();

    let mut child = coi_serve()
        .args(["-b", "127.0.0.1", "0", "--grace", "1", "-d"])
        .arg(root.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut line = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut line)
        .unwrap();
    assert!(line.starts_with("Serving "), "{line}");

    let sent = Command::new("kill")
        .args([signal, &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    child.wait().unwrap()
}

#[cfg(unix)]
#[test]
fn interrupt_right_after_startup_exits_zero() {
    let status = exit_status_after("-INT");
    assert!(status.success(), "{status:?}");
}

#[cfg(unix)]
#[test]
fn terminate_exits_zero() {
    let status = exit_status_after("-TERM");
    assert!(status.success(), "{status:?}");
}
