//! Common utilities for integration tests

use assert_cmd::Command;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Get the path to the `item-registry` binary
///
/// Prefers `CARGO_BIN_EXE_item-registry` (set by cargo for integration tests,
/// also with custom target directories) and falls back to `cargo_bin()`.
#[allow(deprecated)] // cargo_bin() is deprecated but needed for fallback
pub fn registry_binary() -> PathBuf {
    option_env!("CARGO_BIN_EXE_item-registry")
        .map(PathBuf::from)
        .unwrap_or_else(|| assert_cmd::cargo::cargo_bin("item-registry"))
}

/// Create a Command for `item-registry` isolated from the caller's environment
#[allow(dead_code)]
pub fn registry_command() -> Command {
    let mut cmd = Command::new(registry_binary());
    cmd.env_remove("PORT")
        .env_remove("HOST")
        .env_remove("INSTANCE_HOSTNAME")
        .env_remove("ITEM_REGISTRY_LOG_JSON")
        .env_remove("ITEM_REGISTRY_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Ask the OS for a port that is currently free
#[allow(dead_code)]
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Failed to find a free port")
}

/// A running `item-registry` process, killed on drop
#[allow(dead_code)]
pub struct TestServer {
    process: Child,
    port: u16,
}

#[allow(dead_code)]
impl TestServer {
    /// Start the binary on a free local port and wait until `/health` answers
    pub fn start(hostname: &str, extra_args: &[&str]) -> Self {
        let port = free_port();
        let process = std::process::Command::new(registry_binary())
            .env_remove("PORT")
            .env_remove("HOST")
            .env_remove("RUST_LOG")
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .args(["--hostname", hostname])
            .args(extra_args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start item-registry");

        let server = Self { process, port };
        server.wait_until_ready(Duration::from_secs(10));
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn wait_until_ready(&self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = reqwest::blocking::get(self.url("/health")) {
                if resp.status().is_success() {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(100));
        }
        panic!("item-registry did not become ready on port {}", self.port);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}
