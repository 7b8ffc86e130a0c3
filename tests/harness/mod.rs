//! Test harness utilities for cihelper integration tests.
//!
//! Provides an isolated test environment and a minimal HTTP stub that plays
//! the GitHub secrets API.

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Output;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

/// An API URL nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Test environment with isolated temp directories.
pub struct TestEnv {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home (and config) directory
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
        }
    }

    /// A cihelper command with a clean environment.
    ///
    /// Token, API URL, proxy and log variables from the host are removed so
    /// tests never reach the real GitHub API.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cihelper").expect("failed to find cihelper binary");
        for var in [
            "GITHUB_TOKEN",
            "GITHUB_API_URL",
            "CIHELPER_LOG",
            "HTTP_PROXY",
            "HTTPS_PROXY",
            "ALL_PROXY",
            "http_proxy",
            "https_proxy",
            "all_proxy",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .current_dir(self.dir.path());
        cmd
    }

    /// Command with a token, pointed at `api_url`.
    pub fn authed(&self, api_url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--token", "ghp_test", "--api-url", api_url]);
        cmd
    }

    /// Write a file in the working directory and return its path.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// A request received by [`MockServer`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not json")
    }
}

/// HTTP/1.1 stub answering canned responses in order, one connection per
/// response.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for (status, body) in responses {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut reader = BufReader::new(stream);
                let request = read_request(&mut reader);
                recorded.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request<R: BufRead>(reader: &mut R) -> Recorded {
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(n, _)| n == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).unwrap();

    Recorded {
        method,
        path,
        headers,
        body: String::from_utf8(body).unwrap(),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Unknown",
    }
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn exit_code(output: &Output) -> i32 {
    output.status.code().expect("terminated by signal")
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        exit_code(output),
        code,
        "unexpected exit code\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}
