//! Runs the compiled binary and talks to it over a real socket.
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const BIN: &str = env!("CARGO_BIN_EXE_saas-api");

struct Server {
    child: Child,
    port: u16,
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn command() -> Command {
    let mut cmd = Command::new(BIN);
    cmd.current_dir(std::env::temp_dir())
        .env("APP_ENV", "production")
        .env("RUST_LOG", "warn")
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn spawn(version: &str) -> Server {
    let port = free_port();
    let child = command()
        .env("PORT", port.to_string())
        .env("APP_VERSION", version)
        .spawn()
        .unwrap();
    let server = Server { child, port };

    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(Instant::now() < deadline, "server never started listening");
        thread::sleep(Duration::from_millis(50));
    }
    server
}

fn get(port: u16, path: &str) -> (String, String) {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    write!(
        stream,
        "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
    )
    .unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status_line = head.lines().next().unwrap().to_string();
    (status_line, body.to_string())
}

#[test]
fn non_numeric_port_fails_startup() {
    let status = command()
        .env("PORT", "not-a-port")
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn serves_all_routes_over_http() {
    let server = spawn("2.3.1");

    let (status, body) = get(server.port, "/");
    assert_eq!(status, "HTTP/1.1 200 OK");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "message": "SaaS Platform v2 - API is Running",
            "version": "2.3.1",
        })
    );

    let (status, body) = get(server.port, "/health");
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, r#"{"status":"healthy"}"#);

    let (status, body) = get(server.port, "/config");
    assert_eq!(status, "HTTP/1.1 200 OK");
    let env: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();
    assert_eq!(env["APP_VERSION"], "2.3.1");
    assert_eq!(env["PORT"], server.port.to_string());

    let (status, _) = get(server.port, "/nope");
    assert_eq!(status, "HTTP/1.1 404 Not Found");
}

#[cfg(unix)]
#[test]
fn sigterm_stops_server_cleanly() {
    let mut server = spawn("1.0.0");
    // One served request means the accept loop (and its signal handlers) is up.
    let (status, _) = get(server.port, "/health");
    assert_eq!(status, "HTTP/1.1 200 OK");
    thread::sleep(Duration::from_millis(100));

    let killed = Command::new("kill")
        .args(["-TERM", &server.child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = server.child.try_wait().unwrap() {
            break status;
        }
        assert!(Instant::now() < deadline, "server ignored SIGTERM");
        thread::sleep(Duration::from_millis(50));
    };
    assert!(status.success());
}
