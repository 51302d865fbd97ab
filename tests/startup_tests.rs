//! Tests for the hello-api binary's startup failures

use std::net::TcpListener;
use std::process::{Command, Output};

fn run_binary(envs: &[(&str, String)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello-api"))
        .envs(envs.iter().map(|(k, v)| (*k, v.as_str())))
        .env("RUST_LOG", "hello_api=info")
        .output()
        .unwrap()
}

#[test]
fn test_binary_exits_non_zero_when_port_is_taken() {
    // Hold the port for the whole run so the binary's bind must fail
    let occupied = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let output = run_binary(&[
        ("HELLO_API_HOST", "127.0.0.1".to_string()),
        ("HELLO_API_PORT", port.to_string()),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "stderr: {}", stderr);

    drop(occupied);
}

#[test]
fn test_binary_exits_non_zero_on_invalid_override() {
    let output = run_binary(&[("HELLO_API_PORT", "not-a-port".to_string())]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HELLO_API_PORT"), "stderr: {}", stderr);
}
