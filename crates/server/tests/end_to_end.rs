use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use indoc::indoc;
use plain_http_server::{Config, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn temp_directory() -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let directory = std::env::temp_dir()
        .join(format!("plain-http-e2e-{}-{}", std::process::id(), COUNTER.fetch_add(1, Ordering::Relaxed)));
    std::fs::create_dir_all(&directory).unwrap();
    directory
}

async fn start_server(directory: PathBuf) -> SocketAddr {
    let config = Config { directory, ..Config::default() };
    let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = tcp_listener.local_addr().unwrap();

    tokio::spawn(Server::new(&config).serve(tcp_listener));
    address
}

/// Sends raw bytes, half-closes, and reads until the server closes the connection.
async fn exchange(address: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(address).await.unwrap();
    stream.write_all(request).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    match stream.read_to_end(&mut response).await {
        Ok(_) => {}
        // a server that drops the connection on a bad request may reset it
        Err(e) if e.kind() == io::ErrorKind::ConnectionReset => {}
        Err(e) => panic!("read response error: {e}"),
    }
    response
}

fn crlf(str: &str) -> Vec<u8> {
    str.replace('\n', "\r\n").into_bytes()
}

#[tokio::test]
async fn root() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[tokio::test]
async fn echo() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"GET /echo/hello HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello");

    let response = exchange(address, b"GET /echo/ HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn user_agent() {
    let address = start_server(temp_directory()).await;

    let request = crlf(indoc! {r##"
        GET /user-agent HTTP/1.1
        Host: localhost:4221
        User-Agent: test-agent

        "##});

    let response = exchange(address, &request).await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 10\r\n\r\ntest-agent");
}

#[tokio::test]
async fn non_ascii_bytes_are_reflected_verbatim() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"GET /echo/caf\xc3\xa9 HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\ncaf\xc3\xa9");

    let response = exchange(address, b"GET /user-agent HTTP/1.1\r\nUser-Agent: ag\xe9nt\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nag\xe9nt");
}

#[tokio::test]
async fn not_found() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"GET /nonexistent HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn post_then_get_file() {
    let directory = temp_directory();
    let address = start_server(directory.clone()).await;

    let request = crlf(indoc! {r##"
        POST /files/sample.txt HTTP/1.1
        Content-Length: 3

        abc"##});

    let response = exchange(address, &request).await;
    assert_eq!(response, b"HTTP/1.1 201 Created\r\n\r\n");
    assert_eq!(std::fs::read(directory.join("sample.txt")).unwrap(), b"abc");

    let response = exchange(address, b"GET /files/sample.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 3\r\n\r\nabc");
}

#[tokio::test]
async fn binary_body_is_written_verbatim() {
    let directory = temp_directory();
    let address = start_server(directory.clone()).await;

    let body = b"\x00\r\n\xff\xfe\r\n\r\n";
    let mut request = format!("POST /files/blob.bin HTTP/1.1\r\nContent-Length: {}\r\n\r\n", body.len()).into_bytes();
    request.extend_from_slice(body);

    let response = exchange(address, &request).await;
    assert_eq!(response, b"HTTP/1.1 201 Created\r\n\r\n");
    assert_eq!(std::fs::read(directory.join("blob.bin")).unwrap(), body);
}

#[tokio::test]
async fn missing_file() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"GET /files/missing.bin HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn unknown_method_closes_without_response() {
    let address = start_server(temp_directory()).await;

    let response = exchange(address, b"PATCH /x HTTP/1.1\r\n\r\n").await;
    assert!(response.is_empty());
}

#[tokio::test]
async fn short_body_closes_without_response() {
    let directory = temp_directory();
    let address = start_server(directory.clone()).await;

    let response = exchange(address, b"POST /files/short.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nabc").await;
    assert!(response.is_empty());
    assert!(!directory.join("short.txt").exists());
}

#[tokio::test]
async fn failed_connection_does_not_stop_the_server() {
    let address = start_server(temp_directory()).await;

    assert!(exchange(address, b"GET / HTTP/1.0\r\n\r\n").await.is_empty());

    let response = exchange(address, b"GET / HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[tokio::test]
async fn concurrent_connections() {
    let address = start_server(temp_directory()).await;

    let tasks = (0..8)
        .map(|i| tokio::spawn(async move { exchange(address, format!("GET /echo/{i} HTTP/1.1\r\n\r\n").as_bytes()).await }))
        .collect::<Vec<_>>();

    for (i, task) in tasks.into_iter().enumerate() {
        let response = task.await.unwrap();
        assert!(response.ends_with(format!("\r\n\r\n{i}").as_bytes()));
    }
}
