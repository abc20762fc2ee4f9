//! Minimal HTTP/1.1 server for end-to-end pin tests.
//!
//! Serves a fixed map of path -> document (the archive index page and a
//! SHA256SUMS manifest); unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread serving `documents`. Returns the
/// base URL without a trailing slash (e.g. "http://127.0.0.1:12345"). The
/// server runs until the process exits.
pub fn serve(documents: HashMap<String, String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let documents = Arc::new(documents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let documents = Arc::clone(&documents);
            thread::spawn(move || handle(stream, &documents));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, documents: &HashMap<String, String>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };

    let response = match documents.get(path) {
        Some(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        None => {
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        }
    };
    let _ = stream.write_all(response.as_bytes());
}

/// Extracts the request target from "GET <path> HTTP/1.1".
fn request_path(request: &str) -> Option<&str> {
    let first_line = request.lines().next()?;
    let mut fields = first_line.split_whitespace();
    let method = fields.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    fields.next()
}
