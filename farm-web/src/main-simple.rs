//! Development static file server
//!
//! Serves the compiled WASM app from the dist/ directory on port 8080,
//! falling back to index.html so client-side routes deep-link correctly.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    println!("Krishi Sahayak dev server running at http://{addr}");
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {e}"),
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

/// Map a request path to a file under dist/. Existing files are served
/// as-is; everything else falls back to index.html so /dashboard, /admin,
/// etc. resolve on refresh. Paths with `..` segments never leave dist/.
fn resolve_dist_path(path: &str) -> PathBuf {
    let index = PathBuf::from("dist/index.html");
    if path == "/" || path.is_empty() || path.split('/').any(|seg| seg == "..") {
        return index;
    }

    let mut dist_path = PathBuf::from("dist");
    dist_path.push(path.strip_prefix('/').unwrap_or(path));
    if dist_path.is_dir() || !dist_path.exists() {
        index
    } else {
        dist_path
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    let file_path = resolve_dist_path(path);

    let (body, content_type, status) = match fs::read(&file_path) {
        Ok(contents) => (contents, content_type_for(&file_path), "200 OK"),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            (
                b"<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
                "404 NOT FOUND",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {e}");
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {e}");
    }
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_unknown_routes_serve_index() {
        assert_eq!(resolve_dist_path("/"), PathBuf::from("dist/index.html"));
        assert_eq!(resolve_dist_path(""), PathBuf::from("dist/index.html"));
        assert_eq!(
            resolve_dist_path("/dashboard"),
            PathBuf::from("dist/index.html")
        );
    }

    #[test]
    fn parent_segments_cannot_escape_dist() {
        assert_eq!(
            resolve_dist_path("/../Cargo.toml"),
            PathBuf::from("dist/index.html")
        );
        assert_eq!(
            resolve_dist_path("/assets/../../src/main.rs"),
            PathBuf::from("dist/index.html")
        );
    }
}
