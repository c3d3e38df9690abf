//! Minimal HTTP front end for the calculator.
//!
//! Two routes:
//! - `GET /` serves the static calculator page from the assets directory.
//! - `POST /calculate` takes `{"expression": "..."}` and answers
//!   `{"result": <number>}`, or `{"error": "..."}` with a 422 when the
//!   expression does not evaluate. A computed `0` is a real result and is
//!   returned as `0`.
//!
//! One thread per connection; the shared `Calculator` is read-only once the
//! server starts, so an `Arc` is all the synchronization needed.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tally_core::{Assoc, Calculator};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "tally-server")]
#[command(about = "Serve the calculator over HTTP", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Directory holding the static page
    #[arg(long, default_value = "server/assets")]
    assets: PathBuf,
}

#[derive(Deserialize)]
struct CalculateRequest {
    expression: String,
}

#[derive(Serialize)]
struct CalculateResponse {
    result: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn main() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut calc = Calculator::new();
    // The original deployment registered exponentiation explicitly before
    // serving; kept even though it matches the default descriptor.
    calc.add_operator('^', 3, Assoc::Right, |a, b| Ok(a.powf(b)));
    let calc = Arc::new(calc);

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!("server running at http://{addr}/");

    let assets = Arc::new(args.assets);
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let calc = Arc::clone(&calc);
                let assets = Arc::clone(&assets);
                thread::spawn(move || {
                    if let Err(e) = handle_client(stream, &calc, &assets) {
                        warn!("connection error: {e}");
                    }
                });
            }
            Err(e) => {
                warn!("error accepting connection: {e}");
            }
        }
    }
}

fn handle_client(
    mut stream: TcpStream,
    calc: &Calculator,
    assets: &Path,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return send_text(&mut stream, 400, "Bad Request", "Bad Request");
    };
    let method = method.to_string();
    // Ignore any query string when routing
    let path = path.split('?').next().unwrap_or(path).to_string();

    // Headers: only Content-Length matters to us
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    info!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => serve_index(&mut stream, assets),
        ("POST", "/calculate") => {
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body)?;
            handle_calculate(&mut stream, calc, &body)
        }
        _ => send_text(&mut stream, 404, "Not Found", "Not Found"),
    }
}

fn serve_index(stream: &mut TcpStream, assets: &Path) -> std::io::Result<()> {
    match fs::read_to_string(assets.join("index.html")) {
        Ok(content) => send_response(stream, 200, "OK", "text/html; charset=utf-8", &content),
        Err(e) => {
            error!("failed to read index.html: {e}");
            send_text(stream, 500, "Internal Server Error", "Internal Server Error")
        }
    }
}

fn handle_calculate(
    stream: &mut TcpStream,
    calc: &Calculator,
    body: &[u8],
) -> std::io::Result<()> {
    let request: CalculateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            let body = serde_json::to_string(&ErrorResponse {
                error: format!("invalid request: {e}"),
            })
            .unwrap_or_default();
            return send_response(stream, 400, "Bad Request", "application/json", &body);
        }
    };

    match calc.evaluate(&request.expression) {
        Ok(result) => {
            let body = serde_json::to_string(&CalculateResponse { result }).unwrap_or_default();
            send_response(stream, 200, "OK", "application/json", &body)
        }
        Err(e) => {
            let body = serde_json::to_string(&ErrorResponse {
                error: e.to_string(),
            })
            .unwrap_or_default();
            send_response(stream, 422, "Unprocessable Entity", "application/json", &body)
        }
    }
}

fn send_response(
    stream: &mut TcpStream,
    status_code: u16,
    status_text: &str,
    content_type: &str,
    body: &str,
) -> std::io::Result<()> {
    let header = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: {}\r\n\
         Content-Length: {}\r\n\
         \r\n",
        status_code,
        status_text,
        content_type,
        body.len()
    );
    stream.write_all(header.as_bytes())?;
    stream.write_all(body.as_bytes())?;
    stream.flush()
}

fn send_text(
    stream: &mut TcpStream,
    status_code: u16,
    status_text: &str,
    body: &str,
) -> std::io::Result<()> {
    send_response(stream, status_code, status_text, "text/plain; charset=utf-8", body)
}
