//! Minimal HTTPS client for the text-generation call.
//!
//! One POST, `Connection: close`, body read to EOF. Response parsing
//! handles `Content-Length` and chunked transfer coding; anything the
//! parser cannot make sense of is a transport error, never a panic.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use rustls::ClientConfig;
use rustls::pki_types::ServerName;

use matcha_types::error::{MatchaError, Result};

/// Maximum response size (2 MB).
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Socket read timeout.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// A parsed `https://` URL (host, port, path + query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpsUrl {
    pub host: String,
    pub port: u16,
    pub path_and_query: String,
}

impl HttpsUrl {
    /// Parse an absolute `https://` URL. Other schemes are rejected.
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("https://")
            .ok_or_else(|| MatchaError::Net(format!("not an https URL: {url}")))?;
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        if authority.is_empty() {
            return Err(MatchaError::Net(format!("empty host in URL: {url}")));
        }
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p
                    .parse::<u16>()
                    .map_err(|_| MatchaError::Net(format!("bad port in URL: {url}")))?;
                (h, port)
            },
            None => (authority, 443),
        };
        Ok(Self {
            host: host.to_string(),
            port,
            path_and_query: path.to_string(),
        })
    }
}

/// Status code and body of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as (lossy) UTF-8 text.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Shared TLS client configuration trusting Mozilla's root CA bundle.
pub fn tls_config() -> Arc<ClientConfig> {
    let root_store =
        rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    Arc::new(
        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth(),
    )
}

/// Serialize a POST request with a JSON body.
pub fn build_post(url: &HttpsUrl, body: &str) -> String {
    format!(
        "POST {} HTTP/1.1\r\n\
         Host: {}\r\n\
         User-Agent: matcha-os/0.1\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        url.path_and_query,
        url.host,
        body.len(),
        body,
    )
}

/// Perform a blocking HTTPS POST with a JSON body.
pub fn post_json(tls: &Arc<ClientConfig>, url: &HttpsUrl, body: &str) -> Result<HttpResponse> {
    let stream = tcp_connect(&url.host, url.port)?;

    let sni = ServerName::try_from(url.host.clone())
        .map_err(|e| MatchaError::Net(format!("invalid server name: {e}")))?;
    let conn = rustls::ClientConnection::new(Arc::clone(tls), sni)
        .map_err(|e| MatchaError::Net(format!("TLS init: {e}")))?;
    let mut tls_stream = rustls::StreamOwned::new(conn, stream);

    tls_stream
        .write_all(build_post(url, body).as_bytes())
        .map_err(|e| MatchaError::Net(format!("send: {e}")))?;

    // Read until EOF. Servers that skip close_notify surface as
    // UnexpectedEof, which is fine once headers and body are in.
    let mut raw = Vec::with_capacity(8192);
    let mut chunk = [0u8; 8192];
    loop {
        match tls_stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if raw.len() + n > MAX_BODY_SIZE {
                    return Err(MatchaError::Net("response too large".into()));
                }
                raw.extend_from_slice(&chunk[..n]);
            },
            Err(ref e)
                if e.kind() == std::io::ErrorKind::UnexpectedEof
                    || e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                break;
            },
            Err(e) => return Err(MatchaError::Net(format!("read: {e}"))),
        }
    }

    parse_response(&raw)
}

/// Connect TCP with timeouts applied.
fn tcp_connect(host: &str, port: u16) -> Result<TcpStream> {
    let addrs: Vec<_> = (host, port)
        .to_socket_addrs()
        .map_err(|e| MatchaError::Net(format!("resolve {host}: {e}")))?
        .collect();
    let addr = addrs
        .first()
        .ok_or_else(|| MatchaError::Net(format!("no address for {host}")))?;
    let stream = TcpStream::connect_timeout(addr, CONNECT_TIMEOUT)
        .map_err(|e| MatchaError::Net(format!("connect {host}:{port}: {e}")))?;
    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .map_err(|e| MatchaError::Net(format!("set timeout: {e}")))?;
    Ok(stream)
}

/// Parse a raw HTTP/1.1 response into status + body.
pub fn parse_response(raw: &[u8]) -> Result<HttpResponse> {
    let header_end = find_header_end(raw)
        .ok_or_else(|| MatchaError::Net("truncated response: no header terminator".into()))?;
    let head = String::from_utf8_lossy(&raw[..header_end]);
    let body = &raw[header_end + 4..];

    let mut lines = head.lines();
    let status_line = lines
        .next()
        .ok_or_else(|| MatchaError::Net("empty response".into()))?;
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| MatchaError::Net(format!("bad status line: {status_line}")))?;

    let mut content_length: Option<usize> = None;
    let mut chunked = false;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();
        match name.as_str() {
            "content-length" => content_length = value.parse().ok(),
            "transfer-encoding" => chunked = value.to_ascii_lowercase().contains("chunked"),
            _ => {},
        }
    }

    let body = if chunked {
        decode_chunked(body)?
    } else if let Some(len) = content_length {
        body[..len.min(body.len())].to_vec()
    } else {
        body.to_vec()
    };

    Ok(HttpResponse { status, body })
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Decode a chunked transfer-coded body.
fn decode_chunked(mut data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    loop {
        let line_end = data
            .windows(2)
            .position(|w| w == b"\r\n")
            .ok_or_else(|| MatchaError::Net("truncated chunk size".into()))?;
        let size_text = String::from_utf8_lossy(&data[..line_end]);
        // Chunk extensions after ';' are ignored.
        let size_text = size_text.split(';').next().unwrap_or("").trim();
        let size = usize::from_str_radix(size_text, 16)
            .map_err(|_| MatchaError::Net(format!("bad chunk size: {size_text}")))?;
        data = &data[line_end + 2..];
        if size == 0 {
            return Ok(out);
        }
        if data.len() < size {
            return Err(MatchaError::Net("truncated chunk body".into()));
        }
        out.extend_from_slice(&data[..size]);
        data = &data[size..];
        // Skip the CRLF that closes the chunk (tolerate a truncated tail).
        if data.len() >= 2 && &data[..2] == b"\r\n" {
            data = &data[2..];
        }
    }
}
