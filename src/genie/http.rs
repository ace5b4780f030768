// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: ureq-backed AlertApi talking to the Opsgenie v2 alert endpoints
// role: integration/opsgenie-http
// inputs: GenieConfig; filter query strings; ListRequest pages
// outputs: Alert counts and decoded Alert pages
// side_effects: Network calls to the configured Opsgenie base URL
// invariants:
// - Every request carries `Authorization: GenieKey <key>`
// - Non-2xx responses become GenieError::Status with the response body
// errors: Returned, never swallowed; callers decide which stage failed
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{AlertApi, GenieConfig, GenieError, ListRequest};
use crate::model::Alert;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct CountEnvelope {
  data: CountData,
}

#[derive(Deserialize)]
struct CountData {
  count: u64,
}

#[derive(Deserialize)]
struct ListEnvelope {
  #[serde(default)]
  data: Vec<Alert>,
}

pub struct GenieHttpApi {
  agent: ureq::Agent,
  config: GenieConfig,
}

impl GenieHttpApi {
  pub fn new(config: GenieConfig) -> Self {
    let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
    Self { agent, config }
  }

  fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, GenieError> {
    let url = format!("{}{}", self.config.api_url(), path);
    log::debug!("GET {} {:?}", url, params);

    let mut req = self
      .agent
      .get(&url)
      .set("Accept", "application/json")
      .set("User-Agent", "genie-report")
      .set("Authorization", &format!("GenieKey {}", self.config.api_key()));

    for (k, v) in params {
      req = req.query(k, v);
    }

    match req.call() {
      Ok(resp) => resp
        .into_json::<T>()
        .map_err(|source| GenieError::Decode { url, source }),
      Err(ureq::Error::Status(code, resp)) => {
        let body = resp.into_string().unwrap_or_default();
        Err(GenieError::Status { code, body })
      }
      Err(ureq::Error::Transport(t)) => Err(GenieError::Transport {
        url,
        message: t.to_string(),
      }),
    }
  }
}

impl AlertApi for GenieHttpApi {
  fn count(&self, query: &str) -> Result<u64, GenieError> {
    let env: CountEnvelope = self.get_json("/v2/alerts/count", &[("query", query.to_string())])?;
    Ok(env.data.count)
  }

  fn list(&self, req: &ListRequest) -> Result<Vec<Alert>, GenieError> {
    let params = [
      ("query", req.query.clone()),
      ("offset", req.offset.to_string()),
      ("limit", req.limit.to_string()),
      ("sort", ListRequest::SORT_FIELD.to_string()),
      ("order", req.order.as_str().to_string()),
    ];
    let env: ListEnvelope = self.get_json("/v2/alerts", &params)?;
    Ok(env.data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::{Read, Write};
  use std::net::{TcpListener, TcpStream};
  use std::sync::mpsc;
  use std::thread;

  // Serves exactly one request and reports the raw request head back to the test.
  fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>, thread::JoinHandle<()>) {
    fn handle_client(mut stream: TcpStream, status: &str, body: &str, tx: mpsc::Sender<String>) {
      let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
      let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
      let mut head = Vec::new();
      let mut buf = [0u8; 1024];
      while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
          Ok(0) | Err(_) => break,
          Ok(n) => head.extend_from_slice(&buf[..n]),
        }
      }
      let _ = tx.send(String::from_utf8_lossy(&head).to_string());
      let resp = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
      );
      let _ = stream.write_all(resp.as_bytes());
    }

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
      if let Ok((stream, _)) = listener.accept() {
        handle_client(stream, status, body, tx);
      }
    });

    (format!("http://{}", addr), rx, handle)
  }

  fn api_for(url: &str) -> GenieHttpApi {
    GenieHttpApi::new(GenieConfig::new("test-key", url).unwrap())
  }

  #[test]
  fn count_reads_data_count_and_sends_key() {
    let (url, rx, handle) = serve_once("200 OK", r#"{"data":{"count":250},"took":0.01}"#);
    let n = api_for(&url).count("status: closed and createdAt>1").unwrap();
    handle.join().unwrap();

    assert_eq!(n, 250);
    let head = rx.recv().unwrap();
    assert!(head.starts_with("GET /v2/alerts/count?query="), "head was: {}", head);
    assert!(head.contains("GenieKey test-key"));
  }

  #[test]
  fn list_sends_paging_params_and_decodes_alerts() {
    let (url, rx, handle) = serve_once(
      "200 OK",
      r#"{"data":[{"createdAt":"2025-08-12T10:00:00Z","report":{"ackTime":1000,"closeTime":5000,"acknowledgedBy":"alice@example.com"}}]}"#,
    );
    let req = ListRequest::ascending("createdAt>1", 100, 100);
    let alerts = api_for(&url).list(&req).unwrap();
    handle.join().unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].report.close_time, 5_000);
    assert_eq!(alerts[0].responder(), Some("alice"));

    let head = rx.recv().unwrap();
    assert!(head.starts_with("GET /v2/alerts?"));
    assert!(head.contains("offset=100"));
    assert!(head.contains("limit=100"));
    assert!(head.contains("sort=createdAt"));
    assert!(head.contains("order=asc"));
  }

  #[test]
  fn http_error_status_carries_body() {
    let (url, _rx, handle) = serve_once("422 Unprocessable Entity", r#"{"message":"bad query"}"#);
    let err = api_for(&url).count("nonsense").unwrap_err();
    handle.join().unwrap();

    match err {
      GenieError::Status { code, body } => {
        assert_eq!(code, 422);
        assert!(body.contains("bad query"));
      }
      other => panic!("expected status error, got {:?}", other),
    }
  }

  #[test]
  fn malformed_body_is_decode_error() {
    let (url, _rx, handle) = serve_once("200 OK", r#"{"data":{}}"#);
    let err = api_for(&url).count("q").unwrap_err();
    handle.join().unwrap();
    assert!(matches!(err, GenieError::Decode { .. }));
  }

  #[test]
  fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = api_for(&format!("http://127.0.0.1:{}", port)).count("q").unwrap_err();
    assert!(matches!(err, GenieError::Transport { .. }));
  }
}
