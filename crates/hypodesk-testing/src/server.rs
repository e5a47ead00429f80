//! The fake backend served over HTTP.
//!
//! Routes mirror the real services so the HTTP client and the CLI can be
//! exercised end to end against a `FakeBackend`.

use hypodesk_runtime::{AuthApi, Error, HypothesisApi};
use hypodesk_types::wire::{SaveTopicRequest, SignInRequest, UpsertRequest};
use hypodesk_types::{RecordId, Role};
use serde_json::{Value, json};
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::fake::FakeBackend;

/// One request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub api_name: Option<String>,
    pub password: Option<String>,
}

pub struct MockServer {
    base_url: String,
    backend: Arc<FakeBackend>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    pub fn start(backend: FakeBackend) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base_url = format!("http://{}", server.server_addr());
        let backend = Arc::new(backend);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let backend = Arc::clone(&backend);
            let requests = Arc::clone(&requests);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    match server.recv_timeout(Duration::from_millis(50)) {
                        Ok(Some(req)) => handle_request(req, &backend, &requests),
                        Ok(None) => continue,
                        Err(_) => break,
                    }
                }
            })
        };

        Self {
            base_url,
            backend,
            requests,
            stop,
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn backend(&self) -> &FakeBackend {
        &self.backend
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn split_url(url: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let pairs = query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (k, v) = p.split_once('=').unwrap_or((p, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    (path.to_string(), pairs)
}

fn header(req: &Request, name: &'static str) -> Option<String> {
    req.headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn handle_request(mut req: Request, backend: &FakeBackend, requests: &Mutex<Vec<Recorded>>) {
    let (path, query) = split_url(req.url());
    let method = req.method().clone();
    let file_name = header(&req, "X-File-Name");
    let password = header(&req, "password");

    requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: query.clone(),
        api_name: header(&req, "X-API-Name"),
        password: password.clone(),
    });

    let mut body = Vec::new();
    let _ = req.as_reader().read_to_end(&mut body);

    let result = route(backend, &method, &path, &query, &body, file_name, password);
    let (status, payload) = match result {
        Ok(value) => (200, value),
        Err(Error::Api { status, message }) => (status, json!({ "detail": message })),
        Err(other) => (400, json!({ "detail": other.to_string() })),
    };

    let response = Response::from_data(payload.to_string())
        .with_status_code(status)
        .with_header(Header::from_bytes("Content-Type", "application/json").expect("header"));
    let _ = req.respond(response);
}

fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> hypodesk_runtime::Result<T> {
    Ok(serde_json::from_slice(body)?)
}

fn to_value<T: serde::Serialize>(value: T) -> hypodesk_runtime::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn route(
    backend: &FakeBackend,
    method: &Method,
    path: &str,
    query: &[(String, String)],
    body: &[u8],
    file_name: Option<String>,
    password: Option<String>,
) -> hypodesk_runtime::Result<Value> {
    let id = || {
        query_value(query, "hypothesis_id")
            .map(RecordId::from)
            .ok_or_else(|| Error::Validation("hypothesis_id is required".to_string()))
    };

    match (method, path) {
        (Method::Get, "/get_topic") => Ok(json!({ "data": backend.list_topics()? })),
        (Method::Post, "/update_topic") => {
            let request: SaveTopicRequest = decode(body)?;
            to_value(backend.save_topic(&request)?)
        }
        (Method::Post, "/add-hypothesis") => {
            let request: UpsertRequest = decode(body)?;
            to_value(backend.upsert_hypothesis(&request)?)
        }
        (Method::Get, "/get-hypothesis") => to_value(backend.get_hypothesis(&id()?)?),
        (Method::Post, "/delete-hypothesis") => to_value(backend.delete_hypothesis(&id()?)?),
        (Method::Post, "/upload-hypothesis-file") => {
            let name = file_name.unwrap_or_else(|| "upload.bin".to_string());
            to_value(backend.upload_file(&id()?, &name, body.to_vec())?)
        }
        (Method::Post, "/users/sign-in") => {
            let request: SignInRequest = decode(body)?;
            to_value(backend.sign_in(&request, password.as_deref().unwrap_or(""))?)
        }
        (Method::Get, p) if p.starts_with("/users/") => {
            let user_id = p.trim_start_matches("/users/");
            let code = query_value(query, "aplctn_cd").unwrap_or_default();
            let role = query_value(query, "role")
                .and_then(|r| r.parse::<Role>().ok())
                .unwrap_or_default();
            to_value(backend.lookup_user(user_id, code, role)?)
        }
        _ => Err(Error::Api {
            status: 404,
            message: format!("no route for {} {}", method, path),
        }),
    }
}
