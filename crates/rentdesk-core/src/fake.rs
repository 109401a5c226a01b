//! Scripted in-memory transport for store tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::traits::Transport;

enum Reply {
    Body(Value),
    Status(u16),
}

/// Answers each `METHOD path` with whatever was scripted last for it.
/// Unscripted routes fail like an unreachable server.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<(String, Option<Value>)>>,
}

impl FakeTransport {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, method: &str, path: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), Reply::Body(body));
    }

    pub(crate) fn fail(&self, method: &str, path: &str, status: u16) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), Reply::Status(status));
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(route, _)| route.clone())
            .collect()
    }

    pub(crate) fn last_body(&self, method: &str, path: &str) -> Option<Value> {
        let route = format!("{method} {path}");
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| *r == route)
            .and_then(|(_, body)| body.clone())
    }

    fn call(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, TransportError> {
        let route = format!("{method} {path}");
        self.calls
            .lock()
            .unwrap()
            .push((route.clone(), body.cloned()));

        match self.routes.lock().unwrap().get(&route) {
            Some(Reply::Body(value)) => Ok(value.clone()),
            Some(Reply::Status(status)) => Err(TransportError::Status {
                status: *status,
                body: None,
            }),
            None => Err(TransportError::Connection {
                message: format!("no route for {route}"),
            }),
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.call("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.call("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.call("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), TransportError> {
        self.call("DELETE", path, None).map(|_| ())
    }
}
