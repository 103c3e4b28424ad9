//! In-memory backend for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use soar_client::{Error, IntegrationInstances};
use soar_core::ManualActionRequest;

use crate::backend::SoarBackend;

type ErrorFn = fn() -> Error;

/// Scripted backend that records what it is asked to do.
#[derive(Debug)]
pub struct FakeBackend {
    scopes: Result<Vec<String>, ErrorFn>,
    instances: Result<Value, ErrorFn>,
    execute: Result<Value, ErrorFn>,
    pub lookups: Mutex<Vec<String>>,
    pub executed: Mutex<Vec<ManualActionRequest>>,
    pub calls: AtomicUsize,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            scopes: Ok(Vec::new()),
            instances: Ok(json!({"integration_instances": [{"identifier": "inst-1"}]})),
            execute: Ok(json!({"Status": "Completed"})),
            lookups: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeBackend {
    pub fn with_scopes<const N: usize>(scopes: [&str; N]) -> Self {
        Self {
            scopes: Ok(scopes.iter().map(|s| (*s).to_owned()).collect()),
            ..Self::default()
        }
    }

    pub fn failing_scopes(mut self, err: ErrorFn) -> Self {
        self.scopes = Err(err);
        self
    }

    pub fn instances(mut self, response: Value) -> Self {
        self.instances = Ok(response);
        self
    }

    pub fn failing_instances(mut self, err: ErrorFn) -> Self {
        self.instances = Err(err);
        self
    }

    pub fn execute_response(mut self, response: Value) -> Self {
        self.execute = Ok(response);
        self
    }

    pub fn failing_execute(mut self, err: ErrorFn) -> Self {
        self.execute = Err(err);
        self
    }

    /// Number of backend calls of any kind.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn executed(&self) -> Vec<ManualActionRequest> {
        self.executed.lock().unwrap().clone()
    }
}

impl SoarBackend for FakeBackend {
    async fn get_scopes(&self) -> Result<Vec<String>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.clone().map_err(|f| f())
    }

    async fn list_integration_instances(
        &self,
        integration: &str,
    ) -> Result<IntegrationInstances, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookups.lock().unwrap().push(integration.to_owned());
        let value = self.instances.clone().map_err(|f| f())?;
        serde_json::from_value(value).map_err(|e| Error::Deserialization(e.to_string()))
    }

    async fn execute_manual_action(&self, request: &ManualActionRequest) -> Result<Value, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.executed.lock().unwrap().push(request.clone());
        self.execute.clone().map_err(|f| f())
    }
}
