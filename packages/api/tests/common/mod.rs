// ABOUTME: Shared helpers for API integration tests
// ABOUTME: In-memory PersonStore and request/response utilities

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use roster_api::{create_router, AppState};
use roster_storage::{Person, PersonInput, PersonStore, StorageError, StorageResult};
use serde_json::Value;
use tower::ServiceExt;

/// Keeps records in a map and hands out ids the way a serial column would
#[derive(Default)]
pub struct MemoryPersonStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: i64,
    rows: BTreeMap<i64, Person>,
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn list_persons(&self) -> StorageResult<Vec<Person>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get_person(&self, id: i64) -> StorageResult<Person> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn create_person(&self, input: PersonInput) -> StorageResult<Person> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let person = Person {
            id: inner.next_id,
            name: input.name,
            sex: input.sex,
        };
        inner.rows.insert(person.id, person.clone());
        Ok(person)
    }

    async fn update_person(&self, id: i64, input: PersonInput) -> StorageResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(person) => {
                person.name = input.name;
                person.sex = input.sex;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_person(&self, id: i64) -> StorageResult<u64> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }
}

pub fn memory_app() -> Router {
    create_router(AppState::new(Arc::new(MemoryPersonStore::default())))
}

/// Send one request through the router and decode the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
