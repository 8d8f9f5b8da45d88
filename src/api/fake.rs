//! Scripted in-memory [`ProductApi`] used by unit tests.

use super::ProductApi;
use crate::domain::{CreateProductRequest, Product, RequestError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every create request.
///
/// An exhausted queue answers with a transport error so a test that makes an
/// unexpected call fails loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    list_responses: Mutex<VecDeque<Result<Vec<Product>, RequestError>>>,
    create_responses: Mutex<VecDeque<Result<Product, RequestError>>>,
    created: Mutex<Vec<CreateProductRequest>>,
    list_calls: Mutex<usize>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(self, response: Result<Vec<Product>, RequestError>) -> Self {
        self.list_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn push_create(self, response: Result<Product, RequestError>) -> Self {
        self.create_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn create_requests(&self) -> Vec<CreateProductRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl ProductApi for ScriptedApi {
    async fn list_products(&self) -> Result<Vec<Product>, RequestError> {
        *self.list_calls.lock().unwrap() += 1;
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::transport("no scripted list response")))
    }

    async fn create_product(&self, request: &CreateProductRequest) -> Result<Product, RequestError> {
        self.created.lock().unwrap().push(request.clone());
        self.create_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::transport("no scripted create response")))
    }
}
