//! Background execution of backend calls.
//!
//! Each posted message runs as its own tokio task, so a refresh and a
//! submission can be in flight at the same time. Tasks only hold the shared
//! API client; results travel back over an unbounded channel and are applied
//! to state by the control loop alone.

use crate::api::ProductApi;
use crate::worker::{LoadTrigger, WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Dispatches worker messages onto the tokio runtime.
#[derive(Debug)]
pub struct ProductWorker<A> {
    api: Arc<A>,
    responses: UnboundedSender<WorkerResponse>,
}

impl<A> Clone for ProductWorker<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            responses: self.responses.clone(),
        }
    }
}

impl<A: ProductApi + 'static> ProductWorker<A> {
    /// Creates a worker that reports completions on `responses`.
    pub const fn new(api: Arc<A>, responses: UnboundedSender<WorkerResponse>) -> Self {
        Self { api, responses }
    }

    /// Spawns a task executing `message`.
    ///
    /// Must be called from within a tokio runtime. If the receiving side is
    /// gone by the time the call completes, the response is dropped.
    pub fn dispatch(&self, message: WorkerMessage) -> JoinHandle<()> {
        let span = tracing::debug_span!("worker_task", message = ?message);
        let api = Arc::clone(&self.api);
        let responses = self.responses.clone();

        tokio::spawn(
            async move {
                let response = Self::execute(api.as_ref(), message).await;
                if responses.send(response).is_err() {
                    tracing::debug!("response receiver closed, dropping worker response");
                }
            }
            .instrument(span),
        )
    }

    /// Performs the backend call for `message` and wraps its result.
    pub async fn execute(api: &A, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::LoadProducts { trigger } => {
                let result = api.list_products().await;
                tracing::debug!(trigger = trigger.as_str(), ok = result.is_ok(), "list request finished");
                WorkerResponse::ProductsLoaded { trigger, result }
            }
            WorkerMessage::CreateProduct { request } => {
                let result = api.create_product(&request).await;
                tracing::debug!(ok = result.is_ok(), "create request finished");
                WorkerResponse::ProductCreated { result }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::ScriptedApi;
    use crate::domain::{CreateProductRequest, Product, RequestError};
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn load_response_keeps_its_trigger() {
        let api = ScriptedApi::new().push_list(Ok(vec![Product::new(1, "Widget", 9.99)]));
        let response = ProductWorker::execute(&api, WorkerMessage::load_products(LoadTrigger::Refresh)).await;

        assert_eq!(
            response,
            WorkerResponse::ProductsLoaded {
                trigger: LoadTrigger::Refresh,
                result: Ok(vec![Product::new(1, "Widget", 9.99)]),
            }
        );
    }

    #[tokio::test]
    async fn dispatched_tasks_report_on_the_channel() {
        let api = Arc::new(
            ScriptedApi::new()
                .push_list(Err(RequestError::status(502)))
                .push_create(Ok(Product::new(2, "Gadget", 12.5))),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let worker = ProductWorker::new(Arc::clone(&api), tx);

        let request = CreateProductRequest { name: "Gadget".to_string(), price: 12.5 };
        let a = worker.dispatch(WorkerMessage::load_products(LoadTrigger::Initial));
        let b = worker.dispatch(WorkerMessage::create_product(request.clone()));
        a.await.unwrap();
        b.await.unwrap();

        let mut responses = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        responses.sort_by_key(|r| matches!(r, WorkerResponse::ProductCreated { .. }));

        assert_eq!(
            responses,
            vec![
                WorkerResponse::ProductsLoaded {
                    trigger: LoadTrigger::Initial,
                    result: Err(RequestError::status(502)),
                },
                WorkerResponse::ProductCreated { result: Ok(Product::new(2, "Gadget", 12.5)) },
            ]
        );
        assert_eq!(api.create_requests(), vec![request]);
    }
}
