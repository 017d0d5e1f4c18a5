//! Scripted transport for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use oracle_core::{FetchError, FetchResult};

use crate::transport::{HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub struct Reply {
    delay: Option<Duration>,
    result: FetchResult<HttpResponse>,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            delay: None,
            result: Ok(HttpResponse::new(status, body)),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            delay: None,
            result: Err(FetchError::Transport(message.to_string())),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Answers each URL with a canned reply; unknown URLs fail like a DNS error
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, Reply>,
    completed: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, reply: Reply) -> Self {
        self.routes.insert(url.to_string(), reply);
        self
    }

    /// Requests that ran to completion (not cut off by a timeout)
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> FetchResult<HttpResponse> {
        let Some(reply) = self.routes.get(url) else {
            return Err(FetchError::Transport(format!("dns error: unknown host for {}", url)));
        };

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        reply.result.clone()
    }
}
