//! End-to-end test harness for the dials stack.
//!
//! Spins the real router on an ephemeral loopback port, backed either by a
//! redb store in a temporary directory or by an injected service stub, so
//! tests can drive the full client → HTTP → store path and the exact wire
//! contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::{net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use dials_core::{Dial, DialError, DialId, DialService, SystemClock};
use dials_server::router;
use dials_store::DialStore;

/// A running test server and the resources keeping it alive.
///
/// Dropping the handle aborts the server task; the backing temporary
/// directory (if any) is removed with it.
pub struct TestServer {
    /// Address the server is listening on.
    pub addr: SocketAddr,
    _dir: Option<tempfile::TempDir>,
    task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Base URL for requests against this server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start a server over a fresh redb store in a temporary directory.
pub async fn spawn_store_server() -> TestServer {
    let dir = tempfile::tempdir().expect("create tempdir");
    let store = DialStore::open(dir.path().join("dials.redb"), Arc::new(SystemClock::new()))
        .expect("open store");

    let mut server = spawn_service_server(Arc::new(store)).await;
    server._dir = Some(dir);
    server
}

/// Start a server over any dial service implementation.
pub async fn spawn_service_server(service: Arc<dyn DialService>) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    let app = router(service);
    let task = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestServer { addr, _dir: None, task }
}

/// Dial service whose every operation fails internally.
///
/// Used to verify that real causes never leak through a 500 response.
pub struct FailingDialService;

#[async_trait]
impl DialService for FailingDialService {
    async fn dial(&self, _id: &DialId) -> Result<Option<Dial>, DialError> {
        Err(DialError::internal("synthetic storage failure"))
    }

    async fn create_dial(&self, _dial: Dial) -> Result<Dial, DialError> {
        Err(DialError::internal("synthetic storage failure"))
    }

    async fn set_level(&self, _id: &DialId, _token: &str, _level: f64) -> Result<(), DialError> {
        Err(DialError::internal("synthetic storage failure"))
    }
}
