//! Blocking runtime for the synchronous `rstest-bdd` browsing steps.
//!
//! Steps run on the test thread, so each scenario owns one Tokio runtime and
//! one stub joke service, created lazily by the first `Given` step.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Scenario-owned runtime that steps use to await fetches.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    /// Runs a fetch or wiremock call to completion on the scenario runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Returns the scenario's runtime and stub joke service, starting both on
/// first use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn scenario_runtime_and_service(
    runtime: &Slot<SharedRuntime>,
    service: &Slot<Rc<MockServer>>,
) -> Result<(SharedRuntime, Rc<MockServer>), io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }
    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("scenario runtime missing after start"))?;

    if service.with_ref(|_| ()).is_none() {
        service.set(Rc::new(shared_runtime.block_on(MockServer::start())));
    }
    let stub_service = service
        .get()
        .ok_or_else(|| io::Error::other("stub joke service missing after start"))?;

    Ok((shared_runtime, stub_service))
}
