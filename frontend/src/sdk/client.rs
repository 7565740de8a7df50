use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use log::{debug, error, info};

use crate::error::SdkError;

use super::host::{ScriptHost, SdkBinding};
use super::retry::{poll_until, RetryPolicy};

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(SdkError),
}

struct Inner {
    state: LoadState,
    waiters: Vec<oneshot::Sender<Result<(), SdkError>>>,
}

/// Handle to one third-party SDK for the lifetime of the page.
///
/// The first [`SdkClient::ensure_loaded`] call starts the load: it either
/// adopts an SDK that is already on the page, waits on a tag someone else
/// injected, or injects the script itself. Every later call shares that one
/// outcome, so the script tag and `initialize` happen at most once. A failed
/// load stays failed; there is no automatic retry.
#[derive(Clone)]
pub struct SdkClient {
    host: Rc<dyn ScriptHost>,
    binding: Rc<dyn SdkBinding>,
    policy: RetryPolicy,
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for SdkClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SdkClient {
    pub fn new(host: Rc<dyn ScriptHost>, binding: Rc<dyn SdkBinding>, policy: RetryPolicy) -> Self {
        Self {
            host,
            binding,
            policy,
            inner: Rc::new(RefCell::new(Inner {
                state: LoadState::Idle,
                waiters: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.binding.name()
    }

    pub fn host(&self) -> Rc<dyn ScriptHost> {
        self.host.clone()
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().state == LoadState::Ready
    }

    pub fn ensure_loaded(&self) -> LocalBoxFuture<'static, Result<(), SdkError>> {
        let (tx, rx) = oneshot::channel();
        let should_start = {
            let mut inner = self.inner.borrow_mut();
            let current = inner.state.clone();
            let should_start = match current {
                LoadState::Ready => return future::ready(Ok(())).boxed_local(),
                LoadState::Failed(err) => return future::ready(Err(err)).boxed_local(),
                LoadState::Loading => false,
                LoadState::Idle => {
                    inner.state = LoadState::Loading;
                    true
                }
            };
            inner.waiters.push(tx);
            should_start
        };

        if should_start {
            self.start();
        }

        let sdk = self.name();
        rx.map(move |outcome| outcome.unwrap_or(Err(SdkError::Dropped { sdk })))
            .boxed_local()
    }

    fn start(&self) {
        let name = self.name();

        if self.binding.is_present() {
            debug!("{} already on the page, skipping script load", name);
            self.finish_init();
            return;
        }

        if self.host.has_script(&self.binding.script_selector()) {
            info!("{} script already loading, waiting for its global", name);
            self.wait_for_global();
            return;
        }

        if let Err(err) = self.binding.before_inject() {
            self.settle(Err(err));
            return;
        }

        let url = self.binding.script_url();
        let on_load = {
            let client = self.clone();
            Box::new(move || client.on_script_load())
        };
        let on_error = {
            let client = self.clone();
            let url = url.clone();
            Box::new(move || client.settle(Err(SdkError::ScriptLoad { url })))
        };

        debug!("Injecting {} from {}", name, url);
        if let Err(err) = self.host.inject_script(&url, on_load, on_error) {
            self.settle(Err(err));
        }
    }

    fn on_script_load(&self) {
        if self.binding.is_present() {
            self.finish_init();
        } else {
            // Some SDKs define their global a tick after the load event.
            self.wait_for_global();
        }
    }

    fn wait_for_global(&self) {
        let binding = self.binding.clone();
        let client = self.clone();
        let sdk = self.name();
        let attempts = self.policy.max_attempts;
        let waited_ms = self.policy.total_wait_ms();
        poll_until(
            self.host.clone(),
            self.policy,
            Rc::new(move || binding.is_present()),
            Box::new(move |present| {
                if present {
                    client.finish_init();
                } else {
                    debug!("{} global still missing after {} ms", sdk, waited_ms);
                    client.settle(Err(SdkError::Timeout { sdk, attempts }));
                }
            }),
        );
    }

    fn finish_init(&self) {
        let result = if self.binding.is_initialized() {
            Ok(())
        } else {
            self.binding.initialize()
        };
        self.settle(result);
    }

    fn settle(&self, result: Result<(), SdkError>) {
        let waiters = {
            let mut inner = self.inner.borrow_mut();
            inner.state = match &result {
                Ok(()) => LoadState::Ready,
                Err(err) => LoadState::Failed(err.clone()),
            };
            mem::take(&mut inner.waiters)
        };

        match &result {
            Ok(()) => info!("{} ready", self.name()),
            Err(err) => error!("{} unavailable: {}", self.name(), err),
        }

        for waiter in waiters {
            let _ = waiter.send(result.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::testing::{FakeGlobal, FakeHost, FakeSdk};
    use futures::executor::block_on;

    const URL: &str = "https://cdn.test/fake-sdk.js";

    fn policy() -> RetryPolicy {
        RetryPolicy {
            first_delay_ms: 100,
            factor: 2,
            max_delay_ms: 800,
            max_attempts: 4,
        }
    }

    fn client(host: &Rc<FakeHost>, global: &Rc<FakeGlobal>) -> SdkClient {
        SdkClient::new(host.clone(), FakeSdk::new(global.clone()), policy())
    }

    #[test]
    fn test_already_initialized_sdk_is_adopted() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        global.present.set(true);
        global.initialized.set(true);

        let sdk = client(&host, &global);
        assert_eq!(block_on(sdk.ensure_loaded()), Ok(()));
        assert!(sdk.is_ready());
        assert_eq!(global.init_calls.get(), 0);
        assert_eq!(host.total_scripts(), 0);
    }

    #[test]
    fn test_present_but_uninitialized_sdk_is_initialized_once() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        global.present.set(true);

        let sdk = client(&host, &global);
        assert_eq!(block_on(sdk.ensure_loaded()), Ok(()));
        assert_eq!(block_on(sdk.ensure_loaded()), Ok(()));
        assert_eq!(global.init_calls.get(), 1);
        assert_eq!(host.total_scripts(), 0);
    }

    #[test]
    fn test_concurrent_calls_share_one_script_tag() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let sdk = client(&host, &global);

        let first = sdk.ensure_loaded();
        let second = sdk.ensure_loaded();
        assert_eq!(host.script_count(URL), 1);
        assert!(!sdk.is_ready());

        global.present.set(true);
        host.fire_load(0);

        assert_eq!(block_on(first), Ok(()));
        assert_eq!(block_on(second), Ok(()));
        assert_eq!(global.init_calls.get(), 1);
        assert!(sdk.is_ready());
    }

    #[test]
    fn test_duplicate_mount_waits_on_existing_tag() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let first = client(&host, &global);
        let second = client(&host, &global);

        let first_done = first.ensure_loaded();
        let second_done = second.ensure_loaded();
        assert_eq!(host.script_count(URL), 1);
        assert_eq!(host.pending_timers(), 1);

        global.present.set(true);
        host.fire_load(0);
        host.run_all_timers();

        assert_eq!(block_on(first_done), Ok(()));
        assert_eq!(block_on(second_done), Ok(()));
        assert_eq!(host.script_count(URL), 1);
        assert_eq!(global.init_calls.get(), 1);
        assert!(second.is_ready());
    }

    #[test]
    fn test_script_error_is_cached_and_not_retried() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let sdk = client(&host, &global);

        let pending = sdk.ensure_loaded();
        host.fire_error(0);

        let expected = Err(SdkError::ScriptLoad { url: URL.to_string() });
        assert_eq!(block_on(pending), expected.clone());
        assert_eq!(block_on(sdk.ensure_loaded()), expected);
        assert_eq!(host.total_scripts(), 1);
        assert!(!sdk.is_ready());
    }

    #[test]
    fn test_foreign_tag_that_never_loads_times_out() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let stalled = client(&host, &global);
        let _never = stalled.ensure_loaded();

        let sdk = client(&host, &global);
        let pending = sdk.ensure_loaded();
        host.run_all_timers();

        assert_eq!(
            block_on(pending),
            Err(SdkError::Timeout {
                sdk: "fake-sdk",
                attempts: policy().max_attempts,
            })
        );
        assert_eq!(host.total_scripts(), 1);
    }

    #[test]
    fn test_global_defined_after_load_event() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let sdk = client(&host, &global);

        let pending = sdk.ensure_loaded();
        host.fire_load(0);
        assert!(!sdk.is_ready());

        global.present.set(true);
        host.run_all_timers();
        assert_eq!(block_on(pending), Ok(()));
    }

    #[test]
    fn test_init_failure_marks_client_failed() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        global.present.set(true);
        global.fail_init.set(true);

        let sdk = client(&host, &global);
        assert!(matches!(block_on(sdk.ensure_loaded()), Err(SdkError::Js { .. })));
        assert!(matches!(block_on(sdk.ensure_loaded()), Err(SdkError::Js { .. })));
        assert_eq!(global.init_calls.get(), 1);
    }

    #[test]
    fn test_clients_compare_by_identity() {
        let host = FakeHost::new();
        let global = Rc::new(FakeGlobal::default());
        let a = client(&host, &global);
        let b = client(&host, &global);
        assert!(a == a.clone());
        assert!(a != b);
    }
}
