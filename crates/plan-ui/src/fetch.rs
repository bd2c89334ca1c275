//! Data request lifecycle shared by the dashboard cards.
//!
//! A card hands [`use_data_request`] a fetch function and a reactive key. The
//! hook issues one request per distinct key, aborts the request in flight when
//! the key changes or the owning view is disposed, and drops any result that
//! belongs to a retired request.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use plan_types::LoadingError;

/// Generation of a request issued by a [`RequestTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Keeps track of which request is the current one for a card.
#[derive(Debug)]
pub struct RequestTracker<K> {
    current: Option<K>,
    generation: u64,
    in_flight: Option<AbortHandle>,
    disposed: bool,
}

impl<K> Default for RequestTracker<K> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
            in_flight: None,
            disposed: false,
        }
    }
}

impl<K: Clone + PartialEq> RequestTracker<K> {
    /// Starts a request for `key`, aborting the one in flight.
    ///
    /// Returns `None` when `key` equals the key of the current request or the
    /// tracker has been disposed.
    pub fn begin(&mut self, key: &K) -> Option<Ticket> {
        if self.disposed || self.current.as_ref() == Some(key) {
            return None;
        }

        self.abort_in_flight();
        self.current = Some(key.clone());
        self.generation += 1;
        Some(Ticket(self.generation))
    }

    pub fn attach(&mut self, ticket: Ticket, handle: AbortHandle) {
        if self.is_current(ticket) {
            self.in_flight = Some(handle);
        } else {
            handle.abort();
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.disposed && ticket.0 == self.generation
    }

    /// Marks the request as settled. Returns whether its result may be applied.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.abort_in_flight();
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

pub type SharedTracker<K> = Arc<Mutex<RequestTracker<K>>>;

fn lock<K>(tracker: &SharedTracker<K>) -> MutexGuard<'_, RequestTracker<K>> {
    tracker.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Builds the request future for `key`, or `None` when `key` is already served.
///
/// `onSettled` runs only if the request is still current when it resolves.
pub fn prepare_request<K, T, F, Fut, S>(
    tracker: &SharedTracker<K>,
    key: K,
    fetchFn: &F,
    onSettled: S,
) -> Option<impl Future<Output = ()>>
where
    K: Clone + PartialEq,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, LoadingError>>,
    S: FnOnce(Result<T, LoadingError>),
{
    let ticket = lock(tracker).begin(&key)?;
    let (request, handle) = abortable(fetchFn(key));
    lock(tracker).attach(ticket, handle);

    let tracker = Arc::clone(tracker);
    Some(async move {
        let Ok(result) = request.await else {
            return;
        };
        let isCurrent = lock(&tracker).finish(ticket);
        if isCurrent {
            onSettled(result);
        }
    })
}

/// What a card should render for the current request state.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelState<T> {
    Failed(LoadingError),
    Loading,
    Loaded(T),
}

impl<T> PanelState<T> {
    /// An error always wins over data.
    pub fn select(data: Option<T>, loadingError: Option<LoadingError>) -> Self {
        match (loadingError, data) {
            (Some(error), _) => Self::Failed(error),
            (None, None) => Self::Loading,
            (None, Some(value)) => Self::Loaded(value),
        }
    }
}

pub struct DataRequest<T: Send + Sync + 'static> {
    pub data: ReadSignal<Option<T>>,
    pub loading_error: ReadSignal<Option<LoadingError>>,
}

impl<T: Send + Sync + 'static> Clone for DataRequest<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DataRequest<T> {}

impl<T: Clone + Send + Sync + 'static> DataRequest<T> {
    pub fn state(&self) -> PanelState<T> {
        PanelState::select(self.data.get(), self.loading_error.get())
    }
}

/// Runs `fetchFn` for the current value of `deps` and again whenever it changes.
///
/// Both signals are cleared when a new request starts, so callers show their
/// loading state until the new key resolves.
pub fn use_data_request<K, T, F, Fut>(fetchFn: F, deps: Signal<K>) -> DataRequest<T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, LoadingError>> + 'static,
{
    let (data, setData) = signal(Option::<T>::None);
    let (loadingError, setLoadingError) = signal(Option::<LoadingError>::None);
    let tracker: SharedTracker<K> = Arc::default();

    Effect::new({
        let tracker = Arc::clone(&tracker);
        move || {
            let key = deps.get();
            let request = prepare_request(&tracker, key, &fetchFn, move |result| match result {
                Ok(value) => setData.set(Some(value)),
                Err(e) => setLoadingError.set(Some(e)),
            });

            if let Some(request) = request {
                setData.set(None);
                setLoadingError.set(None);
                spawn_local(request);
            }
        }
    });

    on_cleanup(move || lock(&tracker).dispose());

    DataRequest {
        data,
        loading_error: loadingError,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::ready;

    use super::*;

    type Outcome = Result<u32, LoadingError>;

    #[test]
    fn error_view_wins_over_data() {
        let state = PanelState::select(Some(3), Some(LoadingError::new("boom")));
        assert_eq!(state, PanelState::Failed(LoadingError::new("boom")));
    }

    #[test]
    fn loading_until_data_arrives() {
        assert_eq!(PanelState::<u32>::select(None, None), PanelState::Loading);
        assert_eq!(PanelState::select(Some(7), None), PanelState::Loaded(7));
    }

    #[test]
    fn mounting_issues_exactly_one_fetch() {
        let tracker = SharedTracker::<String>::default();
        let calls = RefCell::new(Vec::new());
        let settled = RefCell::new(Vec::<Outcome>::new());
        let fetchFn = |key: String| {
            calls.borrow_mut().push(key);
            ready(Ok::<u32, LoadingError>(5))
        };

        let request = prepare_request(&tracker, "server-42".to_string(), &fetchFn, |r| {
            settled.borrow_mut().push(r)
        })
        .expect("first request is issued");
        assert!(prepare_request(&tracker, "server-42".to_string(), &fetchFn, |_| {}).is_none());

        block_on(request);

        assert_eq!(*calls.borrow(), vec!["server-42".to_string()]);
        assert_eq!(*settled.borrow(), vec![Ok(5)]);
        assert_eq!(lock(&tracker).generation(), 1);
    }

    #[test]
    fn key_change_refetches_once_and_drops_stale_result() {
        let tracker = SharedTracker::<String>::default();
        let (firstTx, firstRx) = oneshot::channel::<Outcome>();
        let (secondTx, secondRx) = oneshot::channel::<Outcome>();
        let pending = RefCell::new(vec![secondRx, firstRx]);
        let calls = RefCell::new(Vec::new());
        let settled = RefCell::new(Vec::<Outcome>::new());

        let fetchFn = |key: String| {
            calls.borrow_mut().push(key);
            let rx = pending.borrow_mut().pop().expect("one receiver per fetch");
            async move { rx.await.unwrap_or_else(|_| Err(LoadingError::new("dropped"))) }
        };

        let first = prepare_request(&tracker, "server-1".to_string(), &fetchFn, |r| {
            settled.borrow_mut().push(r)
        })
        .expect("first request");
        let second = prepare_request(&tracker, "server-2".to_string(), &fetchFn, |r| {
            settled.borrow_mut().push(r)
        })
        .expect("second request");

        firstTx.send(Ok(1)).unwrap();
        secondTx.send(Ok(2)).unwrap();
        block_on(first);
        block_on(second);

        assert_eq!(
            *calls.borrow(),
            vec!["server-1".to_string(), "server-2".to_string()]
        );
        assert_eq!(*settled.borrow(), vec![Ok(2)]);
    }

    #[test]
    fn disposed_tracker_ignores_results_and_new_keys() {
        let tracker = SharedTracker::<String>::default();
        let (tx, rx) = oneshot::channel::<Outcome>();
        let receiver = RefCell::new(Some(rx));
        let settled = RefCell::new(Vec::<Outcome>::new());
        let fetchFn = |_key: String| {
            let rx = receiver.borrow_mut().take().expect("single fetch");
            async move { rx.await.unwrap_or_else(|_| Err(LoadingError::new("dropped"))) }
        };

        let request = prepare_request(&tracker, "server-42".to_string(), &fetchFn, |r| {
            settled.borrow_mut().push(r)
        })
        .expect("request");

        lock(&tracker).dispose();
        tx.send(Ok(9)).unwrap();
        block_on(request);

        assert!(settled.borrow().is_empty());
        assert!(prepare_request(&tracker, "server-43".to_string(), &fetchFn, |_| {}).is_none());
    }

    #[test]
    fn rejection_surfaces_message_verbatim() {
        let tracker = SharedTracker::<String>::default();
        let settled = RefCell::new(Vec::<Outcome>::new());
        let fetchFn = |_key: String| ready(Err::<u32, _>(LoadingError::new("network timeout")));

        let request = prepare_request(&tracker, "server-42".to_string(), &fetchFn, |r| {
            settled.borrow_mut().push(r)
        })
        .expect("request");
        block_on(request);

        let outcome = settled.borrow_mut().pop().expect("settled");
        match PanelState::select(outcome.clone().ok(), outcome.err()) {
            PanelState::Failed(error) => assert_eq!(error.to_string(), "network timeout"),
            other => panic!("expected error view, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod hook_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;
    use futures::channel::oneshot;
    use futures::future::{ready, FutureExt, LocalBoxFuture};
    use tokio::task::LocalSet;

    use super::*;

    type Outcome = Result<u32, LoadingError>;

    async fn settle() {
        for _ in 0..8 {
            Executor::tick().await;
        }
    }

    #[tokio::test]
    async fn hook_fetches_once_per_key_and_cancels_on_cleanup() {
        let _ = Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                let calls = Rc::new(RefCell::new(Vec::<String>::new()));
                let (pendingTx, pendingRx) = oneshot::channel::<Outcome>();
                let pendingRx = Rc::new(RefCell::new(Some(pendingRx)));
                let key = RwSignal::new("server-42".to_string());

                let request = owner.with(|| {
                    let calls = Rc::clone(&calls);
                    let pendingRx = Rc::clone(&pendingRx);
                    let fetchFn = move |key: String| -> LocalBoxFuture<'static, Outcome> {
                        calls.borrow_mut().push(key.clone());
                        if key == "server-42" {
                            return ready(Ok(7)).boxed_local();
                        }
                        let rx = pendingRx.borrow_mut().take();
                        async move {
                            match rx {
                                Some(rx) => rx
                                    .await
                                    .unwrap_or_else(|_| Err(LoadingError::new("dropped"))),
                                None => Err(LoadingError::new("fetched twice")),
                            }
                        }
                        .boxed_local()
                    };
                    use_data_request(fetchFn, key.into())
                });

                settle().await;
                assert_eq!(*calls.borrow(), vec!["server-42"]);
                assert_eq!(request.state(), PanelState::Loaded(7));

                key.set("server-42".to_string());
                settle().await;
                assert_eq!(calls.borrow().len(), 1);

                key.set("server-43".to_string());
                settle().await;
                assert_eq!(*calls.borrow(), vec!["server-42", "server-43"]);
                assert_eq!(request.state(), PanelState::Loading);

                owner.cleanup();
                settle().await;
                assert!(pendingTx.is_canceled());
            })
            .await;
    }

    #[tokio::test]
    async fn hook_surfaces_rejection() {
        let _ = Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                let key = RwSignal::new("server-42".to_string());

                let request = owner.with(|| {
                    use_data_request(
                        |_key: String| ready(Err::<u32, _>(LoadingError::new("network timeout"))),
                        key.into(),
                    )
                });

                settle().await;
                assert_eq!(
                    request.state(),
                    PanelState::Failed(LoadingError::new("network timeout"))
                );
                owner.cleanup();
            })
            .await;
    }
}
