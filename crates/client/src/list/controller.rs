use shared_types::{ApiSettings, Filters, RegistryError, Resource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};

use super::coordinator::{FetchTicket, ListCoordinator, ListState, Resolution};
use super::source::{ListSource, ResourceSource};
use crate::http::RegistryClient;

/// Receives one call per failed list request.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, error: &RegistryError);
}

/// Forwards the user-facing message, e.g. to the toast queue of a screen.
impl Notifier for mpsc::UnboundedSender<String> {
    fn notify(&self, error: &RegistryError) {
        if self.send(error.user_message()).is_err() {
            tracing::debug!(error = %error, "Notification receiver dropped");
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Filters whose changes are debounced instead of fetched immediately.
    pub search_filters: Vec<String>,
    pub debounce: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            search_filters: Vec::new(),
            debounce: Duration::from_millis(400),
        }
    }
}

impl ListOptions {
    pub fn for_resource<R: Resource>(settings: &ApiSettings) -> Self {
        Self {
            search_filters: R::search_filters().into_iter().map(String::from).collect(),
            debounce: Duration::from_millis(settings.search_debounce_ms),
        }
    }
}

struct Shared<T, S> {
    source: S,
    notifier: Box<dyn Notifier>,
    options: ListOptions,
    coordinator: Mutex<ListCoordinator<T>>,
    snapshot: watch::Sender<ListState<T>>,
    search_generation: AtomicU64,
}

/// Async driver around a [`ListCoordinator`].
///
/// Clones share the same coordinator. The lock is never held across a
/// fetch, so navigation stays responsive while a request is in flight.
pub struct ListController<T, S> {
    shared: Arc<Shared<T, S>>,
}

impl<T, S> Clone for ListController<T, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Resource> ListController<R, ResourceSource<R>> {
    /// Controller for a registry screen, starting from the resource's
    /// default filters.
    pub fn for_resource(
        client: RegistryClient,
        settings: &ApiSettings,
        current_year: i32,
        notifier: impl Notifier,
    ) -> Self {
        Self::new(
            ResourceSource::new(client),
            R::default_filters(current_year),
            ListOptions::for_resource::<R>(settings),
            notifier,
        )
    }
}

impl<T, S> ListController<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSource<T>,
{
    pub fn new(source: S, filters: Filters, options: ListOptions, notifier: impl Notifier) -> Self {
        let coordinator = ListCoordinator::new(filters);
        let (snapshot, _) = watch::channel(coordinator.state().clone());
        Self {
            shared: Arc::new(Shared {
                source,
                notifier: Box::new(notifier),
                options,
                coordinator: Mutex::new(coordinator),
                snapshot,
                search_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.shared.snapshot.subscribe()
    }

    pub fn state(&self) -> ListState<T> {
        self.shared.snapshot.borrow().clone()
    }

    fn is_search_filter(&self, name: &str) -> bool {
        self.shared.options.search_filters.iter().any(|n| n == name)
    }

    fn publish(&self, state: &ListState<T>) {
        self.shared.snapshot.send_replace(state.clone());
    }

    async fn issue(&self, f: impl FnOnce(&mut ListCoordinator<T>) -> FetchTicket) -> FetchTicket {
        let mut coordinator = self.shared.coordinator.lock().await;
        let ticket = f(&mut *coordinator);
        self.publish(coordinator.state());
        ticket
    }

    async fn run(&self, ticket: FetchTicket) {
        let result = self.shared.source.fetch(&ticket.query).await;

        let resolution = {
            let mut coordinator = self.shared.coordinator.lock().await;
            let resolution = coordinator.resolve(&ticket, result);
            self.publish(coordinator.state());
            resolution
        };

        match resolution {
            Resolution::Applied => {
                tracing::debug!(seq = ticket.seq, page = ticket.query.page, "List page applied");
            }
            Resolution::Failed(e) => {
                tracing::warn!(seq = ticket.seq, kind = %e.kind(), error = %e, "List fetch failed");
                if e.is_user_visible() {
                    self.shared.notifier.notify(&e);
                }
            }
            Resolution::Discarded(e) => {
                tracing::debug!(error = %e, "Discarding stale list response");
            }
        }
    }

    /// First fetch of page 1 with the initial filters.
    pub async fn load(&self) {
        let ticket = self.issue(|c| c.start()).await;
        self.run(ticket).await;
    }

    /// Change one filter and fetch page 1.
    ///
    /// Search filters wait for the debounce window; a newer keystroke
    /// supersedes the pending one, so only the final value is fetched. A
    /// select change supersedes it as well and fetches with the typed text.
    pub async fn set_filter(&self, name: &str, value: impl ToString) {
        let value = value.to_string();
        if !self.is_search_filter(name) {
            self.shared.search_generation.fetch_add(1, Ordering::SeqCst);
            let ticket = self.issue(|c| c.set_filter(name, &value)).await;
            self.run(ticket).await;
            return;
        }

        let generation = self.shared.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared
            .coordinator
            .lock()
            .await
            .stage_filter(name, &value);

        tokio::time::sleep(self.shared.options.debounce).await;
        if self.shared.search_generation.load(Ordering::SeqCst) != generation {
            return;
        }

        let ticket = self.issue(|c| c.apply_staged()).await;
        self.run(ticket).await;
    }

    /// Fails with `InvalidRange` instead of fetching when `page` is out of range.
    pub async fn go_to_page(&self, page: i64) -> Result<(), RegistryError> {
        let ticket = {
            let mut coordinator = self.shared.coordinator.lock().await;
            let ticket = coordinator.go_to_page(page)?;
            self.publish(coordinator.state());
            ticket
        };
        self.run(ticket).await;
        Ok(())
    }

    /// Re-fetch the current page, e.g. after a record was deleted.
    pub async fn refresh(&self) {
        let ticket = self.issue(|c| c.refresh()).await;
        self.run(ticket).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListBody;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use shared_types::{ListQuery, Page};
    use std::sync::Mutex as StdMutex;

    /// Serves `last_page` pages of one item each, named after the query.
    struct FakeSource {
        last_page: i64,
        delays: Vec<(i64, Duration)>,
        fail: Arc<StdMutex<bool>>,
        queries: Arc<StdMutex<Vec<ListQuery>>>,
    }

    impl FakeSource {
        fn new(last_page: i64) -> Self {
            Self {
                last_page,
                delays: Vec::new(),
                fail: Arc::new(StdMutex::new(false)),
                queries: Arc::new(StdMutex::new(Vec::new())),
            }
        }

        fn delay(mut self, page: i64, delay: Duration) -> Self {
            self.delays.push((page, delay));
            self
        }
    }

    #[async_trait]
    impl ListSource<String> for FakeSource {
        async fn fetch(&self, query: &ListQuery) -> Result<Page<String>, RegistryError> {
            self.queries.lock().unwrap().push(query.clone());
            if let Some((_, d)) = self.delays.iter().find(|(p, _)| *p == query.page) {
                tokio::time::sleep(*d).await;
            }
            if *self.fail.lock().unwrap() {
                return Err(RegistryError::network("connection refused"));
            }
            let label = format!("{}|{}", query.page, query.filters.get("q").unwrap_or(""));
            Ok(Page::new(vec![label], query.page, self.last_page, self.last_page))
        }
    }

    fn search_options() -> ListOptions {
        ListOptions {
            search_filters: vec!["q".to_string()],
            debounce: Duration::from_millis(400),
        }
    }

    fn controller(
        source: FakeSource,
    ) -> (
        ListController<String, FakeSource>,
        mpsc::UnboundedReceiver<String>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ListController::new(source, Filters::new(), search_options(), tx),
            rx,
        )
    }

    #[tokio::test]
    async fn load_publishes_first_page() {
        let (c, _rx) = controller(FakeSource::new(3));
        let mut updates = c.subscribe();
        assert_eq!(c.state().body(), ListBody::Skeleton);

        c.load().await;

        assert!(updates.has_changed().unwrap());
        let state = updates.borrow_and_update().clone();
        assert_eq!(state.items, vec!["1|".to_string()]);
        assert_eq!(state.pagination.last_page, 3);
        assert!(!state.loading);
        assert!(state.has_loaded);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_older_page_does_not_overwrite_newer_page() {
        let source = FakeSource::new(5)
            .delay(2, Duration::from_millis(300))
            .delay(3, Duration::from_millis(10));
        let (c, _rx) = controller(source);
        c.load().await;

        let (two, three) = tokio::join!(c.go_to_page(2), c.go_to_page(3));
        two.unwrap();
        three.unwrap();

        let state = c.state();
        assert_eq!(state.items, vec!["3|".to_string()]);
        assert_eq!(state.pagination.current_page, 3);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn out_of_range_page_is_reported_to_caller() {
        let source = FakeSource::new(2);
        let queries = Arc::clone(&source.queries);
        let (c, _rx) = controller(source);
        c.load().await;

        let err = c.go_to_page(3).await.unwrap_err();
        assert_eq!(err, RegistryError::invalid_range(3, 2));
        assert_eq!(queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failure_notifies_once_and_keeps_previous_page() {
        let source = FakeSource::new(4);
        let fail = Arc::clone(&source.fail);
        let (c, mut rx) = controller(source);
        c.load().await;
        c.go_to_page(2).await.unwrap();
        let before = c.state();

        *fail.lock().unwrap() = true;
        c.refresh().await;

        let after = c.state();
        assert_eq!(after.items, before.items);
        assert_eq!(after.pagination, before.pagination);
        assert_eq!(
            rx.try_recv().unwrap(),
            "Gagal memuat data. Pastikan API terhubung."
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn filter_change_fetches_page_one() {
        let source = FakeSource::new(4);
        let queries = Arc::clone(&source.queries);
        let (c, _rx) = controller(source);
        c.load().await;
        c.go_to_page(4).await.unwrap();

        c.set_filter("tahun", 2024).await;

        let last = queries.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last.page, 1);
        assert_eq!(last.filters.get("tahun"), Some("2024"));
        assert_eq!(c.state().filters.get("tahun"), Some("2024"));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_fetch_once_with_final_value() {
        let source = FakeSource::new(1);
        let queries = Arc::clone(&source.queries);
        let (c, _rx) = controller(source);
        c.load().await;

        let mut pending = Vec::new();
        for text in ["s", "si", "sit", "siti", "siti a"] {
            let c = c.clone();
            pending.push(tokio::spawn(async move { c.set_filter("q", text).await }));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        for handle in pending {
            handle.await.unwrap();
        }

        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].page, 1);
        assert_eq!(queries[1].filters.get("q"), Some("siti a"));
        assert_eq!(c.state().items, vec!["1|siti a".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn select_change_during_debounce_fetches_once_with_typed_text() {
        let source = FakeSource::new(1);
        let queries = Arc::clone(&source.queries);
        let (c, _rx) = controller(source);
        c.load().await;

        let typing = {
            let c = c.clone();
            tokio::spawn(async move { c.set_filter("q", "siti").await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        c.set_filter("tahun", 2024).await;
        typing.await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_000)).await;

        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].filters.get("q"), Some("siti"));
        assert_eq!(queries[1].filters.get("tahun"), Some("2024"));
        assert_eq!(c.state().items, vec!["1|siti".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn keystrokes_separated_by_quiet_period_each_fetch() {
        let source = FakeSource::new(1);
        let queries = Arc::clone(&source.queries);
        let (c, _rx) = controller(source);
        c.load().await;

        c.set_filter("q", "ahmad").await;
        c.set_filter("q", "").await;

        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[1].filters.get("q"), Some("ahmad"));
        assert_eq!(queries[2].filters.get("q"), None);
    }
}
