//! Forecast-aware read path for events.
//!
//! `get_event_by_id` goes cache, then store, then provider:
//!
//! ```text
//! cache hit, forecast fresh       -> return cached event
//! cache hit, forecast expired     -> invalidate, fall through to store
//! store miss                      -> NotFound
//! store hit, forecast fresh       -> cache, return
//! store hit, stale, within window -> fetch, save, cache if fresh, return
//! store hit, stale, outside window-> return as stored
//! ```
//!
//! There is no single-flight: concurrent reads of the same stale event may
//! each call the provider, and the last save wins.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use eventcast_core::cache::{deserialize_event, event_key, serialize_event, Cache};
use eventcast_core::event::{validate_new_event, Event, EventId, NewEvent};
use eventcast_core::forecast::{forecast_status, plan_read, ForecastProvider, ReadPlan};
use eventcast_core::storage::{EventRepository, Page, PageRequest, RepositoryError};
use eventcast_core::time::Clock;

use super::ForecastServiceError;

type Result<T> = std::result::Result<T, ForecastServiceError>;

/// Orchestrates the event store, the forecast cache and the provider.
#[derive(Clone)]
pub struct ForecastService {
    repository: Arc<dyn EventRepository>,
    cache: Arc<dyn Cache>,
    provider: Arc<dyn ForecastProvider>,
    clock: Arc<dyn Clock>,
    cache_ttl: Duration,
}

impl ForecastService {
    pub fn new(
        repository: Arc<dyn EventRepository>,
        cache: Arc<dyn Cache>,
        provider: Arc<dyn ForecastProvider>,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            provider,
            clock,
            cache_ttl,
        }
    }

    /// Returns the event, refreshing its forecast first when it is stale and
    /// the event starts within the eligibility window.
    pub async fn get_event_by_id(&self, id: EventId) -> Result<Event> {
        let now = self.clock.now();

        if let Some(cached) = self.cached_event(id).await {
            if !self.check_expired(&cached, now).await {
                tracing::debug!(event_id = id, "Serving event from cache");
                return Ok(cached);
            }
            tracing::debug!(event_id = id, "Cached forecast is stale");
        }

        let Some(loaded) = self.repository.get_event(id).await? else {
            tracing::debug!(event_id = id, "Event not found");
            return Err(ForecastServiceError::NotFound { id });
        };

        match plan_read(&loaded, now) {
            ReadPlan::Serve => {
                tracing::debug!(event_id = id, "Stored forecast is fresh");
                self.cache_event(&loaded).await;
                Ok(loaded)
            }
            ReadPlan::Fetch => self.refresh_forecast(loaded, now).await,
            ReadPlan::Skip => {
                tracing::debug!(
                    event_id = id,
                    start = %loaded.start_date_time,
                    "Event outside forecast window"
                );
                Ok(loaded)
            }
        }
    }

    /// Returns true if the event's forecast is missing or expired at `now`.
    ///
    /// An expired forecast also evicts the event from the cache.
    pub async fn check_expired(&self, event: &Event, now: DateTime<Utc>) -> bool {
        let status = forecast_status(event, now);
        if status.requires_invalidation() {
            self.invalidate(event.id).await;
        }
        status.is_expired()
    }

    /// Validates and persists a new event. The forecast is fetched lazily on
    /// the first read.
    pub async fn create_event(&self, event: NewEvent) -> Result<Event> {
        validate_new_event(&event)?;
        let created = self.repository.create_event(&event).await?;
        tracing::info!(event_id = created.id, name = %created.name, "Event created");
        Ok(created)
    }

    /// Lists events straight from the store, without touching forecasts.
    pub async fn list_events(&self, page: u32, size: u32) -> Result<Page<Event>> {
        let request = PageRequest::new(page, size).map_err(RepositoryError::from)?;
        Ok(self.repository.list_events(request).await?)
    }

    async fn refresh_forecast(&self, mut event: Event, now: DateTime<Utc>) -> Result<Event> {
        let id = event.id;
        tracing::debug!(event_id = id, "Fetching forecast");

        let outcome = match self.provider.fetch_forecast(&event).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(event_id = id, error = %err, "Forecast provider failed");
                return Err(err.into());
            }
        };

        tracing::info!(event_id = id, outcome = outcome.kind(), "Forecast fetched");
        let snapshot = outcome.into_snapshot(&event);
        event.apply_forecast(snapshot);

        let saved = self.repository.save_event(&event).await?;
        // Carry-forwards of a missing or expired forecast would never be served
        // from the cache.
        if plan_read(&saved, now) == ReadPlan::Serve {
            self.cache_event(&saved).await;
        }
        Ok(saved)
    }

    async fn cached_event(&self, id: EventId) -> Option<Event> {
        let bytes = match self.cache.get(&event_key(id)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(event_id = id, "Cache miss for event");
                return None;
            }
            Err(err) => {
                tracing::warn!(event_id = id, error = %err, "Cache read failed");
                return None;
            }
        };

        match deserialize_event(&bytes) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(event_id = id, error = %err, "Cache entry deserialization failed");
                None
            }
        }
    }

    async fn cache_event(&self, event: &Event) {
        let bytes = match serialize_event(event) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(event_id = event.id, error = %err, "Failed to serialize event");
                return;
            }
        };

        if let Err(err) = self
            .cache
            .set(&event_key(event.id), &bytes, Some(self.cache_ttl))
            .await
        {
            tracing::warn!(event_id = event.id, error = %err, "Failed to cache event");
        }
    }

    async fn invalidate(&self, id: EventId) {
        tracing::debug!(event_id = id, "Invalidating cached event");
        if let Err(err) = self.cache.delete(&event_key(id)).await {
            tracing::warn!(event_id = id, error = %err, "Failed to invalidate cached event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use eventcast_core::cache::{CacheError, Result as CacheResult};
    use eventcast_core::event::EventError;
    use eventcast_core::forecast::{ForecastOutcome, ForecastSnapshot, ProviderError};
    use eventcast_core::storage::Result as RepoResult;
    use eventcast_core::time::FixedClock;

    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    const TTL: Duration = Duration::from_secs(3600);

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// Provider that replays scripted results and counts calls.
    #[derive(Default)]
    struct ScriptedProvider {
        responses: Mutex<VecDeque<std::result::Result<ForecastOutcome, ProviderError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn push(&self, response: std::result::Result<ForecastOutcome, ProviderError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ForecastProvider for ScriptedProvider {
        async fn fetch_forecast(
            &self,
            _event: &Event,
        ) -> std::result::Result<ForecastOutcome, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::Transport("no scripted response".into())))
        }
    }

    /// Repository that counts reads and writes.
    #[derive(Default)]
    struct CountingRepository {
        inner: InMemoryRepository,
        gets: AtomicUsize,
        saves: AtomicUsize,
    }

    impl CountingRepository {
        fn gets(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EventRepository for CountingRepository {
        async fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get_event(id).await
        }

        async fn create_event(&self, event: &NewEvent) -> RepoResult<Event> {
            self.inner.create_event(event).await
        }

        async fn save_event(&self, event: &Event) -> RepoResult<Event> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save_event(event).await
        }

        async fn list_events(&self, request: PageRequest) -> RepoResult<Page<Event>> {
            self.inner.list_events(request).await
        }

        async fn count_events(&self) -> RepoResult<u64> {
            self.inner.count_events().await
        }
    }

    struct FailingCache;

    #[async_trait]
    impl Cache for FailingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::OperationFailed("unavailable".into()))
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            Err(CacheError::OperationFailed("unavailable".into()))
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Err(CacheError::OperationFailed("unavailable".into()))
        }
    }

    struct Harness {
        service: ForecastService,
        repo: Arc<CountingRepository>,
        cache: Arc<MemoryCache>,
        provider: Arc<ScriptedProvider>,
        clock: FixedClock,
    }

    fn harness() -> Harness {
        let repo = Arc::new(CountingRepository::default());
        let cache = Arc::new(MemoryCache::new(100).unwrap());
        let provider = Arc::new(ScriptedProvider::default());
        let clock = FixedClock::new(now());
        let service = ForecastService::new(
            repo.clone(),
            cache.clone(),
            provider.clone(),
            Arc::new(clock.clone()),
            TTL,
        );
        Harness {
            service,
            repo,
            cache,
            provider,
            clock,
        }
    }

    fn snapshot(air_temperature: f64, expires_at: DateTime<Utc>) -> ForecastSnapshot {
        ForecastSnapshot {
            air_temperature: Some(air_temperature),
            wind_speed: Some(3.4),
            expires_at: Some(expires_at),
            last_modified_at: Some(expires_at - ChronoDuration::minutes(30)),
        }
    }

    async fn seed(
        h: &Harness,
        starts_in: ChronoDuration,
        forecast: Option<ForecastSnapshot>,
    ) -> Event {
        let start = now() + starts_in;
        let new_event = NewEvent::new("Concert", 59.9139, 10.7522, start, start + ChronoDuration::hours(2));
        let mut event = h.repo.inner.create_event(&new_event).await.unwrap();
        if let Some(snapshot) = forecast {
            event.apply_forecast(snapshot);
            h.repo.inner.save_event(&event).await.unwrap();
        }
        event
    }

    async fn cached(h: &Harness, id: EventId) -> Option<Event> {
        h.cache
            .get(&event_key(id))
            .await
            .unwrap()
            .map(|bytes| deserialize_event(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_imminent_event_fetches_then_serves_from_cache() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(2), None).await;
        let fresh = snapshot(12.5, now() + ChronoDuration::hours(1));
        h.provider.push(Ok(ForecastOutcome::Updated(fresh)));

        let first = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(first.air_temperature, Some(12.5));
        assert_eq!(first.wind_speed, Some(3.4));
        assert_eq!(first.forecast_expires_at, fresh.expires_at);
        assert_eq!(first.forecast_last_modified_at, fresh.last_modified_at);
        assert_eq!(h.provider.calls(), 1);
        assert_eq!(h.repo.saves(), 1);
        assert_eq!(h.repo.inner.get_event(event.id).await.unwrap(), Some(first.clone()));

        let second = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(second, first);
        assert_eq!(h.provider.calls(), 1);
        assert_eq!(h.repo.gets(), 1);
    }

    #[tokio::test]
    async fn test_fresh_event_round_trips_through_cache() {
        let h = harness();
        let event = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(8.0, now() + ChronoDuration::minutes(30))),
        )
        .await;

        let first = h.service.get_event_by_id(event.id).await.unwrap();
        let second = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(first, event);
        assert_eq!(second, event);
        assert_eq!(h.repo.gets(), 1);
        assert_eq!(h.provider.calls(), 0);
        assert_eq!(cached(&h, event.id).await, Some(event));
    }

    #[tokio::test]
    async fn test_cached_forecast_values_are_bit_identical() {
        let h = harness();
        let mut forecast = snapshot(18.926758544961622, now() + ChronoDuration::minutes(30));
        forecast.wind_speed = Some(12.965807465686595);
        let event = seed(&h, ChronoDuration::days(2), Some(forecast)).await;

        let from_store = h.service.get_event_by_id(event.id).await.unwrap();
        let from_cache = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(h.repo.gets(), 1);
        assert_eq!(from_cache, from_store);
        assert_eq!(
            from_cache.air_temperature.map(f64::to_bits),
            Some(18.926758544961622_f64.to_bits())
        );
        assert_eq!(
            from_cache.wind_speed.map(f64::to_bits),
            Some(12.965807465686595_f64.to_bits())
        );
    }

    #[tokio::test]
    async fn test_far_event_is_not_fetched() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(10), None).await;

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result, event);
        assert!(result.air_temperature.is_none());
        assert!(result.wind_speed.is_none());
        assert_eq!(h.provider.calls(), 0);
        assert_eq!(h.repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_past_event_is_not_fetched() {
        let h = harness();
        let event = seed(
            &h,
            -ChronoDuration::days(1),
            Some(snapshot(4.0, now() - ChronoDuration::days(2))),
        )
        .await;

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result, event);
        assert_eq!(h.provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found() {
        let h = harness();

        let result = h.service.get_event_by_id(999).await;

        assert!(matches!(
            result,
            Err(ForecastServiceError::NotFound { id: 999 })
        ));
        assert_eq!(h.provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_and_leaves_store_unchanged() {
        let h = harness();
        let event = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(5.0, now() - ChronoDuration::hours(1))),
        )
        .await;
        h.provider
            .push(Err(ProviderError::Transport("connection reset".into())));

        let result = h.service.get_event_by_id(event.id).await;

        assert!(matches!(
            result,
            Err(ForecastServiceError::Provider(ProviderError::Transport(_)))
        ));
        assert_eq!(h.repo.saves(), 0);
        assert_eq!(h.repo.inner.get_event(event.id).await.unwrap(), Some(event.clone()));
        assert!(cached(&h, event.id).await.is_none());
    }

    #[tokio::test]
    async fn test_provider_timeout_propagates() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(1), None).await;
        h.provider.push(Err(ProviderError::Timeout));

        let result = h.service.get_event_by_id(event.id).await;

        assert!(matches!(
            result,
            Err(ForecastServiceError::Provider(ProviderError::Timeout))
        ));
    }

    #[tokio::test]
    async fn test_not_modified_keeps_forecast_bit_identical() {
        let h = harness();
        let mut old = snapshot(7.25, now() - ChronoDuration::minutes(5));
        old.wind_speed = Some(0.1 + 0.2);
        let event = seed(&h, ChronoDuration::days(3), Some(old)).await;
        h.provider.push(Ok(ForecastOutcome::NotModified));

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(
            result.air_temperature.map(f64::to_bits),
            event.air_temperature.map(f64::to_bits)
        );
        assert_eq!(
            result.wind_speed.map(f64::to_bits),
            event.wind_speed.map(f64::to_bits)
        );
        assert_eq!(result.forecast_expires_at, event.forecast_expires_at);
        assert_eq!(result.forecast_last_modified_at, event.forecast_last_modified_at);
        assert_eq!(h.provider.calls(), 1);
        assert_eq!(h.repo.saves(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_response_carries_forecast_forward() {
        let h = harness();
        let event = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(6.0, now() - ChronoDuration::hours(2))),
        )
        .await;
        h.provider
            .push(Ok(ForecastOutcome::Unparseable("empty time series".into())));

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result, event);
        assert_eq!(h.repo.inner.get_event(event.id).await.unwrap(), Some(event));
    }

    #[tokio::test]
    async fn test_stale_carry_forward_is_not_cached() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(2), None).await;
        h.provider
            .push(Ok(ForecastOutcome::Unparseable("missing Expires".into())));
        h.provider.push(Ok(ForecastOutcome::Updated(snapshot(
            9.5,
            now() + ChronoDuration::hours(1),
        ))));

        let first = h.service.get_event_by_id(event.id).await.unwrap();

        assert!(first.air_temperature.is_none());
        assert!(cached(&h, event.id).await.is_none());

        let second = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(second.air_temperature, Some(9.5));
        assert_eq!(h.provider.calls(), 2);
        assert_eq!(cached(&h, event.id).await, Some(second));
    }

    #[tokio::test]
    async fn test_unexpected_status_on_new_event_keeps_fields_empty() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(2), None).await;
        h.provider.push(Ok(ForecastOutcome::UnexpectedStatus(500)));

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert!(result.air_temperature.is_none());
        assert!(result.forecast_expires_at.is_none());
        assert_eq!(h.provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_entry_is_refetched() {
        let h = harness();
        let event = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(8.0, now() + ChronoDuration::minutes(30))),
        )
        .await;
        h.service.get_event_by_id(event.id).await.unwrap();
        assert!(cached(&h, event.id).await.is_some());

        h.clock.advance(ChronoDuration::hours(1));
        let refreshed = snapshot(15.0, now() + ChronoDuration::hours(2));
        h.provider.push(Ok(ForecastOutcome::Updated(refreshed)));

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result.air_temperature, Some(15.0));
        assert_eq!(h.provider.calls(), 1);
        assert_eq!(h.repo.gets(), 2);
        assert_eq!(cached(&h, event.id).await, Some(result));
    }

    #[tokio::test]
    async fn test_check_expired_invalidates_only_expired_forecasts() {
        let h = harness();
        let expired = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(3.0, now() - ChronoDuration::minutes(1))),
        )
        .await;
        let missing = seed(&h, ChronoDuration::days(2), None).await;
        let fresh = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(3.0, now() + ChronoDuration::minutes(1))),
        )
        .await;
        for event in [&expired, &missing, &fresh] {
            h.cache
                .set(&event_key(event.id), &serialize_event(event).unwrap(), Some(TTL))
                .await
                .unwrap();
        }

        assert!(h.service.check_expired(&expired, now()).await);
        assert!(h.service.check_expired(&missing, now()).await);
        assert!(!h.service.check_expired(&fresh, now()).await);

        assert!(cached(&h, expired.id).await.is_none());
        assert!(cached(&h, missing.id).await.is_some());
        assert!(cached(&h, fresh.id).await.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_falls_back_to_store() {
        let h = harness();
        let event = seed(
            &h,
            ChronoDuration::days(2),
            Some(snapshot(8.0, now() + ChronoDuration::minutes(30))),
        )
        .await;
        h.cache
            .set(&event_key(event.id), b"{broken", Some(TTL))
            .await
            .unwrap();

        let result = h.service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result, event);
        assert_eq!(h.repo.gets(), 1);
        assert_eq!(cached(&h, event.id).await, Some(event));
    }

    #[tokio::test]
    async fn test_cache_failures_do_not_fail_reads() {
        let repo = Arc::new(CountingRepository::default());
        let provider = Arc::new(ScriptedProvider::default());
        let service = ForecastService::new(
            repo.clone(),
            Arc::new(FailingCache),
            provider.clone(),
            Arc::new(FixedClock::new(now())),
            TTL,
        );
        let start = now() + ChronoDuration::days(2);
        let event = repo
            .inner
            .create_event(&NewEvent::new("Concert", 59.9, 10.7, start, start))
            .await
            .unwrap();
        provider.push(Ok(ForecastOutcome::Updated(snapshot(
            11.0,
            now() + ChronoDuration::hours(1),
        ))));

        let result = service.get_event_by_id(event.id).await.unwrap();

        assert_eq!(result.air_temperature, Some(11.0));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_reads_of_stale_event_both_succeed() {
        let h = harness();
        let event = seed(&h, ChronoDuration::days(2), None).await;
        h.provider.push(Ok(ForecastOutcome::Updated(snapshot(
            10.0,
            now() + ChronoDuration::hours(1),
        ))));
        h.provider.push(Ok(ForecastOutcome::Updated(snapshot(
            10.0,
            now() + ChronoDuration::hours(1),
        ))));

        let (a, b) = tokio::join!(
            h.service.get_event_by_id(event.id),
            h.service.get_event_by_id(event.id)
        );

        assert_eq!(a.unwrap().air_temperature, Some(10.0));
        assert_eq!(b.unwrap().air_temperature, Some(10.0));
        assert!((1..=2).contains(&h.provider.calls()));
    }

    #[tokio::test]
    async fn test_create_event_validates_and_skips_cache() {
        let h = harness();
        let start = now() + ChronoDuration::days(1);

        let invalid = h
            .service
            .create_event(NewEvent::new("  ", 59.9, 10.7, start, start))
            .await;
        assert!(matches!(
            invalid,
            Err(ForecastServiceError::Validation(EventError::EmptyName))
        ));

        let created = h
            .service
            .create_event(NewEvent::new("Concert", 59.912_345_6, 10.7, start, start))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.latitude, 59.9123);
        assert!(created.forecast_expires_at.is_none());
        assert!(h.cache.is_empty().await);
        assert_eq!(h.provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_list_events() {
        let h = harness();
        for _ in 0..3 {
            seed(&h, ChronoDuration::days(2), None).await;
        }

        let page = h.service.list_events(0, 2).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 3);
        assert_eq!(h.provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_list_events_rejects_zero_size() {
        let h = harness();

        let result = h.service.list_events(0, 0).await;

        assert!(matches!(
            result,
            Err(ForecastServiceError::Repository(RepositoryError::InvalidData(_)))
        ));
    }
}
