// manager.rs - Model Fallback Manager
// Tracks per-backend health (availability, quota cooldowns, consecutive
// errors) and routes each generation request to the best usable backend,
// retrying across the others until one succeeds or the attempt budget
// runs out.

use crate::backend::{BackendError, TextBackend};
use crate::config::{BackendSpec, FallbackSettings};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::sleep;

/// Terminal failures surfaced to the caller. Local recovery (cooldowns,
/// disable thresholds, retries) has already been applied by the time one
/// of these is returned.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no backends available, try again later (last error: {})", .last_error.as_deref().unwrap_or("unknown"))]
    NoBackendAvailable { last_error: Option<String> },

    #[error("all backends exhausted after {attempts} attempts (last error: {})", .last_error.as_deref().unwrap_or("unknown"))]
    Exhausted { attempts: usize, last_error: Option<String> },

    #[error("generation timed out after {attempts} attempts (last error: {})", .last_error.as_deref().unwrap_or("unknown"))]
    TimedOut { attempts: usize, last_error: Option<String> },
}

// Mutable health state for one backend. Priority is fixed at
// construction; everything else changes per call outcome.
#[derive(Debug, Clone)]
struct ModelState {
    priority: u32,
    available: bool,
    quota_remaining: bool,
    retry_after: Option<DateTime<Utc>>,
    error_count: u32,
    last_success: Option<DateTime<Utc>>,
}

impl ModelState {
    fn new(priority: u32) -> Self {
        Self {
            priority,
            available: true,
            quota_remaining: true,
            retry_after: None,
            error_count: 0,
            last_success: None,
        }
    }

    // A scheduled cooldown overrides the quota flag: once retry_after
    // passes, the quota window has rolled over and the backend is worth
    // trying again (the flag itself is cleared by the next success).
    fn is_usable(&self, now: DateTime<Utc>) -> bool {
        if !self.available {
            return false;
        }
        match self.retry_after {
            Some(t) => now >= t,
            None => self.quota_remaining,
        }
    }
}

/// Read-only health record for one backend, as reported by
/// [`FallbackManager::status`].
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub priority: u32,
    pub available: bool,
    pub quota_remaining: bool,
    pub error_count: u32,
    pub last_success: Option<DateTime<Utc>>,
    pub cooldown_remaining_secs: Option<i64>,
}

struct ManagerState {
    states: HashMap<String, ModelState>,
    // Last backend that produced a successful response; reporting only
    current: Option<String>,
}

/// Wraps a set of text-generation backends and picks the best usable one
/// for every request. Shared state lives behind a mutex that is never
/// held across an await: backend calls and retry pacing happen with the
/// lock released, so concurrent callers cannot deadlock or observe a
/// half-updated record.
pub struct FallbackManager {
    backends: HashMap<String, Arc<dyn TextBackend>>,
    state: Mutex<ManagerState>,
    settings: FallbackSettings,
}

impl FallbackManager {
    /// Build a manager from `(spec, backend)` pairs. The current-backend
    /// marker starts at the highest-priority name.
    pub fn new(
        backends: Vec<(BackendSpec, Arc<dyn TextBackend>)>,
        settings: FallbackSettings,
    ) -> Self {
        let mut backend_map: HashMap<String, Arc<dyn TextBackend>> = HashMap::new();
        let mut states = HashMap::new();
        let mut current: Option<(String, u32)> = None;

        for (spec, backend) in backends {
            if current.as_ref().map_or(true, |(_, p)| spec.priority < *p) {
                current = Some((spec.name.clone(), spec.priority));
            }
            states.insert(spec.name.clone(), ModelState::new(spec.priority));
            backend_map.insert(spec.name, backend);
        }

        Self {
            backends: backend_map,
            state: Mutex::new(ManagerState {
                states,
                current: current.map(|(name, _)| name),
            }),
            settings,
        }
    }

    // A poisoned lock only means another caller panicked mid-update of
    // plain flags and counters; the map itself is still coherent.
    fn lock_state(&self) -> MutexGuard<'_, ManagerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pick the best usable backend: enabled, quota remaining, cooldown
    /// elapsed; ordered by priority, then by most recent success. A
    /// backend that has never succeeded sorts after any backend with a
    /// recorded success at the same priority.
    pub fn select_backend(&self) -> Option<String> {
        let now = Utc::now();
        let state = self.lock_state();

        let mut candidates: Vec<(&String, &ModelState)> = state
            .states
            .iter()
            .filter(|(_, s)| s.is_usable(now))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by_key(|(_, s)| {
            (
                s.priority,
                s.last_success
                    .map_or(i64::MAX, |t| (now - t).num_milliseconds()),
            )
        });

        Some(candidates[0].0.clone())
    }

    /// Generate text for the prompt, retrying across backends up to
    /// `max_attempts` times. See [`generate_with_timeout`] for the
    /// deadline-bounded variant.
    ///
    /// [`generate_with_timeout`]: FallbackManager::generate_with_timeout
    pub async fn generate(
        &self,
        prompt: &str,
        max_attempts: usize,
    ) -> Result<String, GenerateError> {
        self.generate_with_timeout(prompt, max_attempts, None).await
    }

    /// Like [`generate`], but with an optional overall time budget. The
    /// in-flight backend call is cut off when the budget runs out and no
    /// further retries are made.
    ///
    /// [`generate`]: FallbackManager::generate
    pub async fn generate_with_timeout(
        &self,
        prompt: &str,
        max_attempts: usize,
        budget: Option<Duration>,
    ) -> Result<String, GenerateError> {
        let started = Instant::now();
        let mut last_error: Option<String> = None;
        let mut attempt = 0;

        while attempt < max_attempts {
            // No usable backend is a terminal short-circuit; it does not
            // consume an attempt and there is nothing to wait for.
            let name = match self.select_backend() {
                Some(name) => name,
                None => {
                    warn!("No usable backends left, giving up");
                    return Err(GenerateError::NoBackendAvailable { last_error });
                }
            };

            let backend = match self.backends.get(&name) {
                Some(backend) => Arc::clone(backend),
                None => return Err(GenerateError::NoBackendAvailable { last_error }),
            };

            info!(
                "Attempting generation with '{}' (attempt {}/{})",
                name,
                attempt + 1,
                max_attempts
            );

            let outcome = match budget {
                Some(total) => {
                    let remaining = match total.checked_sub(started.elapsed()) {
                        Some(remaining) if !remaining.is_zero() => remaining,
                        _ => {
                            return Err(GenerateError::TimedOut {
                                attempts: attempt,
                                last_error,
                            })
                        }
                    };
                    match tokio::time::timeout(remaining, backend.invoke(prompt)).await {
                        Ok(result) => result,
                        Err(_) => {
                            warn!("Generation with '{}' ran past the time budget", name);
                            return Err(GenerateError::TimedOut {
                                attempts: attempt + 1,
                                last_error,
                            });
                        }
                    }
                }
                None => backend.invoke(prompt).await,
            };

            match outcome {
                Ok(text) if !text.trim().is_empty() => {
                    self.record_success(&name);
                    return Ok(text);
                }
                Ok(_) => {
                    // Blank output is a failure; the provider normally
                    // reports this itself but not every backend does.
                    let err = BackendError::EmptyResponse;
                    warn!("'{}' returned blank output", name);
                    self.record_failure(&name, &err);
                    last_error = Some(err.to_string());
                }
                Err(err) => {
                    warn!("Error with '{}': {}", name, err);
                    self.record_failure(&name, &err);
                    last_error = Some(err.to_string());
                }
            }

            attempt += 1;
            if attempt < max_attempts && !self.settings.retry_delay.is_zero() {
                if let Some(total) = budget {
                    if started.elapsed() + self.settings.retry_delay >= total {
                        return Err(GenerateError::TimedOut {
                            attempts: attempt,
                            last_error,
                        });
                    }
                }
                sleep(self.settings.retry_delay).await;
            }
        }

        Err(GenerateError::Exhausted {
            attempts: max_attempts,
            last_error,
        })
    }

    // Success clears every failure marker, stamps the success time and
    // moves the current-backend marker.
    fn record_success(&self, name: &str) {
        let mut state = self.lock_state();
        if let Some(model) = state.states.get_mut(name) {
            model.error_count = 0;
            model.last_success = Some(Utc::now());
            model.quota_remaining = true;
            model.retry_after = None;
            model.available = true;
        }
        state.current = Some(name.to_string());
        info!("Generation succeeded with '{}'", name);
    }

    // Quota failures start a cooldown without touching availability;
    // anything else counts toward the disable threshold.
    fn record_failure(&self, name: &str, err: &BackendError) {
        let mut state = self.lock_state();
        let model = match state.states.get_mut(name) {
            Some(model) => model,
            None => return,
        };

        if err.is_rate_limit() {
            warn!(
                "'{}' quota exceeded or rate limited, cooling down for {:?}",
                name, self.settings.rate_limit_cooldown
            );
            model.quota_remaining = false;
            model.retry_after = Some(
                Utc::now()
                    + chrono::Duration::milliseconds(
                        self.settings.rate_limit_cooldown.as_millis() as i64,
                    ),
            );
        } else {
            model.error_count += 1;
            if model.error_count >= self.settings.error_threshold {
                model.available = false;
                error!(
                    "Disabled '{}' after {} consecutive errors",
                    name, model.error_count
                );
            }
        }
    }

    /// Restore a backend to a clean usable state. This is the only way
    /// back for a backend disabled by the error threshold. Returns false
    /// for unknown names.
    pub fn reset(&self, name: &str) -> bool {
        let mut state = self.lock_state();
        match state.states.get_mut(name) {
            Some(model) => {
                model.error_count = 0;
                model.available = true;
                model.quota_remaining = true;
                model.retry_after = None;
                info!("Backend '{}' reset", name);
                true
            }
            None => false,
        }
    }

    /// The backend that produced the most recent success, or the
    /// highest-priority backend if nothing has succeeded yet.
    pub fn current_backend(&self) -> Option<String> {
        self.lock_state().current.clone()
    }

    /// Read-only snapshot of every backend's health. No side effects.
    pub fn status(&self) -> HashMap<String, ModelStatus> {
        let now = Utc::now();
        let state = self.lock_state();

        state
            .states
            .iter()
            .map(|(name, model)| {
                let cooldown_remaining_secs = model
                    .retry_after
                    .filter(|t| *t > now)
                    .map(|t| (t - now).num_seconds());
                (
                    name.clone(),
                    ModelStatus {
                        priority: model.priority,
                        available: model.available,
                        quota_remaining: model.quota_remaining,
                        error_count: model.error_count,
                        last_success: model.last_success,
                        cooldown_remaining_secs,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    // Backend double that replays a fixed script of outcomes and counts
    // how many times it was invoked.
    struct ScriptedBackend {
        responses: StdMutex<VecDeque<Result<String, BackendError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn new(script: Vec<Result<String, BackendError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: StdMutex::new(script.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl TextBackend for ScriptedBackend {
        async fn invoke(&self, _prompt: &str) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BackendError::Other("script exhausted".to_string())))
        }
    }

    // Backend that never returns within a test-sized time budget.
    struct SlowBackend {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl TextBackend for SlowBackend {
        async fn invoke(&self, _prompt: &str) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(500)).await;
            Ok("too late".to_string())
        }
    }

    fn spec(name: &str, priority: u32) -> BackendSpec {
        BackendSpec {
            name: name.to_string(),
            priority,
        }
    }

    fn fast_settings() -> FallbackSettings {
        FallbackSettings {
            rate_limit_cooldown: Duration::from_millis(40),
            error_threshold: 5,
            retry_delay: Duration::ZERO,
        }
    }

    fn quota_err() -> BackendError {
        BackendError::RateLimited("HTTP 429: quota exceeded".to_string())
    }

    fn generic_err() -> BackendError {
        BackendError::Other("boom".to_string())
    }

    #[test]
    fn priority_order_wins() {
        let manager = FallbackManager::new(
            vec![
                (spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
                (spec("b", 2), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
            ],
            fast_settings(),
        );

        assert_eq!(manager.select_backend().as_deref(), Some("a"));
        assert_eq!(manager.current_backend().as_deref(), Some("a"));
    }

    #[test]
    fn recency_breaks_priority_ties() {
        let manager = FallbackManager::new(
            vec![
                (spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
                (spec("b", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
            ],
            fast_settings(),
        );

        manager.record_success("b");
        std::thread::sleep(Duration::from_millis(15));
        manager.record_success("a");

        assert_eq!(manager.select_backend().as_deref(), Some("a"));
    }

    #[test]
    fn never_succeeded_sorts_after_history() {
        let manager = FallbackManager::new(
            vec![
                (spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
                (spec("b", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
            ],
            fast_settings(),
        );

        // b has a recorded success, a does not; b is tried first
        manager.record_success("b");
        assert_eq!(manager.select_backend().as_deref(), Some("b"));
    }

    #[test]
    fn priority_dominates_recency() {
        let manager = FallbackManager::new(
            vec![
                (spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
                (spec("b", 2), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>),
            ],
            fast_settings(),
        );

        // A recent success on the lower-priority backend must not
        // outrank the higher-priority one
        manager.record_success("b");
        assert_eq!(manager.select_backend().as_deref(), Some("a"));
    }

    #[test]
    fn quota_failure_excludes_until_cooldown_elapses() {
        let manager = FallbackManager::new(
            vec![(spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>)],
            fast_settings(),
        );

        manager.record_failure("a", &quota_err());
        assert_eq!(manager.select_backend(), None);

        // Quota failure never disables the backend outright
        let status = manager.status();
        assert!(!status["a"].quota_remaining);
        assert!(status["a"].available);

        std::thread::sleep(Duration::from_millis(60));
        // Cooldown elapsed: eligible again without any external help
        assert_eq!(manager.select_backend().as_deref(), Some("a"));
    }

    #[test]
    fn success_after_cooldown_clears_quota_state() {
        let manager = FallbackManager::new(
            vec![(spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>)],
            FallbackSettings {
                rate_limit_cooldown: Duration::from_millis(30),
                ..fast_settings()
            },
        );

        manager.record_failure("a", &quota_err());
        std::thread::sleep(Duration::from_millis(45));
        assert_eq!(manager.select_backend().as_deref(), Some("a"));

        manager.record_success("a");
        let status = manager.status();
        assert!(status["a"].quota_remaining);
        assert!(status["a"].cooldown_remaining_secs.is_none());
    }

    #[test]
    fn error_threshold_disables_until_reset() {
        let manager = FallbackManager::new(
            vec![(spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>)],
            FallbackSettings {
                error_threshold: 3,
                ..fast_settings()
            },
        );

        manager.record_failure("a", &generic_err());
        manager.record_failure("a", &generic_err());
        assert_eq!(manager.select_backend().as_deref(), Some("a"));

        manager.record_failure("a", &generic_err());
        let status = manager.status();
        assert!(!status["a"].available);
        assert_eq!(status["a"].error_count, 3);
        assert_eq!(manager.select_backend(), None);

        assert!(manager.reset("a"));
        assert_eq!(manager.select_backend().as_deref(), Some("a"));
        assert!(!manager.reset("nonexistent"));
    }

    #[test]
    fn success_clears_all_failure_state() {
        let manager = FallbackManager::new(
            vec![(spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>)],
            FallbackSettings {
                error_threshold: 2,
                ..fast_settings()
            },
        );

        manager.record_failure("a", &generic_err());
        manager.record_failure("a", &generic_err());
        manager.record_failure("a", &quota_err());

        manager.record_success("a");
        let status = manager.status();
        assert!(status["a"].available);
        assert!(status["a"].quota_remaining);
        assert_eq!(status["a"].error_count, 0);
        assert!(status["a"].last_success.is_some());
        assert!(status["a"].cooldown_remaining_secs.is_none());
    }

    #[tokio::test]
    async fn exhaustion_short_circuits_without_waiting() {
        let backend = ScriptedBackend::new(vec![]);
        let manager = FallbackManager::new(
            vec![(spec("a", 1), backend.clone() as Arc<dyn TextBackend>)],
            FallbackSettings {
                rate_limit_cooldown: Duration::from_secs(300),
                error_threshold: 5,
                retry_delay: Duration::from_secs(5),
            },
        );

        manager.record_failure("a", &quota_err());

        let started = Instant::now();
        let result = manager.generate("prompt", 3).await;
        assert!(matches!(result, Err(GenerateError::NoBackendAvailable { .. })));
        // Terminal short-circuit: no attempt consumed, no pacing delay
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn attempt_bound_is_exact() {
        let backend = ScriptedBackend::new(vec![
            Err(generic_err()),
            Err(generic_err()),
            Err(generic_err()),
            Err(generic_err()),
        ]);
        let manager = FallbackManager::new(
            vec![(spec("a", 1), backend.clone() as Arc<dyn TextBackend>)],
            FallbackSettings {
                error_threshold: 10,
                ..fast_settings()
            },
        );

        match manager.generate("prompt", 4).await {
            Err(GenerateError::Exhausted { attempts, last_error }) => {
                assert_eq!(attempts, 4);
                assert_eq!(last_error.as_deref(), Some("boom"));
            }
            other => panic!("expected Exhausted, got {:?}", other.map(|_| "text")),
        }
        assert_eq!(backend.call_count(), 4);
    }

    #[tokio::test]
    async fn first_usable_backend_serves_the_request() {
        let p1 = ScriptedBackend::new(vec![Ok("from p1".to_string())]);
        let p2 = ScriptedBackend::new(vec![Ok("from p2".to_string())]);
        let p3 = ScriptedBackend::new(vec![Ok("from p3".to_string())]);
        let manager = FallbackManager::new(
            vec![
                (spec("p1", 1), p1.clone() as Arc<dyn TextBackend>),
                (spec("p2", 2), p2.clone() as Arc<dyn TextBackend>),
                (spec("p3", 3), p3.clone() as Arc<dyn TextBackend>),
            ],
            fast_settings(),
        );

        let text = manager.generate("prompt", 3).await.unwrap();
        assert_eq!(text, "from p1");
        assert_eq!(p1.call_count(), 1);
        assert_eq!(p2.call_count(), 0);
        assert_eq!(p3.call_count(), 0);
        assert_eq!(manager.current_backend().as_deref(), Some("p1"));
    }

    #[tokio::test]
    async fn quota_failure_falls_through_within_one_call() {
        let p1 = ScriptedBackend::new(vec![Err(quota_err())]);
        let p2 = ScriptedBackend::new(vec![Ok("from p2".to_string())]);
        let manager = FallbackManager::new(
            vec![
                (spec("p1", 1), p1.clone() as Arc<dyn TextBackend>),
                (spec("p2", 2), p2.clone() as Arc<dyn TextBackend>),
            ],
            FallbackSettings {
                rate_limit_cooldown: Duration::from_secs(300),
                ..fast_settings()
            },
        );

        let text = manager.generate("prompt", 2).await.unwrap();
        assert_eq!(text, "from p2");
        assert_eq!(p1.call_count(), 1);
        assert_eq!(p2.call_count(), 1);

        let status = manager.status();
        assert!(!status["p1"].quota_remaining);
        assert!(status["p1"].available);
        assert_eq!(manager.current_backend().as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn blank_output_counts_as_failure_and_is_retried() {
        let backend = ScriptedBackend::new(vec![
            Ok("   ".to_string()),
            Ok("real text".to_string()),
        ]);
        let manager = FallbackManager::new(
            vec![(spec("a", 1), backend.clone() as Arc<dyn TextBackend>)],
            fast_settings(),
        );

        let text = manager.generate("prompt", 2).await.unwrap();
        assert_eq!(text, "real text");
        assert_eq!(backend.call_count(), 2);
        // The eventual success wiped the blank-output strike
        assert_eq!(manager.status()["a"].error_count, 0);
    }

    #[tokio::test]
    async fn time_budget_cuts_off_inflight_call_and_retries() {
        let slow = Arc::new(SlowBackend {
            calls: AtomicUsize::new(0),
        });
        let manager = FallbackManager::new(
            vec![(spec("a", 1), slow.clone() as Arc<dyn TextBackend>)],
            fast_settings(),
        );

        let result = manager
            .generate_with_timeout("prompt", 3, Some(Duration::from_millis(50)))
            .await;
        assert!(matches!(result, Err(GenerateError::TimedOut { .. })));
        // The in-flight call was aborted and no further attempt started
        assert_eq!(slow.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_manager_reports_no_backends() {
        let manager = FallbackManager::new(vec![], fast_settings());
        assert_eq!(manager.select_backend(), None);
        assert!(matches!(
            manager.generate("prompt", 3).await,
            Err(GenerateError::NoBackendAvailable { .. })
        ));
        assert_eq!(manager.current_backend(), None);
    }

    #[tokio::test]
    async fn concurrent_generates_share_state_safely() {
        let backend = ScriptedBackend::new(
            (0..8).map(|i| Ok(format!("reply {}", i))).collect(),
        );
        let manager = Arc::new(FallbackManager::new(
            vec![(spec("a", 1), backend.clone() as Arc<dyn TextBackend>)],
            fast_settings(),
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let manager = Arc::clone(&manager);
            handles.push(tokio::spawn(async move {
                manager.generate("prompt", 1).await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(backend.call_count(), 8);
        assert_eq!(manager.status()["a"].error_count, 0);
    }

    #[test]
    fn status_snapshot_serializes() {
        let manager = FallbackManager::new(
            vec![(spec("a", 1), ScriptedBackend::new(vec![]) as Arc<dyn TextBackend>)],
            FallbackSettings {
                rate_limit_cooldown: Duration::from_secs(300),
                ..fast_settings()
            },
        );
        manager.record_failure("a", &quota_err());

        let status = manager.status();
        assert!(status["a"].cooldown_remaining_secs.unwrap_or(0) > 0);

        let json = serde_json::to_string_pretty(&status).unwrap();
        assert!(json.contains("\"quota_remaining\": false"));
        assert!(json.contains("cooldown_remaining_secs"));
    }
}
