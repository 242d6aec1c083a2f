//! Wall-clock driver for the challenge countdown.
//!
//! `CountdownTicker` is a cancellable repeating task that issues one
//! `tick` per period against a shared engine. It is bound to the engine's
//! countdown epoch at spawn time. Any start, resume, pause, finalize or
//! reset moves the epoch, and the ticker exits at its next wake-up without
//! ticking, so at most one ticker ever decrements a given countdown run.
//! It also exits once the countdown runs out. Spawn a fresh ticker after
//! every call that starts or resumes the countdown.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::rules::GameEngine;

/// Engine handle shared between the presentation layer and a ticker.
pub type SharedEngine = Arc<Mutex<GameEngine>>;

/// One countdown second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Running countdown task. Dropping it cancels the task.
pub struct CountdownTicker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Spawn a ticker bound to the engine's current countdown run.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(engine: SharedEngine) -> Self {
        Self::spawn_with_period(engine, TICK_PERIOD)
    }

    #[must_use]
    pub fn spawn_with_period(engine: SharedEngine, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let epoch = engine.lock().countdown_epoch();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = token.cancelled() => {
                        debug!(epoch, "countdown ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if !tick_once(&engine, epoch) {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Request cancellation without waiting for the task.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if the task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel and wait for the task to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                debug!(%err, "countdown ticker join failed");
            }
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Issue one tick. Returns false once the ticker should exit.
fn tick_once(engine: &Mutex<GameEngine>, epoch: u64) -> bool {
    let mut engine = engine.lock();
    if engine.countdown_epoch() != epoch {
        debug!(epoch, current = engine.countdown_epoch(), "stale countdown ticker");
        return false;
    }
    if !engine.state().countdown.active {
        return false;
    }
    engine.tick();
    engine.state().countdown.active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryId, GameConfig, Phase, TeamId};

    fn challenge_engine(config: GameConfig) -> SharedEngine {
        let mut engine = GameEngine::new(config);
        engine.start(["Owls", "Foxes"]);
        for id in 0..6 {
            engine.pick_category(CategoryId::new(id));
        }
        engine.initiate_auction(CategoryId::new(0), 100, TeamId::FIRST);
        engine.withdraw();
        engine.start_challenge();
        engine.set_countdown_active(true);
        assert!(engine.state().countdown.active);
        Arc::new(Mutex::new(engine))
    }

    fn seconds(engine: &SharedEngine) -> u32 {
        engine.lock().state().countdown.seconds_remaining
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let engine = challenge_engine(GameConfig::default());
        let ticker = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(seconds(&engine), 27);

        ticker.stop().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(seconds(&engine), 27);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exits_when_countdown_runs_out() {
        let engine = challenge_engine(GameConfig::new().with_countdown(100, 2));
        let ticker = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(seconds(&engine), 0);
        assert!(!engine.lock().state().countdown.active);
        assert!(ticker.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_releases_ticker() {
        let engine = challenge_engine(GameConfig::default());
        let ticker = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        engine.lock().set_countdown_active(false);
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert_eq!(seconds(&engine), 29);
        assert!(engine.lock().state().countdown.is_paused());
        assert!(ticker.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticker_skips_next_round() {
        let engine = challenge_engine(GameConfig::default());
        let first = CountdownTicker::spawn(Arc::clone(&engine));
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut guard = engine.lock();
            guard.finalize_challenge();
            guard.initiate_auction(CategoryId::new(0), 200, TeamId::SECOND);
            guard.withdraw();
            guard.start_challenge();
            guard.set_countdown_active(true);
            assert_eq!(guard.state().phase, Phase::Challenge);
        }
        let second = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(1800)).await;

        assert_eq!(seconds(&engine), 44);
        assert!(first.is_finished());
        assert!(!second.is_finished());
        second.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_pause_resume_keeps_single_ticker() {
        let engine = challenge_engine(GameConfig::default());
        let first = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        engine.lock().set_countdown_active(false);
        tokio::time::sleep(Duration::from_millis(200)).await;
        engine.lock().set_countdown_active(true);
        let second = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(2300)).await;

        assert_eq!(seconds(&engine), 27);
        assert!(first.is_finished());
        assert!(!second.is_finished());
        second.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_redundant_resume_retires_old_ticker() {
        let engine = challenge_engine(GameConfig::default());
        let first = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(500)).await;
        engine.lock().set_countdown_active(true);
        let second = CountdownTicker::spawn(Arc::clone(&engine));

        tokio::time::sleep(Duration::from_millis(3000)).await;

        assert_eq!(seconds(&engine), 27);
        assert!(first.is_finished());
        second.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let engine = challenge_engine(GameConfig::default());
        let ticker = CountdownTicker::spawn(Arc::clone(&engine));
        drop(ticker);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(seconds(&engine), 30);
    }
}
