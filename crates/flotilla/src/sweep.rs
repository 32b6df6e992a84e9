//! Background eviction of idle games.

use std::sync::Arc;
use std::time::Duration;

use flotilla_registry::GameRegistry;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

/// Periodically removes games whose idle time exceeds the registry's
/// timeout. Runs until the owning task is aborted.
///
/// Each pass takes the same registry lock the handlers use, so a sweep
/// never observes a game mid-operation. Eviction applies to every
/// phase; an abandoned game in WAIT ties up a code just as much as a
/// finished one.
pub async fn run_eviction_loop(registry: Arc<Mutex<GameRegistry>>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; skip it so startup isn't a
    // sweep of an empty registry.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let evicted = registry.lock().await.sweep_expired();
        if !evicted.is_empty() {
            tracing::info!(count = evicted.len(), "evicted idle games");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flotilla_registry::RegistryConfig;

    #[tokio::test(start_paused = true)]
    async fn test_eviction_loop_removes_idle_games() {
        let config = RegistryConfig {
            code_length: 2,
            idle_timeout_secs: 0,
        };
        let registry = Arc::new(Mutex::new(GameRegistry::new(config)));
        registry.lock().await.create_game().expect("create");
        registry.lock().await.create_game().expect("create");
        assert_eq!(registry.lock().await.len(), 2);

        let sweeper = tokio::spawn(run_eviction_loop(
            Arc::clone(&registry),
            Duration::from_secs(5),
        ));

        // Paused time advances instantly; two periods is enough to get
        // past the skipped startup tick.
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(registry.lock().await.is_empty());
        sweeper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_eviction_loop_keeps_fresh_games() {
        let config = RegistryConfig {
            code_length: 2,
            idle_timeout_secs: 3600,
        };
        let registry = Arc::new(Mutex::new(GameRegistry::new(config)));
        registry.lock().await.create_game().expect("create");

        let sweeper = tokio::spawn(run_eviction_loop(
            Arc::clone(&registry),
            Duration::from_secs(5),
        ));

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(registry.lock().await.len(), 1);
        sweeper.abort();
    }
}
