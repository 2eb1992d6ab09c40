use kitchen_timer_core::{RegistryConfig, RegistryConfigExt, TapDebouncer, TimerRegistry};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// The registry lives for the whole session; it is never torn down.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<RegistryConfig>>,
    pub registry: TimerRegistry,
    pub debouncer: Arc<Mutex<TapDebouncer>>,
}

impl CliContext {
    /// Context with background tick tasks. Must be called inside a runtime.
    pub fn new() -> Self {
        let config = RegistryConfig::load();
        let registry = TimerRegistry::scheduled(&config, Handle::current());
        Self::with_registry(config, registry)
    }

    /// Context whose timers only advance on `tick` and `watch`
    pub fn manual() -> Self {
        Self::manual_with(RegistryConfig::load())
    }

    pub fn manual_with(config: RegistryConfig) -> Self {
        let registry = TimerRegistry::manual(&config);
        Self::with_registry(config, registry)
    }

    fn with_registry(config: RegistryConfig, registry: TimerRegistry) -> Self {
        tracing::info!(
            manual = registry.is_manual(),
            tick_interval_ms = config.tick_interval_ms,
            "timer session started"
        );
        let debouncer = TapDebouncer::new(config.tap_debounce());
        Self {
            config: Arc::new(RwLock::new(config)),
            registry,
            debouncer: Arc::new(Mutex::new(debouncer)),
        }
    }
}
