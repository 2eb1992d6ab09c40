use kitchen_timer_core::{
    RegistryError, TapOutcome, TapTarget, handle_tap, new_timer_id, refresh_display,
};
use std::io::Write;
use std::time::{Duration, Instant};

use crate::context::CliContext;
use crate::display::ConsoleDisplay;

/// Simulate a tap: on a surface when `timer` is `None`, otherwise on that timer
pub async fn tap(ctx: &CliContext, timer: Option<&str>) -> Result<(), String> {
    let prefix = ctx.config.read().await.id_prefix.clone();
    let target = match timer {
        Some(id) => TapTarget::Timer(id.to_string()),
        None => TapTarget::Surface,
    };

    let mut debouncer = ctx.debouncer.lock().await;
    match handle_tap(&ctx.registry, &mut debouncer, target, Instant::now(), &prefix) {
        TapOutcome::Placed(id) => println!("placed {id}"),
        TapOutcome::Removed(id) => println!("removed {id}"),
        TapOutcome::Debounced => println!("tap ignored (too soon after the last one)"),
    }
    Ok(())
}

/// Place a timer directly, bypassing the tap debounce
pub async fn place(ctx: &CliContext, id: Option<&str>) -> Result<String, String> {
    let id = match id {
        Some(id) => id.to_string(),
        None => new_timer_id(&ctx.config.read().await.id_prefix),
    };
    ctx.registry.add(id.clone()).map_err(|e| e.to_string())?;
    println!("placed {id}");
    Ok(id)
}

pub fn remove(ctx: &CliContext, id: &str) -> Result<(), String> {
    match ctx.registry.try_remove(id) {
        Ok(()) => {
            println!("removed {id}");
            Ok(())
        }
        Err(RegistryError::UnknownIdentifier { .. }) => Err(format!("no active timer '{id}'")),
        Err(err) => Err(err.to_string()),
    }
}

/// Deliver one tick to `id`, or to every timer when `id` is `None`
pub fn tick(ctx: &CliContext, id: Option<&str>) {
    if !ctx.registry.is_manual() {
        println!("note: background ticks are also running");
    }
    match id {
        Some(id) => ctx.registry.tick(id),
        None => ctx.registry.tick_all(),
    }
}

pub fn show(ctx: &CliContext, id: &str) -> Result<(), String> {
    let value = ctx
        .registry
        .formatted(id)
        .ok_or_else(|| format!("no active timer '{id}'"))?;
    println!("{value}");
    Ok(())
}

pub fn list(ctx: &CliContext) {
    if ctx.registry.is_empty() {
        println!("No active timers");
        return;
    }

    println!("{:<48} Elapsed", "Timer");
    println!("{}", "-".repeat(56));
    refresh_display(&ctx.registry, &mut ConsoleDisplay::stdout());
}

/// Refresh the listing once per tick period for `seconds` seconds.
/// In manual mode this loop is also the tick source.
pub async fn watch(ctx: &CliContext, seconds: u64) {
    let period = ctx.config.read().await.tick_interval();
    let rounds = (Duration::from_secs(seconds).as_millis() / period.as_millis().max(1)) as u64;

    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    for _ in 0..rounds {
        interval.tick().await;
        if ctx.registry.is_manual() {
            ctx.registry.tick_all();
        }
        list(ctx);
        println!();
    }
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("tick interval:   {}ms", config.tick_interval_ms);
    println!("minutes display: {:?}", config.minutes_display);
    println!("id prefix:       {}", config.id_prefix);
    println!("tap debounce:    {}ms", config.tap_debounce_ms);
    println!("tick source:     {}", if ctx.registry.is_manual() { "manual" } else { "scheduled" });
}

pub fn exit() -> Result<(), String> {
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
