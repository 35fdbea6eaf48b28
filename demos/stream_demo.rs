//! Stream demo: Live engine output with a rising chaos level.
//!
//! Runs the engine for ~20 seconds, stepping the chaos level up every
//! four seconds so the acceleration is visible.

use std::thread;
use std::time::Duration;

use backrooms::StreamEngine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("backrooms=info")),
        )
        .init();

    let engine = StreamEngine::new();
    engine
        .on_emit(|entry, agent| {
            if entry.is_glitch() || entry.is_ascii() {
                println!("{}", entry.message);
                return;
            }
            let speaker = agent.map_or("-", |a| a.as_str());
            println!(
                "[{}] [{}] [{speaker}] {}",
                entry.timestamp, entry.level, entry.message
            );
        })
        .expect("worker alive");

    engine.start().expect("worker alive");

    for level in 1..=5u8 {
        engine.set_chaos_level(level).expect("level in range");
        thread::sleep(Duration::from_secs(4));
    }

    engine.stop().expect("worker alive");
    let snapshot = engine.snapshot().expect("worker alive");
    println!();
    println!("--- stream stopped: {} entries retained ---", snapshot.len());
}
