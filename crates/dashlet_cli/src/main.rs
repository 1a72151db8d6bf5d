//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `dashlet_core` wiring end to end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use dashlet_core::{open_store_in_memory, Store};

fn main() {
    println!("dashlet_core ping={}", dashlet_core::ping());
    println!("dashlet_core version={}", dashlet_core::core_version());

    let backend = match open_store_in_memory() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let mut store = Store::open(backend);
    // Seed the demo board an empty dashboard shows.
    for text in ["Finish report", "Email client", "Update website"] {
        if let Err(err) = store.add_task(text) {
            eprintln!("failed to seed task: {err}");
            std::process::exit(1);
        }
    }

    let state = store.state();
    println!(
        "tasks={} notifications={} unread={}",
        state.tasks.tasks.len(),
        state.notifications.items.len(),
        state.notifications.unread_count()
    );
}
