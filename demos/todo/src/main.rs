//! Todo example binary
//!
//! Runs a short session against the todo store and prints every state the
//! subscriber sees as JSON.

use todo::{TodoAction, todo_store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tasklist_runtime::metrics::register_metrics();

    println!("=== Todo Example: Drafts and Favorites ===\n");

    let store = todo_store();

    store.subscribe(|state| match serde_json::to_string(state) {
        Ok(json) => println!("  -> {json}"),
        Err(error) => tracing::error!(%error, "Failed to serialize state"),
    });

    let session = [
        TodoAction::create_draft("Buy milk"),
        TodoAction::add_todo("Buy milk"),
        TodoAction::add_todo("Walk dog"),
        TodoAction::mark_complete(0),
        TodoAction::favorite_todo(1),
        TodoAction::remove_favorite(0),
        TodoAction::remove_todo(5),
    ];

    for action in session {
        println!("\n>>> Dispatching: {}", serde_json::to_string(&action)?);
        store.dispatch(action);
    }

    let state = store.snapshot();
    println!("\nFinal state:\n{}", serde_json::to_string_pretty(&*state)?);
    println!(
        "\nCompleted: {}/{}, favorites: {}",
        state.completed_count(),
        state.count(),
        state.favorite_count()
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}
