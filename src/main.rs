use rusty_library_catalog::{
    adapters::{logging::ActivityLog, memory::LibraryStore as MemoryLibraryStore},
    application::library::{GetBooksRequest, LibraryService},
    config::AppConfig,
    ports::RequestContext,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters
    let seed = config.load_seed()?;
    tracing::info!(books = seed.len(), seed_path = ?config.seed_path, "Loading catalog");
    let store = Arc::new(MemoryLibraryStore::with_books(seed)?);
    let activity_log = Arc::new(ActivityLog::new());

    let service = LibraryService::new(store, activity_log);

    let ctx = RequestContext::background().with_timeout(config.request_timeout);
    let catalog = service.get_books(&ctx, GetBooksRequest).await?;

    for book in &catalog.books {
        tracing::info!(book_id = %book.id, title = %book.title, author = %book.author, "catalog entry");
    }
    tracing::info!(books = catalog.books.len(), "Catalog ready");

    Ok(())
}
