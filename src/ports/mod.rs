pub mod activity_log;
pub mod library_store;
pub mod request_context;

pub use activity_log::ActivityLog;
pub use library_store::LibraryStore;
pub use request_context::{ContextError, RequestContext};
