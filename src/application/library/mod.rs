mod errors;
mod library_service;
mod requests;

pub use errors::{LibraryApplicationError, Operation, Result};
pub use library_service::LibraryService;
pub use requests::*;
