use crate::domain::Book;
use crate::ports::activity_log::ActivityLog as ActivityLogTrait;

/// tracingに記録するActivityLog実装
///
/// 追加と取得はinfo、一覧はdebugで記録する。
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLog;

impl ActivityLog {
    pub fn new() -> Self {
        Self
    }
}

impl ActivityLogTrait for ActivityLog {
    fn book_added(&self, book: &Book) {
        tracing::info!(book_id = %book.id, title = %book.title, "added book");
    }

    fn book_fetched(&self, book: &Book) {
        tracing::info!(book_id = %book.id, title = %book.title, "got book");
    }

    fn books_listed(&self, count: usize) {
        tracing::debug!(count, "listed books");
    }
}

/// Mock implementation of ActivityLog
///
/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActivityLog;

impl ActivityLogTrait for NoopActivityLog {
    fn book_added(&self, _book: &Book) {}

    fn book_fetched(&self, _book: &Book) {}

    fn books_listed(&self, _count: usize) {}
}
