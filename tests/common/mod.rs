#![allow(dead_code)]

use async_trait::async_trait;
use rusty_library_catalog::domain::{Book, BookId};
use rusty_library_catalog::ports::*;
use std::sync::{Arc, Mutex};

// ============================================================================
// テスト用ストア（呼び出しを記録する）
// ============================================================================

/// 呼び出しを記録するLibraryStore
///
/// create_bookはID 123で書籍を作成し、get_bookは要求されたIDで
/// "Dune" / "Frank Herbert" を返す。get_booksは登録された一覧を返す。
pub struct RecordingStore {
    pub create_book_calls: Mutex<Vec<(String, String)>>,
    pub get_book_calls: Mutex<Vec<BookId>>,
    pub get_books_calls: Mutex<usize>,
    books: Vec<Book>,
    failure: Option<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            create_book_calls: Mutex::new(Vec::new()),
            get_book_calls: Mutex::new(Vec::new()),
            get_books_calls: Mutex::new(0),
            books: Vec::new(),
            failure: None,
        }
    }

    /// get_booksが返す書籍を設定
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    /// 全操作を指定メッセージで失敗させる
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn create_book_calls(&self) -> Vec<(String, String)> {
        self.create_book_calls.lock().unwrap().clone()
    }

    pub fn get_book_calls(&self) -> Vec<BookId> {
        self.get_book_calls.lock().unwrap().clone()
    }

    pub fn get_books_calls(&self) -> usize {
        *self.get_books_calls.lock().unwrap()
    }

    fn fail(&self) -> library_store::Result<()> {
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LibraryStore for RecordingStore {
    async fn create_book(
        &self,
        _ctx: &RequestContext,
        title: &str,
        author: &str,
    ) -> library_store::Result<Book> {
        self.create_book_calls
            .lock()
            .unwrap()
            .push((title.to_string(), author.to_string()));
        self.fail()?;
        Ok(Book::new(BookId::new(123), title, author))
    }

    async fn get_book(&self, _ctx: &RequestContext, id: BookId) -> library_store::Result<Book> {
        self.get_book_calls.lock().unwrap().push(id);
        self.fail()?;
        Ok(Book::new(id, "Dune", "Frank Herbert"))
    }

    async fn get_books(&self, _ctx: &RequestContext) -> library_store::Result<Vec<Book>> {
        *self.get_books_calls.lock().unwrap() += 1;
        self.fail()?;
        Ok(self.books.clone())
    }
}

// ============================================================================
// テスト用アクティビティログ
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Added(Book),
    Fetched(Book),
    Listed(usize),
}

#[derive(Default)]
pub struct RecordingActivityLog {
    entries: Mutex<Vec<Activity>>,
}

impl RecordingActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Activity> {
        self.entries.lock().unwrap().clone()
    }
}

impl ActivityLog for RecordingActivityLog {
    fn book_added(&self, book: &Book) {
        self.entries.lock().unwrap().push(Activity::Added(book.clone()));
    }

    fn book_fetched(&self, book: &Book) {
        self.entries
            .lock()
            .unwrap()
            .push(Activity::Fetched(book.clone()));
    }

    fn books_listed(&self, count: usize) {
        self.entries.lock().unwrap().push(Activity::Listed(count));
    }
}

/// テスト対象のサービスと記録用の依存を組み立てる
pub fn setup(
    store: RecordingStore,
) -> (
    rusty_library_catalog::application::library::LibraryService,
    Arc<RecordingStore>,
    Arc<RecordingActivityLog>,
) {
    let store = Arc::new(store);
    let activity_log = Arc::new(RecordingActivityLog::new());
    let service = rusty_library_catalog::application::library::LibraryService::new(
        store.clone(),
        activity_log.clone(),
    );
    (service, store, activity_log)
}
