use crate::domain::{Book, BookId};
use crate::ports::library_store::{LibraryStore as LibraryStoreTrait, Result};
use crate::ports::{ContextError, RequestContext};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// インメモリストアのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("book {0} not found")]
    BookNotFound(BookId),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("book ids exhausted")]
    IdsExhausted,

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Context(#[from] ContextError),
}

struct Inner {
    books: Vec<Book>,
    /// 次に採番するID（使い切ったらNone）
    next_id: Option<i64>,
}

/// LibraryStoreのインメモリ実装
///
/// IDは1から挿入順に採番する。一覧は挿入順で返す。
/// 各操作の前にリクエストコンテキストを確認し、キャンセル済みなら失敗する。
pub struct LibraryStore {
    inner: Mutex<Inner>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                books: Vec::new(),
                next_id: Some(1),
            }),
        }
    }

    /// 既存の書籍で初期化する
    ///
    /// 書籍は与えられたIDを保持し、次のIDは正の最大ID+1（負のIDのみなら1）となる。
    /// 未設定または重複したID、次のIDが採番できない場合はエラー。
    pub fn with_books(books: Vec<Book>) -> std::result::Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for book in &books {
            if book.id.is_unset() {
                return Err(StoreError::InvalidSeed(format!(
                    "book {:?} has no id",
                    book.title
                )));
            }
            if !seen.insert(book.id) {
                return Err(StoreError::InvalidSeed(format!(
                    "duplicate book id {}",
                    book.id
                )));
            }
        }

        let max_id = books.iter().map(|b| b.id.value()).max().unwrap_or(0).max(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            StoreError::InvalidSeed(format!("no book id left after {}", max_id))
        })?;

        Ok(Self {
            inner: Mutex::new(Inner {
                books,
                next_id: Some(next_id),
            }),
        })
    }

    /// 登録済みの書籍数
    pub fn len(&self) -> std::result::Result<usize, StoreError> {
        Ok(self.lock()?.books.len())
    }

    pub fn is_empty(&self) -> std::result::Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> std::result::Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryStoreTrait for LibraryStore {
    async fn create_book(&self, ctx: &RequestContext, title: &str, author: &str) -> Result<Book> {
        ctx.check().map_err(StoreError::from)?;

        let mut inner = self.lock()?;
        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        let book = Book::new(BookId::new(id), title, author);
        inner.next_id = id.checked_add(1);
        inner.books.push(book.clone());

        Ok(book)
    }

    async fn get_book(&self, ctx: &RequestContext, id: BookId) -> Result<Book> {
        ctx.check().map_err(StoreError::from)?;

        let inner = self.lock()?;
        let book = inner
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(StoreError::BookNotFound(id))?;

        Ok(book)
    }

    async fn get_books(&self, ctx: &RequestContext) -> Result<Vec<Book>> {
        ctx.check().map_err(StoreError::from)?;

        let inner = self.lock()?;
        Ok(inner.books.clone())
    }
}
