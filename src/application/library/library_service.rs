use crate::domain::ValidationError;
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Operation, Result};
use super::requests::*;

/// 書籍カタログのアプリケーションサービス
///
/// 入力を検証し、注入されたストアに委譲し、エラーに操作名を付けて返す。
/// 自身は可変状態を持たないため、クローンしてタスク間で共有できる。
///
/// # 一貫性保証
///
/// 各操作はストアを高々1回呼び出し、失敗してもリトライしない。
/// 成功時のみアクティビティログへ1回記録する。
#[derive(Clone)]
pub struct LibraryService {
    store: Arc<dyn LibraryStore>,
    activity_log: Arc<dyn ActivityLog>,
}

impl LibraryService {
    pub fn new(store: Arc<dyn LibraryStore>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            store,
            activity_log,
        }
    }

    /// 書籍を追加する
    ///
    /// ビジネスルール：
    /// - タイトルが空でないこと
    /// - 著者が空でないこと（タイトルの検証が優先）
    ///
    /// # エラー
    /// - Validation: タイトルまたは著者が空
    /// - Store: ストアの作成失敗（"add book: ..."）
    pub async fn add_book(
        &self,
        ctx: &RequestContext,
        req: AddBookRequest,
    ) -> Result<AddBookResponse> {
        if req.title.is_empty() {
            return Err(ValidationError::BlankTitle.into());
        }
        if req.author.is_empty() {
            return Err(ValidationError::BlankAuthor.into());
        }

        let book = self
            .store
            .create_book(ctx, &req.title, &req.author)
            .await
            .map_err(LibraryApplicationError::store(Operation::AddBook))?;

        self.activity_log.book_added(&book);

        Ok(AddBookResponse { book })
    }

    /// IDで書籍を取得する
    ///
    /// # エラー
    /// - Validation: IDが未設定（0）
    /// - Store: ストアの取得失敗（"get book: ..."）
    pub async fn get_book(
        &self,
        ctx: &RequestContext,
        req: GetBookRequest,
    ) -> Result<GetBookResponse> {
        if req.id.is_unset() {
            return Err(ValidationError::MissingId.into());
        }

        let book = self
            .store
            .get_book(ctx, req.id)
            .await
            .map_err(LibraryApplicationError::store(Operation::GetBook))?;

        self.activity_log.book_fetched(&book);

        Ok(GetBookResponse { book })
    }

    /// 全書籍を取得する
    ///
    /// ストアが返した順序のまま返す（空の場合もそのまま）。
    pub async fn get_books(
        &self,
        ctx: &RequestContext,
        _req: GetBooksRequest,
    ) -> Result<GetBooksResponse> {
        let books = self
            .store
            .get_books(ctx)
            .await
            .map_err(LibraryApplicationError::store(Operation::GetBooks))?;

        self.activity_log.books_listed(books.len());

        Ok(GetBooksResponse { books })
    }
}
