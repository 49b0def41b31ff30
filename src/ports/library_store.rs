use crate::domain::{Book, BookId};
use async_trait::async_trait;

use super::request_context::RequestContext;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// 書籍の永続化を抽象化する。インメモリ、RDB、ドキュメントDBなど
/// どの実装もこのトレイトを満たせばサービスから利用できる。
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// 書籍を作成する
    ///
    /// ストアがIDを採番し、作成された書籍を返す。
    async fn create_book(&self, ctx: &RequestContext, title: &str, author: &str) -> Result<Book>;

    /// IDで書籍を取得する
    async fn get_book(&self, ctx: &RequestContext, id: BookId) -> Result<Book>;

    /// 全書籍を取得する
    ///
    /// 順序はストアが決める。サービスはそのまま返す。
    async fn get_books(&self, ctx: &RequestContext) -> Result<Vec<Book>>;
}
