use crate::domain::Book;

/// アクティビティログポート
///
/// 成功した操作の記録先。グローバルなロガーを呼ぶ代わりにサービスへ注入し、
/// 出力を捕捉せずにサービスをテストできるようにする。
pub trait ActivityLog: Send + Sync {
    /// 書籍の作成後に1回呼ばれる
    fn book_added(&self, book: &Book);

    /// IDによる書籍の取得後に1回呼ばれる
    fn book_fetched(&self, book: &Book);

    /// 一覧取得後に1回呼ばれる
    fn books_listed(&self, count: usize);
}
