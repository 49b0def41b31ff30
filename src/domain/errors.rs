use thiserror::Error;

/// 入力検証のエラー
///
/// サービスがストアを呼び出す前に発生する。リトライ対象外。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// タイトルが空
    #[error("add book: title can't be blank")]
    BlankTitle,
    /// 著者が空
    #[error("add book: author can't be blank")]
    BlankAuthor,
    /// IDが未設定
    #[error("get book: id is required")]
    MissingId,
}
