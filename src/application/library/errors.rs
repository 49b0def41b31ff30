use crate::domain::ValidationError;
use std::fmt;
use thiserror::Error;

/// エラーが発生したサービス操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddBook,
    GetBook,
    GetBooks,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AddBook => "add book",
            Operation::GetBook => "get book",
            Operation::GetBooks => "get books",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 書籍カタログアプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// ストア呼び出し前の入力検証エラー
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// ストアのエラー（操作名を前置し、原因を保持する）
    #[error("{operation}: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LibraryApplicationError {
    pub(super) fn store(
        operation: Operation,
    ) -> impl FnOnce(Box<dyn std::error::Error + Send + Sync>) -> Self {
        move |source| LibraryApplicationError::Store { operation, source }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LibraryApplicationError::Validation(_))
    }

    /// 失敗した操作
    pub fn operation(&self) -> Operation {
        match self {
            LibraryApplicationError::Validation(
                ValidationError::BlankTitle | ValidationError::BlankAuthor,
            ) => Operation::AddBook,
            LibraryApplicationError::Validation(ValidationError::MissingId) => Operation::GetBook,
            LibraryApplicationError::Store { operation, .. } => *operation,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_store_error_is_prefixed_with_operation() {
        let cause: Box<dyn std::error::Error + Send + Sync> = "connection refused".into();
        let err = LibraryApplicationError::store(Operation::GetBooks)(cause);

        assert_eq!(err.to_string(), "get books: connection refused");
        assert_eq!(err.operation(), Operation::GetBooks);
        assert!(!err.is_validation());
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = LibraryApplicationError::from(ValidationError::MissingId);

        assert_eq!(err.to_string(), "get book: id is required");
        assert_eq!(err.operation(), Operation::GetBook);
        assert!(err.is_validation());
    }
}
