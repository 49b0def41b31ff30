use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - ストアが採番する整数ID
///
/// 0は「未設定」（まだ永続化されていない）を表す。
/// 永続化済みの書籍は必ず0以外のIDを持つ。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// 未設定のID
    pub const UNSET: BookId = BookId(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// IDが未設定（ゼロ値）か
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
