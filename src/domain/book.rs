use serde::{Deserialize, Serialize};

use super::value_objects::BookId;

/// 書籍 - カタログの1項目
///
/// ストアが`create_book`で生成し、以降サービスからは不変。
/// タイトルと著者が空でないことは作成時にのみ検証される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}
