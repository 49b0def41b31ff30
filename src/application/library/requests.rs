use crate::domain::{Book, BookId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
}

impl AddBookRequest {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookResponse {
    pub book: Book,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBookRequest {
    pub id: BookId,
}

impl GetBookRequest {
    pub fn new(id: impl Into<BookId>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBookResponse {
    pub book: Book,
}

/// 一覧取得はフィールドを持たない
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBooksRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBooksResponse {
    pub books: Vec<Book>,
}
