use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// リクエストコンテキストのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context cancelled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// キャンセルと期限を運ぶリクエストコンテキスト
///
/// サービスは中身を見ずにそのままストアへ渡す。
/// クローンはキャンセル状態を共有する。
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<DateTime<Utc>>,
}

impl RequestContext {
    /// キャンセルされず期限もないコンテキスト
    pub fn background() -> Self {
        Self::default()
    }

    /// 期限付きの子コンテキストを作る
    ///
    /// キャンセル状態は親と共有する。既存の期限より遅い期限は無視される。
    pub fn with_deadline(&self, deadline: DateTime<Utc>) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Utc::now() + timeout)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// このコンテキストと、状態を共有する全てのクローンをキャンセルする
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// 処理を続けてよいか確認する
    ///
    /// キャンセルが期限切れより優先される。
    pub fn check(&self) -> Result<(), ContextError> {
        self.check_at(Utc::now())
    }

    pub fn check_at(&self, now: DateTime<Utc>) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if now >= deadline => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
