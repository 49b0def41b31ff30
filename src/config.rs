use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_FILTER: &str = "rusty_library_catalog=debug";
const DEFAULT_REQUEST_TIMEOUT_MS: i64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LIBRARY_REQUEST_TIMEOUT_MS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),

    #[error("failed to read seed file {path}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 環境変数から読み込むアプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// tracingのフィルタ（RUST_LOG）
    pub log_filter: String,
    /// 1リクエストあたりの期限
    pub request_timeout: chrono::Duration,
    /// 起動時に読み込む書籍のJSONファイル
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            request_timeout: chrono::Duration::milliseconds(DEFAULT_REQUEST_TIMEOUT_MS),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる（テスト用に環境変数を差し替えられる）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("LIBRARY_REQUEST_TIMEOUT_MS") {
            let ms = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.request_timeout = chrono::Duration::milliseconds(ms);
        }

        config.seed_path = lookup("LIBRARY_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// シードファイルから書籍を読み込む（未設定なら空）
    pub fn load_seed(&self) -> Result<Vec<crate::domain::Book>, ConfigError> {
        let Some(path) = &self.seed_path else {
            return Ok(Vec::new());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::SeedParse {
            path: path.clone(),
            source,
        })
    }
}
