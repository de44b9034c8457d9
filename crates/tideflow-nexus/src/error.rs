//! Nexus クライアントのエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Nexus への検索リクエストが失敗しました: HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Nexus への接続に失敗しました: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("検索レスポンスの解析に失敗しました: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("タグ '{tag}' に紐づく docker コンポーネントが見つかりません")]
    NoImagesFound { tag: String },
}

pub type Result<T> = std::result::Result<T, NexusError>;
