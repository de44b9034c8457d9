use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromoteError {
    #[error("skopeo が見つかりません。インストールしてください: brew install skopeo")]
    SkopeoNotFound,

    #[error("イメージのコピーに失敗しました ({image}): {message}")]
    CopyFailed { image: String, message: String },

    #[error("イメージのコピーが {seconds} 秒でタイムアウトしました ({image})")]
    Timeout { image: String, seconds: u64 },

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromoteError>;
