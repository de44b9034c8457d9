use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("認証情報が不足しています: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("リリースタグが指定されていません")]
    MissingTag,

    #[error("無効な設定: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
