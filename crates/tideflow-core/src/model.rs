//! tideflow データモデル

use base64::Engine;

/// レジストリ認証情報（username / password のペア）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl RegistryCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// skopeo の --src-creds / --dest-creds に渡す "user:password" 形式
    pub fn creds_arg(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }

    /// HTTP Basic 認証の Authorization ヘッダ値を生成
    ///
    /// "user:password" を Base64 エンコードした `Basic xxxx` 形式。
    pub fn basic_auth_header(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.creds_arg());
        format!("Basic {}", encoded)
    }
}

/// 検証済みのプロモーション要求
///
/// [`crate::PromotionConfig::resolve`] でのみ構築され、以後変更されない。
/// ステージング側とリリース側の認証情報は現状同じペアで埋められるが、
/// 将来レジストリごとに認証を分ける場合もインターフェースを変えずに済むよう
/// 独立したフィールドとして保持する。
#[derive(Debug, Clone)]
pub struct PromotionRequest {
    /// リリースタグ（Nexus 検索キー）
    pub tag: String,

    /// Nexus のベース URL
    pub nexus_url: String,

    /// ステージングレジストリのホスト
    pub staging_registry: String,

    /// リリースレジストリのホスト
    pub release_registry: String,

    /// Nexus 検索 API の認証情報
    pub nexus_credentials: RegistryCredentials,

    /// コピー元（ステージング）レジストリの認証情報
    pub source_credentials: RegistryCredentials,

    /// コピー先（リリース）レジストリの認証情報
    pub destination_credentials: RegistryCredentials,
}
