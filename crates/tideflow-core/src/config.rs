//! プロモーション設定の解決
//!
//! CLI 層が引数・環境変数から組み立てた [`PromotionConfig`] を検証し、
//! 不変の [`PromotionRequest`] に解決する。環境変数の読み取りは
//! clap の env 連携に任せ、このモジュール自身は I/O を行わない。

use crate::error::{ConfigError, Result};
use crate::model::{PromotionRequest, RegistryCredentials};

/// Nexus 検索エンドポイントのデフォルト
pub const DEFAULT_NEXUS_URL: &str = "https://nexus.chronista.club";

/// ステージングレジストリのデフォルト
pub const DEFAULT_STAGING_REGISTRY: &str = "staging-cr.chronista.club";

/// リリースレジストリのデフォルト
pub const DEFAULT_RELEASE_REGISTRY: &str = "cr.chronista.club";

/// 起動時に一度だけ組み立てるプロモーション設定
///
/// [`resolve`](Self::resolve) が成功するまでネットワークアクセスは発生しない。
#[derive(Debug, Clone, Default)]
pub struct PromotionConfig {
    /// Nexus / レジストリ共通のユーザー名
    pub username: Option<String>,

    /// Nexus / レジストリ共通のパスワード
    pub password: Option<String>,

    /// リリースタグ
    pub tag: Option<String>,

    /// Nexus のベース URL（省略時: [`DEFAULT_NEXUS_URL`]）
    pub nexus_url: Option<String>,

    /// ステージングレジストリ（省略時: [`DEFAULT_STAGING_REGISTRY`]）
    pub staging_registry: Option<String>,

    /// リリースレジストリ（省略時: [`DEFAULT_RELEASE_REGISTRY`]）
    pub release_registry: Option<String>,
}

impl PromotionConfig {
    /// 設定を検証して [`PromotionRequest`] に解決する
    ///
    /// 認証情報とタグの検証はネットワークアクセスより前に行われ、
    /// 不足している項目はひとつのエラーにまとめて報告する。
    pub fn resolve(self) -> Result<PromotionRequest> {
        let mut missing = Vec::new();
        if self.username.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("username (TIDE_NEXUS_USER)".to_string());
        }
        if self.password.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("password (TIDE_NEXUS_PASSWORD)".to_string());
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let tag = match self.tag {
            Some(tag) if !tag.trim().is_empty() => tag,
            _ => return Err(ConfigError::MissingTag),
        };

        let credentials = RegistryCredentials::new(
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        );

        let request = PromotionRequest {
            tag,
            nexus_url: non_empty_or(self.nexus_url, DEFAULT_NEXUS_URL),
            staging_registry: non_empty_or(self.staging_registry, DEFAULT_STAGING_REGISTRY),
            release_registry: non_empty_or(self.release_registry, DEFAULT_RELEASE_REGISTRY),
            nexus_credentials: credentials.clone(),
            source_credentials: credentials.clone(),
            destination_credentials: credentials,
        };

        tracing::debug!(
            tag = %request.tag,
            nexus_url = %request.nexus_url,
            staging = %request.staging_registry,
            release = %request.release_registry,
            "Resolved promotion request"
        );

        Ok(request)
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> PromotionConfig {
        PromotionConfig {
            username: Some("ci-bot".to_string()),
            password: Some("secret".to_string()),
            tag: Some("release-42".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let request = base_config().resolve().unwrap();
        assert_eq!(request.nexus_url, DEFAULT_NEXUS_URL);
        assert_eq!(request.staging_registry, DEFAULT_STAGING_REGISTRY);
        assert_eq!(request.release_registry, DEFAULT_RELEASE_REGISTRY);
        assert_eq!(request.tag, "release-42");
    }

    #[test]
    fn test_resolve_respects_overrides() {
        let config = PromotionConfig {
            nexus_url: Some("https://nexus.example.com".to_string()),
            staging_registry: Some("staging.example.com".to_string()),
            release_registry: Some("release.example.com:10093".to_string()),
            ..base_config()
        };

        let request = config.resolve().unwrap();
        assert_eq!(request.nexus_url, "https://nexus.example.com");
        assert_eq!(request.staging_registry, "staging.example.com");
        assert_eq!(request.release_registry, "release.example.com:10093");
    }

    #[test]
    fn test_missing_credentials_lists_all_missing_fields() {
        let config = PromotionConfig {
            tag: Some("release-42".to_string()),
            ..Default::default()
        };

        match config.resolve() {
            Err(ConfigError::MissingCredentials(missing)) => {
                assert_eq!(missing.len(), 2);
                assert!(missing[0].contains("username"));
                assert!(missing[1].contains("password"));
            }
            other => panic!("Expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_password_only() {
        let config = PromotionConfig {
            password: None,
            ..base_config()
        };

        match config.resolve() {
            Err(ConfigError::MissingCredentials(missing)) => {
                assert_eq!(missing.len(), 1);
                assert!(missing[0].contains("password"));
            }
            other => panic!("Expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_username_treated_as_missing() {
        let config = PromotionConfig {
            username: Some("".to_string()),
            ..base_config()
        };

        assert!(matches!(
            config.resolve(),
            Err(ConfigError::MissingCredentials(_))
        ));
    }

    #[test]
    fn test_missing_tag() {
        let config = PromotionConfig {
            tag: None,
            ..base_config()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::MissingTag)));
    }

    #[test]
    fn test_empty_tag_treated_as_missing() {
        let config = PromotionConfig {
            tag: Some("  ".to_string()),
            ..base_config()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::MissingTag)));
    }

    #[test]
    fn test_same_credentials_fill_both_sides() {
        // 現状は単一ペアを両レジストリに使う（フィールドとしては独立）
        let request = base_config().resolve().unwrap();
        assert_eq!(request.source_credentials, request.destination_credentials);
        assert_eq!(request.source_credentials.username, "ci-bot");
    }
}
