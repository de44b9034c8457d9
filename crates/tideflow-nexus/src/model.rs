//! Nexus 検索 API のデータモデル

use serde::Deserialize;

/// コンテナイメージを表すコンポーネントフォーマット
pub const DOCKER_FORMAT: &str = "docker";

/// Nexus 検索 API が返すコンポーネント
///
/// name / version / format は必須。いずれかが欠けたレスポンスは
/// 値を未定義のまま下流に流さず、パースエラーとして即座に失敗させる。
/// 生成後に変更されることはない。
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDescriptor {
    /// コンポーネント名（イメージのリポジトリ名）
    pub name: String,

    /// バージョン（イメージタグ）
    pub version: String,

    /// リポジトリフォーマット（"docker", "raw", "maven2" 等）
    pub format: String,

    /// 上記以外のフィールド（id, repository, assets 等）はそのまま保持
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl ComponentDescriptor {
    /// コンテナイメージかどうか
    pub fn is_docker(&self) -> bool {
        self.format == DOCKER_FORMAT
    }

    /// "name:version" 形式のイメージ名
    pub fn image_name(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

/// 検索 API のレスポンス（1 ページ分）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// items が無いレスポンスはエラーではなく空として扱う
    #[serde(default)]
    pub items: Vec<ComponentDescriptor>,

    /// 次ページがある場合のみ非 null
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// docker フォーマットのコンポーネントだけを残す
///
/// 同じタグを持つ他フォーマットの成果物（設定ファイル等）は
/// エラーにせず黙って除外する。
pub fn filter_images(components: Vec<ComponentDescriptor>) -> Vec<ComponentDescriptor> {
    components.into_iter().filter(|c| c.is_docker()).collect()
}
