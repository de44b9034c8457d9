//! Nexus 検索 API クライアント
//!
//! タグに紐づくコンポーネントを認証付きで検索する。
//! https://help.sonatype.com/repomanager3/integrations/rest-and-integration-api/search-api

use crate::error::{NexusError, Result};
use crate::model::{ComponentDescriptor, SearchResponse, filter_images};
use std::time::Duration;
use tideflow_core::{PromotionRequest, RegistryCredentials};

/// Nexus REST API の検索パス
const SEARCH_PATH: &str = "/service/rest/v1/search";

/// 検索リクエストのタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Nexus 検索 API クライアント
pub struct NexusClient {
    client: reqwest::Client,
    base_url: String,
    credentials: RegistryCredentials,
}

impl NexusClient {
    /// 新しいクライアントを作成する
    pub fn new(base_url: impl Into<String>, credentials: RegistryCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// 検証済みのプロモーション要求からクライアントを作成する
    pub fn from_request(request: &PromotionRequest) -> Result<Self> {
        Self::new(&request.nexus_url, request.nexus_credentials.clone())
    }

    /// タグに紐づく全コンポーネントを検索する
    ///
    /// Nexus の検索 API はページングされるため、continuationToken が
    /// 返らなくなるまで全ページを取得する。1 ページ目だけで
    /// 打ち切ると大きなリリースでコンポーネントを取りこぼす。
    pub async fn search_components(&self, tag: &str) -> Result<Vec<ComponentDescriptor>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let mut components = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = vec![("tag", tag)];
            if let Some(token) = continuation_token.as_deref() {
                query.push(("continuationToken", token));
            }

            tracing::debug!(url = %url, tag = %tag, "Searching Nexus components");

            let response = self
                .client
                .get(&url)
                .header(
                    reqwest::header::AUTHORIZATION,
                    self.credentials.basic_auth_header(),
                )
                .query(&query)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(NexusError::Http {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            }

            let body = response.text().await?;
            let page: SearchResponse = serde_json::from_str(&body)?;
            components.extend(page.items);

            match page.continuation_token {
                Some(token) if !token.is_empty() => continuation_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(tag = %tag, count = components.len(), "Search finished");

        Ok(components)
    }

    /// タグに紐づく docker コンポーネントを発見する
    ///
    /// docker 以外のフォーマットは黙って除外する。検索自体は成功したが
    /// イメージが 1 件も無い場合は、HTTP エラーとは別の
    /// [`NexusError::NoImagesFound`] で失敗させる。
    pub async fn discover_images(&self, tag: &str) -> Result<Vec<ComponentDescriptor>> {
        let components = self.search_components(tag).await?;
        let total = components.len();
        let images = filter_images(components);

        tracing::debug!(
            tag = %tag,
            total,
            images = images.len(),
            "Filtered docker components"
        );

        if images.is_empty() {
            return Err(NexusError::NoImagesFound {
                tag: tag.to_string(),
            });
        }

        Ok(images)
    }
}
