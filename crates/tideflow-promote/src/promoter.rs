//! イメージプロモーター
//!
//! 発見済みコンポーネントをステージングからリリースへコピーする。
//! コピーはセマフォで上限を設けた並行タスクとして実行し、
//! 全タスクの完了を待ってから結果を返す。タスク間で共有する
//! 可変状態は無く、各タスクは自身のコンポーネントと不変の
//! [`PromotionRequest`] だけを参照する。

use crate::outcome::{CopyStatus, PromotionOutcome};
use crate::reference::ImageReference;
use crate::skopeo::ImageCopier;
use colored::Colorize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tideflow_core::PromotionRequest;
use tideflow_nexus::ComponentDescriptor;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// デフォルトの並行コピー数
pub const DEFAULT_CONCURRENCY: usize = 4;

/// 上限つき並行コピーのオーケストレーター
pub struct Promoter {
    copier: Arc<dyn ImageCopier>,
    concurrency: usize,
}

impl Promoter {
    pub fn new(copier: Arc<dyn ImageCopier>, concurrency: usize) -> Self {
        Self {
            copier,
            concurrency: concurrency.max(1),
        }
    }

    /// 全コンポーネントをプロモートし、コンポーネントごとの結果を返す
    ///
    /// 1 件の失敗は残りのコピーを妨げない。`shutdown` が立った場合は
    /// 新しいコピーを起動せず、実行中のコピーの完了だけを待つ。
    /// 起動されなかったコンポーネントは [`CopyStatus::Cancelled`] になる。
    pub async fn promote(
        &self,
        request: &PromotionRequest,
        components: &[ComponentDescriptor],
        shutdown: &AtomicBool,
    ) -> Vec<PromotionOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set: JoinSet<PromotionOutcome> = JoinSet::new();
        let mut outcomes = Vec::with_capacity(components.len());

        for component in components {
            let image = component.image_name();
            let source = ImageReference::from_component(&request.staging_registry, component);
            let destination = ImageReference::from_component(&request.release_registry, component);

            if shutdown.load(Ordering::SeqCst) {
                tracing::warn!(image = %image, "Skipping copy due to shutdown");
                outcomes.push(PromotionOutcome {
                    image,
                    source,
                    destination,
                    status: CopyStatus::Cancelled,
                });
                continue;
            }

            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };

            println!(
                "  ↑ {} → {} へ転送中...",
                source.to_string().cyan(),
                destination.to_string().cyan()
            );

            let copier = Arc::clone(&self.copier);
            let src_creds = request.source_credentials.clone();
            let dest_creds = request.destination_credentials.clone();

            join_set.spawn(async move {
                let _permit = permit;
                let status = match copier
                    .copy(&source, &destination, &src_creds, &dest_creds)
                    .await
                {
                    Ok(()) => CopyStatus::Succeeded,
                    Err(e) => {
                        tracing::error!(image = %image, error = %e, "Copy failed");
                        CopyStatus::Failed(e.to_string())
                    }
                };

                PromotionOutcome {
                    image,
                    source,
                    destination,
                    status,
                }
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::warn!(error = %e, "Copy task aborted");
                }
            }
        }

        outcomes
    }
}
