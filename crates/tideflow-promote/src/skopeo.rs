//! skopeo CLI ラッパー
//!
//! レジストリ間のイメージコピーを skopeo に委譲する。
//! https://github.com/containers/skopeo

use crate::error::{PromoteError, Result};
use crate::reference::ImageReference;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tideflow_core::RegistryCredentials;
use tokio::process::Command;

/// 1 コピーあたりのデフォルトタイムアウト（秒）
pub const DEFAULT_COPY_TIMEOUT_SECS: u64 = 600;

/// イメージコピー操作の抽象
///
/// コピーは外部コラボレータとして扱い、[`crate::Promoter`] からは
/// この trait 経由でのみ呼び出す。source と destination の
/// レジストリに対してそれぞれ独立した認証情報を受け取る。
#[async_trait]
pub trait ImageCopier: Send + Sync {
    /// source から destination へイメージをコピーする
    ///
    /// 全レイヤーとマニフェスト（マニフェストリスト含む）を
    /// ビット同一でコピーすることが実装の契約。
    async fn copy(
        &self,
        source: &ImageReference,
        destination: &ImageReference,
        src_creds: &RegistryCredentials,
        dest_creds: &RegistryCredentials,
    ) -> Result<()>;
}

/// skopeo によるイメージコピー
pub struct Skopeo {
    timeout: Duration,
}

impl Default for Skopeo {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_COPY_TIMEOUT_SECS))
    }
}

impl Skopeo {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// skopeo がインストールされているか確認する
    ///
    /// コピーを 1 件でも起動する前に呼び、見つからなければ
    /// インストール方法つきのエラーで即座に失敗させる。
    pub async fn ensure_installed() -> Result<()> {
        let which = Command::new("which").arg("skopeo").output().await?;

        if !which.status.success() {
            return Err(PromoteError::SkopeoNotFound);
        }

        Ok(())
    }

    /// skopeo copy の引数を組み立てる
    ///
    /// --all でマニフェストリスト配下の全イメージをコピーする。
    fn copy_args(
        source: &ImageReference,
        destination: &ImageReference,
        src_creds: &RegistryCredentials,
        dest_creds: &RegistryCredentials,
    ) -> Vec<String> {
        vec![
            "copy".to_string(),
            "--all".to_string(),
            "--src-creds".to_string(),
            src_creds.creds_arg(),
            "--dest-creds".to_string(),
            dest_creds.creds_arg(),
            format!("docker://{}", source),
            format!("docker://{}", destination),
        ]
    }
}

#[async_trait]
impl ImageCopier for Skopeo {
    async fn copy(
        &self,
        source: &ImageReference,
        destination: &ImageReference,
        src_creds: &RegistryCredentials,
        dest_creds: &RegistryCredentials,
    ) -> Result<()> {
        let args = Self::copy_args(source, destination, src_creds, dest_creds);

        tracing::debug!(source = %source, destination = %destination, "Running skopeo copy");

        let mut cmd = Command::new("skopeo");
        cmd.args(&args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // タイムアウトで future を drop した際に子プロセスを残さない
        cmd.kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(PromoteError::Timeout {
                    image: source.to_string(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PromoteError::CopyFailed {
                image: source.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
