use colored::Colorize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tideflow_core::PromotionConfig;
use tideflow_nexus::NexusClient;
use tideflow_promote::{CopyStatus, Promoter, PromotionSummary, Skopeo};

#[allow(clippy::too_many_arguments)]
pub async fn handle(
    tag: Option<String>,
    username: Option<String>,
    password: Option<String>,
    nexus_url: Option<String>,
    staging_registry: Option<String>,
    release_registry: Option<String>,
    concurrency: usize,
    timeout: u64,
    dry_run: bool,
) -> anyhow::Result<()> {
    println!("{}", "イメージプロモーションを開始します...".blue().bold());

    // 設定の解決（ネットワークアクセスより前に検証）
    let config = PromotionConfig {
        username,
        password,
        tag,
        nexus_url,
        staging_registry,
        release_registry,
    };
    let request = config.resolve()?;

    println!("タグ: {}", request.tag.cyan());
    println!("ステージング: {}", request.staging_registry.cyan());
    println!("リリース: {}", request.release_registry.cyan());

    // コピーを 1 件でも起動する前に skopeo の存在を確認
    if !dry_run {
        Skopeo::ensure_installed().await?;
    }

    println!();
    println!("{}", "Nexus コンポーネントを検索中...".blue());
    let client = NexusClient::from_request(&request)?;
    let components = client.discover_images(&request.tag).await?;

    println!();
    println!(
        "{}",
        format!("対象イメージ ({} 個):", components.len()).bold()
    );
    for component in &components {
        println!("  • {}", component.image_name().cyan());
    }

    if dry_run {
        println!();
        println!("{}", "--dry-run 指定のためコピーは実行しません".yellow());
        return Ok(());
    }

    // Ctrl-C で新規コピーの起動を止める（実行中のコピーは完了を待つ）
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!();
                eprintln!(
                    "{}",
                    "⚠ 中断を受け付けました。実行中のコピー完了後に終了します...".yellow()
                );
                shutdown.store(true, Ordering::SeqCst);
            }
        });
    }

    println!();
    println!("{}", "イメージをプロモート中...".green());

    let copier = Arc::new(Skopeo::new(Duration::from_secs(timeout)));
    let promoter = Promoter::new(copier, concurrency);
    let outcomes = promoter.promote(&request, &components, &shutdown).await;

    println!();
    for outcome in &outcomes {
        match &outcome.status {
            CopyStatus::Succeeded => {
                println!("  ✓ {}", outcome.image.cyan());
            }
            CopyStatus::Failed(reason) => {
                println!("  ✗ {} ({})", outcome.image.red(), reason);
            }
            CopyStatus::Cancelled => {
                println!("  - {} (中断)", outcome.image.yellow());
            }
        }
    }

    let summary = PromotionSummary::of(&outcomes);
    println!();
    if summary.all_succeeded() {
        println!(
            "{}",
            format!("✓ プロモーション完了: {} イメージ", summary.succeeded)
                .green()
                .bold()
        );
        Ok(())
    } else {
        eprintln!(
            "{}",
            format!(
                "✗ プロモーション失敗: 成功 {} / 失敗 {} / 中断 {}",
                summary.succeeded, summary.failed, summary.cancelled
            )
            .red()
            .bold()
        );
        // コピー失敗は設定・発見エラー（終了コード 1）と区別する
        std::process::exit(2);
    }
}
