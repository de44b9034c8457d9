mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tide")]
#[command(about = "タグを渡す。イメージは潮に乗る。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// リリースタグに紐づくイメージをステージングからリリースへプロモート
    Promote {
        /// リリースタグ（Nexus でコンポーネントに付与されたタグ）
        tag: Option<String>,
        /// Nexus / レジストリのユーザー名
        #[arg(long, env = "TIDE_NEXUS_USER", hide_env_values = true)]
        username: Option<String>,
        /// Nexus / レジストリのパスワード
        #[arg(long, env = "TIDE_NEXUS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Nexus のベース URL（省略時: https://nexus.chronista.club）
        #[arg(long, env = "TIDE_NEXUS_URL")]
        nexus_url: Option<String>,
        /// ステージングレジストリ（省略時: staging-cr.chronista.club）
        #[arg(long, env = "TIDE_STAGING_REGISTRY")]
        staging_registry: Option<String>,
        /// リリースレジストリ（省略時: cr.chronista.club）
        #[arg(long, env = "TIDE_RELEASE_REGISTRY")]
        release_registry: Option<String>,
        /// 並行コピー数
        #[arg(long, default_value_t = tideflow_promote::DEFAULT_CONCURRENCY)]
        concurrency: usize,
        /// 1 コピーあたりのタイムアウト（秒）
        #[arg(long, default_value_t = tideflow_promote::DEFAULT_COPY_TIMEOUT_SECS)]
        timeout: u64,
        /// コピーは実行せず、対象イメージの一覧だけ表示
        #[arg(long)]
        dry_run: bool,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Commands::Promote {
            tag,
            username,
            password,
            nexus_url,
            staging_registry,
            release_registry,
            concurrency,
            timeout,
            dry_run,
        } => {
            commands::promote::handle(
                tag,
                username,
                password,
                nexus_url,
                staging_registry,
                release_registry,
                concurrency,
                timeout,
                dry_run,
            )
            .await?;
        }
        Commands::Version => {
            println!("tideflow {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
