use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI用のログ出力を初期化します。
///
/// 進捗表示は標準出力に出すため、ログは標準エラー出力へ書き出します。
/// `RUST_LOG` が設定されていればそちらを優先します。
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "slide_puzzle_splitter=debug"
    } else {
        "slide_puzzle_splitter=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
