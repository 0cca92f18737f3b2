use clap::Parser;
use slide_puzzle_splitter::cli::Args;
use slide_puzzle_splitter::{logger, workflow};
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = args.to_config();
    tracing::debug!(?config, "設定");

    println!("スライドパズル画像分割ツール\n");

    match workflow::run(&config) {
        Ok(report) => {
            println!(
                "\n✅ 完了しました！ {} 枚のタイルを作成しました",
                report.tile_count()
            );
            println!("   パズルでそのまま使用できます。");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = ?e, "分割処理に失敗");
            eprintln!("❌ エラー: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("   {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
