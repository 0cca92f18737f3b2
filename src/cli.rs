use crate::domain::split_config::{
    SplitConfig, DEFAULT_BASE_NAME, DEFAULT_GRID_SIZE, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use clap::Parser;
use std::path::PathBuf;

/// 正方形の画像をスライドパズル用のタイルに分割するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 分割元の画像（main_photo.png など）を置くフォルダのパス
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// タイルと full-image.png の出力先フォルダのパス
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// 分割元の画像のファイル名（拡張子なし）
    #[arg(short, long, default_value = DEFAULT_BASE_NAME)]
    pub base_name: String,

    /// 縦横の分割数
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub grid: u32,

    /// デバッグログを表示する
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> SplitConfig {
        SplitConfig::new(
            &self.input_dir,
            &self.output_dir,
            &self.base_name,
            self.grid,
        )
    }
}
