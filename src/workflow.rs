//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 画像をタイルに分割する具体的な処理フローを実装します。

use crate::domain::input_source::directory_path::DirectoryPath;
use crate::domain::input_source::input_file::InputFile;
use crate::domain::output_folder::OutputFolder;
use crate::domain::source_image::SourceImage;
use crate::domain::split_config::SplitConfig;
use crate::domain::tile_grid::TileGrid;
use crate::error::AppError;
use std::path::PathBuf;

/// 1回の実行で書き出したファイルの一覧。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// 書き出したタイルのパス（タイル番号順）。
    pub tile_paths: Vec<PathBuf>,
    /// 元画像のコピーのパス。
    pub full_image_path: PathBuf,
    /// タイルの一辺のピクセル数。
    pub tile_size: u32,
}

impl SplitReport {
    pub fn tile_count(&self) -> usize {
        self.tile_paths.len()
    }
}

// --- public な main 関数 ---

/// 画像をタイルに分割して書き出します。
///
/// # 引数
/// * `config`: 入出力フォルダやグリッドの分割数 (`SplitConfig`)。
///
/// # 戻り値
/// * `Ok(SplitReport)`: すべてのタイルと元画像のコピーを書き出せた場合。
/// * `Err(AppError)`: 入力画像が見つからない、読み込めない、書き出しに失敗した場合。
///   途中で書き出しに失敗した場合、それまでのファイルは残ります。
pub fn run(config: &SplitConfig) -> Result<SplitReport, AppError> {
    // 1. 入力フォルダを用意（無ければ作成）
    let input_dir = DirectoryPath::ensure(config.input_dir())?;

    // 2. 入力画像を拡張子の優先順に探す
    let input = InputFile::locate(&input_dir, config.base_name(), config.extensions())
        .ok_or_else(|| AppError::InputNotFound {
            dir: input_dir.to_string(),
            base_name: config.base_name().to_string(),
            extensions: config.extensions().to_vec(),
        })?;
    tracing::debug!(path = %input, extension = input.extension(), "入力画像を検出");

    // 3. 画像を読み込む
    let source = SourceImage::load(input.as_path())?;
    let (width, height) = source.dimensions();
    println!("✓ 画像を読み込みました: {}", source.path().display());
    println!("  サイズ: {}x{}", width, height);

    // 4. 正方形かどうかの確認（警告のみ）
    if !source.is_square() {
        tracing::warn!(width, height, "正方形ではない画像");
        println!("⚠ 警告: 画像が正方形ではありません ({}x{})", width, height);
        println!("  このまま続行します（タイルの大きさは幅から決まります）");
    }

    // 5. タイルの大きさを決める。高さは使わない。
    let grid = TileGrid::new(width, config.grid_size())?;
    let tile_size = grid.tile_size();
    tracing::debug!(
        tile_size,
        covered = grid.covered_extent(),
        "タイルの大きさを決定"
    );

    // 6. タイルを切り出して書き出す
    let output = OutputFolder::prepare(config.output_dir())?;
    tracing::debug!(dir = %output.as_path().display(), "出力先を用意");
    println!(
        "\n{}x{} のグリッドに分割します（各 {}x{}）...",
        grid.grid_size(),
        grid.grid_size(),
        tile_size,
        tile_size
    );

    let mut tile_paths = Vec::with_capacity(grid.tile_count() as usize);
    for tile in grid.tiles() {
        let cropped = source.crop(&tile.bounding_box);
        let path = output
            .write_tile(&tile, &cropped)
            .map_err(|e| AppError::Save {
                path: output.tile_path(&tile).display().to_string(),
                source: e,
            })?;
        tracing::debug!(index = tile.index, bbox = ?tile.bounding_box, "タイルを保存");
        println!("  ✓ {} を保存しました", tile.file_name());
        tile_paths.push(path);
    }

    // 7. 元画像もPNGで保存
    let full_image_path = output.full_image_path();
    source
        .save_png(&full_image_path)
        .map_err(|e| AppError::Save {
            path: full_image_path.display().to_string(),
            source: e,
        })?;
    println!("\n✓ 元画像を {} に保存しました", full_image_path.display());

    Ok(SplitReport {
        tile_paths,
        full_image_path,
        tile_size,
    })
}
