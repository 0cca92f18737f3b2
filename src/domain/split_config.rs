use std::path::{Path, PathBuf};

/// 入力画像を探すときに試す拡張子（優先順）。
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// 既定の入力フォルダ。
pub const DEFAULT_INPUT_DIR: &str = "images/slide-puzzle";
/// 既定の出力フォルダ。
pub const DEFAULT_OUTPUT_DIR: &str = "images";
/// 入力画像のファイル名（拡張子なし）。
pub const DEFAULT_BASE_NAME: &str = "main_photo";
/// 既定のグリッドの分割数（縦横とも）。
pub const DEFAULT_GRID_SIZE: u32 = 3;

/// 分割処理1回分の設定。
///
/// 以前はフォルダ名やファイル名が固定値として埋め込まれていましたが、
/// それらをこの構造体にまとめて `workflow::run` に渡します。
/// `Default` は従来の固定値と同じ内容になります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    base_name: String,
    extensions: Vec<String>,
    grid_size: u32,
}

impl SplitConfig {
    /// 新しい `SplitConfig` を作成します。拡張子リストは `SUPPORTED_EXTENSIONS` になります。
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        base_name: impl Into<String>,
        grid_size: u32,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            base_name: base_name.into(),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            grid_size,
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_INPUT_DIR,
            DEFAULT_OUTPUT_DIR,
            DEFAULT_BASE_NAME,
            DEFAULT_GRID_SIZE,
        )
    }
}
