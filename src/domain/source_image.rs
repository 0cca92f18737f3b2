// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::tile_grid::BoundingBox;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, ImageReader, Pixel};
use std::fmt;
use std::path::{Path, PathBuf};

// --- 構造体定義 ---

/// デコード済みの分割元画像。
///
/// `load` を通じてのみ作成され、その時点でファイルが画像として
/// 読めることが保証されます。正方形であることは保証しません（`is_square` で確認）。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    path: PathBuf,
}

// --- エラー定義 ---

/// `SourceImage::load` で発生する可能性のあるエラー。
#[derive(Debug)]
pub enum ImageLoadError {
    /// ファイルを開けなかった場合。
    Io(std::io::Error),
    /// 壊れている、未対応の形式、途中で切れているなどでデコードできなかった場合。
    Decode(image::ImageError),
}

// --- 実装ブロック ---

impl SourceImage {
    /// ファイルを読み込んでデコードします。
    ///
    /// 形式は拡張子ではなくファイルの先頭バイトから判定します。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImageLoadError> {
        let path = path.as_ref();
        let image = ImageReader::open(path)
            .map_err(ImageLoadError::Io)?
            .with_guessed_format()
            .map_err(ImageLoadError::Io)?
            .decode()
            .map_err(ImageLoadError::Decode)?;

        Ok(Self {
            image,
            path: path.to_path_buf(),
        })
    }

    /// デコード済みの画像から直接作成します。
    pub fn from_image(image: DynamicImage, path: impl Into<PathBuf>) -> Self {
        Self {
            image,
            path: path.into(),
        }
    }

    // --- 便利メソッド ---

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn is_square(&self) -> bool {
        let (w, h) = self.dimensions();
        w == h
    }

    /// 指定範囲を切り出します（拡大縮小なし）。
    ///
    /// 範囲が画像の外にはみ出す部分はゼロ値のピクセル（透明または黒）で埋め、
    /// 戻り値は常に `bbox` と同じ大きさになります。
    pub fn crop(&self, bbox: &BoundingBox) -> DynamicImage {
        let (w, h) = self.dimensions();
        if bbox.right <= w && bbox.bottom <= h {
            return self
                .image
                .crop_imm(bbox.left, bbox.top, bbox.width(), bbox.height());
        }

        if bbox.left >= w || bbox.top >= h {
            return DynamicImage::new(bbox.width(), bbox.height(), self.image.color());
        }
        let visible = self.image.crop_imm(
            bbox.left,
            bbox.top,
            bbox.width().min(w - bbox.left),
            bbox.height().min(h - bbox.top),
        );
        pad_to(visible, bbox.width(), bbox.height())
    }

    /// 元画像をそのままPNGとして保存します。元の形式に関わらずPNGになります。
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, ImageFormat::Png)
    }

    // --- ゲッターメソッド ---

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn width(&self) -> u32 {
        self.image.width()
    }
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

// --- ヘルパー関数 ---

/// 左上に `visible` を置き、残りをゼロ値で埋めた `width × height` の画像を返します。
///
/// `DynamicImage` 同士でコピーすると 8bit の RGBA を経由するため、
/// 元の色形式のバッファのままコピーします。
fn pad_to(visible: DynamicImage, width: u32, height: u32) -> DynamicImage {
    match visible {
        DynamicImage::ImageLuma8(b) => DynamicImage::ImageLuma8(pad_buffer(&b, width, height)),
        DynamicImage::ImageLumaA8(b) => DynamicImage::ImageLumaA8(pad_buffer(&b, width, height)),
        DynamicImage::ImageRgb8(b) => DynamicImage::ImageRgb8(pad_buffer(&b, width, height)),
        DynamicImage::ImageRgba8(b) => DynamicImage::ImageRgba8(pad_buffer(&b, width, height)),
        DynamicImage::ImageLuma16(b) => DynamicImage::ImageLuma16(pad_buffer(&b, width, height)),
        DynamicImage::ImageLumaA16(b) => {
            DynamicImage::ImageLumaA16(pad_buffer(&b, width, height))
        }
        DynamicImage::ImageRgb16(b) => DynamicImage::ImageRgb16(pad_buffer(&b, width, height)),
        DynamicImage::ImageRgba16(b) => DynamicImage::ImageRgba16(pad_buffer(&b, width, height)),
        DynamicImage::ImageRgb32F(b) => DynamicImage::ImageRgb32F(pad_buffer(&b, width, height)),
        DynamicImage::ImageRgba32F(b) => {
            DynamicImage::ImageRgba32F(pad_buffer(&b, width, height))
        }
        // 将来追加される形式は精度を落とさない 32bit float にまとめる
        other => DynamicImage::ImageRgba32F(pad_buffer(&other.to_rgba32f(), width, height)),
    }
}

fn pad_buffer<P: Pixel>(
    visible: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut tile = ImageBuffer::new(width, height);
    image::imageops::replace(&mut tile, visible, 0, 0);
    tile
}

// --- トレイト実装 ---

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Io(e) => write!(f, "ファイルを開けません: {}", e),
            ImageLoadError::Decode(e) => write!(f, "画像をデコードできません: {}", e),
        }
    }
}

impl std::error::Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageLoadError::Io(e) => Some(e),
            ImageLoadError::Decode(e) => Some(e),
        }
    }
}

// --- テストモジュール ---
