use super::input_source::directory_path::DirectoryPath;
use super::input_source::path_error::PathError;
use super::tile_grid::Tile;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// 元画像のコピーのファイル名。
pub const FULL_IMAGE_FILE_NAME: &str = "full-image.png";

/// タイルと元画像のコピーを書き出すフォルダ。
///
/// 同名のファイルがあれば上書きします。
#[derive(Debug)]
pub struct OutputFolder {
    dir: DirectoryPath,
}

impl OutputFolder {
    /// 出力先を用意します。フォルダが無ければ作成します。
    pub fn prepare<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        Ok(Self {
            dir: DirectoryPath::ensure(path)?,
        })
    }

    pub fn as_path(&self) -> &Path {
        self.dir.as_path()
    }

    pub fn tile_path(&self, tile: &Tile) -> PathBuf {
        self.dir.join(tile.file_name())
    }

    pub fn full_image_path(&self) -> PathBuf {
        self.dir.join(FULL_IMAGE_FILE_NAME)
    }

    /// 画像をPNGとして書き出し、書き出したパスを返します。
    pub fn write_tile(&self, tile: &Tile, image: &DynamicImage) -> Result<PathBuf, image::ImageError> {
        let path = self.tile_path(tile);
        image.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile_grid::TileGrid;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn prepare_creates_missing_folder() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out").join("images");
        let folder = OutputFolder::prepare(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(folder.as_path(), target.as_path());
        assert_eq!(folder.full_image_path(), target.join("full-image.png"));
    }

    #[test]
    fn write_tile_overwrites_previous_output() {
        let dir = tempdir().unwrap();
        let folder = OutputFolder::prepare(dir.path()).unwrap();
        let tile = TileGrid::new(30, 3).unwrap().tile_at(2, 0);
        fs::write(folder.tile_path(&tile), b"stale").unwrap();

        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([1, 2, 3])));
        let path = folder.write_tile(&tile, &image).unwrap();

        assert_eq!(path, dir.path().join("tile-7.png"));
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(*reloaded.get_pixel(5, 5), Rgb([1, 2, 3]));
    }

    #[test]
    fn write_tile_into_removed_folder_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("images");
        let folder = OutputFolder::prepare(&target).unwrap();
        fs::remove_dir(&target).unwrap();

        let tile = TileGrid::new(30, 3).unwrap().tile_at(0, 0);
        let image = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        assert!(folder.write_tile(&tile, &image).is_err());
    }
}
