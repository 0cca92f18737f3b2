use super::directory_path::DirectoryPath;
use std::fmt;
use std::path::{Path, PathBuf};

/// 入力フォルダ内で見つかった分割元の画像ファイル。
///
/// 存在することだけを確認しており、画像として読めるかどうかは
/// `SourceImage::load` で初めて分かります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
    extension: String,
}

impl InputFile {
    /// `{base_name}.{ext}` を拡張子リストの順に探し、最初に存在したものを返します。
    ///
    /// 同じディレクトリ内容なら常に同じ結果になります。
    /// 1つも見つからなければ `None`。
    pub fn locate<S: AsRef<str>>(
        dir: &DirectoryPath,
        base_name: &str,
        extensions: &[S],
    ) -> Option<Self> {
        extensions.iter().find_map(|ext| {
            let ext = ext.as_ref().trim_start_matches('.');
            let candidate = dir.join(format!("{}.{}", base_name, ext));
            tracing::debug!(candidate = %candidate.display(), "入力候補を確認");
            candidate.is_file().then(|| Self {
                path: candidate,
                extension: ext.to_string(),
            })
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 一致した拡張子（先頭のドットなし）。
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::split_config::SUPPORTED_EXTENSIONS;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("Failed to create file");
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "other_photo.png");
        touch(dir.path(), "main_photo.tiff");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        assert_eq!(
            InputFile::locate(&dir_path, "main_photo", &SUPPORTED_EXTENSIONS),
            None
        );
    }

    #[test]
    fn falls_back_to_jpg_when_png_is_absent() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main_photo.jpg");
        touch(dir.path(), "main_photo.gif");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        let found = InputFile::locate(&dir_path, "main_photo", &SUPPORTED_EXTENSIONS).unwrap();
        assert_eq!(found.extension(), "jpg");
        assert_eq!(found.as_path(), dir.path().join("main_photo.jpg"));
    }

    #[test]
    fn png_wins_over_every_other_extension() {
        let dir = tempdir().unwrap();
        for ext in SUPPORTED_EXTENSIONS {
            touch(dir.path(), &format!("main_photo.{}", ext));
        }
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        let found = InputFile::locate(&dir_path, "main_photo", &SUPPORTED_EXTENSIONS).unwrap();
        assert_eq!(found.extension(), "png");
    }

    /// 中身の妥当性は見ず、存在だけで判定することを確認
    #[test]
    fn only_checks_existence_not_validity() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main_photo.bmp"), b"not really a bitmap").unwrap();
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        let found = InputFile::locate(&dir_path, "main_photo", &SUPPORTED_EXTENSIONS).unwrap();
        assert_eq!(found.extension(), "bmp");
    }

    #[test]
    fn directories_with_matching_names_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("main_photo.png")).unwrap();
        touch(dir.path(), "main_photo.jpeg");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        let found = InputFile::locate(&dir_path, "main_photo", &SUPPORTED_EXTENSIONS).unwrap();
        assert_eq!(found.extension(), "jpeg");
    }

    #[test]
    fn accepts_extensions_with_leading_dot() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main_photo.gif");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();

        let found = InputFile::locate(&dir_path, "main_photo", &[".gif"]).unwrap();
        assert_eq!(found.to_string(), dir.path().join("main_photo.gif").display().to_string());
    }
}
