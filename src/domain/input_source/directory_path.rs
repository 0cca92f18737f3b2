use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// ディレクトリが無ければ親ディレクトリも含めて作成し、`DirectoryPath` を返します。
    ///
    /// 既に存在する場合は何もしません。同名のファイルがある場合などは
    /// `create_dir_all` のI/Oエラーがそのまま返ります。
    pub fn ensure<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(PathError::IoError)?;
        Self::new(path)
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    // ディレクトリ直下のファイルパスを組み立てる
    pub fn join<P: AsRef<Path>>(&self, file_name: P) -> PathBuf {
        self.path.join(file_name)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
