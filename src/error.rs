use crate::domain::input_source::path_error::PathError;
use crate::domain::source_image::ImageLoadError;
use crate::domain::tile_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("{base_name} が {dir} に見つかりませんでした")]
    InputNotFound {
        dir: String,
        base_name: String,
        extensions: Vec<String>,
    },

    #[error("画像の読み込みに失敗しました: {0}")]
    Decode(#[from] ImageLoadError),

    #[error("タイルに分割できません: {0}")]
    Grid(#[from] GridError),

    #[error("{path} の保存に失敗しました: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

impl AppError {
    /// エラーメッセージの次の行に表示する補足。
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::InputNotFound { extensions, .. } => {
                let list: Vec<String> = extensions
                    .iter()
                    .map(|e| format!(".{}", e.trim_start_matches('.')))
                    .collect();
                Some(format!("対応形式: {}", list.join(", ")))
            }
            AppError::Save { .. } => {
                Some("それまでに書き出したファイルはそのまま残っています。".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_hint_lists_extensions_in_order() {
        let err = AppError::InputNotFound {
            dir: "images/slide-puzzle".to_string(),
            base_name: "main_photo".to_string(),
            extensions: vec!["png".into(), "jpg".into(), ".gif".into()],
        };
        assert_eq!(
            err.to_string(),
            "main_photo が images/slide-puzzle に見つかりませんでした"
        );
        assert_eq!(err.hint().as_deref(), Some("対応形式: .png, .jpg, .gif"));
    }

    /// フォルダ作成の失敗時点では何も書き出していないので補足を出さない
    #[test]
    fn path_error_has_no_partial_output_hint() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(PathError::IoError(io));
        assert!(err.hint().is_none());
    }

    #[test]
    fn save_error_mentions_partial_output() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = AppError::Save {
            path: "images/tile-6.png".to_string(),
            source: image::ImageError::IoError(io),
        };
        assert!(err.to_string().starts_with("images/tile-6.png の保存に失敗しました"));
        assert!(err.hint().unwrap().contains("そのまま残っています"));
    }

    #[test]
    fn grid_error_has_no_hint() {
        let err = AppError::from(GridError::ZeroGridSize);
        assert!(err.hint().is_none());
        assert!(err.to_string().contains("分割数は1以上"));
    }
}
