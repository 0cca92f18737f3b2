// タイル分割の座標計算を行うモジュール

use std::fmt;

/// 元画像上の矩形範囲 (left, top, right, bottom)。right と bottom は含まない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// グリッド上の1枚のタイル。
///
/// `index` は 1 始まりの行優先の番号で、左上が 1、右下が `grid_size²` になります。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub index: u32,
    pub row: u32,
    pub col: u32,
    pub bounding_box: BoundingBox,
}

impl Tile {
    /// 出力ファイル名 (`tile-{index}.png`)。
    pub fn file_name(&self) -> String {
        format!("tile-{}.png", self.index)
    }
}

/// `TileGrid` を組み立てられなかった理由。
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// 分割数が 0。
    ZeroGridSize,
    /// 画像の幅が分割数より小さく、タイルの一辺が 0 になる。
    ImageTooSmall { width: u32, grid_size: u32 },
}

/// 画像の幅からタイルの一辺を求めます。
///
/// 切り捨て除算なので、`width % grid_size` ピクセル分の右端（と下端）は
/// どのタイルにも含まれません。高さは使わず、縦方向にも同じ値を使います。
pub fn compute_tile_size(width: u32, grid_size: u32) -> u32 {
    width / grid_size
}

/// `grid_size × grid_size` の分割レイアウト。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    grid_size: u32,
    tile_size: u32,
}

impl TileGrid {
    pub fn new(image_width: u32, grid_size: u32) -> Result<Self, GridError> {
        if grid_size == 0 {
            return Err(GridError::ZeroGridSize);
        }
        let tile_size = compute_tile_size(image_width, grid_size);
        if tile_size == 0 {
            return Err(GridError::ImageTooSmall {
                width: image_width,
                grid_size,
            });
        }
        Ok(Self {
            grid_size,
            tile_size,
        })
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn tile_count(&self) -> u32 {
        self.grid_size * self.grid_size
    }

    /// タイル全体で覆われる一辺の長さ (`grid_size * tile_size`)。
    pub fn covered_extent(&self) -> u32 {
        self.grid_size * self.tile_size
    }

    /// 指定した行・列のタイル。
    pub fn tile_at(&self, row: u32, col: u32) -> Tile {
        let s = self.tile_size;
        Tile {
            index: row * self.grid_size + col + 1,
            row,
            col,
            bounding_box: BoundingBox {
                left: col * s,
                top: row * s,
                right: (col + 1) * s,
                bottom: (row + 1) * s,
            },
        }
    }

    /// 行を外側、列を内側にして全タイルを順に返します。
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.grid_size)
            .flat_map(move |row| (0..self.grid_size).map(move |col| self.tile_at(row, col)))
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroGridSize => write!(f, "分割数は1以上を指定してください。"),
            GridError::ImageTooSmall { width, grid_size } => write!(
                f,
                "画像の幅 {}px では {}x{} に分割できません。",
                width, grid_size, grid_size
            ),
        }
    }
}

impl std::error::Error for GridError {}
