use crate::{
    core::{FrameIndex, Point},
    error::{ScrollbookError, ScrollbookResult},
};

/// Immutable sprite-sheet geometry: one bitmap tiled into a grid of
/// `columns x rows` frames.
///
/// Dimensions are in pixels. Validation requires the sheet to split into
/// whole frames; a sheet whose width is not an exact multiple of the frame
/// width would make the offset walk in [`FrameTable::build`] miss its
/// row-advance condition, so such configurations are rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSheet {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub fn new(
        sheet_width: u32,
        sheet_height: u32,
        columns: u32,
        rows: u32,
    ) -> ScrollbookResult<Self> {
        let sheet = Self {
            sheet_width,
            sheet_height,
            columns,
            rows,
        };
        sheet.validate()?;
        Ok(sheet)
    }

    /// Parses a sheet from its JSON representation and validates it.
    pub fn from_json(s: &str) -> ScrollbookResult<Self> {
        let sheet: Self =
            serde_json::from_str(s).map_err(|e| ScrollbookError::serde(e.to_string()))?;
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn validate(&self) -> ScrollbookResult<()> {
        if self.columns == 0 {
            return Err(ScrollbookError::config("sheet columns must be > 0"));
        }
        if self.rows == 0 {
            return Err(ScrollbookError::config("sheet rows must be > 0"));
        }
        if self.sheet_width == 0 || self.sheet_height == 0 {
            return Err(ScrollbookError::config("sheet dimensions must be > 0"));
        }
        if self.sheet_width % self.columns != 0 {
            return Err(ScrollbookError::config(
                "sheet width must be an exact multiple of the frame width",
            ));
        }
        if self.sheet_height % self.rows != 0 {
            return Err(ScrollbookError::config(
                "sheet height must be an exact multiple of the frame height",
            ));
        }
        Ok(())
    }

    pub fn frame_width(&self) -> f64 {
        f64::from(self.sheet_width) / f64::from(self.columns)
    }

    pub fn frame_height(&self) -> f64 {
        f64::from(self.sheet_height) / f64::from(self.rows)
    }

    pub fn frame_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Precomputed background-position offset for every frame of a sheet,
/// row-major.
///
/// Revealing successive frames means sliding the sheet left within a row and
/// up between rows, so offsets are non-positive: `x` cycles through
/// `0, -frame_width, ...` back to `0`, and `y` drops by `frame_height` each
/// time `x` wraps. The table is built once per binding and never mutated.
#[derive(Clone, Debug)]
pub struct FrameTable {
    offsets: Vec<Point>,
}

impl FrameTable {
    pub fn build(sheet: &SpriteSheet) -> ScrollbookResult<Self> {
        sheet.validate()?;

        let sheet_w = f64::from(sheet.sheet_width);
        let sheet_h = f64::from(sheet.sheet_height);
        let frame_w = sheet.frame_width();
        let frame_h = sheet.frame_height();

        let mut offsets = Vec::with_capacity(sheet.frame_count());
        let mut x = 0.0;
        let mut y = 0.0;
        for _ in 0..sheet.frame_count() {
            offsets.push(Point::new(x, y));
            x = (x - frame_w) % sheet_w;
            if x == 0.0 {
                // The modulo leaves -0.0 on the wrap; store the canonical zero.
                x = 0.0;
                y = (y - frame_h) % sheet_h;
            }
        }
        Ok(Self { offsets })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset for a frame. Callers index with cursor-produced values, which
    /// are always in range.
    pub fn offset(&self, frame: FrameIndex) -> Point {
        self.offsets[frame.0]
    }

    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }
}
