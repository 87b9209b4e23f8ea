//! Responsive board geometry.
//!
//! The board always holds 50 square tiles. Landscape viewports lay them out
//! as 10 columns by 5 rows and keep a strip above the board for the title and
//! controls; portrait viewports use 5 columns by 10 rows with no reservation.

/// Fraction of the shorter viewport side used as padding on every edge.
pub const PADDING_RATIO: f64 = 0.03;

/// Vertical space kept free for the title and controls in landscape mode.
pub const LANDSCAPE_HEADER_RESERVE: f64 = 160.0;

/// Grid cells along the long side of the board.
pub const LONG_SIDE: usize = 10;

/// Grid cells along the short side of the board.
pub const SHORT_SIDE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape iff strictly wider than tall; a square viewport is portrait.
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// `(columns, rows)` of the board in this orientation.
    pub const fn grid(self) -> (usize, usize) {
        match self {
            Orientation::Landscape => (LONG_SIDE, SHORT_SIDE),
            Orientation::Portrait => (SHORT_SIDE, LONG_SIDE),
        }
    }
}

/// Board geometry for one viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub orientation: Orientation,
    /// Edge length of one tile in pixels. Never negative, never NaN.
    pub tile_size: f64,
    pub columns: usize,
    pub rows: usize,
}

/// Computes the board geometry for a viewport.
///
/// Degenerate viewports (zero, negative or non-finite sides, or one too small
/// to fit the header reservation) produce a zero tile size instead of a
/// negative or NaN one.
pub fn compute_layout(width: f64, height: f64) -> Layout {
    let orientation = Orientation::of(width, height);
    let (columns, rows) = orientation.grid();

    let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
    if !usable {
        return Layout {
            width,
            height,
            padding: 0.0,
            orientation,
            tile_size: 0.0,
            columns,
            rows,
        };
    }

    let padding = finite_or_zero(width.min(height) * PADDING_RATIO).max(0.0);

    let available_width = width - padding * 2.0;
    let available_height = match orientation {
        Orientation::Landscape => height - padding * 2.0 - LANDSCAPE_HEADER_RESERVE,
        Orientation::Portrait => height - padding * 2.0,
    };

    let raw = (available_width / columns as f64).min(available_height / rows as f64);
    let tile_size = finite_or_zero(raw).max(0.0);

    Layout {
        width,
        height,
        padding,
        orientation,
        tile_size,
        columns,
        rows,
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Layout {
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }

    pub fn tile_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Pixel size of the full board, excluding gaps and chrome.
    pub fn board_size(&self) -> (f64, f64) {
        (
            self.tile_size * self.columns as f64,
            self.tile_size * self.rows as f64,
        )
    }

    /// Size the full image is scaled to so each tile shows one slice of it.
    pub fn background_size(&self) -> (f64, f64) {
        self.board_size()
    }

    /// CSS `grid-template-columns` value, e.g. `repeat(10, 76.4px)`.
    pub fn grid_template_columns(&self) -> String {
        format!("repeat({}, {}px)", self.columns, self.tile_size)
    }

    /// CSS `grid-template-rows` value.
    pub fn grid_template_rows(&self) -> String {
        format!("repeat({}, {}px)", self.rows, self.tile_size)
    }

    /// One-line human summary used by the CLI.
    pub fn summary(&self) -> String {
        let (board_w, board_h) = self.board_size();
        format!(
            "{}x{} {:?}: {}x{} tiles of {:.2}px, padding {:.2}px, board {:.2}x{:.2}px",
            self.width,
            self.height,
            self.orientation,
            self.columns,
            self.rows,
            self.tile_size,
            self.padding,
            board_w,
            board_h
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_landscape_full_hd() {
        let layout = compute_layout(1920.0, 1080.0);
        let padding: f64 = 1080.0 * 0.03;
        let expected = ((1080.0 - 2.0 * padding - 160.0) / 5.0).min((1920.0 - 2.0 * padding) / 10.0);

        assert!(layout.is_landscape());
        assert_eq!((layout.columns, layout.rows), (10, 5));
        assert!((layout.padding - 32.4).abs() < EPSILON, "padding {}", layout.padding);
        assert!(
            (layout.tile_size - expected).abs() < EPSILON,
            "tile size {} != {expected}",
            layout.tile_size
        );
        assert!((layout.tile_size - 171.04).abs() < 1e-6);
    }

    #[test]
    fn test_portrait_full_hd() {
        let layout = compute_layout(1080.0, 1920.0);
        let padding: f64 = 1080.0 * 0.03;
        let expected = ((1080.0 - 2.0 * padding) / 5.0).min((1920.0 - 2.0 * padding) / 10.0);

        assert!(!layout.is_landscape());
        assert_eq!((layout.columns, layout.rows), (5, 10));
        assert!(
            (layout.tile_size - expected).abs() < EPSILON,
            "tile size {} != {expected}",
            layout.tile_size
        );
        // no header reservation in portrait
        assert!((layout.tile_size - 185.52).abs() < 1e-6);
    }

    #[test]
    fn test_square_viewport_is_portrait() {
        let layout = compute_layout(900.0, 900.0);
        assert_eq!(layout.orientation, Orientation::Portrait);
        assert_eq!(layout.tile_count(), 50);
    }

    #[test]
    fn test_layout_is_pure() {
        assert_eq!(compute_layout(1234.0, 567.0), compute_layout(1234.0, 567.0));
    }

    #[test]
    fn test_degenerate_viewports_clamp_to_zero() {
        for (w, h) in [
            (0.0, 0.0),
            (0.0, 600.0),
            (800.0, 0.0),
            (400.0, 100.0),
            (-10.0, 50.0),
            (f64::NAN, 600.0),
            (f64::INFINITY, f64::INFINITY),
        ] {
            let layout = compute_layout(w, h);
            assert!(
                layout.tile_size.is_finite() && layout.tile_size >= 0.0,
                "{w}x{h} gave tile size {}",
                layout.tile_size
            );
            assert!(layout.padding.is_finite() && layout.padding >= 0.0);
        }
        assert_eq!(compute_layout(0.0, 0.0).tile_size, 0.0);
        // too short to fit the header strip
        assert_eq!(compute_layout(400.0, 100.0).tile_size, 0.0);
    }

    #[test]
    fn test_grid_templates() {
        let layout = compute_layout(800.0, 600.0);
        assert_eq!(layout.grid_template_columns(), "repeat(10, 76.4px)");
        assert_eq!(layout.grid_template_rows(), "repeat(5, 76.4px)");
    }

    #[test]
    fn test_summary_snapshot() {
        insta::assert_snapshot!(
            compute_layout(800.0, 600.0).summary(),
            @"800x600 Landscape: 10x5 tiles of 76.40px, padding 18.00px, board 764.00x382.00px"
        );
    }
}
