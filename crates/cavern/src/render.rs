//! # ASCII Rendering
//!
//! Row-major text dump of a grid: one character per cell and a line break
//! after every `width` cells.

use cavern_core::Grid;

/// Glyph drawn for walls by [`render_default`].
pub const WALL_GLYPH: char = 'X';
/// Glyph drawn for floors by [`render_default`].
pub const FLOOR_GLYPH: char = ' ';

/// Renders `grid` with the given glyphs.
///
/// Every row, including the last, ends in `'\n'`.
#[must_use]
pub fn render_ascii(grid: &Grid, wall: char, floor: char) -> String {
    let glyph_bytes = wall.len_utf8().max(floor.len_utf8());
    let mut out = String::with_capacity(grid.size() * glyph_bytes + grid.height());

    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| if alive { wall } else { floor }));
        out.push('\n');
    }

    out
}

/// Renders `grid` with `X` for walls and a space for floors.
#[must_use]
pub fn render_default(grid: &Grid) -> String {
    render_ascii(grid, WALL_GLYPH, FLOOR_GLYPH)
}
