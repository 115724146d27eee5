/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 dot grid (8 dots) plus one
/// display color. Unicode Braille patterns: U+2800 to U+28FF.
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    cells: Vec<GlyphCell>, // Row-major
}

/// One terminal character position: an 8-bit dot-occupancy mask and the
/// color that won the cell. `priority` tracks the winning category so a
/// later low-priority sample can add a dot without stealing the color.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct GlyphCell {
    pub mask: u8,
    pub color: u8,
    priority: u8,
}

impl GlyphCell {
    /// The Braille code point encoding this cell's dot pattern.
    pub fn glyph(&self) -> char {
        char::from_u32(0x2800 + self.mask as u32).unwrap_or(' ')
    }

    pub fn is_blank(&self) -> bool {
        self.mask == 0
    }
}

/// Map a sub-cell position (each in [0,1)) to its Braille dot bit.
/// Dot layout per character:
/// ```text
/// (0,0) (1,0)   bits: 0x01 0x08
/// (0,1) (1,1)   bits: 0x02 0x10
/// (0,2) (1,2)   bits: 0x04 0x20
/// (0,3) (1,3)   bits: 0x40 0x80
/// ```
#[inline(always)]
fn dot_bit(sub_x: f64, sub_y: f64) -> u8 {
    let col = if sub_x < 0.5 { 0 } else { 1 };
    let row = ((sub_y * 4.0) as usize).min(3);

    match (col, row) {
        (0, 0) => 0x01,
        (1, 0) => 0x08,
        (0, 1) => 0x02,
        (1, 1) => 0x10,
        (0, 2) => 0x04,
        (1, 2) => 0x20,
        (0, 3) => 0x40,
        _ => 0x80,
    }
}

impl BrailleCanvas {
    /// Create a blank canvas with the given character dimensions.
    /// Effective dot resolution: width*2 x height*4.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![GlyphCell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Plot one sample at a fractional character coordinate.
    ///
    /// The integer part selects the cell, the remainder selects one of the
    /// 8 dots. Occupancy accumulates with OR semantics: a dot once lit
    /// stays lit for the rest of the frame. The cell color goes to the
    /// highest-priority writer; within a priority tier the last write wins.
    /// Out-of-bounds and non-finite coordinates are dropped silently.
    pub fn plot(&mut self, px: f64, py: f64, color: u8, priority: u8) {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return;
        }

        let cx = px as usize;
        let cy = py as usize;
        if cx >= self.width || cy >= self.height {
            return;
        }

        let bit = dot_bit(px.fract(), py.fract());
        let cell = &mut self.cells[cy * self.width + cx];
        cell.mask |= bit;
        if priority >= cell.priority {
            cell.priority = priority;
            cell.color = color;
        }
    }

    /// OR a whole dot pattern into a cell by integer index. Used by the
    /// atmosphere pass, which works in cell space rather than dot space.
    pub fn overlay(&mut self, cx: usize, cy: usize, mask: u8, color: u8, priority: u8) {
        if cx >= self.width || cy >= self.height {
            return;
        }
        let cell = &mut self.cells[cy * self.width + cx];
        cell.mask |= mask;
        if priority >= cell.priority {
            cell.priority = priority;
            cell.color = color;
        }
    }

    /// Cell at (x, y); blank default if out of range.
    pub fn cell(&self, x: usize, y: usize) -> GlyphCell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            GlyphCell::default()
        }
    }

    /// Iterate rows of cells (for rendering into a terminal buffer).
    pub fn rows(&self) -> impl Iterator<Item = &[GlyphCell]> {
        self.cells.chunks(self.width)
    }

    /// Flat view of all cells, row-major.
    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Render the dot patterns as plain text (colors dropped).
    #[cfg(test)]
    pub fn to_string(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.plot(0.1, 0.1, 40, 0);
        assert_eq!(canvas.to_string(), "⠁"); // U+2801
        assert_eq!(canvas.cell(0, 0).color, 40);
    }

    #[test]
    fn test_all_dots() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for col in 0..2 {
            for row in 0..4 {
                canvas.plot(col as f64 * 0.5 + 0.1, row as f64 * 0.25 + 0.1, 0, 0);
            }
        }
        assert_eq!(canvas.to_string(), "⣿"); // U+28FF (all dots)
    }

    #[test]
    fn test_occupancy_is_or_only() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.plot(0.1, 0.1, 10, 3);
        let before = canvas.cell(0, 0).mask;
        // A later lower-priority write adds its dot but clears nothing
        canvas.plot(0.6, 0.6, 20, 0);
        let after = canvas.cell(0, 0);
        assert_eq!(after.mask & before, before);
        assert_ne!(after.mask, before);
        assert_eq!(after.color, 10); // high-priority color kept
    }

    #[test]
    fn test_priority_ties_last_write_wins() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.plot(0.1, 0.1, 10, 0);
        canvas.plot(0.6, 0.1, 20, 0);
        assert_eq!(canvas.cell(0, 0).color, 20);
    }

    #[test]
    fn test_higher_priority_takes_color() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.plot(0.1, 0.1, 10, 0);
        canvas.plot(0.6, 0.1, 99, 4);
        canvas.plot(0.1, 0.6, 10, 0);
        assert_eq!(canvas.cell(0, 0).color, 99);
    }

    #[test]
    fn test_out_of_bounds_dropped() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.plot(-0.5, 0.0, 1, 0);
        canvas.plot(2.0, 0.0, 1, 0);
        canvas.plot(0.0, f64::NAN, 1, 0);
        canvas.plot(f64::INFINITY, 0.0, 1, 0);
        assert!(canvas.cells().iter().all(|c| c.is_blank()));
    }

    #[test]
    fn test_diagonal() {
        let mut canvas = BrailleCanvas::new(2, 1);
        // Dots (0,0) (1,1) (2,2) (3,3) in dot space
        canvas.plot(0.0, 0.0, 0, 0);
        canvas.plot(0.5, 0.25, 0, 0);
        canvas.plot(1.0, 0.5, 0, 0);
        canvas.plot(1.5, 0.75, 0, 0);
        // First char: 0x01 | 0x10, second char: 0x04 | 0x80
        assert_eq!(canvas.to_string(), "⠑⢄");
    }
}
