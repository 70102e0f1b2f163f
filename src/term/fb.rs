//! Framebuffer and style types for terminal rendering.
//!
//! The buffer hands out whole rows as slices; the renderer diffs and
//! flushes row by row, so per-cell bounds checks never show up on the
//! drawing path.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling: foreground, background, bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(210, 210, 210),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place, reusing the allocation when possible.
    /// Contents are unspecified afterwards; callers redraw from scratch.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    /// One row of cells; None past the bottom edge.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = (y as usize) * width;
        Some(&mut self.cells[start..start + width])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    /// Out-of-bounds writes are dropped silently.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Write a string left to right, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        if let Some(row) = self.row_mut(y) {
            for (slot, ch) in row.iter_mut().skip(x as usize).zip(s.chars()) {
                *slot = Cell::new(ch, style);
            }
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            let py = y.saturating_add(dy);
            if let Some(row) = self.row_mut(py) {
                for slot in row.iter_mut().skip(x as usize).take(w as usize) {
                    *slot = Cell::new(ch, style);
                }
            }
        }
    }
}
