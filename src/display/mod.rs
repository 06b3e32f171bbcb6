//! Display-surface layer; all terminal concerns live here.
//!
//! The simulation draws through the [`Canvas`] trait: an addressable grid of
//! cells with clipping, plus frame blit/erase helpers. [`TerminalCanvas`]
//! backs it with a retained cell buffer flushed as crossterm commands once
//! per tick; [`BufferCanvas`] is the headless backend used by tests.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    QueueableCommand,
};

// ── Cells ────────────────────────────────────────────────────────────────────

/// Rendering emphasis of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStyle {
    #[default]
    Normal,
    Dim,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    symbol: char,
    style: CellStyle,
}

const BLANK: Cell = Cell { symbol: ' ', style: CellStyle::Normal };

// ── Frames ───────────────────────────────────────────────────────────────────

/// An opaque multi-line text block with cached extents.
///
/// Width is the longest line; shorter lines simply do not cover trailing
/// cells. Space characters are transparent when drawn.
#[derive(Clone, Debug)]
pub struct Frame {
    text: String,
    height: u16,
    width: u16,
}

impl Frame {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (height, width) = frame_size(&text);
        Frame { text, height, width }
    }

    /// (rows, columns) extents.
    pub fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

/// Extents of a multi-line text block: line count and longest line.
pub fn frame_size(text: &str) -> (u16, u16) {
    let height = text.lines().count() as u16;
    let width = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;
    (height, width)
}

// ── Canvas ───────────────────────────────────────────────────────────────────

/// A bounded, addressable character grid.
///
/// Writes are idempotent and clipped: cells outside the grid are silently
/// dropped, and there is no cursor state to disturb.
pub trait Canvas {
    /// Grid extents as (rows, columns).
    fn size(&self) -> (u16, u16);

    /// Write one character; out-of-bounds coordinates are ignored.
    fn put(&mut self, row: i32, column: i32, symbol: char, style: CellStyle);

    /// Retained-cell readback, mainly for headless tests.
    fn char_at(&self, row: i32, column: i32) -> char;

    /// Queue the single fire-and-forget audio cue.
    fn beep(&mut self);

    /// Push pending cells to the backing output. A no-op for in-memory
    /// backends.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Draw the playfield border ring along the outermost cells.
    fn border(&mut self) {
        let (rows, columns) = self.size();
        if rows < 2 || columns < 2 {
            return;
        }
        let bottom = i32::from(rows) - 1;
        let right = i32::from(columns) - 1;
        for column in 1..right {
            self.put(0, column, '─', CellStyle::Normal);
            self.put(bottom, column, '─', CellStyle::Normal);
        }
        for row in 1..bottom {
            self.put(row, 0, '│', CellStyle::Normal);
            self.put(row, right, '│', CellStyle::Normal);
        }
        self.put(0, 0, '┌', CellStyle::Normal);
        self.put(0, right, '┐', CellStyle::Normal);
        self.put(bottom, 0, '└', CellStyle::Normal);
        self.put(bottom, right, '┘', CellStyle::Normal);
    }
}

/// Draw a frame with its top-left corner at (`row`, `column`), skipping
/// spaces and clipping at the canvas edges.
pub fn draw_frame(canvas: &mut dyn Canvas, row: f64, column: f64, frame: &Frame) {
    blit(canvas, row, column, frame, false);
}

/// Erase a previously drawn frame: writes spaces over the frame's non-space
/// cells only, so the background underneath survives where the frame was
/// transparent.
pub fn erase_frame(canvas: &mut dyn Canvas, row: f64, column: f64, frame: &Frame) {
    blit(canvas, row, column, frame, true);
}

fn blit(canvas: &mut dyn Canvas, row: f64, column: f64, frame: &Frame, negative: bool) {
    let (rows, columns) = canvas.size();
    let start_row = row.round() as i32;
    let start_column = column.round() as i32;

    for (line_index, line) in frame.text.lines().enumerate() {
        let row = start_row + line_index as i32;
        if row < 0 {
            continue;
        }
        if row >= i32::from(rows) {
            break;
        }
        for (char_index, symbol) in line.chars().enumerate() {
            let column = start_column + char_index as i32;
            if column < 0 {
                continue;
            }
            if column >= i32::from(columns) {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            let symbol = if negative { ' ' } else { symbol };
            canvas.put(row, column, symbol, CellStyle::Normal);
        }
    }
}

/// Top-left anchor that centers `frame` on a (rows × columns) canvas.
pub fn centered_anchor(rows: u16, columns: u16, frame: &Frame) -> (f64, f64) {
    let (height, width) = frame.size();
    (
        (f64::from(rows) - f64::from(height)) / 2.0,
        (f64::from(columns) - f64::from(width)) / 2.0,
    )
}

// ── Terminal backend ─────────────────────────────────────────────────────────

/// Crossterm-backed canvas. Keeps the current and last-flushed cell buffers
/// and only queues commands for cells that changed since the previous flush.
pub struct TerminalCanvas<W: Write> {
    out: W,
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
    shown: Vec<Cell>,
    bell: bool,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, rows: u16, columns: u16) -> Self {
        let area = usize::from(rows) * usize::from(columns);
        TerminalCanvas {
            out,
            rows,
            columns,
            cells: vec![BLANK; area],
            shown: vec![BLANK; area],
            bell: false,
        }
    }

    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= i32::from(self.rows) || column >= i32::from(self.columns)
        {
            return None;
        }
        Some(row as usize * usize::from(self.columns) + column as usize)
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put(&mut self, row: i32, column: i32, symbol: char, style: CellStyle) {
        if let Some(index) = self.index(row, column) {
            self.cells[index] = Cell { symbol, style };
        }
    }

    fn char_at(&self, row: i32, column: i32) -> char {
        self.index(row, column)
            .map_or(' ', |index| self.cells[index].symbol)
    }

    fn beep(&mut self) {
        self.bell = true;
    }

    fn flush(&mut self) -> io::Result<()> {
        for index in 0..self.cells.len() {
            let cell = self.cells[index];
            if cell == self.shown[index] {
                continue;
            }
            let row = (index / usize::from(self.columns)) as u16;
            let column = (index % usize::from(self.columns)) as u16;
            self.out.queue(cursor::MoveTo(column, row))?;
            match cell.style {
                CellStyle::Normal => {
                    self.out.queue(Print(cell.symbol))?;
                }
                CellStyle::Dim => {
                    self.out.queue(SetAttribute(Attribute::Dim))?;
                    self.out.queue(Print(cell.symbol))?;
                    self.out.queue(SetAttribute(Attribute::Reset))?;
                }
                CellStyle::Bold => {
                    self.out.queue(SetAttribute(Attribute::Bold))?;
                    self.out.queue(Print(cell.symbol))?;
                    self.out.queue(SetAttribute(Attribute::Reset))?;
                }
            }
            self.shown[index] = cell;
        }
        if self.bell {
            self.out.queue(Print('\u{7}'))?;
            self.bell = false;
        }
        // Park the cursor in a harmless spot
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

// ── Headless backend ─────────────────────────────────────────────────────────

/// In-memory canvas for tests: same clipping semantics, no terminal.
pub struct BufferCanvas {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
    pub beeps: u32,
}

impl BufferCanvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        BufferCanvas {
            rows,
            columns,
            cells: vec![BLANK; usize::from(rows) * usize::from(columns)],
            beeps: 0,
        }
    }

    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= i32::from(self.rows) || column >= i32::from(self.columns)
        {
            return None;
        }
        Some(row as usize * usize::from(self.columns) + column as usize)
    }
}

impl Canvas for BufferCanvas {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put(&mut self, row: i32, column: i32, symbol: char, style: CellStyle) {
        if let Some(index) = self.index(row, column) {
            self.cells[index] = Cell { symbol, style };
        }
    }

    fn char_at(&self, row: i32, column: i32) -> char {
        self.index(row, column)
            .map_or(' ', |index| self.cells[index].symbol)
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
