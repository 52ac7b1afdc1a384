use crate::animate::{Frame, Point, CANVAS_SIZE};

const BLANK: char = ' ';
const OUTLINE: char = '#';

/// Character-grid stand-in for the 200x200 drawing surface.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    /// `cols` and `rows` are bumped up to 1 if 0 is passed in.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Replaces whatever was drawn before with `frame`.
    pub fn draw_frame(&mut self, frame: &Frame) {
        self.clear();
        self.draw_polygon(&frame.points);
        if let Some(total) = frame.label {
            self.draw_label(&total.to_string());
        }
    }

    /// Draws the closed outline through `points`.
    pub fn draw_polygon(&mut self, points: &[Point]) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(from, to);
        }
    }

    /// Writes `text` centred on the surface, cut to the canvas width.
    pub fn draw_label(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().take(self.cols).collect();
        let row = self.rows / 2;
        let start = (self.cols - chars.len()) / 2;
        for (offset, c) in chars.into_iter().enumerate() {
            self.cells[row * self.cols + start + offset] = c;
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let (x0, y0) = self.to_cell(from);
        let (x1, y1) = self.to_cell(to);
        // More samples than cells on the grid can't plot anything new.
        let limit = (self.cols + self.rows) as f64;
        let span = (x1 - x0).abs().max((y1 - y0).abs());
        let steps = if span.is_finite() {
            span.ceil().clamp(1.0, limit) as usize
        } else {
            return;
        };

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.plot(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
        }
    }

    fn to_cell(&self, point: Point) -> (f64, f64) {
        (
            point.x / CANVAS_SIZE * self.cols as f64,
            point.y / CANVAS_SIZE * self.rows as f64,
        )
    }

    fn plot(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x.round() as usize, y.round() as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = OUTLINE;
        }
    }
}
