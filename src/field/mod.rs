use ratatui::prelude::*;
use ratatui::text::{Line, Span};

/// 24-bit RGB pixel color.
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

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Owned pixel buffer the renderer draws into. Out-of-bounds writes are
/// clipped, so callers may draw pieces that are still above the visible area.
pub struct Field {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Field {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn reset(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn draw(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Flush the buffer into terminal lines, two pixel rows per line: the
    /// upper-half-block glyph carries the top pixel in its foreground and the
    /// bottom pixel in its background. Runs of equal color pairs share a span.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height / 2);
        for row in 0..self.height / 2 {
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_pair: Option<(Rgb, Rgb)> = None;
            for x in 0..self.width {
                let top = self.pixels[(row * 2) * self.width + x];
                let bottom = self.pixels[(row * 2 + 1) * self.width + x];
                if run_pair != Some((top, bottom)) {
                    if let Some((t, b)) = run_pair {
                        spans.push(span_for(std::mem::take(&mut run), t, b));
                    }
                    run_pair = Some((top, bottom));
                }
                run.push('▀');
            }
            if let Some((t, b)) = run_pair {
                spans.push(span_for(run, t, b));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn span_for(run: String, top: Rgb, bottom: Rgb) -> Span<'static> {
    Span::styled(
        run,
        Style::default().fg(Color::from(top)).bg(Color::from(bottom)),
    )
}
