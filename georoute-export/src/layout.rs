//! Top-down page layout over raw PDF content operations.
//!
//! [`PageWriter`] keeps a cursor that moves down the page as content is
//! added and starts a new page when the next block would run into the footer.

#![expect(
    clippy::float_arithmetic,
    reason = "page layout works in floating-point PDF points"
)]

use lopdf::Object;
use lopdf::content::Operation;

use crate::text::{win_ansi, wrap};

/// Page margin on every side, in points.
pub(crate) const MARGIN: f32 = 40.0;
/// Space kept free above the bottom margin for the footer.
const FOOTER_BAND: f32 = 24.0;
/// Baseline-to-baseline distance as a multiple of the font size.
const LINE_SPACING: f32 = 1.35;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Standard fonts registered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

impl Font {
    pub(crate) const fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    pub(crate) const fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }
}

/// Font, size and fill colour for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextStyle {
    pub(crate) font: Font,
    pub(crate) size: f32,
    pub(crate) color: [f32; 3],
}

impl TextStyle {
    pub(crate) const fn new(font: Font, size: f32, color: [f32; 3]) -> Self {
        Self { font, size, color }
    }
}

/// A piece of text placed at a horizontal offset within a row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell<'a> {
    pub(crate) offset: f32,
    pub(crate) text: &'a str,
    pub(crate) style: TextStyle,
}

/// Estimated rendered width of `text`.
pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    let chars = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    f32::from(chars) * size * GLYPH_WIDTH
}

#[derive(Debug)]
pub(crate) struct PageWriter {
    width: f32,
    height: f32,
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            current: Vec::new(),
            y: height - MARGIN,
        }
    }

    pub(crate) fn content_width(&self) -> f32 {
        self.width - 2.0 * MARGIN
    }

    /// Space left above the footer band on the current page.
    pub(crate) fn remaining(&self) -> f32 {
        self.y - MARGIN - FOOTER_BAND
    }

    /// Start a new page unless `height` still fits on the current one.
    ///
    /// Blocks taller than a whole page are placed at the top of a fresh
    /// page and allowed to overflow it.
    pub(crate) fn reserve(&mut self, height: f32) {
        if height > self.remaining() && !self.current.is_empty() {
            self.break_page();
        }
    }

    pub(crate) fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.height - MARGIN;
    }

    pub(crate) fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    /// Write `text` wrapped to the content width, starting at `indent`.
    pub(crate) fn paragraph(&mut self, indent: f32, text: &str, style: TextStyle) {
        for line in self.wrap_at(indent, text, style) {
            self.row(&[Cell {
                offset: indent,
                text: &line,
                style,
            }]);
        }
    }

    /// Like [`Self::paragraph`], with `label` sharing the first baseline.
    pub(crate) fn labelled(&mut self, label: Cell<'_>, indent: f32, text: &str, style: TextStyle) {
        let mut lines = self.wrap_at(indent, text, style).into_iter();
        let first = lines.next().unwrap_or_default();
        self.row(&[
            label,
            Cell {
                offset: indent,
                text: &first,
                style,
            },
        ]);
        for line in lines {
            self.row(&[Cell {
                offset: indent,
                text: &line,
                style,
            }]);
        }
    }

    fn wrap_at(&self, indent: f32, text: &str, style: TextStyle) -> Vec<String> {
        let available = (self.content_width() - indent).max(style.size);
        wrap(text, chars_per_line(available, style.size))
    }

    /// Write several cells on a shared baseline.
    pub(crate) fn row(&mut self, cells: &[Cell<'_>]) {
        let size = cells.iter().map(|c| c.style.size).fold(0.0, f32::max);
        let line_height = size * LINE_SPACING;
        self.reserve(line_height);
        self.y -= size;
        for cell in cells {
            let ops = text_ops(MARGIN + cell.offset, self.y, cell.style, cell.text);
            self.current.extend(ops);
        }
        self.y -= line_height - size;
    }

    /// Write `left` and `right` on one baseline, aligned to opposite margins.
    pub(crate) fn split_row(&mut self, left: &str, right: &str, style: TextStyle) {
        let right_offset = self.content_width() - text_width(right, style.size);
        self.row(&[
            Cell {
                offset: 0.0,
                text: left,
                style,
            },
            Cell {
                offset: right_offset.max(0.0),
                text: right,
                style,
            },
        ]);
    }

    /// Draw a thin horizontal rule across the content width.
    pub(crate) fn rule(&mut self, color: [f32; 3]) {
        self.reserve(6.0);
        self.y -= 3.0;
        let [r, g, b] = color;
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new("w", vec![0.75_f32.into()]),
            Operation::new("RG", vec![r.into(), g.into(), b.into()]),
            Operation::new("m", vec![MARGIN.into(), self.y.into()]),
            Operation::new("l", vec![(self.width - MARGIN).into(), self.y.into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
        self.y -= 3.0;
    }

    /// Paint the image XObject `name` scaled to `width` x `height` points.
    pub(crate) fn image(&mut self, name: &str, width: f32, height: f32) {
        self.reserve(height);
        self.y -= height;
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0_i64.into(),
                    0_i64.into(),
                    height.into(),
                    MARGIN.into(),
                    self.y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Close the last page and append a centred footer to every page.
    ///
    /// `footer` receives the 1-based page number and the page count.
    pub(crate) fn finish(
        mut self,
        style: TextStyle,
        footer: impl Fn(usize, usize) -> String,
    ) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }
        let total = self.pages.len();
        let width = self.width;
        for (index, page) in self.pages.iter_mut().enumerate() {
            let text = footer(index + 1, total);
            let x = ((width - text_width(&text, style.size)) / 2.0).max(MARGIN);
            page.extend(text_ops(x, MARGIN, style, &text));
        }
        self.pages
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "line capacity is a small positive whole number of glyphs"
)]
fn chars_per_line(width: f32, size: f32) -> usize {
    ((width / (size * GLYPH_WIDTH)).floor() as usize).max(1)
}

fn text_ops(x: f32, y: f32, style: TextStyle, text: &str) -> [Operation; 6] {
    let [r, g, b] = style.color;
    [
        Operation::new("BT", vec![]),
        Operation::new("rg", vec![r.into(), g.into(), b.into()]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(style.font.resource().as_bytes().to_vec()),
                style.size.into(),
            ],
        ),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}
