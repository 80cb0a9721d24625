use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Bordered table with one header row
#[derive(Debug, Default, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<ColoredText>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let aligns = vec![Align::Left; headers.len()];
        Self {
            headers,
            aligns,
            rows: Vec::new(),
        }
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Missing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, cells: Vec<ColoredText>) {
        self.rows.push(cells);
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.to_string().width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let widths = self.column_widths();
        let b = |c: BorderChar| c.render(supports_unicode);

        let rule = |left: BorderChar, mid: BorderChar, right: BorderChar| {
            let segments: Vec<String> = widths
                .iter()
                .map(|w| b(BorderChar::Horizontal).repeat(w + 2))
                .collect();
            let line = format!("{}{}{}", b(left), segments.join(b(mid)), b(right));
            color_border(&line, supports_color)
        };

        let mut out = String::new();
        out.push_str(&rule(
            BorderChar::TopLeft,
            BorderChar::TopTee,
            BorderChar::TopRight,
        ));
        out.push('\n');

        let header_cells: Vec<ColoredText> = self
            .headers
            .iter()
            .map(|h| ColoredText::plain(h.clone()).bold())
            .collect();
        out.push_str(&self.render_row(&header_cells, &widths, supports_color, supports_unicode));

        out.push_str(&rule(
            BorderChar::LeftTee,
            BorderChar::Cross,
            BorderChar::RightTee,
        ));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_row(row, &widths, supports_color, supports_unicode));
        }

        out.push_str(&rule(
            BorderChar::BottomLeft,
            BorderChar::BottomTee,
            BorderChar::BottomRight,
        ));
        out.push('\n');
        out
    }

    fn render_row(
        &self,
        cells: &[ColoredText],
        widths: &[usize],
        supports_color: bool,
        supports_unicode: bool,
    ) -> String {
        let v = color_border(BorderChar::Vertical.render(supports_unicode), supports_color);
        let mut line = v.clone();
        for (i, width) in widths.iter().enumerate() {
            let empty = ColoredText::plain("");
            let cell = cells.get(i).unwrap_or(&empty);
            let pad = " ".repeat(width.saturating_sub(cell.to_string().width()));
            let text = cell.render(supports_color);

            line.push(' ');
            match self.aligns.get(i).copied().unwrap_or_default() {
                Align::Left => {
                    line.push_str(&text);
                    line.push_str(&pad);
                }
                Align::Right => {
                    line.push_str(&pad);
                    line.push_str(&text);
                }
            }
            line.push(' ');
            line.push_str(&v);
        }
        line.push('\n');
        line
    }
}

fn color_border(s: &str, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    format!("{}", s.with(theme::colors::DIM))
}
