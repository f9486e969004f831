// src/export/pdf.rs

use crate::export::model::{row_to_cells, sheet_headers};
use crate::models::TimesheetTable;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const CM: f32 = 28.35;

/// Single-page A4 attendance sheet writer.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin_top: f32,
    margin_left: f32,
    info_row_h: f32,
    row_h: f32,
    col_widths: [f32; 6],

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    info_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        // WinAnsi so Latin-1 accents (á, ç, ã) print with the base-14 fonts
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin_top: 3.0 * CM,
            margin_left: 0.8 * CM,
            info_row_h: 0.7 * CM,
            row_h: 0.65 * CM,
            col_widths: [3.0 * CM, 2.5 * CM, 3.0 * CM, 3.0 * CM, 3.0 * CM, 3.0 * CM],

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            info_font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);
        drop(fonts);
        drop(resources);
        drop(page);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn table_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Horizontally centred in `[x, x + w]`, vertically centred in a row of height `h`
    /// whose bottom edge is `y`.
    #[allow(clippy::too_many_arguments)]
    fn draw_centered(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        size: f32,
        bold: bool,
        text: &str,
    ) {
        let text_w = approx_text_width(text, size);
        let tx = x + ((w - text_w) / 2.0).max(2.0);
        let ty = y + (h - size) / 2.0 + size * 0.2;
        self.draw_text(content, tx, ty, size, bold, text);
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_row(&self, content: &mut Content, y: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin_left, y, self.table_width(), h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Draw a full six-column row with bottom edge at `y`.
    fn draw_row(&self, content: &mut Content, y: f32, h: f32, cells: &[String], bold: bool) {
        let mut x = self.margin_left;
        for (i, w) in self.col_widths.iter().enumerate() {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            if !text.is_empty() {
                self.draw_centered(content, x, y, *w, h, self.font_size, bold, text);
            }
            self.draw_cell_borders(content, x, y, *w, h);
            x += w;
        }
    }

    /// Label cell in the first column, value spanning the other five.
    fn draw_info_row(&self, content: &mut Content, y: f32, label: &str, value: &str) {
        let h = self.info_row_h;
        let first = self.col_widths[0];
        let rest = self.table_width() - first;
        let size = self.info_font_size;

        self.draw_centered(content, self.margin_left, y, first, h, size, true, label);
        self.draw_cell_borders(content, self.margin_left, y, first, h);

        let vx = self.margin_left + first;
        self.draw_centered(content, vx, y, rest, h, size, false, value);
        self.draw_cell_borders(content, vx, y, rest, h);
    }

    /// Lay out the whole sheet: title, info rows, day rows, total, signatures.
    pub fn write_timesheet(&mut self, table: &TimesheetTable) {
        let labels = table.labels();
        let mut content = self.new_page();

        let mut y = self.page_h - self.margin_top;

        // Title
        self.draw_centered(
            &mut content,
            self.margin_left,
            y,
            self.table_width(),
            self.title_font_size,
            self.title_font_size,
            true,
            labels.title,
        );
        y -= 0.5 * CM + self.title_font_size;

        // Name + month/year
        y -= self.info_row_h;
        self.draw_info_row(&mut content, y, labels.name, &table.employee);
        y -= self.info_row_h;
        let month_year = format!("{}/{}", table.month_name, table.year);
        self.draw_info_row(&mut content, y, labels.month_year, &month_year);

        // Column header
        y -= self.info_row_h;
        self.fill_row(&mut content, y, self.info_row_h, (0.85, 0.89, 0.95));
        let headers: Vec<String> = sheet_headers(labels)
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.draw_row(&mut content, y, self.info_row_h, &headers, true);

        // Day rows
        for row in &table.rows {
            y -= self.row_h;
            self.draw_row(&mut content, y, self.row_h, &row_to_cells(row), false);
        }

        // Total
        y -= self.row_h;
        self.fill_row(&mut content, y, self.row_h, (0.91, 0.90, 0.90));
        let mut total = vec![labels.total.to_string()];
        if table.total_minutes() > 0 {
            total.extend([String::new(), String::new(), String::new()]);
            total.push(crate::utils::time::format_minutes(table.total_minutes(), false));
        }
        self.draw_row(&mut content, y, self.row_h, &total, true);

        // Signatures
        y -= 1.0 * CM + 1.5 * CM;
        let half = self.table_width() / 2.0;
        let people = [
            (&table.employee, labels.employee_signature),
            (&table.supervisor, labels.supervisor_signature),
        ];
        for (i, (name, caption)) in people.iter().enumerate() {
            let x = self.margin_left + half * i as f32;
            content.save_state();
            content.set_line_width(0.5);
            content.move_to(x + 1.0 * CM, y);
            content.line_to(x + half - 1.0 * CM, y);
            content.stroke();
            content.restore_state();

            let size = self.font_size;
            self.draw_centered(&mut content, x, y - 14.0, half, size, size, false, name);
            self.draw_centered(&mut content, x, y - 28.0, half, size, size, false, caption);
        }

        self.finalize_page(content);
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Latin-1 subset of WinAnsi; anything outside it prints as `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

// Helvetica averages a little over half an em per glyph.
fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}
