use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::ResultRow,
};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 7.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
const LAYER: &str = "Results";

/// Column header, x offset in mm, and the widest cell it prints.
const COLUMNS: [(&str, f32, usize); 5] = [
    ("Name", MARGIN, 22),
    ("Quiz", 62.0, 24),
    ("Score", 112.0, 9),
    ("Percent", 132.0, 8),
    ("Submitted", 152.0, 20),
];

fn pdf_error(err: impl std::fmt::Display) -> AppError {
    AppError::InternalError(format!("PDF rendering failed: {}", err))
}

fn fit(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

fn percent_cell(percent: &str) -> String {
    let percent = percent.trim();
    if percent.is_empty() || percent.ends_with('%') {
        percent.to_string()
    } else {
        format!("{}%", percent)
    }
}

fn row_cells(row: &ResultRow) -> [String; 5] {
    let score = match (row.score.trim(), row.total.trim()) {
        (score, "") => score.to_string(),
        (score, total) => format!("{}/{}", score, total),
    };
    [
        row.name.clone(),
        row.quiz_title.clone(),
        score,
        percent_cell(&row.percent),
        row.submitted_at.clone(),
    ]
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn line(&mut self, cells: &[String], font: &IndirectFontRef) {
        for ((_, x, width), cell) in COLUMNS.iter().zip(cells) {
            self.layer
                .use_text(fit(cell, *width), BODY_SIZE, Mm(*x), Mm(self.y), font);
        }
        self.y -= LINE_HEIGHT;
    }
}

/// Renders an A4 results table: title, header row, one line per row,
/// repeating the header on each new page.
pub fn render_results_pdf(title: &str, rows: &[ResultRow]) -> AppResult<Vec<u8>> {
    if rows.is_empty() {
        return Err(AppError::ValidationError("No rows to export.".to_string()));
    }

    let (doc, first_page, first_layer) = PdfDocument::new(title, PAGE_WIDTH, PAGE_HEIGHT, LAYER);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let header: Vec<String> = COLUMNS.iter().map(|(name, _, _)| name.to_string()).collect();
    let top = PAGE_HEIGHT.0 - MARGIN;

    let layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(title, TITLE_SIZE, Mm(MARGIN), Mm(top), &bold);
    let mut cursor = Cursor {
        layer,
        y: top - 2.0 * LINE_HEIGHT,
    };
    cursor.line(&header, &bold);

    for row in rows {
        if cursor.y < MARGIN {
            let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER);
            cursor = Cursor {
                layer: doc.get_page(page).get_layer(layer),
                y: top,
            };
            cursor.line(&header, &bold);
        }
        cursor.line(&row_cells(row), &regular);
    }

    log::info!("Rendered results PDF with {} rows", rows.len());
    doc.save_to_bytes().map_err(pdf_error)
}

/// File name stem for the download: lower-case words joined by `-`.
pub fn filename_slug(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "quiz-results".to_string()
    } else {
        slug
    }
}
