//! Single-page PDF rendering of a certificate.
//!
//! Positions are authored in millimetres from the top-left corner of an A4
//! page and flipped to PDF's bottom-left origin when drawn.
//!
//! Text is set in the builtin Helvetica, which only encodes WinAnsi
//! (Windows-1252). [`layout`] maps other characters to their unaccented base
//! letters where a compatibility decomposition exists and to `?` otherwise, so
//! `Łódź` is drawn as `?ódz`. The HTML certificate keeps the original text.

use super::CertificateDocument;
use crate::error::{CreditError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const TITLE_FONT_SIZE: f32 = 16.0;
const FIELD_FONT_SIZE: f32 = 12.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TITLE_TOP_MM: f32 = 20.0;
const FIELDS_TOP_MM: f32 = 40.0;
const FIELD_SPACING_MM: f32 = 10.0;

/// One line of text placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font_size: f32,
    pub x_mm: f32,
    /// Distance from the top edge.
    pub y_mm: f32,
}

pub fn layout(document: &CertificateDocument) -> Vec<TextRun> {
    let mut runs = vec![TextRun {
        text: winansi_text(document.title),
        font_size: TITLE_FONT_SIZE,
        x_mm: LEFT_MARGIN_MM,
        y_mm: TITLE_TOP_MM,
    }];

    for (i, (label, value)) in document.fields().into_iter().enumerate() {
        runs.push(TextRun {
            text: winansi_text(&format!("{}: {}", label, value)),
            font_size: FIELD_FONT_SIZE,
            x_mm: LEFT_MARGIN_MM,
            y_mm: FIELDS_TOP_MM + FIELD_SPACING_MM * i as f32,
        });
    }
    runs
}

/// Windows-1252 characters outside Latin-1.
const WINANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

fn is_winansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WINANSI_EXTRAS.contains(c)
}

fn winansi_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_winansi(c) {
            out.push(c);
            continue;
        }
        let base: String = std::iter::once(c)
            .nfkd()
            .filter(|d| !is_combining_mark(*d))
            .collect();
        if !base.is_empty() && base.chars().all(is_winansi) {
            out.push_str(&base);
        } else {
            out.push('?');
        }
    }
    out
}

pub fn render(document: &CertificateDocument) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("{} {}", document.title, document.id),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Certificate",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CreditError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    for run in layout(document) {
        layer.use_text(
            run.text,
            run.font_size,
            Mm(run.x_mm),
            Mm(PAGE_HEIGHT_MM - run.y_mm),
            &font,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| CreditError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, Status};

    fn document() -> CertificateDocument {
        CertificateDocument::new(
            &Record::new("X", "Forest1", 2021, Status::Retired),
            "3/14/2024, 9:05:07 AM".to_string(),
        )
    }

    #[test]
    fn layout_places_title_above_fields() {
        let runs = layout(&document());

        assert_eq!(runs.len(), 6);
        assert_eq!(runs[0].text, "Retirement Certificate");
        assert_eq!(runs[0].font_size, 16.0);
        assert_eq!(runs[1].text, "UNIC ID: X");
        assert_eq!(runs[2].text, "Project Name: Forest1");
        assert_eq!(runs[3].text, "Vintage: 2021");
        assert_eq!(runs[4].text, "Status: retired");
        assert_eq!(runs[5].text, "Timestamp: 3/14/2024, 9:05:07 AM");

        let ys: Vec<f32> = runs.iter().map(|r| r.y_mm).collect();
        assert_eq!(ys, vec![20.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
        assert!(runs[1..].iter().all(|r| r.font_size == 12.0));
    }

    #[test]
    fn layout_maps_text_the_builtin_font_cannot_encode() {
        let doc = CertificateDocument::new(
            &Record::new("Ｘ-1", "Łódź Wetlands – “Café”", 2021, Status::Active),
            "3/14/2024, 9:05:07 AM".to_string(),
        );
        let runs = layout(&doc);

        assert_eq!(runs[1].text, "UNIC ID: X-1");
        assert_eq!(runs[2].text, "Project Name: ?ódz Wetlands – “Café”");
        assert_eq!(winansi_text("森林 €5"), "?? €5");
    }

    #[test]
    fn renders_a_pdf() {
        let bytes = render(&document()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
