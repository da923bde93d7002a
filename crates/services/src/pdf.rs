use pgr_core::model::{REPORT_TITLE, ReportDocument};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Render the report onto a single A4 page.
///
/// Line positions are measured from the top edge; PDF coordinates start at the
/// bottom, so each offset is flipped against the page height.
///
/// # Errors
///
/// Returns `ExportError::Render` if the font cannot be embedded or the document
/// cannot be serialized.
pub fn render_pdf(document: &ReportDocument) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Conteúdo",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Render(format!("{err:?}")))?;

    {
        let canvas = doc.get_page(page).get_layer(layer);
        for line in document.lines() {
            canvas.use_text(
                line.text,
                line.font_size,
                Mm(line.left_mm),
                Mm(PAGE_HEIGHT_MM - line.top_mm),
                &font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|err| ExportError::Render(format!("{err:?}")))
}
