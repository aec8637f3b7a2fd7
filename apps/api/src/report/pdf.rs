//! PDF writer — draws already-paginated lines with the builtin Helvetica fonts.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::report::font_metrics::FontFace;
use crate::report::layout::{Page, PageConfig};
use crate::report::ReportError;

const MM_PER_PT: f32 = 25.4 / 72.0;
const LAYER_NAME: &str = "Text";

fn mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

/// Writes `pages` to `path`, one PDF page per layout page.
pub fn write_pdf(
    pages: &[Page],
    config: &PageConfig,
    title: &str,
    path: &Path,
) -> Result<(), ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        mm(config.width_pt),
        mm(config.height_pt),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;

    for (i, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(mm(config.width_pt), mm(config.height_pt), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font: &IndirectFontRef = match line.style.face() {
                FontFace::Helvetica => &regular,
                FontFace::HelveticaBold => &bold,
            };
            // PDF y grows upward from the bottom edge.
            layer.use_text(
                line.text.clone(),
                line.style.font_size(),
                mm(line.x_pt),
                mm(config.height_pt - line.baseline_pt),
                font,
            );
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;
    Ok(())
}
