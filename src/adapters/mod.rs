//! Format adapters: file → canonical line sequence.
//!
//! One adapter exists per supported input kind. Selection is a closed
//! `match` over [`FileKind`] — never runtime string dispatch — and unknown
//! extensions fall back to the plain-text adapter, so adapting a file of an
//! unrecognized format is never an error by itself.
//!
//! Two failure regimes apply (see the crate error docs): the workbook
//! adapter degrades internally to descriptive fallback lines, while CSV and
//! IO failures propagate and abort the comparison.

mod delimited;
mod placeholder;
mod text;
mod traits;
mod workbook;

pub use delimited::DelimitedAdapter;
pub use placeholder::{ImageAdapter, PdfAdapter, WordProcessorAdapter};
pub use text::TextAdapter;
pub use traits::{byte_size, display_name, AdapterError, FileKind, FormatAdapter};
pub use workbook::{WorkbookAdapter, EMPTY_WORKSHEET_MARKER, ROW_MARKER, WORKSHEET_MARKER};

use crate::model::LineSequence;
use std::path::Path;

/// Adapt one input file into its canonical line sequence.
///
/// The adapter is chosen from the file extension; everything unrecognized
/// goes through the text adapter.
pub fn adapt_file(path: &Path) -> Result<LineSequence, AdapterError> {
    let kind = FileKind::from_path(path);
    adapter_for(kind).adapt(path)
}

/// The statically-known adapter for an input kind.
#[must_use]
pub fn adapter_for(kind: FileKind) -> &'static dyn FormatAdapter {
    match kind {
        FileKind::Text => &TextAdapter,
        FileKind::Delimited => &DelimitedAdapter,
        FileKind::Workbook => &WorkbookAdapter,
        FileKind::WordProcessor => &WordProcessorAdapter,
        FileKind::Pdf => &PdfAdapter,
        FileKind::Image => &ImageAdapter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_adapter_for_covers_every_kind() {
        for kind in [
            FileKind::Text,
            FileKind::Delimited,
            FileKind::Workbook,
            FileKind::WordProcessor,
            FileKind::Pdf,
            FileKind::Image,
        ] {
            assert_eq!(adapter_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_adapt_file_unknown_extension_uses_text() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        write!(file, "key=value\nother=thing").unwrap();

        let seq = adapt_file(file.path()).unwrap();
        assert_eq!(seq.kind, FileKind::Text);
        assert_eq!(seq.lines, vec!["key=value", "other=thing"]);
    }
}
