use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};

use super::error::DocumentError;

/// File kinds the upload form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    Csv,
    Spreadsheet,
}

impl FileKind {
    /// Classify an upload from its declared content type, falling back to the
    /// filename extension for spreadsheets (browsers are inconsistent there).
    pub fn detect(content_type: &str, file_name: &str) -> Option<FileKind> {
        let content_type = content_type.to_ascii_lowercase();
        let file_name = file_name.to_ascii_lowercase();

        if content_type.contains("csv") || file_name.ends_with(".csv") {
            Some(FileKind::Csv)
        } else if content_type.contains("pdf") || file_name.ends_with(".pdf") {
            Some(FileKind::Pdf)
        } else if content_type.contains("spreadsheet")
            || content_type.contains("excel")
            || file_name.ends_with(".xlsx")
            || file_name.ends_with(".xls")
        {
            Some(FileKind::Spreadsheet)
        } else if content_type.starts_with("text") || file_name.ends_with(".txt") {
            Some(FileKind::PlainText)
        } else {
            None
        }
    }
}

/// Extract the textual content of an uploaded file.
///
/// PDF pages that yield no text contribute an empty string rather than
/// failing the whole document. Tabular files are flattened to
/// tab-separated lines.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, DocumentError> {
    match kind {
        FileKind::PlainText => extract_plain_text(bytes),
        FileKind::Pdf => extract_pdf(bytes),
        FileKind::Csv => extract_csv(bytes),
        FileKind::Spreadsheet => extract_spreadsheet(bytes),
    }
}

fn extract_plain_text(bytes: &[u8]) -> Result<String, DocumentError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| DocumentError::Encoding(e.to_string()))
}

fn extract_pdf(bytes: &[u8]) -> Result<String, DocumentError> {
    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| DocumentError::Parse(e.to_string()))?;

    let mut text = String::new();
    // get_pages returns a BTreeMap keyed by page number, so iteration
    // follows document order.
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number]).unwrap_or_default();
        text.push_str(&page_text);
    }

    Ok(text)
}

fn extract_csv(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DocumentError::Parse(e.to_string()))?;
        lines.push(record.iter().collect::<Vec<_>>().join("\t"));
    }

    Ok(lines.join("\n"))
}

fn extract_spreadsheet(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| DocumentError::Parse(e.to_string()))?;

    // First sheet only, matching what a casual upload expects.
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DocumentError::Parse("workbook has no sheets".to_string()))?
        .map_err(|e| DocumentError::Parse(e.to_string()))?;

    let lines: Vec<String> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use pretty_assertions::assert_eq;

    /// Build a PDF in memory with one page per entry in `page_texts`.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            FileKind::detect("text/plain", "notes.txt"),
            Some(FileKind::PlainText)
        );
        assert_eq!(
            FileKind::detect("application/pdf", "report.pdf"),
            Some(FileKind::Pdf)
        );
        assert_eq!(FileKind::detect("text/csv", "data.csv"), Some(FileKind::Csv));
        assert_eq!(
            FileKind::detect(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "sheet.xlsx"
            ),
            Some(FileKind::Spreadsheet)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            FileKind::detect("application/octet-stream", "legacy.xls"),
            Some(FileKind::Spreadsheet)
        );
        assert_eq!(
            FileKind::detect("application/octet-stream", "data.csv"),
            Some(FileKind::Csv)
        );
    }

    #[test]
    fn test_detect_rejects_unknown() {
        assert_eq!(FileKind::detect("image/png", "photo.png"), None);
        assert_eq!(FileKind::detect("application/zip", "archive.zip"), None);
    }

    #[test]
    fn test_plain_text_decodes_utf8() {
        let text = extract_text(FileKind::PlainText, "Grüße aus Köln".as_bytes()).unwrap();
        assert_eq!(text, "Grüße aus Köln");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let result = extract_text(FileKind::PlainText, &[0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(DocumentError::Encoding(_))));
    }

    #[test]
    fn test_csv_flattens_rows() {
        let bytes = b"name,city\nAda,London\nLin,Beijing\n";
        let text = extract_text(FileKind::Csv, bytes).unwrap();
        assert_eq!(text, "name\tcity\nAda\tLondon\nLin\tBeijing");
    }

    #[test]
    fn test_csv_handles_ragged_rows() {
        let bytes = b"a,b,c\nd,e\n";
        let text = extract_text(FileKind::Csv, bytes).unwrap();
        assert!(text.contains("a\tb\tc"));
        assert!(text.contains("d\te"));
    }

    #[test]
    fn test_pdf_extracts_page_text() {
        let bytes = build_pdf(&["Hello from a PDF"]);
        let text = extract_text(FileKind::Pdf, &bytes).unwrap();
        assert!(text.contains("Hello from a PDF"), "got: {text:?}");
    }

    #[test]
    fn test_pdf_concatenates_pages_in_order() {
        let bytes = build_pdf(&["first page marker", "second page marker"]);
        let text = extract_text(FileKind::Pdf, &bytes).unwrap();

        let first = text.find("first page marker").expect("first page missing");
        let second = text.find("second page marker").expect("second page missing");
        assert!(first < second, "pages out of order: {text:?}");
    }

    #[test]
    fn test_pdf_garbage_is_a_parse_error() {
        let result = extract_text(FileKind::Pdf, b"not a pdf at all");
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_spreadsheet_garbage_is_a_parse_error() {
        let result = extract_text(FileKind::Spreadsheet, b"not a workbook");
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }
}
