//! Word document rendering

use super::document::{document_blocks, SubmissionBlock};
use super::error::ExportError;
use crate::state::Submission;
use docx_rs::{BreakType, Docx, Paragraph, Run};
use std::io::Cursor;

/// Heading size in half-points
const HEADING_SIZE: usize = 28;

/// Turns submissions into document bytes
#[cfg_attr(test, mockall::automock)]
pub trait DocumentBuilder: Send + Sync {
    fn build(&self, submissions: &[Submission]) -> Result<Vec<u8>, ExportError>;
}

/// Builds an OOXML (.docx) package with docx-rs
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBuilder;

impl DocxBuilder {
    fn block_paragraph(block: &SubmissionBlock) -> Paragraph {
        let mut paragraph = Paragraph::new().add_run(
            Run::new()
                .add_text(&block.heading)
                .bold()
                .size(HEADING_SIZE),
        );
        for line in &block.lines {
            paragraph = paragraph.add_run(Self::line_run(line));
        }
        paragraph
    }

    /// A body line on its own row; embedded newlines become line breaks
    fn line_run(line: &str) -> Run {
        let mut run = Run::new();
        for piece in line.split('\n') {
            run = run.add_break(BreakType::TextWrapping).add_text(piece);
        }
        run
    }

    fn document(submissions: &[Submission]) -> Docx {
        document_blocks(submissions)
            .iter()
            .fold(Docx::new(), |docx, block| {
                docx.add_paragraph(Self::block_paragraph(block))
                    // blank separator line
                    .add_paragraph(Paragraph::new())
            })
    }
}

impl DocumentBuilder for DocxBuilder {
    fn build(&self, submissions: &[Submission]) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Cursor::new(Vec::new());
        Self::document(submissions)
            .build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::Package(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnquiryType, FormData};

    fn form(name: &str) -> FormData {
        FormData {
            name: name.to_string(),
            email: "lead@example.com".to_string(),
            mobile: "9876543210".to_string(),
            kind: Some(EnquiryType::Hospital),
            capacity: "40".to_string(),
            ..Default::default()
        }
    }

    fn submission(name: &str) -> Submission {
        Submission::new(form(name))
    }

    #[test]
    fn test_build_produces_zip_package() {
        let bytes = DocxBuilder.build(&[submission("Asha")]).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_more_submissions_make_larger_document() {
        let one = DocxBuilder.build(&[submission("Asha")]).unwrap();
        let three = DocxBuilder
            .build(&[submission("Asha"), submission("Ravi"), submission("Meera")])
            .unwrap();
        assert!(three.len() > one.len());
    }

    /// The `word/document.xml` part as it is written into the package
    fn document_xml(submissions: &[Submission]) -> String {
        String::from_utf8(DocxBuilder::document(submissions).build().document).unwrap()
    }

    #[test]
    fn test_document_xml_keeps_blocks_in_order() {
        let second = Submission::new(FormData {
            company_name: "Sun & <Co>".to_string(),
            ..form("Ravi")
        });
        let xml = document_xml(&[submission("Asha"), second]);

        let order = [
            "Submission #1",
            "Name: Asha",
            "Type: Hospital",
            "Capacity (KWP): 40",
            "Submission #2",
            "Name: Ravi",
            "Company: Sun &amp; &lt;Co&gt;",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|text| xml.find(text).unwrap_or_else(|| panic!("missing {text}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!xml.contains("Enquiry:"));
    }

    #[test]
    fn test_heading_run_is_bold_size_28() {
        let xml = document_xml(&[submission("Asha")]);
        let heading = xml.find("Submission #1").unwrap();
        let run_start = xml[..heading].rfind("<w:r>").unwrap();
        let props = &xml[run_start..heading];
        assert!(props.contains("<w:b"));
        assert!(props.contains(r#"w:val="28""#));
    }

    #[test]
    fn test_multiline_enquiry_keeps_line_breaks() {
        let sub = Submission::new(FormData {
            enquiry: "line one\nline two".to_string(),
            ..form("Asha")
        });
        let xml = document_xml(&[sub]);

        assert!(!xml.contains("line oneline two"));
        let first = xml.find("Enquiry: line one").unwrap();
        let second = xml.find("line two").unwrap();
        assert!(first < second);
        assert!(xml[first..second].contains("<w:br"));
    }

    #[test]
    fn test_line_run_breaks_before_each_piece() {
        let run = DocxBuilder::line_run("a\nb\nc");
        // break + text for every piece
        assert_eq!(run.children.len(), 6);
    }

    #[test]
    fn test_block_paragraph_has_heading_and_lines() {
        let block = SubmissionBlock::from_submission(1, &submission("Asha"));
        let paragraph = DocxBuilder::block_paragraph(&block);
        // heading run + one run per line
        assert_eq!(paragraph.children.len(), 1 + block.lines.len());
    }
}
