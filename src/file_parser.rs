// src/file_parser.rs
//! Uploaded file to plain text, routed by the declared media type.

use docx_rs::{
    read_docx, DocumentChild, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::fmt;
use tracing::{debug, info};

use crate::error::{JobError, Result};
use crate::utils::PDF_MEDIA_TYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    PlainText,
}

impl DocumentKind {
    /// `application/pdf` is a PDF, anything mentioning "word" is a Word
    /// document, everything else is read as UTF-8 text.
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type == PDF_MEDIA_TYPE {
            Self::Pdf
        } else if media_type.contains("word") {
            Self::Word
        } else {
            Self::PlainText
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Word => write!(f, "Word"),
            Self::PlainText => write!(f, "plain text"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub file_name: Option<String>,
}

impl UploadedFile {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

pub struct FileParser;

impl FileParser {
    /// Decode on the blocking pool; PDF parsing in particular is CPU bound.
    pub async fn to_text(file: UploadedFile) -> Result<String> {
        let kind = DocumentKind::from_media_type(&file.media_type);
        info!(
            "Decoding {} upload ({} bytes, {})",
            kind,
            file.bytes.len(),
            file.file_name.as_deref().unwrap_or("unnamed")
        );

        tokio::task::spawn_blocking(move || Self::decode(&file.bytes, &file.media_type))
            .await
            .map_err(|e| JobError::Decode {
                kind,
                source: anyhow::Error::new(e),
            })?
    }

    pub fn decode(bytes: &[u8], media_type: &str) -> Result<String> {
        let kind = DocumentKind::from_media_type(media_type);
        let text = match kind {
            DocumentKind::Pdf => pdf_to_text(bytes),
            DocumentKind::Word => docx_to_text(bytes),
            DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
        .map_err(|source| JobError::Decode { kind, source })?;

        debug!("Decoded {} chars of {} text", text.chars().count(), kind);
        Ok(text)
    }
}

fn pdf_to_text(bytes: &[u8]) -> anyhow::Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow::anyhow!("pdf-extract error: {:?}", e))
}

fn docx_to_text(bytes: &[u8]) -> anyhow::Result<String> {
    let docx = read_docx(bytes).map_err(|e| anyhow::anyhow!("docx-rs parse error: {:?}", e))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => paragraphs.push(paragraph_text(para)),
            DocumentChild::Table(table) => push_table_text(table, &mut paragraphs),
            _ => {}
        }
    }

    paragraphs.retain(|text| !text.trim().is_empty());
    Ok(paragraphs.join("\n"))
}

/// Cell paragraphs in row order. Nested tables are read after the table
/// that holds them.
fn push_table_text(table: &Table, out: &mut Vec<String>) {
    let mut pending = vec![table];
    while let Some(table) = pending.pop() {
        for row in &table.rows {
            let TableChild::TableRow(row) = row;
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell;
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(para) => out.push(paragraph_text(para)),
                        TableCellContent::Table(nested) => pending.push(nested),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Runs of one paragraph are parts of the same sentence, so no separator.
/// Hyperlink runs are read like any other run.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    let mut pending: Vec<&ParagraphChild> = para.children.iter().rev().collect();
    while let Some(child) = pending.pop() {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => pending.extend(link.children.iter().rev()),
            _ => {}
        }
    }
    text
}
