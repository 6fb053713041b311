//! Reads a `.docx` file into the paragraph/run model
//!
//! Only direct run formatting is read (`w:rPr` of each `w:r`); styles are not resolved.

use crate::models::{Document, Paragraph, Rgb, Run};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Main document part inside the OOXML container
pub const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a valid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Missing document part '{0}'")]
    MissingPart(&'static str),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Open a `.docx` file and read its body paragraphs
pub fn read_docx(path: &Path) -> Result<Document, DocxError> {
    let io_error = |source| DocxError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = Vec::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_end(&mut xml).map_err(io_error)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(DocxError::MissingPart(DOCUMENT_PART))
        }
        Err(e) => return Err(e.into()),
    }

    let document = parse_document_xml(&xml)?;
    log::debug!(
        "Read {} paragraphs from {}",
        document.paragraphs.len(),
        path.display()
    );
    Ok(document)
}

/// Build the paragraph/run model from the XML of `word/document.xml`
///
/// Paragraphs nested inside another paragraph (text boxes) are skipped.
pub fn parse_document_xml(xml: &[u8]) -> Result<Document, DocxError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut paragraph: Option<Paragraph> = None;
    let mut run: Option<Run> = None;
    let mut nested = 0usize;
    let mut in_rpr = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"p" => {
                    if paragraph.is_some() {
                        nested += 1;
                    } else {
                        paragraph = Some(Paragraph::default());
                    }
                }
                _ if nested > 0 => {}
                b"r" if paragraph.is_some() => run = Some(Run::default()),
                b"rPr" => in_rpr = run.is_some(),
                b"t" => in_text = run.is_some(),
                name => {
                    if let (true, Some(run)) = (in_rpr, run.as_mut()) {
                        apply_property(run, name, e);
                    }
                }
            },
            Event::Empty(ref e) if nested == 0 => {
                if e.local_name().as_ref() == b"p" {
                    if paragraph.is_none() {
                        paragraphs.push(Paragraph::default());
                    }
                } else if let Some(run) = run.as_mut() {
                    match e.local_name().as_ref() {
                        b"tab" => run.text.push('\t'),
                        b"br" | b"cr" => run.text.push('\n'),
                        name if in_rpr => apply_property(run, name, e),
                        _ => {}
                    }
                }
            }
            Event::Text(ref e) if nested == 0 && in_text => {
                if let Some(run) = run.as_mut() {
                    run.text.push_str(&e.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"p" => {
                    if nested > 0 {
                        nested -= 1;
                    } else if let Some(done) = paragraph.take() {
                        paragraphs.push(done);
                    }
                }
                _ if nested > 0 => {}
                b"r" => {
                    if let (Some(done), Some(paragraph)) = (run.take(), paragraph.as_mut()) {
                        paragraph.runs.push(done);
                    }
                    in_rpr = false;
                    in_text = false;
                }
                b"rPr" => in_rpr = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(Document::new(paragraphs))
}

/// `w:val` attribute of a property element
fn val_attr(e: &BytesStart) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == b"val")
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

/// On/off properties are on unless `w:val` explicitly turns them off
fn toggle_on(val: Option<&str>) -> bool {
    !matches!(val, Some("0") | Some("false") | Some("off"))
}

fn apply_property(run: &mut Run, name: &[u8], e: &BytesStart) {
    let val = val_attr(e);
    match name {
        b"b" => run.bold = toggle_on(val.as_deref()),
        b"i" => run.italic = toggle_on(val.as_deref()),
        b"u" => run.underline = toggle_on(val.as_deref()) && val.as_deref() != Some("none"),
        b"color" => run.color = val.as_deref().and_then(Rgb::from_hex),
        _ => {}
    }
}
