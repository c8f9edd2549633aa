//! Serializes laid-out pages into a PDF byte stream.
//!
//! Only base-14 Type1 fonts are referenced, so nothing is embedded. No
//! timestamps or random identifiers are written: identical pages produce
//! identical bytes.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::document::font_metrics::FontFace;
use crate::document::styles::{PageConfig, Rgb};
use crate::document::typeset::{DrawOp, PageLayout};
use crate::document::RenderError;

const PDF_VERSION: &str = "1.4";
const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Writes `pages` as a complete PDF document to `out`.
pub fn write_pdf<W: Write>(
    pages: &[PageLayout],
    config: &PageConfig,
    title: &str,
    out: &mut W,
) -> Result<(), RenderError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                config.width_pt.into(),
                config.height_pt.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(title),
        "Producer" => text_string(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();
    doc.save_to(out)?;
    Ok(())
}

fn page_operations(page: &PageLayout) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                face,
                size_pt,
                color,
                text,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("rg", rgb_operands(color)));
                ops.push(Operation::new(
                    "Tf",
                    vec![face.resource_name().into(), (*size_pt).into()],
                ));
                ops.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Hexadecimal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                thickness_pt,
                color,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("RG", rgb_operands(color)));
                ops.push(Operation::new("w", vec![(*thickness_pt).into()]));
                ops.push(Operation::new("m", vec![(*x1).into(), (*y).into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), (*y).into()]));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

fn rgb_operands(color: &Rgb) -> Vec<Object> {
    vec![color.r.into(), color.g.into(), color.b.into()]
}

/// Maps text onto WinAnsiEncoding (CP1252) for the simple Type1 fonts.
/// Characters outside the encoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{201a}' => 0x82,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}

/// PDF text string for the info dictionary: ASCII as a literal, anything
/// else as UTF-16BE with a byte-order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xfe, 0xff];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_win_ansi_ascii_is_identity() {
        assert_eq!(encode_win_ansi("Hello (World)"), b"Hello (World)".to_vec());
    }

    #[test]
    fn test_encode_win_ansi_bullet_and_latin1() {
        assert_eq!(encode_win_ansi("\u{2022} é"), vec![0x95, b' ', 0xe9]);
    }

    #[test]
    fn test_encode_win_ansi_unmappable_becomes_question_mark() {
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_text_string_non_ascii_has_bom() {
        match text_string("José") {
            Object::String(bytes, StringFormat::Hexadecimal) => {
                assert_eq!(&bytes[..2], &[0xfe, 0xff]);
                assert_eq!(bytes.len(), 2 + 4 * 2);
            }
            other => panic!("unexpected object {other:?}"),
        }
    }
}
