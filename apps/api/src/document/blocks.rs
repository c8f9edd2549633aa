//! Profile record -> ordered block sequence.
//!
//! Every section always appears. Empty sections get a single `-` paragraph so
//! the document shape never depends on what the user filled in.

use crate::profile::ProfileRecord;

/// Placeholder body for an empty section.
pub const PLACEHOLDER: &str = "-";

/// Gap inserted after the divider rule.
pub const DIVIDER_GAP_PT: f32 = 8.0;

/// One unit of renderable content, laid out top-to-bottom in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    ContactLine(String),
    Divider,
    SectionHeading(String),
    BodyParagraph(String),
    /// Item text only; the renderer adds the bullet glyph.
    BulletItem(String),
    /// Vertical gap in points.
    Spacer(f32),
}

/// Content of one fixed section: free text or a list of items.
pub enum SectionBody<'a> {
    Text(&'a str),
    Items(&'a [String]),
}

type SectionAccessor = for<'a> fn(&'a ProfileRecord) -> SectionBody<'a>;

fn about(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Text(&p.about)
}

fn skills(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Items(&p.skills)
}

fn education(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Text(&p.education)
}

fn projects(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Items(&p.projects)
}

fn certifications(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Items(&p.certifications)
}

fn achievements(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Items(&p.achievements)
}

fn interests(p: &ProfileRecord) -> SectionBody<'_> {
    SectionBody::Items(&p.interests)
}

/// Fixed section order of the document.
const SECTIONS: [(&str, SectionAccessor); 7] = [
    ("About Me", about),
    ("Skills", skills),
    ("Education", education),
    ("Projects", projects),
    ("Certifications", certifications),
    ("Achievements", achievements),
    ("Interests", interests),
];

/// `(heading, body)` for every fixed section, in document order.
pub fn sections(record: &ProfileRecord) -> impl Iterator<Item = (&'static str, SectionBody<'_>)> {
    SECTIONS
        .into_iter()
        .map(move |(title, accessor)| (title, accessor(record)))
}

/// Maps a profile record onto the fixed document template.
pub fn assemble(record: &ProfileRecord) -> Vec<Block> {
    let mut blocks = vec![Block::Title(record.display_name().to_string())];

    if let Some(contact) = record.contact_line() {
        blocks.push(Block::ContactLine(contact));
    }

    blocks.push(Block::Divider);
    blocks.push(Block::Spacer(DIVIDER_GAP_PT));

    for (title, body) in sections(record) {
        blocks.push(Block::SectionHeading(title.to_string()));
        match body {
            SectionBody::Text(text) if !text.is_empty() => {
                blocks.push(Block::BodyParagraph(text.to_string()));
            }
            SectionBody::Items(items) if !items.is_empty() => {
                blocks.extend(items.iter().cloned().map(Block::BulletItem));
            }
            SectionBody::Text(_) | SectionBody::Items(_) => {
                blocks.push(Block::BodyParagraph(PLACEHOLDER.to_string()));
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::SectionHeading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_profile_has_every_section_with_placeholders() {
        let blocks = assemble(&ProfileRecord::default());

        assert_eq!(blocks[0], Block::Title("Your Name".to_string()));
        assert_eq!(blocks[1], Block::Divider);
        assert_eq!(blocks[2], Block::Spacer(DIVIDER_GAP_PT));
        assert_eq!(
            headings(&blocks),
            vec![
                "About Me",
                "Skills",
                "Education",
                "Projects",
                "Certifications",
                "Achievements",
                "Interests"
            ]
        );

        let placeholders = blocks
            .iter()
            .filter(|b| **b == Block::BodyParagraph(PLACEHOLDER.to_string()))
            .count();
        assert_eq!(placeholders, 7);
        assert_eq!(blocks.len(), 3 + 7 * 2);
    }

    #[test]
    fn test_contact_line_follows_title() {
        let record = ProfileRecord {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        };
        let blocks = assemble(&record);
        assert_eq!(blocks[0], Block::Title("Ada".to_string()));
        assert_eq!(blocks[1], Block::ContactLine("Phone: 555-0100".to_string()));
        assert_eq!(blocks[2], Block::Divider);
    }

    #[test]
    fn test_list_sections_emit_one_bullet_per_item() {
        let record = ProfileRecord {
            skills: vec!["Rust".to_string(), "Go".to_string()],
            about: "Builder of things.".to_string(),
            ..Default::default()
        };
        let blocks = assemble(&record);

        let about_at = blocks
            .iter()
            .position(|b| *b == Block::SectionHeading("About Me".to_string()))
            .unwrap();
        assert_eq!(
            blocks[about_at + 1],
            Block::BodyParagraph("Builder of things.".to_string())
        );

        let skills_at = blocks
            .iter()
            .position(|b| *b == Block::SectionHeading("Skills".to_string()))
            .unwrap();
        assert_eq!(blocks[skills_at + 1], Block::BulletItem("Rust".to_string()));
        assert_eq!(blocks[skills_at + 2], Block::BulletItem("Go".to_string()));
        assert_eq!(
            blocks[skills_at + 3],
            Block::SectionHeading("Education".to_string())
        );
    }

    #[test]
    fn test_sections_match_assembly_order() {
        let record = ProfileRecord::default();
        let titles: Vec<&str> = sections(&record).map(|(title, _)| title).collect();
        assert_eq!(headings(&assemble(&record)), titles);
    }
}
