//! Flows blocks onto fixed-size pages.
//!
//! Pure and deterministic: the same blocks and config always yield the same
//! positioned draw ops. Paragraphs are split between pages line by line.

use crate::document::blocks::Block;
use crate::document::font_metrics::{get_metrics, FontFace};
use crate::document::styles::{PageConfig, Rgb, TextStyle};

/// Prefix drawn before every bullet item.
pub const BULLET_PREFIX: &str = "\u{2022} ";

/// A single positioned drawing instruction. Coordinates are PDF user space
/// (points, origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        /// Baseline.
        y: f32,
        face: FontFace,
        size_pt: f32,
        color: Rgb,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness_pt: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    /// Text runs on this page, in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

struct Typesetter<'c> {
    config: &'c PageConfig,
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Top of the remaining free space on the current page.
    cursor_y: f32,
    at_page_top: bool,
}

impl<'c> Typesetter<'c> {
    fn new(config: &'c PageConfig) -> Self {
        Typesetter {
            config,
            pages: Vec::new(),
            current: PageLayout::default(),
            cursor_y: config.content_top(),
            at_page_top: true,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = self.config.content_top();
        self.at_page_top = true;
    }

    /// Starts a new page unless `height` still fits above the bottom margin.
    /// A page that is still empty never breaks, so oversize content cannot loop.
    fn ensure_room(&mut self, height: f32) {
        if !self.at_page_top && self.cursor_y - height < self.config.content_bottom() {
            self.new_page();
        }
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle) {
        let metrics = get_metrics(style.face);
        let lines = metrics.wrap(text, style.size_pt, self.config.content_width());
        if lines.is_empty() {
            return;
        }

        if !self.at_page_top {
            self.cursor_y -= style.space_before_pt;
        }

        for line in lines {
            self.ensure_room(style.leading_pt);
            self.current.ops.push(DrawOp::Text {
                x: self.config.margin_left_pt,
                y: self.cursor_y - style.size_pt,
                face: style.face,
                size_pt: style.size_pt,
                color: style.color,
                text: line,
            });
            self.cursor_y -= style.leading_pt;
            self.at_page_top = false;
        }

        self.cursor_y -= style.space_after_pt;
    }

    fn divider(&mut self) {
        let rule = self.config.divider;
        self.ensure_room(rule.box_height_pt);
        self.cursor_y -= rule.box_height_pt;
        self.current.ops.push(DrawOp::Rule {
            x1: self.config.margin_left_pt,
            x2: self.config.margin_left_pt + self.config.content_width(),
            y: self.cursor_y,
            thickness_pt: rule.thickness_pt,
            color: rule.color,
        });
        self.at_page_top = false;
    }

    fn spacer(&mut self, height: f32) {
        if self.at_page_top {
            return;
        }
        if self.cursor_y - height < self.config.content_bottom() {
            self.new_page();
        } else {
            self.cursor_y -= height;
        }
    }

    fn block(&mut self, block: &Block) {
        let config = self.config;
        match block {
            Block::Title(text) => self.paragraph(text, &config.title),
            Block::ContactLine(text) | Block::BodyParagraph(text) => {
                self.paragraph(text, &config.body)
            }
            Block::SectionHeading(text) => self.paragraph(text, &config.heading),
            Block::BulletItem(text) => {
                self.paragraph(&format!("{BULLET_PREFIX}{text}"), &config.body)
            }
            Block::Divider => self.divider(),
            Block::Spacer(height) => self.spacer(*height),
        }
    }

    fn finish(mut self) -> Vec<PageLayout> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Lays out `blocks` top-to-bottom, paginating when the content area is full.
/// Always returns at least one page.
pub fn typeset(blocks: &[Block], config: &PageConfig) -> Vec<PageLayout> {
    let mut setter = Typesetter::new(config);
    for block in blocks {
        setter.block(block);
    }
    setter.finish()
}
