//! Static glyph-width tables for the two base-14 faces the document uses.
//!
//! Widths are the standard Adobe AFM advance widths in 1/1000 em. Every PDF
//! viewer ships these faces, so measuring against the AFM values gives the same
//! line breaks the viewer will draw.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters). Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font faces
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    pub const ALL: [FontFace; 2] = [FontFace::Helvetica, FontFace::HelveticaBold];

    /// PostScript name written into the font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key under which the face is registered in the page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metric table
// ────────────────────────────────────────────────────────────────────────────

/// `widths[i]` = advance of ASCII character `(i + 32)` in 1/1000 em.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Bullet glyph (U+2022), which every list item starts with.
    pub bullet_width: u16,
    /// Fallback for any other non-ASCII character.
    pub average_char_width: u16,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else if c == '\u{2022}' {
            self.bullet_width
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of `s` in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size_pt / 1000.0
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width_pt`.
    ///
    /// Whitespace runs (including line breaks) collapse to single spaces. A word
    /// wider than the line is broken between characters. Blank input yields no lines.
    pub fn wrap(&self, text: &str, size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let space_w = self.measure_str(" ", size_pt);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.measure_str(word, size_pt);

            if current.is_empty() {
                // Nothing to wrap against yet.
            } else if current_width + space_w + word_w <= max_width_pt {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
                continue;
            } else {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_w <= max_width_pt {
                current.push_str(word);
                current_width = word_w;
                continue;
            }

            for c in word.chars() {
                let c_w = self.measure_str(c.encode_utf8(&mut [0; 4]), size_pt);
                if !current.is_empty() && current_width + c_w > max_width_pt {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
                current.push(c);
                current_width += c_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica (regular): body text and contact line.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    bullet_width: 350,
    average_char_width: 556,
};

/// Helvetica-Bold: title and section headings.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    bullet_width: 350,
    average_char_width: 611,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFace::Helvetica).measure_str("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units -> 20.56pt at 10pt
        let width = get_metrics(FontFace::Helvetica).measure_str("Rust", 10.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Achievements and Certifications";
        let regular = get_metrics(FontFace::Helvetica).measure_str(text, 13.0);
        let bold = get_metrics(FontFace::HelveticaBold).measure_str(text, 13.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_non_ascii_falls_back() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str("é", 1000.0);
        assert!((width - f32::from(metrics.average_char_width)).abs() < 1e-3);
        let bullet = metrics.measure_str("\u{2022}", 1000.0);
        assert!((bullet - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(FontFace::Helvetica).wrap("Rust", 11.0, 500.0);
        assert_eq!(lines, vec!["Rust"]);
    }

    #[test]
    fn test_wrap_blank_text_is_no_lines() {
        assert!(get_metrics(FontFace::Helvetica)
            .wrap("  \n\t ", 11.0, 500.0)
            .is_empty());
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = get_metrics(FontFace::Helvetica).wrap("a  b\n\nc", 11.0, 500.0);
        assert_eq!(lines, vec!["a b c"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "word ".repeat(200);
        let lines = metrics.wrap(&text, 11.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_str(line, 11.0) <= 200.0, "line too wide: {line}");
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim_end());
    }

    #[test]
    fn test_wrap_breaks_overlong_word() {
        let metrics = get_metrics(FontFace::Helvetica);
        let word = "x".repeat(100);
        let lines = metrics.wrap(&word, 11.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(metrics.measure_str(line, 11.0) <= 50.0);
        }
    }
}
