//! Box-drawing glyph styles
//!
//! A style is a fixed set of seventeen glyphs covering line bodies, corners,
//! junctions, and arrowheads. The [`StyleTable`] owns the named built-in
//! styles and resolves an `(index, flip)` selection into a plain [`StyleSet`]
//! value once; drawing code consumes the resolved value directly instead of
//! re-checking the flip flag per glyph.

use unicode_width::UnicodeWidthChar;

use crate::core::error::CanvasError;

/// Resolved glyph set for one drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    pub top_horizontal: char,
    pub bottom_horizontal: char,
    pub left_vertical: char,
    pub right_vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
    pub crossing: char,
    pub right_intersect: char,
    pub left_intersect: char,
    pub top_intersect: char,
    pub bottom_intersect: char,
    pub up_arrow: char,
    pub down_arrow: char,
    pub right_arrow: char,
    pub left_arrow: char,
}

impl StyleSet {
    /// Light box-drawing lines with sharp corners
    pub fn thin() -> Self {
        Self {
            top_horizontal: '─',
            bottom_horizontal: '─',
            left_vertical: '│',
            right_vertical: '│',
            top_left: '┌',
            top_right: '┐',
            bottom_right: '┘',
            bottom_left: '└',
            crossing: '┼',
            right_intersect: '├',
            left_intersect: '┤',
            top_intersect: '┴',
            bottom_intersect: '┬',
            up_arrow: '▲',
            down_arrow: '▼',
            right_arrow: '►',
            left_arrow: '◄',
        }
    }

    /// Light lines with rounded corners
    pub fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_right: '╯',
            bottom_left: '╰',
            ..Self::thin()
        }
    }

    /// Heavy box-drawing lines
    pub fn thick() -> Self {
        Self {
            top_horizontal: '━',
            bottom_horizontal: '━',
            left_vertical: '┃',
            right_vertical: '┃',
            top_left: '┏',
            top_right: '┓',
            bottom_right: '┛',
            bottom_left: '┗',
            crossing: '╋',
            right_intersect: '┣',
            left_intersect: '┫',
            top_intersect: '┻',
            bottom_intersect: '┳',
            up_arrow: '▲',
            down_arrow: '▼',
            right_arrow: '►',
            left_arrow: '◄',
        }
    }

    /// Double-struck lines
    pub fn double() -> Self {
        Self {
            top_horizontal: '═',
            bottom_horizontal: '═',
            left_vertical: '║',
            right_vertical: '║',
            top_left: '╔',
            top_right: '╗',
            bottom_right: '╝',
            bottom_left: '╚',
            crossing: '╬',
            right_intersect: '╠',
            left_intersect: '╣',
            top_intersect: '╩',
            bottom_intersect: '╦',
            up_arrow: '▲',
            down_arrow: '▼',
            right_arrow: '►',
            left_arrow: '◄',
        }
    }

    /// Plain ASCII for maximum compatibility
    pub fn ascii() -> Self {
        Self {
            top_horizontal: '-',
            bottom_horizontal: '-',
            left_vertical: '|',
            right_vertical: '|',
            top_left: '+',
            top_right: '+',
            bottom_right: '+',
            bottom_left: '+',
            crossing: '+',
            right_intersect: '+',
            left_intersect: '+',
            top_intersect: '+',
            bottom_intersect: '+',
            up_arrow: '^',
            down_arrow: 'v',
            right_arrow: '>',
            left_arrow: '<',
        }
    }

    /// Minimal underline look; its blank crossing disables junction
    /// substitution
    pub fn underline() -> Self {
        Self {
            top_horizontal: '_',
            bottom_horizontal: '_',
            left_vertical: '|',
            right_vertical: '|',
            top_left: ' ',
            top_right: ' ',
            bottom_right: '|',
            bottom_left: '|',
            crossing: ' ',
            right_intersect: '|',
            left_intersect: '|',
            top_intersect: '_',
            bottom_intersect: '_',
            up_arrow: '^',
            down_arrow: 'v',
            right_arrow: '>',
            left_arrow: '<',
        }
    }

    /// Mirror the left-for-right-oriented members
    ///
    /// The same logical drawing then comes out left-right mirrored: vertical
    /// sides, corner pairs, and the side intersections swap.
    pub fn flipped(mut self) -> Self {
        std::mem::swap(&mut self.left_vertical, &mut self.right_vertical);
        std::mem::swap(&mut self.top_left, &mut self.top_right);
        std::mem::swap(&mut self.bottom_left, &mut self.bottom_right);
        std::mem::swap(&mut self.left_intersect, &mut self.right_intersect);
        self
    }

    /// True when every glyph occupies exactly one terminal column
    ///
    /// Wide glyphs (emoji, CJK) would shear every row they land on, so style
    /// validation checks this up front.
    pub fn is_grid_safe(&self) -> bool {
        self.named_glyphs()
            .iter()
            .all(|(_, c)| UnicodeWidthChar::width(*c) == Some(1))
    }

    /// All glyphs with their member names, in canonical order
    pub fn named_glyphs(&self) -> [(&'static str, char); 17] {
        [
            ("top_horizontal", self.top_horizontal),
            ("bottom_horizontal", self.bottom_horizontal),
            ("left_vertical", self.left_vertical),
            ("right_vertical", self.right_vertical),
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
            ("crossing", self.crossing),
            ("right_intersect", self.right_intersect),
            ("left_intersect", self.left_intersect),
            ("top_intersect", self.top_intersect),
            ("bottom_intersect", self.bottom_intersect),
            ("up_arrow", self.up_arrow),
            ("down_arrow", self.down_arrow),
            ("right_arrow", self.right_arrow),
            ("left_arrow", self.left_arrow),
        ]
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::thin()
    }
}

/// A named entry in the style table
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub name: &'static str,
    pub glyphs: StyleSet,
}

/// The built-in styles, indexed the way the editor presents them
#[derive(Debug, Clone)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    /// All built-in styles
    pub fn builtin() -> Self {
        Self {
            styles: vec![
                Style {
                    name: "thin",
                    glyphs: StyleSet::thin(),
                },
                Style {
                    name: "rounded",
                    glyphs: StyleSet::rounded(),
                },
                Style {
                    name: "thick",
                    glyphs: StyleSet::thick(),
                },
                Style {
                    name: "double",
                    glyphs: StyleSet::double(),
                },
                Style {
                    name: "ascii",
                    glyphs: StyleSet::ascii(),
                },
                Style {
                    name: "underline",
                    glyphs: StyleSet::underline(),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn name(&self, index: usize) -> &'static str {
        self.styles[index.min(self.styles.len() - 1)].name
    }

    /// Resolve a style selection into a glyph set
    ///
    /// Out-of-range indexes clamp to the last style rather than failing; the
    /// editor never has a reason to abort a drawing gesture over this.
    pub fn resolve(&self, index: usize, flip: bool) -> StyleSet {
        let style = self.styles[index.min(self.styles.len() - 1)].glyphs;
        if flip {
            style.flipped()
        } else {
            style
        }
    }

    /// Look up a style index by its name, case-insensitive
    pub fn index_of(&self, name: &str) -> Result<usize, CanvasError> {
        self.styles
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CanvasError::unknown_style(name.to_string()))
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
