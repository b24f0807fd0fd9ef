//! Terminal presentation for saved canvases
//!
//! ANSI styling and framing for the `show` subcommand, via crossterm.

use crossterm::style::{Color, Stylize};
use scrawl::StyleSet;

use crate::cli::ColorChoice;

/// Decide whether output should carry ANSI colors
///
/// `NO_COLOR` wins over `auto`, and `auto` only styles a real terminal.
pub fn should_colorize(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            crossterm::tty::IsTty::is_tty(&std::io::stdout())
        }
    }
}

/// Colorize canvas text using ANSI escape codes
///
/// Applies colors to the glyph families the built-in styles draw with:
/// - Box-drawing lines, corners, and junctions: Cyan
/// - Arrowheads: Yellow
/// - Everything else keeps the terminal color, so labels stay readable
pub fn style_output(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2); // Extra space for ANSI codes

    for line in input.lines() {
        for c in line.chars() {
            let colored = match c {
                // Thin and rounded box drawing
                '┌' | '┐' | '└' | '┘' | '├' | '┤' | '┬' | '┴' | '┼' | '─' | '│' |
                '╭' | '╮' | '╯' | '╰' |
                // Thick
                '┏' | '┓' | '┛' | '┗' | '┣' | '┫' | '┻' | '┳' | '╋' | '━' | '┃' |
                // Double
                '╔' | '╗' | '╚' | '╝' | '╠' | '╣' | '╦' | '╩' | '╬' | '═' | '║' => {
                    format!("{}", c.to_string().with(Color::Cyan))
                }
                // ASCII and underline style box characters
                '+' | '-' | '|' | '_' => {
                    // Check context to avoid coloring punctuation in labels
                    if is_box_char_context(line, c) {
                        format!("{}", c.to_string().with(Color::Cyan))
                    } else {
                        c.to_string()
                    }
                }
                // Arrowheads
                '►' | '◄' | '▲' | '▼' | '>' | '<' | '^' | 'v' => {
                    format!("{}", c.to_string().with(Color::Yellow))
                }
                // Keep other characters uncolored
                _ => c.to_string(),
            };
            result.push_str(&colored);
        }
        result.push('\n');
    }

    // Remove trailing newline to match input format
    if !input.ends_with('\n') && result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Check if a character is likely part of box drawing vs text content
fn is_box_char_context(line: &str, c: char) -> bool {
    match c {
        '+' => {
            // '+' is likely a box corner if surrounded by box chars
            line.contains("--") || line.contains("+-") || line.contains("-+")
        }
        '-' => {
            // '-' is likely a box line if it appears as ---
            line.contains("---") || line.contains("+--") || line.contains("--+")
        }
        '_' => {
            // '_' is likely an underline-style run rather than a label
            line.contains("___")
        }
        '|' => {
            // '|' as first non-space or next to spacing is likely a box edge
            let trimmed = line.trim_start();
            trimmed.starts_with('|') || line.contains("| ") || line.contains(" |")
        }
        _ => false,
    }
}

/// Wrap canvas text in a thin box-drawing border
pub fn frame_output(input: &str) -> String {
    let glyphs = StyleSet::thin();
    let lines: Vec<&str> = input.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut result = String::new();
    result.push(glyphs.top_left);
    for _ in 0..width {
        result.push(glyphs.top_horizontal);
    }
    result.push(glyphs.top_right);
    result.push('\n');

    for line in &lines {
        result.push(glyphs.left_vertical);
        result.push_str(line);
        for _ in line.chars().count()..width {
            result.push(' ');
        }
        result.push(glyphs.right_vertical);
        result.push('\n');
    }

    result.push(glyphs.bottom_left);
    for _ in 0..width {
        result.push(glyphs.bottom_horizontal);
    }
    result.push(glyphs.bottom_right);
    result.push('\n');

    result
}

/// One-line glyph sample for the `styles` listing
pub fn style_preview(glyphs: &StyleSet) -> String {
    format!(
        "{}{}{}{}{} {} {}{}{}{}{} {}{}{}{}{} {}",
        glyphs.top_left,
        glyphs.top_horizontal,
        glyphs.bottom_intersect,
        glyphs.top_horizontal,
        glyphs.top_right,
        glyphs.left_vertical,
        glyphs.right_intersect,
        glyphs.bottom_horizontal,
        glyphs.crossing,
        glyphs.bottom_horizontal,
        glyphs.left_intersect,
        glyphs.bottom_left,
        glyphs.bottom_horizontal,
        glyphs.top_intersect,
        glyphs.bottom_horizontal,
        glyphs.bottom_right,
        glyphs.right_arrow,
    )
}
