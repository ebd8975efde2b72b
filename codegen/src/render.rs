//! Hex text rendering.

use actlut::Lut;

/// Line separation of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineLayout {
    /// Every code is followed by `\n`, including the last.
    Terminated,
    /// Codes are separated by `\n`; the text does not end in a newline.
    Joined,
}

/// Renders `lut` as one lowercase hex code per line.
pub fn render(lut: &Lut, layout: LineLayout) -> String {
    let width = lut.spec().encoding.hex_digits();
    let mut out = String::with_capacity(lut.len() * (width + 1));
    for (i, code) in lut.hex_codes().enumerate() {
        if layout == LineLayout::Joined && i > 0 {
            out.push('\n');
        }
        out.push_str(&code);
        if layout == LineLayout::Terminated {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use actlut::{FIXED_LOG2, HALF_EXP2, LUT_ENTRIES};

    #[test]
    fn terminated_layout_ends_with_newline() {
        let lut = Lut::build(&FIXED_LOG2).unwrap();
        let text = render(&lut, LineLayout::Terminated);
        assert!(text.starts_with("000\n00b\n017\n"));
        assert!(text.ends_with("3fa\n"));
        assert_eq!(text.len(), LUT_ENTRIES * 4);
        assert_eq!(text.lines().count(), LUT_ENTRIES);
    }

    #[test]
    fn joined_layout_has_no_trailing_newline() {
        let lut = Lut::build(&HALF_EXP2).unwrap();
        let text = render(&lut, LineLayout::Joined);
        assert!(text.starts_with("3c00\n3c06\n"));
        assert!(text.ends_with("\n3ff5"));
        assert_eq!(text.len(), LUT_ENTRIES * 5 - 1);
        assert_eq!(text.matches('\n').count(), LUT_ENTRIES - 1);
    }

    #[test]
    fn layouts_differ_only_by_final_newline() {
        let lut = Lut::build(&HALF_EXP2).unwrap();
        let terminated = render(&lut, LineLayout::Terminated);
        let joined = render(&lut, LineLayout::Joined);
        assert_eq!(terminated, format!("{joined}\n"));
    }
}
