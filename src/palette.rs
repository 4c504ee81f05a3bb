//! Glyph palettes, ordered from faint to dense.

/// Default palette. The trailing duplicate keeps the top bucket the same
/// width as the others.
pub const SMALL: [char; 11] = ['░', '▒', '▓', '█', '▀', '▄', '─', '│', '╱', '╲', '╲'];

/// Palette used while shuffle is on (multi-touch).
pub const LARGE: [char; 59] = [
    '░', '▒', '▓', '█', '▀', '▄', '─', '│', '╱', '╲', '◆', '◇', '▪', '▫', '■', '□', '▌', '▐',
    '▍', '▎', '◀', '▶', '▲', '▼', '◤', '◥', '◢', '◣', '○', '●', '◎', '◉', '★', '✦', '✧', '×',
    '÷', '≈', '≠', '±', '∞', '∑', '∏', '√', '∂', '∫', '∮', '∆', '∇', '⊕', '⊗', '⊙', '⊚', '⊛',
    '⊝', '⊞', '⊟', '⊠', '⊡',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(&'static [char]);

impl Palette {
    pub fn select(shuffle: bool) -> Self {
        if shuffle {
            Palette(&LARGE)
        } else {
            Palette(&SMALL)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bucket index for an intensity in `[0, 1]`.
    pub fn index_for(&self, val: f64) -> usize {
        let last = self.len().saturating_sub(1);
        // `as` saturates, and NaN maps to 0.
        ((val.clamp(0.0, 1.0) * last as f64).floor() as usize).min(last)
    }

    pub fn glyph_for(&self, val: f64) -> char {
        self.0[self.index_for(val)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_bounds() {
        for shuffle in [false, true] {
            let palette = Palette::select(shuffle);
            for val in [-3.0, 0.0, 0.0999, 0.5, 0.999_999, 1.0, 42.0, f64::NAN] {
                assert!(palette.index_for(val) < palette.len());
            }
            assert_eq!(palette.index_for(0.0), 0);
            assert_eq!(palette.index_for(1.0), palette.len() - 1);
        }
    }

    #[test]
    fn buckets_follow_floor() {
        let small = Palette::select(false);
        assert_eq!(small.index_for(0.25), 2);
        assert_eq!(small.glyph_for(0.35), '█');
    }
}
