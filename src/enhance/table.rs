//! Image enhancement lookup table.
//!
//! Maps a packed 3x3 neighborhood index to the value of the center pixel in
//! the next generation.

use std::fmt;
use std::str::FromStr;

use crate::config::enhance::{ALL_DARK_INDEX, ALL_LIT_INDEX, TABLE_LEN};
use crate::enhance::error::LoadError;
use crate::enhance::types::{from_glyph, to_glyph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementTable {
    pixels: Box<[bool; TABLE_LEN]>,
}

impl EnhancementTable {
    /// Builds a table from exactly [`TABLE_LEN`] pixels.
    pub fn from_pixels(pixels: &[bool]) -> Result<Self, LoadError> {
        let pixels: [bool; TABLE_LEN] = pixels
            .try_into()
            .map_err(|_| LoadError::TableLength { len: pixels.len() })?;

        Ok(Self { pixels: Box::new(pixels) })
    }

    /// Value of the center pixel for a packed neighborhood index.
    ///
    /// Indices are 9 bits wide, so every index built by the step system is in range.
    pub fn lookup(&self, index: usize) -> bool {
        self.pixels[index]
    }

    /// Value the uniform background takes after one step.
    ///
    /// An unlit background sees only dark neighborhoods and a lit one sees only
    /// lit neighborhoods, so two fixed entries decide it.
    pub fn next_background(&self, background_lit: bool) -> bool {
        if background_lit {
            self.lookup(ALL_LIT_INDEX)
        } else {
            self.lookup(ALL_DARK_INDEX)
        }
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels[..]
    }
}

impl FromStr for EnhancementTable {
    type Err = LoadError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let pixels: Vec<bool> = line.chars().map(from_glyph).collect();
        Self::from_pixels(&pixels)
    }
}

impl fmt::Display for EnhancementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &lit in self.pixels.iter() {
            write!(f, "{}", to_glyph(lit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(dark: bool, lit: bool) -> EnhancementTable {
        let mut pixels = vec![false; TABLE_LEN];
        pixels[ALL_DARK_INDEX] = dark;
        pixels[ALL_LIT_INDEX] = lit;
        EnhancementTable::from_pixels(&pixels).unwrap()
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = EnhancementTable::from_pixels(&[true; 511]).unwrap_err();
        assert!(matches!(err, LoadError::TableLength { len: 511 }));

        let err = "#".repeat(513).parse::<EnhancementTable>().unwrap_err();
        assert!(matches!(err, LoadError::TableLength { len: 513 }));
    }

    #[test]
    fn test_parse_reads_glyphs_in_index_order() {
        let line = format!("#.{}#", ".".repeat(TABLE_LEN - 3));
        let table: EnhancementTable = line.parse().unwrap();

        assert!(table.lookup(0));
        assert!(!table.lookup(1));
        assert!(table.lookup(TABLE_LEN - 1));
        assert_eq!(table.to_string(), line);
    }

    #[test]
    fn test_unknown_glyphs_are_unlit() {
        let line = format!("x{}", "#".repeat(TABLE_LEN - 1));
        let table: EnhancementTable = line.parse().unwrap();
        assert!(!table.lookup(0));
        assert!(table.lookup(1));
    }

    #[test]
    fn test_next_background() {
        let steady = table_with(false, false);
        assert!(!steady.next_background(false));

        let flashing = table_with(true, false);
        assert!(flashing.next_background(false));
        assert!(!flashing.next_background(true));

        let sticky = table_with(true, true);
        assert!(sticky.next_background(false));
        assert!(sticky.next_background(true));
    }
}
