//! Named byte layouts for fixed-size binary headers.
//!
//! Container crates describe their headers as a const [`Layout`] table so
//! that fixed-offset reads go through named fields instead of bare numbers.

use crate::{Error, Result};

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
}

/// A single field in a header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, unique within its layout.
    pub name: &'static str,
    /// Absolute byte offset from the start of the file.
    pub offset: usize,
    /// Width in bytes.
    pub width: usize,
    /// Byte order.
    pub endian: Endian,
}

impl Field {
    /// A little-endian field.
    pub const fn le(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
            endian: Endian::Little,
        }
    }

    /// Offset one past the last byte of this field.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// An immutable table of header fields.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Layout name, used in diagnostics.
    pub name: &'static str,
    /// Total header size in bytes; the payload starts here.
    pub size: usize,
    /// Fields in ascending offset order.
    pub fields: &'static [Field],
}

impl Layout {
    /// Look a field up by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look a field up by name, failing if the layout does not have it.
    pub fn require(&self, name: &str) -> Result<&Field> {
        self.field(name).ok_or_else(|| Error::UnknownField {
            layout: self.name,
            field: name.to_string(),
        })
    }

    /// Check that fields are ordered, non-overlapping and inside the header.
    pub fn is_consistent(&self) -> bool {
        let ordered = self
            .fields
            .windows(2)
            .all(|pair| pair[0].end() <= pair[1].offset);
        let contained = self.fields.iter().all(|f| f.end() <= self.size);
        ordered && contained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Layout = Layout {
        name: "sample",
        size: 8,
        fields: &[Field::le("magic", 0, 4), Field::le("value", 4, 4)],
    };

    #[test]
    fn test_field_lookup() {
        let field = SAMPLE.field("value").unwrap();
        assert_eq!(field.offset, 4);
        assert_eq!(field.end(), 8);
        assert_eq!(field.endian, Endian::Little);
        assert!(SAMPLE.field("missing").is_none());
        assert!(matches!(
            SAMPLE.require("missing"),
            Err(Error::UnknownField { layout: "sample", .. })
        ));
        assert_eq!(SAMPLE.require("magic").unwrap().width, 4);
    }

    #[test]
    fn test_consistency() {
        assert!(SAMPLE.is_consistent());

        const OVERLAPPING: Layout = Layout {
            name: "bad",
            size: 8,
            fields: &[Field::le("a", 0, 4), Field::le("b", 2, 4)],
        };
        assert!(!OVERLAPPING.is_consistent());
    }
}
