//! File-level conversion with extension-based dispatch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{dds_to_tex, tex_to_dds};
use crate::Result;

/// Conversion direction, chosen from the input file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TexToDds,
    DdsToTex,
}

impl Direction {
    /// Pick a direction from the lowercased extension of `path`.
    ///
    /// Returns `None` for anything other than `.tex` and `.dds`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "tex" => Some(Self::TexToDds),
            "dds" => Some(Self::DdsToTex),
            _ => None,
        }
    }

    /// Extension of the file this direction produces.
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::TexToDds => "dds",
            Self::DdsToTex => "tex",
        }
    }

    /// Sibling of `input` with the output extension.
    pub fn output_path(self, input: &Path) -> PathBuf {
        input.with_extension(self.output_extension())
    }

    /// Convert a complete input file.
    pub fn convert(self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::TexToDds => tex_to_dds(input),
            Self::DdsToTex => dds_to_tex(input),
        }
    }
}

/// What happened to one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was converted and written to `output`.
    Converted { direction: Direction, output: PathBuf },
    /// The extension is not `.tex` or `.dds`; nothing was read or written.
    Skipped,
}

/// Convert one file next to itself.
///
/// The output is written only after the conversion succeeded, so a rejected
/// input never leaves an output file behind.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Outcome> {
    let path = path.as_ref();

    let Some(direction) = Direction::from_path(path) else {
        tracing::debug!(path = %path.display(), "unsupported extension");
        return Ok(Outcome::Skipped);
    };

    let input = fs::read(path)?;
    let converted = direction.convert(&input)?;

    let output = direction.output_path(path);
    fs::write(&output, converted)?;

    tracing::info!(
        input = %path.display(),
        output = %output.display(),
        "converted"
    );

    Ok(Outcome::Converted { direction, output })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_extension() {
        assert_eq!(
            Direction::from_path(Path::new("a/b.tex")),
            Some(Direction::TexToDds)
        );
        assert_eq!(
            Direction::from_path(Path::new("B.DDS")),
            Some(Direction::DdsToTex)
        );
        assert_eq!(
            Direction::from_path(Path::new("c.TeX")),
            Some(Direction::TexToDds)
        );
        assert_eq!(Direction::from_path(Path::new("d.png")), None);
        assert_eq!(Direction::from_path(Path::new("tex")), None);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            Direction::TexToDds.output_path(Path::new("dir/stone.TEX")),
            PathBuf::from("dir/stone.dds")
        );
        assert_eq!(
            Direction::DdsToTex.output_path(Path::new("stone.v2.dds")),
            PathBuf::from("stone.v2.tex")
        );
    }

    #[test]
    fn test_skipped_without_touching_disk() {
        let outcome = convert_file("does/not/exist.png").unwrap();
        assert_eq!(outcome, Outcome::Skipped);
    }
}
