use crate::parsing::blocks::types::BlockKind;

/// Heading block type with owned prefix constants.
pub struct Heading;

impl Heading {
    /// Heading prefixes, longest first. `"# "` must be checked last, after
    /// the deeper levels have been ruled out.
    pub const PREFIXES: [(&'static str, BlockKind); 3] = [
        ("### ", BlockKind::Heading3),
        ("## ", BlockKind::Heading2),
        ("# ", BlockKind::Heading1),
    ];

    /// Matches a heading prefix at the start of `line`.
    ///
    /// # Returns
    /// The heading kind and the byte length of the prefix to strip, or `None`
    /// if the line is not a heading.
    pub fn strip_prefix(line: &str) -> Option<(BlockKind, usize)> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(prefix, kind)| (*kind, prefix.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_each_level() {
        assert_eq!(Heading::strip_prefix("# a"), Some((BlockKind::Heading1, 2)));
        assert_eq!(Heading::strip_prefix("## a"), Some((BlockKind::Heading2, 3)));
        assert_eq!(Heading::strip_prefix("### a"), Some((BlockKind::Heading3, 4)));
    }

    #[test]
    fn hash_without_space_is_not_heading() {
        assert_eq!(Heading::strip_prefix("#tag"), None);
        assert_eq!(Heading::strip_prefix("##"), None);
    }

    #[test]
    fn four_hashes_is_not_heading() {
        assert_eq!(Heading::strip_prefix("#### deep"), None);
    }

    #[test]
    fn indented_hash_is_not_heading() {
        assert_eq!(Heading::strip_prefix(" # a"), None);
    }
}
