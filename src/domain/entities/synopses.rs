//! Short, medium and long synopsis triplet.

/// Programme synopses at three lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Synopses {
    pub short_synopsis: String,
    pub medium_synopsis: String,
    pub long_synopsis: String,
}

impl Synopses {
    pub fn new(
        short_synopsis: impl Into<String>,
        medium_synopsis: impl Into<String>,
        long_synopsis: impl Into<String>,
    ) -> Self {
        Self {
            short_synopsis: short_synopsis.into(),
            medium_synopsis: medium_synopsis.into(),
            long_synopsis: long_synopsis.into(),
        }
    }
}
