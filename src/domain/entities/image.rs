//! Image entity attached to programmes, master-brands and networks.

use super::identifiers::Pid;

/// A catalogue image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub pid: Pid,
    pub title: String,
    pub short_synopsis: String,
    pub long_synopsis: String,
    pub image_type: String,
    pub extension: String,
}

impl Image {
    /// Creates a new Image instance.
    pub fn new(
        pid: Pid,
        title: impl Into<String>,
        short_synopsis: impl Into<String>,
        long_synopsis: impl Into<String>,
        image_type: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            pid,
            title: title.into(),
            short_synopsis: short_synopsis.into(),
            long_synopsis: long_synopsis.into(),
            image_type: image_type.into(),
            extension: extension.into(),
        }
    }
}
