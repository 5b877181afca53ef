//! Media type of playable programme items.

/// Media carried by an episode or clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    /// Canonical catalogue label.
    ///
    /// Video content is always delivered with audio, hence `audio_video`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "audio_video",
        }
    }

    /// Parses a stored label. Unknown or empty labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "audio" => Some(MediaType::Audio),
            "audio_video" | "video" => Some(MediaType::Video),
            _ => None,
        }
    }
}
