//! Playable version of an episode or clip.

use super::identifiers::Pid;

/// A version (e.g. original, signed, audio-described) of a programme item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub pid: Pid,
    /// Duration in seconds, if known.
    pub duration: Option<i32>,
}

impl Version {
    pub fn new(pid: Pid, duration: Option<i32>) -> Self {
        Self { pid, duration }
    }
}
