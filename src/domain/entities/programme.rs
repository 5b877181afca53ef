//! Programme entities.
//!
//! Programmes form a containment hierarchy: brands contain series, series
//! contain episodes, and clips hang off any of them. The hierarchy is closed,
//! so [`Programme`] is an enum over the four variants. Containers (brand and
//! series) and items (episode and clip) share a [`CoreEntity`] and add their
//! own fields.
//!
//! Parents are owned through `Box`, so an ancestor chain is always finite.

use chrono::{DateTime, Utc};

use super::category::{Format, Genre};
use super::identifiers::Pid;
use super::image::Image;
use super::media_type::MediaType;
use super::network::MasterBrand;
use super::partial_date::PartialDate;
use super::synopses::Synopses;
use super::version::Version;

/// Discriminant of a [`Programme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammeType {
    Brand,
    Series,
    Episode,
    Clip,
}

impl ProgrammeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgrammeType::Brand => "brand",
            ProgrammeType::Series => "series",
            ProgrammeType::Episode => "episode",
            ProgrammeType::Clip => "clip",
        }
    }

    /// Parses a stored type label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "brand" => Some(ProgrammeType::Brand),
            "series" => Some(ProgrammeType::Series),
            "episode" => Some(ProgrammeType::Episode),
            "clip" => Some(ProgrammeType::Clip),
            _ => None,
        }
    }

    /// Brands and series hold other programmes.
    pub fn is_container(&self) -> bool {
        matches!(self, ProgrammeType::Brand | ProgrammeType::Series)
    }
}

/// Attributes shared by every programme variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreEntity {
    pub pid: Pid,
    pub title: String,
    pub search_title: String,
    pub synopses: Synopses,
    pub image: Image,
    /// Ordering index among siblings.
    pub position: Option<i32>,
    pub parent: Option<Box<Programme>>,
    pub master_brand: Option<MasterBrand>,
    pub genres: Vec<Genre>,
    pub formats: Vec<Format>,
}

impl CoreEntity {
    /// Creates a core entity with no position, parent, master-brand or
    /// categories.
    pub fn new(
        pid: Pid,
        title: impl Into<String>,
        search_title: impl Into<String>,
        synopses: Synopses,
        image: Image,
    ) -> Self {
        Self {
            pid,
            title: title.into(),
            search_title: search_title.into(),
            synopses,
            image,
            position: None,
            parent: None,
            master_brand: None,
            genres: Vec::new(),
            formats: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: Option<i32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_parent(mut self, parent: Programme) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn with_master_brand(mut self, master_brand: MasterBrand) -> Self {
        self.master_brand = Some(master_brand);
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_formats(mut self, formats: Vec<Format>) -> Self {
        self.formats = formats;
        self
    }
}

/// A brand or series.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgrammeContainer {
    pub core: CoreEntity,
    pub expected_child_count: Option<i32>,
}

impl ProgrammeContainer {
    pub fn new(core: CoreEntity, expected_child_count: Option<i32>) -> Self {
        Self {
            core,
            expected_child_count,
        }
    }
}

/// An episode or clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgrammeItem {
    pub core: CoreEntity,
    pub media_type: Option<MediaType>,
    pub release_date: Option<PartialDate>,
    pub streamable_from: Option<DateTime<Utc>>,
    pub streamable_until: Option<DateTime<Utc>>,
    pub versions: Vec<Version>,
}

impl ProgrammeItem {
    pub fn new(core: CoreEntity, media_type: Option<MediaType>) -> Self {
        Self {
            core,
            media_type,
            release_date: None,
            streamable_from: None,
            streamable_until: None,
            versions: Vec::new(),
        }
    }

    pub fn with_release_date(mut self, release_date: PartialDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_streaming_window(
        mut self,
        from: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> Self {
        self.streamable_from = from;
        self.streamable_until = until;
        self
    }

    pub fn with_versions(mut self, versions: Vec<Version>) -> Self {
        self.versions = versions;
        self
    }
}

/// A catalogue programme.
#[derive(Debug, Clone, PartialEq)]
pub enum Programme {
    Brand(ProgrammeContainer),
    Series(ProgrammeContainer),
    Episode(ProgrammeItem),
    Clip(ProgrammeItem),
}

impl Programme {
    pub fn programme_type(&self) -> ProgrammeType {
        match self {
            Programme::Brand(_) => ProgrammeType::Brand,
            Programme::Series(_) => ProgrammeType::Series,
            Programme::Episode(_) => ProgrammeType::Episode,
            Programme::Clip(_) => ProgrammeType::Clip,
        }
    }

    pub fn core(&self) -> &CoreEntity {
        match self {
            Programme::Brand(c) | Programme::Series(c) => &c.core,
            Programme::Episode(i) | Programme::Clip(i) => &i.core,
        }
    }

    pub fn pid(&self) -> &Pid {
        &self.core().pid
    }

    pub fn parent(&self) -> Option<&Programme> {
        self.core().parent.as_deref()
    }

    /// Iterates over this programme's ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Programme> {
        std::iter::successors(self.parent(), |p| p.parent())
    }
}
