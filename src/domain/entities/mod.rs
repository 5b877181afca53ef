//! Core domain entities representing the programme catalogue.
//!
//! Entities are read-only views of catalogue data loaded by the repository
//! layer. They carry no persistence concerns.
//!
//! # Entity Types
//!
//! - [`Programme`] - Brand, series, episode or clip
//! - [`Genre`] / [`Format`] - Programme categories
//! - [`MasterBrand`] / [`Network`] - Broadcasting ownership
//! - [`Image`], [`Version`] - Attached resources
//!
//! [`DomainEntity`] wraps any of them for callers that accept more than one
//! kind of entity.

pub mod category;
pub mod identifiers;
pub mod image;
pub mod media_type;
pub mod network;
pub mod partial_date;
pub mod programme;
pub mod synopses;
pub mod version;

pub use category::{Format, Genre};
pub use identifiers::{Mid, Nid, Pid};
pub use image::Image;
pub use media_type::MediaType;
pub use network::{MasterBrand, Network};
pub use partial_date::PartialDate;
pub use programme::{CoreEntity, Programme, ProgrammeContainer, ProgrammeItem, ProgrammeType};
pub use synopses::Synopses;
pub use version::Version;

/// Any catalogue entity.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEntity {
    Programme(Programme),
    Genre(Genre),
    Format(Format),
    MasterBrand(MasterBrand),
    Network(Network),
    Image(Image),
    Version(Version),
}

impl DomainEntity {
    /// Human-readable kind, used in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainEntity::Programme(p) => p.programme_type().as_str(),
            DomainEntity::Genre(_) => "genre",
            DomainEntity::Format(_) => "format",
            DomainEntity::MasterBrand(_) => "master_brand",
            DomainEntity::Network(_) => "network",
            DomainEntity::Image(_) => "image",
            DomainEntity::Version(_) => "version",
        }
    }
}

impl From<Programme> for DomainEntity {
    fn from(programme: Programme) -> Self {
        DomainEntity::Programme(programme)
    }
}

impl From<Genre> for DomainEntity {
    fn from(genre: Genre) -> Self {
        DomainEntity::Genre(genre)
    }
}

impl From<Format> for DomainEntity {
    fn from(format: Format) -> Self {
        DomainEntity::Format(format)
    }
}

impl From<MasterBrand> for DomainEntity {
    fn from(master_brand: MasterBrand) -> Self {
        DomainEntity::MasterBrand(master_brand)
    }
}

impl From<Network> for DomainEntity {
    fn from(network: Network) -> Self {
        DomainEntity::Network(network)
    }
}

impl From<Image> for DomainEntity {
    fn from(image: Image) -> Self {
        DomainEntity::Image(image)
    }
}

impl From<Version> for DomainEntity {
    fn from(version: Version) -> Self {
        DomainEntity::Version(version)
    }
}
