//! Programme to APS programme document.
//!
//! A programme is mapped with the full field set at the top level and with a
//! reduced field set for each ancestor under `parent.programme`.

use crate::api::dto::aps::{
    ApsDisplayTitle, ApsImage, ApsParent, ApsParentProgramme, ApsProgramme, ApsProgrammeType,
    ApsVersion,
};
use crate::api::mappers::category::map_categories;
use crate::api::mappers::ownership::map_ownership;
use crate::domain::entities::{PartialDate, Programme, ProgrammeType, Version};

/// Maps a programme with the full field set.
pub fn map_programme(programme: &Programme) -> ApsProgramme {
    let core = programme.core();

    let (media_type, versions) = match programme {
        Programme::Brand(_) | Programme::Series(_) => (None, None),
        Programme::Episode(item) | Programme::Clip(item) => (
            item.media_type.map(|m| m.as_str().to_string()),
            Some(item.versions.iter().map(map_version).collect()),
        ),
    };

    ApsProgramme {
        programme_type: aps_type(programme.programme_type()),
        pid: core.pid.to_string(),
        expected_child_count: expected_child_count(programme),
        position: core.position,
        image: ApsImage {
            pid: core.image.pid.to_string(),
        },
        media_type,
        title: core.title.clone(),
        short_synopsis: core.synopses.short_synopsis.clone(),
        medium_synopsis: core.synopses.medium_synopsis.clone(),
        long_synopsis: core.synopses.long_synopsis.clone(),
        first_broadcast_date: first_broadcast_date(programme),
        display_title: ApsDisplayTitle {
            title: core.title.clone(),
            subtitle: String::new(),
        },
        links: Vec::new(),
        supporting_content_items: Vec::new(),
        categories: map_categories(&core.formats, &core.genres),
        versions,
        ownership: core.master_brand.as_ref().map(map_ownership),
        parent: programme.parent().map(map_parent),
    }
}

/// Maps an ancestor into its `{ "programme": ... }` wrapper.
///
/// Recurses once per level of the ancestor chain.
pub fn map_parent(programme: &Programme) -> ApsParent {
    let core = programme.core();

    ApsParent {
        programme: Box::new(ApsParentProgramme {
            programme_type: aps_type(programme.programme_type()),
            pid: core.pid.to_string(),
            expected_child_count: expected_child_count(programme),
            position: core.position,
            image: ApsImage {
                pid: core.image.pid.to_string(),
            },
            title: core.title.clone(),
            short_synopsis: core.synopses.short_synopsis.clone(),
            first_broadcast_date: first_broadcast_date(programme),
            ownership: core.master_brand.as_ref().map(map_ownership),
            parent: programme.parent().map(map_parent),
        }),
    }
}

/// Formats a partial date as midday UTC on the normalised day.
pub fn format_broadcast_date(date: &PartialDate) -> String {
    date.at_midday_utc()
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

fn aps_type(programme_type: ProgrammeType) -> ApsProgrammeType {
    match programme_type {
        ProgrammeType::Brand => ApsProgrammeType::Brand,
        ProgrammeType::Series => ApsProgrammeType::Series,
        ProgrammeType::Episode => ApsProgrammeType::Episode,
        ProgrammeType::Clip => ApsProgrammeType::Clip,
    }
}

/// `Some(count)` for containers (count may be null), `None` for items.
fn expected_child_count(programme: &Programme) -> Option<Option<i32>> {
    match programme {
        Programme::Brand(c) | Programme::Series(c) => Some(c.expected_child_count),
        Programme::Episode(_) | Programme::Clip(_) => None,
    }
}

fn first_broadcast_date(programme: &Programme) -> Option<String> {
    match programme {
        Programme::Brand(_) | Programme::Series(_) => None,
        Programme::Episode(item) | Programme::Clip(item) => {
            item.release_date.as_ref().map(format_broadcast_date)
        }
    }
}

fn map_version(version: &Version) -> ApsVersion {
    ApsVersion {
        pid: version.pid.to_string(),
        duration: version.duration,
    }
}
