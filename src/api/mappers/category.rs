//! Genre and format to APS category document.

use crate::api::dto::aps::{ApsBroader, ApsCategory, ApsCategoryType};
use crate::domain::entities::{Format, Genre};

/// Maps a format. Formats have no hierarchy, so no `broader` key is emitted.
pub fn map_format(format: &Format) -> ApsCategory {
    ApsCategory {
        category_type: ApsCategoryType::Format,
        id: format.id.clone(),
        key: format.url_key.clone(),
        title: format.title.clone(),
        narrower: Vec::new(),
        broader: None,
        has_topic_page: false,
        same_as: None,
    }
}

/// Maps a genre together with its broader chain.
///
/// `broader` is always emitted: `{}` at the top of the hierarchy, otherwise
/// `{ "category": <broader genre> }`. Narrower genres are never resolved.
pub fn map_genre(genre: &Genre) -> ApsCategory {
    let broader = ApsBroader {
        category: genre.broader.as_deref().map(|b| Box::new(map_genre(b))),
    };

    ApsCategory {
        category_type: ApsCategoryType::Genre,
        id: genre.id.clone(),
        key: genre.url_key.clone(),
        title: genre.title.clone(),
        narrower: Vec::new(),
        broader: Some(broader),
        has_topic_page: genre.has_topic_page,
        same_as: genre.same_as.clone(),
    }
}

/// Maps formats then genres, each in their original order.
pub fn map_categories(formats: &[Format], genres: &[Genre]) -> Vec<ApsCategory> {
    formats
        .iter()
        .map(map_format)
        .chain(genres.iter().map(map_genre))
        .collect()
}
