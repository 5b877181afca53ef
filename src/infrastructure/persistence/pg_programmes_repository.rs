//! PostgreSQL implementation of the programmes repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    CoreEntity, Format, Genre, Image, MasterBrand, MediaType, Mid, Network, Nid, PartialDate, Pid,
    Programme, ProgrammeContainer, ProgrammeItem, ProgrammeType, Synopses, Version,
};
use crate::domain::repositories::{ProgrammesRepository, RepositoryError};

#[derive(sqlx::FromRow)]
struct ProgrammeRow {
    id: i64,
    pid: String,
    programme_type: String,
    title: String,
    search_title: String,
    short_synopsis: String,
    medium_synopsis: String,
    long_synopsis: String,
    image_id: i64,
    position: Option<i32>,
    expected_child_count: Option<i32>,
    parent_id: Option<i64>,
    master_brand_id: Option<i64>,
    media_type: Option<String>,
    release_year: Option<i32>,
    release_month: Option<i32>,
    release_day: Option<i32>,
    streamable_from: Option<DateTime<Utc>>,
    streamable_until: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    pid: String,
    title: String,
    short_synopsis: String,
    long_synopsis: String,
    image_type: String,
    extension: String,
}

#[derive(sqlx::FromRow)]
struct MasterBrandRow {
    mid: String,
    name: String,
    url_key: Option<String>,
    image_id: i64,
    network_nid: String,
    network_name: String,
    network_url_key: String,
    network_medium: String,
    network_image_id: i64,
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    pip_id: String,
    category_type: String,
    title: String,
    url_key: String,
    parent_id: Option<i64>,
    has_topic_page: bool,
    same_as: Option<String>,
}

#[derive(sqlx::FromRow)]
struct VersionRow {
    pid: String,
    duration: Option<i32>,
}

const PROGRAMME_COLUMNS: &str = r#"
    id, pid, programme_type, title, search_title,
    short_synopsis, medium_synopsis, long_synopsis, image_id,
    position, expected_child_count, parent_id, master_brand_id, media_type,
    release_year, release_month, release_day, streamable_from, streamable_until
"#;

/// PostgreSQL repository for programme lookups.
///
/// Ancestor and broader-genre chains are followed through their `parent_id`
/// columns; chains longer than `max_depth` are reported as corrupt data.
pub struct PgProgrammesRepository {
    pool: Arc<PgPool>,
    max_depth: usize,
}

impl PgProgrammesRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, max_depth: usize) -> Self {
        Self { pool, max_depth }
    }

    async fn fetch_programme_row(
        &self,
        condition: &str,
        value: ProgrammeKey<'_>,
    ) -> Result<Option<ProgrammeRow>, RepositoryError> {
        let sql = format!("SELECT {PROGRAMME_COLUMNS} FROM programmes WHERE {condition} = $1");
        let query = sqlx::query_as::<_, ProgrammeRow>(&sql);
        let query = match value {
            ProgrammeKey::Pid(pid) => query.bind(pid),
            ProgrammeKey::Id(id) => query.bind(id),
        };

        Ok(query.fetch_optional(self.pool.as_ref()).await?)
    }

    /// Loads the programme row and its ancestors, nearest first.
    async fn fetch_lineage(&self, pid: &Pid) -> Result<Vec<ProgrammeRow>, RepositoryError> {
        let Some(row) = self
            .fetch_programme_row("pid", ProgrammeKey::Pid(pid.as_str()))
            .await?
        else {
            return Ok(Vec::new());
        };

        let mut next = row.parent_id;
        let mut lineage = vec![row];

        while let Some(parent_id) = next {
            if lineage.len() > self.max_depth {
                return Err(RepositoryError::Corrupt(format!(
                    "ancestor chain of {pid} exceeds {} levels",
                    self.max_depth
                )));
            }

            let parent = self
                .fetch_programme_row("id", ProgrammeKey::Id(parent_id))
                .await?
                .ok_or_else(|| {
                    RepositoryError::Corrupt(format!("missing parent programme {parent_id}"))
                })?;

            next = parent.parent_id;
            lineage.push(parent);
        }

        Ok(lineage)
    }

    async fn fetch_image(&self, image_id: i64) -> Result<Image, RepositoryError> {
        let row = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT pid, title, short_synopsis, long_synopsis, image_type, extension
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(image_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| RepositoryError::Corrupt(format!("missing image {image_id}")))?;

        Ok(Image::new(
            parse_pid(&row.pid)?,
            row.title,
            row.short_synopsis,
            row.long_synopsis,
            row.image_type,
            row.extension,
        ))
    }

    async fn fetch_master_brand(&self, id: i64) -> Result<MasterBrand, RepositoryError> {
        let row = sqlx::query_as::<_, MasterBrandRow>(
            r#"
            SELECT mb.mid, mb.name, mb.url_key, mb.image_id,
                   n.nid AS network_nid, n.name AS network_name, n.url_key AS network_url_key,
                   n.medium AS network_medium, n.image_id AS network_image_id
            FROM master_brands mb
            JOIN networks n ON n.id = mb.network_id
            WHERE mb.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| RepositoryError::Corrupt(format!("missing master brand {id}")))?;

        let network = Network::new(
            Nid::new(row.network_nid),
            row.network_name,
            self.fetch_image(row.network_image_id).await?,
            row.network_url_key,
            row.network_medium,
        );

        let master_brand = MasterBrand::new(
            Mid::new(row.mid),
            row.name,
            self.fetch_image(row.image_id).await?,
            network,
        );

        Ok(match row.url_key {
            Some(url_key) => master_brand.with_url_key(url_key),
            None => master_brand,
        })
    }

    /// Loads the formats and genres attached to a programme, in sort order.
    async fn fetch_categories(
        &self,
        programme_id: i64,
    ) -> Result<(Vec<Format>, Vec<Genre>), RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT c.pip_id, c.category_type, c.title, c.url_key, c.parent_id,
                   c.has_topic_page, c.same_as
            FROM categories c
            JOIN programme_categories pc ON pc.category_id = c.id
            WHERE pc.programme_id = $1
            ORDER BY pc.sort_order, c.id
            "#,
        )
        .bind(programme_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut formats = Vec::new();
        let mut genres = Vec::new();

        for row in rows {
            match row.category_type.as_str() {
                "format" => formats.push(Format::new(row.pip_id, row.title, row.url_key)),
                "genre" => genres.push(self.build_genre(row).await?),
                other => {
                    return Err(RepositoryError::Corrupt(format!(
                        "unknown category type '{other}'"
                    )));
                }
            }
        }

        Ok((formats, genres))
    }

    /// Builds a genre with its broader chain.
    async fn build_genre(&self, row: CategoryRow) -> Result<Genre, RepositoryError> {
        let mut next = row.parent_id;
        let mut chain = vec![row];

        while let Some(parent_id) = next {
            if chain.len() > self.max_depth {
                return Err(RepositoryError::Corrupt(format!(
                    "broader chain of genre {} exceeds {} levels",
                    chain[0].pip_id, self.max_depth
                )));
            }

            let parent = sqlx::query_as::<_, CategoryRow>(
                r#"
                SELECT pip_id, category_type, title, url_key, parent_id, has_topic_page, same_as
                FROM categories
                WHERE id = $1
                "#,
            )
            .bind(parent_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| RepositoryError::Corrupt(format!("missing broader genre {parent_id}")))?;

            next = parent.parent_id;
            chain.push(parent);
        }

        let genre = chain.into_iter().rev().fold(None, |broader, row| {
            let genre = Genre::new(row.pip_id, row.title, row.url_key, broader)
                .with_topic_page(row.has_topic_page);
            Some(match row.same_as {
                Some(same_as) => genre.with_same_as(same_as),
                None => genre,
            })
        });

        genre.ok_or_else(|| RepositoryError::Corrupt("empty genre chain".to_string()))
    }

    async fn fetch_versions(&self, programme_id: i64) -> Result<Vec<Version>, RepositoryError> {
        let rows = sqlx::query_as::<_, VersionRow>(
            "SELECT pid, duration FROM versions WHERE programme_id = $1 ORDER BY id",
        )
        .bind(programme_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|row| Ok(Version::new(parse_pid(&row.pid)?, row.duration)))
            .collect()
    }

    /// Turns a row into a programme, attaching an already built parent.
    async fn hydrate(
        &self,
        row: ProgrammeRow,
        parent: Option<Programme>,
    ) -> Result<Programme, RepositoryError> {
        let programme_type = ProgrammeType::parse(&row.programme_type).ok_or_else(|| {
            RepositoryError::Corrupt(format!("unknown programme type '{}'", row.programme_type))
        })?;

        let (formats, genres) = self.fetch_categories(row.id).await?;

        let mut core = CoreEntity::new(
            parse_pid(&row.pid)?,
            row.title,
            row.search_title,
            Synopses::new(row.short_synopsis, row.medium_synopsis, row.long_synopsis),
            self.fetch_image(row.image_id).await?,
        )
        .with_position(row.position)
        .with_formats(formats)
        .with_genres(genres);

        if let Some(master_brand_id) = row.master_brand_id {
            core = core.with_master_brand(self.fetch_master_brand(master_brand_id).await?);
        }
        if let Some(parent) = parent {
            core = core.with_parent(parent);
        }

        if programme_type.is_container() {
            let container = ProgrammeContainer::new(core, row.expected_child_count);
            return Ok(match programme_type {
                ProgrammeType::Brand => Programme::Brand(container),
                _ => Programme::Series(container),
            });
        }

        let mut item = ProgrammeItem::new(core, row.media_type.as_deref().and_then(MediaType::parse))
            .with_streaming_window(row.streamable_from, row.streamable_until)
            .with_versions(self.fetch_versions(row.id).await?);

        if let Some(year) = row.release_year {
            item = item.with_release_date(parse_partial_date(year, row.release_month, row.release_day)?);
        }

        Ok(match programme_type {
            ProgrammeType::Episode => Programme::Episode(item),
            _ => Programme::Clip(item),
        })
    }
}

enum ProgrammeKey<'a> {
    Pid(&'a str),
    Id(i64),
}

fn parse_pid(value: &str) -> Result<Pid, RepositoryError> {
    Pid::new(value).map_err(|e| RepositoryError::Corrupt(e.to_string()))
}

fn parse_partial_date(
    year: i32,
    month: Option<i32>,
    day: Option<i32>,
) -> Result<PartialDate, RepositoryError> {
    let component = |value: Option<i32>| {
        u32::try_from(value.unwrap_or(0))
            .map_err(|_| RepositoryError::Corrupt(format!("negative date component in {year}")))
    };

    PartialDate::new(year, component(month)?, component(day)?)
        .map_err(|e| RepositoryError::Corrupt(e.to_string()))
}

#[async_trait]
impl ProgrammesRepository for PgProgrammesRepository {
    async fn find_by_pid_full(&self, pid: &Pid) -> Result<Option<Programme>, RepositoryError> {
        let lineage = self.fetch_lineage(pid).await?;
        if lineage.is_empty() {
            tracing::debug!("Programme {} not found", pid);
            return Ok(None);
        }

        tracing::debug!("Loaded {} with {} ancestors", pid, lineage.len() - 1);

        // Build from the root so each level can own its parent.
        let mut programme = None;
        for row in lineage.into_iter().rev() {
            programme = Some(self.hydrate(row, programme).await?);
        }

        Ok(programme)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
