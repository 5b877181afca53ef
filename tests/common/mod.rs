#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use clifton::api::mappers::FindByPidProgrammeMapper;
use clifton::application::services::{ProgrammesService, StatusService};
use clifton::domain::entities::{
    CoreEntity, Image, MasterBrand, MediaType, Mid, Network, Nid, PartialDate, Pid, Programme,
    ProgrammeContainer, ProgrammeItem, Synopses,
};
use clifton::domain::repositories::{ProgrammesRepository, RepositoryError};
use clifton::state::AppState;

pub const LOAD_BALANCER_AGENT: &str = "ELB-HealthChecker/1.0";
pub const PROBE_PID: &str = "b006m86d";

pub fn pid(value: &str) -> Pid {
    Pid::new(value).unwrap()
}

pub fn image(image_pid: &str) -> Image {
    Image::new(
        pid(image_pid),
        "Title",
        "ShortSynopsis",
        "ShortSynopsis",
        "standard",
        "jpg",
    )
}

pub fn core(programme_pid: &str, title: &str) -> CoreEntity {
    CoreEntity::new(
        pid(programme_pid),
        title,
        "Search Title",
        Synopses::new("Short Synopsis", "Medium Synopsis", "Long Synopsis"),
        image("p01m5mss"),
    )
    .with_position(Some(101))
}

pub fn network(nid: &str, name: &str) -> Network {
    Network::new(Nid::new(nid), name, image("p01tqv8z"), nid, "tv")
}

pub fn master_brand(mid: &str, name: &str, network: Network) -> MasterBrand {
    MasterBrand::new(Mid::new(mid), name, image("p01tqv8z"), network)
}

pub fn doctor_who() -> CoreEntity {
    core("b006q2x0", "Doctor Who")
}

pub fn series_nine() -> CoreEntity {
    core("b06hgxtt", "Series 9 - Omnibus")
}

pub fn river_song() -> CoreEntity {
    core("b06tl32t", "The Husbands of River Song")
}

pub fn brand(core: CoreEntity) -> Programme {
    Programme::Brand(ProgrammeContainer::new(core, Some(1001)))
}

pub fn series(core: CoreEntity) -> Programme {
    Programme::Series(ProgrammeContainer::new(core, Some(1001)))
}

pub fn video_item(core: CoreEntity) -> ProgrammeItem {
    ProgrammeItem::new(core, Some(MediaType::Video))
        .with_release_date(PartialDate::new(2015, 2, 0).unwrap())
        .with_streaming_window(Some(Utc::now()), Some(Utc::now()))
}

pub fn episode(core: CoreEntity) -> Programme {
    Programme::Episode(video_item(core))
}

pub fn clip(core: CoreEntity) -> Programme {
    Programme::Clip(video_item(core))
}

/// Episode → series (BBC One) → brand (BBC Two).
pub fn episode_with_ancestors() -> Programme {
    let brand = brand(
        doctor_who().with_master_brand(master_brand("bbc_two", "BBC Two", network("bbc_two", "BBC Two"))),
    );
    let series = series(
        series_nine()
            .with_parent(brand)
            .with_master_brand(master_brand("bbc_one", "BBC One", network("bbc_one", "BBC One"))),
    );
    episode(river_song().with_parent(series))
}

/// In-memory repository for handler tests.
pub struct StubRepository {
    programmes: HashMap<String, Programme>,
    failure: Option<RepositoryError>,
    connected: bool,
}

impl StubRepository {
    pub fn new() -> Self {
        Self {
            programmes: HashMap::new(),
            failure: None,
            connected: true,
        }
    }

    pub fn with_programme(mut self, programme: Programme) -> Self {
        self.programmes
            .insert(programme.pid().as_str().to_string(), programme);
        self
    }

    pub fn failing_with(mut self, error: RepositoryError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }
}

#[async_trait]
impl ProgrammesRepository for StubRepository {
    async fn find_by_pid_full(&self, pid: &Pid) -> Result<Option<Programme>, RepositoryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.programmes.get(pid.as_str()).cloned())
    }

    async fn ping(&self) -> bool {
        self.connected
    }
}

pub fn create_test_state(repository: StubRepository) -> AppState {
    let repository: Arc<dyn ProgrammesRepository> = Arc::new(repository);

    AppState {
        programmes_service: Arc::new(ProgrammesService::new(repository.clone())),
        status_service: Arc::new(StatusService::new(repository, pid(PROBE_PID))),
        mapper: FindByPidProgrammeMapper::new(),
        healthcheck_user_agent: Arc::from(LOAD_BALANCER_AGENT),
    }
}
