//! Network and master-brand entities.
//!
//! A [`Network`] is a broadcast service (e.g. BBC One). A [`MasterBrand`] is
//! a broadcasting identity owned by a network; regional opt-outs such as
//! BBC One Scotland are master-brands whose identifier differs from their
//! network's.

use super::identifiers::{Mid, Nid};
use super::image::Image;

/// A broadcast network.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub nid: Nid,
    pub name: String,
    pub image: Image,
    pub url_key: String,
    /// Broadcast medium, e.g. `tv` or `radio`.
    pub medium: String,
}

impl Network {
    pub fn new(
        nid: Nid,
        name: impl Into<String>,
        image: Image,
        url_key: impl Into<String>,
        medium: impl Into<String>,
    ) -> Self {
        Self {
            nid,
            name: name.into(),
            image,
            url_key: url_key.into(),
            medium: medium.into(),
        }
    }
}

/// A master-brand and the network that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterBrand {
    pub mid: Mid,
    pub name: String,
    pub url_key: Option<String>,
    pub image: Image,
    pub network: Network,
}

impl MasterBrand {
    pub fn new(mid: Mid, name: impl Into<String>, image: Image, network: Network) -> Self {
        Self {
            mid,
            name: name.into(),
            url_key: None,
            image,
            network,
        }
    }

    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = Some(url_key.into());
        self
    }

    /// Returns true if this master-brand is an outlet of its network rather
    /// than the network's own identity.
    pub fn is_outlet(&self) -> bool {
        self.mid.as_str() != self.network.nid.as_str()
    }
}
