//! Master-brand to APS ownership document.

use crate::api::dto::aps::{ApsOutlet, ApsOwnership, ApsService};
use crate::domain::entities::MasterBrand;

/// Maps a master-brand to `{ "service": ... }`.
///
/// The service describes the owning network. A master-brand that is not the
/// network's own identity is added as the service's `outlet`.
pub fn map_ownership(master_brand: &MasterBrand) -> ApsOwnership {
    let network = &master_brand.network;

    let outlet = master_brand.is_outlet().then(|| ApsOutlet {
        key: master_brand.url_key.clone(),
        title: master_brand.name.clone(),
        id: master_brand.mid.to_string(),
    });

    ApsOwnership {
        service: ApsService {
            service_type: network.medium.clone(),
            id: network.nid.to_string(),
            key: network.url_key.clone(),
            title: network.name.clone(),
            outlet,
        },
    }
}
