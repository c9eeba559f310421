/*
[INPUT]:  Address ids, search queries and address records
[OUTPUT]: Address read/create/modify actions
[POS]:    Resource layer - address endpoints
[UPDATE]: When address defaults change
*/

use crate::http::OnOfficeClient;
use crate::resources::{Resource, ResourceKind};
use crate::types::ResourceType;

/// Marker for the `address` resource type
#[derive(Debug, Clone, Copy)]
pub struct Address;

impl ResourceKind for Address {
    const RESOURCE_TYPE: ResourceType = ResourceType::Address;
    const DEFAULT_FIELDS: &'static [&'static str] = &["Id", "Vorname", "Name", "Email"];
}

pub type AddressResource<'a> = Resource<'a, Address>;

impl OnOfficeClient {
    /// Handle for address actions
    pub fn address(&self) -> AddressResource<'_> {
        Resource::new(self)
    }
}
