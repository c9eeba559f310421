/*
[INPUT]:  Estate ids, search queries and estate records
[OUTPUT]: Estate read/create/modify/delete actions
[POS]:    Resource layer - estate endpoints
[UPDATE]: When estate defaults or estate-only actions change
*/

use crate::http::{OnOfficeClient, Result};
use crate::resources::{Resource, ResourceKind};
use crate::types::{ActionKind, ApiResponse, DeleteParameters, ElementRef, Elements, ResourceType};

/// Marker for the `estate` resource type
#[derive(Debug, Clone, Copy)]
pub struct Estate;

impl ResourceKind for Estate {
    const RESOURCE_TYPE: ResourceType = ResourceType::Estate;
    const DEFAULT_FIELDS: &'static [&'static str] = &["Id", "kaufpreis", "lage"];
}

pub type EstateResource<'a> = Resource<'a, Estate>;

impl EstateResource<'_> {
    pub fn delete_parameters(id: u64) -> DeleteParameters {
        DeleteParameters {
            data: Elements {
                elements: vec![ElementRef { id }],
            },
        }
    }

    /// Delete one estate
    pub async fn delete(&self, id: u64) -> Result<ApiResponse> {
        let parameters = Self::delete_parameters(id);
        self.dispatch(ActionKind::Delete, &parameters).await
    }
}

impl OnOfficeClient {
    /// Handle for estate actions
    pub fn estate(&self) -> EstateResource<'_> {
        Resource::new(self)
    }
}
