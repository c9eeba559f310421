/*
[INPUT]:  Caller-side queries, ids and records
[OUTPUT]: Action parameters dispatched through OnOfficeClient::execute
[POS]:    Resource layer - shared read/create/modify wrappers
[UPDATE]: When adding resource kinds or changing parameter shapes
*/

pub mod address;
pub mod estate;

pub use address::{Address, AddressResource};
pub use estate::{Estate, EstateResource};

use serde::Serialize;
use std::marker::PhantomData;

use crate::http::{OnOfficeClient, Result};
use crate::types::{
    ActionKind, ApiResponse, Filter, GetParameters, Record, RecordParameters, ResourceType,
    SearchParameters, SearchQuery,
};

/// Static description of one API resource
pub trait ResourceKind {
    const RESOURCE_TYPE: ResourceType;
    /// Fields requested when the caller does not name any
    const DEFAULT_FIELDS: &'static [&'static str];
}

/// Borrowed handle issuing actions for resource kind `K`
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a, K> {
    client: &'a OnOfficeClient,
    kind: PhantomData<K>,
}

impl<'a, K: ResourceKind> Resource<'a, K> {
    pub(crate) fn new(client: &'a OnOfficeClient) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    fn fields_or_default(fields: Option<Vec<String>>) -> Vec<String> {
        match fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => K::DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn search_parameters(query: SearchQuery) -> SearchParameters {
        SearchParameters {
            data: Self::fields_or_default(query.fields),
            listlimit: query.limit,
            listoffset: query.offset,
            filter: query.filter.filter(|f| !f.is_empty()),
            sortby: query.sort_by.filter(|s| !s.is_empty()),
        }
    }

    pub fn get_parameters(id: u64, fields: Option<&[&str]>) -> GetParameters {
        GetParameters {
            data: Self::fields_or_default(
                fields.map(|f| f.iter().map(|s| s.to_string()).collect()),
            ),
            filter: Filter::by_id(id),
        }
    }

    /// Flat merge; `id` overrides any `Id` key already in `data`
    pub fn update_parameters(id: u64, mut data: Record) -> RecordParameters {
        data.insert("Id".to_string(), id.into());
        RecordParameters { data }
    }

    pub(crate) async fn dispatch<P>(&self, action: ActionKind, parameters: &P) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .execute(K::RESOURCE_TYPE.as_str(), action.action_id(), parameters)
            .await
    }

    /// Search records of this kind
    pub async fn search(&self, query: SearchQuery) -> Result<ApiResponse> {
        let parameters = Self::search_parameters(query);
        self.dispatch(ActionKind::Read, &parameters).await
    }

    /// Fetch one record by id
    pub async fn get(&self, id: u64, fields: Option<&[&str]>) -> Result<ApiResponse> {
        let parameters = Self::get_parameters(id, fields);
        self.dispatch(ActionKind::Read, &parameters).await
    }

    pub async fn create(&self, data: Record) -> Result<ApiResponse> {
        self.dispatch(ActionKind::Create, &RecordParameters { data })
            .await
    }

    pub async fn update(&self, id: u64, data: Record) -> Result<ApiResponse> {
        let parameters = Self::update_parameters(id, data);
        self.dispatch(ActionKind::Modify, &parameters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Condition, SortOrder};
    use serde_json::json;

    #[test]
    fn test_search_defaults() {
        let params = EstateResource::search_parameters(SearchQuery::default());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "data": ["Id", "kaufpreis", "lage"],
                "listlimit": 100,
                "listoffset": 0
            })
        );
    }

    #[test]
    fn test_search_with_everything() {
        let query = SearchQuery::new()
            .fields(["Id", "Name"])
            .filter(Filter::new().with("Name", Condition::equals("Muster")))
            .limit(10)
            .offset(20)
            .sort_by("Name", SortOrder::Desc);
        let params = AddressResource::search_parameters(query);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "data": ["Id", "Name"],
                "listlimit": 10,
                "listoffset": 20,
                "filter": {"Name": [{"op": "=", "val": "Muster"}]},
                "sortby": {"Name": "DESC"}
            })
        );
    }

    #[test]
    fn test_empty_filter_and_fields_fall_back() {
        let query = SearchQuery {
            fields: Some(Vec::new()),
            filter: Some(Filter::new()),
            ..SearchQuery::default()
        };
        let params = AddressResource::search_parameters(query);
        assert_eq!(params.data, vec!["Id", "Vorname", "Name", "Email"]);
        assert!(params.filter.is_none());
    }

    #[test]
    fn test_get_parameters() {
        let params = EstateResource::get_parameters(123, None);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "data": ["Id", "kaufpreis", "lage"],
                "filter": {"Id": [{"op": "=", "val": 123}]}
            })
        );

        let params = EstateResource::get_parameters(7, Some(&["Id", "ort"][..]));
        assert_eq!(params.data, vec!["Id", "ort"]);
    }

    #[test]
    fn test_update_id_wins() {
        let data = json!({"Id": 1, "kaufpreis": 199_000})
            .as_object()
            .cloned()
            .unwrap();
        let params = EstateResource::update_parameters(42, data);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"data": {"Id": 42, "kaufpreis": 199000}})
        );
    }
}
