/*
[INPUT]:  API vocabulary (resource types, action URNs, sort directions)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When new resource types or actions are supported
*/

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Estate,
    Address,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Estate => "estate",
            ResourceType::Address => "address",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation selected by an action's URN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Read,
    Create,
    Modify,
    Delete,
}

impl ActionKind {
    /// Full action id sent as `actionid` and mixed into the signature
    pub fn action_id(&self) -> &'static str {
        match self {
            ActionKind::Read => "urn:onoffice-de-ns:smart:2.5:smartml:action:read",
            ActionKind::Create => "urn:onoffice-de-ns:smart:2.5:smartml:action:create",
            ActionKind::Modify => "urn:onoffice-de-ns:smart:2.5:smartml:action:modify",
            ActionKind::Delete => "urn:onoffice-de-ns:smart:2.5:smartml:action:delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}
