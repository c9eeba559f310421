/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public onOffice adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod resources;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    create_hmac2,
    ClientConfig,
    Credentials,
    OnOfficeClient,
    OnOfficeError,
    RequestSigner,
    Result,
};

// Re-export resource handles
pub use resources::{
    Address,
    AddressResource,
    Estate,
    EstateResource,
    Resource,
    ResourceKind,
};

// Re-export all types
pub use types::*;
