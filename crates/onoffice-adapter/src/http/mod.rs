/*
[INPUT]:  HTTP client configuration, credentials and action parameters
[OUTPUT]: Signed API calls and classified responses
[POS]:    HTTP layer - API communication
[UPDATE]: When changing dispatch, signing or error classification
*/

pub mod client;
pub mod error;
pub mod signature;

pub use error::{OnOfficeError, Result};
pub use signature::{create_hmac2, RequestSigner};

pub use client::{ClientConfig, Credentials, OnOfficeClient};
