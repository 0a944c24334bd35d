//! # Search Client Shared
//!
//! Plain data types shared between the search client registry crates: the
//! document payload written to an index, the term query used for the example
//! search, and the decoded search response.

mod document;
mod query;
mod response;

pub use document::DocumentPayload;
pub use query::{TermQuery, DEFAULT_FROM, DEFAULT_SIZE};
pub use response::{SearchHit, SearchResponse};
