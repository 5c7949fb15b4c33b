//! Lookup gateway trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::search::{SearchPayload, SearchRequest};

/// Transport to the remote lookup service.
///
/// Implementations perform exactly one exchange per call and return the
/// undecoded payload; classification happens in the caller.
///
/// Errors must be `AmbuError::NetworkFailure` when the exchange never
/// completed and `AmbuError::SearchGeneric` for a non-success status or an
/// unparsable body.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    async fn lookup(&self, request: &SearchRequest) -> Result<SearchPayload>;
}
