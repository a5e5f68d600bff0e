//! ERPNext-style inventory API access
//!
//! One read contract: fetch a single item resource by code. The client
//! normalizes the response into [`ItemRecord`]; field validation beyond
//! "the body parsed" happens later, at render-time extraction.

mod client;
mod model;

pub use client::{ErpClient, FetchError};
pub use model::{ItemAttribute, ItemRecord, SupplierItem};

/// Seam for anything that can resolve an item code to a record.
///
/// Implemented by [`ErpClient`] in production and by stubs in pipeline
/// tests.
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    /// Look up one item by code
    async fn fetch_item(&self, code: &str) -> Result<ItemRecord, FetchError>;
}
