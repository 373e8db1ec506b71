pub mod backend;
pub mod http;
pub mod submit;

pub use backend::{lookup_sku_or_none, ApiError, RfqBackend, RfqReceipt, SupplierFilter};
pub use http::HttpBackend;
pub use submit::{submit_draft, SubmitError};
