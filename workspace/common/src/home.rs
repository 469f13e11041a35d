use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A home known to the planner, looked up by UPRN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Home {
    /// Unique Property Reference Number.
    pub uprn: String,
    /// Display address.
    pub address: String,
    /// Current EPC band, if the property has been assessed.
    pub epc_rating: Option<String>,
}
