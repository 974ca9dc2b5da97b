//! HTTP DTOs for ranking endpoints.
//!
//! Responses are the domain entries serialized as a JSON array.

use serde::Deserialize;

/// `?year=&month=`; either may be omitted to use the current month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalVolumeQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}
