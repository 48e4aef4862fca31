//! Usage metric model for the Usage tab.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetric {
    pub id: String,
    pub label: String,
    pub current: u64,
    pub max: u64,
    pub unit: String,
}
