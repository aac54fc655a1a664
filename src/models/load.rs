use crate::config::ServiceConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use utoipa::ToSchema;

pub const DEFAULT_ITERATIONS: i64 = 1000;

/// # Load Simulation Result
///
/// `result` is the sum of `i * i` for `i` in `0..iterations`. A negative
/// iteration count is an empty range and sums to zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoadResult {
    pub service: String,
    pub instance: String,
    pub iterations: i64,
    #[schema(value_type = u64)]
    pub result: u128,
    pub processing_time_ms: f64,
    pub timestamp: String,
}

impl LoadResult {
    pub fn new(config: &ServiceConfig, iterations: i64, result: u128, processing_time_ms: f64) -> Self {
        Self {
            service: config.service_name.clone(),
            instance: config.instance_id.clone(),
            iterations,
            result,
            processing_time_ms,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Burns CPU on purpose: the loop is kept opaque to the optimizer so the
/// work scales with `iterations`.
pub fn sum_of_squares(iterations: i64) -> u128 {
    let mut result: u128 = 0;
    for i in 0..iterations.max(0) as u128 {
        let i = black_box(i);
        result = result.wrapping_add(i * i);
    }
    result
}
