//! Simulated connection pool latency model.

use rand::Rng;

/// Pool sizes below this are treated as exhausted.
pub const SEVERE_POOL_THRESHOLD: u32 = 10;

/// Pool sizes below this (but at least [`SEVERE_POOL_THRESHOLD`]) see
/// moderate contention; at or above it the pool is considered healthy.
pub const HEALTHY_POOL_THRESHOLD: u32 = 25;

/// Simulated latency in milliseconds for acquiring a database connection.
///
/// Lower pool size means more contention:
/// - pool < 10:  2000 + U(0, 3000) ms, i.e. 2-5 seconds
/// - pool < 25:  500 + U(0, 1000) ms
/// - otherwise:  10 + U(0, 40) ms
///
/// Pool sizes of exactly 10 and 25 fall into the lower-latency tier.
/// Each call draws independently; there is no seeding.
pub fn connection_latency_ms(pool_size: u32) -> f64 {
    let mut rng = rand::thread_rng();

    if pool_size < SEVERE_POOL_THRESHOLD {
        // Severe contention - very high latency
        2000.0 + rng.gen_range(0.0..3000.0)
    } else if pool_size < HEALTHY_POOL_THRESHOLD {
        // Moderate contention
        500.0 + rng.gen_range(0.0..1000.0)
    } else {
        // Healthy pool size
        10.0 + rng.gen_range(0.0..40.0)
    }
}
