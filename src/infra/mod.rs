//! Инфраструктурный слой вокруг Destiny Deck:
//! - RNG-реализации для движка;
//! - доменные seed'ы для реплея;
//! - счётчики разрешений.

pub mod metrics;
pub mod rng;
pub mod rng_seed;

pub use metrics::ResolutionMetrics;
pub use rng::*;
pub use rng_seed::RngSeed;
