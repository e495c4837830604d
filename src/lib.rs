pub mod config;
pub mod engine_types;
pub mod sieve_math;
pub mod segment;
pub mod cpu_engine;
pub mod memory;
pub mod verify;
pub mod report;
pub mod logging;

pub use cpu_engine::{multithreaded_segmented_primes, partition, segmented_primes_with_pool};
pub use engine_types::{PrimeResult, Segment};
pub use segment::segment_primes;
pub use sieve_math::sieve_primes;
