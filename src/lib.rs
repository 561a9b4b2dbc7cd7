//! # Chained Hash Set
//!
//! A Rust implementation of a hash set resolving collisions by separate chaining.
//!
//! `ChainedHashSet` keeps one chain of elements per bucket. Its bucket array always has
//! a prime length and grows to the next prime at or above twice its size once the
//! number of elements exceeds the number of buckets. Elements supply their own
//! equality (`Eq`) and hash code ([`TableHash`]); the hash code may be negative.
//!
//! Duplicate inserts and removals of absent elements are silent no-ops.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainset::ChainedHashSet;
//!
//! // Create a new hash set with 101 buckets
//! let mut set = ChainedHashSet::new();
//!
//! // Insert values
//! set.insert("apple".to_string());
//! set.insert("banana".to_string());
//!
//! // Inserting again changes nothing
//! set.insert("apple".to_string());
//! assert_eq!(set.len(), 2);
//!
//! // Look up and remove values
//! assert!(set.contains(&"apple".to_string()));
//! set.remove(&"apple".to_string());
//! assert!(!set.contains(&"apple".to_string()));
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chainset::ChainedHashSet;
//!
//! let mut set = ChainedHashSet::new();
//! for i in 0..102 {
//!     set.insert(i);
//! }
//!
//! // 102 elements exceed 101 buckets, so the set rehashed into next_prime(202) buckets
//! assert_eq!(set.capacity(), 211);
//! assert!((0..102).all(|i| set.contains(&i)));
//! ```
//!
//! ## String Hashing
//!
//! ```rust
//! assert_eq!(chainset::hash("abc", 101), 67);
//! ```

/// Module implementing the separate chaining hash set
mod chained_hash_set;
/// Command-line configuration of the analysis binary
pub mod config;
/// Dataset reading
pub mod dataset;
/// Logger setup
pub mod logger;
/// Prime sizing of bucket arrays
pub mod primes;
/// Reference element type
pub mod record;
/// Hashing utilities
mod utils;
/// Timed workloads
pub mod workload;

pub use chained_hash_set::{ChainedHashSet, DEFAULT_TABLE_SIZE};
pub use record::GdpRecord;
pub use utils::{TableHash, hash};
