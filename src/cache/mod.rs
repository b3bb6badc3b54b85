//! In-process TTL cache for read-heavy admin lists.
//!
//! One unified cache service, injected through `AppState` rather than a
//! process global, keyed by a typed [`CacheKey`] instead of concatenated
//! strings so invalidation cannot be broken by a key typo.
//!
//! Semantics:
//! - The staleness tolerance is supplied by the reader, not stored with the
//!   entry; two callers can read the same entry with different TTLs.
//! - A stale entry behaves as a miss but is left in place. There is no
//!   background sweep and no size bound; entries live until a mutation
//!   removes them by key.
//! - There is no per-key in-flight de-duplication: concurrent readers that
//!   both miss will both run the underlying query.

mod key;
mod store;

pub use key::CacheKey;
pub use store::TtlCache;
