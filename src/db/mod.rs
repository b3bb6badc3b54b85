//! Database access: session-credential pool, service-credential escalation,
//! and the bounded read retry.

mod escalate;
mod pool;
mod retry;

pub use pool::{AsyncDbPool, Db, MIGRATIONS};
