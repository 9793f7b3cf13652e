//! Database layer: pool, migrations, repositories and the admin store seam.

mod pool;
mod repositories;
mod store;

pub use pool::{create_pool, run_migrations, DbPool};
pub use repositories::*;
pub use store::{AdminStore, MemoryAdminStore};
