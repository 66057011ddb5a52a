pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod summary;

use crate::config::Config;
use crate::core::RosterStore;
use crate::errors::AppResult;
use crate::store;

/// Load the roster through the configured backend and policies.
pub(crate) fn open_roster(cfg: &Config) -> AppResult<RosterStore> {
    RosterStore::open(store::open(cfg), cfg.name_policy, cfg.import_duplicates)
}
