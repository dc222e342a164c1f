//! # folio-filter
//!
//! Project categorization and filtering for the Folio showcase.
//!
//! - [`migrate`]: legacy → enhanced record migration (role, skill, domain inference)
//! - [`state`]: the user's filter selection and its reducer
//! - [`predicate`]: per-project inclusion test
//! - [`collection`]: list-level filtering and active-filter summaries
//! - [`order`]: id ordering and featured/other partitioning
//!
//! Everything here is pure and synchronous. A filter pass is a single scan
//! over an in-memory slice.

pub mod collection;
pub mod migrate;
pub mod order;
pub mod predicate;
pub mod state;

pub use collection::{
    ActiveFiltersSummary, active_filters_summary, count_matching, filter_projects,
    has_active_filters,
};
pub use migrate::{migrate, migrate_all, migrate_project, normalized};
pub use order::{SortOrder, all_sorted, featured, other, sort_by_id};
pub use predicate::matches;
pub use state::{FilterAction, FilterCategory, FilterMode, FilterState, reduce};
