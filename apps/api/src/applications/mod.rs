// Application records: CRUD over the `applications` table plus the dashboard
// views (filter/sort, per-status stats, CSV export).

pub mod export;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod store;
pub mod validation;
