//! SQL export of search results.
//!
//! Turns decoded business records into a T-SQL script that loads them into
//! the `recycling` schema: businesses, address components, opening hours,
//! matched materials and a default collection service. Each business is
//! inserted inside its own `TRY` block so one bad row is logged to
//! `@ErrorLog` instead of aborting the batch.

pub mod hours;
pub mod materials;
pub mod sql;

pub use hours::{parse_opening_hours, DayHours};
pub use materials::{match_materials, MaterialMatch, EXISTING_MATERIALS};
pub use sql::{generate_sql_statements, sql_quote};
