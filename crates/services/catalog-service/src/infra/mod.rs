//! Infrastructure: database connection and migrations.

mod db;
pub mod migrations;

pub use db::Database;
