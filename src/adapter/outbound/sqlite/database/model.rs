//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::metadata;

/// Database row for one metadata entry.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = metadata)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MetadataRow {
    pub owner: String,
    pub key: String,
    pub value: String,
    pub version: i32,
}
