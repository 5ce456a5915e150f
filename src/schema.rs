//! Statically declared layout of the climate store.
//!
//! The service never creates or migrates these tables; the DDL documents the
//! columns the queries in [`crate::store`] rely on and is used to build
//! fixture databases.

/// DDL for the `measurement` and `station` tables.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp FLOAT,
    tobs FLOAT NOT NULL
);

CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
);
"#;
