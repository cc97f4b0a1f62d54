//! SQL schema for the Astra SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Profiles are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS profiles (
    profile_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    birthday    TEXT NOT NULL,   -- ISO 8601 calendar date
    birthplace  TEXT NOT NULL,
    job_title   TEXT NOT NULL,
    sun_sign    TEXT NOT NULL,   -- one of the twelve sign labels
    archetype   TEXT NOT NULL,   -- 'Generator' | 'Projector' | 'Manifestor' | 'Reflector'
    lat         REAL,            -- NULL when geocoding was skipped
    lng         REAL,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS profiles_created_idx ON profiles(created_at);

PRAGMA user_version = 1;
";
