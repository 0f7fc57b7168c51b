//! SQLite access. Connections are opened per operation; SQLite itself
//! serializes writers, which is enough for this workload.

use rusqlite::{params, Connection};

use crate::config::Config;
use crate::services::admins::session;

pub fn open(cfg: &Config) -> rusqlite::Result<Connection> {
    Connection::open(&cfg.database)
}

/// Creates the schema and seeds the bootstrap super admin when the
/// admins table is empty.
pub fn init(cfg: &Config) -> rusqlite::Result<()> {
    let conn = open(cfg)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS persons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            nom TEXT NOT NULL DEFAULT '',
            prenom TEXT NOT NULL DEFAULT '',
            telephone TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS tests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id INTEGER NOT NULL REFERENCES persons(id),
            payload TEXT NOT NULL,
            matched TEXT NOT NULL,
            wants_contact INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS programs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            organisme TEXT NOT NULL DEFAULT '',
            lien TEXT NOT NULL DEFAULT '',
            criteres TEXT NOT NULL,
            published INTEGER NOT NULL DEFAULT 0,
            hero TEXT
        );
        CREATE TABLE IF NOT EXISTS news (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titre TEXT NOT NULL,
            resume TEXT NOT NULL DEFAULT '',
            contenu TEXT NOT NULL DEFAULT '',
            categorie TEXT NOT NULL DEFAULT '',
            image TEXT,
            published_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS partenaires (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            site TEXT NOT NULL DEFAULT '',
            logo TEXT
        );
        CREATE TABLE IF NOT EXISTS admins (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL,
            salt TEXT NOT NULL,
            password_digest TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            admin_id INTEGER NOT NULL REFERENCES admins(id),
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS activity (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        );",
    )?;

    let admins: i64 = conn.query_row("SELECT COUNT(*) FROM admins", [], |row| row.get(0))?;
    if admins == 0 {
        let salt = session::new_salt();
        let digest = session::password_digest(&salt, &cfg.seed_admin_password);
        conn.execute(
            "INSERT INTO admins (nom, email, role, salt, password_digest)
             VALUES ('Administrateur', ?1, 'super', ?2, ?3)",
            params![cfg.seed_admin_email, salt, digest],
        )?;
        log::info!("seeded bootstrap admin {}", cfg.seed_admin_email);
    }
    Ok(())
}

pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// A config pointing at a throwaway database inside `dir`.
    pub fn config_in(dir: &std::path::Path) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: dir.join("test.sqlite").to_string_lossy().into_owned(),
            uploads_dir: dir.join("uploads").to_string_lossy().into_owned(),
            seed_admin_email: "admin@test.ma".to_string(),
            seed_admin_password: "secret".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_schema_and_seeds_one_admin() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_support::config_in(dir.path());
        init(&cfg).unwrap();
        // Idempotent: a second init must not duplicate the seed.
        init(&cfg).unwrap();

        let conn = open(&cfg).unwrap();
        let admins: i64 = conn
            .query_row("SELECT COUNT(*) FROM admins", [], |row| row.get(0))
            .unwrap();
        assert_eq!(admins, 1);
        let role: String = conn
            .query_row("SELECT role FROM admins", [], |row| row.get(0))
            .unwrap();
        assert_eq!(role, "super");
    }
}
