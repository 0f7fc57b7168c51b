use actix_web::HttpRequest;
use common::model::admin::{AdminAccount, AdminRole};
use rusqlite::params;
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::db;

pub const SESSION_COOKIE: &str = "session";

/// Salted SHA-256, hex encoded.
pub fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

pub fn new_salt() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn role_tag(role: AdminRole) -> &'static str {
    match role {
        AdminRole::Super => "super",
        AdminRole::Editor => "editor",
    }
}

pub fn role_from(raw: &str) -> AdminRole {
    match raw {
        "super" => AdminRole::Super,
        _ => AdminRole::Editor,
    }
}

/// Opens a session for the admin and returns its token.
pub fn create_session(cfg: &Config, admin_id: i64) -> rusqlite::Result<String> {
    let token = uuid::Uuid::new_v4().to_string();
    let conn = db::open(cfg)?;
    conn.execute(
        "INSERT INTO sessions (token, admin_id, created_at) VALUES (?1, ?2, ?3)",
        params![token, admin_id, db::now()],
    )?;
    Ok(token)
}

/// Resolves the request's session cookie to an admin account, or
/// `None` when there is no live session.
pub fn current_admin(req: &HttpRequest, cfg: &Config) -> Option<AdminAccount> {
    let token = req.cookie(SESSION_COOKIE)?.value().to_string();
    let conn = db::open(cfg).ok()?;
    conn.query_row(
        "SELECT admins.id, admins.nom, admins.email, admins.role
         FROM sessions JOIN admins ON admins.id = sessions.admin_id
         WHERE sessions.token = ?1",
        params![token],
        |row| {
            Ok(AdminAccount {
                id: Some(row.get(0)?),
                nom: row.get(1)?,
                email: row.get(2)?,
                role: role_from(&row.get::<_, String>(3)?),
            })
        },
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_salted() {
        let a = password_digest("sel", "motdepasse");
        assert_eq!(a, password_digest("sel", "motdepasse"));
        assert_ne!(a, password_digest("autre", "motdepasse"));
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn role_tags_round_trip() {
        for role in [AdminRole::Super, AdminRole::Editor] {
            assert_eq!(role_from(role_tag(role)), role);
        }
        assert_eq!(role_from("n'importe quoi"), AdminRole::Editor);
    }
}
