use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::person::Person;

use crate::config::Config;
use crate::services::admins::session;

/// Streams the user listing as a CSV attachment.
pub async fn process(req: HttpRequest, cfg: web::Data<Config>) -> impl Responder {
    if session::current_admin(&req, &cfg).is_none() {
        return HttpResponse::Unauthorized().body("Session requise");
    }
    let persons = match super::load_persons(&cfg) {
        Ok(persons) => persons,
        Err(err) => {
            log::error!("failed to export persons: {err}");
            return HttpResponse::ServiceUnavailable().body("Erreur lors de l'export");
        }
    };
    match to_csv(&persons) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"utilisateurs.csv\"",
            ))
            .body(bytes),
        Err(err) => {
            log::error!("failed to serialize export: {err}");
            HttpResponse::ServiceUnavailable().body("Erreur lors de l'export")
        }
    }
}

fn to_csv(persons: &[Person]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["email", "nom", "prenom", "telephone", "inscrit_le", "tests"])?;
    for person in persons {
        writer.write_record([
            person.email.as_str(),
            person.nom.as_str(),
            person.prenom.as_str(),
            person.telephone.as_str(),
            person.created_at.as_str(),
            &person.tests_count.to_string(),
        ])?;
    }
    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_person() {
        let persons = vec![Person {
            id: Some(1),
            email: "a@b.ma".to_string(),
            nom: "Alaoui".to_string(),
            prenom: "Imane".to_string(),
            telephone: "0600000000".to_string(),
            created_at: "2025-03-01T10:00:00Z".to_string(),
            tests_count: 2,
        }];
        let bytes = to_csv(&persons).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("email,nom"));
        assert!(lines[1].contains("Alaoui"));
    }
}
