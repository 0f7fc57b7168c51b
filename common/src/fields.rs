//! Closed vocabulary of eligibility fields.
//!
//! Both the admin rule builder and the evaluation engine work against
//! this fixed set: the builder to decide which value editor to render,
//! the engine to resolve submission values. Branch options are grouped
//! per sector, but the coupling is not enforced anywhere — a branch
//! from another sector can be persisted, matching the admin tool's
//! accepted behavior.

/// Which value editor a field calls for in the rule builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// Closed value set: single searchable dropdown, or a multi-select
    /// when combined with `in`/`notIn`.
    Select(&'static [&'static str]),
    Number,
    Year,
}

pub struct FieldDef {
    pub id: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
}

pub const APPLICANT_TYPES: &[&str] = &["physique", "morale"];

pub const SEXES: &[&str] = &["homme", "femme"];

pub const SECTORS: &[&str] = &[
    "agriculture",
    "industrie",
    "commerce",
    "services",
    "artisanat",
    "tourisme",
    "technologies",
];

/// Branch options per sector, in the order sectors are declared.
pub const SECTOR_BRANCHES: &[(&str, &[&str])] = &[
    (
        "agriculture",
        &["cultures", "élevage", "pêche", "agroalimentaire"],
    ),
    (
        "industrie",
        &["textile", "automobile", "aéronautique", "chimie", "plasturgie"],
    ),
    ("commerce", &["commerce de détail", "commerce de gros", "e-commerce"]),
    (
        "services",
        &["conseil", "transport", "logistique", "éducation", "santé"],
    ),
    ("artisanat", &["artisanat d'art", "artisanat de production", "artisanat de service"]),
    ("tourisme", &["hébergement", "restauration", "animation touristique"]),
    (
        "technologies",
        &["développement logiciel", "fintech", "agritech", "outsourcing"],
    ),
];

pub const REGIONS: &[&str] = &[
    "Tanger-Tétouan-Al Hoceïma",
    "Oriental",
    "Fès-Meknès",
    "Rabat-Salé-Kénitra",
    "Béni Mellal-Khénifra",
    "Casablanca-Settat",
    "Marrakech-Safi",
    "Drâa-Tafilalet",
    "Souss-Massa",
    "Guelmim-Oued Noun",
    "Laâyoune-Sakia El Hamra",
    "Dakhla-Oued Ed-Dahab",
];

pub const LEGAL_STATUSES: &[&str] = &[
    "auto-entrepreneur",
    "SARL",
    "SARL AU",
    "SA",
    "SNC",
    "coopérative",
    "association",
];

pub const FIELDS: &[FieldDef] = &[
    FieldDef {
        id: "type_personne",
        label: "Type de demandeur",
        input: FieldInput::Select(APPLICANT_TYPES),
    },
    FieldDef {
        id: "sexe",
        label: "Sexe",
        input: FieldInput::Select(SEXES),
    },
    FieldDef {
        id: "age",
        label: "Âge",
        input: FieldInput::Number,
    },
    FieldDef {
        id: "secteur_activite",
        label: "Secteur d'activité",
        input: FieldInput::Select(SECTORS),
    },
    FieldDef {
        id: "branche_activite",
        label: "Branche d'activité",
        // Options resolved through `options()`: the union across sectors.
        input: FieldInput::Select(&[]),
    },
    FieldDef {
        id: "region",
        label: "Région",
        input: FieldInput::Select(REGIONS),
    },
    FieldDef {
        id: "statut_juridique",
        label: "Statut juridique",
        input: FieldInput::Select(LEGAL_STATUSES),
    },
    FieldDef {
        id: "annee_creation",
        label: "Année de création",
        input: FieldInput::Year,
    },
    FieldDef {
        id: "chiffre_affaire",
        label: "Chiffre d'affaires",
        input: FieldInput::Number,
    },
    FieldDef {
        id: "montant_investissement",
        label: "Montant d'investissement",
        input: FieldInput::Number,
    },
];

pub fn field(id: &str) -> Option<&'static FieldDef> {
    FIELDS.iter().find(|def| def.id == id)
}

/// The closed value set for a field, empty for open (numeric/year)
/// fields. `branche_activite` yields the union across all sectors.
pub fn options(id: &str) -> Vec<&'static str> {
    if id == "branche_activite" {
        return SECTOR_BRANCHES
            .iter()
            .flat_map(|(_, branches)| branches.iter().copied())
            .collect();
    }
    match field(id).map(|def| def.input) {
        Some(FieldInput::Select(values)) => values.to_vec(),
        _ => Vec::new(),
    }
}

pub fn branches_for(sector: &str) -> &'static [&'static str] {
    SECTOR_BRANCHES
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, branches)| *branches)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(field("region").unwrap().label, "Région");
        assert!(field("inconnu").is_none());
    }

    #[test]
    fn branch_options_are_the_union_across_sectors() {
        let all = options("branche_activite");
        assert!(all.contains(&"fintech"));
        assert!(all.contains(&"élevage"));
        let per_sector: usize = SECTOR_BRANCHES.iter().map(|(_, b)| b.len()).sum();
        assert_eq!(all.len(), per_sector);
    }

    #[test]
    fn branches_for_unknown_sector_is_empty() {
        assert!(branches_for("finance").is_empty());
        assert_eq!(branches_for("tourisme").len(), 3);
    }

    #[test]
    fn open_fields_have_no_options() {
        assert!(options("age").is_empty());
        assert!(options("annee_creation").is_empty());
    }
}
