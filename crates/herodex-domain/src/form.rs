//! Editable draft of a hero plus the field table that drives form
//! rendering.
//!
//! Instead of inspecting the record's shape at runtime, the form fields
//! are declared once in [`HERO_FIELDS`]: a label, a getter, and a setter
//! per field. One form renderer iterates the table and works for any
//! record shape declared this way.

use crate::hero::Hero;
use chrono::NaiveDate;

/// The date format drafts must use for the debut field.
pub const DEBUT_FORMAT: &str = "%Y-%m-%d";

/// All hero fields are edited as text; parsing happens at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroDraft {
    pub alias: String,
    pub debut: String,
    pub first_name: String,
    pub last_name: String,
}

/// One entry of the form descriptor table.
pub struct HeroField {
    pub label: &'static str,
    pub get: fn(&HeroDraft) -> &str,
    pub set: fn(&mut HeroDraft, String),
}

/// The statically declared form layout for a hero record.
pub static HERO_FIELDS: &[HeroField] = &[
    HeroField {
        label: "Alias",
        get: |d| &d.alias,
        set: |d, v| d.alias = v,
    },
    HeroField {
        label: "Debut (YYYY-MM-DD)",
        get: |d| &d.debut,
        set: |d, v| d.debut = v,
    },
    HeroField {
        label: "First name",
        get: |d| &d.first_name,
        set: |d, v| d.first_name = v,
    },
    HeroField {
        label: "Last name",
        get: |d| &d.last_name,
        set: |d, v| d.last_name = v,
    },
];

impl HeroDraft {
    /// Pre-fill a draft from an existing record for editing.
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            alias: hero.alias.clone(),
            debut: hero.debut.format(DEBUT_FORMAT).to_string(),
            first_name: hero.first_name.clone(),
            last_name: hero.last_name.clone(),
        }
    }

    /// Collect every problem with the draft. An empty vec means the draft
    /// can be turned into a record.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if NaiveDate::parse_from_str(self.debut.trim(), DEBUT_FORMAT).is_err() {
            problems.push(format!(
                "Invalid debut date. Expected format {}, given {}",
                DEBUT_FORMAT, self.debut
            ));
        }
        if self.alias.trim().is_empty() {
            problems.push("Alias is required".to_string());
        }
        if self.first_name.trim().is_empty() {
            problems.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            problems.push("Last name is required".to_string());
        }

        problems
    }

    /// Build a new record (fresh id) from a valid draft.
    pub fn into_hero(self) -> Option<Hero> {
        let debut = NaiveDate::parse_from_str(self.debut.trim(), DEBUT_FORMAT).ok()?;
        if self.alias.trim().is_empty()
            || self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
        {
            return None;
        }
        Some(Hero::new(
            self.alias.trim().to_string(),
            debut,
            self.first_name.trim().to_string(),
            self.last_name.trim().to_string(),
        ))
    }
}
