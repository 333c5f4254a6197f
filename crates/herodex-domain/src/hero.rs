use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type HeroId = Uuid;

/// A registered hero. The id is assigned once at creation and is never
/// reused or mutated; it is the only addressing key the stores accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub alias: String,
    pub debut: NaiveDate,
    pub first_name: String,
    pub last_name: String,
}

impl Hero {
    pub fn new(alias: String, debut: NaiveDate, first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            alias,
            debut,
            first_name,
            last_name,
        }
    }

    /// Take every field except the id from `updated`. Stores call this so
    /// an update can never reassign a record's identity.
    pub fn overwrite_with(&mut self, updated: &Hero) {
        self.alias = updated.alias.clone();
        self.debut = updated.debut;
        self.first_name = updated.first_name.clone();
        self.last_name = updated.last_name.clone();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Hero {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Hero {}

#[cfg(test)]
mod tests {
    use super::*;

    fn debut(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Hero::new("Batman".into(), debut(1939), "Bruce".into(), "Wayne".into());
        let b = Hero::new("Batman".into(), debut(1939), "Bruce".into(), "Wayne".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Hero::new("Flash".into(), debut(1940), "Jay".into(), "Garrick".into());
        let mut b = a.clone();
        b.alias = "The Flash".into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut hero = Hero::new("Robin".into(), debut(1940), "Dick".into(), "Grayson".into());
        let id = hero.id;
        let updated = Hero::new("Nightwing".into(), debut(1984), "Dick".into(), "Grayson".into());

        hero.overwrite_with(&updated);
        assert_eq!(hero.id, id);
        assert_eq!(hero.alias, "Nightwing");
        assert_eq!(hero.debut, debut(1984));
    }

    #[test]
    fn test_serde_round_trip() {
        let hero = Hero::new(
            "Wonder Woman".into(),
            debut(1941),
            "Diana".into(),
            "Prince".into(),
        );
        let line = serde_json::to_string(&hero).unwrap();
        let parsed: Hero = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.id, hero.id);
        assert_eq!(parsed.alias, hero.alias);
        assert_eq!(parsed.debut, hero.debut);
        assert_eq!(parsed.first_name, hero.first_name);
        assert_eq!(parsed.last_name, hero.last_name);
    }
}
