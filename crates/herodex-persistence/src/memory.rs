use crate::traits::RecordStore;
use async_trait::async_trait;
use herodex_core::{HerodexResult, Page};
use herodex_domain::{Hero, HeroId};

/// In-memory record store. All data is lost when the process exits.
///
/// Records live in a dense growable array: appends land at the first
/// unused slot (capacity doubles as needed), deletion shifts every later
/// record one slot toward the front so the array stays dense and the
/// logical size is simply the occupied length.
#[derive(Debug)]
pub struct MemoryStore {
    heroes: Vec<Hero>,
}

impl MemoryStore {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            heroes: Vec::with_capacity(initial_capacity),
        }
    }

    /// Start from an already-populated set of records, in order.
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    fn position_of(&self, id: HeroId) -> Option<usize> {
        self.heroes.iter().position(|hero| hero.id == id)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(10)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn size(&self) -> HerodexResult<usize> {
        Ok(self.heroes.len())
    }

    async fn append(&mut self, hero: Hero) -> HerodexResult<HeroId> {
        let id = hero.id;
        self.heroes.push(hero);
        tracing::debug!("Registered hero {} (store size {})", id, self.heroes.len());
        Ok(id)
    }

    async fn get_page(&self, page: &Page) -> HerodexResult<Vec<Hero>> {
        let start = page.offset().min(self.heroes.len());
        let end = (page.offset() + page.limit()).min(self.heroes.len());
        Ok(self.heroes[start..end].to_vec())
    }

    async fn get(&self, id: HeroId) -> HerodexResult<Option<Hero>> {
        Ok(self.position_of(id).map(|idx| self.heroes[idx].clone()))
    }

    async fn update(&mut self, id: HeroId, updated: &Hero) -> HerodexResult<bool> {
        match self.position_of(id) {
            Some(idx) => {
                self.heroes[idx].overwrite_with(updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&mut self, id: HeroId) -> HerodexResult<bool> {
        match self.position_of(id) {
            Some(idx) => {
                // O(n) compaction keeps the array dense.
                self.heroes.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn hero(alias: &str) -> Hero {
        Hero::new(
            alias.to_string(),
            NaiveDate::from_ymd_opt(1940, 1, 1).unwrap(),
            "First".to_string(),
            "Last".to_string(),
        )
    }

    async fn store_with(count: usize) -> MemoryStore {
        let mut store = MemoryStore::new(4);
        for i in 0..count {
            store.append(hero(&format!("hero-{i:02}"))).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_append_grows_size_by_one() {
        let mut store = MemoryStore::new(1);
        assert_eq!(store.size().await.unwrap(), 0);
        store.append(hero("a")).await.unwrap();
        store.append(hero("b")).await.unwrap();
        assert_eq!(store.size().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_append_then_get_round_trips_every_field() {
        let mut store = MemoryStore::default();
        let original = hero("Aquaman");
        let id = store.append(original.clone()).await.unwrap();

        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, original.id);
        assert_eq!(fetched.alias, original.alias);
        assert_eq!(fetched.debut, original.debut);
        assert_eq!(fetched.first_name, original.first_name);
        assert_eq!(fetched.last_name, original.last_name);
    }

    #[tokio::test]
    async fn test_get_page_never_exceeds_rows() {
        let store = store_with(11).await;
        for number in 1..=4 {
            let page = Page::new(number, 3).unwrap();
            assert!(store.get_page(&page).await.unwrap().len() <= 3);
        }
    }

    #[tokio::test]
    async fn test_partial_last_page() {
        let store = store_with(11).await;
        let last = Page::new(4, 3).unwrap();
        let rows = store.get_page(&last).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].alias, "hero-09");
        assert_eq!(rows[1].alias, "hero-10");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let store = store_with(3).await;
        let page = Page::new(5, 3).unwrap();
        assert!(store.get_page(&page).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concatenated_pages_reproduce_the_store() {
        let store = store_with(11).await;
        let mut all = Vec::new();
        for number in 1..=4 {
            let page = Page::new(number, 3).unwrap();
            all.extend(store.get_page(&page).await.unwrap());
        }
        let aliases: Vec<String> = all.into_iter().map(|h| h.alias).collect();
        let expected: Vec<String> = (0..11).map(|i| format!("hero-{i:02}")).collect();
        assert_eq!(aliases, expected);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_but_not_id() {
        let mut store = store_with(3).await;
        let page = Page::new(1, 3).unwrap();
        let target = store.get_page(&page).await.unwrap()[1].clone();

        let replacement = hero("Renamed");
        assert!(store.update(target.id, &replacement).await.unwrap());

        let fetched = store.get(target.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, target.id);
        assert_eq!(fetched.alias, "Renamed");
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_false() {
        let mut store = store_with(2).await;
        assert!(!store.update(Uuid::new_v4(), &hero("x")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_compacts_and_shrinks_size() {
        let mut store = store_with(5).await;
        let page = Page::new(1, 5).unwrap();
        let victim = store.get_page(&page).await.unwrap()[1].clone();

        assert!(store.delete(victim.id).await.unwrap());
        assert_eq!(store.size().await.unwrap(), 4);
        assert!(store.get(victim.id).await.unwrap().is_none());

        // Later records shifted one slot toward the front.
        let remaining = store.get_page(&page).await.unwrap();
        let aliases: Vec<&str> = remaining.iter().map(|h| h.alias.as_str()).collect();
        assert_eq!(aliases, vec!["hero-00", "hero-02", "hero-03", "hero-04"]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_size_unchanged() {
        let mut store = store_with(3).await;
        assert!(!store.delete(Uuid::new_v4()).await.unwrap());
        assert_eq!(store.size().await.unwrap(), 3);
    }
}
