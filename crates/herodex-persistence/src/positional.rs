use herodex_core::Page;
use herodex_domain::Hero;

/// Legacy in-memory store addressed by `(page, row-within-page)` instead
/// of a record id.
///
/// Positional addresses are fragile: deleting the record at absolute index
/// `i` shifts every later record one position forward, so a row index
/// captured before a mutation may silently target the wrong record
/// afterwards. Callers must re-fetch the page between mutations. New code
/// uses the identity-addressed [`crate::RecordStore`] backends; this type
/// intentionally does not implement that trait so the two addressing
/// schemes can never be mixed through one store object.
#[derive(Debug, Default)]
pub struct PositionalMemoryStore {
    heroes: Vec<Hero>,
}

impl PositionalMemoryStore {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            heroes: Vec::with_capacity(initial_capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn append(&mut self, hero: Hero) {
        self.heroes.push(hero);
    }

    pub fn get_page(&self, page: &Page) -> Vec<Hero> {
        let start = page.offset().min(self.heroes.len());
        let end = (page.offset() + page.limit()).min(self.heroes.len());
        self.heroes[start..end].to_vec()
    }

    /// Overwrite the record at `(page, row)`. `false` when the row falls
    /// outside the page's current window.
    pub fn update_at(&mut self, page: &Page, row: usize, updated: &Hero) -> bool {
        match self.absolute_index(page, row) {
            Some(idx) => {
                self.heroes[idx].overwrite_with(updated);
                true
            }
            None => false,
        }
    }

    /// Remove the record at `(page, row)`, shifting every later record one
    /// position forward. `false` when the row falls outside the page.
    pub fn delete_at(&mut self, page: &Page, row: usize) -> bool {
        match self.absolute_index(page, row) {
            Some(idx) => {
                self.heroes.remove(idx);
                true
            }
            None => false,
        }
    }

    fn absolute_index(&self, page: &Page, row: usize) -> Option<usize> {
        if row >= page.limit() {
            return None;
        }
        let idx = page.offset() + row;
        (idx < self.heroes.len()).then_some(idx)
    }
}
