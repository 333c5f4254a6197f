use async_trait::async_trait;
use herodex_core::{HerodexResult, Page};
use herodex_domain::{Hero, HeroId};

/// Identity-addressed storage for hero records.
///
/// Every backend honors the same contract:
/// - `append` grows `size` by exactly one and returns the assigned id;
/// - `get_page` returns at most `page.rows()` records, never a
///   past-the-end slot, in a stable order (insertion order, or an explicit
///   sort key for the relational backend);
/// - `update`/`delete` address a record by its id and report `Ok(false)`
///   when nothing matched — an expected outcome the caller branches on,
///   not an error.
///
/// I/O and database failures propagate as errors; there is no retry.
/// The positional addressing scheme is deliberately not part of this
/// trait: see [`crate::positional::PositionalMemoryStore`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Number of records currently stored.
    async fn size(&self) -> HerodexResult<usize>;

    /// Register a new record and return the id it is stored under.
    async fn append(&mut self, hero: Hero) -> HerodexResult<HeroId>;

    /// The window of records visible on `page`.
    async fn get_page(&self, page: &Page) -> HerodexResult<Vec<Hero>>;

    /// Look a record up by id.
    async fn get(&self, id: HeroId) -> HerodexResult<Option<Hero>>;

    /// Overwrite the record with `id` with every non-id field of
    /// `updated`. Returns whether a record matched.
    async fn update(&mut self, id: HeroId, updated: &Hero) -> HerodexResult<bool>;

    /// Remove the record with `id`. Returns whether a record matched.
    async fn delete(&mut self, id: HeroId) -> HerodexResult<bool>;
}
