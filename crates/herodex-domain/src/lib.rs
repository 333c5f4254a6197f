pub mod form;
pub mod hero;

pub use form::{HeroDraft, HeroField, HERO_FIELDS};
pub use hero::{Hero, HeroId};
