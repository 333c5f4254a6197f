pub mod config;
pub mod error;
pub mod paging;
pub mod result;

pub use config::AppConfig;
pub use error::HerodexError;
pub use paging::{Page, PagingService, FIRST_PAGE};
pub use result::HerodexResult;
