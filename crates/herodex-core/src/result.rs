use crate::error::HerodexError;

pub type HerodexResult<T> = Result<T, HerodexError>;
