//! Paginated joke collection: domain models, validation, and data sources.
//!
//! Pages are addressed by [`PageNumber`] and returned as [`PageResult`]s by
//! a [`JokeSource`]. User-typed page numbers are checked against the known
//! bounds with [`page_input_has_error`] / [`validate_page_input`] before any
//! fetch is issued.

pub mod error;
pub mod models;
pub mod pagination;
pub mod sanitize;
pub mod source;
pub mod validation;

pub use error::FetchError;
pub use models::{Joke, PageResult};
pub use pagination::{PageInfo, PageNumber};
pub use sanitize::sanitize_text;
pub use source::{CachingJokeSource, HttpJokeSource, JokeSource, SourceSettings};
pub use validation::{
    PageInputError, page_input_has_error, parse_page_input, validate_page_input,
};

#[cfg(test)]
pub use source::MockJokeSource;

#[cfg(test)]
mod tests;
