//! # API Module
//!
//! HTTP route handlers for the sporlweb front-end. Each handler extracts its
//! path parameter, asks the [`crate::query`] adapter for the data and renders
//! one of the [`crate::views`].
//!
//! ## Endpoints
//!
//! - [`homepage`] - `GET /`, static search page, no catalog calls
//! - [`search`] - `GET /search/{name}`, artists matching a name
//! - [`artist`] - `GET /artist/{id}`, profile, top tracks and related artists
//! - [`not_found`] - fallback for everything else
//!
//! Catalog failures are rendered as error pages with a status that reflects
//! the kind of failure; see [`crate::error::AppError`].

mod artist;
mod homepage;
mod not_found;
mod search;

pub use artist::artist;
pub use homepage::homepage;
pub use not_found::not_found;
pub use search::search;
