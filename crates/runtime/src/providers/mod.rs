//! Pet service implementations.
//!
//! - [`HttpPetService`] talks to the real backend over HTTP
//! - [`StaticPetService`] serves canned records from memory (tests, demos)

mod fixture;
mod http;

pub use fixture::StaticPetService;
pub use http::HttpPetService;
