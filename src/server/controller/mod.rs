//! HTTP controllers for the read-only API.
//!
//! Controllers extract the shared `AppState`, read from the store or the
//! connection tracker, and convert domain models into DTOs for the response.

pub mod bot;
pub mod channel;

#[cfg(test)]
mod test;
