//! Recruiting assistant backend: job postings, resume intake and shortlist
//! records over a document store, plus typed clients for this API and the
//! external matcher.

pub mod client;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod models;
pub mod resumes;
pub mod routes;
pub mod shortlists;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;
