//! HTTP client helpers (GraphQL).

pub(crate) mod api;
