//! Application layer orchestrating the pure allocator over the storage
//! ports: balance re-fetch, the over-payment submission gate, and the
//! commit of effective lines as payment rows.

pub mod service;
