//! Port implementations. Only in-memory backends live here; durable storage
//! is an external collaborator behind the same traits.

pub mod in_memory;
