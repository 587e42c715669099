//! Domain layer: money value objects, the allocation request/plan model, the
//! pure allocation function, and the ports the application layer talks to.

pub mod allocator;
pub mod debt;
pub mod plan;
pub mod ports;
pub mod request;
