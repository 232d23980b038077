//! HTTP handlers, one module per entity. Each handler is a pure function of
//! its path parameter against current store state.

pub mod events;
pub mod sessions;
pub mod speakers;
