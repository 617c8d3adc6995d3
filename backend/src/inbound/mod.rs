//! Inbound adapters that translate external requests into calls on the
//! registration driving port while keeping framework details at the edge.

pub mod http;
