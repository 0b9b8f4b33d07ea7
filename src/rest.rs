//! REST layer: outcome variants, request context, response renderer.

pub use restwire_rest::*;
