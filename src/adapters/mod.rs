// Adapters layer: concrete implementations for the output side (tables,
// HTML document, console summary).

pub mod emitter;
pub mod html;
pub mod summary;
pub mod table;
