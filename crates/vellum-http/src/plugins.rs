//! Built-in plugins.

mod color_scheme;

pub use color_scheme::ColorScheme;
