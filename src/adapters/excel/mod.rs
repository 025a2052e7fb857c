//! Spreadsheet artifact renderer adapter

pub mod renderer;

pub use renderer::XlsxRenderer;
