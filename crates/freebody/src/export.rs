//! Exporters turning a drawn canvas into a file format.

pub mod svg;
