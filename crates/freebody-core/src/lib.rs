//! Freebody Core Types and Definitions
//!
//! This crate provides the foundational types for Freebody diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and angle helpers ([`geometry`] module)
//! - **Scene**: The scene description consumed by the renderer ([`scene`] module)
//! - **Draw**: Drawing primitives and their SVG rendering ([`draw`] module)
//! - **Surface**: The drawing surface and output region seams ([`surface`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
pub mod surface;
