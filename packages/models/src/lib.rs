// ABOUTME: Entity types shared across the Comica packages
// ABOUTME: Tags carry operations; authors and badges are schema definitions only

pub mod author;
pub mod badge;
pub mod tag;

// Re-export main types
pub use author::Author;
pub use badge::{Badge, BadgeType};
pub use tag::{Tag, TagDraft};
