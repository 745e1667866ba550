//! Curriculum catalog for the study portal.
//!
//! Study material is organised in a fixed three-level hierarchy:
//! class level → subject → topic. This crate provides:
//!
//! - [`Curriculum`]: the catalog with lookup and topic search
//! - [`Curriculum::builtin`]: the catalog shipped with the portal
//! - [`Navigator`]: explicit selection state for walking the hierarchy
//!
//! # Example
//!
//! ```
//! use edu_curriculum::Curriculum;
//!
//! let curriculum = Curriculum::builtin();
//! let topics = curriculum.search_topics("Class 10", "math", "trig").unwrap();
//! assert_eq!(topics[0].id, "trigonometry");
//! ```

mod catalog;
mod curriculum;
mod navigation;

pub use curriculum::{ClassLevel, Curriculum, CurriculumError, Subject, Topic};
pub use navigation::{NavigationView, Navigator};
