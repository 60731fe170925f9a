//! Course catalog browser core.
//!
//! `course-catalog` loads a fixed table of courses from a bundled resource,
//! tracks which courses the user has selected, and derives the visible list,
//! optionally restricted to selected courses. The state lives in plain
//! structs with no UI dependency; [`view`] turns it into rows for whatever
//! front end draws them.

pub mod catalog;
pub mod config;
pub mod selection;
pub mod types;
pub mod view;
