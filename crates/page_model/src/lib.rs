//! Static model of the portfolio page.
//!
//! This crate provides:
//! - `SectionId`: the fixed, ordered set of content sections
//! - `SectionRect`: the on-page vertical extent of a rendered section
//! - `content`: the inline render data (profile, projects, skills, contact)
//! - `html`: string rendering of the page and the navigation bar
//!
//! Everything here is render data; the scroll-spy core consumes sections
//! only by geometry, never by content.

pub mod content;
pub mod geometry;
pub mod html;
pub mod section;

pub use geometry::SectionRect;
pub use section::SectionId;
