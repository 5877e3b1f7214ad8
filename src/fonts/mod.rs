//! Font descriptors attached to text runs.
//!
//! Glyph and metric resolution happens upstream; the converter only needs the
//! classification flags and the weight of the font a run was shown with.

mod descriptor;

pub use descriptor::{FontDescriptor, FontFlags, FontWeight};
