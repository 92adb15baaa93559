//! State behind the interactive page widgets.
//!
//! Each widget is a small value type whose state is carried in query
//! parameters (`?color=`, `?image=`, `?tab=`) or, for the header, computed
//! per animation frame by the browser script.

pub mod gallery;
pub mod header;
pub mod swatch;
pub mod tabs;

pub use gallery::Gallery;
pub use header::{HeaderStyle, scroll_progress};
pub use swatch::{ColorSelection, Swatch, swatch_for};
pub use tabs::ProductTab;
