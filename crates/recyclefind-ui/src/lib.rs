//! Query handling and result rendering for the recycling business finder.
//!
//! The page is modelled as two injected collaborators: an [`InputSource`]
//! that supplies the city and country, and a [`DisplayRegion`] that both
//! the [`QueryHandler`] and the renderer write to.

pub mod format;
pub mod handler;
pub mod input;
pub mod region;
pub mod render;

pub use format::{escape_html, CardFormat, HtmlCards, NoticeKind, TextCards};
pub use handler::{QueryHandler, SearchOutcome, LOADING_MESSAGE};
pub use input::{FixedInput, InputSource};
pub use region::{BufferRegion, DisplayRegion};
pub use render::{render, render_with};
