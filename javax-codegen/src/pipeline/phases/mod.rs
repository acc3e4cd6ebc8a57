//! Built-in pipeline phases.

mod extract;
mod format;
mod locate;
mod render;

pub use extract::ExtractPhase;
pub use format::FormatPhase;
pub use locate::LocatePhase;
pub use render::RenderPhase;
