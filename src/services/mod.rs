pub mod renderer;

pub use renderer::{RenderOutput, RenderService};
