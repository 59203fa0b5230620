//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::Member;
use anyhow::{anyhow, Result};

/// Presentation knobs shared across renderers.
pub struct RenderOptions {
    /// Directory prefix for heading icon images
    pub assets: String,
    /// Whether headings carry icon images at all
    pub icons: bool,
}

/// Trait for rendering the classified member sequence into an output format.
pub trait Renderer {
    fn render(&self, members: &[Member]) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, opts: &RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer {
            assets: opts.assets.clone(),
            icons: opts.icons,
        })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
