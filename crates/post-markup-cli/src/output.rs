use anyhow::{Context, Result};
use post_markup_config::{Config, OutputFormat};
use post_markup_engine::{
    BlockNode,
    parsing::snapshot,
    render::{self, PageOptions},
};

/// Renders formatted blocks as the configured output format.
///
/// Every format ends with a newline unless the output is empty.
pub fn render_output(raw: &str, blocks: &[BlockNode], config: &Config) -> Result<String> {
    let out = match config.format {
        OutputFormat::Html if config.html.standalone => {
            let opts = PageOptions {
                title: config.html.title.clone(),
                stylesheet: config.html.stylesheet.clone(),
            };
            render::to_html_page(blocks, &opts)
        }
        OutputFormat::Html => render::to_html(blocks),
        OutputFormat::Json => {
            serde_json::to_string_pretty(blocks).context("Failed to serialize blocks as JSON")?
        }
        OutputFormat::Text => render::to_plain_text(blocks),
        OutputFormat::Preview => render::preview(blocks, config.preview_chars),
        OutputFormat::Tree => snapshot::normalize(raw, blocks).to_string(),
    };
    Ok(terminate(out))
}

fn terminate(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
