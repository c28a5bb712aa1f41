use serde::Deserialize;
use tera::{Context, Tera};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::pager::{PageLink, PageWindow};

const PAGE_BAR_TEMPLATE_NAME: &str = "page_bar.txt";

// Single line: tera keeps the literal spaces between tags.
const PAGE_BAR_TEMPLATE: &str = "\
{% if window.previous_page %}{{ previous_label }} {{ window.previous_page }} | {% endif %}\
{% for link in links %}{% if link.active %}[{{ link.page }}]{% else %}{{ link.page }}{% endif %}{% if not loop.last %} {% endif %}{% endfor %}\
{% if window.next_page %} | {{ window.next_page }} {{ next_label }}{% endif %}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the window as a one-line page bar, e.g. `« 2 | 3 [4] 5 6 | 7 »`.
pub fn render_text(window: &PageWindow, config: &RenderConfig) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_BAR_TEMPLATE_NAME, PAGE_BAR_TEMPLATE)?;

    let links: Vec<PageLink> = window.links().collect();
    let mut ctx = Context::new();
    ctx.insert("window", window);
    ctx.insert("links", &links);
    ctx.insert("previous_label", &config.previous_label);
    ctx.insert("next_label", &config.next_label);

    tera.render(PAGE_BAR_TEMPLATE_NAME, &ctx).map_err(|e| {
        tracing::error!("Template render error ({}): {}", PAGE_BAR_TEMPLATE_NAME, e);
        RenderError::from(e)
    })
}

pub fn render_json(window: &PageWindow) -> Result<String, RenderError> {
    Ok(serde_json::to_string(window)?)
}

pub fn render(
    window: &PageWindow,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => render_text(window, config),
        OutputFormat::Json => render_json(window),
    }
}
