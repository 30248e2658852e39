//! `render` command: SEOmatic data to an HTML fragment.

use anyhow::Result;

use super::args::{Part, RenderArgs};
use super::common::{read_data, write_output};
use crate::config::SeomaticConfig;
use crate::markup::{RenderOptions, Tag, to_html_with};
use crate::seo::{HeadPlacement, Renderer, SeomaticData};
use crate::{debug, log};

/// Execute render command
pub fn run_render(args: &RenderArgs, config: &SeomaticConfig) -> Result<()> {
    let data = read_data(args.input.as_deref())?;
    if data.is_empty() {
        log!("render"; "no containers in input, nothing to render");
    }

    let html = render_part(&data, args.part, config)?;
    write_output(args.output.as_deref(), &html)?;

    if let Some(path) = &args.output {
        log!("render"; "wrote {}", path.display());
    }
    Ok(())
}

/// Render the requested part with the configured placement.
pub fn render_part(data: &SeomaticData, part: Part, config: &SeomaticConfig) -> Result<String> {
    let style = config.render.body_script_style.as_str();
    let options = config.render_options();

    if config.render.native {
        render_with(&Renderer::native().with_body_script_style(style), data, part, options)
    } else {
        render_with(&Renderer::new().with_body_script_style(style), data, part, options)
    }
}

fn render_with<P: HeadPlacement>(
    renderer: &Renderer<P>,
    data: &SeomaticData,
    part: Part,
    options: RenderOptions,
) -> Result<String> {
    let tags: Vec<Tag> = match part {
        Part::Head => renderer.head(data)?,
        Part::Body => renderer.body(data)?,
        Part::All => {
            let page = renderer.page(data)?;
            page.head.into_iter().chain(page.body).collect()
        }
    };

    debug!("render"; "{:?}: {} tags", part, tags.len());
    Ok(to_html_with(&tags, options))
}
