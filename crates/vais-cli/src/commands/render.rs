use std::io::Write;

use anyhow::{Context, bail};
use vais_builder::{BlocksPanel, Canvas, RenderMode, SectionsPanel, render_canvas};

use crate::cli::RenderArgs;

/// Assemble a canvas from the arguments.
pub fn build_canvas(args: &RenderArgs) -> anyhow::Result<Canvas> {
    let mut canvas = match &args.input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Canvas::from_json(&json).with_context(|| format!("invalid canvas in {}", path.display()))?
        }
        None => Canvas::new(),
    };

    let sections = SectionsPanel::new();
    for id in &args.sections {
        if sections.append_section(&mut canvas, id) == 0 {
            let known: Vec<&str> = sections.sections().iter().map(|s| s.id).collect();
            bail!("unknown section '{id}' (expected one of: {})", known.join(", "));
        }
    }

    let blocks = BlocksPanel::new();
    for kind in &args.blocks {
        blocks.append_template(&mut canvas, kind.as_str());
    }
    Ok(canvas)
}

/// `vais render`
pub fn run_render(args: &RenderArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let canvas = build_canvas(args)?;
    let mode = if args.edit {
        RenderMode::Edit
    } else {
        RenderMode::Preview
    };
    let text = if args.json {
        canvas.to_json()?
    } else {
        render_canvas(&canvas, mode)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), blocks = canvas.len(), "canvas written");
        }
        None => writeln!(out, "{text}")?,
    }
    Ok(())
}
