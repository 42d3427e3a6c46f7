//! Block rendering.
//!
//! [`render_block`] dispatches on the block's kind to one renderer per kind.
//! Renderers only read the block and return a [`Node`] tree; serialization
//! and escaping happen in [`Node::to_html`].

mod node;

pub use node::{Element, Node, escape_html, sanitize_css_value, sanitize_url};

use crate::block::{
    Block, BlockContent, ButtonBlock, DynamicContentBlock, FeaturesBlock, FooterSocialBlock,
    ImageBlock, LogoBlock, NavigationBlock, ProductBlock, TextBlock, VideoBlock,
};
use crate::canvas::Canvas;

/// Width of the rendered email body in pixels.
pub const CONTAINER_WIDTH: u16 = 600;

/// Where the output is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Inside the editor: block roots carry `data-block-id` and
    /// `data-block-kind` so the host can map clicks back to blocks.
    Edit,
    /// Read-only preview or export.
    #[default]
    Preview,
}

/// Render one block.
pub fn render_block(block: &Block, mode: RenderMode) -> Node {
    let inner = match block.content() {
        BlockContent::Text(b) => render_text(b),
        BlockContent::Button(b) => render_button(b),
        BlockContent::Image(b) => render_image(b),
        BlockContent::Video(b) => render_video(b),
        BlockContent::Logo(b) => render_logo(b),
        BlockContent::Navigation(b) => render_navigation(b),
        BlockContent::Product(b) => render_product(b),
        BlockContent::FooterSocial(b) => render_footer_social(b),
        BlockContent::DynamicContent(b) => render_dynamic_content(b),
        BlockContent::Features(b) => render_features(b),
    };

    let mut root = Element::new("div")
        .attr("class", format!("vais-block vais-block-{}", block.kind()))
        .css_all(block.style().declarations())
        .child(inner);
    if mode == RenderMode::Edit {
        root = root
            .attr("data-block-id", block.id().to_string())
            .attr("data-block-kind", block.kind().as_str());
    }
    root.into()
}

/// Render every block of `canvas` inside a centred container table.
pub fn render_canvas_node(canvas: &Canvas, mode: RenderMode) -> Node {
    let cells = canvas.iter().map(|block| {
        Node::from(Element::new("tr").child(Element::new("td").child(render_block(block, mode))))
    });

    Element::new("table")
        .attr("role", "presentation")
        .attr("width", CONTAINER_WIDTH.to_string())
        .attr("cellpadding", "0")
        .attr("cellspacing", "0")
        .css("margin", "0 auto")
        .css("max-width", format!("{CONTAINER_WIDTH}px"))
        .css("border-collapse", "collapse")
        .child(Element::new("tbody").children(cells))
        .into()
}

/// Render `canvas` to an HTML string.
pub fn render_canvas(canvas: &Canvas, mode: RenderMode) -> String {
    let html = render_canvas_node(canvas, mode).to_html();
    tracing::debug!(blocks = canvas.len(), bytes = html.len(), ?mode, "canvas rendered");
    html
}

// ============================================================================
// Per-kind renderers
// ============================================================================

fn render_text(b: &TextBlock) -> Node {
    Element::new("p")
        .css("margin", "0")
        .css("font-size", format!("{}px", b.font_size))
        .css("font-weight", b.font_weight.clone())
        .css("color", b.text_color.clone())
        .css("line-height", b.line_height.to_string())
        .text(b.content.clone())
        .into()
}

fn render_button(b: &ButtonBlock) -> Node {
    let mut link = Element::new("a")
        .attr("href", b.link.clone())
        .css("display", "inline-block")
        .css("padding", "12px 24px")
        .css("background-color", b.button_color.clone())
        .css("color", b.text_color.clone())
        .css("border-radius", format!("{}px", b.border_radius))
        .css("text-decoration", "none")
        .text(b.text.clone());
    if let Some(tooltip) = &b.tooltip {
        link = link.attr("title", tooltip.clone());
    }
    link.into()
}

fn image(src: &str, alt: &str) -> Element {
    Element::new("img")
        .attr("src", src)
        .attr("alt", alt)
        .css("display", "block")
        .css("max-width", "100%")
        .css("height", "auto")
        .css("border", "0")
}

fn linked(inner: Element, link: Option<&String>) -> Node {
    match link {
        Some(href) => Element::new("a").attr("href", href.clone()).child(inner).into(),
        None => inner.into(),
    }
}

fn render_image(b: &ImageBlock) -> Node {
    linked(image(&b.src, &b.alt).css("margin", "0 auto"), b.link.as_ref())
}

fn render_logo(b: &LogoBlock) -> Node {
    linked(image(&b.src, &b.alt).css("margin", "0 auto"), b.link.as_ref())
}

fn render_video(b: &VideoBlock) -> Node {
    let poster = image(&b.thumbnail, &b.title).css("margin", "0 auto");
    Element::new("a")
        .attr("href", b.src.clone())
        .child(poster)
        .child(
            Element::new("p")
                .css("margin", "8px 0 0")
                .css("font-weight", "bold")
                .text(b.title.clone()),
        )
        .into()
}

fn render_navigation(b: &NavigationBlock) -> Node {
    let links = b.items.iter().map(|item| {
        Node::from(
            Element::new("a")
                .attr("href", item.link.clone())
                .css("margin", "0 12px")
                .css("text-decoration", "none")
                .text(item.label.clone()),
        )
    });
    Element::new("nav").children(links).into()
}

fn render_product(b: &ProductBlock) -> Node {
    Element::new("div")
        .child(image(&b.image, &b.name).css("margin", "0 auto"))
        .child(Element::new("h3").css("margin", "12px 0 4px").text(b.name.clone()))
        .child(
            Element::new("p")
                .css("margin", "0")
                .css("font-weight", "bold")
                .text(b.price.clone()),
        )
        .child(Element::new("p").css("margin", "8px 0").text(b.description.clone()))
        .child(
            Element::new("a")
                .attr("href", b.link.clone())
                .css("display", "inline-block")
                .css("padding", "10px 20px")
                .text(b.button_text.clone()),
        )
        .into()
}

fn render_footer_social(b: &FooterSocialBlock) -> Node {
    let socials = b.social_links.iter().map(|link| {
        Node::from(
            Element::new("a")
                .attr("href", link.url.clone())
                .attr("data-platform", link.platform.as_str())
                .css("margin", "0 6px")
                .text(link.platform.as_str()),
        )
    });
    Element::new("footer")
        .css("font-size", "12px")
        .css("color", "#666666")
        .child(Element::new("div").children(socials))
        .child(Element::new("p").css("margin", "8px 0 0").text(b.company.clone()))
        .child(Element::new("p").css("margin", "0").text(b.address.clone()))
        .child(
            Element::new("a")
                .attr("href", "{{unsubscribe_url}}")
                .text(b.unsubscribe_text.clone()),
        )
        .into()
}

fn render_dynamic_content(b: &DynamicContentBlock) -> Node {
    Element::new("span")
        .attr("class", "vais-merge-tag")
        .attr("data-fallback", b.fallback.clone())
        .text(format!("{{{{{}}}}}", b.field_name))
        .into()
}

fn render_features(b: &FeaturesBlock) -> Node {
    let share = if b.items.is_empty() {
        100
    } else {
        100 / b.items.len()
    };
    let cells = b.items.iter().map(|item| {
        Node::from(
            Element::new("td")
                .attr("width", format!("{share}%"))
                .css("vertical-align", "top")
                .css("padding", "8px")
                .child(Element::new("div").css("font-size", "24px").text(item.icon.clone()))
                .child(Element::new("h4").css("margin", "8px 0 4px").text(item.title.clone()))
                .child(Element::new("p").css("margin", "0").text(item.description.clone())),
        )
    });
    Element::new("table")
        .attr("role", "presentation")
        .attr("width", "100%")
        .child(Element::new("tr").children(cells))
        .into()
}
