//! Template catalogs shown beside the canvas.
//!
//! [`BlocksPanel`] maps template ids to single-block factories;
//! [`SectionsPanel`] maps section ids to ready-made groups of blocks. Unknown
//! ids produce nothing.

use crate::block::{Block, BlockContent, FeatureItem};
use crate::canvas::Canvas;
use crate::factory::*;
use crate::field::BlockField;
use crate::style::Alignment;

/// Grouping of block templates in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    /// Text and buttons.
    Basic,
    /// Images, logos and video.
    Media,
    /// Navigation, footers and feature grids.
    Layout,
    /// Product cards.
    Commerce,
    /// Personalisation.
    Dynamic,
}

/// A single-block template.
#[derive(Debug, Clone, Copy)]
pub struct BlockTemplate {
    /// Stable template id.
    pub id: &'static str,
    /// Panel label.
    pub label: &'static str,
    /// Panel group.
    pub category: TemplateCategory,
    /// Builds a fresh block.
    pub factory: fn() -> Block,
}

/// Catalog of single-block templates.
#[derive(Debug, Clone)]
pub struct BlocksPanel {
    templates: Vec<BlockTemplate>,
}

impl Default for BlocksPanel {
    fn default() -> Self {
        use TemplateCategory::*;

        let t = |id, label, category, factory| BlockTemplate {
            id,
            label,
            category,
            factory,
        };
        Self {
            templates: vec![
                t("text", "Text", Basic, create_text_block as fn() -> Block),
                t("button", "Button", Basic, create_button_block),
                t("image", "Image", Media, create_image_block),
                t("video", "Video", Media, create_video_block),
                t("logo", "Logo", Media, create_logo_block),
                t("navigation", "Navigation", Layout, create_navigation_block),
                t("footer-social", "Footer & social", Layout, create_footer_social_block),
                t("features", "Features", Layout, create_features_block),
                t("product", "Product", Commerce, create_product_block),
                t("dynamic-content", "Dynamic content", Dynamic, create_dynamic_content_block),
            ],
        }
    }
}

impl BlocksPanel {
    /// Panel with every built-in template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates in panel order.
    pub fn templates(&self) -> &[BlockTemplate] {
        &self.templates
    }

    /// Templates in one category.
    pub fn in_category(&self, category: TemplateCategory) -> impl Iterator<Item = &BlockTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Fresh block for template `id`.
    pub fn create(&self, id: &str) -> Option<Block> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(|t| (t.factory)())
    }

    /// Append the block for template `id`; returns how many blocks were added.
    pub fn append_template(&self, canvas: &mut Canvas, id: &str) -> usize {
        match self.create(id) {
            Some(block) => {
                canvas.push(block);
                1
            }
            None => {
                tracing::debug!(template = id, "unknown block template");
                0
            }
        }
    }
}

/// A multi-block section template.
#[derive(Debug, Clone, Copy)]
pub struct SectionTemplate {
    /// Stable section id.
    pub id: &'static str,
    /// Panel label.
    pub label: &'static str,
    /// Builds the section's blocks.
    pub build: fn() -> Vec<Block>,
}

/// Catalog of section templates.
#[derive(Debug, Clone)]
pub struct SectionsPanel {
    sections: Vec<SectionTemplate>,
}

impl Default for SectionsPanel {
    fn default() -> Self {
        let s = |id, label, build| SectionTemplate { id, label, build };
        Self {
            sections: vec![
                s("hero", "Hero", hero as fn() -> Vec<Block>),
                s("product-showcase", "Product showcase", product_showcase),
                s("feature-grid", "Feature grid", feature_grid),
                s("newsletter-footer", "Newsletter footer", newsletter_footer),
                s("video-spotlight", "Video spotlight", video_spotlight),
            ],
        }
    }
}

impl SectionsPanel {
    /// Panel with every built-in section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections in panel order.
    pub fn sections(&self) -> &[SectionTemplate] {
        &self.sections
    }

    /// Fresh blocks for section `id`.
    pub fn create(&self, id: &str) -> Option<Vec<Block>> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.build)())
    }

    /// Append section `id`; returns how many blocks were added.
    pub fn append_section(&self, canvas: &mut Canvas, id: &str) -> usize {
        let Some(blocks) = self.create(id) else {
            tracing::debug!(section = id, "unknown section template");
            return 0;
        };
        let added = blocks.len();
        canvas.extend(blocks);
        added
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Apply edits that are valid for the block by construction.
fn with(mut block: Block, fields: impl IntoIterator<Item = BlockField>) -> Block {
    for field in fields {
        if let Err(e) = block.apply(field) {
            tracing::warn!(error = %e, "section template edit rejected");
        }
    }
    block
}

fn heading(text: &str) -> Block {
    with(
        create_text_block(),
        [
            BlockField::Content(text.to_string()),
            BlockField::FontSize(28),
            BlockField::Alignment(Alignment::Center),
        ],
    )
}

fn hero() -> Vec<Block> {
    vec![
        create_logo_block(),
        heading("Reach buyers who are ready to talk"),
        with(
            create_text_block(),
            [
                BlockField::Content("Intent data that tells you who is in market, today.".into()),
                BlockField::Alignment(Alignment::Center),
            ],
        ),
        with(create_button_block(), [BlockField::Content("Get started".into())]),
    ]
}

fn product_showcase() -> Vec<Block> {
    vec![
        heading("Featured products"),
        create_product_block(),
        create_product_block(),
    ]
}

fn feature_grid() -> Vec<Block> {
    let mut features = create_features_block();
    if let BlockContent::Features(current) = features.content() {
        let mut items = current.items.clone();
        items.push(FeatureItem::new(
            "🔒",
            "Compliant data",
            "GDPR and CCPA ready contact data.",
        ));
        features = with(features, [BlockField::FeatureItems(items)]);
    }
    vec![heading("Why teams choose VAIS"), features]
}

fn newsletter_footer() -> Vec<Block> {
    vec![
        with(
            create_text_block(),
            [
                BlockField::Content("You are receiving this email because you subscribed.".into()),
                BlockField::FontSize(12),
                BlockField::Alignment(Alignment::Center),
            ],
        ),
        create_footer_social_block(),
    ]
}

fn video_spotlight() -> Vec<Block> {
    vec![
        heading("See VAIS in action"),
        create_video_block(),
        with(create_button_block(), [BlockField::Content("Book a demo".into())]),
    ]
}
