//! Typed single-attribute edits.
//!
//! A [`BlockField`] carries the new value for exactly one attribute. Applying
//! it to a block whose kind lacks that attribute is an error; the block is
//! left untouched in that case.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockContent, FeatureItem, NavItem, SocialPlatform};
use crate::error::{BuilderError, Result};
use crate::style::{Alignment, Border, WidthUnit};

/// One attribute edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "kebab-case")]
pub enum BlockField {
    /// Text content of a text block, or the label of a button.
    Content(String),
    /// Media URL of an image, video or logo, or a product image.
    Src(String),
    /// Alternative text of an image or logo.
    Alt(String),
    /// Click-through URL. `None` removes the link where it is optional.
    Link(Option<String>),
    /// Button hover text.
    Tooltip(Option<String>),
    /// Heading of a video or name of a product.
    Title(String),
    /// Video poster URL.
    Thumbnail(String),
    /// Product price.
    Price(String),
    /// Product description.
    Description(String),
    /// Text size in pixels.
    FontSize(u16),
    /// Text or label colour.
    TextColor(String),
    /// Button fill colour.
    ButtonColor(String),
    /// Block background colour.
    BackgroundColor(String),
    /// Block alignment.
    Alignment(Alignment),
    /// Block padding in pixels.
    Padding(u16),
    /// Block width.
    Width {
        /// Magnitude.
        width: u16,
        /// Unit.
        unit: WidthUnit,
    },
    /// Block border.
    Border(Border),
    /// URL of one platform in a footer.
    SocialUrl {
        /// Platform whose link changes.
        platform: SocialPlatform,
        /// New URL.
        url: String,
    },
    /// Footer company name.
    Company(String),
    /// Footer postal address.
    Address(String),
    /// Footer unsubscribe text.
    UnsubscribeText(String),
    /// Merge-tag field of a dynamic-content block.
    FieldName(String),
    /// Fallback text of a dynamic-content block.
    Fallback(String),
    /// Navigation links.
    NavItems(Vec<NavItem>),
    /// Feature tiles.
    FeatureItems(Vec<FeatureItem>),
}

impl BlockField {
    /// Attribute name, for errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content(_) => "content",
            Self::Src(_) => "src",
            Self::Alt(_) => "alt",
            Self::Link(_) => "link",
            Self::Tooltip(_) => "tooltip",
            Self::Title(_) => "title",
            Self::Thumbnail(_) => "thumbnail",
            Self::Price(_) => "price",
            Self::Description(_) => "description",
            Self::FontSize(_) => "font-size",
            Self::TextColor(_) => "text-color",
            Self::ButtonColor(_) => "button-color",
            Self::BackgroundColor(_) => "background-color",
            Self::Alignment(_) => "alignment",
            Self::Padding(_) => "padding",
            Self::Width { .. } => "width",
            Self::Border(_) => "border",
            Self::SocialUrl { .. } => "social-url",
            Self::Company(_) => "company",
            Self::Address(_) => "address",
            Self::UnsubscribeText(_) => "unsubscribe-text",
            Self::FieldName(_) => "field-name",
            Self::Fallback(_) => "fallback",
            Self::NavItems(_) => "nav-items",
            Self::FeatureItems(_) => "feature-items",
        }
    }
}

impl Block {
    /// Replace one attribute.
    ///
    /// The kind never changes. On error the block is unchanged.
    pub fn apply(&mut self, field: BlockField) -> Result<()> {
        let kind = self.kind();
        let name = field.name();
        let content = self.content_mut();

        match field {
            // Style attributes exist on every kind.
            BlockField::BackgroundColor(v) => content.style_mut().background_color = v,
            BlockField::Alignment(v) => content.style_mut().alignment = v,
            BlockField::Padding(v) => content.style_mut().padding = v,
            BlockField::Width { width, unit } => {
                let style = content.style_mut();
                style.width = width;
                style.width_unit = unit;
            }
            BlockField::Border(v) => content.style_mut().border = v,

            field => apply_kind_field(content, field)
                .map_err(|field| BuilderError::unsupported(kind, field))??,
        }

        tracing::trace!(block = %self.id(), kind = %kind, field = name, "block field applied");
        Ok(())
    }
}

/// Apply a kind-specific field. The outer `Err` names an unsupported field.
fn apply_kind_field(
    content: &mut BlockContent,
    field: BlockField,
) -> std::result::Result<Result<()>, &'static str> {
    use BlockContent as C;
    use BlockField as F;

    match (content, field) {
        (C::Text(b), F::Content(v)) => b.content = v,
        (C::Text(b), F::FontSize(v)) => b.font_size = v,
        (C::Text(b), F::TextColor(v)) => b.text_color = v,

        (C::Button(b), F::Content(v)) => b.text = v,
        (C::Button(b), F::Link(Some(v))) => b.link = v,
        (C::Button(b), F::Link(None)) => b.link = "#".to_string(),
        (C::Button(b), F::Tooltip(v)) => b.tooltip = v,
        (C::Button(b), F::TextColor(v)) => b.text_color = v,
        (C::Button(b), F::ButtonColor(v)) => b.button_color = v,

        (C::Image(b), F::Src(v)) => b.src = v,
        (C::Image(b), F::Alt(v)) => b.alt = v,
        (C::Image(b), F::Link(v)) => b.link = v,

        (C::Logo(b), F::Src(v)) => b.src = v,
        (C::Logo(b), F::Alt(v)) => b.alt = v,
        (C::Logo(b), F::Link(v)) => b.link = v,

        (C::Video(b), F::Src(v)) => b.src = v,
        (C::Video(b), F::Thumbnail(v)) => b.thumbnail = v,
        (C::Video(b), F::Title(v)) => b.title = v,

        (C::Navigation(b), F::NavItems(v)) => b.items = v,

        (C::Product(b), F::Title(v)) => b.name = v,
        (C::Product(b), F::Price(v)) => b.price = v,
        (C::Product(b), F::Src(v)) => b.image = v,
        (C::Product(b), F::Description(v)) => b.description = v,
        (C::Product(b), F::Content(v)) => b.button_text = v,
        (C::Product(b), F::Link(Some(v))) => b.link = v,
        (C::Product(b), F::Link(None)) => b.link = "#".to_string(),

        (C::FooterSocial(b), F::Company(v)) => b.company = v,
        (C::FooterSocial(b), F::Address(v)) => b.address = v,
        (C::FooterSocial(b), F::UnsubscribeText(v)) => b.unsubscribe_text = v,
        (C::FooterSocial(b), F::SocialUrl { platform, url }) => {
            let Some(link) = b.social_links.iter_mut().find(|l| l.platform == platform) else {
                return Ok(Err(BuilderError::UnknownPlatform {
                    platform: platform.to_string(),
                }));
            };
            link.url = url;
        }

        (C::DynamicContent(b), F::FieldName(v)) => b.field_name = v,
        (C::DynamicContent(b), F::Fallback(v)) => b.fallback = v,

        (C::Features(b), F::FeatureItems(v)) => b.items = v,

        (_, field) => return Err(field.name()),
    }
    Ok(Ok(()))
}
