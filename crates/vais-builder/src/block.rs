//! The block model.
//!
//! A [`Block`] pairs an id with one [`BlockContent`] variant. The variant is
//! the block's kind and is fixed at construction: the content field is
//! private and the only mutation path is [`Block::apply`], which edits
//! attributes in place without ever switching variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::BlockId;
use crate::style::BlockStyle;

// ============================================================================
// BlockKind
// ============================================================================

/// Discriminant of [`BlockContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Paragraph of text.
    Text,
    /// Call-to-action button.
    Button,
    /// Image, optionally linked.
    Image,
    /// Video thumbnail linking to the video.
    Video,
    /// Brand logo.
    Logo,
    /// Row of navigation links.
    Navigation,
    /// Product card.
    Product,
    /// Footer with company details and social links.
    FooterSocial,
    /// Merge-tag placeholder filled per recipient.
    DynamicContent,
    /// Grid of feature highlights.
    Features,
}

impl BlockKind {
    /// Every kind, in catalog order.
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Logo,
        BlockKind::Navigation,
        BlockKind::Product,
        BlockKind::FooterSocial,
        BlockKind::DynamicContent,
        BlockKind::Features,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Button => "button",
            Self::Image => "image",
            Self::Video => "video",
            Self::Logo => "logo",
            Self::Navigation => "navigation",
            Self::Product => "product",
            Self::FooterSocial => "footer-social",
            Self::DynamicContent => "dynamic-content",
            Self::Features => "features",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown block kind: {s}"))
    }
}

// ============================================================================
// Kind attributes
// ============================================================================

/// Attributes of a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: u16,
    /// CSS font weight.
    pub font_weight: String,
    /// Text colour.
    pub text_color: String,
    /// Unitless line height.
    pub line_height: f32,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of a button block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBlock {
    /// Label.
    pub text: String,
    /// Target URL.
    pub link: String,
    /// Hover text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Fill colour.
    pub button_color: String,
    /// Label colour.
    pub text_color: String,
    /// Corner radius in pixels.
    pub border_radius: u16,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of an image block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    /// Image URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Click-through URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of a video block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    /// Video URL.
    pub src: String,
    /// Poster image URL.
    pub thumbnail: String,
    /// Title shown under the poster.
    pub title: String,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of a logo block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoBlock {
    /// Logo URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Click-through URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub link: String,
}

impl NavItem {
    /// Create a navigation item.
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Attributes of a navigation block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationBlock {
    /// Links, left to right.
    pub items: Vec<NavItem>,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of a product block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBlock {
    /// Product name.
    pub name: String,
    /// Display price, already formatted.
    pub price: String,
    /// Product image URL.
    pub image: String,
    /// Short description.
    pub description: String,
    /// Call-to-action label.
    pub button_text: String,
    /// Call-to-action URL.
    pub link: String,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// A social network a footer can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// Facebook.
    Facebook,
    /// X / Twitter.
    Twitter,
    /// LinkedIn.
    Linkedin,
    /// Instagram.
    Instagram,
    /// YouTube.
    Youtube,
}

impl SocialPlatform {
    /// Every supported platform.
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Instagram,
        SocialPlatform::Youtube,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown social platform: {s}"))
    }
}

/// A footer's link to one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform.
    pub platform: SocialPlatform,
    /// Profile URL.
    pub url: String,
}

/// Attributes of a footer-social block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSocialBlock {
    /// Sender company name.
    pub company: String,
    /// Postal address.
    pub address: String,
    /// Social profile links.
    pub social_links: Vec<SocialLink>,
    /// Unsubscribe link text.
    pub unsubscribe_text: String,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// Attributes of a dynamic-content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicContentBlock {
    /// Merge-tag field, e.g. `first_name`.
    pub field_name: String,
    /// Text used when the recipient has no value.
    pub fallback: String,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

/// One feature tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Icon name or emoji.
    pub icon: String,
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
}

impl FeatureItem {
    /// Create a feature tile.
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Attributes of a features block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesBlock {
    /// Tiles, in reading order.
    pub items: Vec<FeatureItem>,
    /// Shared presentation.
    #[serde(default)]
    pub style: BlockStyle,
}

// ============================================================================
// BlockContent
// ============================================================================

/// Kind-specific attributes. The variant is the block's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockContent {
    /// See [`TextBlock`].
    Text(TextBlock),
    /// See [`ButtonBlock`].
    Button(ButtonBlock),
    /// See [`ImageBlock`].
    Image(ImageBlock),
    /// See [`VideoBlock`].
    Video(VideoBlock),
    /// See [`LogoBlock`].
    Logo(LogoBlock),
    /// See [`NavigationBlock`].
    Navigation(NavigationBlock),
    /// See [`ProductBlock`].
    Product(ProductBlock),
    /// See [`FooterSocialBlock`].
    FooterSocial(FooterSocialBlock),
    /// See [`DynamicContentBlock`].
    DynamicContent(DynamicContentBlock),
    /// See [`FeaturesBlock`].
    Features(FeaturesBlock),
}

impl BlockContent {
    /// The kind of this content.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text(_) => BlockKind::Text,
            Self::Button(_) => BlockKind::Button,
            Self::Image(_) => BlockKind::Image,
            Self::Video(_) => BlockKind::Video,
            Self::Logo(_) => BlockKind::Logo,
            Self::Navigation(_) => BlockKind::Navigation,
            Self::Product(_) => BlockKind::Product,
            Self::FooterSocial(_) => BlockKind::FooterSocial,
            Self::DynamicContent(_) => BlockKind::DynamicContent,
            Self::Features(_) => BlockKind::Features,
        }
    }

    /// Shared presentation attributes.
    pub fn style(&self) -> &BlockStyle {
        match self {
            Self::Text(b) => &b.style,
            Self::Button(b) => &b.style,
            Self::Image(b) => &b.style,
            Self::Video(b) => &b.style,
            Self::Logo(b) => &b.style,
            Self::Navigation(b) => &b.style,
            Self::Product(b) => &b.style,
            Self::FooterSocial(b) => &b.style,
            Self::DynamicContent(b) => &b.style,
            Self::Features(b) => &b.style,
        }
    }

    pub(crate) fn style_mut(&mut self) -> &mut BlockStyle {
        match self {
            Self::Text(b) => &mut b.style,
            Self::Button(b) => &mut b.style,
            Self::Image(b) => &mut b.style,
            Self::Video(b) => &mut b.style,
            Self::Logo(b) => &mut b.style,
            Self::Navigation(b) => &mut b.style,
            Self::Product(b) => &mut b.style,
            Self::FooterSocial(b) => &mut b.style,
            Self::DynamicContent(b) => &mut b.style,
            Self::Features(b) => &mut b.style,
        }
    }
}

// ============================================================================
// Block
// ============================================================================

/// A block on a canvas.
///
/// Serializes as `{"id": "...", "type": "<kind>", ...attributes}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    #[serde(flatten)]
    content: BlockContent,
}

impl Block {
    /// Wrap `content` under a fresh id.
    pub fn new(content: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            content,
        }
    }

    /// Block id.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Block kind.
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// Read-only view of the attributes.
    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    /// Shared presentation attributes.
    pub fn style(&self) -> &BlockStyle {
        self.content.style()
    }

    /// Copy of this block under a new id.
    pub fn duplicate(&self) -> Self {
        Self::new(self.content.clone())
    }

    pub(crate) fn content_mut(&mut self) -> &mut BlockContent {
        &mut self.content
    }
}
