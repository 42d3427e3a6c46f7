//! Default block constructors, one per kind.
//!
//! Every factory returns a block with a fresh id. None of them can fail.

use crate::block::{
    Block, BlockContent, ButtonBlock, DynamicContentBlock, FeatureItem, FeaturesBlock,
    FooterSocialBlock, ImageBlock, LogoBlock, NavItem, NavigationBlock, ProductBlock, SocialLink,
    SocialPlatform, TextBlock, VideoBlock,
};
use crate::style::{Alignment, BlockStyle, WidthUnit};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x300?text=Image";

/// Text block: 16px, left aligned, no border.
pub fn create_text_block() -> Block {
    Block::new(BlockContent::Text(TextBlock {
        content: "Add your text here".to_string(),
        font_size: 16,
        font_weight: "normal".to_string(),
        text_color: "#333333".to_string(),
        line_height: 1.5,
        style: BlockStyle::default(),
    }))
}

/// Centred call-to-action button.
pub fn create_button_block() -> Block {
    Block::new(BlockContent::Button(ButtonBlock {
        text: "Click here".to_string(),
        link: "#".to_string(),
        tooltip: None,
        button_color: "#FF6A00".to_string(),
        text_color: "#FFFFFF".to_string(),
        border_radius: 4,
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// Full-width placeholder image.
pub fn create_image_block() -> Block {
    Block::new(BlockContent::Image(ImageBlock {
        src: PLACEHOLDER_IMAGE.to_string(),
        alt: "Image".to_string(),
        link: None,
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// Video poster with an empty source.
pub fn create_video_block() -> Block {
    Block::new(BlockContent::Video(VideoBlock {
        src: String::new(),
        thumbnail: "https://placehold.co/600x340?text=Video".to_string(),
        title: "Watch the video".to_string(),
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// Centred logo placeholder.
pub fn create_logo_block() -> Block {
    let mut style = BlockStyle::aligned(Alignment::Center);
    style.width = 150;
    style.width_unit = WidthUnit::Px;
    Block::new(BlockContent::Logo(LogoBlock {
        src: "https://placehold.co/150x50?text=Logo".to_string(),
        alt: "Logo".to_string(),
        link: None,
        style,
    }))
}

/// Three-link navigation bar.
pub fn create_navigation_block() -> Block {
    Block::new(BlockContent::Navigation(NavigationBlock {
        items: vec![
            NavItem::new("Home", "#"),
            NavItem::new("Products", "#"),
            NavItem::new("Contact", "#"),
        ],
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// Product card.
pub fn create_product_block() -> Block {
    Block::new(BlockContent::Product(ProductBlock {
        name: "Product name".to_string(),
        price: "$99.00".to_string(),
        image: "https://placehold.co/300x300?text=Product".to_string(),
        description: "Describe your product in a sentence or two.".to_string(),
        button_text: "Buy now".to_string(),
        link: "#".to_string(),
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// Footer with every supported social platform.
pub fn create_footer_social_block() -> Block {
    Block::new(BlockContent::FooterSocial(FooterSocialBlock {
        company: "Your Company".to_string(),
        address: "123 Main Street, City, Country".to_string(),
        social_links: SocialPlatform::ALL
            .into_iter()
            .map(|platform| SocialLink {
                platform,
                url: "#".to_string(),
            })
            .collect(),
        unsubscribe_text: "Unsubscribe".to_string(),
        style: BlockStyle::aligned(Alignment::Center),
    }))
}

/// `{{first_name}}` merge tag.
pub fn create_dynamic_content_block() -> Block {
    Block::new(BlockContent::DynamicContent(DynamicContentBlock {
        field_name: "first_name".to_string(),
        fallback: "there".to_string(),
        style: BlockStyle::default(),
    }))
}

/// Three feature tiles.
pub fn create_features_block() -> Block {
    Block::new(BlockContent::Features(FeaturesBlock {
        items: vec![
            FeatureItem::new("🎯", "Intent signals", "See which accounts are in market."),
            FeatureItem::new("📈", "Live scoring", "Prioritise accounts by engagement."),
            FeatureItem::new("🤝", "Sales handoff", "Send qualified accounts to your CRM."),
        ],
        style: BlockStyle::aligned(Alignment::Center),
    }))
}
