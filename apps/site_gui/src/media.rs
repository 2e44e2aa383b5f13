//! Bundled raster assets and their texture cache.

use std::collections::HashMap;

use anyhow::Context as _;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Logo,
    Work1,
    Work1a,
}

/// Portfolio carousel slides, in display order.
pub const PROJECT_IMAGES: [AssetKey; 2] = [AssetKey::Work1, AssetKey::Work1a];

impl AssetKey {
    pub fn name(self) -> &'static str {
        match self {
            AssetKey::Logo => "logo.png",
            AssetKey::Work1 => "work1.png",
            AssetKey::Work1a => "work1a.png",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            AssetKey::Logo => "BusinessLogics",
            AssetKey::Work1 | AssetKey::Work1a => "Enquiry Tracking System",
        }
    }

    fn bytes(self) -> &'static [u8] {
        match self {
            AssetKey::Logo => include_bytes!("../assets/logo.png"),
            AssetKey::Work1 => include_bytes!("../assets/work1.png"),
            AssetKey::Work1a => include_bytes!("../assets/work1a.png"),
        }
    }
}

pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_asset(key: AssetKey) -> anyhow::Result<DecodedImage> {
    let dynamic = image::load_from_memory(key.bytes())
        .with_context(|| format!("failed to decode bundled asset {}", key.name()))?;
    let rgba = dynamic.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}

/// Lazily uploads assets. A failed decode is remembered so it is logged once.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<AssetKey, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn get(&mut self, ctx: &egui::Context, key: AssetKey) -> Option<&egui::TextureHandle> {
        self.textures
            .entry(key)
            .or_insert_with(|| match decode_asset(key) {
                Ok(image) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    Some(ctx.load_texture(
                        format!("asset:{}", key.name()),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(err) => {
                    tracing::warn!("{err:#}");
                    None
                }
            })
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_asset_decodes() {
        for key in [AssetKey::Logo, AssetKey::Work1, AssetKey::Work1a] {
            let image = decode_asset(key).expect("decode");
            assert!(image.width > 0 && image.height > 0, "{}", key.name());
            assert_eq!(image.rgba.len(), image.width * image.height * 4);
        }
    }

    #[test]
    fn project_slides_share_the_project_alt_text() {
        assert!(PROJECT_IMAGES
            .iter()
            .all(|key| key.alt_text() == "Enquiry Tracking System"));
    }
}
