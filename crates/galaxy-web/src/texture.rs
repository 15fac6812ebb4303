use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Texels are written to the surface as-is, like every other colour, so no sRGB decode on sample
pub const BADGE_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

// Longest badge edge; larger images are downscaled before upload
pub const BADGE_MAX_DIM: u32 = 1024;

/// Decoded RGBA8 pixels ready for upload.
pub struct BadgeImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Fetch and decode an image. Any failure is returned, never panics.
pub async fn fetch_image(url: &str) -> anyhow::Result<BadgeImage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    decode(&bytes, BADGE_MAX_DIM)
}

/// Decode to RGBA8, shrinking (aspect kept) so neither edge exceeds `max_dim`.
pub fn decode(bytes: &[u8], max_dim: u32) -> anyhow::Result<BadgeImage> {
    let mut img = image::load_from_memory(bytes)?;
    let max_dim = max_dim.max(1);
    if img.width() > max_dim || img.height() > max_dim {
        log::info!(
            "[texture] downscaling {}x{} to fit {}",
            img.width(),
            img.height(),
            max_dim
        );
        img = img.thumbnail(max_dim, max_dim);
    }
    let img = img.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("empty image");
    }
    log::info!("[texture] decoded {}x{}", width, height);
    Ok(BadgeImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}
