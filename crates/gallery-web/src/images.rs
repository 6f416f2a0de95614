use crate::dom;
use crate::WebGallery;
use fnv::FnvHashMap;
use gallery_core::ImageInfo;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Longest texture side uploaded; larger images are downscaled on decode.
const MAX_TEXTURE_SIDE: u32 = 2048;

struct DecodedImage {
    info: ImageInfo,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

/// Scale `(w, h)` down so neither side exceeds `max`, keeping the aspect.
fn fit_within(w: u32, h: u32, max: u32) -> (u32, u32) {
    let longest = w.max(h);
    if longest <= max {
        return (w, h);
    }
    let s = max as f64 / longest as f64;
    (
        ((w as f64 * s).round() as u32).max(1),
        ((h as f64 * s).round() as u32).max(1),
    )
}

/// Fetch every figure image in the background. Each distinct URL is decoded
/// once and uploaded to every item that uses it.
pub fn load_all(gallery: Rc<RefCell<WebGallery>>, sources: Vec<Option<String>>) {
    let mut by_url: FnvHashMap<String, Vec<usize>> = FnvHashMap::default();
    for (index, src) in sources.into_iter().enumerate() {
        match src {
            Some(url) if !url.is_empty() => by_url.entry(url).or_default().push(index),
            _ => gallery
                .borrow_mut()
                .texture_failed(index, "figure has no <img> source"),
        }
    }
    log::info!("[images] loading {} distinct sources", by_url.len());

    for (url, indices) in by_url {
        let gallery = gallery.clone();
        spawn_local(async move {
            let decoded = decode_rgba(&url).await;
            let mut gallery = gallery.borrow_mut();
            let decoded = match decoded {
                Ok(d) => d,
                Err(e) => {
                    for &index in &indices {
                        gallery.texture_failed(index, &format!("{}: {:#}", url, e));
                    }
                    return;
                }
            };
            for &index in &indices {
                let uploaded = gallery
                    .renderer()
                    .upload_rgba(decoded.width, decoded.height, &decoded.rgba);
                match uploaded {
                    Ok(texture) => {
                        if let Err(e) = gallery.attach_texture(index, decoded.info, texture) {
                            log::error!("[images] {}", e);
                        }
                    }
                    Err(e) => gallery.texture_failed(index, &format!("{:#}", e)),
                }
            }
        });
    }
}

async fn decode_rgba(url: &str) -> anyhow::Result<DecodedImage> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!(format!("decode failed: {:?}", e)))?;

    let (natural_w, natural_h) = (img.natural_width(), img.natural_height());
    if natural_w == 0 || natural_h == 0 {
        anyhow::bail!("image has no pixels");
    }
    let (w, h) = fit_within(natural_w, natural_h, MAX_TEXTURE_SIDE);

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    Ok(DecodedImage {
        info: ImageInfo::new(natural_w as f32, natural_h as f32),
        width: w,
        height: h,
        rgba: data.data().0,
    })
}
