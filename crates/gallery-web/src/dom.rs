use gallery_core::{ElementBounds, GalleryConfig, LayoutSource, ScreenDimensions};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_SELECTOR: &str = ".canvas";
pub const GALLERY_SELECTOR: &str = ".gallery";
pub const FIGURE_SELECTOR: &str = ".gallery__figure";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new backing size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("bad selector: {:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CANVAS_SELECTOR))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Start from defaults and apply `data-scroll-mode` / `data-wrap-axis`
/// from the canvas. Unparseable values are logged and skipped.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> GalleryConfig {
    let mut config = GalleryConfig::default();
    let data = canvas.dataset();
    if let Some(raw) = data.get("scrollMode") {
        match raw.parse() {
            Ok(mode) => config.scroll_mode = mode,
            Err(e) => log::warn!("[config] {}", e),
        }
    }
    if let Some(raw) = data.get("wrapAxis") {
        match raw.parse() {
            Ok(axis) => config.wrap_axis = axis,
            Err(e) => log::warn!("[config] {}", e),
        }
    }
    config
}

fn rect_bounds(el: &web::Element) -> ElementBounds {
    let rect = el.get_bounding_client_rect();
    ElementBounds::new(
        rect.top() as f32,
        rect.left() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Layout read straight from the live DOM on every query.
pub struct DomLayout {
    window: web::Window,
    figures: Vec<web::Element>,
    gallery: Option<web::Element>,
}

impl DomLayout {
    pub fn query(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let list = document
            .query_selector_all(FIGURE_SELECTOR)
            .map_err(|e| anyhow::anyhow!(format!("bad selector: {:?}", e)))?;
        let figures = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect::<Vec<_>>();
        if figures.is_empty() {
            log::warn!("[dom] no elements match {}", FIGURE_SELECTOR);
        }
        let gallery = document.query_selector(GALLERY_SELECTOR).ok().flatten();
        Ok(Self {
            window: window.clone(),
            figures,
            gallery,
        })
    }

    /// `src` of the first `<img>` inside each figure, in figure order.
    pub fn image_sources(&self) -> Vec<Option<String>> {
        self.figures
            .iter()
            .map(|fig| {
                fig.query_selector("img")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
                    .map(|img| img.src())
            })
            .collect()
    }
}

impl LayoutSource for DomLayout {
    fn window_size(&self) -> ScreenDimensions {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        ScreenDimensions::new(width as f32, height as f32)
    }

    fn item_bounds(&self) -> Vec<ElementBounds> {
        self.figures.iter().map(rect_bounds).collect()
    }

    fn gallery_bounds(&self) -> Option<ElementBounds> {
        self.gallery.as_ref().map(rect_bounds)
    }
}
