//! Browser side of diagram export: serialization, rasterization, download.
//!
//! ERROR HANDLING
//! ==============
//! Every JS failure maps onto `diagram::export::ExportError`. Image decode
//! failures are [`ExportError::SourceLoad`]; anything that goes wrong while
//! drawing or encoding the canvas is [`ExportError::Encode`]. The underlying
//! JS message is logged, not shown.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, Element, HtmlAnchorElement, HtmlCanvasElement,
    HtmlImageElement, Url, XmlSerializer,
};

use diagram::export::{
    Dimensions, ExportError, ExportKind, PNG_QUALITY, RASTER_BACKGROUND, RasterPlan, download_name,
};

use crate::util::js::error_message;

fn browser(err: JsValue) -> ExportError {
    ExportError::Browser(error_message(&err))
}

fn encode_failed(err: JsValue) -> ExportError {
    log::warn!("png encode failed: {}", error_message(&err));
    ExportError::Encode
}

fn document() -> Result<Document, ExportError> {
    web_sys::window().and_then(|w| w.document()).ok_or_else(|| ExportError::Browser("no document".to_owned()))
}

/// The rendered `<svg>` inside the preview surface.
fn find_svg(surface: &Element) -> Result<Element, ExportError> {
    surface.query_selector("svg").map_err(browser)?.ok_or(ExportError::MissingElement)
}

fn serialize(svg: &Element) -> Result<String, ExportError> {
    XmlSerializer::new().and_then(|serializer| serializer.serialize_to_string(svg)).map_err(browser)
}

/// Click a hidden `<a download>` pointing at `url`.
fn download(url: &str, filename: &str) -> Result<(), ExportError> {
    let document = document()?;
    let body = document.body().ok_or_else(|| ExportError::Browser("no body".to_owned()))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| ExportError::Browser("anchor element has unexpected type".to_owned()))?;
    link.set_download(filename);
    link.set_href(url);
    link.style().set_property("display", "none").map_err(browser)?;
    body.append_child(&link).map_err(browser)?;
    link.click();
    body.remove_child(&link).map_err(browser)?;
    Ok(())
}

/// Download the rendered diagram as `<name>.svg`. Returns the file name.
pub fn export_svg(surface: &Element, diagram_name: &str) -> Result<String, ExportError> {
    let markup = serialize(&find_svg(surface)?)?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&markup));
    let options = BlobPropertyBag::new();
    options.set_type(ExportKind::Svg.mime_type());
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let filename = download_name(diagram_name, ExportKind::Svg);
    let outcome = download(&url, &filename);
    if let Err(err) = Url::revoke_object_url(&url) {
        log::debug!("revoke object url failed: {}", error_message(&err));
    }
    outcome.map(|()| filename)
}

/// Rasterize the rendered diagram and download it as `<name>.png`.
/// Returns the file name.
pub async fn export_png(surface: &Element, diagram_name: &str) -> Result<String, ExportError> {
    let svg = find_svg(surface)?;
    let rect = svg.get_bounding_client_rect();
    let markup = serialize(&svg)?;
    let plan = RasterPlan::new(&markup, Dimensions::new(rect.width(), rect.height()))?;
    log::debug!(
        "rasterizing {}x{} at {}x -> {}x{}",
        plan.source.width,
        plan.source.height,
        plan.scale,
        plan.canvas_width,
        plan.canvas_height
    );

    let image = load_image(&plan.data_url()).await?;
    let png = draw(&image, &plan)?;
    let filename = download_name(diagram_name, ExportKind::Png);
    download(&png, &filename)?;
    Ok(filename)
}

/// Decode `src` into an image element, resolving once it loads or fails.
async fn load_image(src: &str) -> Result<HtmlImageElement, ExportError> {
    let image = HtmlImageElement::new().map_err(browser)?;
    image.set_cross_origin(Some("anonymous"));

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let settle = |loaded: bool| {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                if tx.send(loaded).is_err() {
                    log::debug!("image load result arrived after export was abandoned");
                }
            }
        })
    };
    let on_load = settle(true);
    let on_error = settle(false);
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(src);

    let loaded = rx.await.unwrap_or(false);
    image.set_onload(None);
    image.set_onerror(None);
    if loaded { Ok(image) } else { Err(ExportError::SourceLoad) }
}

/// Draw `image` over a white canvas sized by `plan` and encode it as PNG.
fn draw(image: &HtmlImageElement, plan: &RasterPlan) -> Result<String, ExportError> {
    let canvas: HtmlCanvasElement =
        document()?
        .create_element("canvas")
        .map_err(encode_failed)?
        .dyn_into()
        .map_err(|el: web_sys::Element| encode_failed(el.into()))?;
    canvas.set_width(plan.canvas_width);
    canvas.set_height(plan.canvas_height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(encode_failed)?
        .ok_or(ExportError::Encode)?
        .dyn_into()
        .map_err(|obj: js_sys::Object| encode_failed(obj.into()))?;
    ctx.set_image_smoothing_enabled(true);
    js_sys::Reflect::set(&ctx, &JsValue::from_str("imageSmoothingQuality"), &JsValue::from_str("high"))
        .map_err(encode_failed)?;

    let width = f64::from(plan.canvas_width);
    let height = f64::from(plan.canvas_height);
    ctx.set_fill_style_str(RASTER_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height).map_err(encode_failed)?;

    canvas
        .to_data_url_with_type_and_encoder_options(ExportKind::Png.mime_type(), &JsValue::from_f64(PNG_QUALITY))
        .map_err(encode_failed)
}
