//! Registration QR - sample code shown on the sign-up page.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors;

/// Props for the registration QR component.
#[derive(Props, Clone, PartialEq)]
pub struct RegistrationQrProps {
    /// Data to encode in QR code
    pub data: String,
    /// QR code size in pixels (minimum render quality, CSS controls actual size)
    #[props(default = 200)]
    pub size: u32,
}

/// QR code generator component.
///
/// Width and height attributes are stripped from the SVG so CSS controls
/// the display size; the viewBox keeps it sharp.
#[component]
pub fn RegistrationQr(props: RegistrationQrProps) -> Element {
    let qr_svg = use_memo(move || match render_svg(&props.data, props.size) {
        Ok(svg) => svg,
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            String::new()
        }
    });

    rsx! {
        if !qr_svg().is_empty() {
            div {
                class: "registration-qr",
                dangerous_inner_html: "{qr_svg()}",
            }
        } else {
            div { class: "qr-error", "Failed to generate QR code" }
        }
    }
}

/// Render `data` as a scalable SVG of at least `size` pixels.
fn render_svg(data: &str, size: u32) -> Result<String, qrcode::types::QrError> {
    let svg = QrCode::new(data.as_bytes())?
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color(colors::INK))
        .light_color(svg::Color(colors::PAPER))
        .build();
    Ok(strip_fixed_size(&svg))
}

/// Drop `width` and `height` from the root `<svg>` tag.
///
/// The renderer rounds the size up to whole modules, so the values are
/// read from the tag rather than assumed.
fn strip_fixed_size(svg: &str) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(len) = svg[start..].find('>') else {
        return svg.to_string();
    };
    let end = start + len;

    let mut tag = svg[start..end].to_string();
    for attr in [" width=\"", " height=\""] {
        if let Some(pos) = tag.find(attr) {
            let value_start = pos + attr.len();
            if let Some(close) = tag[value_start..].find('"') {
                tag.replace_range(pos..value_start + close + 1, "");
            }
        }
    }

    format!("{}{}{}", &svg[..start], tag, &svg[end..])
}
