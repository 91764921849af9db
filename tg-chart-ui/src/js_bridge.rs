//! Browser-side loading of the temperature CSV via `web-sys` fetch.
//!
//! Compressed inputs are recognised by the gzip magic bytes, so a `.gz`
//! file served without `Content-Encoding` still decodes. A response the
//! browser already inflated passes through unchanged.

use flate2::read::GzDecoder;
use js_sys::Uint8Array;
use std::io::Read;
use tg_core::{Result, TgError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn js_error(context: &str, value: JsValue) -> TgError {
    TgError::Fetch(format!("{}: {:?}", context, value))
}

/// Gunzip `bytes` if they carry the gzip header, then decode as UTF-8.
pub fn decode_body(bytes: Vec<u8>) -> Result<String> {
    let bytes = if bytes.starts_with(&GZIP_MAGIC) {
        let mut out = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut out)
            .map_err(|e| TgError::Decompression(e.to_string()))?;
        out
    } else {
        bytes
    };
    String::from_utf8(bytes)
        .map_err(|e| TgError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Fetch `url` and return its body as CSV text.
pub async fn fetch_csv(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| TgError::Fetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;
    if !response.ok() {
        return Err(TgError::Fetch(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }

    let buffer = response
        .array_buffer()
        .map_err(|e| js_error("reading body failed", e))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| js_error("reading body failed", e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    log::info!("Fetched {} bytes from {}", bytes.len(), url);
    decode_body(bytes)
}
