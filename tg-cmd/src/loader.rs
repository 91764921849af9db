//! Loading temperature CSV text and grid configuration.
//!
//! An input is either a local path or an `http(s)://` URL. Gzip-compressed
//! inputs are detected by a `.gz` suffix or by the gzip magic bytes.

use flate2::read::GzDecoder;
use log::info;
use std::io::Read;
use std::time::Duration;
use tg_core::{Result, TgError};
use tg_data::Dataset;
use tg_render::GridConfig;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn looks_gzipped(input: &str, bytes: &[u8]) -> bool {
    let path = input.split(['?', '#']).next().unwrap_or(input);
    path.ends_with(".gz") || bytes.starts_with(&GZIP_MAGIC)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| TgError::Fetch(e.to_string()))?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| TgError::Fetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(TgError::Fetch(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| TgError::Fetch(e.to_string()))?;
    Ok(body.to_vec())
}

/// Turn raw bytes into CSV text, gunzipping first when asked to.
pub fn decode(bytes: Vec<u8>, gzipped: bool) -> Result<String> {
    let bytes = if gzipped {
        let mut decoder = GzDecoder::new(bytes.as_slice());
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| TgError::Decompression(e.to_string()))?;
        out
    } else {
        bytes
    };
    String::from_utf8(bytes)
        .map_err(|e| TgError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Read the full CSV text from a path or URL.
pub async fn load_csv(input: &str) -> Result<String> {
    let bytes = if is_url(input) {
        info!("Fetching {}", input);
        fetch_bytes(input).await?
    } else {
        info!("Reading {}", input);
        tokio::fs::read(input).await?
    };
    let gzipped = looks_gzipped(input, &bytes);
    let text = decode(bytes, gzipped)?;
    info!("Loaded {} bytes of CSV from {}", text.len(), input);
    Ok(text)
}

/// Load and run the data pipeline over `input`.
pub async fn load_dataset(input: &str, config: &GridConfig) -> Result<Dataset> {
    let text = load_csv(input).await?;
    Dataset::from_csv(&text, config.year_window)
}

/// Read a JSON config file, or fall back to the defaults.
pub fn load_config(path: Option<&str>) -> Result<GridConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            info!("Using grid config from {}", path);
            GridConfig::from_json(&json)
        }
        None => Ok(GridConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "date,max_temperature,min_temperature\n\
                       2017-06-01,32.5,27.1\n\
                       2017-06-02,33.0,26.5\n";

    fn gzip(text: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn recognises_urls() {
        assert!(is_url("https://example.com/t.csv"));
        assert!(is_url("http://example.com/t.csv"));
        assert!(!is_url("fixtures/temperatures.csv"));
    }

    #[test]
    fn gzip_detection() {
        assert!(looks_gzipped("data.csv.gz", b"plain"));
        assert!(looks_gzipped("https://x.org/data.csv.gz?v=2", b"plain"));
        assert!(looks_gzipped("data.bin", &GZIP_MAGIC));
        assert!(!looks_gzipped("data.csv", b"date,"));
    }

    #[test]
    fn decode_gunzips() {
        assert_eq!(decode(gzip(CSV), true).unwrap(), CSV);
        assert_eq!(decode(CSV.as_bytes().to_vec(), false).unwrap(), CSV);
    }

    #[test]
    fn decode_rejects_corrupt_gzip() {
        let err = decode(b"not gzip at all".to_vec(), true).unwrap_err();
        assert!(matches!(err, TgError::Decompression(_)));
    }

    #[tokio::test]
    async fn loads_plain_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let dataset = load_dataset(&path, &GridConfig::default()).await.unwrap();
        assert_eq!(dataset.years, vec![2017]);
        assert_eq!(dataset.cell(2017, 6).unwrap().extreme_max, Some(33.0));
    }

    #[tokio::test]
    async fn loads_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temperatures.csv.gz");
        std::fs::write(&path, gzip(CSV)).unwrap();

        let text = load_csv(path.to_str().unwrap()).await.unwrap();
        assert_eq!(text, CSV);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = load_csv(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, TgError::Io(_)));
    }

    #[tokio::test]
    async fn file_without_usable_rows_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"date,max_temperature,min_temperature\nbad,x,y\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let err = load_dataset(&path, &GridConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TgError::EmptyDataset));
    }

    #[test]
    fn config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"year_window": 5, "legend_height": 200}"#)
            .unwrap();
        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.year_window, 5);
        assert_eq!(config.legend_height, 200.0);
        assert_eq!(config.band_padding, GridConfig::default().band_padding);
    }

    #[test]
    fn config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), GridConfig::default());
    }
}
