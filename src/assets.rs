use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use anyhow::{anyhow, Context, Result};

use crate::font::TypefaceFont;

/// Observable completion state of a one-shot asset load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// One-shot asynchronous asset load.
///
/// The load runs on a worker thread and hands its result back over a
/// channel; the frame loop polls on the main thread, so completion is
/// observed in a later tick of the same cooperative scheduler. There is
/// no cancellation and no retry.
#[derive(Debug)]
pub struct AssetLoad<T> {
    rx: Option<Receiver<Result<T>>>,
    state: LoadState,
}

impl<T: Send + 'static> AssetLoad<T> {
    /// Run `load` on a worker thread
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(load());
        });
        Self {
            rx: Some(rx),
            state: LoadState::Pending,
        }
    }

    /// Already-completed load, for synchronous construction and tests
    pub fn ready(value: T) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(Ok(value));
        Self {
            rx: Some(rx),
            state: LoadState::Pending,
        }
    }

    /// Already-failed load, for tests
    pub fn failed(message: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(Err(anyhow!("{message}")));
        Self {
            rx: Some(rx),
            state: LoadState::Pending,
        }
    }

    /// Non-blocking poll. Yields the result exactly once, on the tick
    /// that observes completion; `None` while pending or after the
    /// result has been taken.
    pub fn poll(&mut self) -> Option<Result<T>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.state = if result.is_ok() {
                    LoadState::Loaded
                } else {
                    LoadState::Failed
                };
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.state = LoadState::Failed;
                self.rx = None;
                Some(Err(anyhow!("asset worker exited without a result")))
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Parse a three.js-style typeface.json font from disk
pub fn load_typeface(path: &Path) -> Result<TypefaceFont> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading font {}", path.display()))?;
    let font: TypefaceFont = serde_json::from_str(&json)
        .with_context(|| format!("parsing typeface {}", path.display()))?;
    Ok(font)
}

/// Decode a PNG into tightly-packed RGBA8
pub fn load_png(path: &Path) -> Result<TextureData> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("reading PNG header of {}", path.display()))?;

    let out_size = reader
        .output_buffer_size()
        .ok_or_else(|| anyhow!("PNG output buffer size overflow for {}", path.display()))?;
    let mut buf = vec![0u8; out_size];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("decoding {}", path.display()))?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf
            .iter()
            .flat_map(|&v| [v, v, v, 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        other => return Err(anyhow!("unsupported PNG color type {:?}", other)),
    };

    Ok(TextureData {
        width: info.width,
        height: info.height,
        rgba,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_until_done<T: Send + 'static>(load: &mut AssetLoad<T>) -> Result<T> {
        for _ in 0..500 {
            if let Some(result) = load.poll() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        panic!("load never completed");
    }

    #[test]
    fn spawn_starts_pending() {
        let load = AssetLoad::spawn(|| Ok(42u32));
        assert_eq!(load.state(), LoadState::Pending);
    }

    #[test]
    fn successful_load_transitions_to_loaded() {
        let mut load = AssetLoad::spawn(|| Ok("font".to_string()));

        let result = poll_until_done(&mut load);
        assert_eq!(result.expect("load result"), "font");
        assert_eq!(load.state(), LoadState::Loaded);

        // The result is yielded exactly once
        assert!(load.poll().is_none());
    }

    #[test]
    fn failing_load_transitions_to_failed() {
        let mut load: AssetLoad<u32> = AssetLoad::spawn(|| Err(anyhow!("missing file")));

        let result = poll_until_done(&mut load);
        assert!(result.is_err());
        assert_eq!(load.state(), LoadState::Failed);
    }

    #[test]
    fn ready_completes_on_first_poll() {
        let mut load = AssetLoad::ready(7u32);
        assert_eq!(load.state(), LoadState::Pending);

        let result = load.poll().expect("ready value");
        assert_eq!(result.expect("ok"), 7);
        assert_eq!(load.state(), LoadState::Loaded);
    }

    #[test]
    fn missing_font_file_fails() {
        let result = load_typeface(Path::new("/nonexistent/font.typeface.json"));
        assert!(result.is_err());
    }
}
