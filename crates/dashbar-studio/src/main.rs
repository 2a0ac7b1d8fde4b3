//! Offline renderer for the dashed progress bar.
//!
//! ```text
//! dashbar-studio [sheet.attrs] [out_dir]
//! ```
//!
//! Plays a scripted progress sequence at a fixed 50 fps and writes
//! `progress.gif` plus `final.png` of the last frame.

mod script;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dashbar_engine::logging::{init_logging, LoggingConfig};
use dashbar_engine::render::{render_to_pixmap, Pixmap};
use dashbar_ui::prelude::*;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use script::Script;

const FPS: u32 = 50;
const VIEWPORT: Vec2 = Vec2::new(320.0, 16.0);
/// Frames rendered after the last scripted action so it can settle.
const TAIL_FRAMES: u64 = 30;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let sheet = args.next().map(PathBuf::from);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("out"));

    let config = load_config(sheet.as_deref())?;
    if let Err(e) = config.validate() {
        log::warn!("{e}; the bar will use a single dash");
    }

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let frames = play(&config, &Script::demo())?;
    let last = frames.last().cloned().context("script produced no frames")?;

    let gif_path = out_dir.join("progress.gif");
    write_gif(&gif_path, frames)?;
    log::info!("wrote {}", gif_path.display());

    let png_path = out_dir.join("final.png");
    last.save(&png_path).with_context(|| format!("writing {}", png_path.display()))?;
    log::info!("wrote {}", png_path.display());

    Ok(())
}

fn load_config(sheet: Option<&Path>) -> Result<DashedProgressConfig> {
    let (name, src) = match sheet {
        Some(path) => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("reading attribute sheet {}", path.display()))?;
            (path.display().to_string(), src)
        }
        None => ("built-in progress.attrs".to_string(), include_str!("../ui/progress.attrs").to_string()),
    };
    let config = DashedProgressConfig::from_source(&src).with_context(|| format!("loading {name}"))?;
    log::info!("loaded {name}");
    Ok(config)
}

/// Drives the bar through `script` and rasterizes every frame.
fn play(config: &DashedProgressConfig, script: &Script) -> Result<Vec<RgbaImage>> {
    let backdrop = Color::from_srgb_u8(24, 24, 28, 255);
    let (w, h) = (VIEWPORT.x as u32, VIEWPORT.y as u32);

    let mut bar = DashedProgressBar::from_config(config);
    let mut scene = UiScene::new();
    let mut clock = FrameClock::fixed_fps(FPS);

    let mut frames = Vec::new();
    let mut current: Option<RgbaImage> = None;

    loop {
        let time = clock.tick();
        if time.frame_index > script.last_frame() + TAIL_FRAMES {
            break;
        }

        for action in script.at(time.frame_index) {
            log::info!("frame {}: {:?}", time.frame_index, action);
            action.apply(&mut bar);
        }

        if scene.advance(&mut bar, time) || current.is_none() {
            let list = scene.frame(&mut bar, VIEWPORT);
            let pixmap = render_to_pixmap(list, w, h, backdrop)?;
            current = Some(to_rgba_image(&pixmap)?);
        }
        if let Some(img) = &current {
            frames.push(img.clone());
        }
    }

    log::info!(
        "rendered {} frames, {} of {} dashes filled",
        frames.len(),
        bar.current_dash_count(),
        bar.max_dash_count()
    );
    Ok(frames)
}

fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).context("pixmap size mismatch")
}

fn write_gif(path: &Path, frames: Vec<RgbaImage>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1000, FPS);
    encoder
        .encode_frames(frames.into_iter().map(|img| Frame::from_parts(img, 0, 0, delay)))
        .with_context(|| format!("encoding {}", path.display()))?;
    Ok(())
}
