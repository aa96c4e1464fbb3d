use std::{
    fs,
    io::{stdout, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use clap::Parser;
use ffmpeg_sidecar::{command::FfmpegCommand, event::FfmpegEvent};
use image::ImageFormat;
use rand::{random, rngs::StdRng, SeedableRng};

use lightdrive::{
    filter::{Blend, Glitch, GrayNoise, Rainbow},
    FilterChain, Sprite,
};

const RAINBOW_SPEED: usize = 10;

#[derive(Parser)]
struct Args {
    /// The file to load the base image / video from
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// Directory the filtered frames are written to
    #[arg(short = 'o', long, value_name = "DIR", default_value = "frames")]
    out: PathBuf,

    /// How many frames to render from a still image
    #[arg(short = 'n', long, value_name = "NUM", default_value_t = 1)]
    frames: usize,

    /// Seed for the random filters
    #[arg(long)]
    seed: Option<u64>,

    /// Adds gray noise of the given intensity (0.0-1.0)
    #[arg(long, value_name = "INTENSITY")]
    gray_noise: Option<f32>,

    /// Colorizes the image with <rrggbbaa>
    #[arg(long, value_name = "RRGGBBAA")]
    blend: Option<String>,

    /// Adds the rainbow filter
    #[arg(long, value_name = "ALPHA")]
    rainbow: Option<String>,

    /// Makes the image glitch by <factor>
    #[arg(long, value_name = "FACTOR")]
    glitch: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub frames: usize,
    pub seed: u64,
}

fn build_filters(args: &Args, seed: u64) -> Result<FilterChain> {
    let mut filters = FilterChain::new();

    if let Some(intensity) = args.gray_noise {
        filters.push(Box::new(GrayNoise::with_rng(
            intensity,
            StdRng::seed_from_u64(seed),
        )));
    }

    if let Some(color) = &args.blend {
        filters.push(Box::new(Blend::from_hex(color)?));
    }

    if let Some(alpha) = &args.rainbow {
        filters.push(Box::new(Rainbow::new(
            u8::from_str_radix(alpha, 16)?,
            RAINBOW_SPEED,
        )));
    }

    if let Some(factor) = args.glitch {
        filters.push(Box::new(Glitch::with_seed(factor, seed)));
    }

    Ok(filters)
}

fn write_frame(
    source: &Sprite,
    index: usize,
    filters: &mut FilterChain,
    out_dir: &Path,
) -> Result<()> {
    let mut sprite = source.clone();
    sprite.apply(filters)?;

    let path = out_dir.join(format!("frame_{index:05}.png"));
    sprite.to_image().save(&path)?;
    log::debug!("wrote {}", path.display());

    print!("\rWriting frame {index}...");
    stdout().flush()?;
    Ok(())
}

fn render_still(config: &Config, filters: &mut FilterChain) -> Result<usize> {
    let image = image::open(&config.input)?.to_rgba8();
    let sprite = Sprite::from_image(&image);
    log::info!("loaded {}x{} image", sprite.width(), sprite.height());

    for i in 0..config.frames {
        write_frame(&sprite, i, filters, &config.out_dir)?;
    }

    Ok(config.frames)
}

fn render_video(config: &Config, filters: &mut FilterChain) -> Result<usize> {
    let input = config
        .input
        .to_str()
        .ok_or_else(|| anyhow!("Input path is not valid UTF-8"))?;

    let mut decoder = FfmpegCommand::new()
        .hide_banner()
        .input(input)
        .args("-f rawvideo -pix_fmt rgba -".split(' '))
        .spawn()?;

    let mut count = 0;
    for event in decoder.iter()? {
        match event {
            FfmpegEvent::OutputFrame(frame) => {
                let sprite = Sprite::from_rgba_bytes(frame.width, frame.height, &frame.data)?;
                write_frame(&sprite, count, filters, &config.out_dir)?;
                count += 1;
            }
            FfmpegEvent::Log(_level, line) => log::trace!("[ffmpeg] {line}"),
            _ => (),
        }
    }

    if count == 0 {
        return Err(anyhow!("ffmpeg produced no frames for {}", input));
    }

    Ok(count)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        input: args.file.clone(),
        out_dir: args.out.clone(),
        frames: args.frames,
        seed: args.seed.unwrap_or_else(random),
    };
    log::debug!("{config:?}");

    let mut filters = build_filters(&args, config.seed)?;
    if filters.is_empty() {
        log::warn!("no filters given, frames are written unchanged");
    }

    fs::create_dir_all(&config.out_dir)?;

    let written = if ImageFormat::from_path(&config.input).is_ok() {
        render_still(&config, &mut filters)?
    } else {
        render_video(&config, &mut filters)?
    };

    println!(
        "\rWrote {written} frames to {} with {} filters",
        config.out_dir.display(),
        filters.len()
    );

    Ok(())
}
