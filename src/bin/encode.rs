//! `oled-encode` — compresses a GIF animation into the bit-packed SSD1306
//! animation format.
//!
//! # Usage
//!
//! ```bash
//! oled-encode input.gif output.bin --left 0 --top 0
//! oled-encode input.gif output.c --c-source --invert
//! ```

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use log::info;
use oled_internal::prelude::*;

#[derive(Parser)]
#[command(name = "oled-encode")]
#[command(author = "oled-animator project")]
#[command(version)]
#[command(about = "Compress a GIF animation into the SSD1306 bit-packed animation format")]
struct Cli {
	/// Input GIF path.
	#[arg(value_name = "INPUT_GIF")]
	input: PathBuf,

	/// Output path for the encoded animation.
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,

	/// Crop origin, horizontal offset into the source frame.
	#[arg(long, default_value_t = 0)]
	left: usize,

	/// Crop origin, vertical offset into the source frame.
	#[arg(long, default_value_t = 0)]
	top: usize,

	/// Complement every output pixel after thresholding.
	#[arg(long)]
	invert: bool,

	/// Emit a C byte-array literal instead of raw bytes.
	#[arg(long = "c-source")]
	c_source: bool,

	/// Show verbose output.
	#[arg(short, long)]
	verbose: bool,
}

/// Reads one GIF, composites every frame via the `image` crate's animation
/// decoder, and converts each composited RGBA8 frame to the packed RGB565
/// layout the rasterizer expects.
struct GifImageSource {
	frames: std::vec::IntoIter<image::Frame>,
}

impl GifImageSource {
	fn open(path: &std::path::Path) -> Result<Self> {
		let file = fs::File::open(path)
			.with_context(|| format!("opening GIF at {}", path.display()))?;
		let decoder =
			GifDecoder::new(std::io::BufReader::new(file)).context("reading GIF header")?;
		let frames: Vec<image::Frame> = decoder
			.into_frames()
			.collect_frames()
			.context("decoding and compositing GIF frames")?;
		Ok(Self { frames: frames.into_iter() })
	}
}

impl ImageSource for GifImageSource {
	fn next_frame(&mut self) -> Result<Option<SourceFrame>, CodecError> {
		let Some(frame) = self.frames.next() else {
			return Ok(None);
		};
		let buffer = frame.into_buffer();
		let (width, height) = (buffer.width() as usize, buffer.height() as usize);
		let mut pixels = Vec::with_capacity(width * height * 2);
		for rgba in buffer.pixels() {
			let [r, g, b, _a] = rgba.0;
			let value = rgb888_to_565(r, g, b);
			pixels.extend_from_slice(&value.to_le_bytes());
		}
		Ok(Some(SourceFrame { width, height, bits_per_pixel: 16, pitch: width * 2, pixels }))
	}
}

fn rgb888_to_565(r: u8, g: u8, b: u8) -> u16 {
	let r5 = (r >> 3) as u16;
	let g6 = (g >> 2) as u16;
	let b5 = (b >> 3) as u16;
	(r5 << 11) | (g6 << 5) | b5
}

/// Writes `bytes` as a C byte-array literal, matching the reference
/// tool's PROGMEM output mode.
fn write_c_source(bytes: &[u8], out: &mut impl std::io::Write, array_name: &str) -> Result<()> {
	writeln!(out, "const unsigned char {array_name}[] = {{")?;
	for chunk in bytes.chunks(16) {
		let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}")).collect();
		writeln!(out, "\t{},", line.join(", "))?;
	}
	writeln!(out, "}};")?;
	writeln!(out, "const unsigned int {array_name}_len = {};", bytes.len())?;
	Ok(())
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	if cli.verbose {
		info!("reading GIF from {}", cli.input.display());
	}

	let mut source = GifImageSource::open(&cli.input)?;
	let mut session = EncodeSession::new();
	let mut encoded = Vec::new();
	let mut frame_count = 0u64;

	while let Some(source_frame) = source.next_frame()? {
		let frame = rasterize(
			&source_frame.pixels,
			source_frame.width,
			source_frame.height,
			source_frame.pitch,
			source_frame.bits_per_pixel,
			Some((cli.left, cli.top)),
			cli.invert,
		)?;
		encoded.extend(session.encode_frame(&frame));
		frame_count += 1;
	}

	if frame_count == 0 {
		bail!("{} contained no frames", cli.input.display());
	}

	if cli.verbose {
		info!("encoded {} frames into {} bytes", frame_count, encoded.len());
	}

	if cli.c_source {
		let mut out =
			fs::File::create(&cli.output).with_context(|| format!("creating {}", cli.output.display()))?;
		write_c_source(&encoded, &mut out, "oled_animation")?;
	} else {
		fs::write(&cli.output, &encoded)
			.with_context(|| format!("writing {}", cli.output.display()))?;
	}

	info!("wrote encoded animation to {}", cli.output.display());
	Ok(())
}
