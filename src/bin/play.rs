//! `oled-play` — plays back an encoded animation onto a real SSD1306 panel
//! over Linux I2C.
//!
//! # Usage
//!
//! ```bash
//! oled-play animation.bin --chan 1 --addr 0x3c --rate 15 --loop
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use log::info;
use oled_internal::prelude::*;

#[derive(Parser)]
#[command(name = "oled-play")]
#[command(author = "oled-animator project")]
#[command(version)]
#[command(about = "Play an encoded animation onto an SSD1306 panel over I2C")]
struct Cli {
	/// Input encoded animation path.
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// I2C bus number (opens `/dev/i2c-<chan>`).
	#[arg(long, default_value_t = 1)]
	chan: u8,

	/// I2C device address, e.g. 0x3c.
	#[arg(long, value_parser = parse_hex_u16, default_value = "0x3c")]
	addr: u16,

	/// Playback frame rate, frames per second.
	#[arg(long, default_value_t = 15.0)]
	rate: f64,

	/// Loop the animation forever instead of playing it once.
	#[arg(long = "loop")]
	loop_forever: bool,

	/// Split data writes at page boundaries, for controllers that mishandle
	/// a write spanning a page row.
	#[arg(long)]
	bad: bool,

	/// Complement the panel's output (SSD1306 `INVERTDISPLAY` command).
	#[arg(long)]
	invert: bool,

	/// Show verbose output.
	#[arg(short, long)]
	verbose: bool,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
	let trimmed = s.trim_start_matches("0x").trim_start_matches("0X");
	u16::from_str_radix(trimmed, 16).map_err(|e| e.to_string())
}

const CMD_CONTROL_BYTE: u8 = 0x00;
const DATA_CONTROL_BYTE: u8 = 0x40;

/// [`DisplayAdapter`] over a real SSD1306 panel reached through
/// `/dev/i2c-N`, matching the reference transport's init sequence and
/// page/column cursor bookkeeping.
struct Ssd1306I2cAdapter {
	device: LinuxI2CDevice,
	bad_display: bool,
	cursor: u16,
}

impl Ssd1306I2cAdapter {
	fn open(chan: u8, addr: u16, invert: bool, bad_display: bool) -> Result<Self> {
		let path = format!("/dev/i2c-{chan}");
		let device = LinuxI2CDevice::new(&path, addr).map_err(|e| {
			CodecError::ResourceInit(format!("opening {path} at address 0x{addr:02x}: {e}"))
		})?;
		let mut adapter = Self { device, bad_display, cursor: 0 };
		adapter.init_sequence(invert).context("sending SSD1306 init sequence")?;
		Ok(adapter)
	}

	fn write_command(&mut self, cmd: u8) -> Result<(), CodecError> {
		self.device.write(&[CMD_CONTROL_BYTE, cmd]).map_err(to_codec_error)
	}

	fn write_commands(&mut self, cmds: &[u8]) -> Result<(), CodecError> {
		for &cmd in cmds {
			self.write_command(cmd)?;
		}
		Ok(())
	}

	fn init_sequence(&mut self, invert: bool) -> Result<(), CodecError> {
		self.write_commands(&[
			0xae, // display off
			0xa8, 0x3f, // multiplex ratio: 64
			0xd3, 0x00, // display offset: none
			0x40, // display start line: 0
			0xa1, // segment remap: column 127 is SEG0
			0xc8, // COM output scan direction: remapped
			0xda, 0x12, // COM pins: alternative, no remap
			0x81, 0xff, // contrast
			0xa4, // entire display on: resume from RAM
			0xa6, // normal (not inverted) display
			0xd5, 0x80, // display clock divide ratio / oscillator frequency
			0x8d, 0x14, // charge pump: enable
			0xaf, // display on
			0x20, 0x00, // memory addressing mode: horizontal
		])?;
		if invert {
			self.write_command(0xa7)?;
		}
		Ok(())
	}

	fn set_position(&mut self, offset: u16) -> Result<(), CodecError> {
		let page = (offset / 128) as u8;
		let column = (offset % 128) as u8;
		self.write_commands(&[
			0xb0 | page,
			0x00 | (column & 0x0f),
			0x10 | ((column >> 4) & 0x0f),
		])?;
		self.cursor = offset;
		Ok(())
	}
}

impl DisplayAdapter for Ssd1306I2cAdapter {
	fn set_cursor(&mut self, offset: u16) -> Result<(), CodecError> {
		self.set_position(offset)
	}

	fn write_block(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
		if self.bad_display {
			// Some controllers run "horizontal addressing mode" without
			// actually auto-advancing past a page boundary; re-issue the
			// cursor command after each page-sized chunk instead of relying
			// on the controller to do it for us.
			let lengths = page_chunk_lengths(self.cursor, bytes.len());
			let mut offset = 0;
			for (i, &len) in lengths.iter().enumerate() {
				self.write_data(&bytes[offset..offset + len])?;
				self.cursor += len as u16;
				offset += len;
				if i + 1 < lengths.len() {
					self.set_position(self.cursor)?;
				}
			}
		} else {
			self.write_data(bytes)?;
			self.cursor += bytes.len() as u16;
		}
		Ok(())
	}
}

impl Ssd1306I2cAdapter {
	fn write_data(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
		let mut buf = Vec::with_capacity(bytes.len() + 1);
		buf.push(DATA_CONTROL_BYTE);
		buf.extend_from_slice(bytes);
		self.device.write(&buf).map_err(to_codec_error)
	}
}

fn to_codec_error(err: i2cdev::linux::LinuxI2CError) -> CodecError {
	CodecError::AdapterIo(std::io::Error::other(err))
}

/// Splits a `len`-byte write starting at `cursor` into chunks that each stay
/// within one 128-column page row, mirroring `oledWriteDataBlock`'s
/// `bBadDisplay` loop: every chunk but the last ends exactly on a page
/// boundary, so the caller can re-issue a cursor command before continuing.
fn page_chunk_lengths(cursor: u16, len: usize) -> Vec<usize> {
	let mut lengths = Vec::new();
	let mut remaining = len;
	let mut column = (cursor % 128) as usize;
	while remaining > 0 && column + remaining >= 128 {
		let room = 128 - column;
		lengths.push(room);
		remaining -= room;
		column = 0;
	}
	if remaining > 0 {
		lengths.push(remaining);
	}
	lengths
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	if cli.verbose {
		info!("reading animation from {}", cli.input.display());
	}
	let data = std::fs::read(&cli.input)
		.with_context(|| format!("reading {}", cli.input.display()))?;

	let mut adapter = Ssd1306I2cAdapter::open(cli.chan, cli.addr, cli.invert, cli.bad)
		.context("initializing SSD1306 over I2C")?;

	if cli.verbose {
		info!(
			"playing {} bytes at {} fps (loop={}, bad_display={})",
			data.len(),
			cli.rate,
			cli.loop_forever,
			cli.bad
		);
	}

	play(&data, cli.rate, cli.loop_forever, &mut adapter)?;
	Ok(())
}
