use std::{fs, path::{Path, PathBuf}};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use image::{imageops, ImageFormat, RgbaImage};
use log::{debug, info};

use stellar_shared::{
    config::ToolConfig,
    constants::framebuffer::PNG_EXTENSION,
    util::{append_extension, session_frame_path},
};

use crate::{frame::RawFrame, preset::Preset};

#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "converts raw RGBA framebuffer dumps to png", long_about = None)]
pub struct ConverterConfig {
    #[arg(help = "Raw RGBA dump to convert. Defaults to /dev/shm/<HW_SESSION_ID>.raw")]
    pub input: Option<PathBuf>,
    #[arg(short, long, default_value_t = Preset::Hd720, help = "Frame size to assume")]
    pub preset: Preset,
    #[arg(long, requires = "height", help = "Frame width, overrides the preset")]
    pub width: Option<u32>,
    #[arg(long, requires = "width", help = "Frame height, overrides the preset")]
    pub height: Option<u32>,
    #[arg(short, long, help = "Pick the preset whose size matches the file")]
    pub guess: bool,
    #[arg(short, long, env = "RGBA2PNG_FLIP", help = "Flip vertically, for OpenGL read backs")]
    pub flip: bool,
    #[arg(short, long, help = "Output path. Defaults to the input path with .png appended")]
    pub output: Option<PathBuf>,
    #[arg(short, long, help = "Verbose logging. Same as DEBUG_HW=1.")]
    pub debug: bool,
}

impl ConverterConfig {
    pub fn input_path(&self, tool_config: &ToolConfig) -> Result<PathBuf> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        match &tool_config.session_id {
            Some(sid) => {
                let path = session_frame_path(sid);
                info!("no input given, using session frame {}", path.display());
                Ok(path)
            }
            None => bail!("no input file given and HW_SESSION_ID is not set"),
        }
    }

    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => append_extension(input, PNG_EXTENSION),
        }
    }

    /// Explicit width and height win, then `--guess`, then the preset.
    pub fn resolve_dimensions(&self, len: usize) -> Result<(u32, u32)> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => return Ok((width, height)),
            (None, None) => {}
            _ => bail!("--width and --height have to be given together"),
        }
        if self.guess {
            let matching = Preset::matching(len);
            return match matching.as_slice() {
                [preset] => {
                    info!("guessed {} from {} bytes", preset, len);
                    Ok(preset.dimensions())
                }
                [] => Err(anyhow!("no preset is {} bytes, pass --width and --height", len)),
                _ => Err(anyhow!("{} bytes matches several presets: {:?}", len, matching)),
            };
        }
        Ok(self.preset.dimensions())
    }
}

pub fn to_image(frame: RawFrame, flip: bool) -> Result<RgbaImage> {
    let (width, height) = (frame.width(), frame.height());
    let mut image = RgbaImage::from_raw(width, height, frame.into_bytes())
        .ok_or_else(|| anyhow!("buffer does not fit a {}x{} image", width, height))?;
    if flip {
        imageops::flip_vertical_in_place(&mut image);
    }
    Ok(image)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub struct Converter {
    pub config: ConverterConfig,
    pub tool_config: ToolConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig, tool_config: ToolConfig) -> Self {
        Self { config, tool_config }
    }

    pub fn run(&self) -> Result<ConvertSummary> {
        let input = self.config.input_path(&self.tool_config)?;
        let output = self.config.output_path(&input);

        let raw = fs::read(&input).with_context(|| format!("could not read {}", input.display()))?;
        let (width, height) = self.config.resolve_dimensions(raw.len())?;
        debug!("{}: {} bytes as {}x{}", input.display(), raw.len(), width, height);

        let frame = RawFrame::from_bytes(width, height, raw)
            .with_context(|| format!("{} is not a {}x{} frame", input.display(), width, height))?;
        if let Some(first) = frame.pixel(0, 0) {
            debug!("first pixel {:?}", first);
        }

        let image = to_image(frame, self.config.flip)?;
        image
            .save_with_format(&output, ImageFormat::Png)
            .with_context(|| format!("could not write {}", output.display()))?;
        println!("Wrote {} ({}x{})", output.display(), width, height);

        Ok(ConvertSummary { input, output, width, height })
    }
}
