#![deny(unsafe_code)]
//! CLI binary for printcolor.
//!
//! Subcommands:
//! - `convert <color>`: show every representation of a color
//! - `contrast <color>`: classify dark/light and pick a foreground
//! - `pack <r> <g> <b>`: build a packed `0xAARRGGBB` integer
//! - `unpack <packed>`: split a packed integer into channels
//! - `encode <colors...>`: emit a hex image data block
//! - `list`: print color and draw modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use printcolor_core::contrast::{foreground_for_with_cutoff, is_dark_with_cutoff};
use printcolor_core::convert::{
    color_to_bitmap, color_to_cmyk, color_to_gray, color_to_hsb, rgb_to_bitmap_hex,
    rgb_to_cmyk_hex, rgb_to_gray_hex, rgb_to_rgb_hex,
};
use printcolor_core::packed::{pack, unpack_alpha, unpack_blue, unpack_green, unpack_red};
use printcolor_core::params::{param_f64, CUTOFF_KEY};
use printcolor_core::{Color, ColorMode, DrawMode, PackedColor, DEFAULT_BRIGHTNESS_CUTOFF};
use printcolor_export::{encode_pixels, set_color_command, EncodeOptions};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "printcolor", about = "Color conversions for print output")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color as packed, RGB, gray, bitmap, CMYK and HSB, with hex tokens.
    Convert {
        /// Color as "#rrggbb", "#rrggbbaa" or "r,g,b[,a]".
        color: String,
    },
    /// Classify a color as dark or light and pick a legible foreground.
    Contrast {
        /// Background color.
        color: String,

        /// Brightness cutoff; overrides `cutoff` in --params.
        #[arg(long)]
        cutoff: Option<f64>,

        /// Tunables as a JSON string, e.g. '{"cutoff": 0.6}'.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Pack channels into 0xAARRGGBB. Out-of-range values wrap to 8 bits.
    Pack {
        #[arg(allow_negative_numbers = true)]
        red: i32,
        #[arg(allow_negative_numbers = true)]
        green: i32,
        #[arg(allow_negative_numbers = true)]
        blue: i32,

        /// Alpha channel.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        alpha: i32,
    },
    /// Split a packed integer ("0x..." or decimal) into channels.
    Unpack { packed: String },
    /// Encode colors as a hex image data block, row-major.
    Encode {
        /// Pixel colors.
        #[arg(required = true)]
        colors: Vec<String>,

        /// Pixels per row; defaults to a single row.
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// Color mode (bitmap, grayscale, rgb, cmyk); overrides `mode` in --params.
        #[arg(short, long)]
        mode: Option<String>,

        /// Tunables as a JSON string, e.g. '{"line_width": 64}'.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List color modes and draw modes.
    List,
}

fn parse_color(s: &str) -> Result<Color, CliError> {
    s.parse::<Color>().map_err(CliError::from)
}

fn parse_params(s: &str) -> Result<serde_json::Value, CliError> {
    serde_json::from_str(s).map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))
}

fn parse_packed(s: &str) -> Result<PackedColor, CliError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| CliError::Input(format!("invalid packed color {s:?}: {e}")))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color } => {
            let color = parse_color(&color)?;
            let cmyk = color_to_cmyk(color);
            let hsb = color_to_hsb(color);
            let gray = color_to_gray(color);
            let bitmap = color_to_bitmap(color);
            let packed = color.to_packed();
            if cli.json {
                let info = serde_json::json!({
                    "color": color,
                    "packed": format!("{packed:#010x}"),
                    "gray": gray,
                    "bitmap": bitmap,
                    "cmyk": cmyk,
                    "hsb": hsb,
                    "hex": {
                        "rgb": rgb_to_rgb_hex(color),
                        "gray": rgb_to_gray_hex(color),
                        "bitmap": rgb_to_bitmap_hex(color),
                        "cmyk": rgb_to_cmyk_hex(color),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("color:   {}", color.to_hex());
                println!("packed:  {packed:#010x}");
                println!("gray:    {gray:.4} ({})", rgb_to_gray_hex(color));
                println!("bitmap:  {bitmap} ({})", rgb_to_bitmap_hex(color));
                println!(
                    "cmyk:    {:.4} {:.4} {:.4} {:.4} ({})",
                    cmyk.c,
                    cmyk.m,
                    cmyk.y,
                    cmyk.k,
                    rgb_to_cmyk_hex(color).join(" ")
                );
                println!("hsb:     {:.4} {:.4} {:.4}", hsb.h, hsb.s, hsb.b);
                println!("rgb hex: {}", rgb_to_rgb_hex(color).join(" "));
                for mode in ColorMode::ALL {
                    println!("{:<8} {}", format!("{mode}:"), set_color_command(color, mode));
                }
            }
        }
        Command::Contrast {
            color,
            cutoff,
            params,
        } => {
            let color = parse_color(&color)?;
            let params = parse_params(&params)?;
            let cutoff =
                cutoff.unwrap_or_else(|| param_f64(&params, CUTOFF_KEY, DEFAULT_BRIGHTNESS_CUTOFF));
            let dark = is_dark_with_cutoff(color, cutoff);
            let foreground = foreground_for_with_cutoff(color, cutoff);
            let brightness = color_to_hsb(color).b;
            if cli.json {
                let info = serde_json::json!({
                    "color": color,
                    "brightness": brightness,
                    "cutoff": cutoff,
                    "dark": dark,
                    "foreground": foreground,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let class = if dark { "dark" } else { "light" };
                println!(
                    "{} is {class} (brightness {brightness:.4}, cutoff {cutoff}); foreground {}",
                    color.to_hex(),
                    foreground.to_hex()
                );
            }
        }
        Command::Pack {
            red,
            green,
            blue,
            alpha,
        } => {
            let packed = pack(red, green, blue, alpha);
            if cli.json {
                let info = serde_json::json!({
                    "packed": format!("{packed:#010x}"),
                    "value": packed,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{packed:#010x}");
            }
        }
        Command::Unpack { packed } => {
            let packed = parse_packed(&packed)?;
            let (a, r, g, b) = (
                unpack_alpha(packed),
                unpack_red(packed),
                unpack_green(packed),
                unpack_blue(packed),
            );
            if cli.json {
                let info = serde_json::json!({
                    "alpha": a,
                    "red": r,
                    "green": g,
                    "blue": b,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("alpha {a}, red {r}, green {g}, blue {b}");
            }
        }
        Command::Encode {
            colors,
            width,
            mode,
            params,
        } => {
            let pixels = colors
                .iter()
                .map(|c| parse_color(c).map(Color::to_packed))
                .collect::<Result<Vec<PackedColor>, CliError>>()?;
            let params = parse_params(&params)?;
            let mut options = EncodeOptions::from_params(&params);
            if let Some(mode) = mode {
                options.mode = mode.parse::<ColorMode>()?;
            }
            let width = width.unwrap_or(pixels.len());
            let height = if width == 0 { 0 } else { pixels.len() / width };

            let block = encode_pixels(&pixels, width, height, &options)?;
            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "options": options,
                    "data": block,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{block}");
            }
        }
        Command::List => {
            let color_modes = ColorMode::list_names();
            let draw_modes = DrawMode::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "color_modes": color_modes,
                    "default_color_mode": ColorMode::default(),
                    "draw_modes": draw_modes,
                    "default_draw_mode": DrawMode::default(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Color modes (default {}):", ColorMode::default());
                println!("  {}", color_modes.join(", "));
                println!("Draw modes (default {}):", DrawMode::default());
                println!("  {}", draw_modes.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pack_accepts_negative_channels() {
        let cli = Cli::try_parse_from(["printcolor", "pack", "-1", "256", "3", "--alpha", "-2"])
            .unwrap();
        match cli.command {
            Command::Pack {
                red,
                green,
                blue,
                alpha,
            } => assert_eq!(pack(red, green, blue, alpha), 0xfeff_0003),
            _ => panic!("expected pack"),
        }
    }

    #[test]
    fn parse_packed_accepts_hex_and_decimal() {
        assert_eq!(parse_packed("0xffc86432").ok(), Some(0xffc8_6432));
        assert_eq!(parse_packed("0XFF").ok(), Some(255));
        assert_eq!(parse_packed("4294967295").ok(), Some(u32::MAX));
        assert!(parse_packed("0xzz").is_err());
        assert!(parse_packed("-1").is_err());
    }

    #[test]
    fn parse_color_errors_are_input_errors() {
        let err = parse_color("#nothex").err().unwrap();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn parse_params_rejects_bad_json() {
        let err = parse_params("{oops").err().unwrap();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn run_encode_reports_size_mismatch() {
        let cli = Cli::try_parse_from([
            "printcolor", "encode", "#000000", "#ffffff", "#808080", "--width", "2",
        ])
        .unwrap();
        let err = run(cli).err().unwrap();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn run_encode_rejects_unknown_mode() {
        let cli = Cli::try_parse_from(["printcolor", "encode", "#000000", "--mode", "sepia"])
            .unwrap();
        let err = run(cli).err().unwrap();
        assert_eq!(err.exit_code(), 12);
    }
}
