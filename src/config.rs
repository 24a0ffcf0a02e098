use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

use crate::palette::{DEFAULT_BLUE_WORDS, DEFAULT_GREEN_WORDS, DEFAULT_RED_WORDS};

// Using constants for default values makes them easy to change.
pub const DEFAULT_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
const DEFAULT_FONT_SIZE: f64 = 1.0;
const DEFAULT_GLYPH_ADVANCE: f64 = 0.6;
const DEFAULT_SPACE_RATIO: f64 = crate::layout::DEFAULT_SPACE_RATIO;
const DEFAULT_LINE_HEIGHT_RATIO: f64 = crate::layout::DEFAULT_LINE_HEIGHT_RATIO;
const DEFAULT_TEXT_WIDTH_RATIO: f64 = 0.6;
const DEFAULT_CAMERA_FOV: f64 = crate::camera::DEFAULT_FOV_DEGREES;
const DEFAULT_CAMERA_DISTANCE: f64 = crate::camera::DEFAULT_DISTANCE;
const DEFAULT_CELL_ASPECT: f64 = 2.0;
const DEFAULT_SPHERE_RADIUS: f64 = 20.0;
const DEFAULT_SPHERE_SPIN: f64 = 0.3; // 0.005 rad per frame at 60 fps
const DEFAULT_ORBIT_RADIUS: f64 = crate::lights::DEFAULT_ORBIT_RADIUS;
const DEFAULT_ORBIT_SPEED: f64 = crate::lights::DEFAULT_ORBIT_SPEED;
const DEFAULT_FPS: u32 = 30;
const DEFAULT_AMBIENT: f64 = 0.1;
const MAX_FPS: u32 = 240;

const ENV_PREFIX: &str = "TYPESPHERE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to read paragraph from {path}: {source}")]
    TextFile { path: PathBuf, source: io::Error },
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Serde struct for deserializing config file values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    paragraph: Option<String>,
    font_size: Option<f64>,
    glyph_advance: Option<f64>,
    space_ratio: Option<f64>,
    line_height_ratio: Option<f64>,
    text_width_ratio: Option<f64>,
    camera_fov: Option<f64>,
    camera_distance: Option<f64>,
    cell_aspect: Option<f64>,
    sphere_radius: Option<f64>,
    sphere_spin: Option<f64>,
    orbit_radius: Option<f64>,
    orbit_speed: Option<f64>,
    fps: Option<u32>,
    ambient: Option<f64>,
    log_file: Option<PathBuf>,
    red_words: Option<Vec<String>>,
    blue_words: Option<Vec<String>>,
    green_words: Option<Vec<String>>,
}

/// Final settings, every field resolved from some layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub paragraph: String,
    pub font_size: f64,
    /// Advance of one column in em.
    pub glyph_advance: f64,
    pub space_ratio: f64,
    pub line_height_ratio: f64,
    /// Share of the visible text-plane width a line may fill.
    pub text_width_ratio: f64,
    pub camera_fov: f64,
    pub camera_distance: f64,
    pub cell_aspect: f64,
    pub sphere_radius: f64,
    /// Radians per second about the z axis.
    pub sphere_spin: f64,
    pub orbit_radius: f64,
    /// Radians per second.
    pub orbit_speed: f64,
    pub fps: u32,
    pub ambient: f64,
    pub log_file: Option<PathBuf>,
    pub red_words: Vec<String>,
    pub blue_words: Vec<String>,
    pub green_words: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            paragraph: DEFAULT_PARAGRAPH.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            glyph_advance: DEFAULT_GLYPH_ADVANCE,
            space_ratio: DEFAULT_SPACE_RATIO,
            line_height_ratio: DEFAULT_LINE_HEIGHT_RATIO,
            text_width_ratio: DEFAULT_TEXT_WIDTH_RATIO,
            camera_fov: DEFAULT_CAMERA_FOV,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            cell_aspect: DEFAULT_CELL_ASPECT,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            sphere_spin: DEFAULT_SPHERE_SPIN,
            orbit_radius: DEFAULT_ORBIT_RADIUS,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            fps: DEFAULT_FPS,
            ambient: DEFAULT_AMBIENT,
            log_file: None,
            red_words: owned(DEFAULT_RED_WORDS),
            blue_words: owned(DEFAULT_BLUE_WORDS),
            green_words: owned(DEFAULT_GREEN_WORDS),
        }
    }
}

// Command line arguments defined using clap.
#[derive(Parser, Debug)]
#[command(author, version, about = "Typographic light installation for the terminal", long_about = None)]
pub struct CliArgs {
    /// Paragraph to lay out
    #[arg(long, conflicts_with = "text_file")]
    pub paragraph: Option<String>,

    /// Read the paragraph from a file
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub font_size: Option<f64>,
    #[arg(long)]
    pub text_width_ratio: Option<f64>,
    #[arg(long)]
    pub orbit_speed: Option<f64>,
    #[arg(long)]
    pub orbit_radius: Option<f64>,
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    /// Print the computed layout as JSON and exit
    #[arg(long)]
    pub print_layout: bool,

    /// Viewport width used by --print-layout
    #[arg(long, default_value_t = 80)]
    pub columns: u16,

    /// Viewport height used by --print-layout
    #[arg(long, default_value_t = 24)]
    pub rows: u16,
}

/// Load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("red_words")
        .with_list_parse_key("blue_words")
        .with_list_parse_key("green_words");
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "typesphere").map(|dirs| dirs.config_dir().join("config.toml"))
}

// Separate function to allow testing with specific args and override sources
fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        // An explicitly named file must exist
        let required = args.config.is_some();
        config_builder = config_builder.add_source(File::from(path.clone()).required(required));
    }

    // Overrides (env or a test map) beat the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let defaults = AppConfig::default();
    let paragraph = match args.text_file {
        Some(ref path) => fs::read_to_string(path).map_err(|source| ConfigError::TextFile {
            path: path.clone(),
            source,
        })?,
        None => args
            .paragraph
            .clone()
            .or(loaded.paragraph)
            .unwrap_or(defaults.paragraph),
    };

    let config = AppConfig {
        paragraph,
        font_size: args
            .font_size
            .or(loaded.font_size)
            .unwrap_or(defaults.font_size),
        glyph_advance: loaded.glyph_advance.unwrap_or(defaults.glyph_advance),
        space_ratio: loaded.space_ratio.unwrap_or(defaults.space_ratio),
        line_height_ratio: loaded
            .line_height_ratio
            .unwrap_or(defaults.line_height_ratio),
        text_width_ratio: args
            .text_width_ratio
            .or(loaded.text_width_ratio)
            .unwrap_or(defaults.text_width_ratio),
        camera_fov: loaded.camera_fov.unwrap_or(defaults.camera_fov),
        camera_distance: loaded.camera_distance.unwrap_or(defaults.camera_distance),
        cell_aspect: loaded.cell_aspect.unwrap_or(defaults.cell_aspect),
        sphere_radius: loaded.sphere_radius.unwrap_or(defaults.sphere_radius),
        sphere_spin: loaded.sphere_spin.unwrap_or(defaults.sphere_spin),
        orbit_radius: args
            .orbit_radius
            .or(loaded.orbit_radius)
            .unwrap_or(defaults.orbit_radius),
        orbit_speed: args
            .orbit_speed
            .or(loaded.orbit_speed)
            .unwrap_or(defaults.orbit_speed),
        fps: args.fps.or(loaded.fps).unwrap_or(defaults.fps),
        ambient: loaded.ambient.unwrap_or(defaults.ambient),
        log_file: args.log_file.clone().or(loaded.log_file),
        red_words: loaded.red_words.unwrap_or(defaults.red_words),
        blue_words: loaded.blue_words.unwrap_or(defaults.blue_words),
        green_words: loaded.green_words.unwrap_or(defaults.green_words),
    };

    validate_config(&config)?;
    Ok(config)
}

fn require(ok: bool, message: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(message.to_string()))
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Checks values are within the ranges the scene can work with.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    require(positive(config.font_size), "font_size must be positive")?;
    require(positive(config.glyph_advance), "glyph_advance must be positive")?;
    require(
        config.space_ratio.is_finite() && config.space_ratio >= 0.0,
        "space_ratio must not be negative",
    )?;
    require(
        positive(config.line_height_ratio),
        "line_height_ratio must be positive",
    )?;
    require(
        positive(config.text_width_ratio),
        "text_width_ratio must be positive",
    )?;
    require(
        positive(config.camera_fov) && config.camera_fov < 180.0,
        "camera_fov must be between 0 and 180 degrees",
    )?;
    require(
        positive(config.camera_distance),
        "camera_distance must be positive",
    )?;
    require(positive(config.cell_aspect), "cell_aspect must be positive")?;
    require(positive(config.sphere_radius), "sphere_radius must be positive")?;
    require(config.sphere_spin.is_finite(), "sphere_spin must be finite")?;
    require(
        config.orbit_radius.is_finite() && config.orbit_radius >= 0.0,
        "orbit_radius must not be negative",
    )?;
    require(config.orbit_speed.is_finite(), "orbit_speed must be finite")?;
    require(
        (1..=MAX_FPS).contains(&config.fps),
        "fps must be between 1 and 240",
    )?;
    require(
        (0.0..=1.0).contains(&config.ambient),
        "ambient must be between 0 and 1",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Map, Value, ValueKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Helper to create CliArgs for testing, with a config path that does not
    // pick up the developer's own config file
    fn test_args(extra: &[&str]) -> (CliArgs, NamedTempFile) {
        let file = NamedTempFile::with_suffix(".toml").expect("Failed to create temp config");
        let path = file.path().to_string_lossy().to_string();
        let mut cmd = vec!["typesphere", "--config", path.as_str()];
        cmd.extend_from_slice(extra);
        let args = CliArgs::try_parse_from(cmd).expect("Failed to parse test args");
        (args, file)
    }

    #[test]
    fn test_default_config() {
        let (args, _file) = test_args(&[]);
        let config = build_config_from_args(&args, None).expect("Failed to load default config");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fps, DEFAULT_FPS);
        assert!(config.paragraph.starts_with("Lorem ipsum"));
    }

    #[test]
    fn test_file_values() {
        let (args, mut file) = test_args(&[]);
        writeln!(
            file,
            "paragraph = \"hello world\"\nfont_size = 2.5\nred_words = [\"hello\"]"
        )
        .unwrap();

        let config = build_config_from_args(&args, None).expect("Failed to load file config");
        assert_eq!(config.paragraph, "hello world");
        assert_eq!(config.font_size, 2.5);
        assert_eq!(config.red_words, vec!["hello".to_string()]);
        assert_eq!(config.blue_words, owned(DEFAULT_BLUE_WORDS));
    }

    #[test]
    fn test_env_override() {
        let (args, mut file) = test_args(&[]);
        writeln!(file, "orbit_speed = 2.0").unwrap();

        let mut override_map = Map::new();
        override_map.insert(
            "orbit_speed".to_string(),
            Value::new(None, ValueKind::Float(0.25)),
        );
        override_map.insert("fps".to_string(), Value::new(None, ValueKind::U64(60)));

        let config = build_config_from_args(&args, Some(override_map))
            .expect("Failed to load config with simulated env");

        assert_eq!(config.orbit_speed, 0.25, "Env should beat the file");
        assert_eq!(config.fps, 60);
        assert_eq!(
            config.orbit_radius, DEFAULT_ORBIT_RADIUS,
            "Env override affected unrelated default"
        );
    }

    #[test]
    fn test_arg_override() {
        let (args, mut file) = test_args(&["--fps=12", "--paragraph", "from the command line"]);
        writeln!(file, "fps = 50\nparagraph = \"from the file\"").unwrap();

        let mut override_map = Map::new();
        override_map.insert("fps".to_string(), Value::new(None, ValueKind::U64(24)));

        let config = build_config_from_args(&args, Some(override_map))
            .expect("Failed to build config from args");

        assert_eq!(config.fps, 12);
        assert_eq!(config.paragraph, "from the command line");
    }

    #[test]
    fn test_text_file_paragraph() {
        let mut text = NamedTempFile::new().unwrap();
        write!(text, "words from disk").unwrap();
        let text_path = text.path().to_string_lossy().to_string();

        let (args, _file) = test_args(&["--text-file", text_path.as_str()]);
        let config = build_config_from_args(&args, None).unwrap();
        assert_eq!(config.paragraph, "words from disk");
    }

    #[test]
    fn test_missing_text_file() {
        let (args, _file) = test_args(&["--text-file", "/nonexistent/typesphere/paragraph.txt"]);
        let err = build_config_from_args(&args, None).unwrap_err();
        assert!(matches!(err, ConfigError::TextFile { .. }));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let args = CliArgs::try_parse_from([
            "typesphere",
            "--config",
            "/nonexistent/typesphere/config.toml",
        ])
        .unwrap();
        assert!(matches!(
            build_config_from_args(&args, None),
            Err(ConfigError::ConfigFile(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let (args, _file) = test_args(&["--fps=0"]);
        assert!(matches!(
            build_config_from_args(&args, None),
            Err(ConfigError::ValidationError(_))
        ));

        let (args, _file) = test_args(&["--font-size=-1"]);
        assert!(matches!(
            build_config_from_args(&args, None),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_paragraph_and_text_file_conflict() {
        let result = CliArgs::try_parse_from([
            "typesphere",
            "--paragraph",
            "a",
            "--text-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }
}
