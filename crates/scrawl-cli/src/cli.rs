//! Command-line interface for the scrawl utility
//!
//! Provides a CLI to apply JSON drawing scripts to a character canvas and to
//! inspect or display saved canvas files.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::display::{frame_output, should_colorize, style_output, style_preview};
use crate::script::Script;
use scrawl::tools::Editor;
use scrawl::{Layer, StyleTable};

/// Canvas size used when neither a flag nor a base file provides one
const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 24;

/// Scrawl - compose box-drawing diagrams on a character grid
#[derive(Parser)]
#[command(name = "scrawl")]
#[command(about = "Apply drawing scripts to a character canvas and inspect the results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a JSON drawing script to a canvas and write the text
    Render {
        /// Script file with drawing operations (use - for stdin)
        script: PathBuf,

        /// Output file for the canvas text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in cells (default 80, or the base file's width)
        #[arg(long)]
        width: Option<usize>,

        /// Canvas height in cells (default 24, or the base file's height)
        #[arg(long)]
        height: Option<usize>,

        /// Existing canvas file to draw over
        #[arg(long)]
        base: Option<PathBuf>,

        /// Box-drawing style for shapes (see `scrawl styles`)
        #[arg(long)]
        style: Option<String>,

        /// Mirror the style glyphs left-to-right
        #[arg(long)]
        flip: bool,
    },

    /// Print a saved canvas, optionally styled for the terminal
    Show {
        /// Canvas file to display (use - for stdin)
        file: PathBuf,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,

        /// Draw a border around the canvas
        #[arg(long)]
        frame: bool,
    },

    /// List the built-in box-drawing styles
    Styles {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Report dimensions and cell statistics for a canvas file
    Info {
        /// Canvas file to analyze (use - for stdin)
        file: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
pub struct ScrawlApp {
    editor: Editor,
}

impl ScrawlApp {
    /// Create a new application instance with a default-sized editor
    pub fn new() -> Self {
        Self {
            editor: Editor::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Scrawl v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                script,
                output,
                width,
                height,
                base,
                style,
                flip,
            } => self.render_command(script, output, width, height, base, style, flip, cli.verbose),
            Commands::Show { file, color, frame } => {
                self.show_command(file, color, frame, cli.verbose)
            }
            Commands::Styles { json } => self.styles_command(json, cli.verbose),
            Commands::Info { file, json } => self.info_command(file, json, cli.verbose),
        }
    }

    /// Handle the render command
    #[allow(clippy::too_many_arguments)]
    fn render_command(
        &mut self,
        script: PathBuf,
        output: Option<PathBuf>,
        width: Option<usize>,
        height: Option<usize>,
        base: Option<PathBuf>,
        style: Option<String>,
        flip: bool,
        verbose: bool,
    ) -> Result<()> {
        let text = self.read_input(&script)?;

        if verbose {
            eprintln!("Read {} bytes of script", text.len());
        }

        let script = Script::parse(&text)?;

        let mut editor = match &base {
            Some(path) => {
                let content = self.read_input(path)?;
                scrawl::open(&content)
            }
            None => Editor::with_size(
                width.unwrap_or(DEFAULT_WIDTH),
                height.unwrap_or(DEFAULT_HEIGHT),
            ),
        };
        if base.is_some() && (width.is_some() || height.is_some()) {
            let w = width.unwrap_or(editor.canvas().width());
            let h = height.unwrap_or(editor.canvas().height());
            editor.canvas_mut().resize(w, h);
        }

        if let Some(name) = &style {
            editor.set_style_by_name(name)?;
        }
        if flip {
            editor.set_flip(true);
        }

        script.apply(&mut editor)?;

        if verbose {
            eprintln!("Applied {} operations", script.len());
        }

        let rendered = editor.canvas().content();
        self.editor = editor;
        self.write_output(output, &rendered)
    }

    /// Handle the show command
    fn show_command(
        &self,
        file: PathBuf,
        color: ColorChoice,
        frame: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(&file)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        // Round-trip through a canvas so padding and trailing blanks come out
        // the way the editor would save them
        let editor = scrawl::open(&content);
        let text = editor.canvas().content();

        let framed = if frame { frame_output(&text) } else { text };
        let final_output = if should_colorize(color) {
            style_output(&framed)
        } else {
            framed
        };

        self.write_output(None, &final_output)
    }

    /// Handle the styles command
    fn styles_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing built-in styles");
        }

        let table = StyleTable::builtin();

        if json {
            let styles: Vec<serde_json::Value> = table
                .styles()
                .iter()
                .map(|style| {
                    let glyphs: serde_json::Map<String, serde_json::Value> = style
                        .glyphs
                        .named_glyphs()
                        .iter()
                        .map(|(name, c)| {
                            ((*name).to_string(), serde_json::Value::String(c.to_string()))
                        })
                        .collect();
                    serde_json::json!({ "name": style.name, "glyphs": glyphs })
                })
                .collect();
            let listing = serde_json::json!({ "styles": styles, "total": table.len() });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Built-in styles:");
            for style in table.styles() {
                println!("  {:<10} {}", style.name, style_preview(&style.glyphs));
            }
            println!();
            println!("Total: {} styles", table.len());
        }

        Ok(())
    }

    /// Handle the info command
    fn info_command(&self, file: PathBuf, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(&file)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let editor = scrawl::open(&content);
        let canvas = editor.canvas();
        let filled = canvas.grid(Layer::Draw).occupied_cells();
        let widest = canvas
            .content()
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        if json {
            let report = serde_json::json!({
                "width": canvas.width(),
                "height": canvas.height(),
                "filled_cells": filled,
                "widest_row": widest,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Size: {}x{} cells", canvas.width(), canvas.height());
            println!("Filled cells: {}", filled);
            println!("Widest row: {} columns", widest);
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, path: &Path) -> Result<String> {
        if path.to_string_lossy() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        } else {
            fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e))
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", stdout_content);
                    io::stdout().flush()?;
                } else {
                    fs::write(&path, content).map_err(|e| {
                        anyhow!("Failed to write output file '{}': {}", path.display(), e)
                    })?;
                }
            }
            None => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the editor (for testing)
    #[cfg(test)]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }
}

impl Default for ScrawlApp {
    fn default() -> Self {
        Self::new()
    }
}
