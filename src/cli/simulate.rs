//! Simulation command: drive the engine from a touch script.
//!
//! Provides a headless stand-in for the touch-sampling and rendering
//! hardware: touch events come from a script file, render notifications go
//! to stdout. With `--keypad`, digit-group hotspots get the classic keypad
//! behavior of appending to the `Display` value.

use crate::cli::common::{CliError, CliResult};
use crate::config::EngineConfig;
use crate::engine::{Engine, RenderSink, TouchOutcome};
use crate::models::Value;
use crate::parser::parse_manifest;
use clap::Args;
use std::path::PathBuf;

/// Run a touch script against a manifest and print what the engine does
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Path to the screen manifest file
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Path to the touch script (tap X Y / navigate SCREEN / set NAME VALUE /
    /// bind AREA NAME, one per line)
    #[arg(short, long, value_name = "FILE")]
    pub script: PathBuf,

    /// Path to an engine config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start screen (overrides the config file)
    #[arg(long, value_name = "SCREEN")]
    pub start: Option<String>,

    /// Register the demo keypad policy: digit-group keys edit the Display
    /// value
    #[arg(long)]
    pub keypad: bool,
}

/// Sink that narrates render notifications on stdout.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn screen_entered(&mut self, screen: &str) {
        println!(">> enter screen {screen}");
    }

    fn area_refresh(&mut self, screen: &str, area: &str, value: &Value) {
        println!(">> refresh {screen}/{area} = \"{value}\"");
    }
}

impl SimulateArgs {
    /// Execute the simulate command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path).map_err(|e| CliError::io(format!("{e:#}")))?,
            None => EngineConfig::default(),
        };
        if let Some(start) = &self.start {
            config.start_screen.clone_from(start);
        }
        if !config.has_start_screen() {
            return Err(CliError::io(
                "no start screen: pass --start or set start-screen in the config",
            ));
        }

        let resources =
            parse_manifest(&self.manifest).map_err(|e| CliError::validation(format!("{e:#}")))?;

        let mut engine = Engine::new(resources, &config, Box::new(ConsoleSink))
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.keypad {
            engine.bind_area("Display", "Display");
            engine.on_group("Digit", |ctx, activation| {
                let current = ctx
                    .value("Display")
                    .map(ToString::to_string)
                    .unwrap_or_default();
                let key = activation.hotspot.trim_start_matches("Key_");
                ctx.set_value("Display", apply_key(&current, key));
            });
        }

        engine.start();

        let script = std::fs::read_to_string(&self.script)
            .map_err(|e| CliError::io(format!("Failed to read script {}: {e}", self.script.display())))?;

        for (idx, raw_line) in script.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            run_command(&mut engine, line)
                .map_err(|message| CliError::io(format!("script line {}: {message}", idx + 1)))?;
        }

        Ok(())
    }
}

/// Executes one script command against the engine.
fn run_command(engine: &mut Engine, line: &str) -> Result<(), String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    match command {
        "tap" => {
            let x = parse_coord(parts.next())?;
            let y = parse_coord(parts.next())?;
            match engine.handle_touch(x, y) {
                TouchOutcome::Activated(activation) => {
                    let tag = if activation.tag.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", activation.tag)
                    };
                    println!(
                        "tap ({x}, {y}) -> {}{tag} on {}",
                        activation.hotspot, activation.screen
                    );
                }
                TouchOutcome::NoMatch => println!("tap ({x}, {y}) -> no hotspot"),
            }
            Ok(())
        }
        "navigate" => {
            let target = parts.next().ok_or("navigate needs a screen name")?;
            // Unknown screens are recoverable; report and continue.
            match engine.navigate_to(target) {
                Ok(()) => {}
                Err(e) => println!("navigate {target} -> error: {e}"),
            }
            Ok(())
        }
        "set" => {
            let name = parts.next().ok_or("set needs a value name")?.to_string();
            let rest: Vec<&str> = parts.collect();
            if rest.is_empty() {
                return Err("set needs a value".to_string());
            }
            let raw = rest.join(" ");
            let raw = raw
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&raw);
            let value = raw
                .parse::<i64>()
                .map_or_else(|_| Value::from(raw), Value::Int);
            engine.set_value(name, value);
            Ok(())
        }
        "bind" => {
            let area = parts.next().ok_or("bind needs an area id")?;
            let name = parts.next().ok_or("bind needs a value name")?;
            engine.bind_area(area, name);
            Ok(())
        }
        other => Err(format!("unknown command '{other}'")),
    }
}

fn parse_coord(part: Option<&str>) -> Result<i32, String> {
    part.ok_or("tap needs X and Y coordinates")?
        .parse::<i32>()
        .map_err(|e| format!("bad coordinate: {e}"))
}

/// Keypad editing policy for the demo: digits append, `sign` toggles the
/// leading minus, `decimal` appends a single decimal point.
fn apply_key(current: &str, key: &str) -> String {
    match key {
        "sign" => current.strip_prefix('-').map_or_else(
            || format!("-{current}"),
            std::string::ToString::to_string,
        ),
        "decimal" => {
            if current.contains('.') {
                current.to_string()
            } else {
                format!("{current}.")
            }
        }
        digit => format!("{current}{digit}"),
    }
}
