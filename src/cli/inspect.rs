//! Inspection command: dump a manifest's resource table.

use crate::cli::common::{CliError, CliResult};
use crate::models::ResourceSet;
use crate::parser::parse_manifest;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the screens, hotspots, areas, groups, values, and colors a manifest
/// declares
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the screen manifest file
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScreenSummary {
    name: String,
    width: u32,
    height: u32,
    stride: u32,
    depth: String,
    address: u32,
    size: u32,
    hotspots: usize,
    areas: usize,
    locations: usize,
}

#[derive(Debug, Serialize)]
struct GroupSummary {
    name: String,
    members: usize,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    screens: Vec<ScreenSummary>,
    groups: Vec<GroupSummary>,
    values: Vec<String>,
    colors: Vec<String>,
    file_length: Option<u32>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let resources =
            parse_manifest(&self.manifest).map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            let response = build_response(&resources);
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for screen in &resources.screens {
            println!(
                "Screen {} ({}x{}, {} @ 0x{:X}, {} bytes)",
                screen.name,
                screen.image.width,
                screen.image.height,
                screen.image.depth,
                screen.image.address,
                screen.image.size
            );
            for hotspot in &screen.hotspots {
                let tag = if hotspot.tag.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", hotspot.tag)
                };
                println!("  hotspot {}{} {}", hotspot.id, tag, hotspot.rect);
            }
            for area in &screen.areas {
                println!("  area    {} {}", area.id, area.rect);
            }
            for location in &screen.locations {
                println!("  loc     {} ({}, {})", location.id, location.x, location.y);
            }
        }

        if !resources.groups.is_empty() {
            println!("Groups:");
            for group in &resources.groups {
                println!("  {} ({} hotspots)", group.name, group.len());
            }
        }
        if !resources.values.is_empty() {
            println!("Values:");
            for value in &resources.values {
                println!("  {} = {}", value.name, value.default);
            }
        }
        if !resources.colors.is_empty() {
            println!("Colors:");
            for color in &resources.colors {
                println!("  {} = {}", color.name, color.color);
            }
        }
        if let Some(length) = resources.file_length {
            println!("Screen file length: {length} bytes");
        }

        Ok(())
    }
}

fn build_response(resources: &ResourceSet) -> InspectResponse {
    InspectResponse {
        screens: resources
            .screens
            .iter()
            .map(|s| ScreenSummary {
                name: s.name.clone(),
                width: s.image.width,
                height: s.image.height,
                stride: s.image.stride,
                depth: s.image.depth.to_string(),
                address: s.image.address,
                size: s.image.size,
                hotspots: s.hotspots.len(),
                areas: s.areas.len(),
                locations: s.locations.len(),
            })
            .collect(),
        groups: resources
            .groups
            .iter()
            .map(|g| GroupSummary {
                name: g.name.clone(),
                members: g.len(),
            })
            .collect(),
        values: resources.values.iter().map(|v| v.name.clone()).collect(),
        colors: resources.colors.iter().map(|c| c.name.clone()).collect(),
        file_length: resources.file_length,
    }
}
