// scf/src/render.rs
//
// Text renderers for the terminal. Display bounds (DisplaySettings) only truncate
// what is printed; the JSON output always carries the full result.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::collections::BTreeMap;
use std::fmt::Write;

use scf_core::application::{
    ControlService, ControlView, FrameworkControlRow, FrameworkControlsResponse, FrameworkGroup,
    FrameworkListResponse, HealthReport, InfoResponse, MappingResponse, ResolveResponse,
    SearchResponse,
};
use scf_core::domain::configuration::DisplaySettings;

const MAPPED_TO_PREVIEW: usize = 5;
const DESCRIPTION_PREVIEW: usize = 100;

pub fn control(view: &ControlView, service: &ControlService<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", view.id, view.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Domain:              {}", view.domain);
    let _ = writeln!(out, "Description:         {}", view.description);
    let _ = writeln!(out, "Weight:              {}/10", view.weight);
    let _ = writeln!(out, "PPTDF:               {}", view.pptdf);
    let _ = writeln!(out, "Validation Cadence:  {}", view.validation_cadence);

    if let Some(mappings) = &view.framework_mappings {
        let mapped: Vec<_> = mappings.mapped().collect();
        if !mapped.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Framework Mappings:");
            for (key, ids) in mapped {
                let _ = writeln!(
                    out,
                    "  - {}: {}",
                    service.framework_display_name(key),
                    ids.join(", ")
                );
            }
        }
    }
    out
}

pub fn search(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        return format!(
            "No controls found matching '{}'. Try different keywords.\n",
            response.query
        );
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} control(s) matching '{}'",
        response.count, response.query
    );
    for hit in &response.results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", hit.control_id, hit.name);
        let _ = writeln!(out, "  {}", hit.snippet);
        let preview: Vec<&str> = hit
            .mapped_frameworks
            .iter()
            .take(MAPPED_TO_PREVIEW)
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "  Mapped to: {}", preview.join(", "));
    }
    out
}

pub fn frameworks(response: &FrameworkListResponse) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Name", "Controls"]);
    for fw in &response.frameworks {
        table.add_row(vec![
            fw.key.clone(),
            fw.name.clone(),
            fw.controls_mapped.to_string(),
        ]);
    }

    let title = match &response.category {
        Some(category) => format!(
            "Frameworks in '{}' ({} total)",
            category, response.count
        ),
        None => format!("Available Frameworks ({} total)", response.count),
    };
    format!("{}\n{}\n", title, table)
}

pub fn framework_groups(groups: &[FrameworkGroup]) -> String {
    let mut out = String::new();
    for group in groups.iter().filter(|g| !g.frameworks.is_empty()) {
        let _ = writeln!(out, "{} ({})", group.category, group.frameworks.len());
        for fw in &group.frameworks {
            let _ = writeln!(
                out,
                "  - {}: {} ({} controls)",
                fw.key, fw.name, fw.controls_mapped
            );
        }
    }
    out
}

/// `domain_of` maps an SCF id to its domain name; unknown ids group under the id prefix.
pub fn framework_controls<'d>(
    response: &'d FrameworkControlsResponse,
    display: &DisplaySettings,
    domain_of: impl Fn(&str) -> Option<&'d str>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", response.name);
    let _ = writeln!(out, "Total Controls: {}", response.count);

    let mut by_domain: BTreeMap<&str, Vec<&FrameworkControlRow>> = BTreeMap::new();
    for row in &response.controls {
        let domain = domain_of(&row.scf_id)
            .unwrap_or_else(|| row.scf_id.split('-').next().unwrap_or(&row.scf_id));
        by_domain.entry(domain).or_default().push(row);
    }

    for (domain, rows) in by_domain {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", domain);
        for row in rows.iter().take(display.max_per_domain) {
            let _ = writeln!(out, "  - {}: {}", row.scf_id, row.scf_name);
            let ids: Vec<&str> = row
                .framework_control_ids
                .iter()
                .take(display.max_ids)
                .map(String::as_str)
                .collect();
            let _ = writeln!(out, "    Maps to: {}", ids.join(", "));
            if let Some(description) = &row.description {
                let _ = writeln!(out, "    {}", preview(description, DESCRIPTION_PREVIEW));
            }
        }
        if rows.len() > display.max_per_domain {
            let _ = writeln!(
                out,
                "  ... and {} more controls",
                rows.len() - display.max_per_domain
            );
        }
    }
    out
}

pub fn mapping(response: &MappingResponse, display: &DisplaySettings) -> String {
    if response.mappings.is_empty() {
        return format!(
            "No mappings found between {} and {}\n",
            response.source_framework, response.target_framework
        );
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mapping: {} -> {}",
        response.source_name, response.target_name
    );
    if let Some(source_control) = &response.source_control {
        let _ = writeln!(out, "Filtered to source control: {}", source_control);
    }
    let _ = writeln!(out, "Found {} SCF controls", response.count);

    for row in response.mappings.iter().take(display.max_mappings) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}: {} (weight: {})",
            row.scf_id, row.scf_name, row.weight
        );
        let _ = writeln!(
            out,
            "  - Source ({}): {}",
            response.source_framework,
            first_ids(&row.source_controls, display.max_ids)
        );
        if row.target_controls.is_empty() {
            let _ = writeln!(
                out,
                "  - Target ({}): No direct mapping",
                response.target_framework
            );
        } else {
            let _ = writeln!(
                out,
                "  - Target ({}): {}",
                response.target_framework,
                first_ids(&row.target_controls, display.max_ids)
            );
        }
    }

    if response.count > display.max_mappings {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Showing first {} of {} mappings",
            display.max_mappings, response.count
        );
    }
    out
}

pub fn resolve(response: &ResolveResponse) -> String {
    if response.scf_ids.is_empty() {
        return format!(
            "No SCF controls map to {} {}\n",
            response.framework, response.native_control
        );
    }
    format!(
        "{} {} -> {}\n",
        response.framework,
        response.native_control,
        response.scf_ids.join(", ")
    )
}

pub fn info(response: &InfoResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} v{}", response.service, response.version);
    let _ = writeln!(out, "Database:   {}", response.database);
    let _ = writeln!(out, "Controls:   {}", response.statistics.controls);
    let _ = writeln!(out, "Frameworks: {}", response.statistics.frameworks);
    let _ = writeln!(out, "Categories: {}", response.statistics.categories);
    if !response.statistics.top_frameworks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Top frameworks:");
        for fw in &response.statistics.top_frameworks {
            let _ = writeln!(out, "  - {}: {} controls", fw.name, fw.controls_mapped);
        }
    }
    out
}

pub fn health(report: &HealthReport) -> String {
    format!(
        "{} ({}) {} controls, {} frameworks [{}]\n",
        report.status,
        report.database_version,
        report.controls_count,
        report.frameworks_count,
        report.timestamp
    )
}

fn first_ids(ids: &[String], max: usize) -> String {
    ids.iter()
        .take(max)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// First `max` characters followed by "...".
fn preview(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}
