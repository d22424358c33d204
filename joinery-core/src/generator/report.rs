//! Plain-text estimate report.

use std::fmt::Write;

use crate::estimate::{ModuleEstimate, ProjectEstimate};
use crate::model::Project;

/// Generate the report for an estimated project.
pub fn generate_report(project: &Project, estimate: &ProjectEstimate) -> String {
    let mut output = String::new();

    generate_project_section(&mut output, project, estimate);

    for (idx, module) in estimate.modules.iter().enumerate() {
        generate_module_section(&mut output, idx + 1, module);
    }

    generate_materials_section(&mut output, estimate);
    generate_hardware_section(&mut output, estimate);
    generate_pricing_section(&mut output, estimate);

    output
}

/// Generate the [PROJECT] section.
fn generate_project_section(output: &mut String, project: &Project, estimate: &ProjectEstimate) {
    writeln!(output, "[PROJECT]").unwrap();
    writeln!(output, "Name: {}", project.name).unwrap();
    if let Some(client) = &project.client {
        writeln!(output, "Client: {}", client).unwrap();
    }
    writeln!(output, "Modules: {}", estimate.modules.len()).unwrap();
    writeln!(output).unwrap();
}

/// Generate one [MODULE nn] section with the cutlist table.
fn generate_module_section(output: &mut String, number: usize, module: &ModuleEstimate) {
    writeln!(output, "[MODULE {:02}]", number).unwrap();
    writeln!(output, "Label: {} x{}", module.label, module.quantity).unwrap();
    writeln!(
        output,
        "{:<18} {:>4} {:>8} {:>8} {:>5}",
        "Part", "Qty", "W mm", "H mm", "Mat"
    )
    .unwrap();

    for part in &module.cutlist.parts {
        writeln!(
            output,
            "{:<18} {:>4} {:>8} {:>8} {:>5}",
            part.name,
            part.quantity,
            format_mm(part.width),
            format_mm(part.height),
            part.material
        )
        .unwrap();
    }

    writeln!(output, "Pieces: {}", module.cutlist.piece_count()).unwrap();
    writeln!(output, "Unit cost: {}", format_money(module.cutlist.material_cost)).unwrap();
    writeln!(output, "Line cost: {}", format_money(module.line_cost)).unwrap();
    writeln!(output).unwrap();
}

/// Generate the [MATERIALS] section.
fn generate_materials_section(output: &mut String, estimate: &ProjectEstimate) {
    let (thick, thin) = estimate.purchase_sheets;
    writeln!(output, "[MATERIALS]").unwrap();
    writeln!(
        output,
        "15mm sheets: {:.2} (buy {})",
        estimate.sheets.thick_sheets, thick
    )
    .unwrap();
    writeln!(
        output,
        "6mm sheets: {:.2} (buy {})",
        estimate.sheets.thin_sheets, thin
    )
    .unwrap();
    writeln!(output).unwrap();
}

/// Generate the [HARDWARE] section.
fn generate_hardware_section(output: &mut String, estimate: &ProjectEstimate) {
    writeln!(output, "[HARDWARE]").unwrap();
    writeln!(output, "Hinges: {}", estimate.hardware.hinges).unwrap();
    writeln!(output, "Slide pairs: {}", estimate.hardware.slides).unwrap();
    writeln!(output, "Handles: {}", estimate.hardware.handles).unwrap();
    writeln!(output).unwrap();
}

/// Generate the [PRICING] section.
fn generate_pricing_section(output: &mut String, estimate: &ProjectEstimate) {
    let f = &estimate.financials;
    writeln!(output, "[PRICING]").unwrap();
    writeln!(output, "Materials: {}", format_money(estimate.estimated_cost)).unwrap();
    writeln!(
        output,
        "Shop time: {}h x {} = {}",
        format_mm(f.total_hours),
        format_money(f.hourly_rate),
        format_money(f.shop_overhead_cost)
    )
    .unwrap();
    writeln!(output, "Base cost: {}", format_money(f.total_base_cost)).unwrap();
    writeln!(output, "Suggested price: {}", format_money(f.suggested_price)).unwrap();
    writeln!(
        output,
        "Carpenter commission: {}",
        format_money(f.carpenter_commission_value)
    )
    .unwrap();
    writeln!(output, "Profit: {}", format_money(f.profit)).unwrap();
}

/// Format a money value with two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a length, dropping the decimals when whole.
pub fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let formatted = format!("{:.1}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopSettings;
    use crate::estimate::estimate_project;
    use crate::model::{ModuleSpec, ModuleType, ProjectModule};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(570.0), "570");
        assert_eq!(format_mm(396.5), "396.5");
        assert_eq!(format_mm(0.0), "0");
        assert_eq!(format_mm(24.0), "24");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(3777.7777), "3777.78");
        assert_eq!(format_money(0.0), "0.00");
    }

    #[test]
    fn test_report_sections() {
        let mut project = Project {
            client: Some("Ana".to_string()),
            margin_percent: 30.0,
            ..Project::new("Studio")
        };
        project.add_module(ProjectModule::new(
            "Bookcase",
            ModuleSpec {
                shelf_count: 4,
                ..ModuleSpec::new(ModuleType::Generic, 80.0, 180.0, 30.0)
            },
        ));
        let estimate = estimate_project(&project, &ShopSettings::new());
        let report = generate_report(&project, &estimate);

        for section in ["[PROJECT]", "[MODULE 01]", "[MATERIALS]", "[HARDWARE]", "[PRICING]"] {
            assert!(report.contains(section), "missing {}", section);
        }
        assert!(report.contains("Client: Ana"));
        assert!(report.contains("Label: Bookcase x1"));
        assert!(report.contains("Side Panel"));
        assert!(report.contains("Shelf"));
        assert!(report.contains("Hinges: 0"));
        // 2 sides, bottom, top and 4 shelves
        assert!(report.contains("Pieces: 8"));
    }
}
