use std::path::Path;

use console::Style;
use droppy_core::autocrop::BaselineSource;
use droppy_core::frame::Frame;
use droppy_core::AutoCropReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    fallback: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            fallback: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crop_summary(input: &Path, frame: &Frame, report: &AutoCropReport) {
    let s = Styles::new();
    let c = &report.circle;
    let b = &report.bounds;

    println!();
    println!("  {}", s.title.apply_to("Droppy Auto-Crop"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", frame.width(), frame.height()))
    );
    if !report.scale.is_identity() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Search scale"),
            s.value.apply_to(format!("1/{}", report.scale.get()))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Droplet"),
        s.value.apply_to(format!(
            "center ({}, {}), radius {} ({} votes)",
            c.center_x, c.center_y, c.radius, report.candidate.score
        ))
    );

    let source = match report.baseline.source {
        BaselineSource::Global => s.method.apply_to("strongest line".to_string()),
        BaselineSource::Cropped { offset } => {
            s.method.apply_to(format!("strongest line below row {offset}"))
        }
        BaselineSource::CircleFallback => s.fallback.apply_to("droplet lower edge".to_string()),
    };
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Baseline"),
        s.value.apply_to(format!("y = {}", report.baseline.y)),
        source
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bounds"),
        s.value.apply_to(format!("{} ({}x{})", b, b.width(), b.height()))
    );
    println!();
}
