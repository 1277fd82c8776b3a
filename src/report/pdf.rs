//! PDF bench sheet
//!
//! One Letter page with the parameters, both volume tables, the grand total
//! and a bar chart of the batch totals.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::image_crate::{DynamicImage, ImageFormat, RgbImage};
use printpdf::*;

use crate::build_info::BuildInfo;
use crate::mix::{Component, MixPlan, Recipe};

use super::{ReportError, ReportResult};

// ============================================================================
// Color Constants (RGB 0-255)
// ============================================================================

const COLOR_TITLE: (u8, u8, u8) = (0, 84, 147);
const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);
const COLOR_DILUENT: (u8, u8, u8) = (0, 112, 192);
const COLOR_MIX: (u8, u8, u8) = (192, 0, 0);
const COLOR_PRIMER: (u8, u8, u8) = (0, 176, 80);

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN_LEFT: f32 = 15.0;
const VALUE_COLUMN: f32 = 80.0;

fn component_color(component: Component) -> (u8, u8, u8) {
    match component {
        Component::Diluent => COLOR_DILUENT,
        Component::MasterMix => COLOR_MIX,
        Component::PrimerForward | Component::PrimerReverse => COLOR_PRIMER,
    }
}

// ============================================================================
// Chart Generation (plotters)
// ============================================================================

fn chart_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Chart(e.to_string())
}

/// Bar chart of the batch totals as PNG bytes
pub fn generate_totals_chart(totals: &Recipe, width: u32, height: u32) -> ReportResult<Vec<u8>> {
    use plotters::prelude::*;

    let y_max = totals
        .iter()
        .map(|v| v.volume_ul)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.2;

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(20)
            .y_label_area_size(50)
            .build_cartesian_2d(0..(totals.volumes.len() as i32), 0.0..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_desc("uL")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(totals.iter().enumerate().map(|(i, v)| {
                let (r, g, b) = component_color(v.component);
                let mut bar = Rectangle::new(
                    [(i as i32, 0.0), (i as i32 + 1, v.volume_ul)],
                    RGBColor(r, g, b).mix(0.8).filled(),
                );
                bar.set_margin(0, 0, 12, 12);
                bar
            }))
            .map_err(chart_err)?;

        chart
            .draw_series(totals.iter().enumerate().map(|(i, v)| {
                Text::new(
                    format!("{} {:.1}", v.component.name(totals.mix), v.volume_ul),
                    (i as i32, v.volume_ul + y_max * 0.06),
                    ("sans-serif", 14).into_font(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ReportError::Chart("Failed to create image from buffer".to_string()))?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(chart_err)?;

    Ok(png_bytes)
}

// ============================================================================
// PDF Generation Helper Functions
// ============================================================================

fn rgb_to_printpdf(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: Mm,
    y: Mm,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.use_text(text, size, x, y, font);
}

fn add_line(layer: &PdfLayerReference, x1: Mm, x2: Mm, y: Mm, color: (u8, u8, u8), width: f32) {
    layer.set_outline_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![(Point::new(x1, y), false), (Point::new(x2, y), false)],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Builtin PDF fonts have no µ glyph
fn pdf_label(component: Component, recipe: &Recipe) -> String {
    format!("{} (uL)", component.name(recipe.mix))
}

/// Draw a two-column volume table, returning the y below it
fn add_volume_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    recipe: &Recipe,
    mut y: f32,
) -> f32 {
    for v in recipe.iter() {
        add_text(layer, font, &pdf_label(v.component, recipe), Mm(MARGIN_LEFT + 5.0), Mm(y), 10.0, COLOR_BLACK);
        add_text(layer, font, &format!("{:.1}", v.volume_ul), Mm(VALUE_COLUMN), Mm(y), 10.0, component_color(v.component));
        y -= 5.5;
    }
    y
}

// ============================================================================
// Bench Sheet Generation
// ============================================================================

/// Write the bench sheet for `plan` to `output_path`, creating parent directories
pub fn write_pdf(plan: &MixPlan, output_path: &Path) -> ReportResult<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        "PCR Master Mix",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let layer = doc.get_page(page1).get_layer(layer1);
    let mut y = PAGE_HEIGHT - 20.0;

    add_text(&layer, &font_bold, "PCR Master Mix", Mm(MARGIN_LEFT), Mm(y), 18.0, COLOR_TITLE);
    y -= 9.0;

    let now = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    add_text(
        &layer,
        &font,
        &format!(
            "Samples: {} | Excess: {:.1}% | Mix: {}",
            plan.sample_count, plan.excess_percent, plan.mix
        ),
        Mm(MARGIN_LEFT),
        Mm(y),
        11.0,
        COLOR_BLACK,
    );
    add_text(&layer, &font, &format!("Generated: {}", now), Mm(140.0), Mm(y), 11.0, COLOR_BLACK);
    y -= 6.0;
    add_text(
        &layer,
        &font,
        &format!("Per-sample total volume: {:.1} uL", plan.per_sample_total_ul),
        Mm(MARGIN_LEFT),
        Mm(y),
        11.0,
        COLOR_BLACK,
    );
    y -= 5.0;
    add_line(&layer, Mm(MARGIN_LEFT), Mm(200.0), Mm(y), COLOR_GRAY, 0.5);
    y -= 8.0;

    add_text(&layer, &font_bold, "Per-sample recipe", Mm(MARGIN_LEFT), Mm(y), 12.0, COLOR_BLACK);
    y -= 7.0;
    y = add_volume_table(&layer, &font, &plan.per_sample, y);
    y -= 4.0;

    add_text(&layer, &font_bold, "Totals to prepare (rounded to 0.5 uL)", Mm(MARGIN_LEFT), Mm(y), 12.0, COLOR_BLACK);
    y -= 7.0;
    y = add_volume_table(&layer, &font, &plan.totals, y);
    add_line(&layer, Mm(MARGIN_LEFT + 5.0), Mm(VALUE_COLUMN + 20.0), Mm(y + 3.0), COLOR_GRAY, 0.5);
    y -= 2.0;
    add_text(&layer, &font_bold, "TOTAL master mix", Mm(MARGIN_LEFT + 5.0), Mm(y), 11.0, COLOR_BLACK);
    add_text(&layer, &font_bold, &format!("{:.1} uL", plan.grand_total_ul), Mm(VALUE_COLUMN), Mm(y), 11.0, COLOR_BLACK);
    y -= 12.0;

    // 900x360 pixels at 120 DPI is about 190mm x 76mm
    match generate_totals_chart(&plan.totals, 900, 360) {
        Ok(png_bytes) => {
            let dynamic_image = printpdf::image_crate::load_from_memory(&png_bytes)
                .map_err(|e| ReportError::Chart(e.to_string()))?;
            let pdf_image = Image::from_dynamic_image(&dynamic_image);

            let transform = ImageTransform {
                translate_x: Some(Mm(MARGIN_LEFT)),
                translate_y: Some(Mm(y - 76.0)),
                dpi: Some(120.0),
                ..Default::default()
            };
            pdf_image.add_to_layer(layer.clone(), transform);
        }
        Err(e) => {
            tracing::warn!("Skipping totals chart: {}", e);
            add_text(&layer, &font, &format!("Chart generation error: {}", e), Mm(MARGIN_LEFT), Mm(y), 9.0, COLOR_GRAY);
        }
    }

    add_text(&layer, &font, &BuildInfo::current().short(), Mm(MARGIN_LEFT), Mm(12.0), 8.0, COLOR_GRAY);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(|e| ReportError::Pdf(e.to_string()))?;

    tracing::info!("Wrote PDF bench sheet to {}", output_path.display());
    Ok(())
}
