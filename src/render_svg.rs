use crate::gene_record::GeneRecord;
use crate::palette::ColorAssignment;
use crate::render_settings::RenderSettings;
use anyhow::Result;
use std::path::Path;
use svg::node::element::{Line, Rectangle, Text};
use svg::Document;

const BASELINE_STROKE: f32 = 4.0;
const EXON_HEIGHT: f32 = 20.0;
const MOTIF_HEIGHT: f32 = 40.0;
const MOTIF_OPACITY: f32 = 0.7;
const TITLE_RISE: f32 = 55.0;
const TITLE_FONT_SIZE: i32 = 22;
const LABEL_FONT_SIZE: i32 = 18;
const LEGEND_SWATCH_WIDTH: f32 = 20.0;
const LANE_SHIFT_STEP: f32 = 10.0;

fn lane_allocate(lanes: &mut Vec<f32>, start: f32, end: f32, padding: f32) -> usize {
    for (idx, lane_end) in lanes.iter_mut().enumerate() {
        if start >= *lane_end + padding {
            *lane_end = end;
            return idx;
        }
    }
    lanes.push(end);
    lanes.len() - 1
}

/// Vertical offset for a stagger lane: 0, -10, +10, -20, +20, ...
/// Overlapping marks fan out around the baseline.
fn lane_shift(lane: usize) -> f32 {
    let step = lane.div_ceil(2) as f32 * LANE_SHIFT_STEP;
    if lane % 2 == 1 {
        -step
    } else {
        step
    }
}

fn label_text(content: impl Into<String>, x: f32, y: f32, size: i32) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", "sans-serif")
        .set("font-size", size)
        .set("fill", "#000000")
}

/// Renders the annotation set as a schematic diagram: one proportional
/// (1 px per base) baseline per record, exons as thick black bars, motif
/// occurrences as translucent colored marks, and a legend in motif-list
/// order. The output is fully deterministic for a given input.
pub fn export_annotation_svg(
    records: &[GeneRecord],
    colors: &ColorAssignment,
    settings: &RenderSettings,
) -> String {
    let longest = records.iter().map(|r| r.len()).max().unwrap_or(0) as f32;
    let width = longest + 2.0 * settings.side_margin;
    let height = records.len() as f32 * settings.record_spacing + settings.legend_band;
    let left = settings.side_margin;

    let mut doc = Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "#ffffff"),
        );

    let mut baseline = settings.record_spacing / 2.0 + 50.0;
    for record in records {
        doc = doc.add(label_text(
            record.display_title(),
            left,
            baseline - TITLE_RISE,
            TITLE_FONT_SIZE,
        ));
        doc = doc.add(
            Line::new()
                .set("x1", left)
                .set("y1", baseline)
                .set("x2", left + record.len() as f32)
                .set("y2", baseline)
                .set("stroke", "#000000")
                .set("stroke-width", BASELINE_STROKE),
        );

        if settings.show_exons {
            for exon in record.exon_regions() {
                doc = doc.add(
                    Rectangle::new()
                        .set("x", left + exon.start as f32)
                        .set("y", baseline - EXON_HEIGHT / 2.0)
                        .set("width", exon.length as f32)
                        .set("height", EXON_HEIGHT)
                        .set("fill", "#000000"),
                );
            }
        }

        if settings.show_motifs {
            let occurrences = record.occurrences();
            let mut order: Vec<usize> = (0..occurrences.len()).collect();
            order.sort_by_key(|&idx| (occurrences[idx].start, occurrences[idx].length));
            let mut lane_ends: Vec<f32> = vec![];
            let mut lane_by_idx = vec![0usize; occurrences.len()];
            for idx in order {
                let occurrence = &occurrences[idx];
                let x1 = left + occurrence.start as f32;
                let x2 = x1 + occurrence.length as f32;
                lane_by_idx[idx] = lane_allocate(&mut lane_ends, x1, x2, 2.0);
            }
            for (idx, occurrence) in occurrences.iter().enumerate() {
                let Some(color) = colors.color_of(&occurrence.motif) else {
                    continue;
                };
                let y = baseline - MOTIF_HEIGHT / 2.0 + lane_shift(lane_by_idx[idx]);
                doc = doc.add(
                    Rectangle::new()
                        .set("x", left + occurrence.start as f32)
                        .set("y", y)
                        .set("width", occurrence.length as f32)
                        .set("height", MOTIF_HEIGHT)
                        .set("fill", color)
                        .set("fill-opacity", MOTIF_OPACITY),
                );
            }
        }

        baseline += settings.record_spacing;
    }

    if settings.show_legend {
        let legend_y = baseline;
        doc = doc.add(label_text(
            "Legend",
            left,
            legend_y - 50.0,
            TITLE_FONT_SIZE,
        ));

        let section = width / (colors.len() + 2) as f32;
        let mut legend_x = left;

        doc = doc.add(
            Rectangle::new()
                .set("x", legend_x)
                .set("y", legend_y - MOTIF_HEIGHT / 2.0)
                .set("width", LEGEND_SWATCH_WIDTH)
                .set("height", MOTIF_HEIGHT)
                .set("fill", "#000000"),
        );
        doc = doc.add(label_text(
            "Exon",
            legend_x + LEGEND_SWATCH_WIDTH + 5.0,
            legend_y + 5.0,
            LABEL_FONT_SIZE,
        ));
        legend_x += section;

        for (motif, color) in colors.iter() {
            doc = doc.add(
                Rectangle::new()
                    .set("x", legend_x)
                    .set("y", legend_y - MOTIF_HEIGHT / 2.0)
                    .set("width", LEGEND_SWATCH_WIDTH)
                    .set("height", MOTIF_HEIGHT)
                    .set("fill", color)
                    .set("fill-opacity", MOTIF_OPACITY),
            );
            doc = doc.add(label_text(
                motif,
                legend_x + LEGEND_SWATCH_WIDTH + 5.0,
                legend_y + 5.0,
                LABEL_FONT_SIZE,
            ));
            legend_x += section;
        }
    }

    doc.to_string()
}

pub fn write_annotation_svg(
    path: impl AsRef<Path>,
    records: &[GeneRecord],
    colors: &ColorAssignment,
    settings: &RenderSettings,
) -> Result<()> {
    let rendered = export_annotation_svg(records, colors, settings);
    std::fs::write(path, rendered)?;
    Ok(())
}
