//! Projection of wheel state into draw commands
//!
//! Commands are rebuilt from scratch every frame. Coordinates are canvas
//! style: origin at the wheel center, y pointing down, positive rotation
//! clockwise on screen.

use std::f64::consts::TAU;

use glam::DVec2;

use super::commands::DrawCommand;
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::wheel::Wheel;

/// Draw a whole frame: clear the viewport, center the wheel, draw it
pub fn project_frame(wheel: &Wheel, width: f64, height: f64) -> Vec<DrawCommand> {
    let mut commands = vec![
        DrawCommand::ClearRect {
            origin: DVec2::ZERO,
            size: DVec2::new(width, height),
        },
        DrawCommand::Save,
        DrawCommand::Translate(DVec2::new(width / 2.0, height / 2.0)),
    ];
    commands.extend(project(wheel));
    commands.push(DrawCommand::Restore);
    commands
}

/// Draw the wheel around the origin
pub fn project(wheel: &Wheel) -> Vec<DrawCommand> {
    let geometry = wheel.geometry();
    let ticks = geometry.ticks_per_sector() as usize;
    // background + spin frame + per-sector wedge, ticks and label + hub + arrow
    let mut out = Vec::with_capacity(32 + wheel.values().len() * (16 + ticks * 3));

    out.push(DrawCommand::Font(format!(
        "{}px {}",
        geometry.font_size, FONT_FAMILY
    )));
    out.push(DrawCommand::CenterText);

    background(&mut out, wheel.radius);

    out.push(DrawCommand::Save);
    out.push(DrawCommand::Rotate(wheel.angle() + geometry.start_offset()));
    for (index, label) in wheel.values().iter().enumerate() {
        out.push(DrawCommand::Save);
        out.push(DrawCommand::Rotate(geometry.sector_angle() * index as f64));
        sector(&mut out, wheel, index, label);
        out.push(DrawCommand::Restore);
    }
    hub(&mut out);
    out.push(DrawCommand::Restore);

    arrow(&mut out, wheel.radius);
    out
}

fn shadow() -> DrawCommand {
    DrawCommand::Shadow {
        blur: SHADOW_BLUR,
        color: SHADOW_COLOR.to_string(),
    }
}

fn disc(out: &mut Vec<DrawCommand>, center: DVec2, radius: f64) {
    out.push(DrawCommand::BeginPath);
    out.push(DrawCommand::Arc {
        center,
        radius,
        start: 0.0,
        end: TAU,
    });
}

/// Full disc behind the sectors so the rim casts a shadow
fn background(out: &mut Vec<DrawCommand>, radius: f64) {
    out.push(DrawCommand::Save);
    out.push(shadow());
    disc(out, DVec2::ZERO, radius);
    out.push(DrawCommand::FillStyle(BASE_FILL.to_string()));
    out.push(DrawCommand::Fill);
    out.push(DrawCommand::Restore);
}

/// One wedge in its own frame: it spans [0, sector_angle] from the +x axis
fn sector(out: &mut Vec<DrawCommand>, wheel: &Wheel, index: usize, label: &str) {
    let geometry = wheel.geometry();
    let radius = wheel.radius;
    let span = geometry.sector_angle();

    out.push(DrawCommand::BeginPath);
    out.push(DrawCommand::MoveTo(DVec2::ZERO));
    out.push(DrawCommand::LineTo(DVec2::new(radius, 0.0)));
    out.push(DrawCommand::Arc {
        center: DVec2::ZERO,
        radius,
        start: 0.0,
        end: span,
    });
    out.push(DrawCommand::LineTo(DVec2::ZERO));
    out.push(DrawCommand::FillStyle(geometry.sector_color(index).to_string()));
    out.push(DrawCommand::Fill);
    out.push(DrawCommand::Stroke);

    // one mark on each tick boundary, walking back from the far edge
    let tick_angle = geometry.tick_angle();
    out.push(DrawCommand::FillStyle(TICK_MARK_FILL.to_string()));
    for k in 1..=geometry.ticks_per_sector() {
        let at = polar_to_cartesian(radius - TICK_MARK_INSET, span - k as f64 * tick_angle);
        disc(out, at, TICK_MARK_RADIUS);
        out.push(DrawCommand::Fill);
    }

    if !label.is_empty() {
        out.push(DrawCommand::Rotate(span / 2.0));
        out.push(DrawCommand::FillStyle(LABEL_FILL.to_string()));
        out.push(DrawCommand::FillText {
            text: label.to_string(),
            at: DVec2::new(radius / 2.0, 0.0),
        });
    }
}

fn hub(out: &mut Vec<DrawCommand>) {
    disc(out, DVec2::ZERO, HUB_RADIUS);
    out.push(shadow());
    out.push(DrawCommand::FillStyle(BASE_FILL.to_string()));
    out.push(DrawCommand::Fill);
}

/// Fixed indicator at the top, outside the spin transform
fn arrow(out: &mut Vec<DrawCommand>, radius: f64) {
    out.push(DrawCommand::Save);
    out.push(shadow());
    out.push(DrawCommand::FillStyle(ARROW_FILL.to_string()));
    out.push(DrawCommand::Translate(DVec2::new(0.0, -radius + ARROW_INSET)));
    out.push(DrawCommand::BeginPath);
    out.push(DrawCommand::MoveTo(DVec2::ZERO));
    out.push(DrawCommand::LineTo(DVec2::new(ARROW_HALF_WIDTH, -ARROW_LENGTH)));
    out.push(DrawCommand::LineTo(DVec2::new(-ARROW_HALF_WIDTH, -ARROW_LENGTH)));
    out.push(DrawCommand::LineTo(DVec2::ZERO));
    out.push(DrawCommand::Fill);
    out.push(DrawCommand::Restore);
}
