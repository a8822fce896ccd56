//! Draw commands and the canvas capability they are replayed onto

use glam::DVec2;

use crate::error::WheelError;

/// 2D drawing surface with canvas-style path, style and transform state
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), WheelError>;
    fn rotate(&mut self, angle: f64) -> Result<(), WheelError>;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64)
    -> Result<(), WheelError>;
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_shadow(&mut self, blur: f64, color: &str);

    fn set_font(&mut self, font: &str);
    /// Anchor text at its horizontal and vertical center
    fn center_text(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), WheelError>;
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { origin: DVec2, size: DVec2 },
    Save,
    Restore,
    Translate(DVec2),
    Rotate(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc { center: DVec2, radius: f64, start: f64, end: f64 },
    Fill,
    Stroke,
    FillStyle(String),
    StrokeStyle(String),
    Shadow { blur: f64, color: String },
    Font(String),
    CenterText,
    FillText { text: String, at: DVec2 },
}

impl DrawCommand {
    /// Issue this command on a canvas
    pub fn apply(&self, canvas: &mut impl Canvas) -> Result<(), WheelError> {
        match self {
            DrawCommand::ClearRect { origin, size } => {
                canvas.clear_rect(origin.x, origin.y, size.x, size.y)
            }
            DrawCommand::Save => canvas.save(),
            DrawCommand::Restore => canvas.restore(),
            DrawCommand::Translate(by) => canvas.translate(by.x, by.y)?,
            DrawCommand::Rotate(angle) => canvas.rotate(*angle)?,
            DrawCommand::BeginPath => canvas.begin_path(),
            DrawCommand::MoveTo(p) => canvas.move_to(p.x, p.y),
            DrawCommand::LineTo(p) => canvas.line_to(p.x, p.y),
            DrawCommand::Arc {
                center,
                radius,
                start,
                end,
            } => canvas.arc(center.x, center.y, *radius, *start, *end)?,
            DrawCommand::Fill => canvas.fill(),
            DrawCommand::Stroke => canvas.stroke(),
            DrawCommand::FillStyle(color) => canvas.set_fill_style(color),
            DrawCommand::StrokeStyle(color) => canvas.set_stroke_style(color),
            DrawCommand::Shadow { blur, color } => canvas.set_shadow(*blur, color),
            DrawCommand::Font(font) => canvas.set_font(font),
            DrawCommand::CenterText => canvas.center_text(),
            DrawCommand::FillText { text, at } => canvas.fill_text(text, at.x, at.y)?,
        }
        Ok(())
    }
}

/// Replay a command list, stopping at the first rejected call.
///
/// Saves still open when a call fails are restored before the error is
/// returned, so the canvas transform never leaks into the next frame.
pub fn render(commands: &[DrawCommand], canvas: &mut impl Canvas) -> Result<(), WheelError> {
    let mut open_saves = 0usize;
    for command in commands {
        if let Err(e) = command.apply(canvas) {
            for _ in 0..open_saves {
                canvas.restore();
            }
            return Err(e);
        }
        match command {
            DrawCommand::Save => open_saves += 1,
            DrawCommand::Restore => open_saves = open_saves.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
