//! Frame driver
//!
//! One call to [`Animator::frame`] per animation frame: advance the wheel by the
//! time since the previous frame, project it, then check for a tick crossing
//! and for the end of a spin. The loop never ends; a stopped wheel simply
//! stops moving.

use crate::events::{Notifier, SubscriberId};
use crate::renderer::{DrawCommand, project_frame};
use crate::wheel::{TickDetector, Wheel};

/// Events emitted while animating
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// The angle moved onto a new tick since the last frame
    TickCrossed { tick_index: i64 },
    /// A spin came to rest
    Stopped {
        sector: Option<usize>,
        label: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct Animator {
    /// Timestamp of the previous frame (ms)
    last_update: Option<f64>,
    ticks: TickDetector,
    was_spinning: bool,
    events: Notifier<WheelEvent>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&WheelEvent) + 'static) -> SubscriberId {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Launch the wheel and restart the frame clock at `now_ms`
    pub fn launch(&mut self, wheel: &mut Wheel, now_ms: f64) {
        self.last_update = Some(now_ms);
        wheel.launch();
        self.was_spinning = wheel.is_spinning();
        log::info!(
            "Wheel launched ({} sectors, speed {:.0})",
            wheel.values().len(),
            wheel.rotation().initial_speed
        );
    }

    /// Run one frame and return its draw commands
    pub fn frame(
        &mut self,
        wheel: &mut Wheel,
        now_ms: f64,
        width: f64,
        height: f64,
    ) -> Vec<DrawCommand> {
        let elapsed = self
            .last_update
            .map(|last| (now_ms - last).max(0.0))
            .unwrap_or(0.0);
        self.last_update = Some(now_ms);

        wheel.update(elapsed);
        wheel.fit_viewport(width, height);
        let commands = project_frame(wheel, width, height);

        if self.ticks.observe(wheel.angle(), wheel.geometry()) {
            let tick_index = self.ticks.previous().unwrap_or_default();
            self.events.notify(&WheelEvent::TickCrossed { tick_index });
        }

        let spinning = wheel.is_spinning();
        if self.was_spinning && !spinning {
            let sector = wheel.selected_sector();
            let label = wheel.selected_label().map(str::to_string);
            log::info!("Wheel stopped on {:?}", label);
            self.events.notify(&WheelEvent::Stopped { sector, label });
        }
        self.was_spinning = spinning;

        commands
    }
}
