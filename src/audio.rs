//! Wheel sounds using the Web Audio API
//!
//! Procedurally generated, so no audio files ship with the page. Every
//! failure is swallowed: a missing or suspended audio context never affects
//! the animation.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::animation::WheelEvent;

/// Master gain applied to every effect
const VOLUME: f32 = 0.8;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Indicator passes a tick mark
    Tick,
    /// Wheel launched
    Launch,
    /// Wheel came to rest
    Stop,
}

impl SoundEffect {
    /// Sound for a wheel event
    pub fn for_event(event: &WheelEvent) -> Self {
        match event {
            WheelEvent::TickCrossed { .. } => SoundEffect::Tick,
            WheelEvent::Stopped { .. } => SoundEffect::Stop,
        }
    }
}

/// Audio manager for the wheel
pub struct AudioManager {
    ctx: Option<AudioContext>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Tick => self.play_tick(ctx, VOLUME),
            SoundEffect::Launch => self.play_launch(ctx, VOLUME),
            SoundEffect::Stop => self.play_stop(ctx, VOLUME),
        }
    }

    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Tick - short dry click
    fn play_tick(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 1800.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.025)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.03).ok();
    }

    /// Launch - rising whoosh
    fn play_launch(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(800.0, t + 0.3)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.35).ok();
    }

    /// Stop - two-note chime
    fn play_stop(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [660.0, 880.0].into_iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time() + i as f64 * 0.12;

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.45).ok();
        }
    }
}
