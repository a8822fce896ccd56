//! Application controller
//!
//! Owns the configuration and its store, the wheel, and the active label
//! source. Configuration is loaded once at construction and persisted on every
//! replacement.

use crate::error::WheelError;
use crate::events::{Notifier, SubscriberId};
use crate::settings::{SettingsStore, WheelConfig};
use crate::wheel::{LabelSource, Wheel};

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// The configuration was replaced and applied to the wheel
    SettingsChanged,
    /// The wheel's labels were replaced
    ValuesChanged { count: usize },
}

pub struct WheelController<S: SettingsStore> {
    store: S,
    settings: WheelConfig,
    wheel: Wheel,
    source: LabelSource,
    events: Notifier<ControllerEvent>,
}

impl<S: SettingsStore> WheelController<S> {
    /// Load settings from `store` (or defaults) and build the wheel
    pub fn new(store: S, seed: u64) -> Self {
        let settings = WheelConfig::load(&store);
        let mut wheel = Wheel::new(seed);
        wheel.apply_config(&settings);

        let mut controller = Self {
            store,
            settings,
            wheel,
            source: LabelSource::default(),
            events: Notifier::new(),
        };
        controller.apply_source();
        controller
    }

    pub fn settings(&self) -> &WheelConfig {
        &self.settings
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut Wheel {
        &mut self.wheel
    }

    pub fn source(&self) -> LabelSource {
        self.source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ControllerEvent) + 'static) -> SubscriberId {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Replace the configuration wholesale, persist it and apply it.
    ///
    /// The new configuration takes effect even when persisting fails; the
    /// store error is still returned.
    pub fn update_settings(&mut self, settings: WheelConfig) -> Result<(), WheelError> {
        self.settings = settings.sanitized();
        log::debug!("Applying settings: {:?}", self.settings);

        let saved = self.settings.save(&mut self.store);
        self.wheel.apply_config(&self.settings);
        self.events.notify(&ControllerEvent::SettingsChanged);
        saved
    }

    /// Set the wheel's labels directly
    pub fn set_values(&mut self, values: &[String]) {
        self.wheel.set_values(values);
        self.events.notify(&ControllerEvent::ValuesChanged {
            count: values.len(),
        });
    }

    /// Switch the active label list and load it onto the wheel
    pub fn select_source(&mut self, source: LabelSource) {
        self.source = source;
        log::info!("Label source: {}", source.as_str());
        self.apply_source();
    }

    /// Replace one label list and persist the configuration. If it is the
    /// active list the wheel picks it up immediately.
    ///
    /// Only `ValuesChanged` is emitted (and only for the active list): the
    /// rest of the configuration is untouched, so views holding unsaved form
    /// input must not be refreshed while labels are being typed.
    pub fn edit_labels(
        &mut self,
        source: LabelSource,
        labels: Vec<String>,
    ) -> Result<(), WheelError> {
        *source.labels_mut(&mut self.settings) = labels;
        let saved = self.settings.save(&mut self.store);
        if source == self.source {
            self.apply_source();
        }
        saved
    }

    fn apply_source(&mut self) {
        let labels = self.source.labels(&self.settings).to_vec();
        self.set_values(&labels);
    }
}
