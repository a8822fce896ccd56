//! Spin Wheel entry point
//!
//! Wires the wheel to the page in the browser; natively runs one headless spin.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};

    use spin_wheel::audio::{AudioManager, SoundEffect};
    use spin_wheel::renderer::canvas2d::Canvas2d;
    use spin_wheel::renderer::render;
    use spin_wheel::settings::{LocalStorageStore, parse_int};
    use spin_wheel::wheel::{LabelSource, format_lines, parse_lines};
    use spin_wheel::{Animator, ControllerEvent, WheelConfig, WheelController, WheelError};

    /// Everything the frame loop and DOM handlers share
    struct App {
        controller: WheelController<LocalStorageStore>,
        animator: Animator,
        canvas: Canvas2d,
        audio: Rc<AudioManager>,
        /// Set when the settings form should be refreshed on the next frame
        form_dirty: Rc<Cell<bool>>,
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_default()
    }

    fn element<T: JsCast>(id: &str) -> Option<T> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<T>()
            .ok()
    }

    fn input_value(id: &str) -> Option<String> {
        element::<HtmlInputElement>(id).map(|el| el.value())
    }

    fn text_value(id: &str) -> Option<String> {
        element::<HtmlTextAreaElement>(id).map(|el| el.value())
    }

    fn set_input(id: &str, value: &str) {
        if let Some(el) = element::<HtmlInputElement>(id) {
            el.set_value(value);
        }
    }

    fn set_text(id: &str, value: &str) {
        if let Some(el) = element::<HtmlTextAreaElement>(id) {
            el.set_value(value);
        }
    }

    /// Integer field read from its leading digits; `None` when there are none
    fn int_field(id: &str) -> Option<i32> {
        input_value(id).and_then(|v| parse_int(&v))
    }

    fn display_settings(settings: &WheelConfig) {
        set_input("txt-min-speed", &settings.min_speed.to_string());
        set_input("txt-random-speed", &settings.random_speed.to_string());
        set_input("txt-tick-per-sector", &settings.tick_per_sector.to_string());
        set_input("txt-font-size", &settings.font_size.to_string());
        set_text("lst-colors", &format_lines(&settings.colors));
        set_text("lst-players", &format_lines(&settings.players));
        set_text("lst-presents", &format_lines(&settings.presents));
    }

    fn read_settings(current: &WheelConfig) -> WheelConfig {
        WheelConfig {
            min_speed: int_field("txt-min-speed").map_or(current.min_speed, f64::from),
            random_speed: int_field("txt-random-speed").map_or(current.random_speed, f64::from),
            tick_per_sector: int_field("txt-tick-per-sector").unwrap_or(current.tick_per_sector),
            font_size: int_field("txt-font-size").map_or(current.font_size, f64::from),
            colors: text_value("lst-colors").map_or_else(|| current.colors.clone(), |t| parse_lines(&t)),
            players: text_value("lst-players").map_or_else(|| current.players.clone(), |t| parse_lines(&t)),
            presents: text_value("lst-presents")
                .map_or_else(|| current.presents.clone(), |t| parse_lines(&t)),
        }
    }

    fn set_settings_open(open: bool) {
        if let Some(el) = element::<web_sys::Element>("settings") {
            let classes = el.class_list();
            let _ = if open {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
    }

    pub fn run() -> Result<(), WheelError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| WheelError::MissingResource(format!("console logger: {e}")))?;

        log::info!("Spin Wheel starting...");

        let canvas = Canvas2d::from_document()?;
        canvas.resize();

        let store = LocalStorageStore::new()?;
        let seed = js_sys::Date::now() as u64;
        let mut controller = WheelController::new(store, seed);
        log::info!("Wheel initialized with seed: {}", seed);

        // Label typing only emits ValuesChanged, so the form is never
        // rewritten under the cursor
        let form_dirty = Rc::new(Cell::new(true));
        {
            let form_dirty = form_dirty.clone();
            controller.subscribe(move |event| {
                if *event == ControllerEvent::SettingsChanged {
                    form_dirty.set(true);
                }
            });
        }

        let audio = Rc::new(AudioManager::new());
        let mut animator = Animator::new();
        {
            let audio = audio.clone();
            animator.subscribe(move |event| audio.play(SoundEffect::for_event(event)));
        }

        let app = Rc::new(RefCell::new(App {
            controller,
            animator,
            canvas,
            audio,
            form_dirty,
        }));

        setup_buttons(app.clone());
        setup_label_inputs(app.clone());
        setup_source_toggle(app.clone());
        setup_resize(app.clone());

        request_animation_frame(app);

        log::info!("Spin Wheel running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let (width, height) = a.canvas.size();
            let commands = a
                .animator
                .frame(a.controller.wheel_mut(), time, width, height);
            if let Err(e) = render(&commands, &mut a.canvas) {
                log::warn!("Render error: {e}");
            }

            if a.form_dirty.replace(false) {
                display_settings(a.controller.settings());
            }
        }

        request_animation_frame(app);
    }

    fn on_click(id: &str, mut handler: impl FnMut() + 'static) {
        if let Some(btn) = element::<web_sys::Element>(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            on_click("btn-launch-wheel", move || {
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                a.audio.resume();
                a.animator.launch(a.controller.wheel_mut(), now_ms());
                a.audio.play(SoundEffect::Launch);
            });
        }

        on_click("btn-settings", || set_settings_open(true));
        on_click("btn-cancel-settings", || set_settings_open(false));

        on_click("btn-save-settings", move || {
            let mut a = app.borrow_mut();
            let settings = read_settings(a.controller.settings());
            if let Err(e) = a.controller.update_settings(settings) {
                log::warn!("Settings not saved: {e}");
            }
            set_settings_open(false);
        });
    }

    /// Typing into the active label list updates the wheel immediately
    fn setup_label_inputs(app: Rc<RefCell<App>>) {
        for (id, source) in [
            ("lst-players", LabelSource::Players),
            ("lst-presents", LabelSource::Presents),
        ] {
            let Some(el) = element::<web_sys::Element>(id) else { continue };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                if a.controller.source() != source {
                    return;
                }
                let labels = text_value(id).map(|t| parse_lines(&t)).unwrap_or_default();
                if let Err(e) = a.controller.edit_labels(source, labels) {
                    log::warn!("Labels not saved: {e}");
                }
            });
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// First radio selects players, the second presents
    fn setup_source_toggle(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
        let Ok(radios) = document.query_selector_all("input[type=\"radio\"]") else { return };

        for index in 0..radios.length() {
            let Some(radio) = radios.item(index) else { continue };
            let source = if index == 0 {
                LabelSource::Players
            } else {
                LabelSource::Presents
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                let settings = read_settings(a.controller.settings());
                if let Err(e) = a.controller.update_settings(settings) {
                    log::warn!("Settings not saved: {e}");
                }
                a.controller.select_source(source);
            });
            let _ = radio.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow().canvas.resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Spin Wheel failed to start: {e}");
        panic!("{e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spin_wheel::{Animator, MemoryStore, WheelConfig, WheelController, WheelEvent};

    env_logger::init();
    log::info!("Spin Wheel (native) starting...");
    log::info!("Native mode runs one headless spin - serve the wasm build for the real wheel");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut controller = WheelController::new(MemoryStore::new(), seed);
    let settings = WheelConfig {
        players: ["Alice", "Bob", "Carol", "Dave", "Erin"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ..Default::default()
    };
    if let Err(e) = controller.update_settings(settings) {
        log::warn!("Settings not saved: {e}");
    }
    controller.select_source(spin_wheel::LabelSource::Players);

    let mut animator = Animator::new();
    animator.subscribe(|event| {
        if let WheelEvent::TickCrossed { tick_index } = event {
            log::debug!("tick {tick_index}");
        }
    });

    let wheel = controller.wheel_mut();
    let mut now = 0.0;
    animator.frame(wheel, now, 800.0, 600.0);
    animator.launch(wheel, now);
    while wheel.is_spinning() {
        now += 1000.0 / 60.0;
        let commands = animator.frame(wheel, now, 800.0, 600.0);
        log::trace!("{} draw commands", commands.len());
    }

    println!(
        "Stopped after {:.1}s on: {}",
        now / 1000.0,
        wheel.selected_label().unwrap_or("(nothing)")
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
