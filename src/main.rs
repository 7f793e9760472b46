//! Deep Sea Fishing entry point
//!
//! In the browser this wires the canvas, keyboard, DOM HUD and audio to the
//! game and drives it from requestAnimationFrame plus a one-second interval.
//! Natively it runs the autopilot through every level headlessly.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use deep_sea_fishing::assets::{ImageCache, level_manifest, preload, skin_manifest};
    use deep_sea_fishing::audio::AudioManager;
    use deep_sea_fishing::consts::{HOOK_CAPACITY, TIMER_INTERVAL_MS};
    use deep_sea_fishing::game::Key;
    use deep_sea_fishing::hud::EndSummary;
    use deep_sea_fishing::renderer::{CanvasSurface, draw_frame};
    use deep_sea_fishing::sim::{LevelEnd, Viewport};
    use deep_sea_fishing::tuning::{LEVEL_COUNT, level};
    use deep_sea_fishing::{BoatSkin, Game, GameError, HookSkin, Settings};

    /// Start anyway if some image never reports back
    const PRELOAD_TIMEOUT_MS: i32 = 8000;

    /// Full-screen panels share this class; `hidden` is appended to hide one
    const OVERLAY: &str = "overlay";
    const SKIN_CARD: &str = "skin-card";

    type Shared = Rc<RefCell<App>>;

    struct App {
        game: Game<AudioManager>,
        surface: CanvasSurface,
        images: Rc<RefCell<ImageCache<HtmlImageElement>>>,
        document: Document,
        /// A requestAnimationFrame callback is pending
        frame_armed: bool,
        /// Live countdown interval id
        timer_id: Option<i32>,
        /// Kept alive until the next level replaces it
        timer_closure: Option<Closure<dyn FnMut()>>,
        assets_ready: bool,
    }

    impl App {
        fn render(&mut self, time_ms: f64) {
            let images = self.images.borrow();
            draw_frame(
                &mut self.surface,
                self.game.state(),
                &images,
                self.game.settings(),
                time_ms / 1000.0,
            );
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        /// Write the whole class string so `base` survives toggling
        fn set_visible(&self, id: &str, base: &str, visible: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", &class_string(base, !visible, "hidden"));
            }
        }

        /// Mark the chosen boat and hook cards
        fn update_skin_cards(&self) {
            let settings = self.game.settings();
            for boat in BoatSkin::ALL {
                self.set_selected(&format!("boat-{}", boat.as_str()), boat == settings.boat);
            }
            for hook in HookSkin::ALL {
                self.set_selected(&format!("hook-{}", hook.as_str()), hook == settings.hook);
            }
        }

        fn set_selected(&self, id: &str, selected: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", &class_string(SKIN_CARD, selected, "selected"));
            }
        }

        /// Push score/time/level values into the page
        fn update_hud(&self) {
            let hud = self.game.hud();
            self.set_text("score", &hud.score.to_string());
            self.set_text("time", &hud.time_remaining.to_string());
            self.set_text("current-level", &hud.level.to_string());
            self.set_text("level-name", &hud.level_name);
            self.set_text("multiplier", &hud.multiplier_label());
            self.set_text("on-hook", &format!("{}/{}", hud.on_hook, HOOK_CAPACITY));

            let tally = hud
                .tally
                .iter()
                .map(|row| format!("{} x{}", row.name, row.count))
                .collect::<Vec<_>>()
                .join(" · ");
            self.set_text("fish-tally", &tally);
        }

        fn show_end_screen(&self, summary: &EndSummary) {
            self.set_text("end-headline", &summary.headline);
            self.set_text("final-score", &summary.score.to_string());
            self.set_visible("next-level-btn", "", summary.next_level.is_some());
            self.set_visible("end-screen", OVERLAY, true);
        }

        fn stop_timer(&mut self) {
            if let Some(id) = self.timer_id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }

    fn class_string(base: &str, flag: bool, extra: &str) -> String {
        match (base.is_empty(), flag) {
            (_, false) => base.to_string(),
            (true, true) => extra.to_string(),
            (false, true) => format!("{base} {extra}"),
        }
    }

    fn platform(msg: &str) -> JsValue {
        JsValue::from_str(&GameError::Platform(msg.to_string()).to_string())
    }

    /// Optional `<script id="settings" type="application/json">` block
    fn read_settings(document: &Document) -> Settings {
        let Some(text) = document
            .get_element_by_id("settings")
            .and_then(|el| el.text_content())
        else {
            return Settings::default();
        };
        match Settings::from_json(&text) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Deep Sea Fishing starting...");

        let window = web_sys::window().ok_or_else(|| platform("no window"))?;
        let document = window.document().ok_or_else(|| platform("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| platform("no #canvas element"))?
            .dyn_into()?;

        let settings = read_settings(&document);
        let surface = CanvasSurface::new(canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let size = surface.fit_to_element();
        let viewport = Viewport::new(size.x, size.y);

        let seed = js_sys::Date::now() as u64;
        let audio = AudioManager::new(&settings);
        let game = Game::new(viewport, settings.clone(), audio, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let images = Rc::new(RefCell::new(ImageCache::new()));
        {
            let document = document.clone();
            images.borrow_mut().set_progress_callback(move |done, total| {
                if let Some(el) = document.get_element_by_id("loading-progress") {
                    el.set_text_content(Some(&format!("Loading... {done}/{total}")));
                }
            });
        }

        let app: Shared = Rc::new(RefCell::new(App {
            game,
            surface,
            images: images.clone(),
            document,
            frame_armed: false,
            timer_id: None,
            timer_closure: None,
            assets_ready: false,
        }));

        // Every level's images and every skin up front so nothing waits later
        let mut keys = skin_manifest();
        for id in 1..=LEVEL_COUNT {
            if let Ok(config) = level(id) {
                keys.extend(level_manifest(&config, &settings));
            }
        }
        {
            let app = app.clone();
            preload(images, keys, move || assets_ready(&app));
        }
        {
            let app = app.clone();
            let fallback = Closure::once(move || {
                if !app.borrow().assets_ready {
                    log::warn!("Image preload timed out, starting with placeholders");
                    assets_ready(&app);
                }
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fallback.as_ref().unchecked_ref(),
                PRELOAD_TIMEOUT_MS,
            );
            fallback.forget();
        }

        setup_keyboard(app.clone())?;
        setup_buttons(app.clone());

        // Draw the idle scene behind the start screen
        app.borrow_mut().render(0.0);
        log::info!("Deep Sea Fishing ready");
        Ok(())
    }

    fn assets_ready(app: &Shared) {
        let mut a = app.borrow_mut();
        if a.assets_ready {
            return;
        }
        a.assets_ready = true;
        let (done, total) = a.images.borrow().progress();
        log::info!("Images ready ({}/{})", done, total);
        let failed = a.images.borrow().failed_keys().join(", ");
        if !failed.is_empty() {
            log::warn!("Drawing placeholders for: {}", failed);
        }
        a.set_visible("loading", OVERLAY, false);
        a.set_visible("start-screen", OVERLAY, true);
        a.render(0.0);
    }

    /// Start or restart a level through the game's single entrypoint
    fn begin(app: &Shared, start: impl FnOnce(&mut Game<AudioManager>) -> Result<(), GameError>) {
        {
            let mut a = app.borrow_mut();
            if let Err(e) = start(&mut a.game) {
                log::error!("Could not start level: {}", e);
                return;
            }
            a.set_visible("start-screen", OVERLAY, false);
            a.set_visible("customize-screen", OVERLAY, false);
            a.set_visible("end-screen", OVERLAY, false);
            a.set_visible("hud", "", true);
            a.update_hud();
            a.game.audio().start_music();
        }
        arm_timer(app.clone());
        if !app.borrow().frame_armed {
            request_animation_frame(app.clone());
        }
    }

    fn arm_timer(app: Shared) {
        let Some(window) = web_sys::window() else { return };
        let closure = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || countdown(&app))
        };

        let mut a = app.borrow_mut();
        a.stop_timer();
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TIMER_INTERVAL_MS,
        ) {
            Ok(id) => a.timer_id = Some(id),
            Err(e) => log::error!("Failed to start countdown: {:?}", e),
        }
        a.timer_closure = Some(closure);
    }

    fn countdown(app: &Shared) {
        let step = {
            let mut a = app.borrow_mut();
            let step = a.game.second_elapsed();
            a.update_hud();
            if !step.keep_running {
                // Only clears the interval; the closure is dropped on the next arm
                a.stop_timer();
            }
            step
        };
        if let Some(end) = step.ended {
            level_over(app, &end);
        }
    }

    fn request_animation_frame(app: Shared) {
        let Some(window) = web_sys::window() else { return };
        app.borrow_mut().frame_armed = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Shared, time: f64) {
        let step = {
            let mut a = app.borrow_mut();
            a.frame_armed = false;
            let step = a.game.frame();
            a.render(time);
            a.update_hud();
            step
        };

        if let Some(end) = step.ended {
            app.borrow_mut().stop_timer();
            level_over(&app, &end);
        }
        if step.keep_running {
            request_animation_frame(app);
        }
    }

    fn level_over(app: &Shared, end: &LevelEnd) {
        let a = app.borrow();
        a.show_end_screen(&EndSummary::from(end));
        a.set_visible("hud", "", false);
    }

    fn setup_keyboard(app: Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| platform("no window"))?;

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                a.game.audio().on_user_gesture();

                let name = event.key();
                if name == "i" || name == "I" {
                    let enabled = !a.game.autopilot_enabled();
                    a.game.set_autopilot(enabled);
                    return;
                }
                if name == "m" || name == "M" {
                    let muted = a.game.toggle_muted();
                    a.game.audio_mut().set_muted(muted);
                    log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
                    return;
                }
                if let Some(key) = Key::from_key_name(&name) {
                    if a.game.is_running() {
                        event.prevent_default();
                    }
                    a.game.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    app.borrow_mut().game.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn on_click(document: &Document, id: &str, handler: impl FnMut() + 'static) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button on the page", id);
            return;
        };
        let mut handler = handler;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| handler());
        if let Err(e) = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::warn!("Could not bind #{}: {:?}", id, e);
        }
        closure.forget();
    }

    /// Boat and hook cards carry their asset key in `data-boat` / `data-hook`
    fn setup_skin_cards(app: &Shared, document: &Document) {
        let boat_ids = BoatSkin::ALL.map(|b| format!("boat-{}", b.as_str()));
        let hook_ids = HookSkin::ALL.map(|h| format!("hook-{}", h.as_str()));
        let cards = boat_ids
            .iter()
            .map(|id| (id, "data-boat"))
            .chain(hook_ids.iter().map(|id| (id, "data-hook")));

        for (id, attr) in cards {
            let Some(key) = document
                .get_element_by_id(id)
                .and_then(|el| el.get_attribute(attr))
            else {
                log::warn!("Skin card #{} has no {}", id, attr);
                continue;
            };
            let app = app.clone();
            let is_boat = attr == "data-boat";
            on_click(document, id, move || {
                let mut a = app.borrow_mut();
                let changed = if is_boat {
                    a.game.choose_boat(&key)
                } else {
                    a.game.choose_hook(&key)
                };
                if changed {
                    a.update_skin_cards();
                    a.render(0.0);
                }
            });
        }
    }

    fn setup_buttons(app: Shared) {
        let document = app.borrow().document.clone();

        {
            let app = app.clone();
            on_click(&document, "start-btn", move || {
                let a = app.borrow();
                a.game.audio().on_user_gesture();
                a.update_skin_cards();
                a.set_visible("start-screen", OVERLAY, false);
                a.set_visible("customize-screen", OVERLAY, true);
            });
        }
        setup_skin_cards(&app, &document);
        {
            let app = app.clone();
            on_click(&document, "play-btn", move || {
                begin(&app, |game| game.start_level(1));
            });
        }
        {
            let app = app.clone();
            on_click(&document, "replay-btn", move || {
                begin(&app, |game| game.replay());
            });
        }
        {
            on_click(&document, "next-level-btn", move || {
                begin(&app, |game| match game.advance_level() {
                    Ok(true) => Ok(()),
                    Ok(false) => game.replay(),
                    Err(e) => Err(e),
                });
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use deep_sea_fishing::audio::LogCues;
    use deep_sea_fishing::hud::EndSummary;
    use deep_sea_fishing::sim::Viewport;
    use deep_sea_fishing::{Game, Settings};

    /// Display refreshes per countdown second
    const FRAMES_PER_SECOND: u32 = 60;

    env_logger::init();
    log::info!("Deep Sea Fishing (native) starting...");
    log::info!("Native mode plays the autopilot headlessly - serve the wasm build to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let mut game = match Game::new(Viewport::new(1280.0, 720.0), Settings::default(), LogCues, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    game.set_autopilot(true);

    if let Err(e) = game.start_level(1) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    loop {
        let mut ended = None;
        while ended.is_none() {
            for _ in 0..FRAMES_PER_SECOND {
                if let Some(end) = game.frame().ended {
                    ended = Some(end);
                    break;
                }
            }
            if ended.is_none() {
                ended = game.second_elapsed().ended;
            }
        }

        if let Some(end) = ended.as_ref() {
            let summary = EndSummary::from(end);
            let hud = game.hud();
            println!("{} Score: {}", summary.headline, summary.score);
            for row in &hud.tally {
                println!("  {:<12} x{}", row.name, row.count);
            }
        }

        match game.advance_level() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => {
                log::error!("{}", e);
                break;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
