pub mod dom;
pub mod runner;

pub use dom::{DomBindings, EventSink};
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// The macro generates:
/// - `thread_local!` storage for the GameRunner and the page bindings
/// - `with_runner()` helper function
/// - `push_event()`, the sink DOM listeners feed
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The struct that implements `orrery_engine::Game` and has `new()`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
            static DOM: RefCell<Option<$crate::DomBindings>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Queue an event from a DOM listener. Dropped if the runner is missing or busy.
        fn push_event(event: InputEvent) {
            RUNNER.with(|cell| match cell.try_borrow_mut() {
                Ok(mut borrow) => {
                    if let Some(runner) = borrow.as_mut() {
                        runner.push_input(event);
                    }
                }
                Err(_) => log::debug!("{}: runner busy, dropped {:?}", $game_name, event),
            });
        }

        fn apply_overlay() {
            DOM.with(|cell| {
                if let Some(dom) = cell.borrow_mut().as_mut() {
                    with_runner(|r| dom.apply_overlay(r.overlay()));
                }
            });
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            let (container_id, controls) = with_runner(|r| {
                r.init();
                (r.config().container_id.clone(), r.controls())
            });
            let sink: $crate::EventSink = push_event;
            let dom = $crate::DomBindings::attach(&container_id, &controls, sink);
            DOM.with(|cell| {
                *cell.borrow_mut() = Some(dom);
            });
            apply_overlay();

            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
            apply_overlay();
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32, client_x: f32, client_y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y, client_x, client_y }));
        }

        #[wasm_bindgen]
        pub fn game_click(x: f32, y: f32, client_x: f32, client_y: f32) {
            with_runner(|r| r.push_input(InputEvent::Click { x, y, client_x, client_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len())
        }

        /// Copy of the frame buffer, for hosts that do not read wasm memory directly.
        #[wasm_bindgen]
        pub fn get_frame() -> js_sys::Float32Array {
            with_runner(|r| js_sys::Float32Array::from(r.frame_data()))
        }

        #[wasm_bindgen]
        pub fn take_geometry_changes() -> String {
            with_runner(|r| r.take_geometry_changes_json())
        }

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_meshes() -> u32 {
            with_runner(|r| r.max_meshes())
        }

        #[wasm_bindgen]
        pub fn get_max_labels() -> u32 {
            with_runner(|r| r.max_labels())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_points() -> u32 {
            with_runner(|r| r.max_points())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
