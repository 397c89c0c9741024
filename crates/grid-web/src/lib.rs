pub mod runner;

pub use runner::{BrowserClock, WorldRunner};
pub use grid_engine::WorldConfig;

/// Generate all `#[wasm_bindgen]` exports for a scripted world.
///
/// Generates:
/// - `thread_local!` storage for the WorldRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (world_init, world_tick, trigger handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// const MANIFEST: &str = include_str!("../world.json");
///
/// grid_web::export_world!(MANIFEST, "my-world");
/// ```
///
/// # Arguments
///
/// - `$manifest`: An expression evaluating to the world manifest JSON (`&str`)
/// - `$world_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_world {
    ($manifest:expr, $world_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::WorldRunner<$crate::BrowserClock>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::WorldRunner<$crate::BrowserClock>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("World not initialized. Call world_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn world_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::WorldRunner::new(
                $crate::WorldConfig::default(),
                $crate::BrowserClock,
            );
            runner.load_manifest($manifest);
            runner.start();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $world_name);
        }

        #[wasm_bindgen]
        pub fn world_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn world_trigger_enter(trigger: u32, player: u32) {
            with_runner(|r| r.trigger_enter(trigger, player));
        }

        #[wasm_bindgen]
        pub fn world_trigger_exit(trigger: u32, player: u32) {
            with_runner(|r| r.trigger_exit(trigger, player));
        }

        #[wasm_bindgen]
        pub fn world_load_manifest(json: &str) {
            with_runner(|r| {
                r.load_manifest(json);
                r.start();
            });
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_world_events_ptr() -> *const f32 {
            with_runner(|r| r.world_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_world_events_len() -> u32 {
            with_runner(|r| r.world_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
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
