use crate::engine::core::app_setup::create_app;

mod engine;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&"Starting model viewport".into());
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
