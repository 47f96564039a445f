#[cfg(feature = "yew")]
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Starting activity signup client");

    yew::Renderer::<activity_signup::App>::new().render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the client.");
}
