use lintel_landing::config::PageVariant;
use lintel_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    gloo_console::log!(format!("lintel landing, variant {:?}", PageVariant::active()));
    yew::Renderer::<App>::new().render();
}
