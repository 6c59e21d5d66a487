//! Client-side rendered entry point. Trunk builds it with the `csr` feature (see `index.html`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("cotizen starting");
        leptos::mount::mount_to_body(cotizen::app::App);
    }
}
