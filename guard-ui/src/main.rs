mod app;
mod bridge;

pub mod components {
    pub mod analytics_panel;
    pub mod header;
    pub mod incident_status;
    pub mod module_nav;
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
