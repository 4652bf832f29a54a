use crate::bridge;
use crate::components::module_nav::ModuleNav;
use guard_core::modules::Portal;
use guard_core::shell::{logout, HeaderVisibility};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn Header(portal: Portal) -> impl IntoView {
    let visible = create_rw_signal(true);
    let header = Rc::new(HeaderVisibility::new());
    header.subscribe(move |v| visible.set(*v));

    {
        let header = Rc::clone(&header);
        window_event_listener(ev::scroll, move |_| {
            if let Some(y) = bridge::scroll_y() {
                header.on_scroll(y);
            }
        });
    }
    window_event_listener(ev::mousemove, move |ev| {
        header.on_pointer_move(f64::from(ev.client_y()));
    });

    let on_logout = move |_: ev::MouseEvent| {
        if let Err(e) = logout(&bridge::session_store(), &bridge::WindowNavigator) {
            log::error!("logout incomplete: {e}");
        }
    };

    view! {
      <header class=move || if visible.get() { "header" } else { "header hidden" }>
        <span class="brand">"Secure Buddy"</span>
        <ModuleNav portal=portal/>
        <button class="logout" on:click=on_logout>"Log out"</button>
      </header>
    }
}
