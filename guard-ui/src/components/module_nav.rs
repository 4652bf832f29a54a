use crate::bridge;
use guard_core::modules::{enabled_modules, module_entries, ModuleEntry, Portal};
use leptos::*;

fn entry_class(entry: &ModuleEntry) -> &'static str {
    match (entry.active, entry.enabled) {
        (true, _) => "module active",
        (false, true) => "module",
        (false, false) => "module disabled",
    }
}

/// Module links for the current user. Disabled entries stay visible but
/// swallow clicks.
#[component]
pub fn ModuleNav(portal: Portal) -> impl IntoView {
    let subscribed = enabled_modules(&bridge::session_store());
    let entries = module_entries(&subscribed, portal, &bridge::current_path());

    view! {
      <nav class="module-nav">
        <ul>
          {entries
              .into_iter()
              .map(|entry| {
                  let class = entry_class(&entry);
                  let enabled = entry.enabled;
                  let href = enabled.then(|| entry.href.clone());
                  view! {
                    <li class=class>
                      <a
                        href=href
                        aria-disabled=(!enabled).to_string()
                        on:click=move |ev| {
                            if !enabled {
                                ev.prevent_default();
                            }
                        }
                      >
                        {entry.name}
                      </a>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
      </nav>
    }
}
