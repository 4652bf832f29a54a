use crate::bridge;
use crate::components::analytics_panel::AnalyticsPanel;
use crate::components::header::Header;
use crate::components::incident_status::IncidentStatusPanel;
use guard_core::dashboard::{AnalyticsCounts, IncidentStatusCounts, StatusFilter};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let portal = bridge::current_portal();
    let analytics = create_rw_signal(AnalyticsCounts::default());
    let statuses = create_rw_signal(IncidentStatusCounts::default());
    let status_filter = create_rw_signal(StatusFilter::All);
    let error = create_rw_signal(None::<String>);

    let load_counts = move || {
        spawn_local(async move {
            let an = bridge::fetch_analytics_counts().await;
            let st = bridge::fetch_incident_status_counts().await;
            let mut errs = Vec::new();

            match an {
                Ok(v) => analytics.set(v),
                Err(e) => errs.push(format!("analytics: {e}")),
            }
            match st {
                Ok(v) => statuses.set(v),
                Err(e) => errs.push(format!("incident status: {e}")),
            }

            if errs.is_empty() {
                error.set(None);
            } else {
                log::error!("dashboard load failed: {}", errs.join("; "));
                error.set(Some(format!("Failed to load dashboard\n{}", errs.join("\n"))));
            }
        });
    };

    load_counts();

    view! {
      <div class="shell">
        <Header portal=portal/>
        <main class="layout">
          <div class="row">
            <button on:click=move |_| load_counts()>"Refresh"</button>
          </div>
          <AnalyticsPanel counts=analytics/>
          <IncidentStatusPanel
            counts=statuses
            on_select=move |filter: StatusFilter| status_filter.set(filter)
          />
          <p class="meta">{move || format!("Showing: {}", status_filter.get().label())}</p>

          <Show
            when=move || error.get().is_some()
            fallback=|| ()
          >
            <pre class="error">{move || error.get().unwrap_or_default()}</pre>
          </Show>
        </main>
      </div>
    }
}
