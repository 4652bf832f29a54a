use guard_core::dashboard::{IncidentStatusCounts, StatusFilter};
use leptos::*;

/// Status summary with a local filter selection reported through `on_select`.
#[component]
pub fn IncidentStatusPanel(
    #[prop(into)] counts: Signal<IncidentStatusCounts>,
    #[prop(into)] on_select: Callback<StatusFilter>,
) -> impl IntoView {
    let selected = create_rw_signal(StatusFilter::All);

    let select = move |filter: StatusFilter| {
        selected.set(filter);
        on_select.call(filter);
    };

    view! {
      <section class="panel">
        <h2>"Incidents by Status"</h2>
        <ul class="status-list">
          {StatusFilter::ALL
              .into_iter()
              .map(|filter| {
                  let class = move || {
                      if selected.get() == filter { "status active" } else { "status" }
                  };
                  view! {
                    <li class=class on:click=move |_| select(filter)>
                      <span>{filter.label()}</span>
                      <b>{move || counts.get().count_for(filter)}</b>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
      </section>
    }
}
