use guard_core::dashboard::AnalyticsCounts;
use leptos::*;

#[component]
pub fn AnalyticsPanel(#[prop(into)] counts: Signal<AnalyticsCounts>) -> impl IntoView {
    view! {
      <section class="panel">
        <h2>"Analytics"</h2>
        <div class="cards">
          {move || {
              counts
                  .get()
                  .cards()
                  .into_iter()
                  .map(|(label, value)| view! {
                    <div class="card">
                      <span class="meta">{label}</span>
                      <b>{value}</b>
                    </div>
                  })
                  .collect_view()
          }}
        </div>
      </section>
    }
}
