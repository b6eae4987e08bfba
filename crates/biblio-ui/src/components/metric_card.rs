use leptos::prelude::*;

/// Dashboard tile: a title over arbitrary content.
#[component]
pub fn MetricCard(title: String, children: Children) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            {children()}
        </div>
    }
}

/// A single headline number with a caption.
#[component]
pub fn StatValue(value: usize, caption: &'static str) -> impl IntoView {
    view! {
        <div class="stat-block">
            <div class="stat-number">{value}</div>
            <div class="stat-caption">{caption}</div>
        </div>
    }
}
