//! User Dashboard Component
//!
//! Mirrors the last successful registration.

use leptos::prelude::*;

use crate::models::DashboardSnapshot;

#[component]
pub fn UserDashboard(snapshot: ReadSignal<Option<DashboardSnapshot>>) -> impl IntoView {
    view! {
        <div id="user-dashboard" class="user-dashboard">
            {move || {
                snapshot.get().map(|snapshot| {
                    let items: Vec<(&'static str, String)> = snapshot
                        .items()
                        .into_iter()
                        .map(|(heading, value)| (heading, value.to_string()))
                        .collect();
                    view! {
                        <div class="dashboard-content">
                            {items
                                .into_iter()
                                .map(|(heading, value)| {
                                    view! {
                                        <div class="dashboard-item">
                                            <h4>{heading}</h4>
                                            <p>{value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
