use campusdesk::modules::dashboard::{HomeData, format_rupees};
use leptos::prelude::*;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn stat_card(title: &'static str, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", accent)>{value}</div>
        </div>
    }
}

#[component]
pub fn HomeView(data: HomeData) -> impl IntoView {
    // 统计不可用时卡片保持占位
    let show = |value: Option<String>| value.unwrap_or_else(|| "--".to_string());
    let stats = data.stats.as_ref();

    let chart = data.chart.map(|chart| {
        let total = chart.present + chart.absent;
        let percent = if total == 0 { 0 } else { chart.present * 100 / total };
        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body items-center">
                    <h3 class="card-title">"Today's Attendance"</h3>
                    <div
                        class="radial-progress text-primary"
                        style=format!("--value:{}; --size:8rem;", percent)
                        role="progressbar"
                    >
                        {format!("{}%", percent)}
                    </div>
                    <div class="flex gap-4 text-sm">
                        <span class="badge badge-success">{format!("Present {}", chart.present)}</span>
                        <span class="badge badge-error">{format!("Absent {}", chart.absent)}</span>
                    </div>
                </div>
            </div>
        }
    });

    let calendar = data.calendar;
    let blanks = (0..calendar.leading_blanks)
        .map(|_| view! { <div></div> })
        .collect_view();
    let days = calendar
        .days
        .into_iter()
        .map(|day| {
            let class = if day.is_today {
                "btn btn-sm btn-primary"
            } else if day.has_event {
                "btn btn-sm btn-outline btn-secondary"
            } else {
                "btn btn-sm btn-ghost"
            };
            view! { <div class=class>{day.day}</div> }
        })
        .collect_view();

    view! {
        <div class="space-y-8">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                {stat_card("Students Present", show(stats.map(|s| s.students_present.to_string())), "text-primary")}
                {stat_card("Employees Present", show(stats.map(|s| s.employees_present.to_string())), "text-secondary")}
                {stat_card("Fees Collected", show(stats.map(|s| format_rupees(s.fees_collected))), "text-success")}
                {stat_card("Staff Alerts", show(stats.map(|s| s.staff_alerts.to_string())), "text-error")}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                {chart}
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">{calendar.heading}</h3>
                        <div class="grid grid-cols-7 gap-1 text-center">
                            {WEEKDAYS.into_iter().map(|d| view! { <div class="text-xs font-bold opacity-60">{d}</div> }).collect_view()}
                            {blanks}
                            {days}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
