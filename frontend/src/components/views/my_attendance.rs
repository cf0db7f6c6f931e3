use campusdesk::modules::attendance::{MyAttendance, Tone};
use campusdesk_shared::date;
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "stat-value text-success",
        Tone::Neutral => "stat-value text-warning",
        Tone::Poor => "stat-value text-error",
    }
}

#[component]
pub fn MyAttendanceView(data: MyAttendance) -> impl IntoView {
    let (summary, history) = match data {
        MyAttendance::Loaded { summary, history } => (summary, history),
        MyAttendance::SignedOut => {
            return view! { <p class="text-center py-8">"Please log in to view attendance"</p> }
                .into_any();
        }
        MyAttendance::Failed => {
            return view! { <p class="text-center py-8">"Failed to load attendance records"</p> }
                .into_any();
        }
    };

    let rows = if history.is_empty() {
        view! {
            <tr>
                <td colspan="3" class="text-center py-8">"No attendance records found"</td>
            </tr>
        }
        .into_any()
    } else {
        history
            .into_iter()
            .map(|record| {
                view! {
                    <tr>
                        <td>{date::format_day(&record.date)}</td>
                        <td>{record.status.as_str()}</td>
                        <td class="opacity-70">{record.remarks.unwrap_or_default()}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="space-y-8">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Attendance"</div>
                    <div class=tone_class(summary.tone())>{format!("{}%", summary.percent())}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Present"</div>
                    <div class="stat-value">{summary.present}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Absent"</div>
                    <div class="stat-value">{summary.absent}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Late"</div>
                    <div class="stat-value">{summary.late}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Total"</div>
                    <div class="stat-value">{summary.total}</div>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th>"Remarks"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
    .into_any()
}
