use campusdesk::Action;
use campusdesk::modules::attendance::AttendanceSheet;
use campusdesk_shared::{AttendanceStatus, date};
use leptos::prelude::*;

use crate::components::dashboard::use_dashboard;

/// 点名表上可选的状态
const MARKS: [(AttendanceStatus, &str); 3] = [
    (AttendanceStatus::Present, "btn-success"),
    (AttendanceStatus::Absent, "btn-error"),
    (AttendanceStatus::Late, "btn-warning"),
];

fn status_badge(status: Option<AttendanceStatus>) -> &'static str {
    match status {
        Some(AttendanceStatus::Present) => "badge badge-success",
        Some(AttendanceStatus::Absent) => "badge badge-error",
        Some(AttendanceStatus::Late) => "badge badge-warning",
        Some(_) => "badge badge-info",
        None => "badge badge-ghost",
    }
}

#[component]
pub fn AttendanceView(sheet: AttendanceSheet) -> impl IntoView {
    let state = use_dashboard();

    let on_date = move |ev: leptos::web_sys::Event| {
        match date::parse_query_date(&event_target_value(&ev)) {
            Some(day) => state.dispatch(Action::ShowAttendance(day)),
            None => log::debug!("[Attendance] ignoring incomplete date input"),
        }
    };

    let rows = if sheet.rows.is_empty() {
        view! {
            <tr>
                <td colspan="4" class="text-center py-8 text-base-content/50">"No students found"</td>
            </tr>
        }
        .into_any()
    } else {
        sheet
            .rows
            .into_iter()
            .map(|row| {
                let label = row.status_label();
                let badge = status_badge(row.status);
                let student_id = row.student_id;
                let buttons = MARKS
                    .into_iter()
                    .map(|(status, tone)| {
                        let class = if row.status == Some(status) {
                            format!("btn btn-xs {}", tone)
                        } else {
                            format!("btn btn-xs btn-outline {}", tone)
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| state.dispatch(Action::MarkAttendance { student_id, status })
                            >
                                {status.as_str()}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <tr>
                        <td class="font-mono">{row.roll_number}</td>
                        <td>{row.full_name}</td>
                        <td><span class=badge>{label}</span></td>
                        <td class="flex gap-1">{buttons}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Mark Attendance"</h3>
                    <input
                        type="date"
                        class="input input-bordered"
                        prop:value=date::format_query_date(sheet.date)
                        on:change=on_date
                    />
                </div>
                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Roll No"</th>
                                <th>"Name"</th>
                                <th>"Status"</th>
                                <th>"Mark"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
