use campusdesk::Action;
use campusdesk::controller::EnrollmentsPage;
use leptos::prelude::*;

use super::{can_create, delete_button, table_body};
use crate::components::dashboard::use_dashboard;
use crate::components::forms::EnrollmentForm;

#[component]
pub fn EnrollmentsView(page: EnrollmentsPage) -> impl IntoView {
    let state = use_dashboard();
    let form = EnrollmentForm::new();
    let options = page.options.unwrap_or_default();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.to_request() {
            Some(draft) => state.dispatch(Action::CreateEnrollment(draft)),
            None => log::debug!("[Enrollments] student and course must both be selected"),
        }
    };

    let student_options = options
        .students
        .into_iter()
        .map(|s| {
            view! { <option value=s.id.to_string()>{format!("{} ({})", s.full_name, s.roll_number)}</option> }
        })
        .collect_view();
    let course_options = options
        .courses
        .into_iter()
        .map(|c| {
            view! { <option value=c.id.to_string()>{format!("{} - {}", c.course_code, c.course_name)}</option> }
        })
        .collect_view();

    let rows = table_body(page.list, 5, "No enrollments found", move |row| {
        let id = row.item.id;
        let enrollment = row.item;
        view! {
            <tr>
                <td>{row.position}</td>
                <td>{enrollment.student_name.unwrap_or_else(|| enrollment.student_id.to_string())}</td>
                <td>{enrollment.course_name.unwrap_or_else(|| enrollment.course_id.to_string())}</td>
                <td>{enrollment.grade.unwrap_or_else(|| "-".to_string())}</td>
                <td>{delete_button(row.can_delete, move || state.dispatch(Action::DeleteEnrollment(id)))}</td>
            </tr>
        }
    });

    view! {
        <div class="space-y-8">
            {can_create().then(|| view! {
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title">"Enroll Student"</h3>
                        <div class="grid md:grid-cols-2 gap-4">
                            <select
                                class="select select-bordered w-full"
                                required
                                on:change=move |ev| form.student_id.set(event_target_value(&ev))
                            >
                                <option value="">"-- Select Student --"</option>
                                {student_options}
                            </select>
                            <select
                                class="select select-bordered w-full"
                                required
                                on:change=move |ev| form.course_id.set(event_target_value(&ev))
                            >
                                <option value="">"-- Select Course --"</option>
                                {course_options}
                            </select>
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">"Enroll"</button>
                        </div>
                    </form>
                </div>
            })}
            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Student"</th>
                            <th>"Course"</th>
                            <th>"Grade"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
