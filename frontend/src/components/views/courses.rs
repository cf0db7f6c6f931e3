use campusdesk::Action;
use campusdesk::modules::ListState;
use campusdesk_shared::Course;
use leptos::prelude::*;

use super::{can_create, delete_button, table_body};
use crate::components::dashboard::use_dashboard;
use crate::components::forms::{CourseForm, TextField};

#[component]
pub fn CoursesView(list: ListState<Course>) -> impl IntoView {
    let state = use_dashboard();
    let form = CourseForm::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(Action::CreateCourse(form.to_request()));
    };

    let rows = table_body(list, 6, "No courses found", move |row| {
        let id = row.item.id;
        let course = row.item;
        view! {
            <tr>
                <td class="font-mono">{course.course_code}</td>
                <td>{course.course_name}</td>
                <td class="opacity-70">{course.description.unwrap_or_default()}</td>
                <td>{course.credits}</td>
                <td>{course.department}</td>
                <td>{delete_button(row.can_delete, move || state.dispatch(Action::DeleteCourse(id)))}</td>
            </tr>
        }
    });

    view! {
        <div class="space-y-8">
            {can_create().then(|| view! {
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title">"Add Course"</h3>
                        <div class="grid md:grid-cols-3 gap-4">
                            <TextField id="c_code" label="Course Code" value=form.course_code />
                            <TextField id="c_name" label="Course Name" value=form.course_name />
                            <TextField id="c_dept" label="Department" value=form.department />
                            <TextField id="c_credits" label="Credits" value=form.credits kind="number" />
                            <TextField id="c_desc" label="Description" value=form.description required=false />
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">"Add Course"</button>
                        </div>
                    </form>
                </div>
            })}
            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Credits"</th>
                            <th>"Department"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
