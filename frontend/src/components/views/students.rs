use campusdesk::Action;
use campusdesk::modules::ListState;
use campusdesk_shared::Student;
use leptos::prelude::*;

use super::{can_create, delete_button, table_body};
use crate::components::dashboard::use_dashboard;
use crate::components::forms::{StudentForm, TextField};

#[component]
pub fn StudentsView(list: ListState<Student>) -> impl IntoView {
    let state = use_dashboard();
    let form = StudentForm::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(Action::CreateStudent(form.to_request()));
    };

    let rows = table_body(list, 7, "No students found", move |row| {
        let id = row.item.id;
        let student = row.item;
        view! {
            <tr>
                <td>{row.position}</td>
                <td class="font-mono">{student.roll_number}</td>
                <td>{student.full_name}</td>
                <td>{student.email}</td>
                <td>{student.department}</td>
                <td>{student.year_of_study}</td>
                <td>{delete_button(row.can_delete, move || state.dispatch(Action::DeleteStudent(id)))}</td>
            </tr>
        }
    });

    view! {
        <div class="space-y-8">
            {can_create().then(|| view! {
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title">"Add Student"</h3>
                        <div class="grid md:grid-cols-3 gap-4">
                            <TextField id="s_name" label="Full Name" value=form.full_name />
                            <TextField id="s_roll" label="Roll Number" value=form.roll_number />
                            <TextField id="s_email" label="Email" value=form.email kind="email" />
                            <TextField id="s_phone" label="Phone" value=form.phone_number />
                            <TextField id="s_dept" label="Department" value=form.department />
                            <TextField id="s_year" label="Year of Study" value=form.year_of_study />
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">"Add Student"</button>
                        </div>
                    </form>
                </div>
            })}
            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Roll No"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Department"</th>
                            <th>"Year"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
