use campusdesk::modules::ListState;
use campusdesk_shared::{Role, UserProfile};
use campusdesk::{Action, UiGroup};
use leptos::prelude::*;

use super::{delete_button, table_body};
use crate::components::dashboard::use_dashboard;
use crate::components::forms::{AccountFields, AccountForm, EMPLOYEE_ROLES};

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-primary",
        _ => "badge badge-secondary",
    }
}

#[component]
pub fn EmployeesView(list: ListState<UserProfile>) -> impl IntoView {
    let state = use_dashboard();
    let form = AccountForm::new(Role::Faculty);
    let is_admin = state
        .controller
        .get()
        .visibility()
        .is_some_and(|v| v.shows(UiGroup::AdminOnly));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(Action::CreateEmployee(form.to_request()));
    };

    let rows = table_body(list, 6, "No employees found", move |row| {
        let id = row.item.id;
        let user = row.item;
        view! {
            <tr>
                <td>{row.position}</td>
                <td>{user.full_name}</td>
                <td>{user.username}</td>
                <td>{user.email}</td>
                <td><span class=role_badge(user.role)>{user.role.as_str()}</span></td>
                <td>{delete_button(row.can_delete, move || state.dispatch(Action::DeleteEmployee(id)))}</td>
            </tr>
        }
    });

    view! {
        <div class="space-y-8">
            {is_admin.then(|| view! {
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title">"Add Employee"</h3>
                        <div class="grid md:grid-cols-3 gap-4">
                            <AccountFields form=form roles=&EMPLOYEE_ROLES />
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">"Add Employee"</button>
                        </div>
                    </form>
                </div>
            })}
            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
