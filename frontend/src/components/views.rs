//! 仪表盘内的各个视图
//!
//! [`ViewOutlet`] 按当前的 [`ViewData`] 选择视图组件；数据更新时视图整体重新渲染。

use campusdesk::UiGroup;
use campusdesk::modules::{ListState, Row};
use campusdesk::{ViewData, ViewName};
use leptos::prelude::*;

use super::dashboard::use_dashboard;

mod attendance;
mod courses;
mod employees;
mod enrollments;
mod fees;
mod home;
mod my_attendance;
mod my_courses;
mod profile;
mod students;

#[component]
pub fn ViewOutlet() -> impl IntoView {
    let state = use_dashboard();

    move || {
        let Some(data) = state.data.get() else {
            return spinner().into_any();
        };
        match data {
            ViewData::Home(home) => view! { <home::HomeView data=home /> }.into_any(),
            ViewData::Students(list) => view! { <students::StudentsView list=list /> }.into_any(),
            ViewData::Employees(list) => {
                view! { <employees::EmployeesView list=list /> }.into_any()
            }
            ViewData::Courses(list) => view! { <courses::CoursesView list=list /> }.into_any(),
            ViewData::Attendance(sheet) => {
                view! { <attendance::AttendanceView sheet=sheet /> }.into_any()
            }
            ViewData::Enrollments(page) => {
                view! { <enrollments::EnrollmentsView page=page /> }.into_any()
            }
            ViewData::MyCourses(courses) => {
                view! { <my_courses::MyCoursesView courses=courses /> }.into_any()
            }
            ViewData::MyAttendance(mine) => {
                view! { <my_attendance::MyAttendanceView data=mine /> }.into_any()
            }
            ViewData::Profile(card) => view! { <profile::ProfileView card=card /> }.into_any(),
            ViewData::Fees(fees) => view! { <fees::FeesView fees=fees /> }.into_any(),
            ViewData::Placeholder { title } => placeholder(title).into_any(),
        }
    }
}

fn spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

fn placeholder(title: &'static str) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body items-center text-center py-16">
                <h3 class="card-title text-2xl">{title}</h3>
                <p class="text-base-content/60">{ViewName::ComingSoon.title()}</p>
            </div>
        </div>
    }
}

/// 当前用户是否可以看到新增表单
pub(crate) fn can_create() -> bool {
    use_dashboard()
        .controller
        .get()
        .visibility()
        .is_some_and(|v| v.shows(UiGroup::CreateActions))
}

/// 列表表体：成功时逐行渲染，否则显示一行说明
pub(crate) fn table_body<T, F, V>(list: ListState<T>, columns: usize, empty: &'static str, row: F) -> AnyView
where
    F: Fn(Row<T>) -> V,
    V: IntoView + 'static,
{
    let message = |text: String| {
        view! {
            <tr>
                <td colspan=columns.to_string() class="text-center py-8 text-base-content/50">{text}</td>
            </tr>
        }
        .into_any()
    };

    match list {
        ListState::Ready(rows) => rows.into_iter().map(row).collect_view().into_any(),
        ListState::Empty => message(empty.to_string()),
        ListState::Denied(reason) => message(reason),
        ListState::Failed => message("Could not load data".to_string()),
    }
}

/// 行尾的删除按钮；无权删除时留空
pub(crate) fn delete_button(allowed: bool, on_delete: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    allowed.then(|| {
        view! {
            <button class="btn btn-ghost btn-sm text-error" on:click=move |_| on_delete()>
                "Delete"
            </button>
        }
    })
}
