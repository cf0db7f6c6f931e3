//! 表单状态管理模块
//!
//! 将零散的 signal 整合为表单结构体，负责：
//! - 数据的持有
//! - 数据到请求对象的转换
//!
//! 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
//! 提交成功后视图会以新数据重新渲染，表单随之回到初始状态。

use campusdesk_shared::{NewCourse, NewEnrollment, NewStudent, RegisterRequest, Role};
use leptos::prelude::*;

/// 员工表单可选的角色
pub const EMPLOYEE_ROLES: [Role; 2] = [Role::Faculty, Role::Admin];

fn parse_role(value: &str) -> Option<Role> {
    Role::ALL.into_iter().find(|r| r.as_str() == value)
}

// =========================================================
// 账号（注册 / 新增员工）
// =========================================================

#[derive(Clone, Copy)]
pub struct AccountForm {
    pub full_name: RwSignal<String>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl AccountForm {
    pub fn new(role: Role) -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            role: RwSignal::new(role),
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name.get(),
            username: self.username.get(),
            email: self.email.get(),
            password: self.password.get(),
            role: self.role.get(),
        }
    }
}

/// 文本输入框
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn AccountFields(form: AccountForm, roles: &'static [Role]) -> impl IntoView {
    view! {
        <TextField id="full_name" label="Full Name" value=form.full_name />
        <TextField id="username" label="Username" value=form.username />
        <TextField id="email" label="Email" value=form.email kind="email" />
        <TextField id="password" label="Password" value=form.password kind="password" />
        <div class="form-control">
            <label for="role" class="label">
                <span class="label-text">"Role"</span>
            </label>
            <select
                id="role"
                class="select select-bordered w-full"
                on:change=move |ev| {
                    if let Some(role) = parse_role(&event_target_value(&ev)) {
                        form.role.set(role);
                    }
                }
                prop:value=move || form.role.get().as_str()
            >
                {roles
                    .iter()
                    .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

// =========================================================
// 学生
// =========================================================

#[derive(Clone, Copy)]
pub struct StudentForm {
    pub full_name: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub department: RwSignal<String>,
    pub year_of_study: RwSignal<String>,
}

impl StudentForm {
    pub fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            roll_number: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            department: RwSignal::new(String::new()),
            year_of_study: RwSignal::new(String::new()),
        }
    }

    pub fn to_request(&self) -> NewStudent {
        NewStudent {
            full_name: self.full_name.get(),
            roll_number: self.roll_number.get(),
            email: self.email.get(),
            phone_number: self.phone_number.get(),
            department: self.department.get(),
            year_of_study: self.year_of_study.get(),
        }
    }
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 课程
// =========================================================

#[derive(Clone, Copy)]
pub struct CourseForm {
    pub course_code: RwSignal<String>,
    pub course_name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub credits: RwSignal<String>,
    pub department: RwSignal<String>,
}

impl CourseForm {
    pub fn new() -> Self {
        let defaults = NewCourse::default();
        Self {
            course_code: RwSignal::new(String::new()),
            course_name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            credits: RwSignal::new(defaults.credits.to_string()),
            department: RwSignal::new(String::new()),
        }
    }

    /// 学分无法解析时沿用默认值
    pub fn to_request(&self) -> NewCourse {
        let defaults = NewCourse::default();
        NewCourse {
            course_code: self.course_code.get(),
            course_name: self.course_name.get(),
            description: Some(self.description.get()),
            credits: self.credits.get().trim().parse().unwrap_or(defaults.credits),
            department: self.department.get(),
        }
    }
}

impl Default for CourseForm {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 选课
// =========================================================

#[derive(Clone, Copy)]
pub struct EnrollmentForm {
    pub student_id: RwSignal<String>,
    pub course_id: RwSignal<String>,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self {
            student_id: RwSignal::new(String::new()),
            course_id: RwSignal::new(String::new()),
        }
    }

    /// 两个下拉框都选中后才能提交
    pub fn to_request(&self) -> Option<NewEnrollment> {
        Some(NewEnrollment {
            student_id: self.student_id.get().parse().ok()?,
            course_id: self.course_id.get().parse().ok()?,
        })
    }
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self::new()
    }
}
