//! 仪表盘页面
//!
//! 侧边栏、顶栏和当前视图。视图切换和写操作都交给控制器，
//! 这里只把结果写进信号。

use campusdesk::modules::dashboard::{AvatarStyle, avatar_url};
use campusdesk::{Action, Entry, NavControl, Outcome, ViewData, ViewName};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{sign_out, use_auth};
use crate::components::views::ViewOutlet;
use crate::web::dom;
use crate::{ControllerHandle, use_controller};

// =========================================================
// 状态
// =========================================================

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub controller: ControllerHandle,
    pub view: RwSignal<Option<ViewName>>,
    pub nav: RwSignal<Option<NavControl>>,
    pub data: RwSignal<Option<ViewData>>,
    pub loading: RwSignal<bool>,
}

impl DashboardState {
    fn new(controller: ControllerHandle) -> Self {
        Self {
            controller,
            view: RwSignal::new(None),
            nav: RwSignal::new(None),
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn open(&self, view: ViewName) {
        let entry = self.controller.get().enter(view);
        self.show(entry);
    }

    fn resume(&self) {
        let entry = self.controller.get().resume();
        self.show(entry);
    }

    fn show(&self, entry: Entry) {
        self.sync();
        self.data.set(None);
        self.loading.set(true);

        let state = *self;
        spawn_local(async move {
            let ctl = state.controller.get();
            // 期间切换了视图时结果为 None，界面保持新视图的状态
            if let Some(data) = ctl.load(entry).await {
                state.data.set(Some(data));
                state.loading.set(false);
            }
        });
    }

    /// 分派操作；`on_applied` 在成功并写入新数据后调用
    pub fn run(&self, action: Action, on_applied: impl FnOnce() + 'static) {
        let state = *self;
        spawn_local(async move {
            let ctl = state.controller.get();
            match ctl.dispatch(action).await {
                Outcome::Applied(data) => {
                    state.sync();
                    state.merge(data);
                    on_applied();
                }
                Outcome::Rejected | Outcome::Unchanged => {}
                Outcome::Stale => log::debug!("[Dashboard] result for a previous view dropped"),
            }
        });
    }

    pub fn dispatch(&self, action: Action) {
        self.run(action, || {});
    }

    /// 选课写操作只带回列表，沿用已有的下拉选项
    fn merge(&self, data: ViewData) {
        self.data.update(|current| {
            let merged = match (current.take(), data) {
                (Some(ViewData::Enrollments(old)), ViewData::Enrollments(mut page))
                    if page.options.is_none() =>
                {
                    page.options = old.options;
                    ViewData::Enrollments(page)
                }
                (_, data) => data,
            };
            *current = Some(merged);
        });
        self.loading.set(false);
    }

    fn sync(&self) {
        let ctl = self.controller.get();
        self.view.set(ctl.active_view());
        self.nav.set(ctl.active_nav());
    }
}

pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState should be provided")
}

// =========================================================
// 页面
// =========================================================

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = use_controller();
    let state = DashboardState::new(controller);
    provide_context(state);

    dom::set_title(&controller.get().title());
    state.resume();

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="nav-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header />
                <main class="p-4 md:p-8">
                    <ViewOutlet />
                </main>
            </div>
            <div class="drawer-side">
                <label for="nav-drawer" class="drawer-overlay"></label>
                <Sidebar />
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let state = use_dashboard();
    let visibility = state.controller.get().visibility();

    let items = NavControl::ALL
        .into_iter()
        .filter(|nav| visibility.is_some_and(|v| v.shows_nav(*nav)))
        .map(|nav| {
            let class = move || {
                if state.nav.get() == Some(nav) {
                    "menu-active"
                } else {
                    ""
                }
            };
            view! {
                <li>
                    <a class=class on:click=move |_| state.open(nav.view())>
                        {nav.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="w-64 min-h-full bg-base-100 shadow-xl">
            <div class="p-6 text-xl font-bold text-primary">"Campus Desk"</div>
            <ul class="menu p-4 w-full">{items}</ul>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = use_dashboard();
    let auth = use_auth();

    let name = move || {
        auth.state
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };
    let title = move || state.view.get().map(|v| v.title()).unwrap_or_default();

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <label for="nav-drawer" class="btn btn-ghost lg:hidden">"☰"</label>
                <h2 class="text-xl font-semibold">{title}</h2>
            </div>
            <div class="flex-none gap-4 items-center">
                <span class="hidden md:inline">{name}</span>
                <button
                    class="btn btn-ghost btn-circle"
                    title="Reload"
                    disabled=move || state.loading.get()
                    on:click=move |_| state.dispatch(Action::Refresh)
                >
                    "⟳"
                </button>
                <button
                    class="btn btn-ghost btn-circle avatar"
                    on:click=move |_| state.open(ViewName::Profile)
                >
                    <div class="w-10 rounded-full">
                        <img alt="avatar" src=move || avatar_url(&name(), AvatarStyle::Header) />
                    </div>
                </button>
                <button
                    class="btn btn-outline btn-error btn-sm"
                    on:click=move |_| sign_out(state.controller)
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
