use campusdesk::modules::enrollments::MyCourses;
use campusdesk_shared::date;
use leptos::prelude::*;

fn notice(text: &'static str) -> AnyView {
    view! { <p class="text-center py-8 text-base-content/60">{text}</p> }.into_any()
}

#[component]
pub fn MyCoursesView(courses: MyCourses) -> impl IntoView {
    match courses {
        MyCourses::SignedOut => notice("Please log in to view your courses"),
        MyCourses::Failed => notice("Failed to load courses"),
        MyCourses::Loaded(list) if list.is_empty() => {
            notice("You are not enrolled in any courses yet")
        }
        MyCourses::Loaded(list) => {
            let cards = list
                .into_iter()
                .map(|enrollment| {
                    let (badge, grade) = match enrollment.grade {
                        Some(grade) => ("badge badge-success", grade),
                        None => ("badge badge-secondary", "Not Graded".to_string()),
                    };
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex justify-between items-center">
                                    <h3 class="card-title">
                                        {enrollment.course_name.unwrap_or_else(|| "Unknown Course".to_string())}
                                    </h3>
                                    <span class=badge>{grade}</span>
                                </div>
                                <p class="text-sm opacity-70">
                                    {format!("Enrolled: {}", date::format_day(&enrollment.enrolled_at))}
                                </p>
                            </div>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="grid md:grid-cols-3 gap-6">{cards}</div> }.into_any()
        }
    }
}
