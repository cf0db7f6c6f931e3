use campusdesk::modules::dashboard::format_rupees;
use campusdesk_shared::FeeRecord;
use leptos::prelude::*;

#[component]
pub fn FeesView(fees: Vec<FeeRecord>) -> impl IntoView {
    let rows = fees
        .into_iter()
        .map(|fee| {
            let (badge, label) = if fee.paid {
                ("badge badge-success", "Paid")
            } else {
                ("badge badge-error", "Pending")
            };
            view! {
                <tr>
                    <td class="font-mono">{fee.id}</td>
                    <td>{fee.student}</td>
                    <td>{format_rupees(fee.amount)}</td>
                    <td>{fee.date}</td>
                    <td><span class=badge>{label}</span></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Receipt"</th>
                        <th>"Student"</th>
                        <th>"Amount"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
