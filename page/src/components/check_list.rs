use super::{Icon, IconKind};
use leptos::prelude::*;

/// Bulleted list with a check mark per item, rendered in the given order.
#[component]
pub fn CheckList(
    /// Item texts
    items: Vec<&'static str>,
    /// Class on each `<li>`
    #[prop(default = "check-item")]
    item_class: &'static str,
) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class=item_class>
                            <Icon kind=IconKind::CheckCircle />
                            <span class="check-text">{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
