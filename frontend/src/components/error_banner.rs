use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Dismissible alert shown above the post table when a fetch failure is
/// surfaced. Stays until the reader closes it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    if !*is_open || props.message.trim().is_empty() {
        return Html::default();
    }

    let close_button = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <div class={classes!("alert", "alert-danger", "d-flex", "align-items-start", "mt-2")} role="alert" aria-live="assertive">
            <div class="flex-grow-1">
                <strong>{ t::TITLE }</strong>
                <div>{ props.message.clone() }</div>
            </div>
            <button
                type="button"
                class="btn-close"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            />
        </div>
    }
}
