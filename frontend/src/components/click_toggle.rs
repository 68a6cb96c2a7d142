use yew::prelude::*;

use crate::i18n::current::click_toggle as t;

/// Remembers whether the button has ever been clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub clicked: bool,
}

impl ToggleState {
    pub fn click(self) -> Self {
        Self {
            clicked: true,
        }
    }

    pub fn label(self) -> &'static str {
        if self.clicked {
            t::CLICKED
        } else {
            t::IDLE
        }
    }
}

#[function_component(ClickToggle)]
pub fn click_toggle() -> Html {
    let state = use_state(ToggleState::default);

    let onclick = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.click()))
    };

    html! {
        <button type="button" class={classes!("btn", "btn-primary")} {onclick}>
            { state.label() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::ToggleState;

    #[test]
    fn starts_unclicked() {
        let state = ToggleState::default();
        assert!(!state.clicked);
        assert_eq!(state.label(), "Click Me");
    }

    #[test]
    fn click_is_sticky() {
        let once = ToggleState::default().click();
        assert_eq!(once.label(), "Button was clicked");
        assert_eq!(once.click(), once);
    }
}
