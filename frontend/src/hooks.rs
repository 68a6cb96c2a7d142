use yew::prelude::*;

use crate::loader::{settle, ConsoleSink, ListAction, ListState, MountGuard};

/// Load the post list at `url` once, when the calling component mounts.
///
/// The returned handle starts in [`ListState::Loading`] and moves to
/// `Loaded` exactly once, when the request settles. A response that arrives
/// after the component unmounted is dropped without logging or dispatching.
///
/// # Example
/// ```rust,ignore
/// #[function_component(Posts)]
/// fn posts() -> Html {
///     let state = use_post_list(AttrValue::from("/api/v1/posts/"));
///     html! { <PostTableView state={(*state).clone()} /> }
/// }
/// ```
#[hook]
pub fn use_post_list(url: AttrValue) -> UseReducerHandle<ListState> {
    let state = use_reducer(ListState::default);

    {
        let state = state.clone();
        // 无依赖：每个挂载实例只发一次请求
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            let task_guard = guard.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = crate::api::fetch_posts(&url).await;
                task_guard.run_if_mounted(|| {
                    state.dispatch(ListAction::Settled(settle(outcome, &ConsoleSink)));
                });
            });

            move || guard.detach()
        });
    }

    state
}
