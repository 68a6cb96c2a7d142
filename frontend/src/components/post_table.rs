use yew::prelude::*;

use crate::{
    components::{error_banner::ErrorBanner, post_row::PostRowView},
    hooks::use_post_list,
    loader::ListState,
    view::{table_model, TableRow},
};

#[derive(Properties, PartialEq)]
pub struct PostTableProps {
    /// Listing endpoint, fixed for the lifetime of the component.
    pub url: AttrValue,
    /// Show an error banner above the table when the fetch failed. The rows
    /// themselves are the same either way.
    #[prop_or(false)]
    pub surface_errors: bool,
}

/// Fetches the post list once on mount and renders it.
#[function_component(PostTable)]
pub fn post_table(props: &PostTableProps) -> Html {
    let state = use_post_list(props.url.clone());

    html! {
        <PostTableView state={(*state).clone()} surface_errors={props.surface_errors} />
    }
}

#[derive(Properties, PartialEq)]
pub struct PostTableViewProps {
    pub state: ListState,
    #[prop_or(false)]
    pub surface_errors: bool,
}

#[function_component(PostTableView)]
pub fn post_table_view(props: &PostTableViewProps) -> Html {
    let banner = match props.state.failure() {
        Some(error) if props.surface_errors => html! {
            <ErrorBanner message={error.to_string()} />
        },
        _ => Html::default(),
    };

    let model = table_model(&props.state);
    let colspan = model.placeholder_colspan().to_string();
    let rows = model.rows.into_iter().map(|row| match row {
        TableRow::Placeholder(placeholder) => html! {
            <tr key="placeholder">
                <td colspan={colspan.clone()}>{ placeholder.message() }</td>
            </tr>
        },
        TableRow::Post(row) => {
            let key = row.id.to_string();
            html! { <PostRowView key={key} row={row} /> }
        },
    });

    html! {
        <>
            { banner }
            <table class={classes!("table", "table-striped", "table-bordered", "mt-2")}>
                {
                    if let Some(text) = model.caption {
                        html! { <caption>{ text }</caption> }
                    } else {
                        html! {}
                    }
                }
                <thead>
                    <tr>
                        { for model.header.iter().map(|header| html! { <th>{ *header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </>
    }
}
