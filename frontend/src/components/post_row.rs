use post_table_shared::{PostRow, Thumbnail};
use yew::prelude::*;

use crate::i18n::current::post_table as t;

#[derive(Properties, PartialEq, Clone)]
pub struct PostRowViewProps {
    pub row: PostRow,
}

#[function_component(PostRowView)]
pub fn post_row_view(props: &PostRowViewProps) -> Html {
    let row = &props.row;

    let thumbnail = match &row.thumbnail {
        Thumbnail::Image(url) => html! {
            <img src={url.clone()} alt={row.title.clone()} loading="lazy" />
        },
        Thumbnail::Placeholder => html! { <>{ Thumbnail::PLACEHOLDER_TEXT }</> },
    };

    html! {
        <tr>
            <td>{ &row.title }</td>
            <td>{ thumbnail }</td>
            <td>{ &row.tags }</td>
            <td>{ &row.slug }</td>
            <td>{ &row.summary }</td>
            <td><a href={row.link.clone()}>{ t::LINK_LABEL }</a></td>
        </tr>
    }
}
