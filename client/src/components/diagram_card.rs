//! Card for one saved diagram in the management grid.

#[cfg(test)]
#[path = "diagram_card_test.rs"]
mod diagram_card_test;

use leptos::prelude::*;
use time::UtcOffset;

use diagram::catalog::{diagram_type_label, editor_href, format_date, preview_lines};
use diagram::model::Diagram;

use crate::util::clock::to_local;

/// Display strings for a card, derived once from the saved record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CardText {
    pub name: String,
    pub date: String,
    pub type_label: &'static str,
    pub preview: String,
    pub href: String,
}

impl CardText {
    /// Card text with the timestamp shown at `offset`.
    pub(crate) fn new(diagram: &Diagram, offset: UtcOffset) -> Self {
        let (preview, truncated) = preview_lines(&diagram.content);
        Self {
            name: diagram.name.clone(),
            date: format_date(diagram.last_updated.to_offset(offset)),
            type_label: diagram_type_label(&diagram.content),
            preview: if truncated { format!("{preview}...") } else { preview },
            href: editor_href(&diagram.name),
        }
    }
}

/// Name, date, type badge, a short source preview, and open/delete actions.
#[component]
pub fn DiagramCard(diagram: Diagram, on_delete: Callback<String>) -> impl IntoView {
    let text = CardText::new(&diagram, to_local(diagram.last_updated).offset());
    let title = text.name.clone();
    let delete_name = text.name.clone();

    view! {
        <article class="diagram-card">
            <header class="diagram-card__header">
                <div class="diagram-card__heading">
                    <h3 class="diagram-card__name" title=title>
                        {text.name}
                    </h3>
                    <span class="diagram-card__date">{text.date}</span>
                </div>
                <span class="diagram-card__type">{text.type_label}</span>
            </header>
            <pre class="diagram-card__preview">
                <code>{text.preview}</code>
            </pre>
            <div class="diagram-card__actions">
                <a class="btn btn--primary diagram-card__open" href=text.href>
                    "Edit"
                </a>
                <button
                    class="btn diagram-card__delete"
                    title="Delete diagram"
                    on:click=move |_| on_delete.run(delete_name.clone())
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
