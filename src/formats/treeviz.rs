//! Treeviz formatter
//!
//! A one-line-per-node rendering of the document tree, designed for quick
//! scanning of primarily line-oriented documents. Structure is encoded with
//! box-drawing connectors, and node labels are truncated to 30 characters.
//!
//! Example:
//!
//!   ├─ Paragraph: intro paragraph
//!   ├─ BulletList: 2 items
//!   │  ├─ ListItem: 1 elements
//!   │  │  └─ Paragraph: first
//!   ...

use crate::ast::{plain_text, BodyElement, Fragment, ListItem, StructureElement};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(fragment: &Fragment) -> String {
    let mut result = String::new();
    let total = fragment.body.len() + fragment.structure.len();
    for (i, element) in fragment.body.iter().enumerate() {
        append_body_element(&mut result, element, "", i == total - 1);
    }
    for (i, element) in fragment.structure.iter().enumerate() {
        let is_last = fragment.body.len() + i == total - 1;
        append_structure_element(&mut result, element, "", is_last);
    }
    result
}

fn node_line(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node_type));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node_type,
            truncate(label, 30)
        ));
    }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "   " } else { "│  " })
}

fn append_body_element(result: &mut String, element: &BodyElement, prefix: &str, is_last: bool) {
    node_line(
        result,
        prefix,
        is_last,
        element.node_type(),
        &element.display_label(),
    );
    let new_prefix = child_prefix(prefix, is_last);

    match element {
        BodyElement::BlockQuote(quote) => {
            let total = quote.quote.len() + usize::from(quote.attribution.is_some());
            for (i, child) in quote.quote.iter().enumerate() {
                append_body_element(result, child, &new_prefix, i == total - 1);
            }
            if let Some(attribution) = &quote.attribution {
                node_line(
                    result,
                    &new_prefix,
                    true,
                    "Attribution",
                    &plain_text(attribution),
                );
            }
        }
        BodyElement::BulletList(list) => append_items(result, &list.items, &new_prefix),
        BodyElement::EnumeratedList(list) => append_items(result, &list.items, &new_prefix),
        // Leaf nodes: label carries everything worth showing.
        BodyElement::Paragraph(_) | BodyElement::Transition(_) | BodyElement::Error(_) => {}
    }
}

fn append_items(result: &mut String, items: &[ListItem], prefix: &str) {
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        node_line(
            result,
            prefix,
            is_last,
            "ListItem",
            &format!("{} elements", item.body.len()),
        );
        let new_prefix = child_prefix(prefix, is_last);
        for (j, child) in item.body.iter().enumerate() {
            append_body_element(result, child, &new_prefix, j == item.body.len() - 1);
        }
    }
}

fn append_structure_element(
    result: &mut String,
    element: &StructureElement,
    prefix: &str,
    is_last: bool,
) {
    node_line(
        result,
        prefix,
        is_last,
        element.node_type(),
        &element.display_label(),
    );
    if let StructureElement::Section(section) = element {
        let new_prefix = child_prefix(prefix, is_last);
        let total = section.body.len() + section.children.len();
        for (i, child) in section.body.iter().enumerate() {
            append_body_element(result, child, &new_prefix, i == total - 1);
        }
        for (i, child) in section.children.iter().enumerate() {
            let child_is_last = section.body.len() + i == total - 1;
            append_structure_element(result, child, &new_prefix, child_is_last);
        }
    }
}
