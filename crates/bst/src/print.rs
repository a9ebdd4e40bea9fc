//! ASCII rendering of a tree.

use std::fmt::Display;

use crate::types::ValueNode;

/// Renders one child line.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Joins child renderings under `tab` with box-drawing branches.
///
/// Trailing `None` children are skipped entirely; a `None` in the middle is
/// skipped but still counts when deciding which child is last.
pub fn print_tree(tab: Option<&str>, children: &[Option<&PrintChild<'_>>]) -> String {
    let tab = tab.unwrap_or("");
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Renders the subtree at `node`, marking children with `←` / `→`.
pub fn print_node<N>(arena: &[N], node: u32, tab: &str) -> String
where
    N: ValueNode,
    N::Value: Display,
{
    let n = &arena[node as usize];
    let left = n
        .l()
        .map(|l| move |t: &str| format!("← {}", print_node(arena, l, t)));
    let right = n
        .r()
        .map(|r| move |t: &str| format!("→ {}", print_node(arena, r, t)));
    let children: [Option<&PrintChild<'_>>; 2] = [
        left.as_ref().map(|f| f as &PrintChild<'_>),
        right.as_ref().map(|f| f as &PrintChild<'_>),
    ];
    format!("{}{}", n.value(), print_tree(Some(tab), &children))
}
