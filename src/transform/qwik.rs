//! Qwik component emitter.

use super::extract::ExtractedDefaults;
use super::infer::infer_type;
use crate::icon::ComponentName;

/// Expression spread into the root element of every component.
pub const SPREAD: &str = "{...attrs}";

const IMPORT: &str = "import { HTMLAttributes } from '@builder.io/qwik'";
const MARKUP_INDENT: &str = "    ";

/// Emits the source of a Qwik component.
///
/// `markup` is the serialized root element with the defaults already removed.
/// Incoming props are spread over `defaults`, so caller values win.
pub fn emit(component_name: &ComponentName, defaults: &ExtractedDefaults, markup: &str) -> String {
    let props = format!("{component_name}Props");

    let fields = defaults
        .iter()
        .map(|(name, value)| format!("  '{name}'?: {}", infer_type(value)))
        .collect::<Vec<_>>()
        .join("\n");

    // Serializing string pairs into a JSON object cannot fail.
    let defaults_literal = serde_json::to_string(defaults).unwrap_or_else(|_| "{}".to_string());

    [
        IMPORT.to_string(),
        String::new(),
        format!("interface {props} extends HTMLAttributes<SVGElement> {{"),
        fields,
        "}".to_string(),
        String::new(),
        format!("const defaults = {defaults_literal}"),
        String::new(),
        format!("export const {component_name} = (props: {props}) => {{"),
        "  const attrs = {...defaults, ...props}".to_string(),
        "  return (".to_string(),
        "    // @ts-ignore".to_string(),
        indent_markup(markup),
        "  )".to_string(),
        " }".to_string(),
        String::new(),
    ]
    .join("\n")
}

/// Drops blank lines, indents the rest and injects [`SPREAD`] after the
/// first `<svg` token.
fn indent_markup(markup: &str) -> String {
    markup
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{MARKUP_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
        .replacen("<svg", &format!("<svg {SPREAD}"), 1)
}

/// Emits a barrel module re-exporting `components`.
pub fn emit_index<'a>(components: impl IntoIterator<Item = &'a ComponentName>) -> String {
    let mut names: Vec<_> = components.into_iter().collect();
    names.sort();
    names.dedup();

    let mut index = names
        .iter()
        .map(|name| format!("export {{ {name} }} from './{name}'"))
        .collect::<Vec<_>>()
        .join("\n");
    index.push('\n');
    index
}
