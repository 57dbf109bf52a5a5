//! Placeholder template expansion.
//!
//! ## Grammar
//!
//! ```text
//! {{ key }}                                   placeholder, key trimmed
//! {{#name}} ... {{/name}}                     loop over a list
//! {{?empty:name}} ... {{/empty:name}}         shown when list is missing or empty
//! {{?hasItems:name}} ... {{/hasItems:name}}   shown when list has items
//! ```
//!
//! Section names are `[A-Za-z0-9_]+`. A section closes at the *first* matching
//! close tag after its opening tag, so sections of the same name do not nest.
//! There is no escape for literal `{{` / `}}` in template text.
//!
//! ## Passes
//!
//! Expansion is four sequential rewrites of the whole text, each feeding the next:
//!
//! 1. `?empty` sections: kept (placeholders resolved against the outer context)
//!    or dropped.
//! 2. `?hasItems` sections: kept verbatim or dropped.
//! 3. Loops: body repeated per list element, placeholders resolved against the
//!    element.
//! 4. Placeholders: resolved against the outer context; unknown keys become `""`.
//!
//! Because pass 4 sees the output of passes 1-3, a `?hasItems` body is resolved
//! against the outer context, never per element. Within one pass substituted
//! values are not re-scanned.
//!
//! The expander never escapes. Values must arrive already sanitized.

use crate::sanitize::SanitizedRecord;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template must be a non-empty string")]
    EmptyTemplate,
    #[error("template data must be an object, got {0}")]
    DataNotObject(&'static str),
}

/// A flat key → string record, one element of a [`Value::List`].
pub type Record = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<Record>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Record>> for Value {
    fn from(items: Vec<Record>) -> Self {
        Value::List(items)
    }
}

/// Something placeholders can be resolved against.
pub trait Scope {
    /// Text for `key`, or `None` when the key is unknown.
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl Scope for Record {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// Top-level data for one expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The list stored under `name` if it exists and has at least one element.
    fn non_empty_list(&self, name: &str) -> Option<&[Record]> {
        match self.values.get(name) {
            Some(Value::List(items)) if !items.is_empty() => Some(items),
            _ => None,
        }
    }

    /// Build a context from arbitrary JSON.
    ///
    /// Strings map to text, numbers and booleans to their JSON spelling, arrays
    /// to lists (non-object elements become empty records). Nulls and nested
    /// objects are dropped, so they behave like missing keys.
    pub fn from_json(value: serde_json::Value) -> Result<Context, TemplateError> {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(TemplateError::DataNotObject(json_type_name(&other))),
        };
        let mut context = Context::new();
        for (key, value) in map {
            match value {
                serde_json::Value::Array(elements) => {
                    let items = elements.into_iter().map(json_record).collect::<Vec<_>>();
                    context.insert(key, Value::List(items));
                }
                other => {
                    if let Some(text) = json_scalar(other) {
                        context.insert(key, Value::Text(text));
                    }
                }
            }
        }
        Ok(context)
    }
}

impl Scope for Context {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.values.get(key)? {
            Value::Text(text) => Some(Cow::Borrowed(text.as_str())),
            Value::List(_) => Some(Cow::Borrowed("")),
        }
    }
}

impl From<&SanitizedRecord> for Context {
    fn from(record: &SanitizedRecord) -> Self {
        let items = record
            .menu_items
            .iter()
            .map(|item| {
                Record::from([
                    ("name".to_string(), item.name.clone()),
                    ("price".to_string(), item.price.clone()),
                ])
            })
            .collect::<Vec<_>>();

        let mut context = Context::new();
        context
            .insert("business_name", record.business_name.as_str())
            .insert("business_type", record.business_type.as_str())
            .insert("tagline", record.tagline.as_str())
            .insert("short_description", record.short_description.as_str())
            .insert("contact_whatsapp", record.contact_whatsapp.as_str())
            .insert("instagram_handle", record.instagram_handle.as_str())
            .insert("theme_choice", record.theme_choice.as_str())
            .insert("menu_items", items);
        context
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn json_scalar(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_record(element: serde_json::Value) -> Record {
    match element {
        serde_json::Value::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| json_scalar(v).map(|text| (k, text)))
            .collect(),
        _ => Record::new(),
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));
static LOOP_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#([A-Za-z0-9_]+)\}\}").expect("loop pattern is valid"));
static EMPTY_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\?empty:([A-Za-z0-9_]+)\}\}").expect("empty pattern is valid")
});
static HAS_ITEMS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\?hasItems:([A-Za-z0-9_]+)\}\}").expect("hasItems pattern is valid")
});

/// Replace every `{{ key }}` with its value in `scope`, or `""` if unknown.
pub fn replace_placeholders(template: &str, scope: &impl Scope) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            scope
                .lookup(caps[1].trim())
                .map(Cow::into_owned)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Rewrite every section opened by `open` and closed by `{{/<close_prefix><name>}}`.
///
/// Scans left to right; each section ends at the first matching close tag.
/// An opening tag with no close is left untouched and scanning resumes just
/// after its first byte.
fn rewrite_sections(
    input: &str,
    open: &Regex,
    close_prefix: &str,
    mut render: impl FnMut(&str, &str) -> String,
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = open.captures_at(input, search_from) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let close = format!("{{{{/{close_prefix}{}}}}}", name.as_str());
        let body_start = tag.end();

        match input[body_start..].find(&close) {
            Some(offset) => {
                let body_end = body_start + offset;
                out.push_str(&input[copied..tag.start()]);
                out.push_str(&render(name.as_str(), &input[body_start..body_end]));
                copied = body_end + close.len();
                search_from = copied;
            }
            // `{` is one byte, so this stays on a char boundary
            None => search_from = tag.start() + 1,
        }
    }

    out.push_str(&input[copied..]);
    out
}

/// Resolve `?empty` then `?hasItems` sections.
pub fn process_conditionals(template: &str, data: &Context) -> String {
    let after_empty = rewrite_sections(template, &EMPTY_OPEN, "empty:", |name, body| {
        match data.non_empty_list(name) {
            Some(_) => String::new(),
            None => replace_placeholders(body, data),
        }
    });

    rewrite_sections(&after_empty, &HAS_ITEMS_OPEN, "hasItems:", |name, body| {
        match data.non_empty_list(name) {
            Some(_) => body.to_string(),
            None => String::new(),
        }
    })
}

/// Expand `{{#name}}...{{/name}}` once per element of the list `name`.
pub fn process_loops(template: &str, data: &Context) -> String {
    rewrite_sections(template, &LOOP_OPEN, "", |name, body| {
        match data.non_empty_list(name) {
            Some(items) => items
                .iter()
                .map(|item| replace_placeholders(body, item))
                .collect(),
            None => String::new(),
        }
    })
}

/// Expand `template` against `data`.
///
/// The only failure is an empty template; every data-shape problem (missing
/// keys, a text value where a list is expected) degrades to empty output for
/// the affected section.
pub fn expand(template: &str, data: &Context) -> Result<String, TemplateError> {
    if template.is_empty() {
        return Err(TemplateError::EmptyTemplate);
    }
    let result = process_conditionals(template, data);
    let result = process_loops(&result, data);
    Ok(replace_placeholders(&result, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(name: &str, price: &str) -> Record {
        Record::from([
            ("name".to_string(), name.to_string()),
            ("price".to_string(), price.to_string()),
        ])
    }

    fn with_items(items: Vec<Record>) -> Context {
        let mut ctx = Context::new();
        ctx.insert("menu_items", items);
        ctx
    }

    const BOTH_CONDITIONALS: &str = "{{?empty:menu_items}}X{{/empty:menu_items}}{{?hasItems:menu_items}}Y{{/hasItems:menu_items}}";

    // =========================================================================
    // Placeholders
    // =========================================================================

    #[test]
    fn placeholder_replaced() {
        let mut ctx = Context::new();
        ctx.insert("name", "Moonlight");
        assert_eq!(expand("Hi {{name}}!", &ctx).unwrap(), "Hi Moonlight!");
    }

    #[test]
    fn placeholder_key_is_trimmed() {
        let mut ctx = Context::new();
        ctx.insert("name", "Moonlight");
        assert_eq!(expand("{{  name \n}}", &ctx).unwrap(), "Moonlight");
    }

    #[test]
    fn unknown_placeholder_is_empty() {
        assert_eq!(
            expand("a{{does_not_exist}}b", &Context::new()).unwrap(),
            "ab"
        );
    }

    #[test]
    fn list_value_in_placeholder_is_empty() {
        let ctx = with_items(vec![item("A", "1")]);
        assert_eq!(expand("[{{menu_items}}]", &ctx).unwrap(), "[]");
    }

    #[test]
    fn substituted_value_is_not_rescanned() {
        let mut ctx = Context::new();
        ctx.insert("a", "{{b}}").insert("b", "nope");
        assert_eq!(replace_placeholders("{{a}}", &ctx), "{{b}}");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let mut ctx = Context::new();
        ctx.insert("name", "Tom &amp; Jerry");
        assert_eq!(expand("{{name}}", &ctx).unwrap(), "Tom &amp; Jerry");
    }

    #[test]
    fn text_without_tags_passes_through() {
        let text = "<p>{ not a tag } and }} stray</p>";
        assert_eq!(expand(text, &Context::new()).unwrap(), text);
    }

    // =========================================================================
    // Loops
    // =========================================================================

    #[test]
    fn loop_round_trip() {
        let mut ctx = Context::new();
        ctx.insert("items", vec![item("A", "1"), item("B", "2")]);
        assert_eq!(
            expand("{{#items}}{{name}}:{{price}};{{/items}}", &ctx).unwrap(),
            "A:1;B:2;"
        );
    }

    #[test]
    fn loop_over_empty_list_collapses() {
        let ctx = with_items(vec![]);
        assert_eq!(
            expand("a{{#menu_items}}<li>{{name}}</li>{{/menu_items}}b", &ctx).unwrap(),
            "ab"
        );
    }

    #[test]
    fn loop_over_missing_or_text_collapses() {
        let mut ctx = Context::new();
        ctx.insert("menu_items", "not a list");
        assert_eq!(expand("{{#menu_items}}x{{/menu_items}}", &ctx).unwrap(), "");
        assert_eq!(
            expand("{{#other}}x{{/other}}", &Context::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn loop_scope_is_the_element_not_the_outer_context() {
        let mut ctx = Context::new();
        ctx.insert("business_name", "Outer")
            .insert("items", vec![item("A", "1")]);
        assert_eq!(
            process_loops("{{#items}}{{name}}|{{business_name}}{{/items}}", &ctx),
            "A|"
        );
    }

    #[test]
    fn outer_scope_does_not_see_element_keys() {
        let ctx = with_items(vec![item("A", "1")]);
        assert_eq!(expand("{{name}}", &ctx).unwrap(), "");
    }

    #[test]
    fn loop_output_is_resolved_again_by_final_pass() {
        let mut ctx = Context::new();
        ctx.insert("business_name", "Outer")
            .insert("items", vec![item("{{business_name}}", "1")]);
        assert_eq!(
            expand("{{#items}}{{name}}{{/items}}", &ctx).unwrap(),
            "Outer"
        );
    }

    #[test]
    fn loop_needs_matching_close_name() {
        let mut ctx = Context::new();
        ctx.insert("a", vec![item("A", "1")]);
        // `{{#a}}` never closes; leftover tags fall through to the placeholder pass
        assert_eq!(expand("{{#a}}x{{/b}}", &ctx).unwrap(), "x");
    }

    #[test]
    fn loop_closes_at_first_matching_tag() {
        let mut ctx = Context::new();
        ctx.insert("a", vec![item("A", "1"), item("B", "2")]);
        assert_eq!(
            expand("{{#a}}{{name}}{{/a}}-{{/a}}", &ctx).unwrap(),
            "AB-"
        );
    }

    #[test]
    fn multiple_loops_are_independent() {
        let mut ctx = Context::new();
        ctx.insert("a", vec![item("A", "1")])
            .insert("b", vec![item("B", "2"), item("C", "3")]);
        assert_eq!(
            expand("{{#a}}{{name}}{{/a}}|{{#b}}{{price}}{{/b}}", &ctx).unwrap(),
            "A|23"
        );
    }

    #[test]
    fn loop_body_with_multibyte_text() {
        let ctx = with_items(vec![item("Café", "€3")]);
        assert_eq!(
            expand("{{#menu_items}}☕ {{name}} — {{price}}\n{{/menu_items}}", &ctx).unwrap(),
            "☕ Café — €3\n"
        );
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    #[test]
    fn empty_collection_shows_only_empty_block() {
        let ctx = with_items(vec![]);
        assert_eq!(expand(BOTH_CONDITIONALS, &ctx).unwrap(), "X");
    }

    #[test]
    fn missing_collection_shows_only_empty_block() {
        assert_eq!(expand(BOTH_CONDITIONALS, &Context::new()).unwrap(), "X");
    }

    #[test]
    fn populated_collection_shows_only_has_items_block() {
        let ctx = with_items(vec![item("A", "1")]);
        assert_eq!(expand(BOTH_CONDITIONALS, &ctx).unwrap(), "Y");
    }

    #[test]
    fn text_value_counts_as_empty() {
        let mut ctx = Context::new();
        ctx.insert("menu_items", "oops");
        assert_eq!(expand(BOTH_CONDITIONALS, &ctx).unwrap(), "X");
    }

    #[test]
    fn empty_block_resolves_against_outer_context() {
        let mut ctx = with_items(vec![]);
        ctx.insert("business_name", "Moon");
        assert_eq!(
            process_conditionals("{{?empty:menu_items}}Ask {{business_name}}{{/empty:menu_items}}", &ctx),
            "Ask Moon"
        );
    }

    #[test]
    fn has_items_block_is_kept_verbatim_until_later_passes() {
        let ctx = with_items(vec![item("A", "1")]);
        assert_eq!(
            process_conditionals(
                "{{?hasItems:menu_items}}<ul>{{#menu_items}}{{name}}{{/menu_items}}</ul>{{/hasItems:menu_items}}",
                &ctx
            ),
            "<ul>{{#menu_items}}{{name}}{{/menu_items}}</ul>"
        );
    }

    #[test]
    fn has_items_block_placeholders_use_outer_context() {
        let mut ctx = with_items(vec![item("A", "1")]);
        ctx.insert("name", "Outer");
        assert_eq!(
            expand("{{?hasItems:menu_items}}{{name}}{{/hasItems:menu_items}}", &ctx).unwrap(),
            "Outer"
        );
    }

    #[test]
    fn conditional_wrapping_loop() {
        let template = "<h1>{{business_name}}</h1>\
            {{?hasItems:menu_items}}<ul>{{#menu_items}}<li>{{name}} - {{price}}</li>{{/menu_items}}</ul>{{/hasItems:menu_items}}\
            {{?empty:menu_items}}<p>Contact us</p>{{/empty:menu_items}}";

        let mut full = with_items(vec![item("Coffee", "Rp 15,000"), item("Tea", "Rp 10,000")]);
        full.insert("business_name", "Test");
        assert_eq!(
            expand(template, &full).unwrap(),
            "<h1>Test</h1><ul><li>Coffee - Rp 15,000</li><li>Tea - Rp 10,000</li></ul>"
        );

        let mut empty = with_items(vec![]);
        empty.insert("business_name", "Test");
        assert_eq!(
            expand(template, &empty).unwrap(),
            "<h1>Test</h1><p>Contact us</p>"
        );
    }

    #[test]
    fn duplicated_conditionals_apply_independently() {
        let ctx = with_items(vec![]);
        assert_eq!(
            expand(
                "{{?empty:menu_items}}1{{/empty:menu_items}}-{{?empty:menu_items}}2{{/empty:menu_items}}",
                &ctx
            )
            .unwrap(),
            "1-2"
        );
    }

    #[test]
    fn unclosed_conditional_collapses_in_final_pass() {
        let ctx = with_items(vec![]);
        assert_eq!(expand("{{?empty:menu_items}}X", &ctx).unwrap(), "X");
    }

    // =========================================================================
    // Errors and JSON data
    // =========================================================================

    #[test]
    fn empty_template_is_error() {
        assert_eq!(
            expand("", &Context::new()),
            Err(TemplateError::EmptyTemplate)
        );
    }

    #[test]
    fn non_object_data_is_error() {
        assert_eq!(
            Context::from_json(json!([1, 2])),
            Err(TemplateError::DataNotObject("array"))
        );
        assert_eq!(
            Context::from_json(json!("text")),
            Err(TemplateError::DataNotObject("string"))
        );
        assert_eq!(
            Context::from_json(json!(null)),
            Err(TemplateError::DataNotObject("null"))
        );
    }

    #[test]
    fn from_json_maps_values() {
        let ctx = Context::from_json(json!({
            "name": "Moon",
            "count": 3,
            "open": true,
            "gone": null,
            "nested": { "a": 1 },
            "items": [{ "name": "A", "price": 1 }, "junk"]
        }))
        .unwrap();

        assert_eq!(ctx.get("name"), Some(&Value::from("Moon")));
        assert_eq!(ctx.get("count"), Some(&Value::from("3")));
        assert_eq!(ctx.get("open"), Some(&Value::from("true")));
        assert_eq!(ctx.get("gone"), None);
        assert_eq!(ctx.get("nested"), None);
        assert_eq!(
            ctx.get("items"),
            Some(&Value::List(vec![item("A", "1"), Record::new()]))
        );
    }

    #[test]
    fn context_from_sanitized_record() {
        let record = crate::sanitize::sanitize(&crate::test_helpers::valid_record());
        let ctx = Context::from(&record);
        assert_eq!(
            ctx.lookup("business_name").as_deref(),
            Some(record.business_name.as_str())
        );
        assert_eq!(ctx.lookup("theme_choice").as_deref(), Some("classic"));
        assert!(ctx.non_empty_list("menu_items").is_some());
    }
}
