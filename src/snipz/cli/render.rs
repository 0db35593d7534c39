//! # Rendering
//!
//! Panels are rendered through minijinja templates. Layout that needs Rust
//! (indentation, html escaping) is precomputed into the template data; the
//! templates pick styles through the `style` filter, which maps a style name
//! onto a `colored` style. `colored` drops the escape codes itself when
//! stdout isn't a terminal.

use colored::Colorize;
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;
use snipz::api::{CmdMessage, MessageLevel};
use snipz::error::{Result, SnipzError};
use snipz::lang::editor_mode_for;
use snipz::view::{EditorState, Listing, SnippetCard};

const LIST_TEMPLATE: &str = r#"{% if empty %}
No snippets found
{% else %}
{% for card in cards %}
{{ card.title | style("title") }}  {{ card.lang | style("lang") }} · {{ card.created | style("time") }} {{ ("(" ~ card.created_ago ~ ")") | style("time") }}
  {{ card.id | style("id") }}
{{ card.preview }}
  {{ "[View]" | style("action") }} snipz view {{ card.id }}   {{ "[Copy Link]" | style("action") }} snipz link {{ card.id }}
{% if not loop.last %}

{% endif %}
{% endfor %}
{% endif %}"#;

// The markup of a browse-panel card, fields arrive already escaped.
const CARDS_HTML_TEMPLATE: &str = r#"{% if empty %}
<div style="color:#aaa;margin:2em 0;">No snippets found</div>
{% else %}
{% for card in cards %}
<div class="snippet-card">
  <div class="snippet-card-title">{{ card.title }}</div>
  <div class="snippet-card-meta">
    {{ card.lang }} &nbsp;·&nbsp; {{ card.created }}
  </div>
  <pre class="snippet-card-preview">{{ card.preview }}</pre>
  <div class="snippet-card-footer">
    <button class="card-btn card-btn-view" data-id="{{ card.id }}">View</button>
    <button class="card-btn card-btn-copy" data-id="{{ card.id }}">Copy Link</button>
  </div>
</div>
{% endfor %}
{% endif %}"#;

const EDITOR_TEMPLATE: &str = r#"{{ title | style("title") }}
{{ "Language:" | style("label") }}   {{ lang }} ({{ mode }})
{{ "Visibility:" | style("label") }} {% if private %}private{% else %}public{% endif %}

{% if link %}
{{ "Link:" | style("label") }}       {{ link }}
{% endif %}
--------------------------------
{{ code }}
"#;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("style", style);
    env.add_template("list", LIST_TEMPLATE)
        .expect("list template is valid");
    env.add_template("cards_html", CARDS_HTML_TEMPLATE)
        .expect("cards_html template is valid");
    env.add_template("editor", EDITOR_TEMPLATE)
        .expect("editor template is valid");
    env
});

fn style(value: String, name: String) -> String {
    match name.as_str() {
        "title" => value.bold().to_string(),
        "lang" => value.cyan().to_string(),
        "time" => value.dimmed().italic().to_string(),
        "id" => value.yellow().to_string(),
        "action" => value.blue().to_string(),
        "label" => value.dimmed().to_string(),
        _ => value,
    }
}

#[derive(Serialize)]
struct CardData {
    id: String,
    title: String,
    lang: String,
    created: String,
    created_ago: String,
    preview: String,
}

#[derive(Serialize)]
struct ListData {
    cards: Vec<CardData>,
    empty: bool,
}

#[derive(Serialize)]
struct EditorData<'a> {
    title: &'a str,
    lang: &'a str,
    mode: &'a str,
    private: bool,
    code: &'a str,
    link: Option<&'a str>,
}

fn render_template<S: Serialize>(name: &str, data: &S) -> Result<String> {
    TEMPLATES
        .get_template(name)
        .and_then(|t| t.render(data))
        .map_err(|e| SnipzError::Api(format!("Failed to render {}: {}", name, e)))
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_data(listing: &Listing, html: bool) -> ListData {
    let cards = listing
        .cards()
        .iter()
        .map(|card: &SnippetCard| CardData {
            id: card.id.clone(),
            title: if html { card.title_html() } else { card.title.clone() },
            lang: card.lang.clone(),
            created: card.created.clone(),
            created_ago: card.created_ago.clone(),
            preview: if html {
                card.preview_html()
            } else {
                indent(&card.preview, "    ")
            },
        })
        .collect();
    ListData {
        cards,
        empty: listing.is_empty(),
    }
}

/// Browse panel for the terminal.
pub fn render_listing(listing: &Listing) -> Result<String> {
    render_template("list", &list_data(listing, false))
}

/// Browse panel as HTML snippet cards.
pub fn render_listing_html(listing: &Listing) -> Result<String> {
    render_template("cards_html", &list_data(listing, true))
}

/// Editor panel populated with a loaded snippet.
pub fn render_editor(editor: &EditorState, link: Option<&str>) -> Result<String> {
    render_template(
        "editor",
        &EditorData {
            title: &editor.title,
            lang: &editor.lang,
            mode: editor_mode_for(&editor.lang),
            private: editor.private,
            code: &editor.code,
            link,
        },
    )
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
