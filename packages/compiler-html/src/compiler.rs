//! Document-to-HTML compilation.
//!
//! Layout rules for each sibling scope:
//!
//! - A heading opens a heading run; directly following headings marked as
//!   continuations join it. Runs of two or more render inside `<hgroup>`, a
//!   lone heading renders bare.
//! - Consecutive body paragraphs render as one `<ol>`. Each `<li>` carries a
//!   `value` attribute with the paragraph's sibling rank, so a list resumed
//!   after a heading keeps counting where the previous one stopped.
//! - A body paragraph marked as a continuation renders inside the previous
//!   `<li>`, after any nested list, with no number of its own.
//! - Omitted paragraphs take their subtrees with them; a scope with nothing
//!   to show emits no markup at all.

use rticles_document::{Document, ParagraphId, ParagraphStore};
use rticles_evaluator::{full_index, index, is_included, resolve_body};

/// Options for HTML compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Prefix each list item's text with its full index.
    pub with_index: bool,
    /// Pretty print HTML.
    pub pretty: bool,
    /// Indentation string.
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            with_index: true,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to HTML.
pub fn compile_to_html<S: ParagraphStore>(
    document: &Document<S>,
    options: CompileOptions,
) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<section>");
    ctx.indent();
    compile_scope(document, None, &mut ctx);
    ctx.dedent();
    ctx.add_line("</section>");

    ctx.get_output()
}

struct BodyItem {
    id: ParagraphId,
    text: String,
    continuation: bool,
}

enum Item {
    Heading {
        level: u32,
        text: String,
        linked: bool,
    },
    Body(BodyItem),
}

/// Resolve a scope's paragraphs into renderable items, dropping omitted ones
/// and applying list punctuation when the scope belongs to a list paragraph.
fn collect_items<S: ParagraphStore>(
    document: &Document<S>,
    parent: Option<ParagraphId>,
) -> Vec<Item> {
    let parent_is_list = parent
        .and_then(|id| document.paragraph(id))
        .is_some_and(|paragraph| paragraph.list);

    let mut items = Vec::new();
    for id in document.store.children_of(parent) {
        let Some(paragraph) = document.paragraph(id) else {
            continue;
        };
        let Some(text) = resolve_body(document, &paragraph.body) else {
            continue;
        };
        let text = escape_html(&text).replace('\n', "<br>");

        match paragraph.heading {
            Some(level) => items.push(Item::Heading {
                level,
                text,
                linked: paragraph.continuation,
            }),
            None => items.push(Item::Body(BodyItem {
                id,
                text,
                continuation: paragraph.continuation,
            })),
        }
    }

    if parent_is_list {
        apply_list_punctuation(&mut items);
    }
    items
}

/// The last body item gets `.`, every earlier one `;`, applied backwards.
fn apply_list_punctuation(items: &mut [Item]) {
    let mut terminal = true;
    for item in items.iter_mut().rev() {
        if let Item::Body(body) = item {
            body.text.push(if terminal { '.' } else { ';' });
            terminal = false;
        }
    }
}

fn compile_scope<S: ParagraphStore>(
    document: &Document<S>,
    parent: Option<ParagraphId>,
    ctx: &mut Context,
) {
    let items = collect_items(document, parent);

    let mut cursor = 0;
    while cursor < items.len() {
        match &items[cursor] {
            Item::Heading { .. } => {
                let mut run_end = cursor + 1;
                while run_end < items.len() {
                    match &items[run_end] {
                        Item::Heading { linked: true, .. } => run_end += 1,
                        _ => break,
                    }
                }
                compile_heading_run(&items[cursor..run_end], ctx);
                cursor = run_end;
            }
            Item::Body(_) => {
                let mut run_end = cursor;
                while run_end < items.len() && matches!(items[run_end], Item::Body(_)) {
                    run_end += 1;
                }
                compile_list_run(document, &items[cursor..run_end], ctx);
                cursor = run_end;
            }
        }
    }
}

fn compile_heading_run(run: &[Item], ctx: &mut Context) {
    let grouped = run.len() >= 2;
    if grouped {
        ctx.add_line("<hgroup>");
        ctx.indent();
    }
    for item in run {
        if let Item::Heading { level, text, .. } = item {
            ctx.add_line(&format!("<h{level}>{text}</h{level}>"));
        }
    }
    if grouped {
        ctx.dedent();
        ctx.add_line("</hgroup>");
    }
}

fn compile_list_run<S: ParagraphStore>(document: &Document<S>, run: &[Item], ctx: &mut Context) {
    ctx.add_line("<ol>");
    ctx.indent();

    let mut cursor = 0;
    while cursor < run.len() {
        if let Item::Body(item) = &run[cursor] {
            let mut continuations = Vec::new();
            let mut next = cursor + 1;
            while next < run.len() {
                match &run[next] {
                    Item::Body(follower) if follower.continuation => {
                        continuations.push(follower.text.as_str());
                        next += 1;
                    }
                    _ => break,
                }
            }
            compile_item(document, item, &continuations, ctx);
            cursor = next;
        } else {
            cursor += 1;
        }
    }

    ctx.dedent();
    ctx.add_line("</ol>");
}

fn compile_item<S: ParagraphStore>(
    document: &Document<S>,
    item: &BodyItem,
    continuations: &[&str],
    ctx: &mut Context,
) {
    let Some(value) = index(document, item.id) else {
        return;
    };
    let display = match full_index(document, item.id, ctx.options.with_index) {
        Some(number) => format!("{number} {}", item.text),
        None => item.text.clone(),
    };

    let has_children = document
        .store
        .children_of(Some(item.id))
        .into_iter()
        .any(|child| is_included(document, child));

    if !has_children && continuations.is_empty() {
        ctx.add_line(&format!("<li value=\"{value}\">{display}</li>"));
        return;
    }

    ctx.add_line(&format!("<li value=\"{value}\">"));
    ctx.indent();
    ctx.add_line(&display);
    compile_scope(document, Some(item.id), ctx);
    for continuation in continuations {
        ctx.add_line(continuation);
    }
    ctx.dedent();
    ctx.add_line("</li>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
