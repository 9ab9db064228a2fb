use askama::Template;

use crate::domain::value_objects::page_view::PageView;

pub const SORT_ACTION: &str = "/sort";

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Fruits</title></head>
<body>
<form method="post" action="/sort">
{% for option in view.controls -%}
<label><input type="radio" name="{{ option.name }}" value="{{ option.direction.marker() }}"{% if option.checked %} checked{% endif %} onchange="this.form.submit()"> {{ option.label }}</label>
{% endfor -%}
<noscript><button type="submit">Sort</button></noscript>
</form>
<ul>
{% for entry in view.entries -%}
<li data-key="{{ entry.key }}">{{ entry.item.label() }}</li>
{% endfor -%}
</ul>
</body>
</html>
"#,
    ext = "html"
)]
pub struct PageTemplate<'a> {
    pub view: &'a PageView,
}

pub fn render_page(view: &PageView) -> askama::Result<String> {
    PageTemplate { view }.render()
}
