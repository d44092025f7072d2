//! Server-rendered pages. Plain string builders; handlers pass fully typed
//! data in and get an HTML document back. All user-supplied values go
//! through `escape`.

use crate::db::models::Cafe;
use crate::types::form::{CafeSubmission, FieldErrors};
use crate::types::rating::Scale;

/// Minimal HTML escaping for text content and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Coffee &amp; Wifi</title>
<style>
body {{ font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.5rem 0.75rem; text-align: left; }}
label {{ display: block; margin-top: 0.75rem; }}
.error {{ color: #b00020; margin: 0.25rem 0 0; }}
nav a {{ margin-right: 1rem; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/list_of_cafes">All cafes</a><a href="/add_cafe">Add a cafe</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn home_page() -> String {
    layout(
        "Home",
        r#"<h1>Coffee &amp; Wifi</h1>
<p>Want to work in a cafe but need power and wifi? You've come to the right place.</p>
<p><a href="/list_of_cafes">Browse the list</a> or <a href="/add_cafe">add a new cafe</a>.</p>"#,
    )
}

pub fn list_page(cafes: &[Cafe]) -> String {
    let mut body = String::from("<h1>All cafes</h1>\n");
    if cafes.is_empty() {
        body.push_str("<p>No cafes yet. <a href=\"/add_cafe\">Add the first one</a>.</p>");
    } else {
        body.push_str(
            "<table>\n<tr><th>Cafe</th><th>Coffee</th><th>Wifi</th><th>Power</th><th></th></tr>\n",
        );
        for cafe in cafes {
            body.push_str(&format!(
                "<tr><td><a href=\"{location}\">{name}</a></td><td>{coffee}</td><td>{wifi}</td><td>{socket}</td><td><a href=\"/delete/{id}\">Delete</a></td></tr>\n",
                location = escape(&cafe.location),
                name = escape(&cafe.name),
                coffee = escape(&cafe.coffee),
                wifi = escape(&cafe.wifi),
                socket = escape(&cafe.socket),
                id = cafe.id,
            ));
        }
        body.push_str("</table>");
    }
    layout("All cafes", &body)
}

fn select_field(
    field_name: &str,
    scale: Scale,
    current: &str,
    error: Option<&'static str>,
) -> String {
    let mut html = format!(
        "<label for=\"{field_name}\">{label}</label>\n<select id=\"{field_name}\" name=\"{field_name}\">\n",
        label = scale.label(),
    );
    for choice in scale.choices() {
        let selected = if *choice == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{value}\"{selected}>{value}</option>\n",
            value = escape(choice),
        ));
    }
    html.push_str("</select>\n");
    if let Some(msg) = error {
        html.push_str(&format!("<p class=\"error\">{msg}</p>\n"));
    }
    html
}

fn text_field(field_name: &str, label: &str, current: &str, error: Option<&'static str>) -> String {
    let mut html = format!(
        "<label for=\"{field_name}\">{label}</label>\n<input id=\"{field_name}\" name=\"{field_name}\" value=\"{value}\">\n",
        value = escape(current),
    );
    if let Some(msg) = error {
        html.push_str(&format!("<p class=\"error\">{msg}</p>\n"));
    }
    html
}

pub fn add_cafe_page(form: &CafeSubmission, errors: &FieldErrors, csrf_token: &str) -> String {
    let mut body = String::from("<h1>Add a cafe</h1>\n<form method=\"post\" action=\"/add_cafe\">\n");
    body.push_str(&format!(
        "<input type=\"hidden\" name=\"csrf_token\" value=\"{}\">\n",
        escape(csrf_token),
    ));
    body.push_str(&text_field("cafe_name", "Cafe name", &form.cafe_name, errors.name));
    body.push_str(&select_field("coffee", Scale::Coffee, &form.coffee, errors.coffee));
    body.push_str(&select_field("wifi", Scale::Wifi, &form.wifi, errors.wifi));
    body.push_str(&select_field("socket", Scale::Socket, &form.socket, errors.socket));
    body.push_str(&text_field("location", "Location", &form.location, errors.location));
    body.push_str("<p><button type=\"submit\">Submit</button></p>\n</form>");
    layout("Add a cafe", &body)
}

pub fn not_found_page(message: &str) -> String {
    layout(
        "Not found",
        &format!(
            "<h1>Not found</h1>\n<p>{}</p>\n<p><a href=\"/list_of_cafes\">Back to the list</a></p>",
            escape(message)
        ),
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Something went wrong",
        &format!(
            "<h1>Something went wrong</h1>\n<p>{}</p>\n<p><a href=\"/\">Back home</a></p>",
            escape(message)
        ),
    )
}
