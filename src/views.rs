//! Server-rendered HTML pages. Four small static forms; no template engine.

// Output escaping for values interpolated into a page, the way a template
// engine's default output mode would do it.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn index() -> String {
    page(
        "Welcome",
        "<h1>Welcome</h1>\n<p><a href=\"/register\">Register</a> or <a href=\"/login\">Log in</a></p>",
    )
}

pub fn register_form() -> String {
    page(
        "Register",
        concat!(
            "<h1>Register</h1>\n",
            "<form method=\"post\" action=\"/register\">\n",
            "<label>Username <input type=\"text\" name=\"username\"></label><br>\n",
            "<label>Email <input type=\"email\" name=\"email\"></label><br>\n",
            "<label>Password <input type=\"password\" name=\"password\"></label><br>\n",
            "<button type=\"submit\">Register</button>\n",
            "</form>\n",
            "<p><a href=\"/login\">Already have an account?</a></p>"
        ),
    )
}

/// Login form, optionally with an inline error line above it.
pub fn login_form(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape(msg)),
        None => String::new(),
    };
    page(
        "Login",
        &format!(
            concat!(
                "<h1>Login</h1>\n",
                "{}",
                "<form method=\"post\" action=\"/login\">\n",
                "<label>Email <input type=\"email\" name=\"email\"></label><br>\n",
                "<label>Password <input type=\"password\" name=\"password\"></label><br>\n",
                "<button type=\"submit\">Log in</button>\n",
                "</form>\n",
                "<p><a href=\"/register\">Need an account?</a></p>"
            ),
            error_html
        ),
    )
}

pub fn dashboard(username: &str) -> String {
    page(
        "Dashboard",
        &format!(
            "<h1>Dashboard</h1>\n<p>Hello, {}!</p>\n<p><a href=\"/logout\">Log out</a></p>",
            escape(username)
        ),
    )
}
