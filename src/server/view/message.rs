use crate::server::model::message::Message;

/// Render a message as the inbox HTML fragment.
///
/// Sender names & addresses, subject and body all come from the provider and are escaped
/// before interpolation.
pub fn render_message(message: &Message) -> String {
    let mut html = String::from("<html><h1>Here's a message from your inbox:</h1><b>From:</b> ");

    for sender in &message.from {
        html.push_str(&format!(
            "{} &lt;{}&gt;",
            html_escape(sender.name.as_deref().unwrap_or_default()),
            html_escape(&sender.email)
        ));
    }

    html.push_str("<br /><b>Subject:</b> ");
    html.push_str(&html_escape(message.subject.as_deref().unwrap_or_default()));
    html.push_str("<br /><b>Body:</b> ");
    html.push_str(&html_escape(message.body.as_deref().unwrap_or_default()));
    html.push_str("</html>");

    html
}

/// Escape HTML special characters.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
