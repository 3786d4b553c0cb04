use serde_json::{json, Value};

/// Message as returned by the provider's messages API
pub fn mock_message(name: &str, email: &str, subject: &str, body: &str) -> Value {
    json!({
        "id": "84umizq7c4jtrew491brpa6iu",
        "object": "message",
        "account_id": "awa6ltos76vz5hvphkp8k17nt",
        "thread_id": "5vryyrki4fqt7am31uso27t3f",
        "from": [{ "name": name, "email": email }],
        "to": [{ "name": "Ben Bitdiddle", "email": "ben@x.com" }],
        "subject": subject,
        "body": body,
        "unread": true,
    })
}
