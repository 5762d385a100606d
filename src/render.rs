//! HTML rendering for the admin view.
//!
//! Kept apart from the handlers so the page layout can change without
//! touching request plumbing. All user-supplied fields pass through
//! [`escape_html`] before they reach the page.

use crate::models::{Grievance, sort_newest_first};

/// Escapes text for embedding in an HTML body or attribute value.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Grievance Admin Panel</title>
    <style>
        body { font-family: sans-serif; background-color: #f4f4f4; margin: 20px; color: #333; }
        .container { max-width: 800px; margin: auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { text-align: center; }
        .grievance-item { background-color: #fafafa; border: 1px solid #ddd; border-radius: 8px; padding: 15px; margin-bottom: 15px; position: relative; }
        .grievance-item p { margin: 5px 0; }
        .no-grievances { text-align: center; color: #777; }
        .delete-button { background-color: #c0392b; color: white; border: none; padding: 8px 15px; border-radius: 5px; cursor: pointer; position: absolute; top: 10px; right: 10px; }
        .clear-all-button { background-color: #555; color: white; padding: 12px 20px; border: none; border-radius: 8px; cursor: pointer; margin: 20px auto 0; display: block; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Grievance Admin Panel</h1>
        <div id="grievancesList">
"#;

const EMPTY_STATE: &str = r#"<p class="no-grievances">No grievances submitted yet.</p>
"#;

// The clear-all handler below repeats the empty-state markup verbatim.
const PAGE_TAIL: &str = r#"        </div>
        <button class="clear-all-button" onclick="clearAllGrievances()">Clear All Grievances</button>
    </div>
    <script>
        async function deleteGrievance(id) {
            if (!confirm('Delete this grievance?')) {
                return;
            }
            const response = await fetch('/admin/delete-grievance', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ id: id })
            });
            if (response.ok) {
                document.getElementById('grievance-' + id).remove();
            } else {
                alert('Failed to delete grievance.');
            }
        }

        async function clearAllGrievances() {
            if (!confirm('Clear ALL grievances? This cannot be undone.')) {
                return;
            }
            const response = await fetch('/admin/clear-all-grievances', { method: 'POST' });
            if (response.ok) {
                document.getElementById('grievancesList').innerHTML =
                    '<p class="no-grievances">No grievances submitted yet.</p>';
            } else {
                alert('Failed to clear grievances.');
            }
        }
    </script>
</body>
</html>
"#;

fn grievance_item(record: &Grievance) -> String {
    format!(
        r#"<div class="grievance-item" id="grievance-{id}">
    <button class="delete-button" onclick="deleteGrievance({id})">Delete</button>
    <p><strong>Title:</strong> {title}</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Mood:</strong> {mood}</p>
    <p><strong>Complaint:</strong> {complaint}</p>
</div>
"#,
        id = record.id,
        title = escape_html(&record.title),
        date = escape_html(&record.date),
        mood = escape_html(&record.mood),
        complaint = escape_html(&record.complaint),
    )
}

/// Renders the full admin page, newest records first.
pub fn admin_page(mut records: Vec<Grievance>) -> String {
    sort_newest_first(&mut records);

    let mut page = String::with_capacity(4096);
    page.push_str(PAGE_HEAD);
    if records.is_empty() {
        page.push_str(EMPTY_STATE);
    } else {
        for record in &records {
            page.push_str(&grievance_item(record));
        }
    }
    page.push_str(PAGE_TAIL);
    page
}
