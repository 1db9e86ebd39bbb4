//! Server-rendered HTML pages.
//!
//! Small builder functions over string templates; every piece of
//! user-supplied text passes through [`esc`] before it reaches a page.

use askama_escape::{Html, escape};
use gripe_core::ticket::Ticket;

fn esc(s: &str) -> String { escape(s, Html).to_string() }

/// Shared page skeleton.
fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"utf-8\">\n\
     <title>{title}</title>\n\
     </head>\n\
     <body>\n{body}\n</body>\n\
     </html>\n"
  )
}

/// A one-line user-facing message with a navigation link.
pub fn message_page(heading: &str, href: &str, label: &str) -> String {
  page(
    heading,
    &format!("<h1>{}</h1>\n<a href=\"{href}\">{label}</a>", esc(heading)),
  )
}

/// `GET /` — the intake form.
pub fn intake_form() -> String {
  page(
    "Log a Complaint",
    "<h1>Log a Complaint</h1>\n\
     <form action=\"/submit\" method=\"post\">\n\
     <p><label>Complaint<br>\
     <textarea name=\"complaint\" rows=\"6\" cols=\"60\" required></textarea></label></p>\n\
     <p><label>Call Center Response<br>\
     <textarea name=\"response\" rows=\"6\" cols=\"60\" required></textarea></label></p>\n\
     <p><label>Valid complaint?\n\
     <select name=\"validity\">\n\
     <option value=\"unknown\" selected>Unknown</option>\n\
     <option value=\"yes\">Yes</option>\n\
     <option value=\"no\">No</option>\n\
     </select></label></p>\n\
     <p><button type=\"submit\">Submit</button></p>\n\
     </form>\n\
     <p><a href=\"/viewlog\">View the complaint log</a></p>",
  )
}

/// `GET /thank-you?id=` — the post-submission confirmation.
pub fn thank_you_page(id: i64) -> String {
  page(
    "Thank You",
    &format!(
      "<h1>Thank you.</h1>\n\
       <p>Your complaint has been logged as ticket {id}.</p>\n\
       <p><a href=\"/view?id={id}\">View your ticket</a></p>\n\
       <a href=\"/\">Go back</a>"
    ),
  )
}

/// `GET /view?id=` — a single ticket, with inline update forms.
pub fn ticket_page(ticket: &Ticket) -> String {
  let id = ticket.id;
  let body = format!(
    "<h1>Ticket {id}</h1>\n\
     <p><b>Validity:</b> {validity}</p>\n\
     <p><b>Entered:</b> {entry_date}</p>\n\
     <h2>Complaint</h2>\n<pre>{complaint}</pre>\n\
     <h2>Call Center Response</h2>\n<pre>{response}</pre>\n\
     <form action=\"/update_complaint\" method=\"post\">\n\
     <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
     <p><label>Add to complaint<br>\
     <textarea name=\"update_complaint\" rows=\"3\" cols=\"60\"></textarea></label></p>\n\
     <p><button type=\"submit\">Update complaint</button></p>\n\
     </form>\n\
     <form action=\"/update_response\" method=\"post\">\n\
     <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
     <p><label>Add to action taken<br>\
     <textarea name=\"update_response\" rows=\"3\" cols=\"60\"></textarea></label></p>\n\
     <p><button type=\"submit\">Update action taken</button></p>\n\
     </form>\n\
     <a href=\"/\">Go back</a>",
    validity = ticket.validity.as_str(),
    entry_date = ticket.entry_date.format("%Y-%m-%d %H:%M:%S"),
    complaint = esc(ticket.complaint.trim()),
    response = esc(ticket.response.trim()),
  );
  page(&format!("Ticket {id}"), &body)
}

/// `GET /viewlog` — the listing shell. The table body is populated
/// client-side from `/fetch`.
pub fn viewlog_page() -> String {
  page(
    "Complaint Log",
    r#"<h1>Complaint Log</h1>
<table border="1">
<thead>
<tr><th>id</th><th>validity</th><th>entry_date</th><th>complaint</th><th>response</th></tr>
</thead>
<tbody id="log"></tbody>
</table>
<p><a href="/download">Download CSV</a> | <a href="/">Go back</a></p>
<script>
fetch('/fetch')
  .then((r) => r.json())
  .then((rows) => {
    const body = document.getElementById('log');
    for (const row of rows) {
      const tr = document.createElement('tr');
      for (const key of ['id', 'validity', 'entry_date', 'complaint', 'response']) {
        const td = document.createElement('td');
        if (key === 'id') {
          const a = document.createElement('a');
          a.href = '/view?id=' + row.id;
          a.textContent = row.id;
          td.appendChild(a);
        } else {
          td.textContent = row[key];
        }
        tr.appendChild(td);
      }
      body.appendChild(tr);
    }
  });
</script>"#,
  )
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use gripe_core::ticket::Validity;

  use super::*;

  fn sample() -> Ticket {
    Ticket {
      id:         1,
      complaint:  "late <b>delivery</b>".into(),
      response:   "apologized & refunded".into(),
      validity:   Validity::Unknown,
      entry_date: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap(),
    }
  }

  #[test]
  fn ticket_page_escapes_user_text() {
    // askama_escape emits numeric character references.
    let html = ticket_page(&sample());
    assert!(html.contains("late &#60;b&#62;delivery&#60;/b&#62;"));
    assert!(html.contains("apologized &#38; refunded"));
    assert!(!html.contains("late <b>delivery</b>"));
  }

  #[test]
  fn ticket_page_shows_unknown_validity() {
    let html = ticket_page(&sample());
    assert!(html.contains("<b>Validity:</b> unknown"));
  }

  #[test]
  fn message_page_carries_link() {
    let html = message_page("Complaint not found.", "/", "Go back");
    assert!(html.contains("<h1>Complaint not found.</h1>"));
    assert!(html.contains("<a href=\"/\">Go back</a>"));
  }
}
