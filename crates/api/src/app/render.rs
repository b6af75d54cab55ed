//! The upload page.
//!
//! Rendered with plain string building; every piece of user-supplied text
//! goes through [`escape_html`].

use std::fmt::Write as _;

use siteledger_inventory::ForecastResult;
use siteledger_labour::WageResult;

/// What the page shows below the form.
#[derive(Debug, Default)]
pub struct PageModel {
    pub forecast: Option<ForecastResult>,
    pub wages: Option<WageResult>,
    pub error: Option<String>,
}

impl PageModel {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Site Ledger</title>
<style>
body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
section { margin-top: 2rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: .3rem .7rem; text-align: left; }
td.num { text-align: right; }
.error { color: #a40000; border: 1px solid #a40000; padding: .5rem 1rem; }
</style>
</head>
<body>
<h1>Site Ledger</h1>
<form method="post" enctype="multipart/form-data">
<p><label>Inventory history (CSV: Date, Stock_Used, Current_Stock)<br>
<input type="file" name="inventory_file" accept=".csv,text/csv"></label></p>
<p><label>Labour records (CSV: Name, Profession, Days_Worked, Daily_Wage)<br>
<input type="file" name="labour_file" accept=".csv,text/csv"></label></p>
<p><button type="submit">Calculate</button></p>
</form>
"#;

const TAIL: &str = "</body>\n</html>\n";

pub fn page(model: &PageModel) -> String {
    let mut html = String::from(HEAD);

    if let Some(error) = &model.error {
        let _ = writeln!(html, r#"<p class="error">{}</p>"#, escape_html(error));
    }

    if let Some(f) = &model.forecast {
        let _ = write!(
            html,
            "<section id=\"inventory\">\n<h2>Inventory forecast</h2>\n\
             <p>Predicted usage tomorrow: <strong>{:.2}</strong></p>\n\
             <p>Days of stock left: <strong>{:.1}</strong></p>\n</section>\n",
            f.predicted_usage, f.days_left
        );
    }

    if let Some(w) = &model.wages {
        html.push_str(
            "<section id=\"labour\">\n<h2>Labour wages</h2>\n<table>\n\
             <tr><th>Name</th><th>Profession</th><th>Monthly wage</th></tr>\n",
        );
        for line in &w.lines {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>",
                escape_html(&line.name),
                escape_html(&line.profession),
                line.monthly_wage
            );
        }
        let _ = write!(
            html,
            "</table>\n<p>Total labour cost: <strong>{}</strong></p>\n</section>\n",
            w.total_labour_cost
        );
    }

    html.push_str(TAIL);
    html
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
