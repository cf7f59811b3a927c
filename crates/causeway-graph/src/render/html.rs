//! Styled HTML panels, one per report section.

use causeway_core::models::ConfidenceBand;

use super::report::SuggestionReport;

const PANEL_STYLE: &str = "border:1px solid #d0d7de;border-radius:6px;padding:8px 12px;margin:8px 0;";

fn band_color(band: ConfidenceBand) -> &'static str {
    match band {
        ConfidenceBand::High => "#1a7f37",
        ConfidenceBand::Medium => "#9a6700",
        ConfidenceBand::Low => "#cf222e",
    }
}

/// Render a report as a self-contained HTML fragment.
pub fn render_html(report: &SuggestionReport) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"causeway-report\" data-kind=\"{}\">\n",
        report.kind
    ));
    html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&report.title)));
    html.push_str(&format!(
        "  <p class=\"summary\">{}</p>\n",
        escape_html(&report.summary)
    ));
    for section in &report.sections {
        html.push_str(&format!("  <div class=\"panel\" style=\"{PANEL_STYLE}\">\n"));
        html.push_str(&format!("    <h4>{}</h4>\n    <ul>\n", escape_html(&section.title)));
        for entry in &section.entries {
            html.push_str(&format!(
                "      <li class=\"band-{band}\" style=\"color:{color}\">{text}",
                band = entry.band,
                color = band_color(entry.band),
                text = escape_html(&entry.text),
            ));
            if let Some(detail) = &entry.detail {
                html.push_str(&format!("<br><small>{}</small>", escape_html(detail)));
            }
            html.push_str("</li>\n");
        }
        html.push_str("    </ul>\n  </div>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }
}
