/*!
 * Standalone HTML report for line length checks.
 *
 * The report is one self-contained file: styles and the small edit/reset
 * script are inlined, nothing is fetched. Overflowing characters (those past
 * the limit on a line) are wrapped in `<span class="overflow">`.
 */

use chrono::{DateTime, Local};

use crate::validation::length::{split_at_limit, CheckSummary, Segment};

/// Escape text for HTML content, and for attribute values when `quote` is set
pub fn escape_html(text: &str, quote: bool) -> String {
    let mut result = String::with_capacity(text.len() + 16);

    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if quote => result.push_str("&quot;"),
            '\'' if quote => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }

    result
}

/// Render the target of a segment line by line, highlighting the overflow
pub fn highlight_target(segment: &Segment, limit: usize) -> String {
    let mut html = String::new();

    for (idx, line) in segment.target_lines().iter().enumerate() {
        if segment.overflow_line_indices().contains(&idx) {
            let (kept, overflow) = split_at_limit(line, limit);
            html.push_str(&escape_html(kept, false));
            html.push_str("<span class=\"overflow\">");
            html.push_str(&escape_html(overflow, false));
            html.push_str("</span>");
        } else {
            html.push_str(&escape_html(line, false));
        }
        html.push_str("<br>");
    }

    html
}

/// Everything needed to render one report
pub struct Report<'a> {
    summary: &'a CheckSummary,
    source_name: String,
    title: String,
    include_passing: bool,
    generated_at: DateTime<Local>,
}

impl<'a> Report<'a> {
    pub fn new(summary: &'a CheckSummary, source_name: impl Into<String>) -> Self {
        Self {
            summary,
            source_name: source_name.into(),
            title: "MK Line Length Check".to_string(),
            include_passing: false,
            generated_at: Local::now(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// List passing segments as well as violations
    pub fn include_passing(mut self, include: bool) -> Self {
        self.include_passing = include;
        self
    }

    pub fn generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = at;
        self
    }

    /// One-line verdict shown above the table
    pub fn summary_text(&self) -> String {
        let limit = self.summary.limit;
        match self.summary.violation_count() {
            0 => format!("NO SEGMENTS EXCEED THE LIMIT OF {} CHARACTERS PER LINE.", limit),
            count => format!(
                "Found {} segments with at least one line longer than {} characters.",
                count, limit
            ),
        }
    }

    fn listed_segments(&self) -> impl Iterator<Item = &Segment> {
        let include_passing = self.include_passing;
        self.summary
            .segments
            .iter()
            .filter(move |s| include_passing || s.overflow())
    }

    fn render_row(&self, segment: &Segment) -> String {
        let target_html = highlight_target(segment, self.summary.limit);
        let source_html = escape_html(segment.source_text(), false).replace('\n', "<br>");
        let row_class = if segment.overflow() { "row-overflow" } else { "row-ok" };

        format!(
            r#"
        <tr class="{row_class}">
            <td class="cell-id" title="{full_id}">{short_id}</td>
            <td class="cell-source">{source_html}</td>
            <td class="cell-target">
                <div class="target-container" data-original-html="{original}">
                    <div class="target-text" contenteditable="false">{target_html}</div>
                    <div class="target-actions">
                        <button class="icon-btn edit-btn" title="Toggle edit">&#x270F;&#xFE0F;</button>
                        <button class="icon-btn reset-btn" title="Reset to original">&#x27F2;</button>
                    </div>
                </div>
            </td>
            <td class="cell-maxlen">{max_len}</td>
            <td class="cell-linelens">{segment_len}</td>
        </tr>"#,
            row_class = row_class,
            full_id = escape_html(segment.id(), true),
            short_id = escape_html(segment.short_id(), false),
            source_html = source_html,
            original = escape_html(&target_html, true),
            target_html = target_html,
            max_len = segment.max_line_length(),
            segment_len = segment.segment_length(),
        )
    }

    /// Render the complete HTML document
    pub fn render(&self) -> String {
        let mut rows_block = String::new();
        for segment in self.listed_segments() {
            rows_block.push_str(&self.render_row(segment));
        }

        let limit = self.summary.limit;
        let title = escape_html(&self.title, false);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title} - limit {limit}</title>
<style>{style}</style>
<script>{script}</script>
</head>
<body>
<header>
    <div>
        <h1>{title}<span class="version-pill">v{version}</span></h1>
        <div class="subheader">
            Source file: <strong>{source_name}</strong> &middot;
            Limit per line: <strong>{limit} characters</strong> &middot;
            Segments checked: <strong>{checked}</strong>
        </div>
    </div>
</header>
<main>
    <div class="summary">
        <strong>{summary_text}</strong>
    </div>

    <div class="table-wrapper">
        <table id="resultsTable">
            <thead>
                <tr>
                    <th>ID</th>
                    <th>Source</th>
                    <th>Target (overflow highlighted)</th>
                    <th>Line length</th>
                    <th>Segment length</th>
                </tr>
            </thead>
            <tbody>{rows_block}
            </tbody>
        </table>
    </div>

    <div class="footer-note">
        Overflow characters beyond the configured limit are highlighted in yellow.
        Generated {generated_at}.
    </div>
</main>
</body>
</html>
"#,
            title = title,
            limit = limit,
            style = REPORT_STYLE,
            script = REPORT_SCRIPT,
            version = env!("CARGO_PKG_VERSION"),
            source_name = escape_html(&self.source_name, false),
            checked = self.summary.segments.len(),
            summary_text = self.summary_text(),
            rows_block = rows_block,
            generated_at = self.generated_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

const REPORT_STYLE: &str = r#"
    body {
        margin: 0;
        padding: 0;
        font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
        background-color: #050608;
        color: #f5f5f5;
    }
    header {
        padding: 20px 32px;
        background: linear-gradient(135deg, #10131a, #151a24);
        border-bottom: 1px solid #262b36;
    }
    h1 {
        margin: 0 0 4px 0;
        font-size: 22px;
        letter-spacing: 0.03em;
    }
    .version-pill {
        display: inline-block;
        margin-left: 8px;
        padding: 2px 8px;
        border-radius: 999px;
        background: #1f2937;
        color: #cbd5f5;
        font-size: 11px;
        text-transform: uppercase;
        letter-spacing: 0.08em;
    }
    .subheader {
        font-size: 13px;
        color: #9aa0b5;
    }
    main {
        padding: 16px 32px 32px 32px;
    }
    .summary {
        margin-bottom: 16px;
        font-size: 14px;
        color: #e5e7eb;
    }
    .table-wrapper {
        border-radius: 16px;
        border: 1px solid #1f2933;
        background: radial-gradient(circle at top left, #111827 0, #020617 45%);
        box-shadow: 0 14px 40px rgba(0,0,0,0.8);
        overflow: hidden;
    }
    table {
        width: 100%;
        border-collapse: collapse;
        font-size: 13px;
    }
    thead {
        background: linear-gradient(90deg, #111827, #020617);
    }
    th, td {
        padding: 8px 10px;
        border-bottom: 1px solid #111827;
        vertical-align: top;
    }
    th {
        text-align: left;
        font-weight: 600;
        color: #9ca3af;
        font-size: 12px;
        text-transform: uppercase;
        letter-spacing: 0.08em;
        white-space: nowrap;
    }
    tbody tr:nth-child(even) { background-color: rgba(15,23,42,0.7); }
    tbody tr:nth-child(odd) { background-color: rgba(3,7,18,0.9); }
    tbody tr:hover { background-color: rgba(55,65,81,0.8); }
    tbody tr.row-ok .cell-maxlen { color: #34d399; }
    .cell-id {
        width: 60px;
        font-weight: 600;
        color: #e5e7eb;
        white-space: nowrap;
    }
    .cell-source { width: 30%; color: #d1d5db; }
    .cell-target { width: 40%; color: #f9fafb; }
    .cell-maxlen {
        width: 90px;
        text-align: right;
        font-variant-numeric: tabular-nums;
        color: #f97316;
        font-weight: 600;
    }
    .cell-linelens {
        width: 110px;
        text-align: right;
        font-variant-numeric: tabular-nums;
        color: #9ca3af;
    }
    .overflow {
        background-color: #ffff00;
        color: #000;
        font-weight: 600;
        padding: 0 1px;
    }
    .footer-note {
        margin-top: 18px;
        font-size: 11px;
        color: #6b7280;
    }
    .target-container { position: relative; }
    .target-text[contenteditable="true"] {
        outline: 1px dashed #6ec1ff;
        outline-offset: 2px;
        background-color: rgba(15, 23, 42, 0.6);
    }
    .target-actions {
        margin-top: 6px;
        display: flex;
        gap: 4px;
        font-size: 11px;
    }
    .icon-btn {
        border: 1px solid #374151;
        background-color: #111827;
        color: #e5e7eb;
        border-radius: 999px;
        padding: 2px 6px;
        cursor: pointer;
        font-size: 11px;
        line-height: 1;
    }
    .icon-btn:hover { background-color: #1f2937; }
"#;

const REPORT_SCRIPT: &str = r#"
document.addEventListener('click', function(event) {
    const button = event.target.closest('.edit-btn, .reset-btn');
    if (!button) return;
    const container = button.closest('.target-container');
    const textDiv = container && container.querySelector('.target-text');
    if (!textDiv) return;

    if (button.classList.contains('edit-btn')) {
        const editable = textDiv.getAttribute('contenteditable') === 'true';
        textDiv.setAttribute('contenteditable', editable ? 'false' : 'true');
        if (!editable) textDiv.focus();
        return;
    }

    const originalHtml = container.getAttribute('data-original-html');
    if (originalHtml != null) {
        textDiv.innerHTML = originalHtml;
    }
    textDiv.setAttribute('contenteditable', 'false');
});
"#;
