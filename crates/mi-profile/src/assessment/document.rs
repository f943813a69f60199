//! Self-contained printable report document (A4). The structure mirrors the
//! on-screen report: profile table, ranked bars for all eight domains, then
//! expanded insight and tips for the top two.

use std::fmt::Write as _;

use super::report::AssessmentReport;

/// Render the report as a standalone HTML page suitable for print export.
pub fn render_document(report: &AssessmentReport) -> String {
    let mut rows = String::new();
    for (index, entry) in report.scores.iter().enumerate() {
        let medal = match index {
            0 => "\u{1F947} ",
            1 => "\u{1F948} ",
            2 => "\u{1F949} ",
            _ => "",
        };
        let _ = write!(
            rows,
            r#"      <tr>
        <td>{medal}{label}</td>
        <td class="pct">{percent:.1}%</td>
        <td><div class="track"><div class="bar" style="width: {percent:.1}%;"></div></div></td>
      </tr>
"#,
            label = escape(entry.domain.label()),
            percent = entry.percent,
        );
    }

    let mut highlight_blocks = String::new();
    for highlight in &report.highlights {
        let mut tip_items = String::new();
        for tip in highlight.tips {
            let _ = write!(tip_items, "        <li>\u{2713} {}</li>\n", escape(tip));
        }
        let _ = write!(
            highlight_blocks,
            r#"  <div class="highlight">
    <h3><span class="rank">{rank}</span>{label} Intelligence</h3>
    <p>{insight}</p>
    <div class="tips">
      <h4>Study Tips:</h4>
      <ul>
{tip_items}      </ul>
    </div>
  </div>
"#,
            rank = highlight.rank,
            label = escape(highlight.label),
            insight = escape(highlight.insight),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
    @page {{ size: A4; margin: 20mm; }}
    body {{ font-family: Arial, sans-serif; color: #111827; line-height: 1.6; margin: 0; }}
    h1 {{ font-size: 32px; color: #3b82f6; margin-bottom: 10px; }}
    h2 {{ font-size: 24px; margin-top: 30px; border-bottom: 3px solid #3b82f6; padding-bottom: 10px; }}
    table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
    td, th {{ padding: 12px; border-bottom: 1px solid #e5e7eb; text-align: left; }}
    td.pct {{ text-align: right; }}
    .profile td:first-child {{ font-weight: 600; color: #4b5563; width: 30%; }}
    .header {{ background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; padding: 30px; border-radius: 10px; text-align: center; margin-bottom: 30px; }}
    .track {{ background: #e5e7eb; height: 20px; border-radius: 10px; overflow: hidden; }}
    .bar {{ background: linear-gradient(135deg, #3b82f6, #6366f1); height: 100%; border-radius: 10px; }}
    .highlight {{ margin-bottom: 30px; page-break-inside: avoid; }}
    .highlight h3 {{ color: #3b82f6; font-size: 20px; }}
    .rank {{ background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; width: 32px; height: 32px; border-radius: 50%; display: inline-flex; align-items: center; justify-content: center; margin-right: 10px; font-size: 16px; }}
    .tips {{ margin-left: 40px; }}
    .tips ul {{ line-height: 1.8; list-style: none; padding-left: 0; }}
    .footer {{ text-align: center; color: #6b7280; font-size: 12px; margin-top: 40px; padding-top: 20px; border-top: 1px solid #e5e7eb; }}
  </style>
</head>
<body>
  <div class="header">
    <h1 style="color: white; margin: 0;">MI Assessment Report</h1>
    <p class="tagline">Enlightening Minds</p>
  </div>

  <h2>Profile Information</h2>
  <table class="profile">
    <tr><td>Name</td><td>{name}</td></tr>
    <tr><td>Date of Birth</td><td>{dob}</td></tr>
    <tr><td>Email</td><td>{email}</td></tr>
    <tr><td>Contact No.</td><td>{phone}</td></tr>
    <tr><td>City</td><td>{city}</td></tr>
  </table>

  <h2>Your Intelligence Strengths</h2>
  <table>
    <thead>
      <tr><th>Domain</th><th style="text-align: right;">Score</th><th>Visual</th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>

  <div style="page-break-before: always;"></div>

  <h2>Your Top Strengths &amp; Study Tips</h2>
{highlight_blocks}
  <div class="footer">
    <p>Generated on {generated_on} &bull; MI Questionnaire v1.0</p>
  </div>
</body>
</html>
"#,
        name = escape(&report.participant.name),
        dob = report.participant.date_of_birth.format("%B %-d, %Y"),
        email = escape(&report.participant.email),
        phone = escape(&report.participant.phone),
        city = escape(&report.participant.city),
        generated_on = report.completed_on.format("%B %-d, %Y"),
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
