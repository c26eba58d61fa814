// Static HTML page for the dashboard
use crate::domain::dashboard::{ChartArtifact, Dashboard};
use std::fmt::Write;

const LEFT_COLUMN_STYLE: &str = "width: 45%; float: left;";
const RIGHT_COLUMN_STYLE: &str = "width: 45%; float: right;";

/// Render the dashboard as a standalone page. Image sources are bare file names,
/// so the page must sit next to the charts.
pub fn render_dashboard_page(dashboard: &Dashboard) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n    <body>\n");
    let _ = writeln!(html, "        <h1>{}</h1>", dashboard.title);
    push_column(&mut html, LEFT_COLUMN_STYLE, &dashboard.left_column);
    push_column(&mut html, RIGHT_COLUMN_STYLE, &dashboard.right_column);
    html.push_str("    </body>\n</html>");
    html
}

fn push_column(html: &mut String, style: &str, charts: &[ChartArtifact]) {
    let _ = writeln!(html, "        <div style=\"{}\">", style);
    for chart in charts {
        let _ = writeln!(
            html,
            "            <img src=\"{}\" alt=\"{}\">",
            chart.file_name(),
            chart.alt_text()
        );
    }
    html.push_str("        </div>\n");
}
