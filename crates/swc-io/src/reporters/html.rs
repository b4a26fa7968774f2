//! HTML reporter: a self-contained page with inline CSS.
//!
//! One table row per neuron: name, findings with offending node ids, the
//! auxiliary soma image when there is one, and the engine version.

use swc_core::errors::SwcResult;
use swc_core::models::Report;

use super::{neuron_name, Reporter};

pub struct HtmlReporter {
    pub title: String,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self {
            title: "SWC QC Report".to_string(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn page(title: &str, reports: &[Report]) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{}</title>\n", Self::escape_html(title)));
        html.push_str("<style>\n");
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", Self::escape_html(title)));

        html.push_str("<table>\n");
        html.push_str(
            "<tr><th>Neuron</th><th>QC Errors</th><th>Soma Image</th><th>Engine Version</th></tr>\n",
        );
        for report in reports {
            Self::row(&mut html, report);
        }
        html.push_str("</table>\n</body>\n</html>\n");
        html
    }

    fn row(html: &mut String, report: &Report) {
        html.push_str("<tr>\n");
        html.push_str(&format!(
            "<td><b>{}</b></td>\n",
            Self::escape_html(neuron_name(report))
        ));

        if report.tests.is_empty() {
            html.push_str("<td class=\"no-error\">No errors found</td>\n");
        } else {
            html.push_str("<td class=\"error\"><ul>\n");
            for finding in &report.tests {
                html.push_str(&format!(
                    "<li><b>{}:</b> {}",
                    finding.test,
                    Self::escape_html(&finding.description)
                ));
                let ids = finding.offender_ids();
                if !ids.is_empty() {
                    let ids: Vec<String> = ids.iter().map(i64::to_string).collect();
                    html.push_str(&format!(" (Nodes: {})", ids.join(", ")));
                }
                html.push_str("</li>\n");
            }
            html.push_str("</ul></td>\n");
        }

        match &report.auxiliary_image_path {
            Some(path) => html.push_str(&format!(
                "<td><img src=\"{}\" alt=\"Soma image\"></td>\n",
                Self::escape_html(path)
            )),
            None => html.push_str("<td>No Image Available</td>\n"),
        }
        html.push_str(&format!(
            "<td>{}</td>\n",
            Self::escape_html(&report.engine_version)
        ));
        html.push_str("</tr>\n");
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, report: &Report) -> SwcResult<String> {
        let title = format!("QC Report for {}", neuron_name(report));
        Ok(Self::page(&title, std::slice::from_ref(report)))
    }

    fn render_batch(&self, reports: &[Report]) -> SwcResult<String> {
        Ok(Self::page(&self.title, reports))
    }
}

const INLINE_CSS: &str = r#"
body { font-family: Arial, sans-serif; font-size: 18px; }
table { width: 100%; border-collapse: collapse; font-size: 18px; }
table, th, td { border: 1px solid black; }
th, td { padding: 5px; text-align: left; vertical-align: top; }
th { background-color: #f2f2f2; }
img { max-width: 256px; height: auto; }
.error { color: red; font-weight: bold; }
.no-error { color: green; font-weight: bold; }
"#;
