//! Terminal rendering of a treatment plan.
//!
//! Entries are grouped under the same headings a user sees on the profile form's result
//! page. Grouping is driven by each entry's [`Section`], never by message text.

use careplan_core::{BmiResult, Recommendation, Section, TreatmentPlan};

const THANKS: &str = "Thank you for providing your health information. Here's your \
personalized treatment plan based on your responses.";

const DISCLAIMER: &str = "This treatment plan is generated based on the information you \
provided and is meant for general guidance only. It should not replace professional medical \
advice. Please consult with healthcare professionals for personalized medical \
recommendations.";

/// Presentation choices. The engine never sees these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenterConfig {
    pub show_greeting: bool,
    pub show_disclaimer: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            show_greeting: true,
            show_disclaimer: true,
        }
    }
}

fn label(section: Section) -> Option<&'static str> {
    match section {
        Section::Weight => Some("Weight Recommendation"),
        Section::Sleep => Some("Sleep"),
        Section::Exercise => Some("Exercise"),
        Section::Stress => Some("Stress Management"),
        Section::Preventive | Section::Diet => None,
    }
}

fn entry(rec: &Recommendation) -> String {
    match label(rec.section) {
        Some(label) => format!("  {label}: {}", rec.text),
        None => format!("  - {}", rec.text),
    }
}

fn bmi_lines(bmi: &BmiResult) -> [String; 2] {
    [
        format!(
            "  Your BMI is: {} [{}]",
            bmi.display_value(),
            bmi.category.indicator().as_str()
        ),
        format!("  Category: {}", bmi.category.label()),
    ]
}

/// Render `plan` for `full_name` as plain text.
///
/// The BMI block is omitted when the plan carries no BMI. The "Preventive Measures" and
/// "Food Recommendations" headings are always printed, even when a section is empty.
pub fn render_plan(full_name: &str, plan: &TreatmentPlan, config: &PresenterConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    if config.show_greeting {
        lines.push(format!("Hello {full_name}!"));
        lines.push(THANKS.to_string());
        lines.push(String::new());
    }

    if let Some(bmi) = plan.bmi() {
        lines.push("BMI Calculation".to_string());
        lines.extend(bmi_lines(bmi));
        lines.extend(plan.section(Section::Weight).map(entry));
        lines.push(String::new());
    }

    lines.push("Lifestyle Recommendations".to_string());
    for section in [Section::Sleep, Section::Exercise, Section::Stress] {
        lines.extend(plan.section(section).map(entry));
    }
    lines.push(String::new());

    lines.push("Preventive Measures".to_string());
    lines.extend(plan.section(Section::Preventive).map(entry));
    lines.push(String::new());

    lines.push("Food Recommendations".to_string());
    lines.extend(plan.section(Section::Diet).map(entry));

    if config.show_disclaimer {
        lines.push(String::new());
        lines.push("Disclaimer".to_string());
        lines.push(format!("  {DISCLAIMER}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
