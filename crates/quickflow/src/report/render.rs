use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::tone::Tone;
use super::views::{FormView, ResultsView};

const RULE_WIDTH: usize = 60;
const STRENGTH_MARK: &str = "✓";
const CONCERN_MARK: &str = "⚠";

/// Decides whether rendered text carries ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print-friendly output without escape codes.
    pub const fn plain() -> Self {
        Self { color: false }
    }

    pub fn tone(&self, text: &str, tone: Tone) -> String {
        let color = match tone {
            Tone::Favorable => Color::Green,
            Tone::Caution => Color::Yellow,
            Tone::Unfavorable => Color::Red,
            Tone::Neutral => Color::Grey,
        };
        self.paint(text, color)
    }

    pub fn badge(&self, text: &str, tone: Tone) -> String {
        self.tone(&format!("[{text}]"), tone)
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Blue)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn render_form_header(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{}", palette.heading("QuickFlow Capital"))?;
    writeln!(
        out,
        "{}",
        palette.muted("AI-Powered Business Loan Prequalification")
    )?;
    rule(out)
}

/// Full form screen: every field with its current value, the error banner, the submit control.
pub fn render_form(out: &mut impl Write, view: &FormView, palette: &Palette) -> io::Result<()> {
    render_form_header(out, palette)?;

    for section in &view.sections {
        writeln!(out)?;
        writeln!(out, "{}", palette.heading(section.label))?;
        for field in &section.fields {
            let value = if field.value.is_empty() {
                palette.muted(field.placeholder)
            } else {
                field.value.clone()
            };
            writeln!(out, "  {:<24}{}", field.label, value)?;
        }
    }

    if let Some(error) = &view.error {
        writeln!(out)?;
        writeln!(out, "{}", palette.tone(&format!("! {error}"), Tone::Unfavorable))?;
    }

    writeln!(out)?;
    let control = format!("[ {} ]", view.submit_label);
    if view.submit_disabled {
        writeln!(out, "{}", palette.muted(&control))
    } else {
        writeln!(out, "{}", palette.accent(&control))
    }
}

pub fn render_results(
    out: &mut impl Write,
    view: &ResultsView,
    palette: &Palette,
) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{}", palette.heading("Loan Prequalification Results"))?;
    writeln!(out, "{}", palette.muted("AI-Powered Analysis Complete"))?;
    if let Some(id) = &view.application_id {
        writeln!(out, "Application ID: {id}")?;
    }
    rule(out)?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Qualification Score"))?;
    writeln!(
        out,
        "{}",
        palette.muted("Based on AI analysis of your business profile")
    )?;
    writeln!(
        out,
        "  {} {}",
        palette.tone(&view.score_label, view.score_tone),
        palette.muted("/ 100")
    )?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Status"))?;
    writeln!(out, "  {}", palette.badge(&view.status.label, view.status.tone))?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Risk Assessment"))?;
    writeln!(out, "  {}", palette.badge(&view.risk.label, view.risk.tone))?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Recommended Loan Amount"))?;
    writeln!(
        out,
        "  {}",
        palette.tone(&view.recommended_amount, Tone::Favorable)
    )?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Interest Rate Range"))?;
    writeln!(out, "  {}", palette.accent(&view.interest_rate_range))?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("AI Analysis Summary"))?;
    writeln!(out, "  {}", view.analysis)?;

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Key Strengths"))?;
    for strength in &view.strengths {
        writeln!(
            out,
            "  {} {}",
            palette.tone(STRENGTH_MARK, Tone::Favorable),
            strength
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Key Concerns"))?;
    for concern in &view.concerns {
        writeln!(
            out,
            "  {} {}",
            palette.tone(CONCERN_MARK, Tone::Caution),
            concern
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Matched Lenders"))?;
    for lender in &view.lenders {
        writeln!(out, "  {}", palette.heading(&lender.name))?;
        writeln!(out, "    {}", lender.lender_type)?;
        writeln!(out, "    {}", palette.accent(&lender.rate_label))?;
        writeln!(
            out,
            "    {}  {}",
            lender.match_label,
            palette.badge(&lender.likelihood.label, lender.likelihood.tone)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Recommended Next Steps"))?;
    for step in &view.next_steps {
        writeln!(out, "  {}. {}", step.number, step.text)?;
    }

    writeln!(out)?;
    rule(out)
}
