//! Pure presentation: style mappings, currency formatting, view models and text rendering for
//! the form and results screens.

pub mod currency;
pub mod render;
pub mod tone;
pub mod views;

pub use currency::format_usd;
pub use render::{render_form, render_form_header, render_results, Palette};
pub use tone::{likelihood_tone, risk_tone, score_tone, status_tone, Tone};
pub use views::{BadgeView, FormView, LenderView, NextStepView, ResultsView};
