use serde::Serialize;

/// Scores at or above this threshold render as favorable.
pub const FAVORABLE_SCORE: f64 = 80.0;
/// Scores at or above this threshold (and below favorable) render as caution.
pub const CAUTION_SCORE: f64 = 60.0;

/// Semantic style of a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Favorable,
    Caution,
    Unfavorable,
    Neutral,
}

/// Three-tier score mapping. A score that is not a number falls through to unfavorable.
pub fn score_tone(score: f64) -> Tone {
    if score >= FAVORABLE_SCORE {
        Tone::Favorable
    } else if score >= CAUTION_SCORE {
        Tone::Caution
    } else {
        Tone::Unfavorable
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "Approved" => Tone::Favorable,
        "Conditional" => Tone::Caution,
        "Declined" => Tone::Unfavorable,
        _ => Tone::Neutral,
    }
}

pub fn risk_tone(risk: &str) -> Tone {
    match risk {
        "Low" => Tone::Favorable,
        "Medium" => Tone::Caution,
        _ => Tone::Unfavorable,
    }
}

pub fn likelihood_tone(likelihood: &str) -> Tone {
    match likelihood {
        "High" => Tone::Favorable,
        "Medium" => Tone::Caution,
        _ => Tone::Unfavorable,
    }
}
