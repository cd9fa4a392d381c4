//! Sentiment labels and result types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment classes, in model output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All labels, indexed by model output position
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Label for a model output index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label string as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Index of the largest value; ties go to the lowest index.
///
/// Returns `None` for an empty slice. NaN never wins a comparison.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// One classified comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub comment: String,
    pub sentiment: Sentiment,
}

/// Label counts and percentages over a set of predictions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

impl SentimentSummary {
    /// Count labels in `predictions`
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        let mut summary = Self {
            total: predictions.len(),
            ..Default::default()
        };
        for prediction in predictions {
            match prediction.sentiment {
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
                Sentiment::Positive => summary.positive += 1,
            }
        }
        summary
    }

    /// Number of predictions with `sentiment`
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
            Sentiment::Positive => self.positive,
        }
    }

    /// Share of predictions with `sentiment`, in percent (0 when empty)
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 * 100.0 / self.total as f64
    }
}
