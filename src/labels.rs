//! Axis label generation strategies.
//!
//! Labels adapt their count to the available pixel span and their numeric
//! precision to the value range, so axes stay readable regardless of data
//! magnitude. A fixed list can stand in wherever generated labels are not
//! wanted.

/// Strategy producing the ordered label sequence for one axis.
#[derive(Debug, Clone)]
pub enum LabelGenerator {
    /// Generate labels from the pixel span and value range.
    Adaptive(AdaptiveLabels),
    /// Always return a stored list, ignoring span and range.
    Fixed(Vec<String>),
}

impl LabelGenerator {
    /// Create an adaptive generator with the given pixel spacing per label.
    pub fn adaptive(spacing: f32) -> Self {
        Self::Adaptive(AdaptiveLabels::new(spacing))
    }

    /// Create a fixed-list generator.
    pub fn fixed<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fixed(labels.into_iter().map(Into::into).collect())
    }

    /// Produce the labels for an axis spanning `span_px` pixels over
    /// `min..max`.
    pub fn generate(&self, span_px: f32, min: f64, max: f64) -> Vec<String> {
        match self {
            Self::Adaptive(adaptive) => adaptive.generate(span_px, min, max),
            Self::Fixed(labels) => labels.clone(),
        }
    }
}

/// Adaptive label generation with a configurable pixel spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveLabels {
    spacing: f32,
}

impl AdaptiveLabels {
    /// Create a generator that spends roughly `spacing` pixels per label.
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Pixel spacing per label.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Replace the pixel spacing per label.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    /// Generate evenly spaced labels across `min..max`.
    pub fn generate(&self, span_px: f32, min: f64, max: f64) -> Vec<String> {
        let count = self.label_count(span_px);
        let mut labels = Vec::with_capacity(count);
        for index in 0..count {
            let value = if count == 1 {
                min
            } else {
                min + (max - min) * index as f64 / (count - 1) as f64
            };
            labels.push(format_label(value, max - min));
        }
        labels
    }

    fn label_count(&self, span_px: f32) -> usize {
        if self.spacing > 0.0 {
            (span_px / self.spacing) as usize + 1
        } else {
            1
        }
    }
}

/// Format a value with precision adapted to the axis span.
///
/// Trailing zeros are trimmed, so a 4-digit precision still renders
/// `0.25` rather than `0.2500`.
fn format_label(value: f64, span: f64) -> String {
    let decimals = if span < 0.1 {
        6
    } else if span < 1.0 {
        4
    } else if span < 20.0 {
        3
    } else if span < 100.0 {
        1
    } else {
        0
    };
    trim_trailing_zeros(format!("{value:.decimals$}"))
}

fn trim_trailing_zeros(mut label: String) -> String {
    if let Some(dot) = label.find('.') {
        while label.ends_with('0') {
            label.pop();
        }
        if label.len() == dot + 1 {
            label.pop();
        }
    }
    label
}
