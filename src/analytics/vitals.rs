//! Vitals series, BMI and the trend rule.

use crate::models::ClinicalObservation;

use super::types::*;

/// Window size for the recent/earlier averages of the trend rule.
const TREND_SPAN: usize = 3;

/// Relative change (percent) below which a series counts as stable.
const STABLE_THRESHOLD_PERCENT: f64 = 5.0;

/// Classifies a chronologically ordered series.
///
/// Compares the mean of the last three points with the mean of the first
/// three. For `n <= 3` both spans cover the whole series, so the result
/// is always `Stable`; that degenerate case is the established contract.
pub fn calculate_trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }

    let span = TREND_SPAN.min(values.len());
    let recent_avg = mean(&values[values.len() - span..]);
    let earlier_avg = mean(&values[..span]);

    if earlier_avg == 0.0 {
        // No relative change is defined against zero; fall back to direction.
        return if recent_avg == earlier_avg {
            Trend::Stable
        } else if recent_avg > earlier_avg {
            Trend::Increasing
        } else {
            Trend::Decreasing
        };
    }

    let percent_change = ((recent_avg - earlier_avg) / earlier_avg * 100.0).abs();
    if percent_change < STABLE_THRESHOLD_PERCENT {
        Trend::Stable
    } else if recent_avg > earlier_avg {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}

/// Splits `"SYS/DIA"`. Each side contributes only if it parses as an
/// integer on its own; anything that is not exactly two tokens yields neither.
pub fn parse_blood_pressure(raw: &str) -> (Option<i32>, Option<i32>) {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 2 {
        return (None, None);
    }
    (
        parts[0].trim().parse::<i32>().ok(),
        parts[1].trim().parse::<i32>().ok(),
    )
}

/// Unrounded BMI, or `None` when height or weight is missing or height is not positive.
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    match (height_cm, weight_kg) {
        (Some(h), Some(w)) if h > 0.0 => Some(w / (h / 100.0).powi(2)),
        _ => None,
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Summary of a non-empty chronological series.
fn summarize(values: &[f64]) -> Option<VitalStatistics> {
    let (first, last) = (*values.first()?, *values.last()?);
    Some(VitalStatistics {
        current: last,
        average: mean(values),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        change: last - first,
        trend: calculate_trend(values),
    })
}

fn series_of(
    observations: &[&ClinicalObservation],
    value_of: impl Fn(&ClinicalObservation) -> Option<f64>,
) -> Vec<DataPoint> {
    observations
        .iter()
        .filter_map(|o| value_of(o).map(|v| DataPoint::new(o.observation_date, v)))
        .collect()
}

fn values(series: &[DataPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}

/// Builds every vital series from a window-filtered observation set.
pub fn build_observation_trends(observations: &[ClinicalObservation]) -> ClinicalObservationTrends {
    let mut ordered: Vec<&ClinicalObservation> = observations.iter().collect();
    ordered.sort_by_key(|o| o.observation_date);

    let weight_trend = series_of(&ordered, |o| o.weight_kg);
    let heart_rate_trend = series_of(&ordered, |o| o.heart_rate.map(f64::from));

    let bp: Vec<(Option<i32>, Option<i32>)> = ordered
        .iter()
        .map(|o| {
            o.blood_pressure
                .as_deref()
                .map(parse_blood_pressure)
                .unwrap_or((None, None))
        })
        .collect();
    let systolic_trend: Vec<DataPoint> = ordered
        .iter()
        .zip(&bp)
        .filter_map(|(o, (sys, _))| sys.map(|v| DataPoint::new(o.observation_date, f64::from(v))))
        .collect();
    let diastolic_trend: Vec<DataPoint> = ordered
        .iter()
        .zip(&bp)
        .filter_map(|(o, (_, dia))| dia.map(|v| DataPoint::new(o.observation_date, f64::from(v))))
        .collect();

    // BMI statistics are computed on unrounded values and rounded at the end.
    let raw_bmi: Vec<f64> = ordered
        .iter()
        .filter_map(|o| bmi(o.height_cm, o.weight_kg))
        .collect();
    let bmi_trend = series_of(&ordered, |o| bmi(o.height_cm, o.weight_kg).map(round2));
    let bmi_stats = summarize(&raw_bmi).map(|s| VitalStatistics {
        current: round2(s.current),
        average: round2(s.average),
        min: round2(s.min),
        max: round2(s.max),
        change: round2(s.change),
        trend: s.trend,
    });

    ClinicalObservationTrends {
        weight_stats: summarize(&values(&weight_trend)),
        weight_trend,
        heart_rate_stats: summarize(&values(&heart_rate_trend)),
        heart_rate_trend,
        blood_pressure_systolic_stats: summarize(&values(&systolic_trend)),
        blood_pressure_systolic_trend: systolic_trend,
        blood_pressure_diastolic_stats: summarize(&values(&diastolic_trend)),
        blood_pressure_diastolic_trend: diastolic_trend,
        bmi_trend,
        bmi_stats,
    }
}
