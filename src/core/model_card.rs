//! Static facts about the deployed model, shown in the model card panel.

pub const METRIC_LABELS: [&str; 4] = ["Accuracy", "Precision", "Recall", "F1"];

/// Percentages per metric, in `METRIC_LABELS` order.
pub const BASE_SVM_METRICS: [f64; 4] = [91.16, 91.14, 91.14, 91.14];
pub const OPTIMIZED_SVM_METRICS: [f64; 4] = [92.63, 92.80, 92.41, 92.60];

/// (label, samples)
pub const DATASET_SPLIT: [(&str, u64); 3] = [
    ("Training", 3800),
    ("Validation", 475),
    ("Test", 475),
];

pub const OPTIMIZATION_TRIALS: usize = 100;

/// Best F1 reached during hyperparameter search.
pub const PLATEAU_F1: f64 = 0.9260;

const RECORDED_F1: [f64; 20] = [
    0.1, 0.3, 0.5, 0.7, 0.8, 0.85, 0.87, 0.89, 0.90, 0.91, 0.915, 0.92, 0.922, 0.924, 0.925,
    0.926, 0.9255, 0.9258, 0.9260, 0.9259,
];

pub fn dataset_total() -> u64 {
    DATASET_SPLIT.iter().map(|(_, n)| n).sum()
}

/// Share of the dataset in a split, as a whole percentage.
pub fn split_percent(samples: u64) -> u64 {
    let total = dataset_total();
    if total == 0 {
        return 0;
    }
    (samples * 100 + total / 2) / total
}

/// F1 per optimization trial: the recorded trials, then the plateau.
pub fn f1_convergence() -> Vec<f64> {
    let mut series = RECORDED_F1.to_vec();
    series.resize(OPTIMIZATION_TRIALS, PLATEAU_F1);
    series
}
