//! Metric metadata in the style of a metric-library `info` record.

use serde::Serialize;

const DESCRIPTION: &str = "\
BEER is a linear model-based metric for sentence-level evaluation in machine \
translation (MT) that combines 33 relatively dense features, including \
character n-grams and reordering features. It employs a learning-to-rank \
framework to differentiate between function and non-function words and weighs \
each word type according to its importance for evaluation.";

const CITATION: &str = "\
@inproceedings{stanojevic-simaan-2014-fitting,
  title     = {Fitting Sentence Level Translation Evaluation with Many Dense Features},
  author    = {Stanojevi{\\'c}, Milo{\\v{s}} and Sima{'}an, Khalil},
  booktitle = {Proceedings of the 2014 Conference on Empirical Methods in Natural Language Processing ({EMNLP})},
  year      = {2014},
  publisher = {Association for Computational Linguistics},
  url       = {https://aclanthology.org/D14-1025},
  doi       = {10.3115/v1/D14-1025},
  pages     = {202--206},
}";

const INPUTS_DESCRIPTION: &str = "\
predictions: hypothesis translations to score, one string per segment, tokens \
separated by spaces. references: one reference string per prediction \
(multiple references per segment are not supported).";

/// Static description of the metric: what it measures, how to cite it, and
/// where the underlying scorer lives.
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    pub description: &'static str,
    pub citation: &'static str,
    pub inputs_description: &'static str,
    pub codebase_urls: &'static [&'static str],
    pub reference_urls: &'static [&'static str],
}

impl MetricInfo {
    pub fn new() -> Self {
        Self {
            description: DESCRIPTION,
            citation: CITATION,
            inputs_description: INPUTS_DESCRIPTION,
            codebase_urls: &["https://github.com/stanojevic/beer"],
            reference_urls: &["http://aclweb.org/anthology/D14-1025"],
        }
    }
}

impl Default for MetricInfo {
    fn default() -> Self {
        Self::new()
    }
}
