//! 頻度辞書からユニグラムモデルを学習するためのモジュール。
//!
//! このモジュールは、単語ごとの頻度から負の対数確率としてユニグラムコストを推定し、
//! 語彙と組み合わせて分割用の[`Dictionary`]を構築します。
//!
//! # 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wordseg::trainer::{FrequencyLexicon, Smoothing, Trainer};
//! use wordseg::Segmenter;
//!
//! let freq = FrequencyLexicon::from_reader("東京 3\n京都 2\n都 1".as_bytes())?;
//! let dict = Trainer::new().smoothing(Smoothing::Laplace).train(&freq)?;
//!
//! let segmenter = Segmenter::new(dict);
//! assert_eq!(segmenter.segment("東京都"), vec!["東京", "都"]);
//! # Ok(())
//! # }
//! ```

mod config;
mod corpus;

use crate::dictionary::{Dictionary, Lexicon, UnigramCost};
use crate::errors::Result;

pub use crate::trainer::config::{Smoothing, TrainerConfig};
pub use crate::trainer::corpus::FrequencyLexicon;

/// ユニグラムモデルのトレーナー。
#[derive(Clone, Debug, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// デフォルト設定のトレーナーを作成します。
    ///
    /// デフォルトでは平滑化を行いません。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定された設定のトレーナーを作成します。
    pub fn with_config(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// 平滑化の種類を変更します。
    ///
    /// # 戻り値
    ///
    /// 設定が更新されたトレーナー
    pub fn smoothing(mut self, smoothing: Smoothing) -> Self {
        self.config.smoothing = smoothing;
        self
    }

    /// 現在の設定を返します。
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// 頻度辞書から辞書を学習します。
    ///
    /// 語彙は頻度辞書と同じ単語IDの割り当てで構築され、
    /// コスト配列の長さは異なり単語数に一致します。
    ///
    /// # エラー
    ///
    /// 語彙の構築に失敗した場合にエラーを返します。
    pub fn train(&self, freq: &FrequencyLexicon) -> Result<Dictionary> {
        log::debug!(
            "training unigram costs for {} words (smoothing: {})",
            freq.num_words(),
            self.config.smoothing
        );
        let costs = compute_costs(freq.counts(), self.config.smoothing);
        let num_infinite = costs.iter().filter(|c| !c.is_finite()).count();
        if num_infinite != 0 {
            log::debug!("{num_infinite} words have no finite cost and are treated as unknown");
        }
        let lexicon = Lexicon::from_records(freq.iter())?;
        Ok(Dictionary::new(lexicon, UnigramCost::new(costs)))
    }
}

/// 単語ID順の頻度からユニグラムコストを計算します。
///
/// 計算は倍精度で行い、結果を単精度に丸めます。
///
/// # 引数
///
/// * `counts` - 単語ID順の頻度
/// * `smoothing` - 平滑化の種類
///
/// # 戻り値
///
/// `counts`と同じ長さのコスト配列。平滑化なしの場合、頻度0の単語は`+inf`になります。
pub fn compute_costs(counts: &[u64], smoothing: Smoothing) -> Vec<f32> {
    let total: f64 = counts.iter().map(|&c| c as f64).sum();
    match smoothing {
        Smoothing::None => counts
            .iter()
            .map(|&c| (-(c as f64 / total).ln()) as f32)
            .map(|cost| if cost.is_nan() { f32::INFINITY } else { cost })
            .collect(),
        Smoothing::Laplace => {
            let total = total + 1.0;
            let pseudo_count = 1.0 / counts.len() as f64;
            counts
                .iter()
                .map(|&c| (-((c as f64 + pseudo_count) / total).ln()) as f32)
                .collect()
        }
    }
}
