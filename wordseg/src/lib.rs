//! # wordseg
//!
//! wordsegは、語彙とユニグラムコストに基づく単語分割の実装です。
//!
//! ## 概要
//!
//! このライブラリは、単語の区切りが明示されないテキストを、事前に学習された語彙と
//! 単語ごとのユニグラムコストを用いて、総コスト最小の単語列に分割します。
//! 入力は正規表現によって原子単位に分割され、原子単位の境界を頂点とするラティス上で
//! 最短経路を求めます。
//!
//! ## 主な機能
//!
//! - **単語分割**: 語彙トライとユニグラムコストによる最短経路探索
//! - **モデル学習**: 頻度辞書からの最尤推定（加算平滑化も選択可能）
//! - **モデルの永続化**: バイナリのコストファイル、rkyvによる語彙ファイル、JSON設定
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wordseg::trainer::{FrequencyLexicon, Trainer};
//! use wordseg::Segmenter;
//!
//! let freq = "自然 4\n言語 4\n自然言語 3\n処理 5";
//! let freq = FrequencyLexicon::from_reader(freq.as_bytes())?;
//! let dict = Trainer::new().train(&freq)?;
//!
//! let segmenter = Segmenter::new(dict);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_sentence("自然言語処理");
//! worker.segment()?;
//! assert_eq!(worker.num_words(), 2);
//!
//! let w0 = worker.word(0);
//! assert_eq!(w0.surface(), "自然言語");
//! assert_eq!(w0.range_token(), 0..4);
//! assert_eq!(w0.range_byte(), 0..12);
//!
//! let w1 = worker.word(1);
//! assert_eq!(w1.surface(), "処理");
//! assert_eq!(w1.range_byte(), 12..18);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("`target_pointer_width` must be 32 or 64");

/// 語彙、コスト、モデル設定
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 単語分割器の実装
pub mod segmenter;

/// 原子単位への分割
pub mod sentence;

/// ユニグラムモデルの学習
pub mod trainer;

/// 内部ユーティリティ関数
pub mod utils;

/// 分割結果の単語型
pub mod word;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use dictionary::Dictionary;
pub use segmenter::Segmenter;
pub use sentence::tokenize;
pub use trainer::Trainer;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
