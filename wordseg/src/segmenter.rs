//! ユニグラムコストに基づく単語分割器。
//!
//! このモジュールは、語彙とユニグラムコストを用いて、分かち書きされていない
//! テキストを総コスト最小の単語列に分割するメインの分割器を提供します。
//!
//! # 主要な構造体
//!
//! - [`Segmenter`]: 辞書を共有し、ワーカーを生成する分割器
//! - [`Worker`]: 実際の分割処理を行い、単語ごとの詳細を公開するワーカー
//!
//! # 例
//!
//! ```
//! use wordseg::dictionary::{Dictionary, Lexicon, UnigramCost, WordId};
//! use wordseg::Segmenter;
//!
//! let lexicon = Lexicon::from_records([("東京", WordId(0)), ("都", WordId(1))])?;
//! let dict = Dictionary::new(lexicon, UnigramCost::new(vec![1.0, 2.0]));
//! let segmenter = Segmenter::new(dict);
//!
//! assert_eq!(segmenter.segment("東京都"), vec!["東京", "都"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub(crate) mod lattice;
pub mod worker;

use std::path::Path;
use std::sync::Arc;

use crate::Dictionary;
use crate::errors::Result;
use crate::segmenter::worker::Worker;

pub use crate::segmenter::lattice::{Lattice, Node, TokenSource};

/// 単語分割器。
///
/// 辞書を[`Arc`]で保持するため、クローンは安価で、スレッド間で共有できます。
/// 分割の状態は呼び出しごとに生成される[`Worker`]が保持します。
#[derive(Clone, Debug)]
pub struct Segmenter {
    dict: Arc<Dictionary>,
}

impl Segmenter {
    /// 新しい分割器を作成します。
    ///
    /// 辞書は分割器に所有権が移動します。複数の分割器間で辞書を共有する
    /// 必要がある場合は、[`Segmenter::from_shared_dictionary`]を使用してください。
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict: Arc::new(dict),
        }
    }

    /// 共有された辞書から新しい分割器を作成します。
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self { dict }
    }

    /// 設定ファイルからモデルを読み込み、新しい分割器を作成します。
    ///
    /// # 引数
    ///
    /// * `path` - 設定ファイルへのパス
    ///
    /// # エラー
    ///
    /// 設定、語彙、コストのいずれかの読み込みに失敗した場合にエラーを返します。
    pub fn from_config_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Dictionary::from_config_path(path)?))
    }

    /// 辞書への参照を返します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// テキストを単語列に分割します。
    ///
    /// 文頭から文末までのパスが見つからない場合は警告を出力し、空のベクタを返します。
    /// 失敗を区別する必要がある場合は[`Segmenter::try_segment`]を使用してください。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    ///
    /// # 戻り値
    ///
    /// 文頭から順に並んだ単語の表層形
    pub fn segment(&self, text: &str) -> Vec<String> {
        match self.try_segment(text) {
            Ok(words) => words,
            Err(e) => {
                log::warn!("failed to segment {text:?}: {e}");
                vec![]
            }
        }
    }

    /// テキストを単語列に分割します。
    ///
    /// # エラー
    ///
    /// 文頭から文末までのパスが見つからない場合は
    /// [`WordsegError::DecodeFailure`](crate::errors::WordsegError::DecodeFailure)を返します。
    pub fn try_segment(&self, text: &str) -> Result<Vec<String>> {
        let mut worker = self.new_worker();
        worker.reset_sentence(text);
        worker.segment()?;
        let mut words = Vec::with_capacity(worker.num_words());
        worker.append_surfaces(&mut words);
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dictionary::{Lexicon, UnigramCost, WordId};

    fn segmenter() -> Segmenter {
        let lexicon = Lexicon::from_records([
            ("自然", WordId(0)),
            ("言語", WordId(1)),
            ("自然言語", WordId(2)),
            ("処理", WordId(3)),
        ])
        .unwrap();
        Segmenter::new(Dictionary::new(
            lexicon,
            UnigramCost::new(vec![2.0, 2.0, 3.0, 2.0]),
        ))
    }

    #[test]
    fn test_segment() {
        let segmenter = segmenter();
        assert_eq!(segmenter.segment("自然言語処理"), vec!["自然言語", "処理"]);
        assert_eq!(segmenter.segment("言語と処理"), vec!["言語", "と", "処理"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segmenter().segment("").is_empty());
        assert_eq!(segmenter().try_segment("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_segment_concat() {
        let text = "natural 自然言語processing\n処理!";
        let words = segmenter().try_segment(text).unwrap();
        assert_eq!(words.concat(), text);
        assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_shared_dictionary() {
        let segmenter = segmenter();
        let other = Segmenter::from_shared_dictionary(segmenter.dict.clone());
        assert!(Arc::ptr_eq(&segmenter.dict, &other.dict));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = other.clone();
                std::thread::spawn(move || s.segment("自然言語処理"))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), vec!["自然言語", "処理"]);
        }
    }
}
