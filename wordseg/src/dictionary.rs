//! 単語分割のための辞書モジュール。
//!
//! このモジュールは、分割に必要な語彙とユニグラムコストを一つのモデルとして
//! まとめ、ディスク上のモデルディレクトリとの間で読み書きします。
//!
//! # モデルディレクトリ
//!
//! | ファイル | 内容 |
//! |---|---|
//! | [`LEXICON_FILENAME`] | 語彙 ([`Lexicon`]) |
//! | [`UNI_COST_FILENAME`] | ユニグラムコスト ([`UnigramCost`]) |
//! | [`CONFIG_FILENAME`] | 上記二つの場所を記述したJSON設定 ([`ModelConfig`]) |
pub mod config;
pub mod cost;
pub mod lexicon;
pub(crate) mod word_idx;

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::errors::Result;

pub use crate::dictionary::config::ModelConfig;
pub use crate::dictionary::cost::{UNKNOWN_WORD_COST, UnigramCost};
pub use crate::dictionary::lexicon::{Lexicon, LexiconOracle, TraverseResult};
pub use crate::dictionary::word_idx::WordId;

/// モデルディレクトリ内の語彙ファイル名
pub const LEXICON_FILENAME: &str = "lexicon";

/// モデルディレクトリ内のコストファイル名
pub const UNI_COST_FILENAME: &str = "cost.uni";

/// モデルディレクトリ内の設定ファイル名
pub const CONFIG_FILENAME: &str = "wordseg.conf";

/// 語彙とユニグラムコストからなる分割モデル
///
/// 構築後は不変で、[`Segmenter`](crate::Segmenter)を通して
/// スレッド間で共有されます。
#[derive(Debug)]
pub struct Dictionary {
    lexicon: Lexicon,
    unigram_cost: UnigramCost,
}

impl Dictionary {
    /// 語彙とコスト配列から新しい辞書を作成します。
    ///
    /// 語彙の単語数とコスト配列の長さが一致しない場合は警告を出力します。
    /// 範囲外の単語IDは問い合わせ時に未知語として扱われます。
    pub fn new(lexicon: Lexicon, unigram_cost: UnigramCost) -> Self {
        if lexicon.num_entries() != unigram_cost.len() {
            log::warn!(
                "lexicon has {} entries but the cost array has {} values",
                lexicon.num_entries(),
                unigram_cost.len()
            );
        }
        Self {
            lexicon,
            unigram_cost,
        }
    }

    /// 設定ファイルからモデルを読み込みます。
    ///
    /// 設定、語彙、コストの順に読み込み、いずれかが失敗した時点で中断します。
    ///
    /// # 引数
    ///
    /// * `path` - 設定ファイルへのパス
    ///
    /// # エラー
    ///
    /// ファイルが存在しない場合や形式が不正な場合にエラーを返します。
    pub fn from_config_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = ModelConfig::from_path(path)?;
        Self::from_config(&config)
    }

    /// 解決済みの設定からモデルを読み込みます。
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let lexicon = Lexicon::from_path(&config.lexicon_path)?;
        log::debug!(
            "loaded {} lexicon entries from {}",
            lexicon.num_entries(),
            config.lexicon_path.display()
        );
        let unigram_cost = UnigramCost::from_path(&config.unicost_path)?;
        log::debug!(
            "loaded {} unigram costs from {}",
            unigram_cost.len(),
            config.unicost_path.display()
        );
        Ok(Self::new(lexicon, unigram_cost))
    }

    /// モデルをディレクトリに書き出します。
    ///
    /// ディレクトリが存在しない場合は作成します。
    ///
    /// # 戻り値
    ///
    /// 書き出した設定ファイルのパス
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        create_dir_all(dir)?;

        self.lexicon.to_path(dir.join(LEXICON_FILENAME))?;
        self.unigram_cost.to_path(dir.join(UNI_COST_FILENAME))?;

        let config_path = dir.join(CONFIG_FILENAME);
        ModelConfig::new(LEXICON_FILENAME, UNI_COST_FILENAME).to_path(&config_path)?;
        Ok(config_path)
    }

    /// 語彙を返します。
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// ユニグラムコストを返します。
    #[inline(always)]
    pub fn unigram_cost(&self) -> &UnigramCost {
        &self.unigram_cost
    }

    /// 単語IDに対応する表層形を返します。
    ///
    /// 単語IDは学習時に密に割り当てられるため、語彙エントリの並びを直接引きます。
    pub fn word_surface(&self, word_id: WordId) -> Option<&str> {
        self.lexicon
            .entries()
            .get(word_id.index())
            .filter(|e| e.word_id == word_id.get())
            .map(|e| e.surface.as_str())
    }
}
