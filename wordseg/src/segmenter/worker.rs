//! 単語分割のためのルーチンを提供するモジュール。
//!
//! ワーカーは内部データ構造を保持し、再利用することで不要なメモリアロケーションを避けます。
use crate::errors::Result;
use crate::segmenter::Segmenter;
use crate::segmenter::lattice::{Lattice, Node};
use crate::sentence::Sentence;
use crate::word::{Word, WordIter};

/// 単語分割のためのルーチンを提供する構造体。
///
/// 分割に使用される内部データ構造を保持し、それらを再利用することで
/// 不要なメモリ再割り当てを回避します。一つのワーカーは一つのスレッドで使用します。
///
/// # 例
///
/// ```no_run
/// use wordseg::Segmenter;
///
/// let segmenter = Segmenter::from_config_path("model/wordseg.conf")?;
/// let mut worker = segmenter.new_worker();
/// worker.reset_sentence("自然言語処理");
/// worker.segment()?;
/// for word in worker.word_iter() {
///     println!("{}\t{}", word.surface(), word.word_cost());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Worker {
    pub(crate) segmenter: Segmenter,
    pub(crate) sent: Sentence,
    pub(crate) lattice: Lattice,
    pub(crate) top_nodes: Vec<(usize, Node)>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    pub(crate) fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            sent: Sentence::new(),
            lattice: Lattice::default(),
            top_nodes: vec![],
        }
    }

    /// 分割する入力文をリセットします。
    ///
    /// 新しい文を設定し、以前の結果をクリアします。
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.top_nodes.clear();
        self.sent.set_sentence(input);
        self.sent.compile();
    }

    /// 設定された入力文を分割します。
    ///
    /// 分割結果は内部状態に保存され、[`word_iter`](Self::word_iter)や
    /// [`word`](Self::word)でアクセスできます。空の文に対しては単語を一つも生成せずに成功します。
    ///
    /// # エラー
    ///
    /// 文頭から文末までのパスが見つからない場合は
    /// [`WordsegError::DecodeFailure`](crate::errors::WordsegError::DecodeFailure)を返し、
    /// 分割結果は空になります。
    pub fn segment(&mut self) -> Result<()> {
        self.top_nodes.clear();
        let dict = self.segmenter.dictionary();
        self.lattice
            .build(&self.sent, dict.lexicon(), dict.unigram_cost());
        let result = self.lattice.append_top_nodes(&mut self.top_nodes);
        if result.is_err() {
            self.top_nodes.clear();
        }
        result
    }

    /// 分割結果の単語数を取得します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.top_nodes.len()
    }

    /// `i`番目の単語を取得します。
    #[inline(always)]
    pub fn word<'w>(&'w self, i: usize) -> Word<'w> {
        let index = self.num_words() - i - 1;
        Word::new(self, index)
    }

    /// 分割結果のイテレータを作成します。
    #[inline(always)]
    pub fn word_iter<'w>(&'w self) -> WordIter<'w> {
        WordIter::new(self)
    }

    /// 分割結果の表層形を文頭から順に`out`へ追加します。
    pub fn append_surfaces(&self, out: &mut Vec<String>) {
        out.extend(self.word_iter().map(|w| w.surface().to_string()));
    }
}
