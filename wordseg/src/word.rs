//! 分割結果の単語
//!
//! このモジュールは、分割の結果として得られる単語を表現する型を提供します。

use std::ops::Range;

use crate::dictionary::word_idx::WordId;
use crate::segmenter::worker::Worker;

/// 分割結果の単語
///
/// この単語は[`Worker`]への軽量な参照であり、実際のデータは
/// Workerが保持しています。単語はWorkerが生存している間のみ有効です。
pub struct Word<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Word<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    /// 単語の原子単位での位置範囲を取得します。
    #[inline(always)]
    pub fn range_token(&self) -> Range<usize> {
        let (end, node) = &self.worker.top_nodes[self.index];
        node.start..*end
    }

    /// 単語のバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let range = self.range_token();
        sent.byte_position(range.start)..sent.byte_position(range.end)
    }

    /// 単語の表層形を取得します。
    ///
    /// 表層形は、単語が覆う原子単位を連結した文字列です。
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        let sent = &self.worker.sent;
        &sent.raw()[self.range_byte()]
    }

    /// 語彙が報告した単語IDを取得します。
    ///
    /// 語彙に一致しなかった一単位の単語では`None`を返します。
    #[inline(always)]
    pub fn word_id(&self) -> Option<WordId> {
        let (_, node) = &self.worker.top_nodes[self.index];
        node.word_id
    }

    /// 単語が語彙に含まれ、かつ有効なコストを持つかを返します。
    #[inline(always)]
    pub fn is_known(&self) -> bool {
        let uni_cost = self.worker.segmenter.dictionary().unigram_cost();
        self.word_id().and_then(|id| uni_cost.get(id)).is_some()
    }

    /// 単語コストを取得します。
    ///
    /// 未知語では[`UNKNOWN_WORD_COST`](crate::dictionary::UNKNOWN_WORD_COST)を返します。
    #[inline(always)]
    pub fn word_cost(&self) -> f32 {
        let (_, node) = &self.worker.top_nodes[self.index];
        node.word_cost
    }

    /// 文頭からこの単語までの累積コストを取得します。
    #[inline(always)]
    pub fn total_cost(&self) -> f32 {
        let (_, node) = &self.worker.top_nodes[self.index];
        node.min_cost
    }
}

impl std::fmt::Debug for Word<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Word")
            .field("surface", &self.surface())
            .field("range_token", &self.range_token())
            .field("range_byte", &self.range_byte())
            .field("word_id", &self.word_id())
            .field("word_cost", &self.word_cost())
            .field("total_cost", &self.total_cost())
            .finish()
    }
}

/// 単語のイテレータ
pub struct WordIter<'w> {
    worker: &'w Worker,
    i: usize,
}

impl<'w> WordIter<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker) -> Self {
        Self { worker, i: 0 }
    }
}

impl<'w> Iterator for WordIter<'w> {
    type Item = Word<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i < self.worker.num_words() {
            let word = self.worker.word(self.i);
            self.i += 1;
            Some(word)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.worker.num_words() - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordIter<'_> {}
