//! ラティス（格子）構造の実装モジュール。
//!
//! このモジュールは、ユニグラムコストに基づく最短経路探索のための
//! ラティス構造を提供します。ラティスは原子単位の境界ごとに一つのノードを持ち、
//! 各ノードは文頭からその境界までの最小コストと、直前の境界を保持します。
use crate::dictionary::cost::UnigramCost;
use crate::dictionary::lexicon::LexiconOracle;
use crate::dictionary::word_idx::WordId;
use crate::errors::{Result, WordsegError};
use crate::sentence::Sentence;

const MAX_COST: f32 = f32::INFINITY;
const INVALID_IDX: usize = usize::MAX;

/// ラティス構築の入力となる原子単位の列
pub trait TokenSource {
    /// 原子単位の数を返します。
    fn len_token(&self) -> usize;

    /// `i`番目の原子単位を返します。
    fn token(&self, i: usize) -> &str;
}

impl TokenSource for Sentence {
    #[inline(always)]
    fn len_token(&self) -> usize {
        Sentence::len_token(self)
    }

    #[inline(always)]
    fn token(&self, i: usize) -> &str {
        Sentence::token(self, i)
    }
}

impl<S> TokenSource for [S]
where
    S: AsRef<str>,
{
    #[inline(always)]
    fn len_token(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn token(&self, i: usize) -> &str {
        self[i].as_ref()
    }
}

/// ラティス内のノード。
///
/// 境界`k`のノードは、文頭から`k`までの最良パスの最後の辺の情報を保持します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// 最後の辺の開始境界。到達不能な場合は無効値。
    pub start: usize,
    /// 文頭からこの境界までの最小コスト。
    pub min_cost: f32,
    /// 最後の辺に対して語彙が報告した単語ID。
    pub word_id: Option<WordId>,
    /// 最後の辺の単語コスト。
    pub word_cost: f32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            start: INVALID_IDX,
            min_cost: MAX_COST,
            word_id: None,
            word_cost: 0.0,
        }
    }
}

impl Node {
    /// このノードが文頭から到達可能かどうかを判定します。
    #[inline(always)]
    pub fn is_connected_to_bos(&self) -> bool {
        self.start != INVALID_IDX
    }
}

/// 1-best解用のラティス構造体。
#[derive(Default, Debug)]
pub struct Lattice {
    nodes: Vec<Node>,
    len_token: usize,
}

impl Lattice {
    /// ラティスをリセットし、新しい文の処理を準備します。
    ///
    /// 境界0は自己ループを持つ始点として初期化されます。
    ///
    /// # 引数
    ///
    /// * `len_token` - 新しい文の原子単位数
    pub fn reset(&mut self, len_token: usize) {
        self.nodes.clear();
        self.nodes.resize(len_token + 1, Node::default());
        self.nodes[0] = Node {
            start: 0,
            min_cost: 0.0,
            word_id: None,
            word_cost: 0.0,
        };
        self.len_token = len_token;
    }

    /// 設定された文の原子単位数を返します。
    #[inline(always)]
    pub const fn len_token(&self) -> usize {
        self.len_token
    }

    /// ラティスを構築します。
    ///
    /// 各開始位置`i`から語彙をたどりながら終了位置`j`を延ばし、
    /// 語彙に一致した範囲と長さ1の範囲を辺として緩和します。
    /// 語彙がこれ以上延長できないと報告した時点で、その開始位置からの探索を打ち切ります。
    ///
    /// # 引数
    ///
    /// * `tokens` - 原子単位の列
    /// * `oracle` - 語彙
    /// * `uni_cost` - ユニグラムコスト
    pub fn build<T, L>(&mut self, tokens: &T, oracle: &L, uni_cost: &UnigramCost)
    where
        T: TokenSource + ?Sized,
        L: LexiconOracle,
    {
        let len_token = tokens.len_token();
        self.reset(len_token);

        for i in 0..len_token {
            let mut state = oracle.initial_state();
            for j in i..len_token {
                let result = oracle.traverse(&mut state, tokens.token(j));
                // A single unit is always admitted so that every boundary stays reachable.
                if result.word_id.is_some() || j == i {
                    let word_cost = uni_cost.word_cost(result.word_id);
                    self.relax(i, j + 1, result.word_id, word_cost);
                }
                if !result.is_valid {
                    break;
                }
            }
        }
    }

    #[inline(always)]
    fn relax(&mut self, start: usize, end: usize, word_id: Option<WordId>, word_cost: f32) {
        let new_cost = self.nodes[start].min_cost + word_cost;
        // Strict comparison keeps the earliest start on ties.
        if new_cost < self.nodes[end].min_cost {
            self.nodes[end] = Node {
                start,
                min_cost: new_cost,
                word_id,
                word_cost,
            };
        }
    }

    /// 境界`k`までの最小コストを返します。
    #[inline(always)]
    pub fn min_cost(&self, k: usize) -> f32 {
        self.nodes[k].min_cost
    }

    /// 境界`k`に至る最良の辺の開始境界を返します。
    ///
    /// 到達不能な場合は`None`を返します。
    #[inline(always)]
    pub fn predecessor(&self, k: usize) -> Option<usize> {
        let node = &self.nodes[k];
        node.is_connected_to_bos().then_some(node.start)
    }

    /// 最良パスのノードをベクトルに追加します。
    ///
    /// 文末から後方にたどり、`(終了境界, ノード)`の組を文末側から順に追加します。
    ///
    /// # 引数
    ///
    /// * `top_nodes` - ノードを追加するベクトル
    ///
    /// # エラー
    ///
    /// 文頭まで戻れない場合は[`WordsegError::DecodeFailure`]を返します。
    pub fn append_top_nodes(&self, top_nodes: &mut Vec<(usize, Node)>) -> Result<()> {
        let mut end = self.len_token;
        while end != 0 {
            let node = self.nodes[end];
            if !node.is_connected_to_bos() || node.start >= end {
                return Err(WordsegError::DecodeFailure);
            }
            top_nodes.push((end, node));
            end = node.start;
        }
        Ok(())
    }
}
