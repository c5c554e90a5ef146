//! 文字単位のトライによる増分探索
//!
//! このモジュールは、単語の表層形を文字単位で格納するトライ構造を提供します。
//! 探索は[`TrieState`]で表されるカーソルを一単位ずつ進めることで行い、
//! 途中で一致する単語と、さらに延長できるかどうかを報告します。

use hashbrown::HashMap;

use crate::dictionary::word_idx::WordId;
use crate::errors::{Result, WordsegError};
use crate::utils::FromU32;

const ROOT: u32 = 0;

/// 辺を`(親ノード, 文字)`のハッシュマップで表現したトライ
///
/// ノード数に比例したメモリを消費し、一文字の遷移はハッシュ表の一回の参照で済みます。
#[derive(Debug)]
pub(crate) struct Trie {
    edges: HashMap<(u32, char), u32>,
    values: Vec<Option<WordId>>,
    num_children: Vec<u32>,
}

/// トライ上の探索カーソル
///
/// `None`は、これ以上どの単語にも一致し得ない状態を表します。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrieState {
    node: Option<u32>,
}

impl TrieState {
    /// まだ何も消費していないカーソルを作成します。
    #[inline(always)]
    pub const fn new() -> Self {
        Self { node: Some(ROOT) }
    }

    /// カーソルがトライ上に留まっているかを返します。
    #[cfg(test)]
    #[inline(always)]
    pub(crate) const fn is_alive(&self) -> bool {
        self.node.is_some()
    }
}

impl Default for TrieState {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// ルートノードのみを持つ空のトライを作成します。
    pub(crate) fn new() -> Self {
        Self {
            edges: HashMap::new(),
            values: vec![None],
            num_children: vec![0],
        }
    }

    /// レコードからトライを構築します。
    ///
    /// # エラー
    ///
    /// 空の表層形や重複した表層形が含まれている場合にエラーを返します。
    #[cfg(test)]
    pub(crate) fn from_records<K>(records: &[(K, WordId)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        let mut trie = Self::new();
        for (key, value) in records {
            trie.insert(key.as_ref(), *value)?;
        }
        Ok(trie)
    }

    /// 単語を挿入します。
    pub(crate) fn insert(&mut self, key: &str, value: WordId) -> Result<()> {
        if key.is_empty() {
            return Err(WordsegError::invalid_argument(
                "records",
                "a lexicon entry must not be empty",
            ));
        }
        let mut node = ROOT;
        for c in key.chars() {
            node = match self.edges.get(&(node, c)) {
                Some(&child) => child,
                None => {
                    let child = u32::try_from(self.values.len())?;
                    self.values.push(None);
                    self.num_children.push(0);
                    self.num_children[usize::from_u32(node)] += 1;
                    self.edges.insert((node, c), child);
                    child
                }
            };
        }
        let slot = &mut self.values[usize::from_u32(node)];
        if let Some(old) = slot {
            return Err(WordsegError::invalid_argument(
                "records",
                format!("{key:?} is registered twice (word ids {old} and {value})"),
            ));
        }
        *slot = Some(value);
        Ok(())
    }

    /// カーソルを`unit`の全文字分だけ進めます。
    ///
    /// # 戻り値
    ///
    /// 消費した文字列全体が登録済みの単語に一致する場合、その単語ID
    #[inline]
    pub(crate) fn traverse(&self, state: &mut TrieState, unit: &str) -> Option<WordId> {
        let mut node = state.node?;
        for c in unit.chars() {
            match self.edges.get(&(node, c)) {
                Some(&child) => node = child,
                None => {
                    state.node = None;
                    return None;
                }
            }
        }
        state.node = Some(node);
        self.values[usize::from_u32(node)]
    }

    /// 現在のカーソルからさらに単語へ延長できるかを返します。
    #[inline(always)]
    pub(crate) fn is_extensible(&self, state: &TrieState) -> bool {
        state
            .node
            .is_some_and(|node| self.num_children[usize::from_u32(node)] != 0)
    }

    /// ルートを含むノード数を返します。
    #[inline(always)]
    pub(crate) fn num_nodes(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> Trie {
        Trie::from_records(&[
            ("東京", WordId(0)),
            ("東京都", WordId(1)),
            ("京都", WordId(2)),
        ])
        .unwrap()
    }

    #[test]
    fn test_traverse_prefixes() {
        let trie = build();
        let mut state = TrieState::new();
        assert_eq!(trie.traverse(&mut state, "東"), None);
        assert!(trie.is_extensible(&state));
        assert_eq!(trie.traverse(&mut state, "京"), Some(WordId(0)));
        assert!(trie.is_extensible(&state));
        assert_eq!(trie.traverse(&mut state, "都"), Some(WordId(1)));
        assert!(state.is_alive());
        assert!(!trie.is_extensible(&state));
    }

    #[test]
    fn test_traverse_multi_char_unit() {
        let trie = build();
        let mut state = TrieState::new();
        assert_eq!(trie.traverse(&mut state, "東京都"), Some(WordId(1)));
    }

    #[test]
    fn test_traverse_dead_end() {
        let trie = build();
        let mut state = TrieState::new();
        assert_eq!(trie.traverse(&mut state, "大"), None);
        assert!(!state.is_alive());
        assert!(!trie.is_extensible(&state));
        // A dead cursor stays dead.
        assert_eq!(trie.traverse(&mut state, "京"), None);
        assert!(!state.is_alive());
    }

    #[test]
    fn test_num_nodes() {
        // root, 東, 東京, 東京都, 京, 京都
        assert_eq!(build().num_nodes(), 6);
    }

    #[test]
    fn test_duplicate_key() {
        let result = Trie::from_records(&[("京都", WordId(0)), ("京都", WordId(1))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_key() {
        let result = Trie::from_records(&[("", WordId(0))]);
        assert!(result.is_err());
    }
}
