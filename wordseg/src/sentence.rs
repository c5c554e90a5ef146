//! 入力テキストの原子単位への分割
//!
//! このモジュールは、入力文字列を分割の最小単位である原子単位（トークン）に
//! 切り分けます。原子単位は、ASCIIの単語文字`[0-9A-Za-z_]`の最長連続か、
//! それ以外の任意の一文字です。改行を含むすべての文字がいずれかの単位に属するため、
//! 単位を連結すると元の入力が得られます。

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static UNIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\w)+|(?s:.)").unwrap());

/// 入力文字列を原子単位に分割します。
///
/// # 引数
///
/// * `text` - 入力文字列
///
/// # 戻り値
///
/// 入力に現れる順の原子単位。空文字列に対しては空のベクタを返します。
///
/// # 例
///
/// ```
/// assert_eq!(wordseg::tokenize("ab, 東京"), vec!["ab", ",", " ", "東", "京"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    UNIT_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// 入力テキストと原子単位の位置を保持する再利用可能なバッファ
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `t2b` - 原子単位の位置からバイト位置へのマッピング。末尾に入力長を持つ
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    t2b: Vec<usize>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.t2b.clear();
    }

    /// 入力文字列を設定します
    ///
    /// 既存の内部状態をクリアした後、新しい入力文字列を設定します。
    /// 分割を行うには [`compile`](Self::compile) を呼び出す必要があります。
    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
    }

    /// 入力文字列を原子単位に分割し、境界のバイト位置を計算します
    pub fn compile(&mut self) {
        self.t2b.clear();
        for m in UNIT_PATTERN.find_iter(&self.input) {
            self.t2b.push(m.start());
        }
        self.t2b.push(self.input.len());
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 原子単位の数を返します
    #[inline(always)]
    pub fn len_token(&self) -> usize {
        self.t2b.len().saturating_sub(1)
    }

    /// 指定された位置の原子単位を返します
    ///
    /// # 引数
    ///
    /// * `pos_token` - 原子単位の位置（0始まり）
    #[inline(always)]
    pub fn token(&self, pos_token: usize) -> &str {
        &self.input[self.t2b[pos_token]..self.t2b[pos_token + 1]]
    }

    /// 指定された境界に対応するバイト位置を返します
    ///
    /// 境界`len_token()`は入力の末尾を表します。
    #[inline(always)]
    pub fn byte_position(&self, pos_token: usize) -> usize {
        self.t2b[pos_token]
    }

    /// 原子単位の範囲に対応する部分文字列を返します
    #[inline(always)]
    pub fn slice(&self, range_token: Range<usize>) -> &str {
        &self.input[self.t2b[range_token.start]..self.t2b[range_token.end]]
    }

    /// すべての原子単位を順に返すイテレータを作成します
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len_token()).map(move |i| self.token(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_word_runs() {
        assert_eq!(tokenize("hello world"), vec!["hello", " ", "world"]);
        assert_eq!(tokenize("a_1+b"), vec!["a_1", "+", "b"]);
    }

    #[test]
    fn test_tokenize_cjk_per_char() {
        assert_eq!(tokenize("東京都"), vec!["東", "京", "都"]);
        assert_eq!(tokenize("abc東京"), vec!["abc", "東", "京"]);
    }

    #[test]
    fn test_tokenize_newline() {
        assert_eq!(tokenize("a\nb"), vec!["a", "\n", "b"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_concat() {
        let text = "Rust 言語で\r\n分かち書き_test！";
        assert_eq!(tokenize(text).concat(), text);
    }

    #[test]
    fn test_sentence() {
        let mut sent = Sentence::new();
        sent.set_sentence("自然ab");
        sent.compile();
        assert_eq!(sent.len_token(), 3);
        assert_eq!(sent.token(0), "自");
        assert_eq!(sent.token(2), "ab");
        assert_eq!(sent.byte_position(0), 0);
        assert_eq!(sent.byte_position(1), 3);
        assert_eq!(sent.byte_position(2), 6);
        assert_eq!(sent.byte_position(3), 8);
        assert_eq!(sent.slice(1..3), "然ab");
        assert_eq!(sent.tokens().collect::<Vec<_>>(), vec!["自", "然", "ab"]);
    }

    #[test]
    fn test_sentence_empty() {
        let mut sent = Sentence::new();
        sent.set_sentence("");
        sent.compile();
        assert_eq!(sent.len_token(), 0);
        assert_eq!(sent.byte_position(0), 0);
    }
}
