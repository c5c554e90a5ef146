//! 頻度辞書のデータ構造のモジュール。
//!
//! このモジュールは、学習用の頻度辞書の読み込みと、単語ごとの頻度の集計を提供します。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use crate::dictionary::word_idx::WordId;
use crate::errors::{Result, WordsegError};

/// 単語とその頻度の集計。
///
/// 単語IDは初出順に割り当てられ、同じ単語が複数回現れた場合は頻度が加算されます。
#[derive(Clone, Debug, Default)]
pub struct FrequencyLexicon {
    word_ids: HashMap<String, WordId>,
    words: Vec<String>,
    counts: Vec<u64>,
}

impl FrequencyLexicon {
    /// 空の集計を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 単語の頻度を加算します。
    ///
    /// # 戻り値
    ///
    /// 単語に割り当てられたID
    ///
    /// # エラー
    ///
    /// 単語数がu32の範囲を超える場合にエラーを返します。
    pub fn add_entry(&mut self, word: &str, count: u64) -> Result<WordId> {
        let word_id = match self.word_ids.get(word) {
            Some(&word_id) => word_id,
            None => {
                let word_id = WordId::new(u32::try_from(self.words.len())?);
                self.word_ids.insert(word.to_string(), word_id);
                self.words.push(word.to_string());
                self.counts.push(0);
                word_id
            }
        };
        let slot = &mut self.counts[word_id.index()];
        *slot = slot.saturating_add(count);
        Ok(word_id)
    }

    /// 頻度辞書の一行を処理します。
    ///
    /// 行は空白で区切られたちょうど二つのフィールド`単語 頻度`からなり、
    /// 頻度は非負の整数でなければなりません。
    ///
    /// # 引数
    ///
    /// * `lineno` - エラーメッセージに用いる1始まりの行番号
    /// * `line` - 行の内容
    ///
    /// # エラー
    ///
    /// 形式が不正な場合は[`WordsegError::InvalidFormat`]を返します。
    pub fn process_line(&mut self, lineno: usize, line: &str) -> Result<WordId> {
        let mut spl = line.split_whitespace();
        let (word, count) = match (spl.next(), spl.next(), spl.next()) {
            (Some(word), Some(count), None) => (word, count),
            _ => {
                return Err(WordsegError::invalid_format(
                    "freq",
                    format!("invalid line {lineno}: {line:?}: expected `word count`"),
                ));
            }
        };
        let count = count.parse::<u64>().map_err(|e| {
            WordsegError::invalid_format(
                "freq",
                format!("invalid line {lineno}: {line:?}: {e}"),
            )
        })?;
        self.add_entry(word, count)
    }

    /// 指定されたリーダーから頻度辞書を読み込みます。
    ///
    /// 最初の不正な行で読み込みを中断します。
    ///
    /// # エラー
    ///
    /// 入力形式が不正な場合、または読み込みに失敗した場合にエラーを返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut lexicon = Self::new();
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line?;
            lexicon.process_line(i + 1, &line)?;
        }
        Ok(lexicon)
    }

    /// ファイルから頻度辞書を読み込みます。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// 異なり単語数を返します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// 単語IDに対応する単語を返します。
    pub fn word(&self, word_id: WordId) -> Option<&str> {
        self.words.get(word_id.index()).map(String::as_str)
    }

    /// 単語に割り当てられたIDを返します。
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.word_ids.get(word).copied()
    }

    /// 単語ID順の頻度を返します。
    #[inline(always)]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// 単語ID順に`(単語, ID)`を返すイテレータを作成します。
    pub fn iter(&self) -> impl Iterator<Item = (&str, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.as_str(), WordId::new(i as u32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::hashmap;

    #[test]
    fn test_load_freq_lexicon() {
        let data = "\
猫 3
犬\t1
  猫   2
";
        let lexicon = FrequencyLexicon::from_reader(data.as_bytes()).unwrap();
        assert_eq!(lexicon.num_words(), 2);
        assert_eq!(lexicon.word_id("猫"), Some(WordId(0)));
        assert_eq!(lexicon.word_id("犬"), Some(WordId(1)));
        assert_eq!(lexicon.word(WordId(1)), Some("犬"));
        assert_eq!(lexicon.counts(), &[5, 1]);

        let ids: hashbrown::HashMap<_, _> = lexicon.iter().collect();
        assert_eq!(ids, hashmap!["猫" => WordId(0), "犬" => WordId(1)]);
    }

    #[test]
    fn test_missing_count() {
        let result = FrequencyLexicon::from_reader("cat 3\ncat".as_bytes());
        match result {
            Err(WordsegError::InvalidFormat(e)) => {
                assert!(e.message().contains("line 2"), "{}", e.message());
                assert!(e.message().contains("\"cat\""), "{}", e.message());
            }
            _ => panic!("unexpected result"),
        }
    }

    #[test]
    fn test_too_many_fields() {
        let mut lexicon = FrequencyLexicon::new();
        assert!(lexicon.process_line(1, "cat 3 4").is_err());
    }

    #[test]
    fn test_empty_line() {
        let mut lexicon = FrequencyLexicon::new();
        assert!(lexicon.process_line(1, "").is_err());
    }

    #[test]
    fn test_invalid_count() {
        let mut lexicon = FrequencyLexicon::new();
        assert!(lexicon.process_line(1, "cat -1").is_err());
        assert!(lexicon.process_line(2, "cat 1.5").is_err());
        assert!(lexicon.process_line(3, "cat three").is_err());
        assert_eq!(lexicon.num_words(), 0);
    }
}
