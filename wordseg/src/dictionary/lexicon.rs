//! 辞書の語彙情報を管理するモジュール
//!
//! このモジュールは、単語の表層形から単語IDを引くための語彙構造と、
//! ラティス構築時に使用される増分探索のインターフェース[`LexiconOracle`]を提供します。

mod trie;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};

use crate::dictionary::word_idx::WordId;
use crate::errors::{Result, WordsegError};

pub use crate::dictionary::lexicon::trie::TrieState;

use crate::dictionary::lexicon::trie::Trie;

/// 語彙ファイルを識別するマジックバイト。
pub const LEXICON_MAGIC: &[u8] = b"wordseg.Lexicon.v1\n";

const LEXICON_MAGIC_LEN: usize = LEXICON_MAGIC.len();

/// 一単位ずつ延長しながら語彙を探索するためのインターフェース
///
/// ラティス構築器は開始位置ごとに[`initial_state`](Self::initial_state)で
/// 新しいカーソルを取得し、[`traverse`](Self::traverse)が`is_valid == false`を
/// 返した時点でその開始位置からの延長を打ち切ります。
pub trait LexiconOracle {
    /// 探索カーソルの型
    type State;

    /// まだ何も消費していないカーソルを作成します。
    fn initial_state(&self) -> Self::State;

    /// カーソルを一単位進めます。
    ///
    /// # 引数
    ///
    /// * `state` - 探索カーソル
    /// * `unit` - 消費する原子単位
    fn traverse(&self, state: &mut Self::State, unit: &str) -> TraverseResult;
}

/// [`LexiconOracle::traverse`]の結果
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TraverseResult {
    /// 開始位置からここまでの単位列が語彙に一致する場合、その単語ID
    pub word_id: Option<WordId>,

    /// さらに延長すれば語彙に一致する可能性がある場合は`true`
    pub is_valid: bool,
}

/// 語彙の一エントリ
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// 表層形
    pub surface: String,

    /// 単語ID
    pub word_id: u32,
}

#[derive(Archive, Serialize, Deserialize)]
struct LexiconData {
    entries: Vec<LexiconEntry>,
}

/// 表層形から単語IDへの写像を保持する語彙
pub struct Lexicon {
    trie: Trie,
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// `(表層形, 単語ID)`のレコードから新しいインスタンスを構築します。
    ///
    /// # エラー
    ///
    /// 表層形が空、または重複している場合にエラーを返します。
    pub fn from_records<I, K>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, WordId)>,
        K: Into<String>,
    {
        let entries = records
            .into_iter()
            .map(|(surface, word_id)| LexiconEntry {
                surface: surface.into(),
                word_id: word_id.get(),
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut trie = Trie::new();
        for e in &entries {
            trie.insert(&e.surface, WordId::new(e.word_id))?;
        }
        Ok(Self { trie, entries })
    }

    /// 登録されている単語数を返します。
    #[inline(always)]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// 登録順のエントリを返します。
    #[inline(always)]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// 表層形に完全一致する単語IDを返します。
    pub fn exact_match(&self, surface: &str) -> Option<WordId> {
        let mut state = TrieState::new();
        self.trie.traverse(&mut state, surface)
    }

    /// 語彙をバイナリ形式でライターに書き出します。
    ///
    /// 出力はマジックバイトとrkyvアーカイブから構成されます。
    ///
    /// # エラー
    ///
    /// 書き込みやシリアライゼーションに失敗した場合にエラーを返します。
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let data = LexiconData {
            entries: self.entries.clone(),
        };
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&data).map_err(|e| {
            WordsegError::invalid_state("rkyv serialization failed".to_string(), e.to_string())
        })?;
        wtr.write_all(LEXICON_MAGIC)?;
        wtr.write_all(&bytes)?;
        wtr.flush()?;
        Ok(())
    }

    /// リーダーから語彙を読み込みます。
    ///
    /// # エラー
    ///
    /// マジックバイトが一致しない場合、またはアーカイブの検証に失敗した場合に
    /// [`WordsegError::InvalidModel`]を返します。
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; LEXICON_MAGIC_LEN];
        rdr.read_exact(&mut magic)?;
        if &magic[..] != LEXICON_MAGIC {
            return Err(WordsegError::invalid_model(
                "lexicon",
                "The magic number of the input lexicon mismatches.",
            ));
        }

        let mut buffer = Vec::new();
        rdr.read_to_end(&mut buffer)?;

        let mut aligned_bytes = AlignedVec::<16>::with_capacity(buffer.len());
        aligned_bytes.extend_from_slice(&buffer);

        let data = rkyv::from_bytes::<LexiconData, rkyv::rancor::Error>(&aligned_bytes)
            .map_err(|e| {
                WordsegError::invalid_model(
                    "lexicon",
                    format!("rkyv validation failed. The lexicon file may be corrupted: {e}"),
                )
            })?;

        Self::from_entries(data.entries)
    }

    /// ファイルに語彙を書き出します。
    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let wtr = BufWriter::new(File::create(path)?);
        self.write(wtr)
    }

    /// ファイルから語彙を読み込みます。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rdr = BufReader::new(File::open(path)?);
        Self::read(rdr)
    }
}

impl LexiconOracle for Lexicon {
    type State = TrieState;

    #[inline(always)]
    fn initial_state(&self) -> TrieState {
        TrieState::new()
    }

    #[inline(always)]
    fn traverse(&self, state: &mut TrieState, unit: &str) -> TraverseResult {
        let word_id = self.trie.traverse(state, unit);
        TraverseResult {
            word_id,
            is_valid: self.trie.is_extensible(state),
        }
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("num_entries", &self.num_entries())
            .field("num_nodes", &self.trie.num_nodes())
            .finish()
    }
}
