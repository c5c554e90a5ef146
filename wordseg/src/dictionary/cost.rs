//! 単語のユニグラムコスト
//!
//! 単語IDで引けるコスト配列と、そのバイナリ形式での読み書きを提供します。
//!
//! # ファイル形式
//!
//! | オフセット | 内容 |
//! |---|---|
//! | 0 | ASCIIヘッダ`wordseg.UniCost.v1` (18バイト) |
//! | 18 | 要素数`N` (リトルエンディアンi32) |
//! | 22 | `N`個のリトルエンディアンf32 |

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::dictionary::word_idx::WordId;
use crate::errors::{Result, WordsegError};

/// コストファイルの先頭に置かれるヘッダ。
pub const UNI_COST_MAGIC: &[u8] = b"wordseg.UniCost.v1";

const UNI_COST_MAGIC_LEN: usize = UNI_COST_MAGIC.len();

/// 読み込み時に事前確保するコスト数の上限
const MAX_PREALLOCATED_COSTS: usize = 1 << 16;

/// 未知語に割り当てられるコスト。
///
/// どの開始位置からも一単位の辺が張られるため、ラティスは常に連結になります。
pub const UNKNOWN_WORD_COST: f32 = 20.0;

/// 単語IDで引けるユニグラムコストの配列
///
/// コストは負の対数確率で、小さいほど出現しやすい単語を表します。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnigramCost {
    costs: Vec<f32>,
}

impl UnigramCost {
    /// コストの配列から新しいインスタンスを作成します。
    pub const fn new(costs: Vec<f32>) -> Self {
        Self { costs }
    }

    /// 要素数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// 要素が一つもない場合に`true`を返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// 生のコスト配列を返します。
    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &self.costs
    }

    /// 単語IDに対応するコストを返します。
    ///
    /// 配列の範囲外、または有限でない値の場合は`None`を返します。
    #[inline(always)]
    pub fn get(&self, word_id: WordId) -> Option<f32> {
        self.costs
            .get(word_id.index())
            .copied()
            .filter(|c| c.is_finite())
    }

    /// ラティス構築時に使用する単語コストを返します。
    ///
    /// 未知語や定義されていないエントリには[`UNKNOWN_WORD_COST`]を返します。
    #[inline(always)]
    pub fn word_cost(&self, word_id: Option<WordId>) -> f32 {
        word_id
            .and_then(|id| self.get(id))
            .unwrap_or(UNKNOWN_WORD_COST)
    }

    /// コスト配列をライターに書き出します。
    ///
    /// # エラー
    ///
    /// 要素数がi32に収まらない場合、または書き込みに失敗した場合にエラーを返します。
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let num_costs = i32::try_from(self.costs.len())?;
        wtr.write_all(UNI_COST_MAGIC)?;
        wtr.write_all(&num_costs.to_le_bytes())?;
        for cost in &self.costs {
            wtr.write_all(&cost.to_le_bytes())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// リーダーからコスト配列を読み込みます。
    ///
    /// # エラー
    ///
    /// ヘッダが一致しない場合は[`WordsegError::InvalidModel`]を、
    /// データが途中で途切れている場合はI/Oエラーを返します。
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; UNI_COST_MAGIC_LEN];
        rdr.read_exact(&mut magic)?;
        if &magic[..] != UNI_COST_MAGIC {
            return Err(WordsegError::invalid_model("cost", "invalid cost file"));
        }

        let mut buf = [0; 4];
        rdr.read_exact(&mut buf)?;
        let num_costs = usize::try_from(i32::from_le_bytes(buf)).map_err(|_| {
            WordsegError::invalid_model("cost", "invalid cost file: negative number of costs")
        })?;

        // ヘッダの要素数は検証前の値なので、確保量には上限を設ける
        let mut costs = Vec::with_capacity(num_costs.min(MAX_PREALLOCATED_COSTS));
        for _ in 0..num_costs {
            rdr.read_exact(&mut buf)?;
            costs.push(f32::from_le_bytes(buf));
        }
        Ok(Self { costs })
    }

    /// ファイルにコスト配列を書き出します。
    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let wtr = BufWriter::new(File::create(path)?);
        self.write(wtr)
    }

    /// ファイルからコスト配列を読み込みます。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rdr = BufReader::new(File::open(path)?);
        Self::read(rdr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_write_layout() {
        let cost = UnigramCost::new(vec![1.5, -0.25]);
        let mut buf = vec![];
        cost.write(&mut buf).unwrap();

        let mut expected = b"wordseg.UniCost.v1".to_vec();
        expected.extend_from_slice(&[2, 0, 0, 0]);
        expected.extend_from_slice(&1.5f32.to_le_bytes());
        expected.extend_from_slice(&(-0.25f32).to_le_bytes());
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_round_trip_bits() {
        let values = vec![
            0.0,
            0.587_786_65,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::INFINITY,
            f32::NAN,
            1e-30,
        ];
        let cost = UnigramCost::new(values.clone());
        let mut buf = vec![];
        cost.write(&mut buf).unwrap();

        let other = UnigramCost::read(buf.as_slice()).unwrap();
        assert_eq!(other.len(), values.len());
        for (a, b) in values.iter().zip(other.as_slice()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_round_trip_empty() {
        let cost = UnigramCost::default();
        let mut buf = vec![];
        cost.write(&mut buf).unwrap();
        assert_eq!(buf.len(), UNI_COST_MAGIC_LEN + 4);
        assert!(UnigramCost::read(buf.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn test_broken_header() {
        let cost = UnigramCost::new(vec![1.0, 2.0]);
        for i in 0..UNI_COST_MAGIC_LEN {
            let mut buf = vec![];
            cost.write(&mut buf).unwrap();
            buf[i] = buf[i].wrapping_add(1);
            let result = UnigramCost::read(buf.as_slice());
            assert!(
                matches!(result, Err(WordsegError::InvalidModel(_))),
                "corrupted byte {i} was accepted"
            );
        }
    }

    #[test]
    fn test_negative_count() {
        let mut buf = UNI_COST_MAGIC.to_vec();
        buf.extend_from_slice(&(-1i32).to_le_bytes());
        let result = UnigramCost::read(buf.as_slice());
        assert!(matches!(result, Err(WordsegError::InvalidModel(_))));
    }

    #[test]
    fn test_truncated() {
        let cost = UnigramCost::new(vec![1.0, 2.0, 3.0]);
        let mut buf = vec![];
        cost.write(&mut buf).unwrap();
        buf.truncate(buf.len() - 1);
        match UnigramCost::read(buf.as_slice()) {
            Err(WordsegError::IoError(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_count_exceeds_data() {
        let mut buf = UNI_COST_MAGIC.to_vec();
        buf.extend_from_slice(&i32::MAX.to_le_bytes());
        buf.extend_from_slice(&1.0f32.to_le_bytes());
        match UnigramCost::read(buf.as_slice()) {
            Err(WordsegError::IoError(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_word_cost_fallback() {
        let cost = UnigramCost::new(vec![1.0, f32::INFINITY, f32::NAN]);
        assert_eq!(cost.word_cost(Some(WordId(0))), 1.0);
        assert_eq!(cost.word_cost(Some(WordId(1))), UNKNOWN_WORD_COST);
        assert_eq!(cost.word_cost(Some(WordId(2))), UNKNOWN_WORD_COST);
        assert_eq!(cost.word_cost(Some(WordId(3))), UNKNOWN_WORD_COST);
        assert_eq!(cost.word_cost(None), UNKNOWN_WORD_COST);
    }
}
