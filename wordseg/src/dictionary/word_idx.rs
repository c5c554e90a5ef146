//! 単語識別子
//!
//! このモジュールは、辞書内の単語を一意に識別するための
//! インデックス型を提供します。

use std::fmt;

use crate::utils::FromU32;

/// 単語の識別子
///
/// 学習時に初出順で割り当てられる密な整数です。
/// すべての単語IDは`[0, N)`の連続した範囲に収まります。
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(transparent)]
pub struct WordId(pub u32);

impl WordId {
    /// 新しいインスタンスを作成します。
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// 内部のu32値を取得します。
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// 配列の添字として使える値を返します。
    #[inline(always)]
    pub fn index(self) -> usize {
        usize::from_u32(self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
