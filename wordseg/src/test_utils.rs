//! テスト用ユーティリティ
//!
//! テストコードで使用する便利なマクロや関数を提供します。

use crate::Dictionary;
use crate::trainer::{FrequencyLexicon, Smoothing, Trainer};

macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

pub(crate) use hashmap;

/// 頻度辞書のテキストから辞書を学習します。
pub(crate) fn train_dictionary(freq: &str, smoothing: Smoothing) -> Dictionary {
    let freq = FrequencyLexicon::from_reader(freq.as_bytes()).unwrap();
    Trainer::new().smoothing(smoothing).train(&freq).unwrap()
}
